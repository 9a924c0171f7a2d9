// Pure parameters and scheduling state for the composed background music.
// The web shell turns `NoteSpec`s into oscillator/gain/panner nodes; this
// module stays DOM-free so it is testable host-side.

use rand::prelude::*;

/// A4 C5 E5 C5 A4 G4 E4 G4, a simple happy line, looped.
pub const MELODY_PATTERN: [f32; 8] = [440.0, 523.25, 659.25, 523.25, 440.0, 392.0, 330.0, 392.0];

/// One melody note every 700 ms.
pub const MELODY_INTERVAL_MS: i32 = 700;

// Warm pad: layered detuned saws through a slowly-wandering lowpass.
pub const PAD_BASE_HZ: f32 = 110.0; // A2
pub const PAD_DETUNE_CENTS: [f32; 3] = [0.0, -10.0, 10.0];
pub const PAD_LAYER_GAIN: f32 = 0.02;
pub const PAD_FILTER_HZ: f32 = 800.0;
pub const PAD_LFO_HZ: f32 = 0.03;
pub const PAD_LFO_DEPTH_HZ: f32 = 200.0;

// Master volume rides linear ramps between these, never hard cuts.
pub const MASTER_LEVEL: f32 = 0.07;
pub const MASTER_FLOOR: f32 = 0.0001;
pub const FADE_IN_SEC: f64 = 1.0;
pub const FADE_OUT_SEC: f64 = 0.6;

// Melody note envelope
pub const NOTE_PEAK_GAIN: f32 = 0.12;
pub const NOTE_ATTACK_SEC: f64 = 0.02;
pub const NOTE_RELEASE_SEC: f64 = 0.7;
pub const NOTE_STOP_SEC: f64 = 0.9;
pub const NOTE_PAN_SPREAD: f32 = 0.6; // pan drawn from ±spread/2

/// Everything the audio shell needs to schedule one melody note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteSpec {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub attack_sec: f64,
    pub release_sec: f64,
    pub stop_sec: f64,
    pub pan: f32,
}

/// Cursor into the melody pattern. Restarting playback resets to the top.
#[derive(Clone, Debug, Default)]
pub struct MelodyLine {
    index: usize,
}

impl MelodyLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next_note(&mut self, rng: &mut impl Rng) -> NoteSpec {
        let frequency_hz = MELODY_PATTERN[self.index % MELODY_PATTERN.len()];
        self.index = self.index.wrapping_add(1);
        NoteSpec {
            frequency_hz,
            peak_gain: NOTE_PEAK_GAIN,
            attack_sec: NOTE_ATTACK_SEC,
            release_sec: NOTE_RELEASE_SEC,
            stop_sec: NOTE_STOP_SEC,
            pan: (rng.gen::<f32>() - 0.5) * NOTE_PAN_SPREAD,
        }
    }
}
