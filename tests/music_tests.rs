// Host-side tests for the pure music parameters and melody scheduling.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod music {
    include!("../src/core/music.rs");
}

use music::*;
use rand::prelude::*;

#[test]
fn melody_cycles_the_pattern() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut line = MelodyLine::new();
    let freqs: Vec<f32> = (0..MELODY_PATTERN.len() * 2)
        .map(|_| line.next_note(&mut rng).frequency_hz)
        .collect();
    for (i, f) in freqs.iter().enumerate() {
        assert_eq!(*f, MELODY_PATTERN[i % MELODY_PATTERN.len()]);
    }
}

#[test]
fn melody_reset_restarts_from_the_top() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut line = MelodyLine::new();
    for _ in 0..3 {
        line.next_note(&mut rng);
    }
    line.reset();
    assert_eq!(line.next_note(&mut rng).frequency_hz, MELODY_PATTERN[0]);
}

#[test]
fn note_envelope_is_ordered() {
    let mut rng = StdRng::seed_from_u64(2);
    let note = MelodyLine::new().next_note(&mut rng);
    assert!(note.attack_sec > 0.0);
    assert!(note.attack_sec < note.release_sec);
    assert!(note.release_sec < note.stop_sec);
    assert!(note.peak_gain > MASTER_FLOOR);
}

#[test]
fn note_pan_stays_within_spread() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut line = MelodyLine::new();
    for _ in 0..1_000 {
        let pan = line.next_note(&mut rng).pan;
        assert!(pan.abs() <= NOTE_PAN_SPREAD / 2.0, "pan {pan}");
    }
}

#[test]
fn melody_frequencies_are_audible() {
    for f in MELODY_PATTERN {
        assert!((20.0..20_000.0).contains(&f), "frequency {f}");
    }
}

#[test]
fn master_level_sits_in_the_quiet_band() {
    // fades converge here; an ambient layer, not foreground music
    assert!((0.07..=0.08).contains(&MASTER_LEVEL));
    assert!(MASTER_FLOOR > 0.0, "exponential ramps need a nonzero floor");
    assert!(MASTER_FLOOR < MASTER_LEVEL);
    assert!(FADE_IN_SEC > 0.0);
    assert!(FADE_OUT_SEC > 0.0);
    assert!(FADE_OUT_SEC < FADE_IN_SEC);
}

#[test]
fn pad_layers_are_detuned_symmetrically() {
    assert_eq!(PAD_DETUNE_CENTS.len(), 3);
    let sum: f32 = PAD_DETUNE_CENTS.iter().sum();
    assert_eq!(sum, 0.0);
    assert!(PAD_DETUNE_CENTS.contains(&0.0), "one layer stays in tune");
}

#[test]
fn pad_filter_sits_above_the_fundamental() {
    assert!(PAD_BASE_HZ > 20.0);
    assert!(PAD_FILTER_HZ > PAD_BASE_HZ);
    // LFO must never drive the cutoff negative
    assert!(PAD_LFO_DEPTH_HZ < PAD_FILTER_HZ);
    assert!(PAD_LFO_HZ < 1.0, "cutoff movement is sub-audio");
    assert!(PAD_LAYER_GAIN > 0.0 && PAD_LAYER_GAIN < 0.1);
}

#[test]
fn melody_interval_is_positive() {
    assert!(MELODY_INTERVAL_MS > 0);
    // each note finishes before the next two arrive
    assert!(NOTE_STOP_SEC * 1000.0 < 2.0 * MELODY_INTERVAL_MS as f64);
}
