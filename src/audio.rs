// Web Audio shell around the pure music parameters: a warm detuned-saw pad
// under a lowpass with slow LFO movement, plus melody notes scheduled on an
// interval timer. Everything no-ops when the platform has no audio support.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::music::*;

/// Lazily-built singleton; `None` until the first user gesture, and forever
/// `None` when `AudioContext` is unavailable.
pub type SharedAudio = Rc<RefCell<Option<AudioEngine>>>;

pub fn new_shared() -> SharedAudio {
    Rc::new(RefCell::new(None))
}

pub struct AudioEngine {
    ctx: web::AudioContext,
    master: web::GainNode,
    running: bool,
    melody: MelodyLine,
    melody_handle: Option<i32>,
    rng: StdRng,
    // Pad nodes run for the page lifetime; held so the graph stays documented
    _pad_layers: Vec<(web::OscillatorNode, web::GainNode)>,
    _pad_lfo: (web::OscillatorNode, web::GainNode),
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl AudioEngine {
    pub fn new() -> Result<Self, ()> {
        let ctx = match web::AudioContext::new() {
            Ok(c) => c,
            Err(e) => {
                log::error!("AudioContext error: {:?}", e);
                return Err(());
            }
        };

        // Master starts near-silent; playback is always a fade, never a cut
        let master = create_gain(&ctx, MASTER_FLOOR, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());

        let (pad_layers, pad_lfo) = build_pad(&ctx, &master)?;

        Ok(Self {
            ctx,
            master,
            running: false,
            melody: MelodyLine::new(),
            melody_handle: None,
            rng: StdRng::from_entropy(),
            _pad_layers: pad_layers,
            _pad_lfo: pad_lfo,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn fade_in(&mut self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        let now = self.ctx.current_time();
        let gain = self.master.gain();
        _ = gain.cancel_scheduled_values(now);
        _ = gain.set_value_at_time(gain.value(), now);
        _ = gain.linear_ramp_to_value_at_time(MASTER_LEVEL, now + FADE_IN_SEC);
        self.melody.reset();
        self.running = true;
    }

    fn fade_out(&mut self) {
        let now = self.ctx.current_time();
        let gain = self.master.gain();
        _ = gain.cancel_scheduled_values(now);
        _ = gain.set_value_at_time(gain.value(), now);
        _ = gain.linear_ramp_to_value_at_time(MASTER_FLOOR, now + FADE_OUT_SEC);
        self.running = false;
    }

    fn stop_melody(&mut self) {
        if let Some(handle) = self.melody_handle.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(handle);
            }
        }
    }

    /// Fire one enveloped melody note, stereo-placed when the platform
    /// offers a panner and routed straight to master when it does not.
    fn schedule_note(&mut self) {
        let note = self.melody.next_note(&mut self.rng);
        let now = self.ctx.current_time();

        let osc = match web::OscillatorNode::new(&self.ctx) {
            Ok(o) => o,
            Err(_) => return,
        };
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(note.frequency_hz);

        let gain = match web::GainNode::new(&self.ctx) {
            Ok(g) => g,
            Err(_) => return,
        };
        let g = gain.gain();
        _ = g.set_value_at_time(MASTER_FLOOR, now);
        _ = g.linear_ramp_to_value_at_time(note.peak_gain, now + note.attack_sec);
        _ = g.exponential_ramp_to_value_at_time(MASTER_FLOOR, now + note.release_sec);
        _ = osc.connect_with_audio_node(&gain);

        match web::StereoPannerNode::new(&self.ctx) {
            Ok(panner) => {
                panner.pan().set_value(note.pan);
                _ = gain.connect_with_audio_node(&panner);
                _ = panner.connect_with_audio_node(&self.master);
            }
            Err(_) => {
                _ = gain.connect_with_audio_node(&self.master);
            }
        }

        _ = osc.start_with_when(now);
        _ = osc.stop_with_when(now + note.stop_sec);
    }
}

type PadNodes = (
    Vec<(web::OscillatorNode, web::GainNode)>,
    (web::OscillatorNode, web::GainNode),
);

fn build_pad(ctx: &web::AudioContext, master: &web::GainNode) -> Result<PadNodes, ()> {
    let filter = match web::BiquadFilterNode::new(ctx) {
        Ok(f) => f,
        Err(e) => {
            log::error!("BiquadFilterNode error: {:?}", e);
            return Err(());
        }
    };
    filter.set_type(web::BiquadFilterType::Lowpass);
    filter.frequency().set_value(PAD_FILTER_HZ);
    _ = filter.connect_with_audio_node(master);

    let mut layers = Vec::with_capacity(PAD_DETUNE_CENTS.len());
    for cents in PAD_DETUNE_CENTS {
        let osc = match web::OscillatorNode::new(ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("pad OscillatorNode error: {:?}", e);
                return Err(());
            }
        };
        osc.set_type(web::OscillatorType::Sawtooth);
        osc.frequency().set_value(PAD_BASE_HZ);
        osc.detune().set_value(cents);
        let layer_gain = create_gain(ctx, PAD_LAYER_GAIN, "pad layer")?;
        _ = osc.connect_with_audio_node(&layer_gain);
        _ = layer_gain.connect_with_audio_node(&filter);
        _ = osc.start();
        layers.push((osc, layer_gain));
    }

    // Gentle slow cutoff movement
    let lfo = match web::OscillatorNode::new(ctx) {
        Ok(o) => o,
        Err(e) => {
            log::error!("pad LFO error: {:?}", e);
            return Err(());
        }
    };
    lfo.frequency().set_value(PAD_LFO_HZ);
    let lfo_gain = create_gain(ctx, PAD_LFO_DEPTH_HZ, "pad LFO depth")?;
    _ = lfo.connect_with_audio_node(&lfo_gain);
    _ = lfo_gain.connect_with_audio_param(&filter.frequency());
    _ = lfo.start();

    Ok((layers, (lfo, lfo_gain)))
}

/// Start (or resume) the music: builds the graph on first call, fades the
/// master in and restarts the melody interval from the top of the pattern.
pub fn start_music(shared: &SharedAudio) {
    if shared.borrow().is_none() {
        match AudioEngine::new() {
            Ok(engine) => *shared.borrow_mut() = Some(engine),
            Err(()) => return,
        }
    }
    if let Some(engine) = shared.borrow_mut().as_mut() {
        engine.stop_melody();
        engine.fade_in();
    }
    start_melody(shared);
}

/// Fade the master out and stop scheduling melody notes. The pad keeps
/// running beneath the floor level so a later start is just another fade.
pub fn stop_music(shared: &SharedAudio) {
    if let Some(engine) = shared.borrow_mut().as_mut() {
        engine.stop_melody();
        engine.fade_out();
    }
}

pub fn is_running(shared: &SharedAudio) -> bool {
    shared.borrow().as_ref().map(|e| e.is_running()).unwrap_or(false)
}

fn start_melody(shared: &SharedAudio) {
    let window = match web::window() {
        Some(w) => w,
        None => return,
    };
    let shared_tick = shared.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(engine) = shared_tick.borrow_mut().as_mut() {
            engine.schedule_note();
        }
    }) as Box<dyn FnMut()>);
    if let Ok(handle) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        MELODY_INTERVAL_MS,
    ) {
        if let Some(engine) = shared.borrow_mut().as_mut() {
            engine.melody_handle = Some(handle);
        }
    }
    closure.forget();
}
