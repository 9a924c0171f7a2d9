pub mod keyboard;
pub mod pointer;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio;
use crate::core::SimContext;
use crate::dom;
use crate::ui;

pub use keyboard::*;
pub use pointer::*;

/// Everything the interaction handlers need, cloneable into closures.
#[derive(Clone)]
pub struct InteractionWiring {
    pub sim: Rc<RefCell<SimContext>>,
    pub audio: audio::SharedAudio,
}

impl InteractionWiring {
    /// The surprise: bursts at the activation point plus music start. The
    /// gesture doubles as the audio-unlock the platform requires.
    pub fn fire_surprise(&self, at: Vec2) {
        self.sim.borrow_mut().trigger_surprise(at);
        audio::start_music(&self.audio);
        if let Some(doc) = dom::window_document() {
            ui::set_audio_toggle_state(&doc, audio::is_running(&self.audio));
        }
    }

    /// Activation point for non-pointer triggers: the trigger button's
    /// center, or the viewport center when the button is missing.
    pub fn surprise_anchor(&self) -> Vec2 {
        if let Some(doc) = dom::window_document() {
            if let Some(el) = doc.get_element_by_id("surprise-btn") {
                let rect = el.get_bounding_client_rect();
                return Vec2::new(
                    (rect.x() + rect.width() / 2.0) as f32,
                    (rect.y() + rect.height() / 2.0) as f32,
                );
            }
        }
        let vp = self.sim.borrow().viewport;
        Vec2::new(vp.width / 2.0, vp.height / 2.0)
    }
}

/// Hiding the tab silences the music. Coming back never auto-resumes;
/// audio only restarts on an explicit gesture.
pub fn wire_visibility(document: &web::Document, audio: audio::SharedAudio) {
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if doc.hidden() && audio::is_running(&audio) {
            audio::stop_music(&audio);
            ui::set_audio_toggle_state(&doc, false);
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The mute toggle flips on the engine's actual state, so a surprise that
/// already started the music is reflected correctly.
pub fn wire_audio_toggle(document: &web::Document, audio: audio::SharedAudio) {
    dom::add_click_listener(document, "audio-toggle", move |_ev| {
        let playing = audio::is_running(&audio);
        if playing {
            audio::stop_music(&audio);
        } else {
            audio::start_music(&audio);
        }
        if let Some(doc) = dom::window_document() {
            ui::set_audio_toggle_state(&doc, audio::is_running(&audio));
        }
    });
}
