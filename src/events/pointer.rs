use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::InteractionWiring;
use crate::core::SimContext;
use crate::dom;

/// Every pointer move leaves a fading echo behind the cursor.
pub fn wire_pointer_trail(sim: Rc<RefCell<SimContext>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        sim.borrow_mut()
            .push_trail(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Clicking the trigger fires the surprise at the pointer; Enter/Space on
/// the focused button fires it at the button itself.
pub fn wire_surprise_button(document: &web::Document, w: InteractionWiring) {
    let click_wiring = w.clone();
    dom::add_click_listener(document, "surprise-btn", move |ev| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        click_wiring.fire_surprise(at);
    });

    if let Some(el) = document.get_element_by_id("surprise-btn") {
        let key_wiring = w;
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" | " " => {
                        ev.prevent_default();
                        let at = key_wiring.surprise_anchor();
                        key_wiring.fire_surprise(at);
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
