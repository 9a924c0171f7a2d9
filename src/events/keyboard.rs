use wasm_bindgen::JsCast;
use web_sys as web;

use super::InteractionWiring;

/// Global shortcut: the `s` key fires the surprise from anywhere.
pub fn wire_global_keydown(w: InteractionWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                match ev.key().as_str() {
                    "s" | "S" => {
                        let at = w.surprise_anchor();
                        w.fire_surprise(at);
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
