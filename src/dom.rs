use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::MIN_VIEWPORT_SIDE;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to an element by id; silently skipped when the
/// element is absent from the page.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
        );
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// CSS-pixel viewport size, floored so a collapsed window still renders.
pub fn css_viewport() -> (f64, f64) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (
            width.max(MIN_VIEWPORT_SIDE as f64),
            height.max(MIN_VIEWPORT_SIDE as f64),
        )
    } else {
        (MIN_VIEWPORT_SIDE as f64, MIN_VIEWPORT_SIDE as f64)
    }
}

/// Match the canvas backing store to CSS size times devicePixelRatio and
/// scale the 2D transform so drawing stays in CSS pixels. Returns the CSS
/// size for the simulation viewport.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f64, f64) {
    let (w, h) = css_viewport();
    let dpr = web::window()
        .map(|win| win.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0);
    canvas.set_width((w * dpr).floor() as u32);
    canvas.set_height((h * dpr).floor() as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{w}px"));
    _ = style.set_property("height", &format!("{h}px"));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (w, h)
}

/// The user's reduced-motion preference; ambient fireworks honor this.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}
