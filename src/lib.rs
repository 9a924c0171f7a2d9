#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

use crate::constants::{WELCOME_DELAY_1_MS, WELCOME_DELAY_2_MS};
use crate::core::{SimContext, Viewport};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("festive-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #bg-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #bg-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_backing_size(&canvas, &ctx2d);
    let reduce_motion = dom::prefers_reduced_motion();
    let sim = Rc::new(RefCell::new(SimContext::new(
        Viewport::new(w as f32, h as f32),
        reduce_motion,
        rand::random::<u64>(),
    )));

    // Keep backing store, transform and sim viewport in sync with the window
    wire_canvas_resize(&window, "resize", &canvas, &ctx2d, &sim);
    wire_canvas_resize(&window, "load", &canvas, &ctx2d, &sim);

    let audio = audio::new_shared();
    let wiring = events::InteractionWiring {
        sim: sim.clone(),
        audio: audio.clone(),
    };
    events::wire_pointer_trail(sim.clone());
    events::wire_surprise_button(&document, wiring.clone());
    events::wire_global_keydown(wiring);
    events::wire_audio_toggle(&document, audio.clone());
    events::wire_visibility(&document, audio);

    // A couple of welcome bursts shortly after load
    if !reduce_motion {
        schedule_welcome_firework(sim.clone(), WELCOME_DELAY_1_MS, 0.25, 0.18);
        schedule_welcome_firework(sim.clone(), WELCOME_DELAY_2_MS, 0.75, 0.14);
    }

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        sim,
        ctx2d,
        last_instant: Instant::now(),
    })));

    Ok(())
}

fn wire_canvas_resize(
    window: &web::Window,
    event: &str,
    canvas: &web::HtmlCanvasElement,
    ctx2d: &web::CanvasRenderingContext2d,
    sim: &Rc<RefCell<SimContext>>,
) {
    let canvas = canvas.clone();
    let ctx2d = ctx2d.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas, &ctx2d);
        sim.borrow_mut().set_viewport(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn schedule_welcome_firework(
    sim: Rc<RefCell<SimContext>>,
    delay_ms: i32,
    frac_x: f32,
    frac_y: f32,
) {
    let closure = Closure::wrap(Box::new(move || {
        let mut sim = sim.borrow_mut();
        let vp = sim.viewport;
        sim.spawn_firework(Some(Vec2::new(vp.width * frac_x, vp.height * frac_y)));
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    closure.forget();
}
