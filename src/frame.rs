use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{normalized_dt, SimContext};
use crate::render;

pub struct FrameContext {
    pub sim: Rc<RefCell<SimContext>>,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        let dt = normalized_dt(elapsed_ms);

        let mut sim = self.sim.borrow_mut();
        sim.step(dt);
        render::draw_frame(&self.ctx2d, &sim);
    }
}

/// Perpetual requestAnimationFrame loop; runs until the page is torn down.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
