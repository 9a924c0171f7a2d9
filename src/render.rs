// Canvas2D painting of one simulation frame. All state lives in the
// `SimContext`; nothing here mutates it.

use web_sys as web;

use crate::constants::*;
use crate::core::constants::TRAIL_LIFE;
use crate::core::{Particle, SimContext, Spark, SparkKind, TrailPoint};

pub fn draw_frame(ctx: &web::CanvasRenderingContext2d, sim: &SimContext) {
    let w = sim.viewport.width as f64;
    let h = sim.viewport.height as f64;

    ctx.clear_rect(0.0, 0.0, w, h);
    draw_background(ctx, w, h, sim.grad_phase);

    for p in &sim.particles {
        draw_particle(ctx, p);
    }
    for s in &sim.sparks {
        draw_spark(ctx, s);
    }
    for t in &sim.trail {
        draw_trail_point(ctx, t);
    }
    ctx.set_global_alpha(1.0);
}

/// Vertical night-sky ramp whose middle stop breathes, under a static
/// radial vignette.
fn draw_background(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64, phase: f32) {
    let g = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    let mid = phase.sin().abs() * SKY_MID_STOP_MAX;
    _ = g.add_color_stop(0.0, SKY_TOP);
    _ = g.add_color_stop(mid, SKY_MID);
    _ = g.add_color_stop(1.0, SKY_BOTTOM);
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill_rect(0.0, 0.0, w, h);

    if let Ok(vignette) =
        ctx.create_radial_gradient(w / 2.0, h / 2.0, w.min(h) / 4.0, w / 2.0, h / 2.0, w.max(h))
    {
        _ = vignette.add_color_stop(0.0, VIGNETTE_INNER);
        _ = vignette.add_color_stop(1.0, VIGNETTE_OUTER);
        ctx.set_fill_style_canvas_gradient(&vignette);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

fn draw_particle(ctx: &web::CanvasRenderingContext2d, p: &Particle) {
    ctx.set_global_alpha(p.alpha as f64 * FLOATER_ALPHA_SCALE);
    ctx.set_fill_style_str(FLOATER_COLOR);
    ctx.begin_path();
    _ = ctx.arc(
        p.pos.x as f64,
        p.pos.y as f64,
        p.size as f64,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
}

fn draw_spark(ctx: &web::CanvasRenderingContext2d, s: &Spark) {
    ctx.save();
    ctx.set_global_alpha(s.opacity() as f64);
    ctx.set_fill_style_str(s.color);
    let x = s.pos.x as f64;
    let y = s.pos.y as f64;
    match s.kind {
        SparkKind::Confetti => {
            let size = s.size as f64;
            _ = ctx.translate(x, y);
            _ = ctx.rotate(s.rotation() as f64);
            ctx.fill_rect(
                -size / CONFETTI_ASPECT,
                -size / CONFETTI_ASPECT,
                size * CONFETTI_ASPECT,
                size,
            );
        }
        SparkKind::Heart => {
            _ = ctx.translate(x, y);
            _ = ctx.scale(HEART_SCALE, HEART_SCALE);
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.bezier_curve_to(-3.0, -6.0, -12.0, -6.0, -12.0, 0.0);
            ctx.bezier_curve_to(-12.0, 8.0, -2.0, 14.0, 0.0, 20.0);
            ctx.bezier_curve_to(2.0, 14.0, 12.0, 8.0, 12.0, 0.0);
            ctx.bezier_curve_to(12.0, -6.0, 3.0, -6.0, 0.0, 0.0);
            ctx.close_path();
            ctx.fill();
        }
        SparkKind::Plain => {
            ctx.begin_path();
            _ = ctx.arc(x, y, s.size as f64, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
    ctx.restore();
}

fn draw_trail_point(ctx: &web::CanvasRenderingContext2d, t: &TrailPoint) {
    let fade = (t.life / TRAIL_LIFE) as f64;
    ctx.set_global_alpha(fade * TRAIL_GLOW_ALPHA);
    ctx.set_fill_style_str(TRAIL_COLOR);
    ctx.begin_path();
    _ = ctx.arc(
        t.pos.x as f64,
        t.pos.y as f64,
        fade * TRAIL_GLOW_RADIUS,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
}
