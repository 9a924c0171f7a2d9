// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod render_constants {
    include!("../src/constants.rs");
}
mod sim_constants {
    include!("../src/core/constants.rs");
}

use render_constants::*;
use sim_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_tiers_match_display_classes() {
    assert_eq!(FIREWORK_SPARKS_SMALL, 20);
    assert_eq!(FIREWORK_SPARKS_LARGE, 40);
    assert_eq!(CONFETTI_SPARKS_SMALL, 30);
    assert_eq!(CONFETTI_SPARKS_LARGE, 80);
    assert_eq!(HEART_SPARKS_SMALL, 8);
    assert_eq!(HEART_SPARKS_LARGE, 20);
    assert_eq!(SURPRISE_FIREWORKS_SMALL, 2);
    assert_eq!(SURPRISE_FIREWORKS_LARGE, 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn large_tier_always_outnumbers_small() {
    assert!(FLOATERS_LARGE > FLOATERS_SMALL);
    assert!(FIREWORK_SPARKS_LARGE > FIREWORK_SPARKS_SMALL);
    assert!(CONFETTI_SPARKS_LARGE > CONFETTI_SPARKS_SMALL);
    assert!(HEART_SPARKS_LARGE > HEART_SPARKS_SMALL);
    assert!(SURPRISE_FIREWORKS_LARGE > SURPRISE_FIREWORKS_SMALL);
}

#[test]
fn palettes_are_well_formed_css_colors() {
    for c in FIREWORK_PALETTE
        .iter()
        .chain(CONFETTI_PALETTE.iter())
        .chain(HEART_PALETTE.iter())
        .chain([POP_COLOR].iter())
    {
        assert!(c.starts_with('#'), "{c}");
        assert!(c.len() == 4 || c.len() == 7, "{c}");
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()), "{c}");
    }
    assert_eq!(FIREWORK_PALETTE.len(), 5);
    assert_eq!(CONFETTI_PALETTE.len(), 5);
    assert_eq!(HEART_PALETTE.len(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_constants_bound_the_echo() {
    assert_eq!(TRAIL_MAX_POINTS, 20);
    assert!(TRAIL_LIFE > 0.0);
    assert!(TRAIL_DECAY > 1.0, "trail fades faster than real time");
    assert!(TRAIL_GLOW_ALPHA > 0.0 && TRAIL_GLOW_ALPHA < 1.0);
    assert!(TRAIL_GLOW_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_roll_is_a_rare_event() {
    assert!(AMBIENT_FIREWORK_CHANCE > 0.0);
    assert!(AMBIENT_FIREWORK_CHANCE < 0.05);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn viewport_bounds_are_sane() {
    assert!(MIN_VIEWPORT_SIDE > 0.0);
    assert!(SMALL_SCREEN_BELOW > MIN_VIEWPORT_SIDE);
    assert!(VIEWPORT_PAD > 0.0);
}

#[test]
fn frame_reference_is_sixty_hz() {
    assert!((1000.0 / FRAME_MS - 60.0).abs() < 0.1);
    assert!(DT_CLAMP_MS > FRAME_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spark_physics_constants_are_positive() {
    assert!(SPARK_GRAVITY > 0.0);
    assert!(SPARK_VELOCITY_SCALE > 0.0 && SPARK_VELOCITY_SCALE <= 1.0);
    assert!(SPARK_SPEED_MIN > 0.0);
    assert!(SPARK_SPEED_SPAN > 0.0);
    assert!(CONFETTI_SPIN_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_lifetimes_are_ordered() {
    // confetti and hearts linger longer than firework sparks
    assert!(CONFETTI_LIFE_MIN >= FIREWORK_LIFE_MIN);
    assert!(HEART_LIFE_MIN >= FIREWORK_LIFE_MIN);
    assert!(POP_LIFE_BASE < FIREWORK_LIFE_MIN, "pops fade first");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_are_in_range() {
    assert!(FLOATER_ALPHA_SCALE > 0.0 && FLOATER_ALPHA_SCALE <= 1.0);
    assert!(SKY_MID_STOP_MAX > 0.0 && SKY_MID_STOP_MAX < 1.0);
    assert!(CONFETTI_ASPECT > 1.0);
    assert!(HEART_SCALE > 0.0 && HEART_SCALE < 1.0);
    assert!(WELCOME_DELAY_2_MS > WELCOME_DELAY_1_MS);
    assert!(WELCOME_DELAY_1_MS > 0);
}
