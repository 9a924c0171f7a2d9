/// Render-side tuning constants for the background canvas.
///
/// The simulation's own tuning lives in `core/constants.rs`; these only
/// affect how a frame is painted.
// Night-sky gradient stops; the middle stop position oscillates each frame
pub const SKY_TOP: &str = "#0b1026";
pub const SKY_MID: &str = "#24103b";
pub const SKY_BOTTOM: &str = "#2b1055";
pub const SKY_MID_STOP_MAX: f32 = 0.8;

// Static radial vignette over the gradient
pub const VIGNETTE_INNER: &str = "rgba(0,0,0,0)";
pub const VIGNETTE_OUTER: &str = "rgba(0,0,0,0.35)";

// Floaters draw white, slightly dimmer than their computed alpha
pub const FLOATER_COLOR: &str = "#ffffff";
pub const FLOATER_ALPHA_SCALE: f64 = 0.9;

// Confetti rectangles are wider than tall around their center
pub const CONFETTI_ASPECT: f64 = 1.6;

// Hearts are authored at unit scale and drawn shrunk
pub const HEART_SCALE: f64 = 0.6;

// Cursor trail glow, scaled by remaining life
pub const TRAIL_COLOR: &str = "#ffffff";
pub const TRAIL_GLOW_ALPHA: f64 = 0.12;
pub const TRAIL_GLOW_RADIUS: f64 = 10.0;

// Welcome fireworks shortly after load
pub const WELCOME_DELAY_1_MS: i32 = 900;
pub const WELCOME_DELAY_2_MS: i32 = 1700;
