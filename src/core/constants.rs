// Simulation tuning constants shared by the pure core and the web shell.

// Viewport handling
pub const MIN_VIEWPORT_SIDE: f32 = 300.0; // floor applied when the window collapses
pub const SMALL_SCREEN_BELOW: f32 = 600.0; // smaller dimension under this = constrained tier
pub const VIEWPORT_PAD: f32 = 10.0; // particles reset once this far outside

// Frame delta normalization: dt == 1 at the reference frame rate
pub const DT_CLAMP_MS: f64 = 60.0;
pub const FRAME_MS: f64 = 16.666;

// Ambient floater particles, per display tier
pub const FLOATERS_SMALL: usize = 18;
pub const FLOATERS_LARGE: usize = 36;

pub const FLOATER_DRIFT_X: f32 = 0.05;
pub const FLOATER_DRIFT_Y: f32 = 0.25;
pub const FLOATER_LIFT: f32 = 0.05; // upward bias subtracted from vy
pub const FLOATER_SIZE_MIN: f32 = 0.4;
pub const FLOATER_SIZE_SPAN: f32 = 2.2;
pub const TWINKLE_RATE: f32 = 0.05;
pub const TWINKLE_PERIOD_DIV: f32 = 12.0;

// Spark physics
pub const SPARK_GRAVITY: f32 = 0.04;
pub const SPARK_VELOCITY_SCALE: f32 = 0.6;
pub const SPARK_SPEED_MIN: f32 = 1.2;
pub const SPARK_SPEED_SPAN: f32 = 4.0;
pub const SPARK_SPIN_MAX: f32 = 0.2;
pub const CONFETTI_SPIN_STEP: f32 = 0.06; // rotation = spin * age * this

// Burst sizes, per display tier
pub const FIREWORK_SPARKS_SMALL: usize = 20;
pub const FIREWORK_SPARKS_LARGE: usize = 40;
pub const CONFETTI_SPARKS_SMALL: usize = 30;
pub const CONFETTI_SPARKS_LARGE: usize = 80;
pub const HEART_SPARKS_SMALL: usize = 8;
pub const HEART_SPARKS_LARGE: usize = 20;

pub const FIREWORK_LIFE_MIN: f32 = 90.0;
pub const FIREWORK_LIFE_SPAN: f32 = 60.0;
pub const CONFETTI_LIFE_MIN: f32 = 120.0;
pub const CONFETTI_LIFE_SPAN: f32 = 60.0;
pub const CONFETTI_JITTER: f32 = 10.0;
pub const HEART_LIFE_MIN: f32 = 120.0;
pub const HEART_LIFE_SPAN: f32 = 40.0;
pub const HEART_JITTER: f32 = 5.0;

// Surprise trigger: fireworks near the upper-center plus pop circles
pub const SURPRISE_FIREWORKS_SMALL: usize = 2;
pub const SURPRISE_FIREWORKS_LARGE: usize = 4;
pub const SURPRISE_SPREAD_X: f32 = 260.0;
pub const SURPRISE_SPREAD_Y: f32 = 140.0;
pub const SURPRISE_CENTER_Y_DIV: f32 = 2.6;
pub const POP_SPARKS: usize = 3;
pub const POP_LIFE_BASE: f32 = 40.0;
pub const POP_LIFE_STEP: f32 = 6.0;
pub const POP_SIZE_BASE: f32 = 4.0;
pub const POP_SIZE_STEP: f32 = 2.0;

// Stochastic ambient firework roll, once per frame
pub const AMBIENT_FIREWORK_CHANCE: f32 = 0.006;

// Background gradient mid-stop oscillation, advanced per frame
pub const GRAD_PHASE_STEP: f32 = 0.002;

// Cursor trail
pub const TRAIL_MAX_POINTS: usize = 20;
pub const TRAIL_LIFE: f32 = 40.0;
pub const TRAIL_DECAY: f32 = 1.3; // life lost per normalized frame unit

// One color per firework burst; confetti and hearts pick per spark
pub const FIREWORK_PALETTE: [&str; 5] = ["#f5c16c", "#ff5ea8", "#ffffff", "#ffb3d6", "#ffd98a"];
pub const CONFETTI_PALETTE: [&str; 5] = ["#f5c16c", "#ff5ea8", "#ffffff", "#ffd98a", "#ffd1ff"];
pub const HEART_PALETTE: [&str; 4] = ["#ff5ea8", "#ffd1ff", "#ff9abf", "#ff6fba"];
pub const POP_COLOR: &str = "#fff";
