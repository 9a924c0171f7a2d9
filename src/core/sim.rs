// Pure simulation state for the background canvas: ambient floater
// particles, transient effect sparks and the pointer trail. No DOM types
// here, so the whole module runs host-side in the integration tests.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use super::constants::*;

/// CSS-pixel viewport the simulation runs in, floored to a minimum size so
/// a collapsed window never produces degenerate geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_VIEWPORT_SIDE),
            height: height.max(MIN_VIEWPORT_SIDE),
        }
    }

    /// Constrained displays get smaller bursts and fewer floaters.
    pub fn is_small(&self) -> bool {
        self.width.min(self.height) < SMALL_SCREEN_BELOW
    }

    pub fn floater_count(&self) -> usize {
        if self.is_small() {
            FLOATERS_SMALL
        } else {
            FLOATERS_LARGE
        }
    }

    pub fn firework_spark_count(&self) -> usize {
        if self.is_small() {
            FIREWORK_SPARKS_SMALL
        } else {
            FIREWORK_SPARKS_LARGE
        }
    }

    pub fn confetti_count(&self) -> usize {
        if self.is_small() {
            CONFETTI_SPARKS_SMALL
        } else {
            CONFETTI_SPARKS_LARGE
        }
    }

    pub fn heart_count(&self) -> usize {
        if self.is_small() {
            HEART_SPARKS_SMALL
        } else {
            HEART_SPARKS_LARGE
        }
    }

    pub fn surprise_firework_count(&self) -> usize {
        if self.is_small() {
            SURPRISE_FIREWORKS_SMALL
        } else {
            SURPRISE_FIREWORKS_LARGE
        }
    }
}

/// Elapsed wall time to normalized frame units (1.0 at the reference rate).
/// Long stalls are clamped so a background tab cannot teleport the physics.
pub fn normalized_dt(elapsed_ms: f64) -> f32 {
    (elapsed_ms.min(DT_CLAMP_MS) / FRAME_MS) as f32
}

/// A long-lived twinkling background point. Never removed from the active
/// set; leaving the padded viewport reinitializes it in place.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
    twinkle: f32,
}

impl Particle {
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 0.0,
            alpha: 0.0,
            twinkle: 0.0,
        };
        p.reset(viewport, rng);
        p
    }

    pub fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        self.vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * FLOATER_DRIFT_X,
            (rng.gen::<f32>() - 0.5) * FLOATER_DRIFT_Y - FLOATER_LIFT,
        );
        self.size = FLOATER_SIZE_MIN + rng.gen::<f32>() * FLOATER_SIZE_SPAN;
        self.alpha = 0.2 + rng.gen::<f32>() * 0.9;
        self.twinkle = rng.gen::<f32>() * 100.0;
    }

    pub fn step(&mut self, dt: f32, viewport: Viewport, rng: &mut impl Rng) {
        self.pos += self.vel * dt;
        self.twinkle += TWINKLE_RATE * dt;
        self.alpha = 0.25 + 0.75 * (0.5 + 0.5 * (self.twinkle / TWINKLE_PERIOD_DIV).sin());
        let out = self.pos.x < -VIEWPORT_PAD
            || self.pos.x > viewport.width + VIEWPORT_PAD
            || self.pos.y < -VIEWPORT_PAD
            || self.pos.y > viewport.height + VIEWPORT_PAD;
        if out {
            self.reset(viewport, rng);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkKind {
    Plain,
    Confetti,
    Heart,
}

/// A transient physics-animated effect unit. The owner culls it once
/// `age > life`; the spark itself never self-destructs.
#[derive(Clone, Debug)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub life: f32,
    pub color: &'static str,
    pub size: f32,
    pub kind: SparkKind,
    pub spin: f32,
}

impl Spark {
    pub fn new(
        origin: Vec2,
        color: &'static str,
        life: f32,
        kind: SparkKind,
        rng: &mut impl Rng,
    ) -> Self {
        let speed = SPARK_SPEED_MIN + rng.gen::<f32>() * SPARK_SPEED_SPAN;
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let size = match kind {
            SparkKind::Confetti => 2.0 + rng.gen::<f32>() * 4.0,
            _ => 1.0 + rng.gen::<f32>() * 2.2,
        };
        Self {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            age: 0.0,
            life,
            color,
            size,
            kind,
            spin: rng.gen::<f32>() * SPARK_SPIN_MAX,
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.vel.y += SPARK_GRAVITY * dt;
        self.pos += self.vel * dt * SPARK_VELOCITY_SCALE;
        self.age += dt;
    }

    /// Fades linearly with age; exactly 0 once age reaches life.
    pub fn opacity(&self) -> f32 {
        (1.0 - (self.age / self.life).min(1.0)).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.age > self.life
    }

    /// Current confetti rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.spin * self.age * CONFETTI_SPIN_STEP
    }
}

/// One echo of pointer motion, fading over a few frames.
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub life: f32,
}

/// All live simulation state. The frame callback is the single writer; the
/// spawner methods insert synchronously within the triggering event's turn.
pub struct SimContext {
    pub viewport: Viewport,
    pub reduce_motion: bool,
    pub particles: Vec<Particle>,
    pub sparks: Vec<Spark>,
    pub trail: SmallVec<[TrailPoint; TRAIL_MAX_POINTS]>,
    pub grad_phase: f32,
    rng: StdRng,
}

impl SimContext {
    pub fn new(viewport: Viewport, reduce_motion: bool, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..viewport.floater_count())
            .map(|_| Particle::spawn(viewport, &mut rng))
            .collect();
        Self {
            viewport,
            reduce_motion,
            particles,
            sparks: Vec::new(),
            trail: SmallVec::new(),
            grad_phase: 0.0,
            rng,
        }
    }

    /// Resize keeps the floater population from startup; particles drift
    /// into the new bounds and reset there.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Record pointer motion, dropping the oldest echo beyond the cap.
    pub fn push_trail(&mut self, x: f32, y: f32) {
        if self.trail.len() == TRAIL_MAX_POINTS {
            self.trail.remove(0);
        }
        self.trail.push(TrailPoint {
            pos: Vec2::new(x, y),
            life: TRAIL_LIFE,
        });
    }

    /// Burst of plain sparks radiating from a center, one palette color per
    /// burst. With no center given, somewhere in the upper-middle sky.
    pub fn spawn_firework(&mut self, at: Option<Vec2>) {
        let vp = self.viewport;
        let center = at.unwrap_or_else(|| {
            Vec2::new(
                self.rng.gen::<f32>() * vp.width * 0.6 + vp.width * 0.2,
                self.rng.gen::<f32>() * vp.height * 0.45 + vp.height * 0.1,
            )
        });
        let color = *FIREWORK_PALETTE.choose(&mut self.rng).unwrap_or(&"#ffffff");
        for _ in 0..vp.firework_spark_count() {
            let life = FIREWORK_LIFE_MIN + self.rng.gen::<f32>() * FIREWORK_LIFE_SPAN;
            let spark = Spark::new(center, color, life, SparkKind::Plain, &mut self.rng);
            self.sparks.push(spark);
        }
    }

    /// Confetti burst near a point, velocities scaled up and biased upward.
    pub fn spawn_confetti(&mut self, at: Vec2) {
        for _ in 0..self.viewport.confetti_count() {
            let color = *CONFETTI_PALETTE.choose(&mut self.rng).unwrap_or(&"#ffffff");
            let origin = at
                + Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * CONFETTI_JITTER * 2.0,
                    (self.rng.gen::<f32>() - 0.5) * CONFETTI_JITTER * 2.0,
                );
            let life = CONFETTI_LIFE_MIN + self.rng.gen::<f32>() * CONFETTI_LIFE_SPAN;
            let mut spark = Spark::new(origin, color, life, SparkKind::Confetti, &mut self.rng);
            spark.vel.x *= self.rng.gen::<f32>() * 2.4 + 0.6;
            spark.vel.y *= self.rng.gen::<f32>() * 2.4 - 2.0;
            self.sparks.push(spark);
        }
    }

    /// Heart burst near a point, gentler than confetti.
    pub fn spawn_hearts(&mut self, at: Vec2) {
        for _ in 0..self.viewport.heart_count() {
            let color = *HEART_PALETTE.choose(&mut self.rng).unwrap_or(&"#ff5ea8");
            let origin = at
                + Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * HEART_JITTER * 2.0,
                    (self.rng.gen::<f32>() - 0.5) * HEART_JITTER * 2.0,
                );
            let life = HEART_LIFE_MIN + self.rng.gen::<f32>() * HEART_LIFE_SPAN;
            let mut spark = Spark::new(origin, color, life, SparkKind::Heart, &mut self.rng);
            spark.vel.x *= self.rng.gen::<f32>() * 1.3 + 0.3;
            spark.vel.y *= self.rng.gen::<f32>() * 1.3 - 1.5;
            self.sparks.push(spark);
        }
    }

    /// The full surprise: fireworks near the upper-center, confetti and
    /// hearts at the activation point, and three oversized fading pops.
    pub fn trigger_surprise(&mut self, at: Vec2) {
        let vp = self.viewport;
        let center = Vec2::new(vp.width / 2.0, vp.height / SURPRISE_CENTER_Y_DIV);
        for _ in 0..vp.surprise_firework_count() {
            let offset = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * SURPRISE_SPREAD_X,
                (self.rng.gen::<f32>() - 0.5) * SURPRISE_SPREAD_Y,
            );
            self.spawn_firework(Some(center + offset));
        }
        self.spawn_confetti(at);
        self.spawn_hearts(at);
        for i in 0..POP_SPARKS {
            let life = POP_LIFE_BASE + i as f32 * POP_LIFE_STEP;
            let mut spark = Spark::new(at, POP_COLOR, life, SparkKind::Plain, &mut self.rng);
            spark.size = POP_SIZE_BASE + i as f32 * POP_SIZE_STEP;
            self.sparks.push(spark);
        }
    }

    /// Advance everything by one frame: floaters twinkle and wrap, the
    /// ambient firework die is rolled, sparks age out, the trail fades.
    pub fn step(&mut self, dt: f32) {
        self.grad_phase = (self.grad_phase + GRAD_PHASE_STEP) % 1.0;

        let vp = self.viewport;
        for p in &mut self.particles {
            p.step(dt, vp, &mut self.rng);
        }

        if !self.reduce_motion && self.rng.gen::<f32>() < AMBIENT_FIREWORK_CHANCE {
            self.spawn_firework(None);
        }

        for s in &mut self.sparks {
            s.step(dt);
        }
        self.sparks.retain(|s| !s.expired());

        for t in &mut self.trail {
            t.life -= dt * TRAIL_DECAY;
        }
        self.trail.retain(|t| t.life > 0.0);
    }
}
