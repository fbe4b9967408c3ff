//! Simulated potentiometers
//!
//! Each bot turns its knob toward where the ball will cross its paddle's
//! collision plane, but can only move so far per frame. The two sides get
//! different reach so rallies eventually end.

use game_core::{Ball, Config, InputSource, Side};

/// Offset units per frame each knob can travel by default
pub const LEFT_REACH: i32 = 12;
pub const RIGHT_REACH: i32 = 9;

pub struct PaddleBot {
    config: Config,
    reach: [i32; 2],
    held: [i32; 2],
}

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl PaddleBot {
    pub fn new(config: &Config) -> Self {
        Self::with_reach(config, LEFT_REACH, RIGHT_REACH)
    }

    pub fn with_reach(config: &Config, left: i32, right: i32) -> Self {
        let rest = config.paddle_travel() / 2;
        Self {
            config: config.clone(),
            reach: [left.max(0), right.max(0)],
            held: [rest, rest],
        }
    }

    /// Offset the knob currently points at
    pub fn held_offset(&self, side: Side) -> i32 {
        self.held[slot(side)]
    }

    /// Turn both knobs one frame's worth toward their targets
    pub fn aim(&mut self, ball: &Ball) {
        for side in Side::BOTH {
            let target = self.target_offset(ball, side);
            let i = slot(side);
            let delta = (target - self.held[i]).clamp(-self.reach[i], self.reach[i]);
            self.held[i] += delta;
        }
    }

    /// Offset that would center the paddle on the ball, or rest in the middle
    /// while the ball is heading away
    pub fn target_offset(&self, ball: &Ball, side: Side) -> i32 {
        let travel = self.config.paddle_travel();
        match predict_crossing(ball, side, &self.config) {
            Some(y) => (y - self.config.paddle_length / 2).clamp(0, travel),
            None => travel / 2,
        }
    }
}

impl InputSource for PaddleBot {
    fn sample(&mut self, side: Side) -> u16 {
        raw_for_offset(&self.config, self.held[slot(side)])
    }
}

/// Height at which the ball reaches `side`'s collision plane, folding the
/// path off the floor and ceiling. `None` if it is moving away or already past.
pub fn predict_crossing(ball: &Ball, side: Side, config: &Config) -> Option<i32> {
    if ball.dir.x != -side.attack_dir() {
        return None;
    }

    let r = config.ball_radius;
    let plane = config.collision_plane(side);
    let distance = match side {
        Side::Left => ball.left_edge(r) - plane,
        Side::Right => plane - ball.right_edge(r),
    };
    if distance < 0 {
        return None;
    }

    let speed = ball.speed.max(1);
    let frames = distance / speed;
    let y = ball.pos.y + ball.dir.y * speed * frames;

    let lo = r;
    let hi = config.field_height - r;
    let span = hi - lo;
    if span <= 0 {
        return Some(y.clamp(0, config.field_height));
    }
    let t = (y - lo).rem_euclid(2 * span);
    Some(lo + if t <= span { t } else { 2 * span - t })
}

/// Smallest raw sample whose mapped offset is at least `offset`
pub fn raw_for_offset(config: &Config, offset: i32) -> u16 {
    let travel = config.paddle_travel();
    let span = i32::from(config.raw_max) - i32::from(config.raw_min);
    if travel <= 0 || span <= 0 {
        return config.raw_min;
    }
    let offset = offset.clamp(0, travel);
    let steps = (offset * span + travel - 1) / travel;
    u16::try_from(i32::from(config.raw_min) + steps).unwrap_or(config.raw_max)
}
