//! Vector renderer
//!
//! Every frame is redrawn from scratch as a stream of single points; the
//! oscilloscope's phosphor persistence holds the image between frames.

pub mod glyphs;
pub mod primitives;

pub use glyphs::*;
pub use primitives::*;

use glam::IVec2;

use crate::{Ball, Config, MatchState, Score, Side};

/// Sink for plotted points
///
/// On hardware this spins on the serial status flag and writes each
/// coordinate to the DAC. Callers only pass coordinates below 2048.
pub trait PointPlotter {
    fn plot(&mut self, x: u16, y: u16);
}

impl<T: PointPlotter + ?Sized> PointPlotter for &mut T {
    fn plot(&mut self, x: u16, y: u16) {
        (**self).plot(x, y);
    }
}

/// Records every plotted point in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotRecorder {
    points: Vec<(u16, u16)>,
}

impl PlotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[(u16, u16)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PointPlotter for PlotRecorder {
    fn plot(&mut self, x: u16, y: u16) {
        self.points.push((x, y));
    }
}

/// Everything a frame needs to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    pub state: MatchState,
    pub score: Score,
    pub ball: Ball,
    pub left_offset: i32,
    pub right_offset: i32,
}

/// Draw one frame: the play scene while a match is on, otherwise only the
/// win banner
pub fn render_scene<P: PointPlotter + ?Sized>(plotter: &mut P, config: &Config, scene: &Scene) {
    match scene.state.winner() {
        None => draw_play_scene(plotter, config, scene),
        Some(winner) => draw_winner(plotter, config, winner),
    }
}

/// Field border, scores, both paddles and the ball
pub fn draw_play_scene<P: PointPlotter + ?Sized>(plotter: &mut P, config: &Config, scene: &Scene) {
    let field = config.field();
    draw_rect(plotter, field.origin(), field.width, field.height);
    draw_scores(plotter, config, &scene.score);
    draw_paddle(plotter, config, config.paddle_x(Side::Right), scene.right_offset);
    draw_paddle(plotter, config, config.paddle_x(Side::Left), scene.left_offset);
    draw_circle(plotter, scene.ball.pos, config.ball_radius);
}

fn draw_paddle<P: PointPlotter + ?Sized>(plotter: &mut P, config: &Config, x: i32, offset: i32) {
    draw_rect(
        plotter,
        IVec2::new(x, offset),
        config.paddle_width,
        config.paddle_length,
    );
}
