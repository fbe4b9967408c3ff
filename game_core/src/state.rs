//! The whole game as one value, driven by the main loop

use hecs::World;

use crate::render::{render_scene, PointPlotter, Scene};
use crate::systems::{ingest_inputs, reset_match, InputSource};
use crate::{
    create_ball, create_paddle, Ball, Config, Events, MatchFsm, MatchState, Paddle, Score, Side,
};

/// Game state owned by the frame loop
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub fsm: MatchFsm,
    pub frame: u64,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        // Paddles sit on the floor until the first samples arrive
        for side in Side::BOTH {
            create_paddle(&mut world, side, 0);
        }

        // Create ball at center
        create_ball(
            &mut world,
            config.center(),
            Ball::DEFAULT_DIR,
            config.ball_speed_initial,
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            fsm: MatchFsm::new(),
            frame: 0,
        }
    }

    /// Read both paddle positions for this frame
    pub fn input<I: InputSource + ?Sized>(&mut self, source: &mut I) {
        ingest_inputs(&mut self.world, source, &self.config);
    }

    /// Advance physics and the match by one frame
    pub fn update(&mut self) {
        crate::step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.fsm,
        );
        self.frame += 1;
    }

    /// Draw the current frame
    pub fn render<P: PointPlotter + ?Sized>(&self, plotter: &mut P) {
        render_scene(plotter, &self.config, &self.scene());
    }

    /// One pass of the main loop: input, update, render
    pub fn run_frame<I, P>(&mut self, source: &mut I, plotter: &mut P)
    where
        I: InputSource + ?Sized,
        P: PointPlotter + ?Sized,
    {
        self.input(source);
        self.update();
        self.render(plotter);
    }

    /// Start a new match immediately
    pub fn reset_match(&mut self) {
        reset_match(&mut self.world, &self.config, &mut self.score);
        self.fsm = MatchFsm::new();
    }

    pub fn match_state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| {
                Ball::new(
                    self.config.center(),
                    Ball::DEFAULT_DIR,
                    self.config.ball_speed_initial,
                )
            })
    }

    pub fn paddle_offset(&self, side: Side) -> i32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.offset)
            .unwrap_or(0)
    }

    /// Snapshot of what the next render will draw
    pub fn scene(&self) -> Scene {
        Scene {
            state: self.match_state(),
            score: self.score,
            ball: self.ball(),
            left_offset: self.paddle_offset(Side::Left),
            right_offset: self.paddle_offset(Side::Right),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
