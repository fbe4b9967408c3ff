pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use params::*;
pub use render::{PlotRecorder, PointPlotter, Scene};
pub use resources::*;
pub use state::*;
pub use systems::InputSource;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation
///
/// The order is fixed: move, side-wall scoring, floor/ceiling bounce, match
/// evaluation, and paddle bounces only while the match is being played.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    fsm: &mut MatchFsm,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check scoring (ball left through a side wall)
    check_scoring(world, config, score, events);

    // 3. Bounce off floor and ceiling
    check_wall_collisions(world, config, events);

    // 4. Win banner, grace and match reset
    if referee(world, config, score, events, fsm) {
        // 5. Paddles
        check_paddle_collisions(world, config, events);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, offset: i32) -> hecs::Entity {
    world.spawn((Paddle::new(side, offset),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: IVec2, dir: IVec2, speed: i32) -> hecs::Entity {
    world.spawn((Ball::new(pos, dir, speed),))
}
