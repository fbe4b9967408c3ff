use crate::Ball;
use hecs::World;

/// Advance the ball one frame along its control vector
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.dir * ball.speed;
    }
}
