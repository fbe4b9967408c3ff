use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the floor or ceiling
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let field = config.field();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if field.crosses_floor_or_ceiling(ball.pos, config.ball_radius) {
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
            log::debug!("Wall bounce at ({}, {})", ball.pos.x, ball.pos.y);
        }
    }
}

/// True if a ball heading for `side`'s wall has reached that paddle's face
/// while level with it. Vertical overlap is strict at both ends.
pub fn ball_hits_paddle(ball: &Ball, side: Side, paddle_offset: i32, config: &Config) -> bool {
    let plane = config.collision_plane(side);
    let crossed = match side {
        Side::Left => ball.dir.x < 0 && ball.left_edge(config.ball_radius) < plane,
        Side::Right => ball.dir.x > 0 && ball.right_edge(config.ball_radius) > plane,
    };
    crossed && paddle_offset < ball.pos.y && ball.pos.y < paddle_offset + config.paddle_length
}

/// Check ball collisions with paddles
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, i32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.offset))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = paddles
            .iter()
            .find(|(side, offset)| ball_hits_paddle(&*ball, *side, *offset, config))
            .map(|(side, _)| *side);

        if let Some(side) = hit {
            ball.dir.x = -ball.dir.x;
            ball.accelerate(config.ball_speed_increment, config.ball_speed_max);
            events.ball_hit_paddle = true;
            log::debug!(
                "Player {} returns the ball, speed now {}",
                side.player_number(),
                ball.speed
            );
        }
    }
}
