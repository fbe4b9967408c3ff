use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if the ball left the field through a side wall
///
/// At most one side scores per frame. The scoring side's point is awarded,
/// the ball's horizontal direction flips and it is served again from the
/// center at the initial speed.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let center = config.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.right_edge(config.ball_radius) > config.field_width {
            Some(Side::Left)
        } else if ball.left_edge(config.ball_radius) < 0 {
            Some(Side::Right)
        } else {
            None
        };

        if let Some(side) = scorer {
            ball.dir.x = -ball.dir.x;
            score.award(side);
            events.scored(side);
            ball.reset(center, config.ball_speed_initial);
            log::info!(
                "Player {} scores ({} - {})",
                side.player_number(),
                score.left,
                score.right
            );
        }
    }
}
