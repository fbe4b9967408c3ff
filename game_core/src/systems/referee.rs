use crate::{Ball, Config, Events, MatchAction, MatchFsm, MatchState, Score};
use hecs::World;

/// Bring the match state in line with the scores.
///
/// Returns true while the match is being played, i.e. when paddle
/// collisions should still be checked this frame.
pub fn referee(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    fsm: &mut MatchFsm,
) -> bool {
    for result in fsm.advance(MatchState::from_score(score, config)) {
        if let MatchAction::WinningScore(side) = result.action {
            events.match_won = Some(side);
            log::info!(
                "Player {} wins {} - {}",
                side.player_number(),
                score.left,
                score.right
            );
        }
    }

    match fsm.state() {
        MatchState::Playing => true,
        MatchState::Won(side) => {
            // Keep the ball heading for the loser's wall while the banner shows
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.dir.x = side.attack_dir();
            }
            false
        }
        MatchState::Resetting(side) => {
            // The next match serves toward the wall the winner scores on
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.dir.x = side.attack_dir();
            }
            reset_match(world, config, score);
            events.match_reset = true;
            fsm.transition(MatchAction::Restart);
            log::info!("New match after player {} won", side.player_number());
            false
        }
    }
}

/// Zero the scores and serve a fresh ball from the center, keeping its direction
pub fn reset_match(world: &mut World, config: &Config, score: &mut Score) {
    score.clear();
    let center = config.center();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(center, config.ball_speed_initial);
    }
}
