//! Runs the game against simulated knobs and an emulated DAC

mod bot;
mod bus;

use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use game_core::{Config, GameState, Side};

use bot::PaddleBot;
use bus::{FrameStats, ScopeBus};

/// The firmware free-runs; pace the host at roughly 60 frames a second
const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Frames between summary lines
const REPORT_EVERY: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::new();
    config
        .validate()
        .context("built-in game configuration is invalid")?;

    log::info!(
        "Scope Pong starting: field {}x{}, first to {}",
        config.field_width,
        config.field_height,
        config.win_score
    );
    for side in Side::BOTH {
        log::info!(
            "Player {} paddle on ADC channel {}",
            side.player_number(),
            side.adc_channel()
        );
    }

    let mut bus = ScopeBus::new();
    bus.send_setup();
    ensure!(bus.is_configured(), "DAC did not take the reference setup word");
    bus.end_frame();

    let mut bots = PaddleBot::new(&config);
    let mut game = GameState::new(config);

    loop {
        bots.aim(&game.ball());
        game.run_frame(&mut bots, &mut bus);
        let stats = bus.end_frame();
        report(&game, &bots, &bus, &stats);
        thread::sleep(FRAME_PERIOD);
    }
}

fn report(game: &GameState, bots: &PaddleBot, bus: &ScopeBus, stats: &FrameStats) {
    log::trace!(
        "frame {}: {} points, {} words, bounds {:?}, beam rests at {:?}, knobs {} / {}",
        game.frame,
        stats.points,
        stats.words,
        stats.bounds,
        bus.beam(),
        bots.held_offset(Side::Left),
        bots.held_offset(Side::Right)
    );

    if stats.rejected > 0 || stats.saturated > 0 {
        log::warn!(
            "frame {}: {} words rejected, {} points saturated",
            game.frame,
            stats.rejected,
            stats.saturated
        );
    }

    if game.events.match_reset {
        log::info!("frame {}: new match", game.frame);
    }

    if game.frame % REPORT_EVERY == 0 {
        let ball = game.ball();
        log::info!(
            "frame {}: score {} - {}, ball speed {}, {:?}, {} DAC words sent",
            game.frame,
            game.score.left,
            game.score.right,
            ball.speed,
            game.match_state(),
            bus.total_words()
        );
    }
}
