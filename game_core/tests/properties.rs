use game_core::render::{draw_digit, draw_winner, plot_point};
use game_core::*;
use glam::IVec2;
use proptest::prelude::*;

/// Replays a fixed list of raw samples, cycling when it runs out
struct Script {
    samples: Vec<u16>,
    next: usize,
}

impl InputSource for Script {
    fn sample(&mut self, _side: Side) -> u16 {
        let raw = self.samples[self.next % self.samples.len()];
        self.next += 1;
        raw
    }
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

fn unit() -> impl Strategy<Value = i32> {
    prop_oneof![Just(-1), Just(1)]
}

proptest! {
    #[test]
    fn test_calibrated_samples_map_onto_paddle_travel(raw in Params::RAW_MIN..=Params::RAW_MAX) {
        let config = Config::new();
        let offset = config.map_paddle_offset(raw);
        prop_assert!(offset >= 0);
        prop_assert!(offset <= config.paddle_travel());
    }

    #[test]
    fn test_paddle_offset_is_monotonic(a in 0u16..1024, b in 0u16..1024) {
        let config = Config::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(config.map_paddle_offset(lo) <= config.map_paddle_offset(hi));
    }

    #[test]
    fn test_ball_moves_linearly_in_open_field(
        dx in unit(),
        dy in unit(),
        speed in 1..=Params::BALL_SPEED_MAX,
        frames in 0u32..8,
    ) {
        let mut gs = GameState::new(Config::new());
        gs.input(&mut Script { samples: vec![0], next: 0 });
        let start = IVec2::new(500, 350);
        let dir = IVec2::new(dx, dy);
        for (_e, ball) in gs.world.query_mut::<&mut Ball>() {
            *ball = Ball::new(start, dir, speed);
        }

        for _ in 0..frames {
            gs.update();
        }

        prop_assert_eq!(gs.ball().pos, start + dir * speed * frames as i32);
        prop_assert_eq!(gs.ball().speed, speed);
    }

    #[test]
    fn test_speed_only_grows_between_serves(samples in prop::collection::vec(0u16..1024, 1..64)) {
        let config = Config::new();
        let mut gs = GameState::new(config.clone());
        let mut input = Script { samples, next: 0 };

        for _ in 0..2000 {
            let before = gs.ball().speed;
            gs.input(&mut input);
            gs.update();
            let after = gs.ball().speed;

            prop_assert!(after <= config.ball_speed_max);
            let served = gs.events.left_scored || gs.events.right_scored || gs.events.match_reset;
            if served {
                prop_assert_eq!(after, config.ball_speed_initial);
            } else {
                prop_assert!(after >= before);
            }
            prop_assert!(gs.ball().dir.x.abs() == 1 && gs.ball().dir.y.abs() == 1);
        }
    }

    #[test]
    fn test_plot_point_keeps_exactly_the_display_range(x in -4096i32..4096, y in -4096i32..4096) {
        let mut rec = PlotRecorder::new();
        plot_point(&mut rec, x, y);
        let visible = (0..2048).contains(&x) && (0..2048).contains(&y);
        prop_assert_eq!(rec.len(), usize::from(visible));
    }

    #[test]
    fn test_digits_only_depend_on_units(n in 0u32..10_000, x in 0i32..1500, y in 0i32..1500) {
        let mut a = PlotRecorder::new();
        let mut b = PlotRecorder::new();
        draw_digit(&mut a, IVec2::new(x, y), n, 30);
        draw_digit(&mut b, IVec2::new(x, y), n % 10, 30);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_win_banner_is_a_pure_function_of_the_winner(winner in side()) {
        let config = Config::new();
        let mut first = PlotRecorder::new();
        let mut second = PlotRecorder::new();
        draw_winner(&mut first, &config, winner);
        draw_winner(&mut second, &config, winner);
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, second);
    }
}
