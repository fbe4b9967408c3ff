use hecs::World;

use crate::{Config, Paddle, Side};

/// Source of raw paddle potentiometer samples
///
/// On hardware this starts an ADC conversion on the side's channel and spins
/// until the result register is ready.
pub trait InputSource {
    fn sample(&mut self, side: Side) -> u16;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn sample(&mut self, side: Side) -> u16 {
        (**self).sample(side)
    }
}

/// Read both paddles (left first) and move them to their mapped offsets
pub fn ingest_inputs<I: InputSource + ?Sized>(world: &mut World, source: &mut I, config: &Config) {
    // Sample both channels before touching the world so a frame never mixes readings
    let left = config.map_paddle_offset(source.sample(Side::Left));
    let right = config.map_paddle_offset(source.sample(Side::Right));

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.offset = match paddle.side {
            Side::Left => left,
            Side::Right => right,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    /// Returns fixed samples and remembers the order channels were read in
    struct FixedInput {
        left: u16,
        right: u16,
        reads: Vec<Side>,
    }

    impl InputSource for FixedInput {
        fn sample(&mut self, side: Side) -> u16 {
            self.reads.push(side);
            match side {
                Side::Left => self.left,
                Side::Right => self.right,
            }
        }
    }

    fn paddle_offset(world: &World, side: Side) -> i32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.offset)
            .unwrap()
    }

    #[test]
    fn test_ingest_maps_both_paddles() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0);
        create_paddle(&mut world, Side::Right, 0);
        let mut input = FixedInput {
            left: 105,
            right: 555,
            reads: Vec::new(),
        };

        ingest_inputs(&mut world, &mut input, &config);

        assert_eq!(paddle_offset(&world, Side::Left), 0);
        assert_eq!(paddle_offset(&world, Side::Right), 600);
    }

    #[test]
    fn test_ingest_samples_left_then_right_once() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0);
        create_paddle(&mut world, Side::Right, 0);
        let mut input = FixedInput {
            left: 330,
            right: 330,
            reads: Vec::new(),
        };

        ingest_inputs(&mut world, &mut input, &config);

        assert_eq!(input.reads, vec![Side::Left, Side::Right]);
    }

    #[test]
    fn test_ingest_does_not_clamp() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0);
        create_paddle(&mut world, Side::Right, 0);
        let mut input = FixedInput {
            left: 0,
            right: 1023,
            reads: Vec::new(),
        };

        ingest_inputs(&mut world, &mut input, &config);

        assert_eq!(paddle_offset(&world, Side::Left), -140);
        assert_eq!(paddle_offset(&world, Side::Right), 1224);
    }
}
