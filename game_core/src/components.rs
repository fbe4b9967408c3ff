use glam::IVec2;

/// Which half of the field a paddle, score or winner belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Player number shown on the win banner
    pub fn player_number(self) -> u32 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    /// ADC channel the paddle potentiometer is wired to
    pub fn adc_channel(self) -> u8 {
        match self {
            Side::Left => 4,
            Side::Right => 5,
        }
    }

    /// Horizontal direction that carries the ball toward the wall this side scores on
    pub fn attack_dir(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub offset: i32, // Distance from field bottom to paddle bottom
}

impl Paddle {
    pub fn new(side: Side, offset: i32) -> Self {
        Self { side, offset }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub dir: IVec2, // Each component is -1 or +1
    pub speed: i32,
}

impl Ball {
    /// Direction a fresh match serves in
    pub const DEFAULT_DIR: IVec2 = IVec2::ONE;

    pub fn new(pos: IVec2, dir: IVec2, speed: i32) -> Self {
        Self { pos, dir, speed }
    }

    /// Put the ball back in the middle at serve speed, keeping its direction
    pub fn reset(&mut self, center: IVec2, speed: i32) {
        self.pos = center;
        self.speed = speed;
    }

    pub fn left_edge(&self, radius: i32) -> i32 {
        self.pos.x - radius
    }

    pub fn right_edge(&self, radius: i32) -> i32 {
        self.pos.x + radius
    }

    /// Bump speed after a paddle hit, never past `max`
    pub fn accelerate(&mut self, increment: i32, max: i32) {
        self.speed = (self.speed + increment).min(max);
    }
}
