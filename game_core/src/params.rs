/// Game tuning parameters for oscilloscope Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (display units, origin bottom-left)
    pub const FIELD_WIDTH: i32 = 1000;
    pub const FIELD_HEIGHT: i32 = 700;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_LENGTH: i32 = 100;
    pub const PADDLE_SPACING: i32 = 20; // Gap between a wall and its paddle

    // Ball
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_SPEED_INITIAL: i32 = 5;
    pub const BALL_SPEED_INCREMENT: i32 = 1;
    // Must stay below the wall-to-collision-plane gap or the ball tunnels
    pub const BALL_SPEED_MAX: i32 = Self::PADDLE_WIDTH + Self::PADDLE_SPACING - 3;

    // Score
    pub const WIN_SCORE: u32 = 5;
    pub const RESET_GRACE: u32 = 3; // Extra points the winner scores before a new match

    // Glyphs
    pub const SCORES_OFFSET: i32 = 30;
    pub const SEGMENT_LENGTH: i32 = 30;
    pub const SYMBOL_SPACING: i32 = 20;
    pub const COLON_RADIUS: i32 = 2;

    // Potentiometer calibration (raw ADC counts)
    pub const RAW_MIN: u16 = 105;
    pub const RAW_MAX: u16 = 555;

    // Display
    pub const PLOT_LIMIT: i32 = 2048; // Exclusive upper bound on plotted coordinates
}
