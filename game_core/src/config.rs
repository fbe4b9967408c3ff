use crate::{GameField, Params, Side};
use glam::IVec2;
use thiserror::Error;

/// Geometry that would break the game if it were compiled in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("calibration range is empty: raw_min {raw_min} >= raw_max {raw_max}")]
    EmptyCalibration { raw_min: u16, raw_max: u16 },

    #[error("paddle length {paddle_length} does not fit a field of height {field_height}")]
    PaddleTooLong {
        paddle_length: i32,
        field_height: i32,
    },

    #[error("initial speed {initial} exceeds max speed {max}")]
    InitialAboveMax { initial: i32, max: i32 },

    #[error("max speed {max} can tunnel through the {gap}-unit paddle gap")]
    Tunnelling { max: i32, gap: i32 },

    #[error("win score must be at least 1")]
    NoWinScore,

    #[error("field {width}x{height} exceeds the plot range {limit}")]
    FieldOutOfPlotRange { width: i32, height: i32, limit: i32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_length: i32,
    pub paddle_spacing: i32,
    pub ball_radius: i32,
    pub ball_speed_initial: i32,
    pub ball_speed_increment: i32,
    pub ball_speed_max: i32,
    pub win_score: u32,
    pub reset_grace: u32,
    pub scores_offset: i32,
    pub segment_length: i32,
    pub symbol_spacing: i32,
    pub colon_radius: i32,
    pub raw_min: u16,
    pub raw_max: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_spacing: Params::PADDLE_SPACING,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
            reset_grace: Params::RESET_GRACE,
            scores_offset: Params::SCORES_OFFSET,
            segment_length: Params::SEGMENT_LENGTH,
            symbol_spacing: Params::SYMBOL_SPACING,
            colon_radius: Params::COLON_RADIUS,
            raw_min: Params::RAW_MIN,
            raw_max: Params::RAW_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.raw_max <= self.raw_min {
            return Err(ConfigError::EmptyCalibration {
                raw_min: self.raw_min,
                raw_max: self.raw_max,
            });
        }
        if self.paddle_length >= self.field_height {
            return Err(ConfigError::PaddleTooLong {
                paddle_length: self.paddle_length,
                field_height: self.field_height,
            });
        }
        if self.ball_speed_initial > self.ball_speed_max {
            return Err(ConfigError::InitialAboveMax {
                initial: self.ball_speed_initial,
                max: self.ball_speed_max,
            });
        }
        let gap = self.paddle_width + self.paddle_spacing;
        if self.ball_speed_max >= gap {
            return Err(ConfigError::Tunnelling {
                max: self.ball_speed_max,
                gap,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::NoWinScore);
        }
        if self.field_width >= Params::PLOT_LIMIT || self.field_height >= Params::PLOT_LIMIT {
            return Err(ConfigError::FieldOutOfPlotRange {
                width: self.field_width,
                height: self.field_height,
                limit: Params::PLOT_LIMIT,
            });
        }
        Ok(())
    }

    pub fn field(&self) -> GameField {
        GameField::new(self.field_width, self.field_height)
    }

    /// Field center, where the ball serves from
    pub fn center(&self) -> IVec2 {
        self.field().center()
    }

    /// Highest in-range paddle offset
    pub fn paddle_travel(&self) -> i32 {
        self.field_height - self.paddle_length
    }

    /// X of the paddle's left edge, as drawn
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_spacing,
            Side::Right => self.field_width - self.paddle_spacing - self.paddle_width,
        }
    }

    /// X of the paddle face the ball bounces off
    pub fn collision_plane(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_width + self.paddle_spacing,
            Side::Right => self.field_width - self.paddle_width - self.paddle_spacing,
        }
    }

    /// Winner's score at which the next match starts
    pub fn reset_score(&self) -> u32 {
        self.win_score + self.reset_grace
    }

    /// Scale a raw potentiometer sample to a paddle offset.
    ///
    /// Samples outside the calibration range map outside `0..=paddle_travel()`
    /// and the division truncates toward zero, so `raw_min - 1` lands on `-1`.
    pub fn map_paddle_offset(&self, raw: u16) -> i32 {
        (i32::from(raw) - i32::from(self.raw_min)) * self.paddle_travel()
            / (i32::from(self.raw_max) - i32::from(self.raw_min))
    }
}
