use glam::IVec2;

/// The rectangular play area, origin bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameField {
    pub width: i32,
    pub height: i32,
}

impl GameField {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Bottom-left corner
    pub fn origin(&self) -> IVec2 {
        IVec2::ZERO
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// True if a circle at `pos` pokes out past the top or bottom edge
    pub fn crosses_floor_or_ceiling(&self, pos: IVec2, radius: i32) -> bool {
        pos.y + radius > self.height || pos.y - radius < 0
    }
}
