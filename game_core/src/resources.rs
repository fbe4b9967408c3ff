use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player 1
    pub right: u32, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Award a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// First side (left before right) whose score has reached `threshold`
    pub fn leader(&self, threshold: u32) -> Option<Side> {
        if self.left >= threshold {
            Some(Side::Left)
        } else if self.right >= threshold {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_won: Option<Side>, // Set on the frame the win banner first shows
    pub match_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_award_right() {
        let mut score = Score::new();
        score.award(Side::Right);
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
        assert_eq!(score.of(Side::Right), 1);
    }

    #[test]
    fn test_score_leader_left() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_left();
        }
        assert_eq!(score.leader(5), Some(Side::Left), "Left player should win at 5");
    }

    #[test]
    fn test_score_leader_checks_left_first() {
        let score = Score { left: 5, right: 6 };
        assert_eq!(score.leader(5), Some(Side::Left));
    }

    #[test]
    fn test_score_no_leader_below_threshold() {
        let score = Score { left: 4, right: 4 };
        assert_eq!(score.leader(5), None, "No winner below threshold");
    }

    #[test]
    fn test_score_clear() {
        let mut score = Score { left: 8, right: 3 };
        score.clear();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.match_won = Some(Side::Right);
        events.match_reset = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.match_won, None);
        assert!(!events.match_reset);
    }
}
