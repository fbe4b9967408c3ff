//! Seven-segment digits and the hand-placed win banner

use glam::IVec2;

use super::primitives::{draw_circle, draw_line, Axis};
use super::PointPlotter;
use crate::{Config, Score, Side};

const fn lit_by(digits: &[u8]) -> u16 {
    let mut mask = 0;
    let mut i = 0;
    while i < digits.len() {
        mask |= 1 << digits[i];
        i += 1;
    }
    mask
}

/// One stroke of a seven-segment digit
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Start of the stroke in segment lengths from the digit's bottom-left
    start: IVec2,
    axis: Axis,
    /// Bit `n` is set if digit `n` lights this segment
    digits: u16,
}

/// Segments in drawing order: top, top-right, bottom-right, bottom,
/// bottom-left, top-left, middle
const SEGMENTS: [Segment; 7] = [
    Segment {
        start: IVec2::new(0, 2),
        axis: Axis::Horizontal,
        digits: lit_by(&[0, 2, 3, 5, 6, 7, 8, 9]),
    },
    Segment {
        start: IVec2::new(1, 1),
        axis: Axis::Vertical,
        digits: lit_by(&[0, 1, 2, 3, 4, 7, 8, 9]),
    },
    Segment {
        start: IVec2::new(1, 0),
        axis: Axis::Vertical,
        digits: lit_by(&[0, 1, 3, 4, 5, 6, 7, 8, 9]),
    },
    Segment {
        start: IVec2::new(0, 0),
        axis: Axis::Horizontal,
        digits: lit_by(&[0, 2, 3, 5, 6, 8]),
    },
    Segment {
        start: IVec2::new(0, 0),
        axis: Axis::Vertical,
        digits: lit_by(&[0, 2, 6, 8]),
    },
    Segment {
        start: IVec2::new(0, 1),
        axis: Axis::Vertical,
        digits: lit_by(&[0, 4, 5, 6, 8, 9]),
    },
    Segment {
        start: IVec2::new(0, 1),
        axis: Axis::Horizontal,
        digits: lit_by(&[2, 3, 4, 5, 6, 8, 9]),
    },
];

/// Draw the units digit of `n` with its bottom-left corner at `origin`.
/// The digit is one segment wide and two tall.
pub fn draw_digit<P: PointPlotter + ?Sized>(plotter: &mut P, origin: IVec2, n: u32, segment: i32) {
    let bit = 1 << (n % 10);
    for seg in SEGMENTS.iter().filter(|seg| seg.digits & bit != 0) {
        draw_line(plotter, origin + seg.start * segment, segment, seg.axis);
    }
}

/// Both two-digit scores across the top of the field, split by a colon
pub fn draw_scores<P: PointPlotter + ?Sized>(plotter: &mut P, config: &Config, score: &Score) {
    let s = config.segment_length;
    let sp = config.symbol_spacing;
    let mid = config.field_width / 2;
    let top = config.field_height - config.scores_offset;
    let baseline = top - s * 2;

    draw_circle(plotter, IVec2::new(mid, top - sp), config.colon_radius);
    draw_circle(plotter, IVec2::new(mid, top - s * 2 + sp), config.colon_radius);

    draw_digit(plotter, IVec2::new(mid - s * 2 - sp * 2, baseline), score.left / 10, s);
    draw_digit(plotter, IVec2::new(mid - s - sp, baseline), score.left % 10, s);

    draw_digit(plotter, IVec2::new(mid + sp, baseline), score.right / 10, s);
    draw_digit(plotter, IVec2::new(mid + sp * 2 + s, baseline), score.right % 10, s);
}

/// "P1WINS" or "P2WINS", centered on the field
pub fn draw_winner<P: PointPlotter + ?Sized>(plotter: &mut P, config: &Config, winner: Side) {
    let s = config.segment_length;
    let sp = config.symbol_spacing;
    let half_width = (s * 8 + sp * 4) / 2;
    let left = config.field_width / 2 - half_width;
    let mid = config.field_height / 2;
    let low = mid - s;
    let at = |dx: i32, y: i32| IVec2::new(left + dx, y);

    // P
    draw_line(plotter, at(0, low), s, Axis::Vertical);
    draw_line(plotter, at(0, mid), s, Axis::Vertical);
    draw_line(plotter, at(0, mid), s, Axis::Horizontal);
    draw_line(plotter, at(0, mid + s), s, Axis::Horizontal);
    draw_line(plotter, at(s, mid), s, Axis::Vertical);

    draw_digit(plotter, at(s + sp, low), winner.player_number(), s);

    // W
    draw_line(plotter, at(s * 4 + sp, low), s * 2, Axis::Vertical);
    draw_line(plotter, at(s * 9 / 2 + sp, low), s * 2, Axis::Vertical);
    draw_line(plotter, at(s * 5 + sp, low), s * 2, Axis::Vertical);
    draw_line(plotter, at(s * 4 + sp, low), s, Axis::Horizontal);

    // I
    draw_line(plotter, at(s * 11 / 2 + sp * 2, low), s * 2, Axis::Vertical);

    // N
    draw_line(plotter, at(s * 6 + sp * 3, low), s * 2, Axis::Vertical);
    draw_line(plotter, at(s * 6 + sp * 3, mid + s), s, Axis::Horizontal);
    draw_line(plotter, at(s * 7 + sp * 3, low), s * 2, Axis::Vertical);

    // S is a five
    draw_digit(plotter, at(s * 7 + sp * 4, low), 5, s);
}
