//! Shape decomposition into individual plot calls

use glam::IVec2;

use super::PointPlotter;
use crate::Params;

/// Direction a line is drawn in from its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rightwards
    Horizontal,
    /// Upwards
    Vertical,
}

impl Axis {
    fn step(self) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::X,
            Axis::Vertical => IVec2::Y,
        }
    }
}

/// Plot a single point, silently dropping anything outside the display's
/// coordinate range
pub fn plot_point<P: PointPlotter + ?Sized>(plotter: &mut P, x: i32, y: i32) {
    let range = 0..Params::PLOT_LIMIT;
    if range.contains(&x) && range.contains(&y) {
        plotter.plot(x as u16, y as u16);
    }
}

/// Plot `length` points from `origin` along `axis`
pub fn draw_line<P: PointPlotter + ?Sized>(
    plotter: &mut P,
    origin: IVec2,
    length: i32,
    axis: Axis,
) {
    let step = axis.step();
    for i in 0..length {
        let p = origin + step * i;
        plot_point(plotter, p.x, p.y);
    }
}

/// Outline of a rectangle whose bottom-left corner is `origin`
pub fn draw_rect<P: PointPlotter + ?Sized>(
    plotter: &mut P,
    origin: IVec2,
    width: i32,
    height: i32,
) {
    draw_line(plotter, origin, height, Axis::Vertical);
    draw_line(plotter, origin + IVec2::new(width, 0), height, Axis::Vertical);
    draw_line(plotter, origin, width, Axis::Horizontal);
    draw_line(plotter, origin + IVec2::new(0, height), width, Axis::Horizontal);
}

/// Filled disk: every offset in `[-r, r)` on both axes strictly inside the radius
pub fn draw_circle<P: PointPlotter + ?Sized>(plotter: &mut P, center: IVec2, radius: i32) {
    for i in -radius..radius {
        for j in -radius..radius {
            if i * i + j * j < radius * radius {
                plot_point(plotter, center.x + i, center.y + j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlotRecorder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plot_point_in_range() {
        let mut rec = PlotRecorder::new();
        plot_point(&mut rec, 0, 0);
        plot_point(&mut rec, 2047, 2047);
        assert_eq!(rec.points(), &[(0, 0), (2047, 2047)]);
    }

    #[test]
    fn test_plot_point_drops_out_of_range() {
        let mut rec = PlotRecorder::new();
        plot_point(&mut rec, -1, 10);
        plot_point(&mut rec, 10, -1);
        plot_point(&mut rec, 2048, 10);
        plot_point(&mut rec, 10, 2048);
        assert!(rec.is_empty(), "Out-of-range points should be dropped");
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut rec = PlotRecorder::new();
        draw_line(&mut rec, IVec2::new(10, 20), 3, Axis::Horizontal);
        assert_eq!(rec.points(), &[(10, 20), (11, 20), (12, 20)]);
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut rec = PlotRecorder::new();
        draw_line(&mut rec, IVec2::new(10, 20), 3, Axis::Vertical);
        assert_eq!(rec.points(), &[(10, 20), (10, 21), (10, 22)]);
    }

    #[test]
    fn test_draw_line_zero_length() {
        let mut rec = PlotRecorder::new();
        draw_line(&mut rec, IVec2::new(10, 20), 0, Axis::Vertical);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_draw_line_clips_pointwise() {
        let mut rec = PlotRecorder::new();
        draw_line(&mut rec, IVec2::new(-2, 5), 4, Axis::Horizontal);
        assert_eq!(rec.points(), &[(0, 5), (1, 5)]);
    }

    #[test]
    fn test_draw_rect_order() {
        let mut rec = PlotRecorder::new();
        draw_rect(&mut rec, IVec2::new(0, 0), 2, 1);
        assert_eq!(
            rec.points(),
            &[(0, 0), (2, 0), (0, 0), (1, 0), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn test_draw_circle_radius_two() {
        let mut rec = PlotRecorder::new();
        draw_circle(&mut rec, IVec2::new(10, 10), 2);
        assert_eq!(
            rec.points(),
            &[
                (9, 9),
                (9, 10),
                (9, 11),
                (10, 9),
                (10, 10),
                (10, 11),
                (11, 9),
                (11, 10),
                (11, 11),
            ]
        );
    }

    #[test]
    fn test_draw_circle_ball_point_count() {
        let mut rec = PlotRecorder::new();
        draw_circle(&mut rec, IVec2::new(500, 350), 5);
        // Lattice points of [-5, 5)^2 strictly inside radius 5
        assert_eq!(rec.len(), 69);
    }
}
