//! Vector outlines for the marker shapes.
//!
//! Coordinates reproduce the production marker set, sub-pixel offsets
//! included, so rasterized bitmaps stay visually identical across clients.

use glam::Vec2;

use super::key::MarkerShape;

/// One command of a marker outline path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    /// Start a new subpath at the given point.
    MoveTo(Vec2),
    /// Extend the current subpath with a straight segment.
    LineTo(Vec2),
    /// A full circle of the given center and radius, as its own subpath.
    Circle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
    },
}

/// Outline of a marker shape at a given bitmap size.
///
/// Rectangles carry their paint mode themselves; the stroke/fill flag bits
/// only apply to [`ShapeOutline::Path`] outlines.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    /// A path outline, stroked and/or filled per the draw flags.
    Path(Vec<PathCmd>),
    /// An axis-aligned rectangle that is always filled.
    FillRect {
        /// Top-left corner.
        origin: Vec2,
        /// Width and height.
        extent: Vec2,
    },
    /// An axis-aligned rectangle outline that is always stroked.
    StrokeRect {
        /// Top-left corner.
        origin: Vec2,
        /// Width and height.
        extent: Vec2,
    },
}

impl MarkerShape {
    /// Outline of this shape for a square bitmap of edge length `sz` pixels.
    #[must_use]
    pub fn outline(self, sz: f32) -> ShapeOutline {
        use PathCmd::{Circle, LineTo, MoveTo};
        match self {
            Self::HollowCircle => ShapeOutline::Path(vec![Circle {
                center: Vec2::splat(sz / 2.0),
                radius: sz / 2.0 - 0.5,
            }]),
            Self::FilledCircle => ShapeOutline::Path(vec![Circle {
                center: Vec2::splat(sz / 2.0),
                radius: sz / 2.0 - 1.0,
            }]),
            Self::FilledRectangle => ShapeOutline::FillRect {
                origin: Vec2::splat(0.5),
                extent: Vec2::splat(sz - 0.5),
            },
            Self::HollowRectangle => ShapeOutline::StrokeRect {
                origin: Vec2::splat(0.5),
                extent: Vec2::splat(sz - 0.5),
            },
            Self::XCross => ShapeOutline::Path(vec![
                MoveTo(Vec2::new(1.0, 1.0)),
                LineTo(Vec2::new(sz - 2.0, sz - 2.0)),
                MoveTo(Vec2::new(sz - 2.0, 1.0)),
                LineTo(Vec2::new(1.0, sz - 2.0)),
            ]),
            Self::HollowXCross => {
                // Twelve-cornered star: the X arms with notches between them.
                let (lo, hi) = (0.5, sz - 0.5);
                let (q, h, t) = (sz * 0.25, sz * 0.5, sz * 0.75);
                ShapeOutline::Path(vec![
                    MoveTo(Vec2::new(lo, q)),
                    LineTo(Vec2::new(q, lo)),
                    LineTo(Vec2::new(h, q)),
                    LineTo(Vec2::new(t, lo)),
                    LineTo(Vec2::new(hi, q)),
                    LineTo(Vec2::new(t, h)),
                    LineTo(Vec2::new(hi, t)),
                    LineTo(Vec2::new(t, hi)),
                    LineTo(Vec2::new(h, t)),
                    LineTo(Vec2::new(q, hi)),
                    LineTo(Vec2::new(lo, t)),
                    LineTo(Vec2::new(q, h)),
                    LineTo(Vec2::new(lo, q)),
                ])
            }
            Self::PlusCross => ShapeOutline::Path(vec![
                MoveTo(Vec2::new(sz / 2.0 - 0.5, 1.5)),
                LineTo(Vec2::new(sz / 2.0 - 0.5, sz - 1.5)),
                MoveTo(Vec2::new(1.5, sz / 2.0 - 0.5)),
                LineTo(Vec2::new(sz - 1.5, sz / 2.0 - 0.5)),
            ]),
            Self::HollowPlusCross => {
                // Twelve-cornered plus outline at the 1/3 and 2/3 lines.
                let (lo, hi) = (0.5, sz - 0.5);
                let (a, b) = (sz * 0.33 - 0.5, sz * 0.66 + 0.5);
                ShapeOutline::Path(vec![
                    MoveTo(Vec2::new(a, a)),
                    LineTo(Vec2::new(a, lo)),
                    LineTo(Vec2::new(b, lo)),
                    LineTo(Vec2::new(b, a)),
                    LineTo(Vec2::new(hi, a)),
                    LineTo(Vec2::new(hi, b)),
                    LineTo(Vec2::new(b, b)),
                    LineTo(Vec2::new(b, hi)),
                    LineTo(Vec2::new(a, hi)),
                    LineTo(Vec2::new(a, b)),
                    LineTo(Vec2::new(lo, b)),
                    LineTo(Vec2::new(lo, a)),
                    LineTo(Vec2::new(a, a)),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_outlines_end_where_they_start() {
        for shape in [MarkerShape::HollowXCross, MarkerShape::HollowPlusCross]
        {
            let ShapeOutline::Path(cmds) = shape.outline(16.0) else {
                unreachable!("cross outlines are paths");
            };
            let Some(PathCmd::MoveTo(first)) = cmds.first().copied() else {
                unreachable!("paths start with a move");
            };
            let Some(PathCmd::LineTo(last)) = cmds.last().copied() else {
                unreachable!("paths end with a segment");
            };
            assert_eq!(first, last, "{shape} outline is not closed");
        }
    }

    #[test]
    fn test_rectangles_carry_their_paint_mode() {
        assert!(matches!(
            MarkerShape::FilledRectangle.outline(16.0),
            ShapeOutline::FillRect { .. }
        ));
        assert!(matches!(
            MarkerShape::HollowRectangle.outline(16.0),
            ShapeOutline::StrokeRect { .. }
        ));
    }
}
