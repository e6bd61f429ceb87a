//! Paint commands and the ordered display list for one icon

use super::geometry::{Bounds, Point, ShieldGeometry, Silhouette};
use image::Rgb;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const DARK_BLUE: Rgb<u8> = Rgb([0, 50, 100]);
pub const LIGHT_GRAY: Rgb<u8> = Rgb([220, 220, 220]);
pub const LIGHTER_BLUE: Rgb<u8> = Rgb([50, 180, 255]);
pub const DARKER_BLUE: Rgb<u8> = Rgb([30, 120, 200]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas.
    Clear { color: Rgb<u8> },
    Polygon { points: Vec<Point>, color: Rgb<u8> },
    Ellipse { bounds: Bounds, color: Rgb<u8> },
    Rect { bounds: Bounds, color: Rgb<u8> },
    /// Straight stroke with square ends.
    Line {
        from: Point,
        to: Point,
        width: u32,
        color: Rgb<u8>,
    },
    Disc {
        center: Point,
        radius: f32,
        color: Rgb<u8>,
    },
}

impl PaintCommand {
    pub fn color(&self) -> Rgb<u8> {
        match self {
            PaintCommand::Clear { color }
            | PaintCommand::Polygon { color, .. }
            | PaintCommand::Ellipse { color, .. }
            | PaintCommand::Rect { color, .. }
            | PaintCommand::Line { color, .. }
            | PaintCommand::Disc { color, .. } => *color,
        }
    }
}

fn rounded_cap(s: &Silhouette, left: i32, right: i32, color: Rgb<u8>, out: &mut Vec<PaintCommand>) {
    out.push(PaintCommand::Ellipse {
        bounds: s.cap_ellipse(left, right),
        color,
    });
    out.push(PaintCommand::Rect {
        bounds: s.cap_fill(left, right),
        color,
    });
}

fn solid_layer(s: &Silhouette, color: Rgb<u8>, out: &mut Vec<PaintCommand>) {
    if !s.is_drawable() {
        log::debug!("skipping collapsed layer {:?}", s);
        return;
    }
    out.push(PaintCommand::Polygon {
        points: s.outline(),
        color,
    });
    rounded_cap(s, s.left, s.right, color, out);
}

/// Build the back-to-front command list. Later commands overwrite earlier
/// ones, so the order is part of the output.
pub fn display_list(g: &ShieldGeometry) -> Vec<PaintCommand> {
    let mut out = Vec::with_capacity(20);

    out.push(PaintCommand::Clear { color: BLACK });

    // dark blue border, then the light gray rim on top of it
    solid_layer(&g.outer, DARK_BLUE, &mut out);
    solid_layer(&g.inner, LIGHT_GRAY, &mut out);

    // two-tone body, split at the centerline
    let body = &g.body;
    if body.is_drawable() {
        out.push(PaintCommand::Polygon {
            points: body.left_half(),
            color: LIGHTER_BLUE,
        });
        out.push(PaintCommand::Polygon {
            points: body.right_half(),
            color: DARKER_BLUE,
        });
        rounded_cap(body, body.left, body.center, LIGHTER_BLUE, &mut out);
        rounded_cap(body, body.center, body.right, DARKER_BLUE, &mut out);
    } else {
        log::debug!("skipping collapsed body {:?}", body);
    }

    let check = &g.check;
    out.push(PaintCommand::Line {
        from: check.start,
        to: check.mid,
        width: check.stroke_width,
        color: WHITE,
    });
    out.push(PaintCommand::Line {
        from: check.mid,
        to: check.end,
        width: check.stroke_width,
        color: WHITE,
    });
    for joint in check.joints() {
        out.push(PaintCommand::Disc {
            center: joint,
            radius: check.cap_radius as f32,
            color: WHITE,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_list_starts_with_black_background() {
        let list = display_list(&ShieldGeometry::for_size(48));
        assert_eq!(list[0], PaintCommand::Clear { color: BLACK });
    }

    #[test]
    fn layers_are_painted_back_to_front() {
        let list = display_list(&ShieldGeometry::for_size(128));
        let colors: Vec<_> = list.iter().map(|c| c.color()).collect();
        let first = |c: Rgb<u8>| colors.iter().position(|&x| x == c).unwrap();
        let last = |c: Rgb<u8>| colors.iter().rposition(|&x| x == c).unwrap();

        assert!(last(DARK_BLUE) < first(LIGHT_GRAY));
        assert!(last(LIGHT_GRAY) < first(LIGHTER_BLUE));
        assert!(last(LIGHT_GRAY) < first(DARKER_BLUE));
        assert!(last(LIGHTER_BLUE).max(last(DARKER_BLUE)) < first(WHITE));
    }

    #[test]
    fn collapsed_layers_are_left_out() {
        let list = display_list(&ShieldGeometry::for_size(4));
        assert!(list.iter().any(|c| c.color() == DARK_BLUE));
        assert!(list.iter().all(|c| c.color() != LIGHT_GRAY));
        assert!(list.iter().all(|c| c.color() != LIGHTER_BLUE && c.color() != DARKER_BLUE));
        assert!(list.iter().any(|c| c.color() == WHITE));
    }

    #[test]
    fn checkmark_has_two_strokes_and_three_caps() {
        let list = display_list(&ShieldGeometry::for_size(16));
        let lines = list
            .iter()
            .filter(|c| matches!(c, PaintCommand::Line { .. }))
            .count();
        let discs = list
            .iter()
            .filter(|c| matches!(c, PaintCommand::Disc { .. }))
            .count();
        assert_eq!(lines, 2);
        assert_eq!(discs, 3);
    }
}
