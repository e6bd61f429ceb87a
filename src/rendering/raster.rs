//! Rasterizes paint commands onto a tiny-skia pixmap, plus PNG encoding

use super::geometry::{Bounds, Point, ShieldGeometry};
use super::paint::{display_list, PaintCommand};
use super::{validate_size, RenderedIcon};
use crate::{Error, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

// Geometry puts pixel centers on integer coordinates; tiny-skia samples at +0.5.
const CENTER: f32 = 0.5;
// Outset for ovals so pixel centers lying exactly on the boundary are filled.
const EPS: f32 = 0.05;
// Polygon outline width: covers pixel centers on the edges, and keeps
// zero-area polygons visible.
const OUTLINE_WIDTH: f32 = 1.1;

fn solid(color: Rgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    let [r, g, b] = color.0;
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

fn polyline(points: &[Point], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x + CENTER, first.y + CENTER);
    for p in rest {
        pb.line_to(p.x + CENTER, p.y + CENTER);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

/// Square opaque RGB canvas, non-anti-aliased. Drawing clips to the pixmap.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
        let mut canvas = Self { pixmap };
        canvas.clear(Rgb([0, 0, 0]));
        Ok(canvas)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixmap
            .pixel(x, y)
            .map(|c| Rgb([c.red(), c.green(), c.blue()]))
            .unwrap_or(Rgb([0, 0, 0]))
    }

    /// Copy out the pixels with the (always opaque) alpha channel dropped.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let rgb: Vec<u8> = self
            .pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(self.pixmap.width(), self.pixmap.height(), rgb)
            .ok_or_else(|| Error::Encode("pixmap size does not match RGB buffer".into()))
    }

    pub fn apply(&mut self, cmd: &PaintCommand) {
        match cmd {
            PaintCommand::Clear { color } => self.clear(*color),
            PaintCommand::Polygon { points, color } => self.fill_polygon(points, *color),
            PaintCommand::Ellipse { bounds, color } => self.fill_ellipse(*bounds, *color),
            PaintCommand::Rect { bounds, color } => self.fill_rect(*bounds, *color),
            PaintCommand::Line {
                from,
                to,
                width,
                color,
            } => self.stroke_line(*from, *to, *width, *color),
            PaintCommand::Disc {
                center,
                radius,
                color,
            } => self.fill_ellipse(Bounds::around(*center, *radius), *color),
        }
    }

    pub fn clear(&mut self, color: Rgb<u8>) {
        let [r, g, b] = color.0;
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    /// Fill the polygon, then outline it so edge pixels (and degenerate
    /// polygons) are covered.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb<u8>) {
        let Some(path) = polyline(points, true) else {
            return;
        };
        let paint = solid(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);

        let outline = Stroke {
            width: OUTLINE_WIDTH,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &outline, Transform::identity(), None);
    }

    /// Fill the ellipse inscribed in an inclusive bounding box.
    pub fn fill_ellipse(&mut self, b: Bounds, color: Rgb<u8>) {
        let oval = Rect::from_ltrb(
            b.x0 + CENTER - EPS,
            b.y0 + CENTER - EPS,
            b.x1 + CENTER + EPS,
            b.y1 + CENTER + EPS,
        )
        .and_then(PathBuilder::from_oval);
        if let Some(path) = oval {
            self.pixmap.fill_path(
                &path,
                &solid(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Fill an inclusive rectangle of whole pixels.
    pub fn fill_rect(&mut self, b: Bounds, color: Rgb<u8>) {
        let rect = Rect::from_ltrb(
            b.x0.ceil(),
            b.y0.ceil(),
            b.x1.floor() + 1.0,
            b.y1.floor() + 1.0,
        );
        if let Some(rect) = rect {
            self.pixmap
                .fill_rect(rect, &solid(color), Transform::identity(), None);
        }
    }

    /// Straight stroke with butt ends; callers round them with discs.
    pub fn stroke_line(&mut self, from: Point, to: Point, width: u32, color: Rgb<u8>) {
        let Some(path) = polyline(&[from, to], false) else {
            return;
        };
        let stroke = Stroke {
            width: width.max(1) as f32,
            line_cap: LineCap::Butt,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }
}

/// Encode an RGB buffer as PNG (8-bit RGB, no alpha).
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

/// Paint the full shield icon onto a fresh canvas.
pub fn paint_icon(size: u32) -> Result<Canvas> {
    validate_size(size)?;
    let geometry = ShieldGeometry::for_size(size);
    log::debug!("{}px geometry:\n{}", size, geometry.summary());
    let mut canvas = Canvas::new(size)?;
    for (i, cmd) in display_list(&geometry).iter().enumerate() {
        log::debug!("{}px layer {}: {:?}", size, i, cmd);
        canvas.apply(cmd);
    }
    Ok(canvas)
}

/// Render the icon for `size` and encode it as PNG bytes.
pub fn rasterize(size: u32) -> Result<RenderedIcon> {
    let canvas = paint_icon(size)?;
    let png_data = encode_png(&canvas.to_rgb_image()?)?;
    log::debug!("rasterized {}x{} icon into {} PNG bytes", size, size, png_data.len());
    Ok(RenderedIcon { size, png_data })
}
