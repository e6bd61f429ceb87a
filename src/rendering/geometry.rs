//! Proportional shield geometry.
//!
//! Every coordinate is derived from the single `size` value by truncating
//! `size * fraction` to an integer, so a given size always yields the same
//! shapes.

/// 2D point in canvas pixels (pixel centers sit on integer coordinates).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    fn from_ints(x: i32, y: i32) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// Inclusive bounding box, `(x0, y0)` top-left and `(x1, y1)` bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    fn from_ints(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0 as f32, y0 as f32, x1 as f32, y1 as f32)
    }

    /// Square box of half-width `radius` around `center`.
    pub fn around(center: Point, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }
}

/// One shield layer: flat top, straight sides down to `side_y`, a point at
/// `bottom`, and a rounded top made of an ellipse whose lower half is
/// overwritten by a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub center: i32,
    pub left: i32,
    pub right: i32,
    /// Top edge of the polygon part.
    pub polygon_top: i32,
    /// Top edge of the rounded cap.
    pub cap_top: i32,
    pub side_y: i32,
    pub bottom: i32,
    pub top_radius: i32,
}

impl Silhouette {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// False when the insets have crossed over, i.e. the layer would be
    /// drawn mirrored outside its parent.
    pub fn is_drawable(&self) -> bool {
        self.width() >= 0 && self.polygon_top <= self.bottom
    }

    fn summary_line(&self, name: &str) -> String {
        format!(
            "{} left={} right={} polygon_top={} cap_top={} side_y={} bottom={} radius={}",
            name,
            self.left,
            self.right,
            self.polygon_top,
            self.cap_top,
            self.side_y,
            self.bottom,
            self.top_radius
        )
    }

    /// Full outline: top-left, top-right, right side, bottom point, left side.
    pub fn outline(&self) -> Vec<Point> {
        vec![
            Point::from_ints(self.left, self.polygon_top),
            Point::from_ints(self.right, self.polygon_top),
            Point::from_ints(self.right, self.side_y),
            Point::from_ints(self.center, self.bottom),
            Point::from_ints(self.left, self.side_y),
        ]
    }

    /// Outline left of the vertical centerline.
    pub fn left_half(&self) -> Vec<Point> {
        vec![
            Point::from_ints(self.left, self.polygon_top),
            Point::from_ints(self.center, self.polygon_top),
            Point::from_ints(self.center, self.side_y),
            Point::from_ints(self.center, self.bottom),
            Point::from_ints(self.left, self.side_y),
        ]
    }

    /// Outline right of the vertical centerline.
    pub fn right_half(&self) -> Vec<Point> {
        vec![
            Point::from_ints(self.center, self.polygon_top),
            Point::from_ints(self.right, self.polygon_top),
            Point::from_ints(self.right, self.side_y),
            Point::from_ints(self.center, self.bottom),
            Point::from_ints(self.center, self.side_y),
        ]
    }

    /// Ellipse box for the rounded cap spanning `left..=right`.
    pub fn cap_ellipse(&self, left: i32, right: i32) -> Bounds {
        Bounds::from_ints(left, self.cap_top, right, self.cap_top + self.top_radius * 2)
    }

    /// Rectangle that squares off the lower half of [`cap_ellipse`](Self::cap_ellipse).
    pub fn cap_fill(&self, left: i32, right: i32) -> Bounds {
        Bounds::from_ints(
            left,
            self.cap_top + self.top_radius,
            right,
            self.cap_top + self.top_radius * 2,
        )
    }
}

/// Two-stroke checkmark with round caps at the three joints.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkmark {
    pub start: Point,
    pub mid: Point,
    pub end: Point,
    pub stroke_width: u32,
    pub cap_radius: u32,
}

impl Checkmark {
    pub fn joints(&self) -> [Point; 3] {
        [self.start, self.mid, self.end]
    }
}

/// All shapes of one icon, computed for a single canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldGeometry {
    pub size: u32,
    pub outer: Silhouette,
    pub inner: Silhouette,
    pub body: Silhouette,
    pub check: Checkmark,
}

#[inline]
fn frac(size: u32, f: f64) -> i32 {
    (size as f64 * f) as i32
}

impl ShieldGeometry {
    /// Stable one-line-per-shape dump, used for debug logs and goldens.
    pub fn summary(&self) -> String {
        let c = &self.check;
        [
            format!("size {}", self.size),
            self.outer.summary_line("outer"),
            self.inner.summary_line("inner"),
            self.body.summary_line("body"),
            format!(
                "check start=({:.1},{:.1}) mid=({:.1},{:.1}) end=({:.1},{:.1}) stroke={} cap={}",
                c.start.x, c.start.y, c.mid.x, c.mid.y, c.end.x, c.end.y, c.stroke_width, c.cap_radius
            ),
        ]
        .join("\n")
    }

    pub fn for_size(size: u32) -> Self {
        let center = (size / 2) as i32;

        let shield_top = frac(size, 0.12);
        let shield_bottom = frac(size, 0.92);
        let shield_width = frac(size, 0.72);
        let outer_border = frac(size, 0.04).max(2);

        let outer = Silhouette {
            center,
            left: center - shield_width / 2,
            right: center + shield_width / 2,
            polygon_top: shield_top + outer_border,
            cap_top: shield_top,
            side_y: frac(size, 0.70),
            bottom: shield_bottom,
            top_radius: frac(size, 0.13),
        };

        let inner_margin = outer_border + frac(size, 0.02).max(1);
        let inner_top = shield_top + inner_margin;
        let inner_bottom = shield_bottom - frac(size, 0.015).max(1);
        let inner_width = shield_width - inner_margin * 2;
        let inner = Silhouette {
            center,
            left: center - inner_width / 2,
            right: center + inner_width / 2,
            polygon_top: inner_top,
            cap_top: inner_top,
            side_y: frac(size, 0.68),
            bottom: inner_bottom,
            top_radius: frac(size, 0.11),
        };

        let body_margin = frac(size, 0.025).max(2);
        let body_top = inner_top + body_margin;
        let body_width = inner_width - body_margin * 2;
        let body = Silhouette {
            center,
            left: center - body_width / 2,
            right: center + body_width / 2,
            polygon_top: body_top,
            cap_top: body_top,
            side_y: frac(size, 0.66),
            bottom: inner_bottom - body_margin,
            top_radius: frac(size, 0.09),
        };

        let check_size = frac(size, 0.25) as f32;
        let cx = center as f32;
        let cy = frac(size, 0.52) as f32;
        let stroke_width = frac(size, 0.035).max(2) as u32;
        let check = Checkmark {
            start: Point::new(cx - check_size * 0.4, cy),
            mid: Point::new(cx - check_size * 0.1, cy + check_size * 0.3),
            end: Point::new(cx + check_size * 0.4, cy - check_size * 0.2),
            stroke_width,
            cap_radius: (stroke_width / 2).max(1),
        };

        Self {
            size,
            outer,
            inner,
            body,
            check,
        }
    }
}
