use std::fmt::Write;

use egui::{Color32, Painter, Pos2, Stroke as EguiStroke, Vec2};

use super::css_color;

/// Freehand stroke: a connected polyline drawn while the pointer is held.
///
/// Width and color are captured at creation and never change afterwards,
/// so later tool-state edits cannot restyle an already-committed stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Create a stroke starting at `origin`. A stroke always has at least
    /// one point.
    pub fn new(origin: Pos2, width: f32, color: Color32) -> Self {
        Self {
            points: vec![origin],
            width,
            color,
        }
    }

    pub fn from_points(points: Vec<Pos2>, width: f32, color: Color32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            width,
            color,
        })
    }

    /// Append a point while the pointer is held down.
    pub fn push_point(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn draw(&self, painter: &Painter, offset: Vec2) {
        if self.points.len() < 2 {
            // A just-started stroke is a dot.
            painter.circle_filled(self.points[0] + offset, self.width / 2.0, self.color);
            return;
        }

        let points = self.points.iter().map(|p| *p + offset).collect();
        painter.add(egui::Shape::line(
            points,
            EguiStroke::new(self.width, self.color),
        ));
    }

    pub(crate) fn write_svg(&self, svg: &mut String) {
        let color = css_color(self.color);

        if self.points.len() < 2 {
            let p = self.points[0];
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{color}\"/>",
                p.x,
                p.y,
                self.width / 2.0,
            );
            return;
        }

        svg.push_str("<polyline points=\"");
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                svg.push(' ');
            }
            let _ = write!(svg, "{},{}", p.x, p.y);
        }
        let _ = write!(
            svg,
            "\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            self.width,
        );
    }
}
