//! Pie-chart rendering of the wheel on a ratatui canvas.
//!
//! Chart angles grow clockwise and chart angle 90° is 12 o'clock, where the
//! fixed pointer sits. Screen (math) angle = 180° − chart angle.

use lunch_core::labels::parse_hex_color;
use lunch_core::wheel::{POINTER_ANGLE, slice_angle, slice_at_angle};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use unicode_width::UnicodeWidthStr;

/// Inner radius of the donut hole, relative to the outer radius.
pub const HOLE_RATIO: f64 = 0.35;

/// Radius at which slice labels are centered.
const LABEL_RADIUS: f64 = 0.68;

/// Vertical room above the wheel for the pointer glyph.
const POINTER_MARGIN: f64 = 0.18;

const RADIAL_STEP: f64 = 0.008;
const ANGULAR_STEP_DEG: f64 = 0.4;

/// Converts a chart angle to a point at `radius` in canvas coordinates.
pub fn chart_point(chart_angle: f64, radius: f64) -> (f64, f64) {
    let theta = (180.0 - chart_angle).to_radians();
    (radius * theta.cos(), radius * theta.sin())
}

/// Converts a `#RRGGBB` string to a terminal color.
pub fn to_color(hex: &str) -> Color {
    parse_hex_color(hex).map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Filled donut with one colored slice per entry.
#[derive(Debug, Clone)]
pub struct WheelShape<'a> {
    pub rotation: f64,
    pub colors: &'a [Color],
    pub count: usize,
}

impl Shape for WheelShape<'_> {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        if self.count == 0 || self.colors.is_empty() {
            return;
        }

        let steps = (360.0 / ANGULAR_STEP_DEG) as usize;
        for step in 0..steps {
            let chart_angle = step as f64 * ANGULAR_STEP_DEG;
            let Some(index) = slice_at_angle(chart_angle, self.rotation, self.count) else {
                continue;
            };
            let color = self.colors[index % self.colors.len()];

            let (cos, sin) = chart_point(chart_angle, 1.0);
            let mut radius = HOLE_RATIO;
            while radius <= 1.0 {
                if let Some((x, y)) = painter.get_point(radius * cos, radius * sin) {
                    painter.paint(x, y, color);
                }
                radius += RADIAL_STEP;
            }
        }
    }
}

/// Everything needed to draw one frame of the wheel.
pub struct WheelView<'a> {
    pub rotation: f64,
    pub labels: &'a [String],
    pub colors: &'a [Color],
    pub text_color: Color,
}

/// Canvas bounds keeping the wheel round: terminal cells are about twice
/// as tall as they are wide.
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let y_half = 1.0 + POINTER_MARGIN;
    let height = f64::from(area.height.max(1));
    let width = f64::from(area.width.max(1));
    let x_half = y_half * width / (2.0 * height);
    ([-x_half, x_half], [-y_half, y_half])
}

pub fn render_wheel(frame: &mut Frame, area: Rect, view: &WheelView<'_>) {
    let count = view.labels.len();
    let (x_bounds, y_bounds) = canvas_bounds(area);
    let cell_width = (x_bounds[1] - x_bounds[0]) / f64::from(area.width.max(1));
    let cell_height = (y_bounds[1] - y_bounds[0]) / f64::from(area.height.max(1));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&WheelShape {
                rotation: view.rotation,
                colors: view.colors,
                count,
            });
            ctx.layer();

            let label_style = Style::default()
                .fg(view.text_color)
                .add_modifier(Modifier::BOLD);
            let slice = slice_angle(count);
            for (i, label) in view.labels.iter().enumerate() {
                let center = view.rotation + (i as f64 + 0.5) * slice;
                let (x, y) = chart_point(center, LABEL_RADIUS);
                let lines: Vec<&str> = label.lines().collect();
                let top = y + cell_height * (lines.len() as f64 - 1.0) / 2.0;
                for (row, text) in lines.iter().enumerate() {
                    let half = text.width() as f64 * cell_width / 2.0;
                    ctx.print(
                        x - half,
                        top - row as f64 * cell_height,
                        Line::from(Span::styled((*text).to_string(), label_style)),
                    );
                }
            }

            let (px, py) = chart_point(POINTER_ANGLE, 1.0 + POINTER_MARGIN / 2.0);
            ctx.print(
                px - cell_width / 2.0,
                py,
                Line::from(Span::styled(
                    "▼",
                    Style::default()
                        .fg(Color::Rgb(0x1E, 0x2A, 0x38))
                        .add_modifier(Modifier::BOLD),
                )),
            );
        });

    frame.render_widget(canvas, area);
}
