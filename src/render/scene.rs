use serde::{Deserialize, Serialize};

use crate::core::axis::AxisPlan;
use crate::core::projection::{ProjectionFrame, SeriesKind, ShadeRegion};
use crate::error::DashResult;
use crate::render::primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};
use crate::render::DrawSurface;

/// Target plot rectangle in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    fn x(self, normalized: f64) -> f64 {
        self.left + normalized * self.width()
    }

    fn y(self, normalized: f64) -> f64 {
        self.bottom - normalized * self.height()
    }
}

/// Visual constants shared by both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    pub axis_color: Color,
    pub grid_color: Color,
    pub shade_fill: Color,
    pub label_color: Color,
    pub axis_stroke_width: f64,
    pub grid_stroke_width: f64,
    pub series_stroke_width: f64,
    pub marker_radius: f64,
    pub title_font_size: f64,
    pub tick_font_size: f64,
    pub value_intervals: usize,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            grid_color: Color::rgb(230.0 / 255.0, 234.0 / 255.0, 242.0 / 255.0),
            shade_fill: Color::rgba(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0, 0.08),
            label_color: Color::BLACK,
            axis_stroke_width: 0.8,
            grid_stroke_width: 0.3,
            series_stroke_width: 2.0,
            marker_radius: 2.4,
            title_font_size: 13.0,
            tick_font_size: 9.0,
            value_intervals: 4,
        }
    }
}

/// Everything the scene builder needs for one chart cell.
#[derive(Debug, Clone)]
pub struct SceneInputs<'a> {
    pub frame: &'a ProjectionFrame,
    pub axis: &'a AxisPlan,
    pub shade: Option<ShadeRegion>,
    pub title: &'a str,
    pub y_label: &'a str,
    /// Stroke color per projected series, parallel to `frame.series`.
    pub series_colors: &'a [Color],
    /// Forces dashed strokes for every series (the 0.25-step policy chart).
    pub dashed: bool,
}

/// Materialized draw commands for one chart, ready for any surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl ChartScene {
    pub fn validate(&self) -> DashResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Builds the full scene for one chart cell from shared geometry.
///
/// Both surfaces call this with identical inputs and differ only in where the
/// plot area sits on their page or widget, so gridlines, ticks, shading, and
/// series geometry can never diverge between them.
#[must_use]
pub fn build_chart_scene(inputs: &SceneInputs<'_>, area: PlotArea, style: &SceneStyle) -> ChartScene {
    let mut scene = ChartScene::default();

    if !inputs.title.is_empty() {
        scene.texts.push(TextPrimitive::new(
            inputs.title,
            area.left + area.width() / 2.0,
            area.top - 8.0,
            style.title_font_size,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    if let Some(shade) = inputs.shade {
        let x0 = area.x(shade.x0);
        let x1 = area.x(shade.x1);
        scene.rects.push(RectPrimitive::new(
            x0,
            area.top,
            x1 - x0,
            area.height(),
            style.shade_fill,
        ));
    }

    // Value gridlines and tick labels.
    let intervals = style.value_intervals.max(1);
    let value_span = inputs.frame.max_value - inputs.frame.min_value;
    for i in 0..=intervals {
        let fraction = i as f64 / intervals as f64;
        let value = inputs.frame.min_value + value_span * fraction;
        let y = area.y(fraction);
        scene.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right,
            y,
            style.grid_stroke_width,
            style.grid_color,
            LineStrokeStyle::Solid,
        ));
        scene.texts.push(TextPrimitive::new(
            format!("{value:.1}"),
            area.left - 4.0,
            y + 2.0,
            style.tick_font_size,
            style.label_color,
            TextHAlign::Right,
        ));
    }

    // Period gridlines, tick marks, and labels from the shared axis plan.
    for tick in &inputs.axis.ticks {
        let normalized = inputs.frame.x_of(tick.period);
        if !(0.0..=1.0).contains(&normalized) {
            continue;
        }
        let x = area.x(normalized);
        scene.lines.push(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom,
            style.grid_stroke_width,
            style.grid_color,
            LineStrokeStyle::Solid,
        ));
        scene.lines.push(LinePrimitive::new(
            x,
            area.bottom,
            x,
            area.bottom - 4.0,
            style.axis_stroke_width,
            style.axis_color,
            LineStrokeStyle::Solid,
        ));
        scene.texts.push(TextPrimitive::new(
            tick.label.clone(),
            x,
            area.bottom + 10.0,
            style.tick_font_size,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    // Axis frame: left and bottom edges.
    scene.lines.push(LinePrimitive::new(
        area.left,
        area.top,
        area.left,
        area.bottom,
        style.axis_stroke_width,
        style.axis_color,
        LineStrokeStyle::Solid,
    ));
    scene.lines.push(LinePrimitive::new(
        area.left,
        area.bottom,
        area.right,
        area.bottom,
        style.axis_stroke_width,
        style.axis_color,
        LineStrokeStyle::Solid,
    ));

    // Series polylines and point markers.
    for (series, &color) in inputs.frame.series.iter().zip(inputs.series_colors) {
        let stroke = if inputs.dashed || series.kind == SeriesKind::Trend {
            LineStrokeStyle::Dashed
        } else {
            LineStrokeStyle::Solid
        };
        for pair in series.points.windows(2) {
            scene.lines.push(LinePrimitive::new(
                area.x(pair[0].x),
                area.y(pair[0].y),
                area.x(pair[1].x),
                area.y(pair[1].y),
                style.series_stroke_width,
                color,
                stroke,
            ));
        }
        for point in &series.points {
            let r = style.marker_radius;
            scene.rects.push(RectPrimitive::new(
                area.x(point.x) - r,
                area.y(point.y) - r,
                2.0 * r,
                2.0 * r,
                color,
            ));
        }
    }

    if !inputs.y_label.is_empty() {
        scene.texts.push(TextPrimitive::new(
            inputs.y_label,
            area.left - 28.0,
            area.top + area.height() / 2.0,
            style.tick_font_size,
            style.label_color,
            TextHAlign::Left,
        ));
    }

    scene
}

/// Replays a validated scene onto a surface: fills first, then strokes, then
/// labels, so shading always sits underneath series geometry.
pub fn render_scene<S: DrawSurface>(scene: &ChartScene, surface: &mut S) -> DashResult<()> {
    scene.validate()?;
    for rect in &scene.rects {
        surface.rect(rect)?;
    }
    for line in &scene.lines {
        surface.line(line)?;
    }
    for text in &scene.texts {
        surface.text(text)?;
    }
    Ok(())
}
