mod primitives;
mod recording;
mod scene;
mod vector;

pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use recording::RecordingSurface;
pub use scene::{build_chart_scene, render_scene, ChartScene, PlotArea, SceneInputs, SceneStyle};
pub use vector::{VectorPageLayout, legend_primitives};

use crate::error::DashResult;

/// Contract implemented by any drawing surface.
///
/// Both the interactive chart host and the static document exporter receive
/// the same fully materialized scene, so drawing code stays isolated from the
/// analytics and geometry logic.
pub trait DrawSurface {
    fn line(&mut self, line: &LinePrimitive) -> DashResult<()>;
    fn rect(&mut self, rect: &RectPrimitive) -> DashResult<()>;
    fn text(&mut self, text: &TextPrimitive) -> DashResult<()>;
}
