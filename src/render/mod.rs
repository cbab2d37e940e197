mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;

pub use frame::{PrimitiveCounts, RenderFrame};
pub use layer_stack::{ChartLayerKind, ChartLayerStack};
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Circle, Color, DrawablePrimitive, FilledPolygon, LabelAnchor, LineSegment, StrokedPolygon,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, ordered `RenderFrame`; they only
/// translate primitives into draw calls, in list order.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
