//! Host-facing entry points: configuration, validation, layout and caching.

mod chart_config;
mod layout_cache;
mod layout_engine;
mod validation;

pub use chart_config::{
    ChartConfig, ChartStyle, DEFAULT_GRID_LINE_WIDTH, DEFAULT_MARKER_RADIUS, DEFAULT_RING_COUNT,
    DEFAULT_TEXT_PADDING, DEFAULT_TEXT_SIZE,
};
pub use layout_cache::{LayoutCache, LayoutCacheKey, LayoutCacheStats};
pub use layout_engine::PolygonChartLayout;
