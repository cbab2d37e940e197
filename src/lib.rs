//! polygon-chart-rs: geometry engine for regular-polygon distribution charts.
//!
//! Given three to eight attributes, a ring count and one normalized score per
//! attribute, the engine lays out grid rings, spokes, label anchors and the
//! data overlay as an ordered list of backend-agnostic draw primitives.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartStyle, LayoutCache, PolygonChartLayout};
pub use core::{Attribute, AttributeSet, PolygonArity, Viewport};
pub use error::{ChartError, ChartResult, ConfigError};
