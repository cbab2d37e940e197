pub mod arity;
pub mod attributes;
pub mod geometry;
pub mod types;

pub use arity::{CenterRule, LabelPlacement, Orientation, PolygonArity, RadiusRule, SideBaseline};
pub use attributes::{Attribute, AttributeSet};
pub use geometry::{FrameMetrics, PolygonFrame, VertexList};
pub use types::{ChartPadding, ChartPoint, Viewport};
