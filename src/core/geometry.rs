use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::arity::{CenterRule, PolygonArity};
use crate::core::types::{ChartPadding, ChartPoint, Viewport};
use crate::error::ConfigError;

/// Up to eight vertices, stored inline.
pub type VertexList = SmallVec<[ChartPoint; 8]>;

/// Inputs needed to place the polygon inside a drawing region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    pub viewport: Viewport,
    pub padding: ChartPadding,
    pub text_size: f64,
    pub text_padding: f64,
    pub max_label_chars: usize,
}

impl FrameMetrics {
    /// Square side available to the polygon once labels are reserved:
    /// `min(w, h) − 2·text_padding − max_label_chars·text_size`.
    #[must_use]
    pub fn side_budget(self) -> f64 {
        let inner_width = self.viewport.width - self.padding.left - self.padding.right;
        let inner_height = self.viewport.height - self.padding.top - self.padding.bottom;
        inner_width.min(inner_height)
            - 2.0 * self.text_padding
            - self.max_label_chars as f64 * self.text_size
    }
}

/// Resolved center and circumradius of the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonFrame {
    pub arity: PolygonArity,
    pub center: ChartPoint,
    pub radius: f64,
    pub side_budget: f64,
}

impl PolygonFrame {
    pub fn resolve(arity: PolygonArity, metrics: FrameMetrics) -> Result<Self, ConfigError> {
        let side = metrics.side_budget();
        let radius = arity.circumradius(side);
        if !side.is_finite() || side <= 0.0 || !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::DegenerateRadius { side });
        }

        let padding = metrics.padding;
        let inner_width = metrics.viewport.width - padding.left - padding.right;
        let inner_height = metrics.viewport.height - padding.top - padding.bottom;
        let center_x = padding.left + inner_width / 2.0;
        let middle_y = padding.top + inner_height / 2.0;

        let center_y = match arity.center_rule() {
            CenterRule::RegionMiddle => middle_y,
            CenterRule::TopAnchored { height_ratio } => {
                radius
                    + padding.top
                    + metrics.text_size
                    + metrics.text_padding
                    + metrics.viewport.height * height_ratio
            }
            CenterRule::ExtentCentered => {
                let below = radius * (arity.apex_angle() / 2.0).cos();
                middle_y + (radius - below) / 2.0
            }
        };

        Ok(Self {
            arity,
            center: ChartPoint::new(center_x, center_y),
            radius,
            side_budget: side,
        })
    }

    /// Point at `fraction` of the circumradius along spoke `index`.
    #[must_use]
    pub fn point_at(&self, index: usize, fraction: f64) -> ChartPoint {
        let (dx, dy) = self.arity.vertex_direction(index);
        let distance = self.radius * fraction;
        ChartPoint::new(self.center.x + dx * distance, self.center.y + dy * distance)
    }

    /// Vertices of the polygon scaled to `fraction` of the outer ring.
    #[must_use]
    pub fn vertices_at(&self, fraction: f64) -> VertexList {
        (0..self.arity.count())
            .map(|index| self.point_at(index, fraction))
            .collect()
    }

    /// Vertices of ring `ring` out of `ring_count` (ring `ring_count` is the outer one).
    #[must_use]
    pub fn ring_vertices(&self, ring: u32, ring_count: u32) -> VertexList {
        self.vertices_at(f64::from(ring) / f64::from(ring_count))
    }

    #[must_use]
    pub fn outer_vertices(&self) -> VertexList {
        self.vertices_at(1.0)
    }
}
