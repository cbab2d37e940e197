use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult, ConfigError};
use crate::render::DrawablePrimitive;

/// Backend-agnostic, ordered draw list for one chart pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<DrawablePrimitive>,
}

/// Per-kind primitive totals of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveCounts {
    pub filled_polygons: usize,
    pub stroked_polygons: usize,
    pub line_segments: usize,
    pub circles: usize,
    pub labels: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: impl Into<DrawablePrimitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ConfigError::InvalidRegion {
                width: self.viewport.width,
                height: self.viewport.height,
            }
            .into());
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        let mut counts = PrimitiveCounts::default();
        for primitive in &self.primitives {
            match primitive {
                DrawablePrimitive::FilledPolygon(_) => counts.filled_polygons += 1,
                DrawablePrimitive::StrokedPolygon(_) => counts.stroked_polygons += 1,
                DrawablePrimitive::LineSegment(_) => counts.line_segments += 1,
                DrawablePrimitive::Circle(_) => counts.circles += 1,
                DrawablePrimitive::LabelAnchor(_) => counts.labels += 1,
            }
        }
        counts
    }

    /// Pretty JSON snapshot, handy for diffing layouts in tests and tools.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Serialization(format!("failed to serialize frame: {err}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::Serialization(format!("failed to parse frame: {err}")))
    }
}
