use serde::{Deserialize, Serialize};

/// Draw layers of one chart, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayerKind {
    RingFill,
    GridOutline,
    Spokes,
    Labels,
    OverlayFill,
    OverlayOutline,
    OverlayConnectors,
    Markers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayerStack {
    pub layers: Vec<ChartLayerKind>,
}

impl ChartLayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                ChartLayerKind::RingFill,
                ChartLayerKind::GridOutline,
                ChartLayerKind::Spokes,
                ChartLayerKind::Labels,
                ChartLayerKind::OverlayFill,
                ChartLayerKind::OverlayOutline,
                ChartLayerKind::OverlayConnectors,
                ChartLayerKind::Markers,
            ],
        }
    }

    /// Grid and label layers only, for hosts that draw the data overlay themselves.
    #[must_use]
    pub fn background_only() -> Self {
        Self {
            layers: vec![
                ChartLayerKind::RingFill,
                ChartLayerKind::GridOutline,
                ChartLayerKind::Spokes,
                ChartLayerKind::Labels,
            ],
        }
    }
}

impl Default for ChartLayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}
