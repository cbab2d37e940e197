use crate::core::Viewport;

use super::{ChartLayerKind, ChartLayerStack, DrawablePrimitive, RenderFrame};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub primitives: Vec<DrawablePrimitive>,
}

/// Primitives bucketed by draw layer.
///
/// Builders push into any layer in any order; `flatten` restores the stack's
/// back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: ChartLayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                primitives: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    /// Appends to `kind`; primitives for layers missing from the stack are dropped.
    pub fn push(&mut self, kind: ChartLayerKind, primitive: impl Into<DrawablePrimitive>) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.primitives.push(primitive.into());
        }
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.primitives.len()).sum()
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in self.layers {
            frame.primitives.extend(layer.primitives);
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[ChartLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.primitives.extend(layer.primitives.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
