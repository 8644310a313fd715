use crate::core::{Catalog, DisplayState, Frame, Renderer, Result};

/// Dumps the frame itself, draw instructions included.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    compact: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, _catalog: &Catalog, frame: &Frame, _display: &DisplayState) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(frame)?
        } else {
            serde_json::to_string_pretty(frame)?
        };
        Ok(json)
    }
}
