use crate::core::decomposer::decompose;
use crate::core::encoder::encode_time;
use crate::core::mapper::map_to_instructions;
use crate::domain::model::{Catalog, ClockReading, DisplayState, Frame};

/// Turns clock readings into frames over one injected catalog.
#[derive(Debug, Clone, Default)]
pub struct ClockFace {
    catalog: Catalog,
}

impl ClockFace {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn frame(&self, reading: ClockReading, flags: &DisplayState) -> Frame {
        let encoded = encode_time(reading);
        let hour = decompose(encoded.hour12, &self.catalog);
        let minute = decompose(encoded.minute_bucket, &self.catalog);
        let remainder = decompose(encoded.minute_remainder, &self.catalog);
        let instructions = map_to_instructions(&self.catalog, &hour, &minute, &remainder, flags);

        tracing::trace!(
            "Frame for {}: hour {:?}, minute {:?}, remainder {:?}",
            reading,
            hour.sites,
            minute.sites,
            remainder.sites
        );

        Frame {
            reading,
            encoded,
            hour,
            minute,
            remainder,
            instructions,
        }
    }
}
