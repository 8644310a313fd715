pub mod decomposer;
pub mod display;
pub mod encoder;
pub mod engine;
pub mod face;
pub mod geometry;
pub mod mapper;

pub use crate::domain::model::{
    Catalog, ClockReading, Decomposition, DisplayState, DrawInstruction, EncodedTime, Frame,
    Site, SiteColor, SiteId,
};
pub use crate::domain::ports::{ClockSource, Renderer};
pub use crate::utils::error::Result;
