pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    clock::{FixedClock, SystemClock},
    commands::{forward_commands, spawn_command_reader},
    json::JsonRenderer,
    output::OutputTarget,
    svg::SvgRenderer,
    terminal::TerminalRenderer,
    OutputFormat,
};
pub use crate::core::{
    decomposer::decompose,
    display::{DisplayCommand, DisplayController},
    encoder::encode_time,
    engine::ClockEngine,
    face::ClockFace,
    mapper::map_to_instructions,
};
pub use crate::domain::model::{
    Catalog, ClockReading, Decomposition, DisplayState, DrawInstruction, EncodedTime, Frame, Site,
    SiteColor, SiteId,
};
pub use crate::domain::palette::{Color, Palette, LEGEND};
pub use crate::domain::ports::{ClockSource, Renderer};
pub use crate::utils::error::{ClockError, Result};
