// Adapters layer: concrete clock sources, renderers and output targets.

pub mod clock;
pub mod commands;
pub mod json;
pub mod output;
pub mod svg;
pub mod terminal;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Svg,
    Json,
}
