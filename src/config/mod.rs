// Command line configuration, only built with the `cli` feature.

use crate::adapters::{
    clock::{FixedClock, SystemClock},
    json::JsonRenderer,
    svg::SvgRenderer,
    terminal::TerminalRenderer,
    OutputFormat,
};
use crate::core::display::DisplayCommand;
use crate::core::{ClockReading, ClockSource, DisplayState, Renderer};
use crate::domain::palette::Palette;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "fib-clock")]
#[command(about = "Shows the time on a Fibonacci clock face")]
pub struct CliConfig {
    /// Show this time (24-hour HH:MM) instead of the local time
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// SVG surface width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// SVG surface height in pixels
    #[arg(long, default_value = "500")]
    pub height: u32,

    /// Terminal grid width in characters
    #[arg(long, default_value = "48")]
    pub cols: usize,

    /// Terminal grid height in lines
    #[arg(long, default_value = "15")]
    pub rows: usize,

    /// Stretch the face to the whole surface
    #[arg(long)]
    pub unconstrained: bool,

    /// Hide the sub-five-minute markers
    #[arg(long)]
    pub hide_minutes: bool,

    /// Label every square with its size
    #[arg(long)]
    pub numbers: bool,

    /// Display command applied after the flags, in order (repeatable)
    #[arg(long = "command", value_name = "NAME")]
    pub commands: Vec<String>,

    /// Plain characters instead of ANSI colours
    #[arg(long)]
    pub no_color: bool,

    /// Keep re-rendering; stdin lines are read as display commands
    #[arg(long)]
    pub watch: bool,

    #[arg(long, default_value = "100")]
    pub interval_ms: u64,

    /// Print the colour legend to stderr first
    #[arg(long)]
    pub legend: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            constrain: !self.unconstrained,
            show_minute_marker: !self.hide_minutes,
            show_numbers: self.numbers,
        }
    }

    pub fn display_commands(&self) -> Result<Vec<DisplayCommand>> {
        self.commands.iter().map(|name| name.parse()).collect()
    }

    pub fn fixed_reading(&self) -> Result<Option<ClockReading>> {
        self.at.as_deref().map(ClockReading::parse).transpose()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn clock(&self) -> Result<Box<dyn ClockSource>> {
        let clock: Box<dyn ClockSource> = match self.fixed_reading()? {
            Some(reading) => {
                tracing::debug!("Using fixed time {}", reading);
                Box::new(FixedClock(reading))
            }
            None => Box::new(SystemClock),
        };
        Ok(clock)
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        let palette = Palette::default();
        match self.format {
            OutputFormat::Text => Box::new(
                TerminalRenderer::new(self.cols, self.rows, palette).with_color(!self.no_color),
            ),
            OutputFormat::Svg => Box::new(SvgRenderer::new(self.width, self.height, palette)),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("width", self.width, 1)?;
        validate_positive_number("height", self.height, 1)?;
        validate_positive_number("cols", self.cols, 1)?;
        validate_positive_number("rows", self.rows, 1)?;
        validate_positive_number("interval_ms", self.interval_ms, 1)?;
        self.fixed_reading()?;
        self.display_commands()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClockError;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("fib-clock").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.display_state(), DisplayState::default());
        assert_eq!(config.interval(), Duration::from_millis(100));
        assert!(config.fixed_reading().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_and_commands() {
        let config = parse(&[
            "--at",
            "21:05",
            "--format",
            "svg",
            "--unconstrained",
            "--numbers",
            "--command",
            "hide-minutes",
            "--command",
            "constrain",
        ]);

        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(
            config.fixed_reading().unwrap(),
            Some(ClockReading { hour: 21, minute: 5 })
        );
        assert_eq!(
            config.display_state(),
            DisplayState {
                constrain: false,
                show_minute_marker: true,
                show_numbers: true,
            }
        );
        assert_eq!(
            config.display_commands().unwrap(),
            vec![DisplayCommand::HideMinutes, DisplayCommand::Constrain]
        );
        assert_eq!(config.clock().unwrap().now(), ClockReading { hour: 21, minute: 5 });
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            parse(&["--interval-ms", "0"]).validate(),
            Err(ClockError::InvalidConfigValueError { .. })
        ));
        assert!(matches!(
            parse(&["--at", "25:00"]).validate(),
            Err(ClockError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse(&["--command", "blink"]).validate(),
            Err(ClockError::UnknownCommand { .. })
        ));
    }
}
