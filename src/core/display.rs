use crate::domain::model::DisplayState;
use crate::utils::error::ClockError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayCommand {
    Constrain,
    Unconstrain,
    ShowMinutes,
    HideMinutes,
    ShowNumbers,
    HideNumbers,
}

impl DisplayCommand {
    pub const ALL: [DisplayCommand; 6] = [
        DisplayCommand::Constrain,
        DisplayCommand::Unconstrain,
        DisplayCommand::ShowMinutes,
        DisplayCommand::HideMinutes,
        DisplayCommand::ShowNumbers,
        DisplayCommand::HideNumbers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DisplayCommand::Constrain => "constrain",
            DisplayCommand::Unconstrain => "unconstrain",
            DisplayCommand::ShowMinutes => "show-minutes",
            DisplayCommand::HideMinutes => "hide-minutes",
            DisplayCommand::ShowNumbers => "show-numbers",
            DisplayCommand::HideNumbers => "hide-numbers",
        }
    }
}

impl fmt::Display for DisplayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayCommand {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or(ClockError::UnknownCommand { name })
    }
}

/// Sole owner of the display flags. Everything else reads snapshots.
#[derive(Debug, Clone, Default)]
pub struct DisplayController {
    state: DisplayState,
}

impl DisplayController {
    pub fn new(state: DisplayState) -> Self {
        Self { state }
    }

    pub fn apply(&mut self, command: DisplayCommand) {
        let state = &mut self.state;
        match command {
            DisplayCommand::Constrain => state.constrain = true,
            DisplayCommand::Unconstrain => state.constrain = false,
            DisplayCommand::ShowMinutes => state.show_minute_marker = true,
            DisplayCommand::HideMinutes => state.show_minute_marker = false,
            DisplayCommand::ShowNumbers => state.show_numbers = true,
            DisplayCommand::HideNumbers => state.show_numbers = false,
        }
        tracing::debug!("Applied display command {}: {:?}", command, self.state);
    }

    pub fn apply_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = DisplayCommand>,
    {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn snapshot(&self) -> DisplayState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("hide-minutes".parse::<DisplayCommand>().unwrap(), DisplayCommand::HideMinutes);
        assert_eq!(" Show-Numbers\n".parse::<DisplayCommand>().unwrap(), DisplayCommand::ShowNumbers);
        for command in DisplayCommand::ALL {
            assert_eq!(command.to_string().parse::<DisplayCommand>().unwrap(), command);
        }

        match "blink".parse::<DisplayCommand>() {
            Err(ClockError::UnknownCommand { name }) => assert_eq!(name, "blink"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_each_command_touches_one_flag() {
        let mut controller = DisplayController::default();

        controller.apply(DisplayCommand::Unconstrain);
        assert_eq!(
            controller.snapshot(),
            DisplayState {
                constrain: false,
                show_minute_marker: true,
                show_numbers: false,
            }
        );

        controller.apply(DisplayCommand::HideMinutes);
        assert!(!controller.snapshot().show_minute_marker);
        assert!(!controller.snapshot().constrain);

        controller.apply(DisplayCommand::ShowNumbers);
        assert!(controller.snapshot().show_numbers);

        controller.apply_all([
            DisplayCommand::Constrain,
            DisplayCommand::ShowMinutes,
            DisplayCommand::HideNumbers,
        ]);
        assert_eq!(controller.snapshot(), DisplayState::default());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut controller = DisplayController::default();
        let before = controller.snapshot();
        controller.apply(DisplayCommand::ShowNumbers);
        assert!(!before.show_numbers);
        assert!(controller.snapshot().show_numbers);
    }
}
