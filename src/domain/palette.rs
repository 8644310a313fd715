use crate::domain::model::SiteColor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_hex(0x000000);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn to_css(&self) -> String {
        if self.alpha >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }

    /// 24-bit ANSI background escape.
    pub fn ansi_background(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    pub fn ansi_foreground(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub empty: Color,
    pub hour: Color,
    pub minute: Color,
    pub hour_and_minute: Color,
    pub border: Color,
    pub label: Color,
    pub marker: Color,
}

impl Palette {
    pub fn fill(&self, color: SiteColor) -> Color {
        match color {
            SiteColor::Empty => self.empty,
            SiteColor::Hour => self.hour,
            SiteColor::Minute => self.minute,
            SiteColor::HourAndMinute => self.hour_and_minute,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Color::from_hex(0xF9EBE0),
            hour: Color::from_hex(0xF45B69),
            minute: Color::from_hex(0x81C14B),
            hour_and_minute: Color::from_hex(0x208AAE),
            border: Color::BLACK,
            label: Color::BLACK,
            marker: Color::BLACK.with_alpha(0.5),
        }
    }
}

pub const LEGEND: &str = "🔴 Red: hours\n🟢 Green: minutes\n🔵 Blue: hours and minutes";
