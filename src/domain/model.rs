use crate::utils::error::{ClockError, Result};
use crate::utils::validation::validate_range;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiteId(pub char);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square region of the face. Positions and sizes are in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub sequence_index: u32,
}

impl Site {
    pub const fn new(id: char, x: u32, y: u32, size: u32, sequence_index: u32) -> Self {
        Self {
            id: SiteId(id),
            x,
            y,
            size,
            sequence_index,
        }
    }
}

pub const LAYOUT_WIDTH_UNITS: u32 = 8;
pub const LAYOUT_HEIGHT_UNITS: u32 = 5;

const STANDARD_SITES: [Site; 5] = [
    Site::new('a', 2, 1, 1, 1),
    Site::new('b', 2, 0, 1, 2),
    Site::new('c', 0, 0, 2, 3),
    Site::new('d', 0, 2, 3, 4),
    Site::new('e', 3, 0, 5, 5),
];

/// Immutable site table shared by the decomposer, the mapper and the renderers.
///
/// Sites keep their declaration order for drawing. Decomposition walks them in
/// priority order instead: larger sizes first, and of two equal sizes the one
/// with the lower sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sites: Vec<Site>,
    priority: Vec<usize>,
    width_units: u32,
    height_units: u32,
}

impl Catalog {
    /// Equal sizes are ordered by ascending sequence index, so `a` is taken before `b`.
    pub fn new(sites: Vec<Site>, width_units: u32, height_units: u32) -> Self {
        let mut priority: Vec<usize> = (0..sites.len()).collect();
        priority.sort_by(|&l, &r| {
            sites[r]
                .size
                .cmp(&sites[l].size)
                .then(sites[l].sequence_index.cmp(&sites[r].sequence_index))
        });

        Self {
            sites,
            priority,
            width_units,
            height_units,
        }
    }

    /// The 8x5 rectangle tiled by squares of 1, 1, 2, 3 and 5.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SITES.to_vec(),
            LAYOUT_WIDTH_UNITS,
            LAYOUT_HEIGHT_UNITS,
        )
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn by_priority(&self) -> impl Iterator<Item = &Site> + '_ {
        self.priority.iter().map(move |&i| &self.sites[i])
    }

    pub fn get(&self, id: SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| site.id == id)
    }

    pub fn total_size(&self) -> u32 {
        self.sites.iter().map(|site| site.size).sum()
    }

    pub fn width_units(&self) -> u32 {
        self.width_units
    }

    pub fn height_units(&self) -> u32 {
        self.height_units
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub target: u32,
    pub sites: BTreeSet<SiteId>,
    /// Part of the target the catalog could not cover. Zero for every target
    /// up to the catalog total.
    pub residual: u32,
}

impl Decomposition {
    pub fn contains(&self, id: SiteId) -> bool {
        self.sites.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn covered(&self) -> u32 {
        self.target - self.residual
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub constrain: bool,
    pub show_minute_marker: bool,
    pub show_numbers: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            constrain: true,
            show_minute_marker: true,
            show_numbers: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteColor {
    Empty,
    Hour,
    Minute,
    HourAndMinute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub site: SiteId,
    pub color: SiteColor,
    pub center_marker: bool,
    pub label: Option<u32>,
}

/// Wall-clock time of day, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        validate_range("hour", hour, 0, 23)?;
        validate_range("minute", minute, 0, 59)?;
        Ok(Self { hour, minute })
    }

    /// Parses 24-hour `HH:MM`.
    pub fn parse(input: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|e| {
            ClockError::InvalidTime {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::new(time.hour(), time.minute())
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedTime {
    pub hour12: u32,
    pub minute_bucket: u32,
    pub minute_remainder: u32,
}

/// Everything computed for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub reading: ClockReading,
    pub encoded: EncodedTime,
    pub hour: Decomposition,
    pub minute: Decomposition,
    pub remainder: Decomposition,
    pub instructions: Vec<DrawInstruction>,
}
