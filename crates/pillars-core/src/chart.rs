//! The four-pillar chart model and its raw-string input boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ChartError;
use crate::symbols::{Branch, Stem};

/// Pillar position, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Year,
        Position::Month,
        Position::Day,
        Position::Hour,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Accepts `"甲子"`, `"jia zi"`, `"jia-zi"` and `"Jia_Zi"`.
impl FromStr for Pillar {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() == 2 {
            if let (Some(stem), Some(branch)) =
                (Stem::from_glyph(chars[0]), Branch::from_glyph(chars[1]))
            {
                return Ok(Self::new(stem, branch));
            }
        }
        let parts: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [stem, branch] => Ok(Self::new(stem.parse()?, branch.parse()?)),
            _ => Err(ChartError::MalformedPillar {
                input: s.to_string(),
            }),
        }
    }
}

/// A complete chart. The day stem is the reference stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl Chart {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four pillar strings. An hour of `"-"` or `""` means unknown.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, ChartError> {
        ChartInput {
            year: PillarInput::Ganji(year.to_string()),
            month: PillarInput::Ganji(month.to_string()),
            day: PillarInput::Ganji(day.to_string()),
            hour: Some(PillarInput::Ganji(hour.to_string())),
        }
        .to_chart()
    }

    pub fn reference_stem(&self) -> Stem {
        self.day.stem
    }

    pub fn has_hour(&self) -> bool {
        self.hour.is_some()
    }

    pub fn pillar(&self, position: Position) -> Option<Pillar> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => Some(self.day),
            Position::Hour => self.hour,
        }
    }

    /// Stems in position order; the hour slot is `None` when unknown.
    pub fn stems(&self) -> [Option<Stem>; 4] {
        Position::ALL.map(|p| self.pillar(p).map(|x| x.stem))
    }

    pub fn branches(&self) -> [Option<Branch>; 4] {
        Position::ALL.map(|p| self.pillar(p).map(|x| x.branch))
    }

    pub fn present_pillars(&self) -> impl Iterator<Item = (Position, Pillar)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|p| self.pillar(p).map(|x| (p, x)))
    }

    pub fn present_branches(&self) -> impl Iterator<Item = (Position, Branch)> + '_ {
        self.present_pillars().map(|(p, x)| (p, x.branch))
    }

    /// Visible stems excluding the reference (day) stem.
    pub fn other_stems(&self) -> impl Iterator<Item = (Position, Stem)> + '_ {
        self.present_pillars()
            .filter(|(p, _)| *p != Position::Day)
            .map(|(p, x)| (p, x.stem))
    }

    /// Copy of the chart with the hour pillar dropped.
    pub fn without_hour(&self) -> Chart {
        Chart {
            hour: None,
            ..*self
        }
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.year, self.month, self.day)?;
        match self.hour {
            Some(h) => write!(f, "{h}"),
            None => f.write_str("--"),
        }
    }
}

/// Raw pillar as it arrives from a caller: either a two-symbol string or
/// separate stem/branch strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PillarInput {
    Ganji(String),
    Parts { stem: String, branch: String },
}

impl PillarInput {
    fn is_unknown(&self) -> bool {
        match self {
            Self::Ganji(s) => is_unknown_marker(s),
            Self::Parts { stem, branch } => is_unknown_marker(stem) && is_unknown_marker(branch),
        }
    }

    fn parse(&self, position: Position) -> Result<Pillar, ChartError> {
        let parsed = match self {
            Self::Ganji(s) => s.parse::<Pillar>(),
            Self::Parts { stem, branch } => stem
                .parse::<Stem>()
                .and_then(|s| branch.parse::<Branch>().map(|b| Pillar::new(s, b))),
        };
        parsed.map_err(|e| ChartError::InvalidPillar {
            position: position.name().to_string(),
            source: Box::new(e),
        })
    }
}

fn is_unknown_marker(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.chars().all(|c| c == '-')
}

/// Serde-facing chart input. Validates shape when converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    pub year: PillarInput,
    pub month: PillarInput,
    pub day: PillarInput,
    #[serde(default)]
    pub hour: Option<PillarInput>,
}

impl ChartInput {
    pub fn to_chart(&self) -> Result<Chart, ChartError> {
        let required = [
            (Position::Year, &self.year),
            (Position::Month, &self.month),
            (Position::Day, &self.day),
        ];
        for (position, input) in required {
            if input.is_unknown() {
                return Err(ChartError::MissingPillar {
                    position: position.name().to_string(),
                });
            }
        }
        let hour = match &self.hour {
            Some(h) if !h.is_unknown() => Some(h.parse(Position::Hour)?),
            _ => None,
        };
        Ok(Chart::new(
            self.year.parse(Position::Year)?,
            self.month.parse(Position::Month)?,
            self.day.parse(Position::Day)?,
            hour,
        ))
    }
}

impl TryFrom<ChartInput> for Chart {
    type Error = ChartError;

    fn try_from(input: ChartInput) -> Result<Self, Self::Error> {
        input.to_chart()
    }
}
