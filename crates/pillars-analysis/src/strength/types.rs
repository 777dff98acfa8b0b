//! Strength classification types.

use std::fmt;

use pillars_core::chart::Position;
use serde::{Deserialize, Serialize};

/// Five-level strength class of the reference stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    ExtremeWeak,
    Weak,
    Neutral,
    Strong,
    ExtremeStrong,
}

impl StrengthLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtremeWeak => "extreme_weak",
            Self::Weak => "weak",
            Self::Neutral => "neutral",
            Self::Strong => "strong",
            Self::ExtremeStrong => "extreme_strong",
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Self::Strong | Self::ExtremeStrong)
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    pub index: f64,
    pub seasonal_support: bool,
    pub seat_support: bool,
    pub net_ally_score: f64,
    pub rootedness: f64,
    /// Position of the branch that set `rootedness`, if any.
    pub root_position: Option<Position>,
    pub ally_score: f64,
    pub opposition_score: f64,
    /// Supporting share of the month period, in `[0, 1]`.
    pub seasonal_ratio: f64,
    pub notes: Vec<String>,
    /// Set when the input could not be classified.
    pub error: Option<String>,
}

impl StrengthResult {
    /// Neutral placeholder carrying an input error.
    pub fn failed(error: String) -> Self {
        Self {
            level: StrengthLevel::Neutral,
            index: 0.0,
            seasonal_support: false,
            seat_support: false,
            net_ally_score: 0.0,
            rootedness: pillars_core::constants::ROOTLESS_MULTIPLIER,
            root_position: None,
            ally_score: 0.0,
            opposition_score: 0.0,
            seasonal_ratio: 0.0,
            notes: vec![format!("strength not classified: {error}")],
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "strength: not classified ({error})");
        }
        writeln!(f, "strength: {} (index {:+.1})", self.level, self.index)?;
        writeln!(
            f,
            "  seasonal support: {} ({:.0}% of the month)",
            yes_no(self.seasonal_support),
            self.seasonal_ratio * 100.0
        )?;
        writeln!(f, "  seat support: {}", yes_no(self.seat_support))?;
        writeln!(
            f,
            "  allies {:.1} vs opposition {:.1} (net {:+.1})",
            self.ally_score, self.opposition_score, self.net_ally_score
        )?;
        write!(f, "  rootedness: {:.1}", self.rootedness)?;
        if let Some(position) = self.root_position {
            write!(f, " ({position} branch)")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_renders_error_only() {
        let r = StrengthResult::failed("[CHART_ERROR] bad pillar".to_string());
        assert_eq!(
            r.to_string(),
            "strength: not classified ([CHART_ERROR] bad pillar)"
        );
    }

    #[test]
    fn report_lists_factors_and_notes() {
        let r = StrengthResult {
            level: StrengthLevel::Strong,
            index: 22.5,
            seasonal_support: true,
            seat_support: false,
            net_ally_score: 12.0,
            rootedness: 1.5,
            root_position: Some(Position::Month),
            ally_score: 30.0,
            opposition_score: 18.0,
            seasonal_ratio: 0.7,
            notes: vec!["month branch supports".to_string()],
            error: None,
        };
        let text = r.to_string();
        assert!(text.starts_with("strength: strong (index +22.5)"));
        assert!(text.contains("seasonal support: yes (70% of the month)"));
        assert!(text.contains("seat support: no"));
        assert!(text.contains("allies 30.0 vs opposition 18.0 (net +12.0)"));
        assert!(text.contains("rootedness: 1.5 (month branch)"));
        assert!(text.ends_with("note: month branch supports"));
    }
}
