//! Text report and summary of a force matrix.

use std::fmt;

use pillars_core::constants::BALANCED_SPREAD_PERCENT;
use pillars_core::{Element, Symbol};
use serde::{Deserialize, Serialize};

use super::types::ForceMatrix;
use crate::scores::ElementScores;

/// Strongest and weakest element by percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSummary {
    pub dominant: Element,
    pub weakest: Element,
    /// Percentage points between `dominant` and `weakest`.
    pub spread: f64,
    pub balanced: bool,
}

impl ForceMatrix {
    /// Ties resolve to cycle order on both ends.
    pub fn summary(&self) -> ForceSummary {
        let p = &self.percentages;
        let dominant = p.strongest();
        let mut weakest = Element::Wood;
        for e in Element::ALL {
            if p[e] < p[weakest] {
                weakest = e;
            }
        }
        let spread = p[dominant] - p[weakest];
        ForceSummary {
            dominant,
            weakest,
            spread,
            balanced: spread <= BALANCED_SPREAD_PERCENT,
        }
    }
}

impl fmt::Display for ForceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dominant {}, weakest {}, spread {:.1}pt ({})",
            self.dominant,
            self.weakest,
            self.spread,
            if self.balanced { "balanced" } else { "unbalanced" }
        )
    }
}

fn write_deltas(f: &mut fmt::Formatter<'_>, deltas: &ElementScores) -> fmt::Result {
    let mut first = true;
    for (e, v) in deltas.iter().filter(|(_, v)| *v != 0.0) {
        if !first {
            f.write_str(",")?;
        }
        write!(f, " {e} {v:+.2}")?;
        first = false;
    }
    if first {
        f.write_str(" none")?;
    }
    Ok(())
}

impl fmt::Display for ForceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "force matrix for {} ({}, {})",
            self.reference_stem, self.reference_element, self.reference_polarity
        )?;
        for (e, score) in self.scores.iter() {
            writeln!(
                f,
                "  {:<6}{:>8.2} ({:>5.1}%)",
                e.name(),
                score,
                self.percentages[e]
            )?;
        }
        writeln!(f, "  {:<6}{:>8.2}", "total", self.total)?;

        writeln!(f, "details")?;
        for d in &self.details {
            let kind = match d.symbol {
                Symbol::Stem(_) => "stem",
                Symbol::Branch(_) => "branch",
            };
            writeln!(f, "  [{}] {} {kind}: {:.2}", d.position, d.symbol, d.score)?;
            for h in &d.hidden {
                write!(f, "      {} {} {}d: {:.2}", h.stem, h.element, h.days, h.score)?;
                if h.commanding {
                    f.write_str(" (commanding)")?;
                }
                writeln!(f)?;
            }
        }

        if !self.applied.is_empty() {
            writeln!(f, "adjustments")?;
            for a in &self.applied {
                write!(f, "  {} [{}]:", a.description, a.interaction_type)?;
                write_deltas(f, &a.deltas)?;
                writeln!(f)?;
            }
        }
        write!(f, "summary: {}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use pillars_core::Chart;

    use crate::force::compute_force_matrix;

    fn matrix(year: &str, month: &str, day: &str, hour: &str) -> crate::force::ForceMatrix {
        let chart = Chart::parse(year, month, day, hour).unwrap();
        compute_force_matrix(&chart, None)
    }

    #[test]
    fn metal_heavy_chart_is_unbalanced() {
        let s = matrix("庚申", "庚酉", "庚申", "辛酉").summary();
        assert_eq!(s.dominant, pillars_core::Element::Metal);
        assert_eq!(s.weakest, pillars_core::Element::Wood);
        assert!(!s.balanced);
        assert!(s.spread > 30.0);
    }

    #[test]
    fn report_lists_scores_details_and_adjustments() {
        let m = matrix("甲辰", "丙戌", "壬子", "庚午");
        let text = m.to_string();
        assert!(text.starts_with("force matrix for 壬 (water, yang)"));
        for e in ["wood", "fire", "earth", "metal", "water", "total"] {
            assert!(text.contains(&format!("  {e}")), "missing {e}");
        }
        assert!(text.contains("details"));
        assert!(text.contains("adjustments"));
        let vault = text.lines().find(|l| l.contains("[vault_clash]")).unwrap();
        assert!(vault.contains("earth +2.70"));
        assert!(text.contains("[peak_clash]: fire -8.80, water -6.40"));
        assert!(text.ends_with(&m.summary().to_string()));
    }

    #[test]
    fn commanding_entry_is_flagged() {
        let chart = Chart::parse("甲子", "丙寅", "戊辰", "-").unwrap();
        let m = compute_force_matrix(&chart, Some(pillars_core::Stem::Jia));
        assert!(m.to_string().contains("(commanding)"));
    }
}
