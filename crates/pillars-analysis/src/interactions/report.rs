//! Grouped view over detected interaction records.

use std::fmt;

use super::types::{InteractionKind, InteractionRecord, ScoreEffect, Tier};

/// Borrowed view of a detector's output, grouped by kind for reporting.
#[derive(Debug, Clone, Copy)]
pub struct InteractionSet<'a> {
    records: &'a [InteractionRecord],
}

impl<'a> InteractionSet<'a> {
    pub fn new(records: &'a [InteractionRecord]) -> Self {
        Self { records }
    }

    pub fn of_kind(&self, kind: InteractionKind) -> impl Iterator<Item = &'a InteractionRecord> {
        let records = self.records;
        records.iter().filter(move |r| r.kind == kind)
    }

    pub fn count(&self, kind: InteractionKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn opens_vault(&self) -> bool {
        self.records.iter().any(|r| r.opens_vault)
    }

    /// One line, e.g. `2 combinations, 1 clash, 0 punishments`.
    pub fn counts_line(&self) -> String {
        let plural = |n: usize, one: &str, many: &str| {
            format!("{n} {}", if n == 1 { one } else { many })
        };
        format!(
            "{}, {}, {}",
            plural(self.count(InteractionKind::Combination), "combination", "combinations"),
            plural(self.count(InteractionKind::Clash), "clash", "clashes"),
            plural(self.count(InteractionKind::Punishment), "punishment", "punishments"),
        )
    }
}

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Full => "full",
        Tier::PartialWithPeak => "partial, with peak",
        Tier::PartialWithoutPeak => "partial, without peak",
        Tier::Pair => "pair",
    }
}

impl fmt::Display for InteractionSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interactions: {}", self.counts_line())?;

        let combinations: Vec<_> = self.of_kind(InteractionKind::Combination).collect();
        if !combinations.is_empty() {
            write!(f, "\ncombinations")?;
            for r in combinations {
                write!(f, "\n  + {} ({})", r.description, tier_label(r.tier))?;
            }
        }

        let clashes: Vec<_> = self.of_kind(InteractionKind::Clash).collect();
        if !clashes.is_empty() {
            write!(f, "\nclashes")?;
            for r in clashes {
                write!(f, "\n  x {}", r.description)?;
                if let ScoreEffect::Clash { retention, .. } = &r.effect {
                    write!(f, " (-{:.0}%)", (1.0 - retention) * 100.0)?;
                }
            }
        }

        let punishments: Vec<_> = self.of_kind(InteractionKind::Punishment).collect();
        if !punishments.is_empty() {
            write!(f, "\npunishments")?;
            for r in punishments {
                write!(f, "\n  ! {}", r.description)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pillars_core::Branch;

    use super::*;
    use crate::interactions::detect_interactions;

    const NO_STEMS: [Option<pillars_core::Stem>; 4] = [None; 4];

    #[test]
    fn groups_records_by_kind() {
        let records = detect_interactions(
            &[
                Some(Branch::Chen),
                Some(Branch::Xu),
                Some(Branch::Zi),
                Some(Branch::Wu),
            ],
            &NO_STEMS,
            Some(Branch::Xu),
        );
        let set = InteractionSet::new(&records);
        assert_eq!(set.count(InteractionKind::Clash), 2);
        assert!(set.opens_vault());

        let text = set.to_string();
        assert!(text.starts_with("interactions: "));
        assert!(text.contains("2 clashes"));
        assert!(text.contains("\nclashes\n"));
        assert!(text.contains("vault clash (opens vault) (-15%)"));
        assert!(text.contains("peak clash (-40%)"));
    }

    #[test]
    fn empty_set_reports_counts_only() {
        let set = InteractionSet::new(&[]);
        assert!(set.is_empty());
        assert_eq!(
            set.to_string(),
            "interactions: 0 combinations, 0 clashes, 0 punishments"
        );
    }
}
