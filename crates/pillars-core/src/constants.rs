//! Shared constants for the Four Pillars engine.
//!
//! Every heuristic magnitude used by the analysis crate has a default here.
//! `EngineWeights` and the `[weights]`, `[strength]`, `[pattern]` config
//! sections override them.

/// Days in one branch period. Hidden-stem command days sum to this.
pub const BRANCH_PERIOD_DAYS: u8 = 30;

// ---- Force aggregation ----

/// Score of one fully weighted symbol.
pub const DEFAULT_BASE_UNIT: f64 = 10.0;

/// Visible stem weights by position (year, month, day, hour).
/// The day slot is never read: the reference stem is excluded from scoring.
pub const DEFAULT_STEM_WEIGHTS: [f64; 4] = [1.0, 1.2, 0.0, 1.0];

/// Branch weights by position (year, month, day, hour).
pub const DEFAULT_BRANCH_WEIGHTS: [f64; 4] = [1.0, 3.0, 1.5, 1.0];

/// Multiplier on the month dominant entry when it matches the commanding override.
pub const DEFAULT_COMMANDING_BONUS: f64 = 1.5;

/// Trine or directional with all three members.
pub const DEFAULT_FULL_COMBINATION_RATIO: f64 = 1.5;

/// Two members, one of them the peak member.
pub const DEFAULT_PARTIAL_WITH_PEAK_RATIO: f64 = 1.2;

/// Two members, neither the peak member.
pub const DEFAULT_PARTIAL_WITHOUT_PEAK_RATIO: f64 = 1.1;

/// Fraction of the result element credited by an adjacent paired combination.
pub const DEFAULT_PAIRED_FRACTION: f64 = 0.2;

/// Fraction of the result element credited by a transformed stem combination.
pub const DEFAULT_TRANSFORM_FRACTION: f64 = 0.5;

/// Share of a tied stem's contribution that survives the bond.
pub const DEFAULT_TIED_RETENTION: f64 = 0.0;

/// Share of a clashing element's score that survives a peak clash.
pub const DEFAULT_PEAK_CLASH_RETENTION: f64 = 0.6;

/// Share of a clashing element's score that survives a growth clash.
pub const DEFAULT_GROWTH_CLASH_RETENTION: f64 = 0.7;

/// Share of a clashing element's score that survives a vault clash.
pub const DEFAULT_VAULT_CLASH_RETENTION: f64 = 0.85;

/// Fraction credited back to clashing and stored elements when a vault opens.
pub const DEFAULT_OPEN_VAULT_RATIO: f64 = 0.1;

/// Largest gap, in percentage points, between the strongest and weakest
/// element for a matrix to count as balanced.
pub const BALANCED_SPREAD_PERCENT: f64 = 30.0;

// ---- Strength ----

/// Rootedness multiplier by position (year, month, day, hour).
pub const DEFAULT_ROOTEDNESS_WEIGHTS: [f64; 4] = [1.1, 1.5, 1.3, 1.1];

/// Rootedness when no branch carries the reference element.
pub const ROOTLESS_MULTIPLIER: f64 = 1.0;

pub const DEFAULT_SEASONAL_BONUS: f64 = 10.0;

pub const DEFAULT_SEAT_BONUS: f64 = 5.0;

/// Share of the month period that must support the reference element.
pub const DEFAULT_SEASONAL_SUPPORT_RATIO: f64 = 0.5;

pub const DEFAULT_EXTREME_STRONG_THRESHOLD: f64 = 40.0;

pub const DEFAULT_STRONG_THRESHOLD: f64 = 10.0;

pub const DEFAULT_NEUTRAL_FLOOR: f64 = -10.0;

pub const DEFAULT_EXTREME_WEAK_THRESHOLD: f64 = -40.0;

// ---- Pattern ----

/// A dominant hidden stem with at least this many days counts as strong.
pub const DEFAULT_STRONG_DOMINANT_DAYS: u8 = 16;

/// Root strength below this allows a following pattern.
pub const DEFAULT_ROOTLESS_THRESHOLD: f64 = 10.0;

/// Root-strength weight per hidden rank (residual, transitional, dominant).
pub const ROOT_RANK_WEIGHTS: [f64; 3] = [0.3, 0.5, 1.0];

/// Following score per visible stem of a family.
pub const DEFAULT_FOLLOWING_STEM_SCORE: f64 = 50.0;

/// The leading family must beat the runner-up by this factor.
pub const DEFAULT_FOLLOWING_DOMINANCE_RATIO: f64 = 1.5;

pub const CONFIDENCE_DOMINANCE: u8 = 90;
pub const CONFIDENCE_TRANSFORMATION: u8 = 85;
pub const CONFIDENCE_FOLLOWING_ROOTLESS: u8 = 90;
pub const CONFIDENCE_FOLLOWING_LIGHTLY_ROOTED: u8 = 70;
pub const CONFIDENCE_NORMAL_REVEALED: u8 = 80;
pub const CONFIDENCE_NORMAL_UNREVEALED: u8 = 65;
