// ─────────────────────────────────────────────────────────────────────────────
// Replacement compatibility weights
// ─────────────────────────────────────────────────────────────────────────────

/// Points for a candidate with the same skill level as the rejected card.
pub const LEVEL_MATCH_POINTS: u32 = 4;

/// Prep-time delta (minutes) that still counts as "close".
pub const PREP_CLOSE_MINUTES: u32 = 10;

/// Points for a close prep time.
pub const PREP_CLOSE_POINTS: u32 = 3;

/// Prep-time delta (minutes) that still counts as "near".
pub const PREP_NEAR_MINUTES: u32 = 20;

/// Points for a near prep time.
pub const PREP_NEAR_POINTS: u32 = 1;

/// Cap on points from shared ingredient categories.
pub const CATEGORY_OVERLAP_CAP: u32 = 3;

/// Highest score a candidate can reach.
pub const MAX_REPLACEMENT_SCORE: u32 = LEVEL_MATCH_POINTS + PREP_CLOSE_POINTS + CATEGORY_OVERLAP_CAP;

// ─────────────────────────────────────────────────────────────────────────────
// Fuzzy lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a title to count as a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy matches offered for selection.
pub const FUZZY_MATCH_LIMIT: usize = 5;
