//! Option catalogs presented by the survey form
//!
//! These are the fixed choice lists for the multi-select and single-select
//! questions. Free-text answers are not restricted to any catalog.

/// Challenges offered on step 2 of the single track
pub const SINGLE_CHALLENGE_OPTIONS: &[&str] = &[
    "Finding genuine connections",
    "Knowing when I'm ready for a relationship",
    "Dealing with loneliness",
    "Understanding what I want in a partner",
    "Healing from past relationships",
    "Balancing career and dating",
    "Building self-confidence",
    "Navigating dating apps",
];

/// Topics offered on step 4 of the single track
pub const SINGLE_TOPIC_OPTIONS: &[&str] = &[
    "How to prepare for a healthy relationship",
    "Self-love and personal growth",
    "Identifying red flags",
    "Building emotional intelligence",
    "Communication skills",
    "Setting healthy boundaries",
    "Healing from past hurts",
    "God's design for relationships",
];

/// Challenges offered on step 2 of the married track
pub const MARRIED_CHALLENGE_OPTIONS: &[&str] = &[
    "Communication issues",
    "Financial stress",
    "Intimacy challenges",
    "Work-life balance",
    "Parenting disagreements",
    "Extended family dynamics",
    "Growing apart",
    "Trust issues",
    "Different love languages",
];

/// Topics offered on step 4 of the married track
pub const MARRIED_TOPIC_OPTIONS: &[&str] = &[
    "Rebuilding trust and intimacy",
    "Effective communication strategies",
    "Managing finances together",
    "Keeping the spark alive",
    "Conflict resolution",
    "Balancing family and marriage",
    "Growing together spiritually",
    "Supporting each other's dreams",
];

/// Marriage duration choices on step 2 of the married track
pub const YEARS_OPTIONS: &[&str] = &[
    "Less than 1 year",
    "1-5 years",
    "6-10 years",
    "11-20 years",
    "20+ years",
];
