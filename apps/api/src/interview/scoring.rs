use serde::{Deserialize, Serialize};

/// Highest value any metric can take.
pub const MAX_METRIC: u32 = 4;

pub const STRENGTHS: &[&str] = &["Clear architecture thinking"];
pub const IMPROVEMENTS: &[&str] = &["Quote concrete metrics; explain trade-offs"];

/// Fixed-shape score returned when a session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub relevance: u32,
    pub depth: u32,
    pub clarity: u32,
    pub star: u32,
    pub technical: u32,
}

/// Only `depth` varies: one point per answered turn on top of a base of 1,
/// capped at `MAX_METRIC`.
pub fn final_score(transcript_len: usize) -> FinalScore {
    let depth = u32::try_from(transcript_len)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
        .min(MAX_METRIC);

    FinalScore {
        relevance: 4,
        depth,
        clarity: 4,
        star: 3,
        technical: 4,
    }
}

pub fn strengths() -> Vec<String> {
    STRENGTHS.iter().map(|s| s.to_string()).collect()
}

pub fn improvements() -> Vec<String> {
    IMPROVEMENTS.iter().map(|s| s.to_string()).collect()
}
