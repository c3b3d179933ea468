//! Coaching heuristic: a rule table evaluated against each answer.
//!
//! Every rule is independent: a rule fires when NONE of its markers appear in
//! the lowercased answer, and appends its advice. Advice is joined with a
//! single space in table order.

/// A single coaching rule.
#[derive(Debug, Clone, Copy)]
pub struct CoachingRule {
    pub name: &'static str,
    /// Lowercase substrings; the rule is satisfied if any is present.
    pub markers: &'static [&'static str],
    pub advice: &'static str,
}

pub const METRICS_ADVICE: &str = "Add metrics (% / ms / users) and explain trade-offs.";
pub const TRADE_OFF_ADVICE: &str = "Call out trade-offs.";
pub const FALLBACK_COACHING: &str = "Nice—keep going.";

pub const COACHING_RULES: &[CoachingRule] = &[
    CoachingRule {
        name: "metrics",
        markers: &["%", "ms", "latency", "users", "p95"],
        advice: METRICS_ADVICE,
    },
    CoachingRule {
        name: "trade_offs",
        markers: &["trade-off", "tradeoffs", "trade offs"],
        advice: TRADE_OFF_ADVICE,
    },
];

impl CoachingRule {
    fn fires_on(&self, answer_lower: &str) -> bool {
        !self.markers.iter().any(|m| answer_lower.contains(m))
    }
}

/// Advice strings for every rule that fires, in table order.
pub fn coaching_tips(answer: &str) -> Vec<&'static str> {
    let answer_lower = answer.to_lowercase();
    COACHING_RULES
        .iter()
        .filter(|rule| rule.fires_on(&answer_lower))
        .inspect(|rule| tracing::trace!(rule = rule.name, "coaching rule fired"))
        .map(|rule| rule.advice)
        .collect()
}

/// Coaching text returned to the candidate for one answer.
pub fn coaching_for(answer: &str) -> String {
    let tips = coaching_tips(answer);
    if tips.is_empty() {
        FALLBACK_COACHING.to_string()
    } else {
        tips.join(" ")
    }
}
