//! Question sequencer: a fixed, ordered list of templates shared by every session.
//!
//! Templates 2–4 are identical. They are kept verbatim until product decides
//! what the follow-up questions should be.

/// Phrase in the templates replaced by the candidate's role.
pub const ROLE_PLACEHOLDER: &str = "Full Stack Java Developer";

pub const QUESTION_TEMPLATES: [&str; 4] = [
    "Full Stack Java Developer: Tell me about a project you built recently. What was the impact?",
    "How did you design the architecture? Mention key components and choices.",
    "How did you design the architecture? Mention key components and choices.",
    "How did you design the architecture? Mention key components and choices.",
];

/// Number of questions before a session is exhausted.
pub fn question_count() -> usize {
    QUESTION_TEMPLATES.len()
}

/// Replaces every occurrence of the role placeholder. Templates without the
/// placeholder come back unchanged.
pub fn substitute_role(template: &str, role: &str) -> String {
    template.replace(ROLE_PLACEHOLDER, role)
}

/// The raw template at `index`, placeholder intact.
pub fn template_at(index: usize) -> Option<&'static str> {
    QUESTION_TEMPLATES.get(index).copied()
}

/// The role-substituted question at `index`, or `None` past the end of the list.
pub fn question_for(index: usize, role: &str) -> Option<String> {
    template_at(index).map(|template| substitute_role(template, role))
}
