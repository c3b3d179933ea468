// Mock interview flow: session lifecycle, question sequencing, coaching, scoring.
// Handlers only talk to `InterviewService`; storage sits behind `SessionStore`.

pub mod coaching;
pub mod handlers;
pub mod models;
pub mod questions;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;
