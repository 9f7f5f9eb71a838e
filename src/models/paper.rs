// src/models/paper.rs

//! Capability interface for selectable papers.

/// Anything the candidate selector can pick from.
///
/// The concrete type comes from the paper source (e.g. an OpenReview note);
/// the selector only needs an identity and a title.
pub trait Paper {
    /// Stable identifier; identity across runs.
    fn id(&self) -> &str;

    /// Human-readable title.
    fn title(&self) -> &str;
}
