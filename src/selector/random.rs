// src/selector/random.rs

//! Uniform random paper selection over unposted candidates.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{AppError, Result};
use crate::models::Paper;

/// Picks one paper uniformly at random among valid, not-yet-posted candidates.
pub struct RandomSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Create a selector with an injected RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Filter out invalid and already-posted papers, then pick one uniformly.
    ///
    /// A paper is excluded when its id is empty, its title is empty, or
    /// `is_posted` returns true for its id. Input order is preserved in the
    /// filtered sequence, so a fixed RNG reproduces the same pick.
    ///
    /// Returns [`AppError::NoCandidates`] when nothing survives the filter;
    /// callers treat that as "nothing new to post", not a failure.
    pub fn select<'a, P: Paper>(
        &mut self,
        papers: &'a [P],
        is_posted: impl Fn(&str) -> bool,
    ) -> Result<&'a P> {
        let candidates: Vec<&'a P> = papers
            .iter()
            .filter(|p| !p.id().is_empty() && !p.title().is_empty() && !is_posted(p.id()))
            .collect();

        if candidates.is_empty() {
            return Err(AppError::NoCandidates);
        }

        let index = self.rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }
}
