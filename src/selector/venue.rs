// src/selector/venue.rs

//! Uniform random venue selection.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{AppError, Result};
use crate::models::VenueConfig;

/// Picks the venue for this run uniformly at random.
pub struct RandomVenuePicker<R: Rng = StdRng> {
    rng: R,
}

impl RandomVenuePicker<StdRng> {
    /// Create a picker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomVenuePicker<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomVenuePicker<R> {
    /// Create a picker with an injected RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick one venue; [`AppError::NoVenues`] when the list is empty.
    pub fn pick<'a>(&mut self, venues: &'a [VenueConfig]) -> Result<&'a VenueConfig> {
        if venues.is_empty() {
            return Err(AppError::NoVenues);
        }

        let index = self.rng.gen_range(0..venues.len());
        Ok(&venues[index])
    }
}
