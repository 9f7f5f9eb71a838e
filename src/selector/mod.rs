// src/selector/mod.rs

//! Random selection of venues and candidate papers.
//!
//! Both pickers take their RNG by value so tests can inject a seeded or
//! stepped generator and assert exact picks.

mod random;
mod venue;

pub use random::RandomSelector;
pub use venue::RandomVenuePicker;
