//! # Random Number Generation
//!
//! Seeded generator handles for Monte Carlo path simulation.
//!
//! Every path-generation call takes a `&mut PricerRng`, so the draw sequence
//! is owned by the caller rather than hidden in global state:
//!
//! - **Reproducibility**: reseeding with the same seed replays the draws
//! - **Isolation**: tests and concurrent callers each own a generator
//! - **Streams**: [`PricerRng::stream`] derives independent generators from
//!   one base seed for parallel batch pricing
//!
//! ```rust
//! use pricer_exotics::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

#[cfg(test)]
mod tests;
