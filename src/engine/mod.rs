//! Core trace engine.
//!
//! Provides the two pieces every generator in this crate is built on:
//! - Deterministic RNG ([`rng::VizRng`], PCG-backed, seed-reproducible)
//! - Immutable step sequences ([`trace::Trace`]) with clamped indexing

pub mod rng;
pub mod trace;

pub use rng::VizRng;
pub use trace::Trace;
