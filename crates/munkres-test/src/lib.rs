//! Shared test fixtures for Munkres crates.
//!
//! This crate provides data and pure oracles for testing. It does NOT depend
//! on `munkres-solver`, so the solver can use it as a dev-dependency.
//!
//! - [`brute`] - exhaustive optimum search for small matrices
//! - [`fixtures`] - hand-checked matrices with known optima
//! - [`random`] - seeded random matrices
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! munkres-test = { workspace = true }
//! ```
//!
//! Then compare solver output against the oracle:
//!
//! ```ignore
//! use munkres_test::{brute_force, random::integer_matrix};
//!
//! let raw = integer_matrix(7, 4, 5, 0..100);
//! let best = brute_force(&raw, Objective::Minimize);
//! ```

pub mod brute;
pub mod fixtures;
pub mod random;

pub use brute::{brute_force, BruteForceOptimum};
