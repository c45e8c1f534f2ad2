//! Top-level module for the Markov chain.
//!
//! This module provides:
//! - Tokens and the terminator sentinel (`Symbol`)
//! - The sliding context window (`Window`)
//! - Weighted successor tables (`State`)
//! - Chain construction and generation (`MarkovChain`, `ChainBuilder`)
//! - A high-level, seedable generation interface (`Generator`)

/// Fixed-order chain: construction, weighted walk and rejection sampling.
pub mod chain;

/// High-level interface owning a chain, its configuration and its RNG.
pub mod generator;

/// Successor table of a single context and its weighted pick.
pub mod state;

/// Token bound, terminator sentinel and context key.
pub mod symbol;

/// Bounded window of the last `order` symbols.
///
/// Internal helper shared by construction and generation.
mod window;
