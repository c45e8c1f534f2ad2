//! N-gram Markov chain text generation library.
//!
//! This crate provides:
//! - Corpus normalization from text blobs, line lists or token lists
//! - Fixed-order chains over any hashable token type
//! - Weighted random walks with rejection of verbatim corpus copies
//! - A seedable high-level generator and its JSON configuration
//!
//! # Example
//! ```
//! use rs_chain_core::{ChainConfig, Generator};
//!
//! let corpus = "the cat sat on the mat\nthe dog sat on the log";
//! let config = ChainConfig { seed: Some(7), order: 1, ..ChainConfig::default() };
//! let mut generator = Generator::new(corpus, config).unwrap();
//! let sentence = generator.generate_text().unwrap();
//! assert!(sentence.starts_with("the"));
//! ```

/// Generation settings and tokenization policy.
pub mod config;

/// Corpus shapes and their normalization.
pub mod corpus;

/// Error type shared by the whole crate.
pub mod error;

/// Markov chain model and generation logic.
pub mod model;

/// File loading.
///
/// Not exposed
pub(crate) mod io;

pub use config::{ChainConfig, Tokenization};
pub use corpus::{Corpus, CorpusInput, Record};
pub use error::{ChainError, ChainResult};
pub use model::chain::{ChainBuilder, MarkovChain};
pub use model::generator::Generator;
pub use model::symbol::{Context, Symbol, Token};
