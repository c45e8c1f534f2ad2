use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChainError, ChainResult};

/// Default number of trailing tokens used as context.
pub const DEFAULT_ORDER: usize = 2;

/// Default number of rejected candidates tolerated by `generate`.
pub const DEFAULT_RETRIES: usize = 20;

/// Default cap on the length of a single walk.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// How raw text lines are cut into tokens, and how tokens are glued back.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tokenization {
	/// Whitespace separated words, joined with a single space.
	#[default]
	Words,
	/// Single characters, concatenated.
	Characters,
}

impl Tokenization {
	pub fn split(&self, line: &str) -> Vec<String> {
		match self {
			Tokenization::Words => line.split_whitespace().map(str::to_owned).collect(),
			Tokenization::Characters => line.chars().map(String::from).collect(),
		}
	}

	pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
		let separator = match self {
			Tokenization::Words => " ",
			Tokenization::Characters => "",
		};
		tokens.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(separator)
	}
}

/// Model and generation settings.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "order": 3, "seed": 42, "tokenization": "characters" }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ChainConfig {
	/// Context length, must be >= 1.
	pub order: usize,

	/// Number of rejected candidates to replace before giving up.
	pub retries: usize,

	/// Upper bound on tokens emitted by a single walk, `None` for unbounded.
	pub max_steps: Option<usize>,

	/// RNG seed for reproducible output; `None` seeds from the OS.
	pub seed: Option<u64>,

	/// Diagnostic level: 0 silent, 1 notices, 2 every rejection.
	pub verbosity: u8,

	/// Splitting policy used by the CLI and `Generator::generate_text`.
	pub tokenization: Tokenization,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self {
			order: DEFAULT_ORDER,
			retries: DEFAULT_RETRIES,
			max_steps: Some(DEFAULT_MAX_STEPS),
			seed: None,
			verbosity: 0,
			tokenization: Tokenization::Words,
		}
	}
}

impl ChainConfig {
	/// Loads and validates a JSON configuration file.
	///
	/// # Errors
	/// - `ChainError::Io` if the file cannot be read
	/// - `ChainError::Config` if it is not valid JSON for this struct
	/// - `ChainError::InvalidConfig` if a value is out of range
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> ChainResult<Self> {
		let contents = fs::read_to_string(path)?;
		Self::from_json_str(&contents)
	}

	pub fn from_json_str(contents: &str) -> ChainResult<Self> {
		let config: Self = serde_json::from_str(contents)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks value ranges.
	pub fn validate(&self) -> ChainResult<()> {
		if self.order < 1 {
			return Err(ChainError::InvalidConfig("order must be >= 1".to_owned()));
		}
		if self.max_steps == Some(0) {
			return Err(ChainError::InvalidConfig("max_steps must be >= 1".to_owned()));
		}
		Ok(())
	}
}
