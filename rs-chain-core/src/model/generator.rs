use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ChainConfig;
use crate::corpus::{Corpus, CorpusInput};
use crate::error::ChainResult;
use crate::io;
use crate::model::chain::{ChainBuilder, MarkovChain};

/// High-level generator over a word or character chain.
///
/// # Responsibilities
/// - Build the chain from any accepted corpus shape, or from a text file
/// - Own a seedable RNG, so that a fixed `seed` gives reproducible output
/// - Generate sequences with duplicate avoidance and render them as text
#[derive(Debug)]
pub struct Generator {
	chain: MarkovChain<String>,
	config: ChainConfig,
	rng: StdRng,
}

impl Generator {
	/// Creates a generator from in-memory data.
	///
	/// # Errors
	/// Returns an error if `config` does not validate.
	pub fn new<I: Into<CorpusInput>>(input: I, config: ChainConfig) -> ChainResult<Self> {
		Self::with_filter(input, config, |_| true)
	}

	/// Creates a generator, dropping the input tokens rejected by `filter`.
	pub fn with_filter<I, F>(input: I, config: ChainConfig, filter: F) -> ChainResult<Self>
	where
		I: Into<CorpusInput>,
		F: FnMut(&String) -> bool,
	{
		Self::from_corpus(input.into().normalize(), config, filter)
	}

	/// Creates a generator from a UTF-8 text file, one sentence per line.
	///
	/// # Behavior
	/// - Each line is trimmed, then split with `config.tokenization`.
	/// - Blank lines become empty sentences.
	///
	/// # Errors
	/// - Returns an error if the file cannot be read.
	/// - Returns an error if `config` does not validate.
	pub fn from_file<P: AsRef<Path>>(filepath: P, config: ChainConfig) -> ChainResult<Self> {
		let lines = io::read_lines(&filepath)?;
		log::debug!("Read {} lines from {}", lines.len(), filepath.as_ref().display());
		let corpus: Corpus<String> = lines.iter().map(|line| config.tokenization.split(line)).collect();
		Self::from_corpus(corpus, config, |_| true)
	}

	fn from_corpus<F>(corpus: Corpus<String>, config: ChainConfig, filter: F) -> ChainResult<Self>
	where
		F: FnMut(&String) -> bool,
	{
		config.validate()?;
		let chain = ChainBuilder::from_config(&config).build_filtered(corpus, filter)?;
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self { chain, config, rng })
	}

	pub fn chain(&self) -> &MarkovChain<String> {
		&self.chain
	}

	pub fn config(&self) -> &ChainConfig {
		&self.config
	}

	/// Generates a sequence that avoids copying a corpus sentence verbatim.
	///
	/// Retries up to `config.retries` times, then returns the last attempt.
	pub fn generate(&mut self) -> ChainResult<Vec<String>> {
		self.chain.generate(&mut self.rng, self.config.retries)
	}

	/// Generates a sequence accepted by `accept`, with `config.retries` retries.
	pub fn generate_with<F: FnMut(&[String]) -> bool>(&mut self, accept: F) -> ChainResult<Vec<String>> {
		self.chain.generate_with(&mut self.rng, self.config.retries, accept)
	}

	/// Generates a sequence and joins it according to `config.tokenization`.
	pub fn generate_text(&mut self) -> ChainResult<String> {
		let tokens = self.generate()?;
		Ok(self.config.tokenization.join(&tokens))
	}
}
