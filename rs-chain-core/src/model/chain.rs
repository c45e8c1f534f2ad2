use std::collections::HashMap;

use rand::Rng;

use super::state::State;
use super::symbol::{Context, Symbol, Token, describe_context};
use super::window::Window;
use crate::config::{ChainConfig, DEFAULT_MAX_STEPS, DEFAULT_ORDER, DEFAULT_RETRIES};
use crate::corpus::{Corpus, CorpusInput};
use crate::error::{ChainError, ChainResult};

/// Construction parameters of a `MarkovChain`.
///
/// # Example
/// ```
/// use rs_chain_core::model::chain::ChainBuilder;
///
/// let corpus = vec![vec!["a", "b"], vec!["a", "c"]];
/// let chain = ChainBuilder::new().order(1).build(corpus).unwrap();
/// assert_eq!(chain.order(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ChainBuilder {
	order: usize,
	verbosity: u8,
	max_steps: Option<usize>,
}

impl Default for ChainBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ChainBuilder {
	pub fn new() -> Self {
		Self {
			order: DEFAULT_ORDER,
			verbosity: 0,
			max_steps: Some(DEFAULT_MAX_STEPS),
		}
	}

	/// Takes order, verbosity and step cap from a config.
	pub fn from_config(config: &ChainConfig) -> Self {
		Self {
			order: config.order,
			verbosity: config.verbosity,
			max_steps: config.max_steps,
		}
	}

	pub fn order(mut self, order: usize) -> Self {
		self.order = order;
		self
	}

	pub fn verbosity(mut self, verbosity: u8) -> Self {
		self.verbosity = verbosity;
		self
	}

	pub fn max_steps(mut self, max_steps: Option<usize>) -> Self {
		self.max_steps = max_steps;
		self
	}

	/// Builds a chain from every token of `corpus`.
	///
	/// # Errors
	/// Returns `ChainError::InvalidOrder` if the order is 0.
	pub fn build<T: Token>(&self, corpus: Corpus<T>) -> ChainResult<MarkovChain<T>> {
		self.build_filtered(corpus, |_| true)
	}

	/// Builds a chain, skipping the tokens rejected by `filter`.
	///
	/// A rejected token leaves no trace: it is neither counted nor pushed into
	/// the context window.
	pub fn build_filtered<T, F>(&self, corpus: Corpus<T>, mut filter: F) -> ChainResult<MarkovChain<T>>
	where
		T: Token,
		F: FnMut(&T) -> bool,
	{
		self.try_build_filtered(corpus, |token| Ok::<_, ChainError>(filter(token)))
	}

	/// Same as `build_filtered` with a fallible filter.
	///
	/// The first error returned by `filter` aborts construction and is handed
	/// back unchanged.
	pub fn try_build_filtered<T, F, E>(&self, corpus: Corpus<T>, mut filter: F) -> Result<MarkovChain<T>, E>
	where
		T: Token,
		F: FnMut(&T) -> Result<bool, E>,
		E: From<ChainError>,
	{
		let mut chain = self.empty(corpus)?;

		for sentence in &chain.corpus {
			let mut window = Window::new(chain.order);
			for token in sentence {
				if !filter(token)? {
					if chain.verbosity >= 1 {
						log::debug!("Filter rejected input token {:?}", token);
					}
					continue;
				}
				chain.states
					.entry(window.snapshot())
					.or_default()
					.add_transition(Symbol::Token(token.clone()), 1);
				window.push(token.clone());
			}
			chain.states
				.entry(window.snapshot())
				.or_default()
				.add_transition(Symbol::Terminator, 1);
		}

		if chain.verbosity >= 1 {
			log::info!(
				"Built order {} chain: {} sentences, {} contexts",
				chain.order,
				chain.corpus.len(),
				chain.states.len()
			);
		}
		Ok(chain)
	}

	/// Assembles a chain from explicit transition counts.
	///
	/// Meant for hand-crafted or externally produced tables; such a table may
	/// contain contexts without successors, which sampling reports as
	/// `ChainError::Lookup`. The corpus of the result is empty.
	///
	/// # Errors
	/// - `ChainError::InvalidOrder` if the order is 0
	/// - `ChainError::InvalidConfig` if a context length differs from the order
	pub fn from_counts<T, I>(&self, counts: I) -> ChainResult<MarkovChain<T>>
	where
		T: Token,
		I: IntoIterator<Item = (Vec<Symbol<T>>, Vec<(Symbol<T>, usize)>)>,
	{
		let mut chain = self.empty(Vec::new())?;
		for (context, successors) in counts {
			if context.len() != chain.order {
				return Err(ChainError::InvalidConfig(format!(
					"context {} has length {}, expected {}",
					describe_context(&context),
					context.len(),
					chain.order
				)));
			}
			let state = chain.states.entry(context.into_boxed_slice()).or_default();
			for (next, occurrence) in successors {
				state.add_transition(next, occurrence);
			}
		}
		Ok(chain)
	}

	fn empty<T: Token>(&self, corpus: Corpus<T>) -> ChainResult<MarkovChain<T>> {
		if self.order < 1 {
			return Err(ChainError::InvalidOrder(self.order));
		}
		Ok(MarkovChain {
			order: self.order,
			verbosity: self.verbosity,
			max_steps: self.max_steps,
			states: HashMap::new(),
			corpus,
		})
	}
}

/// Word (or character) level Markov chain of a fixed order.
///
/// Maps every context of `order` symbols seen in the corpus to the weighted
/// set of symbols that followed it, the terminator included.
///
/// # Invariants
/// - `order >= 1`
/// - Every context key has the length `order`
/// - Built once, never mutated afterwards, so a chain can be shared between
///   threads and sampled concurrently
#[derive(Clone, Debug)]
pub struct MarkovChain<T> {
	order: usize,
	verbosity: u8,
	max_steps: Option<usize>,
	states: HashMap<Context<T>, State<T>>,
	/// Sentences as given, before filtering.
	corpus: Corpus<T>,
}

impl<T: Token> MarkovChain<T> {
	/// Builds a chain with default settings for the given order.
	pub fn build(corpus: Corpus<T>, order: usize) -> ChainResult<Self> {
		ChainBuilder::new().order(order).build(corpus)
	}

	/// Builds a chain with default settings, skipping rejected tokens.
	pub fn build_filtered<F: FnMut(&T) -> bool>(corpus: Corpus<T>, order: usize, filter: F) -> ChainResult<Self> {
		ChainBuilder::new().order(order).build_filtered(corpus, filter)
	}

	pub fn order(&self) -> usize {
		self.order
	}

	pub fn verbosity(&self) -> u8 {
		self.verbosity
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// The sentences the chain was built from.
	pub fn corpus(&self) -> &[Vec<T>] {
		&self.corpus
	}

	/// Iterates over all known contexts, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = &[Symbol<T>]> {
		self.states.keys().map(|key| &**key)
	}

	/// Successor table of `context`, if it was ever observed.
	pub fn successors(&self, context: &[Symbol<T>]) -> Option<&State<T>> {
		self.states.get(context)
	}

	/// Returns `true` if `candidate` equals one of the corpus sentences.
	pub fn is_verbatim(&self, candidate: &[T]) -> bool {
		self.corpus.iter().any(|sentence| sentence.as_slice() == candidate)
	}

	/// Draws the symbol following `context`, weighted by observed counts.
	///
	/// # Errors
	/// Returns `ChainError::Lookup` if the context is unknown or has no
	/// recorded successor.
	pub fn pick<R: Rng>(&self, context: &[Symbol<T>], rng: &mut R) -> ChainResult<&Symbol<T>> {
		self.states
			.get(context)
			.and_then(|state| state.pick(rng))
			.ok_or_else(|| ChainError::Lookup { context: describe_context(context) })
	}

	/// Performs a single random walk from the start context.
	///
	/// Stops at the first terminator, which is not part of the output.
	///
	/// # Errors
	/// - `ChainError::Lookup` on a context without successors
	/// - `ChainError::StepLimitExceeded` if the walk outgrows `max_steps`
	pub fn walk<R: Rng>(&self, rng: &mut R) -> ChainResult<Vec<T>> {
		let (sequence, complete) = self.walk_capped(rng)?;
		match self.max_steps {
			Some(limit) if !complete => Err(ChainError::StepLimitExceeded { limit }),
			_ => Ok(sequence),
		}
	}

	/// Walk that stops at `max_steps` tokens instead of failing.
	///
	/// The flag is `false` when the walk was cut short.
	fn walk_capped<R: Rng>(&self, rng: &mut R) -> ChainResult<(Vec<T>, bool)> {
		let mut window = Window::new(self.order);
		let mut sequence = Vec::new();

		loop {
			let token = match self.pick(window.as_slice(), rng)? {
				Symbol::Terminator => return Ok((sequence, true)),
				Symbol::Token(token) => token.clone(),
			};
			if let Some(limit) = self.max_steps {
				if sequence.len() >= limit {
					return Ok((sequence, false));
				}
			}
			sequence.push(token.clone());
			window.push(token);
		}
	}

	/// Generates a sequence that is not a verbatim copy of a corpus sentence,
	/// if possible within `retries` extra attempts.
	///
	/// Returns an empty sequence if the chain is empty.
	pub fn generate<R: Rng>(&self, rng: &mut R, retries: usize) -> ChainResult<Vec<T>> {
		self.generate_with(rng, retries, |candidate| !self.is_verbatim(candidate))
	}

	/// Generates with the thread-local RNG and the default retry count.
	pub fn generate_default(&self) -> ChainResult<Vec<T>> {
		self.generate(&mut rand::rng(), DEFAULT_RETRIES)
	}

	/// Generates a sequence accepted by `accept`, if possible within
	/// `retries` extra attempts.
	///
	/// When every attempt is rejected, the last candidate is returned anyway.
	/// With `retries == 0` the predicate is never called, otherwise it sees
	/// up to `retries + 1` candidates.
	///
	/// A walk reaching `max_steps` counts as a rejected candidate and is not
	/// shown to the predicate; if it is the last attempt, it is returned
	/// truncated.
	pub fn generate_with<R, F>(&self, rng: &mut R, retries: usize, mut accept: F) -> ChainResult<Vec<T>>
	where
		R: Rng,
		F: FnMut(&[T]) -> bool,
	{
		self.try_generate_with(rng, retries, |candidate| Ok::<_, ChainError>(accept(candidate)))
	}

	/// Same as `generate_with` with a fallible predicate.
	///
	/// Errors of `accept` are returned unchanged; sampling errors are
	/// converted through `From<ChainError>`.
	pub fn try_generate_with<R, F, E>(&self, rng: &mut R, retries: usize, mut accept: F) -> Result<Vec<T>, E>
	where
		R: Rng,
		F: FnMut(&[T]) -> Result<bool, E>,
		E: From<ChainError>,
	{
		if self.states.is_empty() {
			if self.verbosity >= 1 {
				log::info!("No data to generate from");
			}
			return Ok(Vec::new());
		}

		let (mut candidate, mut complete) = self.walk_capped(rng)?;
		let mut failures = 0;
		if retries > 0 {
			while !(complete && accept(&candidate)?) && failures < retries {
				if self.verbosity >= 2 {
					if complete {
						log::trace!("Rejected candidate {:?} ({})", candidate, failures);
					} else {
						log::trace!("Walk cut at {} tokens ({})", candidate.len(), failures);
					}
				}
				failures += 1;
				(candidate, complete) = self.walk_capped(rng)?;
			}
			if failures >= retries && self.verbosity >= 1 {
				log::warn!("Too many retries, keeping {:?}", candidate);
			}
		}
		if !complete && self.verbosity >= 1 {
			log::warn!("Returning a walk truncated at {} tokens", candidate.len());
		}

		Ok(candidate)
	}
}

impl MarkovChain<String> {
	/// Normalizes any accepted corpus shape and builds a chain from it.
	pub fn from_input<I: Into<CorpusInput>>(input: I, order: usize) -> ChainResult<Self> {
		Self::build(input.into().normalize(), order)
	}
}
