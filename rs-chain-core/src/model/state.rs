use std::collections::HashMap;

use rand::Rng;

use super::symbol::{Symbol, Token};

/// Represents a state in the chain.
///
/// A `State` holds every symbol observed right after one context, together
/// with its number of observations.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - Transitions keep their first-insertion order, which is the scan order
///   of the weighted pick
#[derive(Clone, Debug)]
pub struct State<T> {
	/// Outgoing transitions in first-seen order.
	/// Example: [("whale", 42), (<term>, 3)]
	transitions: Vec<(Symbol<T>, usize)>,
	/// Position of each symbol inside `transitions`.
	index: HashMap<Symbol<T>, usize>,
}

impl<T: Token> Default for State<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Token> State<T> {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self {
			transitions: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// Records `occurrence` observations of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is appended.
	/// - A zero occurrence is ignored, keeping counts strictly positive.
	pub fn add_transition(&mut self, next: Symbol<T>, occurrence: usize) {
		if occurrence == 0 {
			return;
		}
		match self.index.get(&next) {
			Some(&i) => self.transitions[i].1 += occurrence,
			None => {
				self.index.insert(next.clone(), self.transitions.len());
				self.transitions.push((next, occurrence));
			}
		}
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.transitions.iter().map(|(_, occurrence)| occurrence).sum()
	}

	/// Occurrence count recorded for `next`, 0 if never seen.
	pub fn count(&self, next: &Symbol<T>) -> usize {
		self.index.get(next).map_or(0, |&i| self.transitions[i].1)
	}

	/// Iterates over `(successor, count)` in scan order.
	pub fn successors(&self) -> impl Iterator<Item = (&Symbol<T>, usize)> {
		self.transitions.iter().map(|(symbol, occurrence)| (symbol, *occurrence))
	}

	/// Deterministic half of the weighted pick.
	///
	/// Scans transitions in order, accumulating counts, and returns the first
	/// one whose cumulative count is `>= draw`. A draw of `0.0` therefore
	/// selects the first entry and a draw equal to `total()` the last one.
	///
	/// Returns `None` if the state is empty or `draw` exceeds the total.
	pub fn select(&self, draw: f64) -> Option<&Symbol<T>> {
		let mut cumulative = 0usize;
		for (symbol, occurrence) in &self.transitions {
			cumulative += occurrence;
			if cumulative as f64 >= draw {
				return Some(symbol);
			}
		}
		None
	}

	/// Picks the next symbol using weighted random sampling.
	///
	/// The probability of selecting a symbol is proportional to its
	/// occurrence count. The draw is uniform over `[0, total]`.
	///
	/// Returns `None` if the state has no transitions.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Symbol<T>> {
		let total = self.total();
		if total == 0 {
			return None;
		}
		let draw = rng.random_range(0.0..=total as f64);
		self.select(draw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn sample_state() -> State<&'static str> {
		let mut state = State::new();
		state.add_transition(Symbol::Token("a"), 2);
		state.add_transition(Symbol::Token("b"), 1);
		state.add_transition(Symbol::Terminator, 1);
		state.add_transition(Symbol::Token("a"), 1);
		state
	}

	#[test]
	fn test_counts_accumulate_in_insertion_order() {
		let state = sample_state();
		assert_eq!(state.len(), 3);
		assert_eq!(state.total(), 5);
		assert_eq!(state.count(&Symbol::Token("a")), 3);
		assert_eq!(state.count(&Symbol::Token("z")), 0);

		let order: Vec<_> = state.successors().map(|(s, _)| s.clone()).collect();
		assert_eq!(order, vec![Symbol::Token("a"), Symbol::Token("b"), Symbol::Terminator]);
	}

	#[test]
	fn test_zero_occurrence_is_ignored() {
		let mut state: State<&str> = State::new();
		state.add_transition(Symbol::Token("a"), 0);
		assert!(state.is_empty());
	}

	#[test]
	fn test_select_boundaries() {
		let state = sample_state();
		assert_eq!(state.select(0.0), Some(&Symbol::Token("a")));
		assert_eq!(state.select(3.0), Some(&Symbol::Token("a")));
		assert_eq!(state.select(3.5), Some(&Symbol::Token("b")));
		assert_eq!(state.select(4.0), Some(&Symbol::Token("b")));
		assert_eq!(state.select(5.0), Some(&Symbol::Terminator));
		assert_eq!(state.select(5.5), None);
	}

	#[test]
	fn test_pick_empty_state() {
		let state: State<&str> = State::new();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(state.pick(&mut rng), None);
	}

	#[test]
	fn test_pick_follows_weights() {
		let mut state = State::new();
		state.add_transition(Symbol::Token("heavy"), 9);
		state.add_transition(Symbol::Token("light"), 1);

		let mut rng = StdRng::seed_from_u64(7);
		let heavy = (0..2000)
			.filter(|_| state.pick(&mut rng) == Some(&Symbol::Token("heavy")))
			.count();
		assert!(heavy > 1600 && heavy < 1990, "heavy picked {} times", heavy);
	}
}
