use std::collections::VecDeque;

use super::symbol::{Context, Symbol};

/// Bounded queue of the most recent `order` symbols.
///
/// Starts filled with terminators; pushing into a full window evicts the
/// oldest symbol, so the length is always exactly `order`.
#[derive(Clone, Debug)]
pub struct Window<T> {
	symbols: VecDeque<Symbol<T>>,
}

impl<T: Clone> Window<T> {
	/// Creates a window of `order` terminators.
	pub fn new(order: usize) -> Self {
		let mut symbols = VecDeque::with_capacity(order);
		symbols.extend(std::iter::repeat_n(Symbol::Terminator, order));
		Self { symbols }
	}

	/// Pushes a token, evicting the oldest symbol.
	pub fn push(&mut self, token: T) {
		self.symbols.pop_front();
		self.symbols.push_back(Symbol::Token(token));
	}

	/// Copies the current content into an owned lookup key.
	pub fn snapshot(&self) -> Context<T> {
		self.symbols.iter().cloned().collect()
	}

	/// Borrowed view used for lookups without allocating a key.
	pub fn as_slice(&mut self) -> &[Symbol<T>] {
		self.symbols.make_contiguous()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_is_terminator_padded() {
		let w: Window<&str> = Window::new(3);
		assert_eq!(&*w.snapshot(), &[Symbol::Terminator, Symbol::Terminator, Symbol::Terminator]);
	}

	#[test]
	fn test_push_evicts_oldest() {
		let mut w = Window::new(2);
		w.push("a");
		assert_eq!(&*w.snapshot(), &[Symbol::Terminator, Symbol::Token("a")]);
		w.push("b");
		w.push("c");
		assert_eq!(w.as_slice(), &[Symbol::Token("b"), Symbol::Token("c")]);
	}
}
