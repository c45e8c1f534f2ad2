use std::fmt;
use std::hash::Hash;

/// Bound satisfied by any type usable as a chain token.
///
/// Words (`String`), characters (`char`) and integer ids all qualify.
pub trait Token: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Token for T {}

/// An element of a context or an outgoing transition.
///
/// `Terminator` pads the start of every sequence and marks its end. Being a
/// separate variant, it can never collide with a real token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol<T> {
	Terminator,
	Token(T),
}

impl<T> Symbol<T> {
	pub fn is_terminator(&self) -> bool {
		matches!(self, Symbol::Terminator)
	}

	/// Returns the wrapped token, `None` for the terminator.
	pub fn token(&self) -> Option<&T> {
		match self {
			Symbol::Token(t) => Some(t),
			Symbol::Terminator => None,
		}
	}
}

impl<T> From<T> for Symbol<T> {
	fn from(token: T) -> Self {
		Symbol::Token(token)
	}
}

/// Fixed-length lookup key: the last `order` symbols seen.
pub type Context<T> = Box<[Symbol<T>]>;

/// Renders a context for diagnostics, e.g. `[<term>, "call"]`.
pub(crate) fn describe_context<T: fmt::Debug>(context: &[Symbol<T>]) -> String {
	let parts: Vec<String> = context
		.iter()
		.map(|symbol| match symbol {
			Symbol::Terminator => "<term>".to_owned(),
			Symbol::Token(t) => format!("{:?}", t),
		})
		.collect();
	format!("[{}]", parts.join(", "))
}
