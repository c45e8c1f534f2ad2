//! Corpus normalization.
//!
//! Training data comes in several shapes; everything is reduced to an ordered
//! list of sentences, each an ordered list of tokens.

/// Normalized training data.
pub type Corpus<T> = Vec<Vec<T>>;

/// One record of a mixed corpus.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
	/// Split on whitespace.
	Text(String),
	/// Already tokenized, kept as-is.
	Tokens(Vec<String>),
}

/// Accepted corpus shapes.
///
/// # Variants
/// - `Empty`: no data at all.
/// - `Text`: a single blob, one sentence per line, tokens split on whitespace.
/// - `Lines`: one sentence per element, tokens split on whitespace.
/// - `Tokens`: pre-tokenized sentences, passed through unchanged.
/// - `Records`: a mix of the two previous shapes, normalized record by record.
#[derive(Clone, Debug, PartialEq)]
pub enum CorpusInput {
	Empty,
	Text(String),
	Lines(Vec<String>),
	Tokens(Vec<Vec<String>>),
	Records(Vec<Record>),
}

impl CorpusInput {
	/// Converts the input into a `Corpus<String>`.
	///
	/// Empty input of any shape (including `""`) yields an empty corpus.
	/// Never fails.
	pub fn normalize(self) -> Corpus<String> {
		match self {
			CorpusInput::Empty => Vec::new(),
			CorpusInput::Text(text) => {
				if text.is_empty() {
					return Vec::new();
				}
				text.split('\n').map(split_whitespace).collect()
			}
			CorpusInput::Lines(lines) => lines.iter().map(|line| split_whitespace(line)).collect(),
			CorpusInput::Tokens(sentences) => sentences,
			CorpusInput::Records(records) => records
				.into_iter()
				.map(|record| match record {
					Record::Text(text) => split_whitespace(&text),
					Record::Tokens(tokens) => tokens,
				})
				.collect(),
		}
	}
}

fn split_whitespace(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

impl From<&str> for CorpusInput {
	fn from(text: &str) -> Self {
		CorpusInput::Text(text.to_owned())
	}
}

impl From<String> for CorpusInput {
	fn from(text: String) -> Self {
		CorpusInput::Text(text)
	}
}

impl From<Vec<String>> for CorpusInput {
	fn from(lines: Vec<String>) -> Self {
		CorpusInput::Lines(lines)
	}
}

impl From<Vec<&str>> for CorpusInput {
	fn from(lines: Vec<&str>) -> Self {
		CorpusInput::Lines(lines.into_iter().map(str::to_owned).collect())
	}
}

impl From<Vec<Vec<String>>> for CorpusInput {
	fn from(sentences: Vec<Vec<String>>) -> Self {
		CorpusInput::Tokens(sentences)
	}
}

impl From<Vec<Record>> for CorpusInput {
	fn from(records: Vec<Record>) -> Self {
		CorpusInput::Records(records)
	}
}

impl<I: Into<CorpusInput>> From<Option<I>> for CorpusInput {
	fn from(input: Option<I>) -> Self {
		input.map_or(CorpusInput::Empty, Into::into)
	}
}

/// Shorthand for `input.into().normalize()`.
pub fn normalize<I: Into<CorpusInput>>(input: I) -> Corpus<String> {
	input.into().normalize()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(s: &str) -> Vec<String> {
		s.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn test_empty_inputs() {
		assert!(normalize(CorpusInput::Empty).is_empty());
		assert!(normalize("").is_empty());
		assert!(normalize(Vec::<String>::new()).is_empty());
		assert!(normalize(Vec::<Vec<String>>::new()).is_empty());
		assert!(normalize(None::<String>).is_empty());
	}

	#[test]
	fn test_text_splits_lines_then_whitespace() {
		let corpus = normalize("call me  Ishmael.\nsome years ago");
		assert_eq!(corpus, vec![words("call me Ishmael."), words("some years ago")]);
	}

	#[test]
	fn test_text_keeps_blank_lines_as_empty_sentences() {
		let corpus = normalize("\na b\n");
		assert_eq!(corpus, vec![vec![], words("a b"), vec![]]);
	}

	#[test]
	fn test_lines_and_tokens() {
		let corpus = normalize(vec!["a b", "c"]);
		assert_eq!(corpus, vec![words("a b"), words("c")]);

		let tokens = vec![vec!["a b".to_owned(), "c".to_owned()]];
		assert_eq!(normalize(tokens.clone()), tokens);
	}

	#[test]
	fn test_mixed_records() {
		let corpus = normalize(vec![
			Record::Text("x y".to_owned()),
			Record::Tokens(vec!["p q".to_owned()]),
		]);
		assert_eq!(corpus, vec![words("x y"), vec!["p q".to_owned()]]);
	}

	#[test]
	fn test_option_some() {
		assert_eq!(normalize(Some("a")), vec![words("a")]);
	}
}
