use thiserror::Error;

/// Errors raised by chain construction, sampling and configuration.
///
/// Retry exhaustion is deliberately absent: generation degrades to the last
/// candidate instead of failing.
#[derive(Error, Debug)]
pub enum ChainError {
	#[error("Invalid order: {0}, order must be >= 1")]
	InvalidOrder(usize),

	#[error("No successors recorded for context {context}")]
	Lookup { context: String },

	#[error("Step limit exceeded: walk emitted more than {limit} tokens")]
	StepLimitExceeded { limit: usize },

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("Config parse error: {0}")]
	Config(#[from] serde_json::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_display_formats() {
		let err = ChainError::InvalidOrder(0);
		assert_eq!(err.to_string(), "Invalid order: 0, order must be >= 1");

		let err = ChainError::Lookup { context: "[<term>, \"a\"]".into() };
		assert_eq!(err.to_string(), "No successors recorded for context [<term>, \"a\"]");

		let err = ChainError::StepLimitExceeded { limit: 3 };
		assert_eq!(err.to_string(), "Step limit exceeded: walk emitted more than 3 tokens");

		let err = ChainError::InvalidConfig("order must be >= 1".into());
		assert_eq!(err.to_string(), "Invalid configuration: order must be >= 1");
	}

	#[test]
	fn io_error_converts() {
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
		let err: ChainError = io.into();
		assert!(matches!(err, ChainError::Io(_)));
	}
}
