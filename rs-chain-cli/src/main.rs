use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use rs_chain_core::{ChainConfig, Generator, Tokenization};

/// Markov chain sentence generator.
///
/// Learns from a UTF-8 text file holding one sentence per line and prints
/// new sentences, one per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	/// File containing one input sentence per line.
	pub textfile: PathBuf,

	/// Number of sentences to generate.
	#[arg(default_value_t = 1)]
	pub num: usize,

	/// JSON configuration file; flags given on the command line win.
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Number of trailing tokens used as context.
	#[arg(short, long)]
	pub order: Option<usize>,

	/// Retries allowed when a sentence copies the input verbatim.
	#[arg(short, long)]
	pub retries: Option<usize>,

	/// Split lines into characters instead of whitespace separated words.
	#[arg(short, long)]
	pub chars: bool,

	/// Seed for reproducible output.
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Maximum number of tokens in a single sentence.
	#[arg(long)]
	pub max_steps: Option<usize>,

	/// Increase diagnostics (-v notices, -vv every rejection).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

impl Args {
	/// Builds the effective configuration: file (or defaults), then flags.
	pub fn resolve_config(&self) -> rs_chain_core::ChainResult<ChainConfig> {
		let mut config = match &self.config {
			Some(path) => ChainConfig::from_json_file(path)?,
			None => ChainConfig::default(),
		};
		if let Some(order) = self.order {
			config.order = order;
		}
		if let Some(retries) = self.retries {
			config.retries = retries;
		}
		if self.chars {
			config.tokenization = Tokenization::Characters;
		}
		if self.seed.is_some() {
			config.seed = self.seed;
		}
		if self.max_steps.is_some() {
			config.max_steps = self.max_steps;
		}
		config.verbosity = config.verbosity.max(self.verbose);
		config.validate()?;
		Ok(config)
	}
}

fn level_filter(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let config = args.resolve_config()?;

	env_logger::Builder::new()
		.filter_level(level_filter(config.verbosity))
		.parse_default_env()
		.init();
	log::debug!("{:?}", config);

	let mut generator = Generator::from_file(&args.textfile, config)?;
	for _ in 0..args.num {
		println!("{}", generator.generate_text()?);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_defaults() {
		let args = Args::parse_from(["rs-chain", "input.txt"]);
		assert_eq!(args.num, 1);
		let config = args.resolve_config().unwrap();
		assert_eq!(config, ChainConfig::default());
	}

	#[test]
	fn test_flags_override() {
		let args = Args::parse_from(["rs-chain", "input.txt", "5", "-o", "3", "-r", "0", "-c", "-s", "9", "-vv"]);
		assert_eq!(args.num, 5);
		let config = args.resolve_config().unwrap();
		assert_eq!(config.order, 3);
		assert_eq!(config.retries, 0);
		assert_eq!(config.tokenization, Tokenization::Characters);
		assert_eq!(config.seed, Some(9));
		assert_eq!(config.verbosity, 2);
		assert_eq!(level_filter(config.verbosity), LevelFilter::Trace);
	}

	#[test]
	fn test_config_file_then_flags() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"order": 4, "retries": 3, "seed": 1}}"#).unwrap();
		let path = file.path().to_str().unwrap();

		let args = Args::parse_from(["rs-chain", "input.txt", "--config", path, "--retries", "8"]);
		let config = args.resolve_config().unwrap();
		assert_eq!(config.order, 4);
		assert_eq!(config.retries, 8);
		assert_eq!(config.seed, Some(1));
	}

	#[test]
	fn test_zero_order_is_rejected() {
		let args = Args::parse_from(["rs-chain", "input.txt", "--order", "0"]);
		assert!(args.resolve_config().is_err());
	}
}
