use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rolock")]
#[command(about = "Replay editor actions and show the read-only indicator")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Script to replay (reads stdin if omitted)
	pub script: Option<PathBuf>,

	/// Configuration file (defaults to the platform config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Render only the lock glyph, overriding the configuration file
	#[arg(long)]
	pub icon_only: bool,

	/// Log filter for stderr output (`RUST_LOG` takes precedence)
	#[arg(long, value_name = "FILTER", default_value = "warn")]
	pub log_level: String,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn log_level_defaults_to_warn() {
		let cli = Cli::try_parse_from(["rolock"]).unwrap();
		assert_eq!(cli.log_level, "warn");
		assert_eq!(cli.script, None);
		assert!(!cli.icon_only);
	}

	#[test]
	fn log_level_accepts_filter_directives() {
		let cli = Cli::try_parse_from([
			"rolock",
			"--log-level",
			"rolock_indicator=trace,debug",
			"-c",
			"/tmp/rolock.toml",
			"--icon-only",
			"steps.txt",
		])
		.unwrap();
		assert_eq!(cli.log_level, "rolock_indicator=trace,debug");
		assert_eq!(cli.config, Some(PathBuf::from("/tmp/rolock.toml")));
		assert_eq!(cli.script, Some(PathBuf::from("steps.txt")));
		assert!(cli.icon_only);
	}

	#[test]
	fn log_level_requires_a_value() {
		assert!(Cli::try_parse_from(["rolock", "--log-level"]).is_err());
	}
}
