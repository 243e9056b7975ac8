//! `rolock` binary.
//!
//! Replays a line-based script of editor actions against a headless editor
//! and prints the read-only indicator after every step.

mod cli;
mod render;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use rolock_config::{FileConfigProvider, OverrideConfig, SharedConfig, default_config_path};
use rolock_host::HeadlessEditor;
use rolock_indicator::ReadOnlySession;
use rolock_session::SessionStateStore;
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(&cli.log_level);

	let config = layered_config(&cli);
	let store = SessionStateStore::shared();
	let editor = Rc::new(HeadlessEditor::new(Arc::clone(&store), config.clone()));
	let session = ReadOnlySession::start(Rc::clone(&editor), store).context("starting read-only session")?;

	let input: Box<dyn BufRead> = match &cli.script {
		Some(path) => Box::new(BufReader::new(
			File::open(path).with_context(|| format!("opening script {}", path.display()))?,
		)),
		None => Box::new(io::stdin().lock()),
	};

	let mut out = io::stdout().lock();
	script::run(input, &editor, &session, &config, &mut out).await?;
	info!(read_only = session.store().len(), "session finished");
	Ok(())
}

/// File-backed configuration, re-read on every reconcile, with the
/// command-line override on top.
fn layered_config(cli: &Cli) -> OverrideConfig {
	let config = match cli.config.clone().or_else(default_config_path) {
		Some(path) => {
			debug!(path = %path.display(), "config.file");
			OverrideConfig::new(FileConfigProvider::new(path))
		}
		None => OverrideConfig::new(SharedConfig::default()),
	};
	if cli.icon_only {
		config.set_icon_only(true);
	}
	config
}

fn setup_tracing(log_level: &str) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
