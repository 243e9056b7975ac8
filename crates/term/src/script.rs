//! Line-based scripts of editor actions.
//!
//! ```text
//! # comments and blank lines are skipped
//! open /tmp/a.txt
//! open output:build
//! focus /tmp/a.txt
//! toggle          # runs the named command
//! click           # clicks the indicator
//! icon-only on
//! close /tmp/a.txt
//! status
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use rolock_config::OverrideConfig;
use rolock_host::HeadlessEditor;
use rolock_indicator::{ReadOnlySession, TOGGLE_COMMAND};
use thiserror::Error;

use crate::render::indicator_line;

/// A single script instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	Open(String),
	Focus(String),
	Close(String),
	Toggle,
	Click,
	IconOnly(bool),
	Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
	#[error("unknown step '{0}'")]
	UnknownStep(String),
	#[error("'{0}' needs an argument")]
	MissingArgument(&'static str),
	#[error("expected 'on' or 'off', got '{0}'")]
	InvalidSwitch(String),
}

impl FromStr for Step {
	type Err = ScriptError;

	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let (verb, arg) = match line.split_once(char::is_whitespace) {
			Some((verb, arg)) => (verb, arg.trim()),
			None => (line, ""),
		};
		let required = |name: &'static str| {
			if arg.is_empty() {
				Err(ScriptError::MissingArgument(name))
			} else {
				Ok(arg.to_string())
			}
		};

		match verb {
			"open" => required("open").map(Step::Open),
			"focus" => required("focus").map(Step::Focus),
			"close" => required("close").map(Step::Close),
			"toggle" => Ok(Step::Toggle),
			"click" => Ok(Step::Click),
			"status" => Ok(Step::Status),
			"icon-only" => match required("icon-only")?.as_str() {
				"on" => Ok(Step::IconOnly(true)),
				"off" => Ok(Step::IconOnly(false)),
				other => Err(ScriptError::InvalidSwitch(other.to_string())),
			},
			other => Err(ScriptError::UnknownStep(other.to_string())),
		}
	}
}

/// Strips comments and surrounding whitespace; `None` for empty lines.
fn instruction(line: &str) -> Option<&str> {
	let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
	(!line.is_empty()).then_some(line)
}

/// Replays `input` step by step, printing the indicator after each one.
pub async fn run(
	input: impl BufRead,
	editor: &HeadlessEditor,
	session: &ReadOnlySession<HeadlessEditor>,
	config: &OverrideConfig,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	for (index, line) in input.lines().enumerate() {
		let line = line.context("reading script")?;
		let Some(text) = instruction(&line) else {
			continue;
		};
		let lineno = index + 1;
		let step: Step = text.parse().with_context(|| format!("line {lineno}: {text}"))?;

		apply(&step, editor, session, config)
			.await
			.with_context(|| format!("line {lineno}: {text}"))?;

		writeln!(out, "> {text}")?;
		writeln!(out, "  {}", indicator_line(&session.indicator().borrow()))?;
		if step == Step::Status {
			let ids = session.store().read_only_documents();
			let listed: Vec<_> = ids.iter().map(|id| id.as_str()).collect();
			writeln!(out, "  read-only: [{}]", listed.join(", "))?;
		}
	}
	Ok(())
}

async fn apply(
	step: &Step,
	editor: &HeadlessEditor,
	session: &ReadOnlySession<HeadlessEditor>,
	config: &OverrideConfig,
) -> anyhow::Result<()> {
	match step {
		Step::Open(location) => {
			editor.open(location)?;
		}
		Step::Focus(location) => editor.focus(location)?,
		Step::Close(location) => editor.close(location)?,
		Step::Toggle => editor.execute_command(TOGGLE_COMMAND).await?,
		Step::Click => session.toggle().await?,
		Step::IconOnly(icon_only) => {
			config.set_icon_only(*icon_only);
			editor.notify_configuration_changed();
		}
		Step::Status => {}
	}
	Ok(())
}
