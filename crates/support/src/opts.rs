use std::path::Path;

use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OptsError, Result};

/// Execution parameters for one host run.
///
/// A plain record: values are taken as given, nothing is validated. Missing
/// fields in a TOML document fall back to [`RuntimeOpts::default`]. Hosts
/// with their own command line can embed the flags via `#[command(flatten)]`.
#[derive(Debug, Clone, PartialEq, Eq, Args, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuntimeOpts {
	/// How many times the program is executed.
	#[arg(short = 'r', long = "runs", value_name = "N", default_value_t = 1)]
	pub num_runs: u32,

	/// Whether the final result is printed.
	#[arg(long = "no-output", action = ArgAction::SetFalse, help = "Do not print the final result")]
	pub print_result: bool,

	/// Whether input is read fully before processing starts.
	#[arg(long = "preload", help = "Read all input before processing")]
	pub preload_input: bool,

	/// Events between snapshots; 0 disables snapshots.
	#[arg(short = 's', long = "snapshot-interval", value_name = "N", default_value_t = 0)]
	pub snapshot_interval: u64,
}

impl Default for RuntimeOpts {
	fn default() -> Self {
		Self {
			num_runs: 1,
			print_result: true,
			preload_input: false,
			snapshot_interval: 0,
		}
	}
}

impl RuntimeOpts {
	/// Returns true if periodic snapshots are requested.
	pub fn snapshot_enabled(&self) -> bool {
		self.snapshot_interval > 0
	}

	/// Parses options from a TOML document.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Reads options from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| OptsError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let opts = Self::from_toml_str(&content)?;
		debug!(path = %path.display(), ?opts, "Loaded runtime options");
		Ok(opts)
	}

	/// Renders the options as a TOML document.
	pub fn to_toml_string(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}
}
