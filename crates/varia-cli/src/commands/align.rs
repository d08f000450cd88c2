use clap::Args;
use tracing::debug;
use varia_core::{RawBacked, TextAlignment, ToJson};

use crate::cli::CliConfig;
use crate::Result;

/// Arguments for `varia align`.
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Raw integer to convert under the alignment mapping
    #[arg(long)]
    pub raw: i64,

    /// Emit the converted case as JSON instead of a sentence
    #[arg(long)]
    pub json: bool,
}

/// Convert a raw integer into an alignment case.
///
/// A raw value with no matching case is a successful outcome with its own
/// sentence, not an error.
pub fn align_command(args: &AlignArgs, _config: &CliConfig) -> Result<String> {
    debug!(raw = args.raw, "converting raw value");
    match TextAlignment::from_raw(args.raw) {
        Some(alignment) if args.json => Ok(alignment.to_json()?.to_string()),
        Some(alignment) => Ok(format!(
            "successfully converted {} into a TextAlignment: {}",
            args.raw, alignment
        )),
        None => Ok(format!(
            "{} has no corresponding TextAlignment case",
            args.raw
        )),
    }
}
