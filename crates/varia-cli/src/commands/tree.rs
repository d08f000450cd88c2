use clap::Args;
use tracing::debug;
use varia_core::{FamilyTree, ToJson};

use crate::cli::CliConfig;
use crate::Result;

/// Arguments for `varia tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Emit the tree as JSON instead of a sentence
    #[arg(long)]
    pub json: bool,
}

/// Build the reference three-generation ancestry tree and enumerate it.
pub fn tree_command(args: &TreeArgs, _config: &CliConfig) -> Result<String> {
    let fred_ancestors = FamilyTree::two_known_parents(
        "Fred Sr.",
        FamilyTree::one_known_parent("Beth", FamilyTree::no_known_parents()),
        "Marsha",
        FamilyTree::no_known_parents(),
    );
    debug!(generations = fred_ancestors.generations(), "tree built");

    if args.json {
        return Ok(fred_ancestors.to_json()?.to_string());
    }

    Ok(format!(
        "Fred's tree spans {} generations: {}",
        fred_ancestors.generations(),
        fred_ancestors
    ))
}
