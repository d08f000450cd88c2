//! Demo subcommands.
//!
//! Each command function takes its parsed args plus the loaded config and
//! returns the rendered output; printing is left to the binary so the
//! commands stay directly testable.

pub mod align;
pub mod bulb;
pub mod shapes;
pub mod tree;

pub use align::{align_command, AlignArgs};
pub use bulb::{bulb_command, BulbArgs};
pub use shapes::{shapes_command, ShapesArgs};
pub use tree::{tree_command, TreeArgs};
