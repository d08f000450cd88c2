use clap::Args;
use itertools::Itertools;
use tracing::debug;
use varia_core::{ShapeDimensions, ToJson};

use crate::cli::CliConfig;
use crate::{CliError, Result};

/// Arguments for `varia shapes`.
#[derive(Debug, Args)]
pub struct ShapesArgs {
    /// Square side length
    #[arg(long, default_value_t = 10.0)]
    pub side: f64,

    /// Rectangle width
    #[arg(long, default_value_t = 5.0)]
    pub width: f64,

    /// Rectangle height
    #[arg(long, default_value_t = 10.0)]
    pub height: f64,

    /// Right-triangle side lengths
    #[arg(long, num_args = 3, value_names = ["SIDE1", "SIDE2", "SIDE3"], default_values_t = [2.0, 3.0, 4.0])]
    pub sides: Vec<f64>,

    /// Emit the shapes as JSON instead of sentences
    #[arg(long)]
    pub json: bool,
}

/// Render area and perimeter for each reference shape.
pub fn shapes_command(args: &ShapesArgs, _config: &CliConfig) -> Result<String> {
    let mut dims = vec![args.side, args.width, args.height];
    dims.extend(&args.sides);
    if let Some(bad) = dims.iter().find(|d| !d.is_finite() || **d < 0.0) {
        return Err(CliError::InvalidInput(format!(
            "shape dimensions must be non-negative, got {bad}"
        )));
    }

    let shapes = [
        ShapeDimensions::point(),
        ShapeDimensions::square(args.side),
        ShapeDimensions::rectangle(args.width, args.height),
        ShapeDimensions::right_triangle(args.sides[0], args.sides[1], args.sides[2]),
    ];
    debug!(count = shapes.len(), "rendering shapes");

    if args.json {
        let values = shapes
            .iter()
            .map(|shape| shape.to_json())
            .collect::<varia_core::Result<Vec<_>>>()?;
        return Ok(serde_json::Value::Array(values).to_string());
    }

    Ok(shapes
        .iter()
        .flat_map(|shape| {
            [
                format!("{}'s area = {}", shape.label(), shape.area()),
                format!("{}'s perimeter = {}", shape.label(), shape.perimeter()),
            ]
        })
        .join("\n"))
}
