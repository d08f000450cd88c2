use std::fmt::{Display, Formatter};

use crate::common_enum;
use crate::raw::RawBacked;
use crate::utils::to_json::ToJson;

common_enum! {
    /// Horizontal alignment of rendered text.
    #[derive(Copy)]
    pub enum TextAlignment {
        Left,
        Right,
        Center,
        Justify,
    }
}

impl RawBacked for TextAlignment {
    type Raw = i64;
    const CASES: &'static [Self] = &[Self::Left, Self::Right, Self::Center, Self::Justify];

    fn raw_value(&self) -> i64 {
        match self {
            TextAlignment::Left => 20,
            TextAlignment::Right => 30,
            TextAlignment::Center => 40,
            TextAlignment::Justify => 50,
        }
    }
}

impl ToJson for TextAlignment {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Display for TextAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextAlignment::Left => write!(f, "left aligned"),
            TextAlignment::Right => write!(f, "right aligned"),
            TextAlignment::Center => write!(f, "center aligned"),
            TextAlignment::Justify => write!(f, "justified"),
        }
    }
}
