use std::fmt::{Display, Formatter};

use crate::common_enum;
use crate::raw::RawBacked;
use crate::utils::to_json::ToJson;

common_enum! {
    /// Two-state bulb.
    #[derive(Copy, derive_more::IsVariant)]
    pub enum Lightbulb {
        On,
        Off,
    }
}

impl Lightbulb {
    /// Surface temperature at the given ambient temperature. A lit bulb runs
    /// 150 degrees above ambient; an unlit one sits at ambient.
    pub fn surface_temperature(&self, ambient: f64) -> f64 {
        match self {
            Lightbulb::On => ambient + 150.0,
            Lightbulb::Off => ambient,
        }
    }

    /// Replace the whole value with the opposite case.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The opposite case.
    pub fn toggled(self) -> Self {
        match self {
            Lightbulb::On => Lightbulb::Off,
            Lightbulb::Off => Lightbulb::On,
        }
    }
}

impl RawBacked for Lightbulb {
    type Raw = i64;
    const CASES: &'static [Self] = &[Self::On, Self::Off];

    // No explicit assignments; backed by the declaration ordinal.
    fn raw_value(&self) -> i64 {
        self.ordinal() as i64
    }
}

impl ToJson for Lightbulb {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Display for Lightbulb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Lightbulb::On => f.write_str("on"),
            Lightbulb::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_case() {
        let mut bulb = Lightbulb::On;
        bulb.toggle();
        assert!(bulb.is_off());
        bulb.toggle();
        assert_eq!(bulb, Lightbulb::On);
    }

    #[test]
    fn surface_temperature_depends_on_the_case() {
        let ambient = 77.0;
        assert_eq!(Lightbulb::On.surface_temperature(ambient), 227.0);
        assert_eq!(Lightbulb::Off.surface_temperature(ambient), 77.0);
    }

    #[test]
    fn raw_backing_is_sequential_from_zero() {
        assert_eq!(Lightbulb::On.raw_value(), 0);
        assert_eq!(Lightbulb::Off.raw_value(), 1);
        assert_eq!(Lightbulb::from_raw(1), Some(Lightbulb::Off));
    }
}
