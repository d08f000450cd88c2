use std::fmt::{Display, Formatter};

use crate::common_enum;
use crate::raw::RawBacked;
use crate::utils::to_json::ToJson;

common_enum! {
    /// Languages a snippet can be annotated with.
    #[derive(Copy)]
    pub enum ProgrammingLanguage {
        Swift,
        ObjectiveC,
        C,
        Cpp,
        Java,
    }
}

impl RawBacked for ProgrammingLanguage {
    type Raw = &'static str;
    const CASES: &'static [Self] = &[
        Self::Swift,
        Self::ObjectiveC,
        Self::C,
        Self::Cpp,
        Self::Java,
    ];

    // Cases without an explicit spelling use the lowercased case name.
    fn raw_value(&self) -> &'static str {
        match self {
            ProgrammingLanguage::Swift => "swift",
            ProgrammingLanguage::ObjectiveC => "objective-c",
            ProgrammingLanguage::C => "c",
            ProgrammingLanguage::Cpp => "c++",
            ProgrammingLanguage::Java => "java",
        }
    }
}

impl ProgrammingLanguage {
    /// Case whose raw spelling matches `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CASES
            .iter()
            .copied()
            .find(|case| case.raw_value() == name)
    }
}

impl ToJson for ProgrammingLanguage {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_explicit_spellings() {
        assert_eq!(
            ProgrammingLanguage::from_name("objective-c"),
            Some(ProgrammingLanguage::ObjectiveC)
        );
        assert_eq!(
            ProgrammingLanguage::from_name("c++"),
            Some(ProgrammingLanguage::Cpp)
        );
    }

    #[test]
    fn from_name_misses_unknown_spellings() {
        assert_eq!(ProgrammingLanguage::from_name("cobol"), None);
        assert_eq!(ProgrammingLanguage::from_name("C++"), None);
    }
}
