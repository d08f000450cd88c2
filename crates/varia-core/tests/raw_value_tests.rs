// Raw-backed variant conversion tests
// Focus: round trips, conversion misses, sequential and name-default backings

use pretty_assertions::assert_eq;
use varia_core::{Lightbulb, ProgrammingLanguage, RawBacked, TextAlignment};

// ===== INTEGER-BACKED, EXPLICIT VALUES =====

#[test]
fn alignment_raw_values_match_the_declared_table() {
    assert_eq!(TextAlignment::Left.raw_value(), 20);
    assert_eq!(TextAlignment::Right.raw_value(), 30);
    assert_eq!(TextAlignment::Center.raw_value(), 40);
    assert_eq!(TextAlignment::Justify.raw_value(), 50);
}

#[test]
fn alignment_round_trips_every_case() {
    for case in TextAlignment::CASES.iter().copied() {
        assert_eq!(TextAlignment::from_raw(case.raw_value()), Some(case));
    }
}

#[test]
fn raw_20_converts_to_left() {
    assert_eq!(TextAlignment::from_raw(20), Some(TextAlignment::Left));
}

#[test]
fn raw_99_has_no_corresponding_case() {
    assert_eq!(TextAlignment::from_raw(99), None);
}

#[test]
fn default_sequential_values_are_not_part_of_the_explicit_mapping() {
    // The explicit table starts at 20, so the would-be defaults miss.
    for raw in 0..4 {
        assert_eq!(TextAlignment::from_raw(raw), None, "raw {raw} should miss");
    }
}

// ===== INTEGER-BACKED, SEQUENTIAL DEFAULTS =====

#[test]
fn bulb_raw_values_count_up_from_zero() {
    assert_eq!(Lightbulb::On.raw_value(), 0);
    assert_eq!(Lightbulb::Off.raw_value(), 1);
}

#[test]
fn bulb_round_trips_every_case() {
    for case in Lightbulb::CASES.iter().copied() {
        assert_eq!(Lightbulb::from_raw(case.raw_value()), Some(case));
    }
    assert_eq!(Lightbulb::from_raw(7), None);
}

// ===== STRING-BACKED, NAME DEFAULTS =====

#[test]
fn language_raw_values_mix_defaults_and_explicit_spellings() {
    assert_eq!(ProgrammingLanguage::Swift.raw_value(), "swift");
    assert_eq!(ProgrammingLanguage::ObjectiveC.raw_value(), "objective-c");
    assert_eq!(ProgrammingLanguage::C.raw_value(), "c");
    assert_eq!(ProgrammingLanguage::Cpp.raw_value(), "c++");
    assert_eq!(ProgrammingLanguage::Java.raw_value(), "java");
}

#[test]
fn language_round_trips_every_case() {
    for case in ProgrammingLanguage::CASES.iter().copied() {
        assert_eq!(ProgrammingLanguage::from_raw(case.raw_value()), Some(case));
    }
}

#[test]
fn language_misses_unknown_spellings() {
    assert_eq!(ProgrammingLanguage::from_raw("cobol"), None);
    assert_eq!(ProgrammingLanguage::from_name("rust"), None);
}
