// Recursive variant tests
// Focus: boxed construction, traversal, single ownership of subtrees

use pretty_assertions::assert_eq;
use varia_core::{FamilyTree, Result, ToJson};

fn fred_ancestors() -> FamilyTree {
    FamilyTree::two_known_parents(
        "Fred Sr.",
        FamilyTree::one_known_parent("Beth", FamilyTree::no_known_parents()),
        "Marsha",
        FamilyTree::no_known_parents(),
    )
}

// ===== CONSTRUCTION =====

#[test]
fn three_generation_tree_builds_and_keeps_names() {
    let tree = fred_ancestors();
    assert_eq!(tree.generations(), 3);
    assert_eq!(tree.known_names(), vec!["Fred Sr.", "Beth", "Marsha"]);
}

#[test]
fn each_parent_owns_its_own_subtree() {
    let FamilyTree::TwoKnownParents(pair) = fred_ancestors() else {
        panic!("expected the two-parent case");
    };
    assert!(pair.father_ancestors.is_one_known_parent());
    assert!(pair.mother_ancestors.is_no_known_parents());
    assert_eq!(pair.father_ancestors.known_names(), vec!["Beth"]);
}

// ===== TRAVERSAL =====

#[test]
fn generations_count_the_root() {
    assert_eq!(FamilyTree::no_known_parents().generations(), 1);

    let chain = FamilyTree::one_known_parent("Beth", FamilyTree::no_known_parents());
    assert_eq!(chain.generations(), 2);
}

#[test]
fn known_names_is_empty_without_recorded_parents() {
    let tree = FamilyTree::no_known_parents();
    let names = tree.known_names();
    assert!(names.is_empty(), "unexpected names: {names:?}");
}

// ===== SERIALIZATION =====

#[test]
fn trees_round_trip_through_json() -> Result<()> {
    let original = fred_ancestors();
    let restored: FamilyTree = serde_json::from_value(original.to_json()?)?;
    assert_eq!(restored, original);
    Ok(())
}
