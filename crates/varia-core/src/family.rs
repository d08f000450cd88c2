use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::utils::to_json::ToJson;
use crate::{common_enum, common_struct};

pub type BFamilyTree = Box<FamilyTree>;

common_enum! {
    /// Known ancestry of one person, tracked upward from the root.
    ///
    /// Instances form an immutable single-owner tree: each recursive case
    /// owns its subtree through a boxed payload, so one instance stays
    /// bounded in size no matter how deep the recorded ancestry goes.
    #[derive(derive_more::IsVariant)]
    pub enum FamilyTree {
        NoKnownParents,
        OneKnownParent(ParentLink),
        TwoKnownParents(ParentPair),
    }
}

common_struct! {
    /// A single recorded parent and everything known above them.
    pub struct ParentLink {
        pub name: String,
        pub ancestors: BFamilyTree,
    }
}

common_struct! {
    /// Both recorded parents, each owning their own subtree.
    pub struct ParentPair {
        pub father_name: String,
        pub father_ancestors: BFamilyTree,
        pub mother_name: String,
        pub mother_ancestors: BFamilyTree,
    }
}

impl FamilyTree {
    pub fn no_known_parents() -> Self {
        FamilyTree::NoKnownParents
    }

    pub fn one_known_parent(name: impl Into<String>, ancestors: FamilyTree) -> Self {
        FamilyTree::OneKnownParent(ParentLink {
            name: name.into(),
            ancestors: Box::new(ancestors),
        })
    }

    pub fn two_known_parents(
        father_name: impl Into<String>,
        father_ancestors: FamilyTree,
        mother_name: impl Into<String>,
        mother_ancestors: FamilyTree,
    ) -> Self {
        FamilyTree::TwoKnownParents(ParentPair {
            father_name: father_name.into(),
            father_ancestors: Box::new(father_ancestors),
            mother_name: mother_name.into(),
            mother_ancestors: Box::new(mother_ancestors),
        })
    }

    /// Height of the known tree. A tree with no recorded parents spans one
    /// generation; each recorded parent adds the height of its own subtree.
    pub fn generations(&self) -> usize {
        match self {
            FamilyTree::NoKnownParents => 1,
            FamilyTree::OneKnownParent(link) => 1 + link.ancestors.generations(),
            FamilyTree::TwoKnownParents(pair) => {
                1 + pair
                    .father_ancestors
                    .generations()
                    .max(pair.mother_ancestors.generations())
            }
        }
    }

    /// Every recorded name in preorder, father before mother.
    pub fn known_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            FamilyTree::NoKnownParents => {}
            FamilyTree::OneKnownParent(link) => {
                names.push(link.name.as_str());
                link.ancestors.collect_names(names);
            }
            FamilyTree::TwoKnownParents(pair) => {
                names.push(pair.father_name.as_str());
                pair.father_ancestors.collect_names(names);
                names.push(pair.mother_name.as_str());
                pair.mother_ancestors.collect_names(names);
            }
        }
    }
}

impl ToJson for FamilyTree {
    fn to_json(&self) -> crate::error::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Display for FamilyTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_no_known_parents() {
            return f.write_str("no known parents");
        }
        write!(f, "{}", self.known_names().iter().format(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_known_names_in_preorder() {
        let tree = FamilyTree::two_known_parents(
            "Fred Sr.",
            FamilyTree::one_known_parent("Beth", FamilyTree::no_known_parents()),
            "Marsha",
            FamilyTree::no_known_parents(),
        );
        assert_eq!(tree.to_string(), "Fred Sr., Beth, Marsha");
    }

    #[test]
    fn empty_tree_displays_a_placeholder() {
        let tree = FamilyTree::no_known_parents();
        assert!(tree.is_no_known_parents());
        assert_eq!(tree.to_string(), "no known parents");
    }
}
