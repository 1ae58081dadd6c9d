use crate::core::models::ids::IndividualKey;
use crate::core::models::individual::Individual;
use crate::core::models::tree::FamilyTree;
use tracing::{debug, instrument};

/// Fills in `father_id` and `mother_id` for every individual from its family of origin.
///
/// Individuals whose family of origin is absent or unknown are left untouched.
/// The pass only reads families and only writes the derived parent fields, so
/// running it again yields the same result.
///
/// # Return
///
/// The number of individuals whose family of origin was found.
#[instrument(skip_all, name = "resolve_parents")]
pub fn resolve_parents(tree: &mut FamilyTree) -> usize {
    let keys = tree.individual_keys().to_vec();
    let resolved = resolve_parents_for(tree, &keys);
    debug!(
        resolved,
        total = keys.len(),
        "Resolved parentage from families of origin."
    );
    resolved
}

/// Same as [`resolve_parents`], restricted to the given individuals.
///
/// Unknown keys are skipped.
pub fn resolve_parents_for(tree: &mut FamilyTree, keys: &[IndividualKey]) -> usize {
    let mut resolved = 0;
    for &key in keys {
        let Some(individual) = tree.individual(key) else {
            continue;
        };
        let Some(family) = tree.family_of_origin(individual) else {
            continue;
        };
        let (father, mother) = (family.father.clone(), family.mother.clone());

        if let Some(individual) = tree.individual_mut(key) {
            individual.father_id = father;
            individual.mother_id = mother;
            resolved += 1;
        }
    }
    resolved
}

/// Counts the siblings of an individual within its family of origin.
///
/// When the family exists and lists the individual as a child, the count is the
/// length of the family's child list minus one; otherwise it is zero. Repeated
/// child entries are counted as listed.
pub fn sibling_count(tree: &FamilyTree, individual: &Individual) -> usize {
    match tree.family_of_origin(individual) {
        Some(family) if family.has_child(&individual.id) => family.children().len() - 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tree() -> FamilyTree {
        let mut tree = FamilyTree::new();
        for (id, name, famc) in [
            ("@I1@", "John /Smith/", Some("@F1@")),
            ("@I2@", "Adam /Smith/", None),
            ("@I3@", "Eve /Jones/", None),
            ("@I4@", "Mary /Smith/", Some("@F1@")),
            ("@I6@", "Lost /Soul/", Some("@F9@")),
        ] {
            let key = tree.start_individual(id);
            let individual = tree.individual_mut(key).unwrap();
            individual.name = name.to_string();
            individual.family_of_origin = famc.map(str::to_string);
        }
        let family = tree.start_family("@F1@");
        let family = tree.family_mut(family).unwrap();
        family.father = Some("@I2@".into());
        family.mother = Some("@I3@".into());
        family.add_child("@I1@");
        family.add_child("@I4@");
        tree
    }

    fn parents(tree: &FamilyTree, id: &str) -> (Option<String>, Option<String>) {
        let individual = tree.individual_by_id(id).unwrap();
        (individual.father_id.clone(), individual.mother_id.clone())
    }

    #[test]
    fn copies_parents_from_family_of_origin() {
        let mut tree = build_tree();
        let resolved = resolve_parents(&mut tree);

        assert_eq!(resolved, 2);
        assert_eq!(
            parents(&tree, "@I1@"),
            (Some("@I2@".into()), Some("@I3@".into()))
        );
        assert_eq!(parents(&tree, "@I2@"), (None, None));
    }

    #[test]
    fn missing_family_leaves_parents_absent() {
        let mut tree = build_tree();
        resolve_parents(&mut tree);
        assert_eq!(parents(&tree, "@I6@"), (None, None));
    }

    #[test]
    fn family_without_mother_resolves_father_only() {
        let mut tree = build_tree();
        let key = tree.find_family("@F1@").unwrap();
        tree.family_mut(key).unwrap().mother = None;

        resolve_parents(&mut tree);
        assert_eq!(parents(&tree, "@I4@"), (Some("@I2@".into()), None));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut once = build_tree();
        resolve_parents(&mut once);

        let mut twice = build_tree();
        resolve_parents(&mut twice);
        resolve_parents(&mut twice);

        for id in ["@I1@", "@I2@", "@I3@", "@I4@", "@I6@"] {
            assert_eq!(parents(&once, id), parents(&twice, id));
        }
    }

    #[test]
    fn restricted_resolution_only_touches_given_keys() {
        let mut tree = build_tree();
        let john = tree.find_individual("@I1@").unwrap();

        let resolved = resolve_parents_for(&mut tree, &[john]);

        assert_eq!(resolved, 1);
        assert!(parents(&tree, "@I1@").0.is_some());
        assert_eq!(parents(&tree, "@I4@"), (None, None));
    }

    #[test]
    fn sibling_count_is_child_list_length_minus_one() {
        let tree = build_tree();
        let john = tree.individual_by_id("@I1@").unwrap();
        assert_eq!(sibling_count(&tree, john), 1);
    }

    #[test]
    fn sibling_count_is_zero_without_resolvable_family() {
        let tree = build_tree();
        assert_eq!(sibling_count(&tree, tree.individual_by_id("@I2@").unwrap()), 0);
        assert_eq!(sibling_count(&tree, tree.individual_by_id("@I6@").unwrap()), 0);
    }

    #[test]
    fn sibling_count_is_zero_when_not_listed_as_child() {
        let mut tree = build_tree();
        let key = tree.start_individual("@I7@");
        tree.individual_mut(key).unwrap().family_of_origin = Some("@F1@".into());

        assert_eq!(sibling_count(&tree, tree.individual(key).unwrap()), 0);
    }

    #[test]
    fn sibling_count_keeps_duplicate_child_entries() {
        let mut tree = build_tree();
        let key = tree.find_family("@F1@").unwrap();
        tree.family_mut(key).unwrap().add_child("@I1@");

        let john = tree.individual_by_id("@I1@").unwrap();
        assert_eq!(sibling_count(&tree, john), 2);
    }
}
