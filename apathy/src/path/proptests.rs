//! Property-based tests for path handling.
//!
//! Note: The normalize and relationship modules already carry light property
//! tests. This module reruns the core laws with many more cases and with
//! deeper, noisier paths.

use super::normalize::{resolve_against, resolve_components};
use super::relationship::{descends_from, shares_parent, PathRelations, PathRelationship};
use super::types::CanonicalPath;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-d]{1,3}",
        2 => Just(".".to_string()),
        2 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn noisy_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(path_component_strategy(), 0..12)).prop_map(
        |(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = CanonicalPath> {
    prop::collection::vec("[a-z0-9_-]{1,20}", 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        CanonicalPath::new(path).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(p)) == resolve(p)
    #[test]
    fn resolution_idempotent(s in noisy_path_strategy(), base in absolute_path_strategy()) {
        let once = resolve_against(Path::new(&s), &base);
        let twice = resolve_against(once.as_path(), &base);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(resolve_components(once.as_path()), once.into_path_buf());
    }

    // Resolved paths never contain "." or ".." components
    #[test]
    fn resolved_paths_have_no_dot_components(s in noisy_path_strategy(), base in absolute_path_strategy()) {
        let resolved = resolve_against(Path::new(&s), &base);
        for component in resolved.as_path().components() {
            prop_assert_ne!(component, std::path::Component::CurDir);
            prop_assert_ne!(component, std::path::Component::ParentDir);
        }
    }

    // Descent is transitive
    #[test]
    fn descent_transitive(base in absolute_path_strategy(), parts1 in 0..5usize, parts2 in 0..5usize) {
        let mut path_b = base.as_path().to_path_buf();
        for i in 0..parts1 {
            path_b.push(format!("sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push(format!("deep{i}"));
        }

        let path_b = CanonicalPath::new(path_b).unwrap();
        let path_c = CanonicalPath::new(path_c).unwrap();

        prop_assert!(descends_from(&path_b, &base));
        prop_assert!(descends_from(&path_c, &path_b));
        prop_assert!(descends_from(&path_c, &base));
    }

    // The upward walk agrees with component-wise prefix checking
    #[test]
    fn descent_matches_component_prefix(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        prop_assert_eq!(
            descends_from(&p1, &p2),
            p1.as_path().starts_with(p2.as_path())
        );
    }

    // Relationship types are mutually exclusive and agree with the predicates
    #[test]
    fn relationship_consistent(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let rel = PathRelationship::between(&p1, &p2);
        let expected = if p1 == p2 {
            PathRelationship::Same
        } else if descends_from(&p2, &p1) {
            PathRelationship::Ancestor
        } else if descends_from(&p1, &p2) {
            PathRelationship::Descendant
        } else if shares_parent(&p1, &p2) {
            PathRelationship::Sibling
        } else {
            PathRelationship::Unrelated
        };
        prop_assert_eq!(rel, expected);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn relationship_symmetric(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&p1, &p2);
        let rel_21 = PathRelationship::between(&p2, &p1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Sibling, PathRelationship::Sibling)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Predicates over noisy relative input obey duality and symmetry
    #[test]
    fn predicate_laws(s1 in noisy_path_strategy(), s2 in noisy_path_strategy(), base in absolute_path_strategy()) {
        let relations = PathRelations::with_base_dir(base.into_path_buf());
        let (p1, p2) = (Path::new(&s1), Path::new(&s2));

        prop_assert_eq!(
            relations.is_descendant(p1, Some(p2)).unwrap(),
            relations.is_ancestor(p2, Some(p1)).unwrap()
        );
        prop_assert_eq!(
            relations.is_sibling(p1, Some(p2)).unwrap(),
            relations.is_sibling(p2, Some(p1)).unwrap()
        );
        prop_assert!(relations.is_descendant(p1, Some(Path::new("/"))).unwrap());
    }
}
