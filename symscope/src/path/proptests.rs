//! Property-based tests for scoped resolution.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module builds random symlink forests on disk and checks the
//! containment and idempotence guarantees of the resolver against them.

use super::normalize::clean;
use super::relationship::PathRelationship;
use super::resolver::ScopedResolver;
use crate::error::Error;
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just("a".to_string()),
        3 => Just("b".to_string()),
        2 => Just("c".to_string()),
        3 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn target_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(component_strategy(), 0..6),
    )
        .prop_map(|(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else if joined.is_empty() {
                ".".to_string()
            } else {
                joined
            }
        })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![Just("a"), Just("b"), Just("c"), Just("l1"), Just("l2")],
        1..6,
    )
    .prop_map(|parts| parts.iter().collect())
}

fn links_strategy() -> impl Strategy<Value = Vec<(PathBuf, String)>> {
    prop::collection::vec(
        (
            prop_oneof![Just("l1"), Just("l2"), Just("a/l1"), Just("b/l2")],
            target_strategy(),
        ),
        0..4,
    )
    .prop_map(|links| {
        links
            .into_iter()
            .map(|(link, target)| (PathBuf::from(link), target))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // Results never leave the scope, and resolving a result again is a no-op
    #[cfg(unix)]
    #[test]
    fn resolution_is_contained_and_idempotent(
        links in links_strategy(),
        query in relative_path_strategy(),
    ) {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let scope = dir.path().join("scope");
        fs::create_dir_all(scope.join("a")).unwrap();
        fs::create_dir_all(scope.join("b")).unwrap();

        for (link, target) in &links {
            // Later duplicates lose; the first link at a path stays.
            let _ = symlink(target, scope.join(link));
        }

        let resolver = ScopedResolver::new().with_max_link_depth(16);
        match resolver.resolve(&scope.join(&query), &scope) {
            Ok(resolved) => {
                let scope_clean = clean(&scope);
                prop_assert!(
                    PathRelationship::is_within(resolved.path(), &scope_clean),
                    "{} escaped {}", resolved.path().display(), scope_clean.display()
                );

                let again = resolver.resolve(resolved.path(), &scope).unwrap();
                prop_assert_eq!(again.path(), resolved.path());
                prop_assert_eq!(again.links_followed(), 0);
            }
            Err(Error::SymlinkLoop { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    // Without any links the resolver is lexical cleaning under the scope
    #[cfg(unix)]
    #[test]
    fn no_links_means_identity(query in relative_path_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let scope = dir.path();

        let resolved = ScopedResolver::new().resolve(&scope.join(&query), scope).unwrap();
        prop_assert_eq!(resolved.path(), clean(&scope.join(&query)));
    }
}
