//! Property-based tests for path resolution

use proptest::prelude::*;
use shellport::paths::PathResolver;
use std::path::{Component, PathBuf};

fn resolver() -> PathResolver {
    PathResolver::new(PathBuf::from("/home/me"))
}

proptest! {
    #[test]
    fn test_resolve_doesnt_panic(s in "\\PC*", base in "/[a-z/]{0,20}") {
        let _ = resolver().resolve(&s, &PathBuf::from(base));
    }

    #[test]
    fn test_blank_input_is_home_from_any_base(
        blank in "[ \t]{0,5}",
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
    ) {
        let resolved = resolver().resolve(&blank, &PathBuf::from(base)).unwrap();
        prop_assert_eq!(resolved, PathBuf::from("/home/me"));
    }

    #[test]
    fn test_absolute_input_ignores_base(
        target in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        first in "/[a-z]{1,8}",
        second in "/[a-z]{1,8}/[a-z]{1,8}",
    ) {
        let r = resolver();
        let a = r.resolve(&target, &PathBuf::from(first)).unwrap();
        let b = r.resolve(&target, &PathBuf::from(second)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_relative_input_stays_under_base(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        relative in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
    ) {
        let base = PathBuf::from(base);
        let resolved = resolver().resolve(&relative, &base).unwrap();
        prop_assert!(resolved.starts_with(&base));
    }

    #[test]
    fn test_resolved_paths_have_no_dot_components(
        base in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        segments in prop::collection::vec(prop_oneof!["[a-z]{1,6}", Just(".".to_string()), Just("..".to_string())], 1..8),
    ) {
        let relative = segments.join("/");
        prop_assume!(relative != "..");
        let resolved = resolver().resolve(&relative, &PathBuf::from(base)).unwrap();
        prop_assert!(resolved
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
    }
}
