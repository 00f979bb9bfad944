//! Integration tests for the path relationship predicates.
//!
//! Tests that depend on the process working directory use the free
//! functions and are marked `#[serial]`, since they change the working
//! directory. Everything else runs against an explicit base directory.

mod common;

use apathy::{
    is_ancestor, is_descendant, is_equal, is_sibling, PathRelations, PathRelationship, Predicate,
};
use common::CwdGuard;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

fn p(s: &str) -> Option<&Path> {
    Some(Path::new(s))
}

// =============================================================================
// Working-directory defaults
// =============================================================================

#[test]
#[serial]
fn test_relative_subject_descends_from_cwd() {
    let dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    assert!(is_descendant("./foo", None).unwrap());
    assert!(is_descendant("foo/bar/../baz", None).unwrap());
    assert!(!is_descendant("..", None).unwrap());
}

#[test]
#[serial]
fn test_absolute_subject_outside_cwd() {
    let dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    #[cfg(unix)]
    assert!(!is_descendant("/foo", None).unwrap());
    assert!(is_ancestor("/", None).unwrap());
}

#[test]
#[serial]
fn test_siblings_under_cwd() {
    let dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    assert!(is_sibling("./foo", p("./bar")).unwrap());
    assert!(is_sibling("../other", None).unwrap());
    assert!(!is_sibling("./foo/x", p("./bar")).unwrap());
}

#[test]
#[serial]
fn test_equal_after_normalization_in_cwd() {
    let dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    assert!(is_equal("./foo/../bar/.", p("./bar")).unwrap());
    assert!(is_equal(".", None).unwrap());
    assert!(is_equal("", None).unwrap());
    assert!(is_equal(dir.path().canonicalize().unwrap(), None).unwrap());
}

#[test]
#[serial]
fn test_cwd_is_read_at_call_time() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let (first_path, second_path) = (
        first.path().canonicalize().unwrap(),
        second.path().canonicalize().unwrap(),
    );
    let relations = PathRelations::new();

    {
        let _cwd = CwdGuard::enter(&first_path);
        assert!(relations.is_equal(&first_path, None).unwrap());
    }
    {
        let _cwd = CwdGuard::enter(&second_path);
        assert!(!relations.is_equal(&first_path, None).unwrap());
        assert!(relations.is_equal(&second_path, None).unwrap());
    }
}

// =============================================================================
// Explicit comparison paths
// =============================================================================

#[test]
#[cfg(unix)]
fn test_parent_paths_against_root() {
    let relations = PathRelations::with_base_dir("/home/user/apathy");

    assert!(relations.is_descendant("../foo", p("/")).unwrap());
    assert!(relations.is_ancestor("/", p("/foo")).unwrap());
    assert!(!relations.is_ancestor("/foo", None).unwrap());
}

#[test]
#[cfg(unix)]
fn test_normalization_happens_before_comparison() {
    let relations = PathRelations::with_base_dir("/home/user/apathy");

    assert!(relations.is_descendant("../../foo/bar", p("../../foo")).unwrap());
    assert!(!relations.is_descendant("../../foo/../bar", p("../../foo")).unwrap());
}

#[test]
#[cfg(unix)]
fn test_walk_terminates_at_root() {
    let relations = PathRelations::with_base_dir("/home/user/apathy");

    for subject in ["/", "/a", "/a/b/c/d/e/f/g", "../../../../../../..", "x/y/z"] {
        assert!(relations.is_descendant(subject, p("/")).unwrap(), "{subject}");
    }
    assert!(!relations.is_descendant("/", p("/a")).unwrap());
}

#[test]
#[cfg(unix)]
fn test_reflexivity() {
    let relations = PathRelations::with_base_dir("/srv");

    for path in ["/", "/srv", "a/b", "..", ""] {
        assert!(relations.is_equal(path, p(path)).unwrap(), "{path}");
        assert!(relations.is_descendant(path, p(path)).unwrap(), "{path}");
        assert!(relations.is_ancestor(path, p(path)).unwrap(), "{path}");
        assert!(relations.is_sibling(path, p(path)).unwrap(), "{path}");
    }
}

#[test]
#[cfg(unix)]
fn test_prefix_is_not_ancestry() {
    let relations = PathRelations::with_base_dir("/");

    assert!(!relations.is_descendant("/foobar", p("/foo")).unwrap());
    assert!(!relations.is_ancestor("/foo", p("/foobar")).unwrap());
    assert!(relations.is_sibling("/foobar", p("/foo")).unwrap());
}

#[test]
#[cfg(unix)]
fn test_report_matches_predicates() {
    let relations = PathRelations::with_base_dir("/work");
    let pairs = [
        ("src", "."),
        (".", "src"),
        ("src", "docs"),
        ("src/a", "docs/b"),
        ("/work", "/work/"),
    ];

    for (subject, other) in pairs {
        let report = relations.report(subject, p(other)).unwrap();
        for predicate in Predicate::ALL {
            assert_eq!(
                report.holds(predicate),
                predicate.evaluate(&relations, subject, p(other)).unwrap(),
                "{predicate} {subject} {other}"
            );
        }
    }

    let report = relations.report("src/a", p("docs/b")).unwrap();
    assert_eq!(report.relationship, PathRelationship::Unrelated);
    assert_eq!(report.subject.as_path(), Path::new("/work/src/a"));
}
