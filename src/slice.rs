//! Slice and set helpers the generator uses to stay deterministic.

use std::collections::HashSet;

use crate::error::{MangleError, MangleResult};

/// Remove duplicates, keeping the first occurrence of each element in order.
pub fn remove_duplicates<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

/// Check that two slices hold the same elements, ignoring order.
///
/// Duplicates count: `["a", "a"]` does not match `["a", "b"]`.
pub fn string_slice_match<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.len() != b.len() {
        return false;
    }

    let mut a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let mut b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Check whether `haystack` contains at least one of `needles`.
pub fn contains_any<S: AsRef<str>>(haystack: &[S], needles: &[&str]) -> bool {
    haystack
        .iter()
        .any(|item| needles.contains(&item.as_ref()))
}

/// Zip two slices into `a[i] + sep + b[i]`.
///
/// The slices must have the same length; pairing columns with values out
/// of step would silently corrupt generated SQL.
pub fn join_slices<A, B>(sep: &str, a: &[A], b: &[B]) -> MangleResult<Vec<String>>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.len() != b.len() {
        return Err(MangleError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(a, b)| format!("{}{}{}", a.as_ref(), sep, b.as_ref()))
        .collect())
}

/// Apply `f` to every element.
pub fn string_map<S, F>(f: F, items: &[S]) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    items.iter().map(|item| f(item.as_ref())).collect()
}

/// Prefix every element with `prefix`.
pub fn prefix_string_slice<S: AsRef<str>>(prefix: &str, items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{prefix}{}", item.as_ref()))
        .collect()
}

/// Check whether a column is ignored, either bare or as `table.column`.
pub fn ignore(table: &str, column: &str, ignored: &HashSet<String>) -> bool {
    ignored.contains(column) || ignored.contains(&format!("{table}.{column}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn has_dups(items: &[String]) -> bool {
        let set: HashSet<&String> = items.iter().collect();
        set.len() != items.len()
    }

    #[test]
    fn test_remove_duplicates() {
        let empty: [&str; 0] = [];
        assert!(remove_duplicates(&empty).is_empty());

        assert_eq!(remove_duplicates(&["patrick"]), vec!["patrick"]);

        let out = remove_duplicates(&["hello", "patrick", "hello"]);
        assert_eq!(out, vec!["hello", "patrick"]);

        let out = remove_duplicates(&[
            "five", "patrick", "hello", "hello", "patrick", "hello", "hello",
        ]);
        assert_eq!(out.len(), 3);
        assert!(!has_dups(&out));
        assert_eq!(out, vec!["five", "patrick", "hello"]);
    }

    #[test]
    fn test_string_slice_match() {
        let cases: [(&[&str], &[&str], bool); 9] = [
            (&[], &[], true),
            (&["a"], &[], false),
            (&["a"], &["a"], true),
            (&[], &["b"], false),
            (&["c", "d"], &["b", "d"], false),
            (&["b", "d"], &["c", "d"], false),
            (&["a", "b", "c"], &["c", "b", "a"], true),
            (&["a", "b", "c"], &["a", "b", "c"], true),
            (&["a", "a"], &["a", "b"], false),
        ];

        for (i, (a, b, want)) in cases.into_iter().enumerate() {
            assert_eq!(string_slice_match(a, b), want, "[{i}] {a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_string_slice_match_leaves_inputs_alone() {
        let a = vec!["b".to_string(), "a".to_string()];
        let b = ["a", "b"];
        assert!(string_slice_match(&a, &b));
        assert_eq!(a, vec!["b", "a"]);
    }

    #[test]
    fn test_contains_any() {
        let a = ["hello", "friend"];
        let empty: [&str; 0] = [];

        assert!(!contains_any(&empty, &["x"]));
        assert!(!contains_any(&a, &["x"]));
        assert!(contains_any(&a, &["hello"]));
        assert!(contains_any(&a, &["friend"]));
        assert!(contains_any(&a, &["hello", "friend"]));
        assert!(!contains_any(&a, &[]));
    }

    #[test]
    fn test_join_slices() {
        let none: [&str; 0] = [];
        assert!(join_slices("", &none, &none).unwrap().is_empty());

        let joined = join_slices(" ", &["one", "two"], &["three", "four"]).unwrap();
        assert_eq!(joined, vec!["one three", "two four"]);
    }

    #[test]
    fn test_join_slices_length_mismatch() {
        let none: [&str; 0] = [];
        let err = join_slices("", &none, &["hello"]).unwrap_err();
        assert!(matches!(
            err,
            MangleError::LengthMismatch { left: 0, right: 1 }
        ));
    }

    #[test]
    fn test_string_map() {
        let mapped = string_map(str::to_lowercase, &["HELLO", "WORLD"]);
        assert_eq!(mapped.join(" "), "hello world");
    }

    #[test]
    fn test_prefix_string_slice() {
        let prefixed = prefix_string_slice("o.", &["one", "two"]);
        assert_eq!(prefixed.join(" "), "o.one o.two");
    }

    #[test]
    fn test_ignore() {
        let set = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<HashSet<_>>();

        assert!(ignore("", "b", &set(&["b"])));
        assert!(ignore("a", "b", &set(&["a.b"])));
        assert!(!ignore("a", "b", &set(&["a.c"])));
        assert!(!ignore("a", "b", &set(&[])));
    }
}
