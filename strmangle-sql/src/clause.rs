//! `SET` / `WHERE` fragments.
//!
//! Every builder takes the column quote strings, a placeholder start index
//! and the column names. A start of `0` produces `?` markers; any other
//! start produces `$n` markers numbered from it. Numbering saturates at
//! `usize::MAX` rather than overflowing.
//!
//! ```rust
//! use strmangle_sql::{set_param_names, where_clause, where_in_clause};
//!
//! assert_eq!(set_param_names(r#"""#, r#"""#, 1, &["a", "b"]), r#""a"=$1,"b"=$2"#);
//! assert_eq!(where_clause("`", "`", 0, &["a", "b"]), "`a`=? AND `b`=?");
//! assert_eq!(
//!     where_in_clause(r#"""#, r#"""#, 1, &["a", "b"], 2),
//!     r#""a" IN ($1,$2) AND "b" IN ($3,$4)"#
//! );
//! ```

use crate::placeholder::PlaceholderSpec;

/// `col1=$1,col2=$2,...` for an `UPDATE ... SET`.
pub fn set_param_names<S: AsRef<str>>(lq: &str, rq: &str, start: usize, cols: &[S]) -> String {
    assignments(lq, rq, start, cols, ",")
}

/// `col1=$1 AND col2=$2 ...` for a `WHERE`.
pub fn where_clause<S: AsRef<str>>(lq: &str, rq: &str, start: usize, cols: &[S]) -> String {
    assignments(lq, rq, start, cols, " AND ")
}

/// The [`where_clause`] for `count` rows, OR-ed together.
///
/// Numbering continues across repeats:
/// `(a=$1 AND b=$2) OR (a=$3 AND b=$4)`.
pub fn where_clause_repeated<S: AsRef<str>>(
    lq: &str,
    rq: &str,
    start: usize,
    cols: &[S],
    count: usize,
) -> String {
    if count == 0 {
        return String::new();
    }

    let mut out = String::from("(");
    for i in 0..count {
        if i != 0 {
            out.push_str(") OR (");
        }
        let offset = if start == 0 {
            0
        } else {
            start.saturating_add(i.saturating_mul(cols.len()))
        };
        out.push_str(&where_clause(lq, rq, offset, cols));
    }
    out.push(')');
    out
}

/// `col1 IN ($1,...,$count) AND col2 IN (...)`.
///
/// Each column gets `count` markers; numbering runs on from one column to
/// the next.
pub fn where_in_clause<S: AsRef<str>>(
    lq: &str,
    rq: &str,
    start: usize,
    cols: &[S],
    count: usize,
) -> String {
    let mut out = String::new();
    let mut next = start;
    for (i, col) in cols.iter().enumerate() {
        if i != 0 {
            out.push_str(" AND ");
        }
        out.push_str(lq);
        out.push_str(col.as_ref());
        out.push_str(rq);
        out.push_str(" IN (");

        let spec = PlaceholderSpec::from_start(count, next);
        spec.write_to(&mut out);
        next = spec.next_index();

        out.push(')');
    }
    out
}

fn assignments<S: AsRef<str>>(lq: &str, rq: &str, start: usize, cols: &[S], sep: &str) -> String {
    let mut out = String::new();
    for (i, col) in cols.iter().enumerate() {
        if i != 0 {
            out.push_str(sep);
        }
        out.push_str(lq);
        out.push_str(col.as_ref());
        out.push_str(rq);
        out.push('=');
        let index = if start == 0 { 0 } else { start.saturating_add(i) };
        PlaceholderSpec::from_start(1, index).write_to(&mut out);
    }
    out
}
