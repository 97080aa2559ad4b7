//! Parameter placeholder lists.
//!
//! ```rust
//! use strmangle_sql::placeholders;
//!
//! assert_eq!(placeholders(true, 3, 1, 1).unwrap(), "$1,$2,$3");
//! assert_eq!(placeholders(false, 3, 1, 1).unwrap(), "?,?,?");
//! // Multi-row insert: two rows of three columns, numbering from $4.
//! assert_eq!(placeholders(true, 6, 4, 3).unwrap(), "($4,$5,$6),($7,$8,$9)");
//! ```

use std::fmt::Write;

use crate::error::{SqlError, SqlResult};

/// A validated request for a run of placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    indexed: bool,
    count: usize,
    start: usize,
    group_size: usize,
}

impl PlaceholderSpec {
    /// Validate a placeholder request.
    ///
    /// `start` is only meaningful for indexed placeholders, where it must
    /// be at least 1 and leave room for `count` markers. `group_size` must
    /// be at least 1; a trailing partial group is allowed.
    pub fn new(indexed: bool, count: usize, start: usize, group_size: usize) -> SqlResult<Self> {
        if group_size == 0 {
            return Err(SqlError::InvalidGroupSize { group_size });
        }
        if indexed && start == 0 {
            return Err(SqlError::InvalidStartIndex { start });
        }
        if indexed && start.checked_add(count).is_none() {
            return Err(SqlError::IndexOverflow { start, count });
        }
        Ok(Self {
            indexed,
            count,
            start,
            group_size,
        })
    }

    /// Ungrouped indexed placeholders from `start`, or `?` when `start` is 0.
    ///
    /// This is the convention used by the clause builders. Indices past
    /// `usize::MAX` saturate instead of wrapping.
    pub fn from_start(count: usize, start: usize) -> Self {
        Self {
            indexed: start != 0,
            count,
            start,
            group_size: 1,
        }
    }

    /// Whether the markers are `$n` rather than `?`.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// The index following the last marker.
    pub fn next_index(&self) -> usize {
        if self.indexed {
            self.start.saturating_add(self.count)
        } else {
            0
        }
    }

    /// Append the placeholders to `out`.
    pub fn write_to(&self, out: &mut String) {
        if self.count == 0 {
            return;
        }

        let grouped = self.group_size > 1;
        if grouped {
            out.push('(');
        }
        for i in 0..self.count {
            if i != 0 {
                if grouped && i % self.group_size == 0 {
                    out.push_str("),(");
                } else {
                    out.push(',');
                }
            }
            if self.indexed {
                let _ = write!(out, "${}", self.start.saturating_add(i));
            } else {
                out.push('?');
            }
        }
        if grouped {
            out.push(')');
        }
    }

    /// Render the placeholders.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.count * 4);
        self.write_to(&mut out);
        out
    }
}

/// Render `count` placeholders, optionally grouped into tuples of `group_size`.
pub fn placeholders(indexed: bool, count: usize, start: usize, group_size: usize) -> SqlResult<String> {
    Ok(PlaceholderSpec::new(indexed, count, start, group_size)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholders() {
        let cases = [
            ((true, 1, 2, 1), "$2"),
            ((true, 5, 1, 1), "$1,$2,$3,$4,$5"),
            ((false, 5, 1, 1), "?,?,?,?,?"),
            ((true, 6, 1, 2), "($1,$2),($3,$4),($5,$6)"),
            ((false, 9, 1, 3), "(?,?,?),(?,?,?),(?,?,?)"),
            ((true, 7, 1, 3), "($1,$2,$3),($4,$5,$6),($7)"),
            ((false, 2, 0, 1), "?,?"),
            ((true, 0, 1, 3), ""),
        ];

        for ((indexed, count, start, group), want) in cases {
            assert_eq!(
                placeholders(indexed, count, start, group).unwrap(),
                want,
                "placeholders({indexed}, {count}, {start}, {group})"
            );
        }
    }

    #[test]
    fn test_invalid_requests() {
        assert_eq!(
            placeholders(true, 3, 1, 0),
            Err(SqlError::InvalidGroupSize { group_size: 0 })
        );
        assert_eq!(
            placeholders(true, 3, 0, 1),
            Err(SqlError::InvalidStartIndex { start: 0 })
        );
    }

    #[test]
    fn test_index_overflow() {
        assert_eq!(
            placeholders(true, 2, usize::MAX, 1),
            Err(SqlError::IndexOverflow {
                start: usize::MAX,
                count: 2
            })
        );
        assert_eq!(
            placeholders(true, 1, usize::MAX - 1, 1).unwrap(),
            format!("${}", usize::MAX - 1)
        );
        // Anonymous markers carry no index.
        assert_eq!(placeholders(false, 2, usize::MAX, 1).unwrap(), "?,?");
    }

    #[test]
    fn test_from_start_saturates() {
        let spec = PlaceholderSpec::from_start(2, usize::MAX);
        assert_eq!(spec.render(), format!("${0},${0}", usize::MAX));
        assert_eq!(spec.next_index(), usize::MAX);
    }

    #[test]
    fn test_next_index() {
        let spec = PlaceholderSpec::from_start(3, 4);
        assert!(spec.is_indexed());
        assert_eq!(spec.render(), "$4,$5,$6");
        assert_eq!(spec.next_index(), 7);

        let anon = PlaceholderSpec::from_start(3, 0);
        assert!(!anon.is_indexed());
        assert_eq!(anon.render(), "?,?,?");
        assert_eq!(anon.next_index(), 0);
    }
}
