//! Identifier quoting.
//!
//! [`quote`] wraps every segment of a dotted identifier in the given quote
//! characters. Anything that looks like an expression rather than a bare
//! identifier (parentheses, commas or whitespace) is passed through
//! untouched, as are `null` and `?`.
//!
//! ```rust
//! use strmangle_sql::quote;
//!
//! assert_eq!(quote('"', '"', "public.users"), r#""public"."users""#);
//! assert_eq!(quote('"', '"', "users.*"), r#""users".*"#);
//! assert_eq!(quote('"', '"', "count(*) as n"), "count(*) as n");
//! ```

/// Characters stripped from a segment before it is re-quoted.
const FOREIGN_QUOTES: &[char] = &['"', '`', '[', ']'];

/// Quote each `.`-separated segment of `raw`.
pub fn quote(lq: char, rq: char, raw: &str) -> String {
    if raw.is_empty() || raw == "null" || raw == "?" || is_expression(raw) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for (i, segment) in raw.split('.').enumerate() {
        if i != 0 {
            out.push('.');
        }

        if segment == "*" || is_wrapped(lq, rq, segment) {
            out.push_str(segment);
            continue;
        }

        let bare = segment.trim_matches(|c: char| c == lq || c == rq || FOREIGN_QUOTES.contains(&c));
        out.push(lq);
        out.push_str(bare);
        out.push(rq);
    }

    out
}

/// Apply [`quote`] to every element.
pub fn quote_slice<S: AsRef<str>>(lq: char, rq: char, raw: &[S]) -> Vec<String> {
    raw.iter().map(|s| quote(lq, rq, s.as_ref())).collect()
}

/// Render a quote character for embedding in a double-quoted string literal.
///
/// Only `"` needs escaping; every other character comes back as itself.
pub fn quote_character(q: char) -> String {
    if q == '"' {
        r#"\""#.to_string()
    } else {
        q.to_string()
    }
}

/// A table name, prefixed with its quoted schema when `use_schema` is set.
///
/// Databases without real schemas (MySQL) pass `use_schema = false`.
pub fn schema_table(lq: &str, rq: &str, use_schema: bool, schema: &str, table: &str) -> String {
    if use_schema {
        format!("{lq}{schema}{rq}.{lq}{table}{rq}")
    } else {
        format!("{lq}{table}{rq}")
    }
}

fn is_expression(raw: &str) -> bool {
    raw.chars()
        .any(|c| c == '(' || c == ')' || c == ',' || c.is_whitespace())
}

fn is_wrapped(lq: char, rq: char, segment: &str) -> bool {
    let mut chars = segment.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == lq && last == rq,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote() {
        let cases = [
            (r#"thing"#, r#""thing""#),
            (r#"null"#, r#"null"#),
            (r#""thing""#, r#""thing""#),
            (r#"*"#, r#"*"#),
            (r#""#, r#""#),
            (r#"?"#, r#"?"#),
            (r#"thing.thing"#, r#""thing"."thing""#),
            (r#""thing"."thing""#, r#""thing"."thing""#),
            (r#"thing.thing.thing.thing"#, r#""thing"."thing"."thing"."thing""#),
            (r#"thing."thing".thing."thing""#, r#""thing"."thing"."thing"."thing""#),
            (r#"count(*) as ab, thing as bd"#, r#"count(*) as ab, thing as bd"#),
            (r#"hello.*"#, r#""hello".*"#),
            (r#"hello.there.*"#, r#""hello"."there".*"#),
            (r#""hello".there.*"#, r#""hello"."there".*"#),
            (r#"hello."there".*"#, r#""hello"."there".*"#),
            (r#"go-backend.tokens"#, r#""go-backend"."tokens""#),
        ];

        for (input, want) in cases {
            assert_eq!(quote('"', '"', input), want, "input {input:?}");
        }
    }

    #[test]
    fn test_quote_strips_foreign_quotes() {
        assert_eq!(quote('[', ']', r#""dbo".users"#), "[dbo].[users]");
        assert_eq!(quote('"', '"', "`users`"), r#""users""#);
        assert_eq!(quote('[', ']', "[dbo].[users]"), "[dbo].[users]");
    }

    #[test]
    fn test_quote_slice() {
        let quoted = quote_slice('"', '"', &["thing", "null"]);
        assert_eq!(quoted, vec![r#""thing""#.to_string(), "null".to_string()]);
    }

    #[test]
    fn test_quote_character() {
        assert_eq!(quote_character('['), "[");
        assert_eq!(quote_character('`'), "`");
        assert_eq!(quote_character('"'), r#"\""#);
    }

    #[test]
    fn test_schema_table() {
        assert_eq!(
            schema_table(r#"""#, r#"""#, true, "public", "users"),
            r#""public"."users""#
        );
        assert_eq!(schema_table("`", "`", false, "shop", "users"), "`users`");
        assert_eq!(schema_table("[", "]", true, "dbo", "users"), "[dbo].[users]");
    }
}
