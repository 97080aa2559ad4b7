//! Fuzz target for the string mangling functions.
//!
//! Every conversion is total over arbitrary input; this target checks that
//! none of them panic and that a few structural properties hold.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_mangle
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strmangle::case::{CaseConverter, camel_case_full, title_case_full, trim_left_digits};
use strmangle::slice::{join_slices, remove_duplicates, string_slice_match};
use strmangle::sql::{
    parse_enum_name, parse_enum_vals, placeholders, quote, replace_reserved_words,
    where_in_clause,
};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    name: String,
    columns: Vec<String>,
    quotes: (char, char),
    indexed: bool,
    count: u8,
    start: u8,
    group: u8,
}

fuzz_target!(|input: FuzzInput| {
    let conv = CaseConverter::default();

    let title = conv.title_case(&input.name);
    assert_eq!(title, conv.title_case(&input.name));
    let _ = conv.camel_case(&input.name);
    let _ = conv.title_case_identifier(&input.name);
    let _ = title_case_full(&input.name);
    let _ = camel_case_full(&input.name);
    let _ = trim_left_digits(&input.name);

    let (lq, rq) = input.quotes;
    let _ = quote(lq, rq, &input.name);
    let _ = parse_enum_name(&input.name);
    let _ = parse_enum_vals(&input.name);
    let _ = replace_reserved_words(&input.name);

    let count = input.count as usize;
    if let Ok(out) = placeholders(input.indexed, count, input.start as usize, input.group as usize) {
        assert_eq!(out.is_empty(), count == 0);
    }

    let _ = where_in_clause(&lq.to_string(), &rq.to_string(), input.start as usize, &input.columns, 3);

    let deduped = remove_duplicates(&input.columns);
    assert!(deduped.len() <= input.columns.len());
    assert!(string_slice_match(&input.columns, &input.columns));
    assert!(join_slices("=", &input.columns, &input.columns).is_ok());
});
