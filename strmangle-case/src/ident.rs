//! Short generated names.

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Map an ordinal to a short lowercase name for generated variables.
///
/// This is a base-26 conversion using `a..z` as digits, with `a` as zero:
/// `0 → a`, `25 → z`, `26 → ba`, `675 → zz`, `676 → baa`.
pub fn identifier(mut n: usize) -> String {
    if n == 0 {
        return "a".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[n % 26]);
        n /= 26;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Strip a leading run of ASCII digits.
pub fn trim_left_digits(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_digit())
}
