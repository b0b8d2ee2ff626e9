//! UID and value helpers shared by the graph builder and the checker

use crate::defaults::INDEX_WIDTH;

/// True for a non-empty string of ASCII digits
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Value of a non-negative integer written with digits only
pub fn parse_digits(s: &str) -> Option<i64> {
    if is_digits(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Left-pad a value with zeros to the index width (`1` -> `001`)
pub fn zero_pad(value: &str) -> String {
    format!("{:0>width$}", value, width = INDEX_WIDTH)
}

/// Format an index the way UIDs and attribute names carry it (`7` -> `007`)
pub fn index_str(index: i64) -> String {
    format!("{:0width$}", index, width = INDEX_WIDTH)
}

/// Generic form of a UID: every digit replaced by `9` (`Manual001` -> `Manual999`)
pub fn generic_uid(uid: &str) -> String {
    uid.chars()
        .map(|c| if c.is_ascii_digit() { '9' } else { c })
        .collect()
}

/// Split a UID or attribute name into its type prefix and 3-digit index
///
/// `Stop012` -> `("Stop", 12)`; `None` when the name does not end with digits.
pub fn split_index(name: &str) -> Option<(&str, i64)> {
    if name.len() < INDEX_WIDTH {
        return None;
    }
    let cut = name.len() - INDEX_WIDTH;
    if !name.is_char_boundary(cut) {
        return None;
    }
    let (prefix, index) = name.split_at(cut);
    parse_digits(index).map(|i| (prefix, i))
}

/// Name without its trailing 3-digit index, if any
pub fn strip_index(name: &str) -> &str {
    split_index(name).map_or(name, |(prefix, _)| prefix)
}

/// First `n` characters of a string, `None` if it is shorter
pub fn char_prefix(s: &str, n: usize) -> Option<&str> {
    match s.char_indices().nth(n) {
        Some((cut, _)) => Some(&s[..cut]),
        None if s.chars().count() == n => Some(s),
        None => None,
    }
}

/// Characters `start..end` of a string, clamped to its length
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let begin = s.char_indices().nth(start).map_or(s.len(), |(i, _)| i);
    let finish = s.char_indices().nth(end).map_or(s.len(), |(i, _)| i);
    if begin >= finish {
        ""
    } else {
        &s[begin..finish]
    }
}

/// File name part of a path written with `/` or `\` separators
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
