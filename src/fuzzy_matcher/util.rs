use memchr::{memchr, memchr2};

/// Greedy subsequence check, used to reject candidates before any scoring.
///
/// Returns `Some(())` when every byte of `pattern` can be found in `choice` in
/// order. With `ignore_case`, ASCII letters match either case.
pub fn cheap_matches(choice: &[u8], pattern: &[u8], ignore_case: bool) -> Option<()> {
    if pattern.len() > choice.len() {
        return None;
    }
    let mut rest = choice;
    for &b in pattern {
        let found = if ignore_case && b.is_ascii_alphabetic() {
            memchr2(b.to_ascii_lowercase(), b.to_ascii_uppercase(), rest)
        } else {
            memchr(b, rest)
        }?;
        rest = &rest[found + 1..];
    }
    Some(())
}

/// Wraps the bytes at `indices` in brackets, for readable test assertions.
#[cfg(test)]
pub fn wrap_matches(choice: &[u8], indices: &[usize]) -> String {
    let mut ret = String::new();
    let mut peekable = indices.iter().peekable();
    for (idx, &b) in choice.iter().enumerate() {
        let next_id = peekable.peek().map_or(choice.len(), |&&i| i);
        if next_id == idx {
            ret.push('[');
            ret.push(b as char);
            ret.push(']');
            peekable.next();
        } else {
            ret.push(b as char);
        }
    }
    ret
}
