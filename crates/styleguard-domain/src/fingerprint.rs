use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - rule_id
/// - code
/// - path (repo-relative)
/// - line
/// - snippet
pub fn fingerprint_for_violation(
    rule_id: &str,
    code: &str,
    path: &str,
    line: u32,
    snippet: &str,
) -> String {
    let line = line.to_string();
    let canonical = [rule_id, code, path, line.as_str(), snippet].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_field_sensitive() {
        let a = fingerprint_for_violation("style.x", "c", "a.js", 1, "==");
        let b = fingerprint_for_violation("style.x", "c", "a.js", 1, "==");
        let c = fingerprint_for_violation("style.x", "c", "a.js", 2, "==");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
