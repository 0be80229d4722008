use regex::bytes::Regex;
use std::sync::LazyLock;

/// Only entries whose name ends with this exact (case-sensitive) suffix are renamed.
pub const TARGET_SUFFIX: &[u8] = b".json";

/// Matches a leading numeric prefix like `49-` or `007__`, separators optional.
/// Works on raw name bytes so names that are not valid UTF-8 still match.
pub static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[-_]*").unwrap());
