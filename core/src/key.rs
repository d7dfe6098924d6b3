//! Artifact keys for per-feature data.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex_lite::Regex;

/// Characters allowed verbatim in an artifact key.
const UNSAFE_KEY_CHARS: &str = r"[^A-Za-z0-9_-]";

fn unsafe_key_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UNSAFE_KEY_CHARS).expect("constant pattern compiles"))
}

/// Map a feature id to the key its per-feature artifact is stored under.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`.
pub fn artifact_key(feature_id: &str) -> Cow<'_, str> {
    unsafe_key_chars().replace_all(feature_id, "_")
}
