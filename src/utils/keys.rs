// navx/src/utils/keys.rs
use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Derive the snake_case permission key for a display name.
///
/// This is the sole join between hand-authored menu names and the backend's
/// permission hash keys, so it must stay deterministic: lowercase, drop
/// characters that are neither word characters nor whitespace, collapse
/// whitespace runs to a single underscore, collapse repeated underscores,
/// trim leading/trailing underscores.
///
/// `"Role Setup"` -> `"role_setup"`, `"Escalation Matrix!!"` ->
/// `"escalation_matrix"`.
pub fn derive_key(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let underscored = WHITESPACE.replace_all(stripped.trim(), "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&underscored, "_");
    collapsed.trim_matches('_').to_string()
}
