//! Canonical shaping of user-story descriptions.
//!
//! Detects a leading "As a ... so ..." sentence and ensures it is followed
//! by an `h2. Description` heading. Text that does not open with a user
//! story is returned unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Leading user-story sentence: optionally bold-wrapped "As a ... so ...",
/// case-insensitive, terminated by the first line break after the "so"
/// clause. Dot-matches-newline so the sentence may wrap.
static USER_STORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(\*?as\s+a\s+.*?so\s+.*?\*?)\n").unwrap());

/// A Description heading already opening the body.
static DESCRIPTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^h2\.\s*description").unwrap());

/// Shape a description as `<story line>\n\nh2. Description\n\n<body>`.
///
/// The story line is unwrapped from bold markers and trimmed. A body that
/// already opens with a Description heading is kept as-is after the story
/// line; the formatter does not re-normalize its internal spacing.
#[must_use]
pub fn format_shape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let Some(caps) = USER_STORY.captures(text) else {
        trace!("no leading user story, passing through");
        return text.to_string();
    };
    let (matched, [raw_story]) = caps.extract();
    let story = raw_story.trim().trim_matches('*');
    let rest = text[matched.len()..].trim();

    let shaped = if DESCRIPTION_HEADING.is_match(rest) {
        format!("{story}\n\n{rest}")
    } else {
        format!("{story}\n\nh2. Description\n\n{rest}")
    };

    // An empty body would leave a blank line dangling after the heading,
    // which breaks idempotence.
    shaped.trim_end().to_string()
}
