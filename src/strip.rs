//! Section stripping for issue descriptions.
//!
//! Removes "Acceptance Criteria" and "Success Metrics" sections via an
//! ordered rule table. Matches are case-insensitive and anchored on
//! blank-line paragraph boundaries; unmatched input passes through.
//!
//! Enable tracing with `RUST_LOG=storynorm::strip=debug` to see removals.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// One removal rule: a paragraph-anchored start pattern and the boundary
/// pattern that ends the section. A section with no following boundary runs
/// to end of text.
struct StripRule {
    name: &'static str,
    start: Regex,
    boundary: Regex,
}

impl StripRule {
    /// Remove every section this rule matches. The scan resumes at each
    /// boundary position so back-to-back sections are caught in one pass.
    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        while let Some(m) = self.start.find_at(text, pos) {
            let end = self
                .boundary
                .find_at(text, m.end())
                .map_or(text.len(), |b| b.start());
            debug!(rule = self.name, start = m.start(), end, "removing section");
            out.push_str(&text[pos..m.start()]);
            pos = end;
        }
        out.push_str(&text[pos..]);
        out
    }
}

/// Removal rules in application order. Each operates on the output of the
/// previous one; the order matters for malformed input with overlapping or
/// reordered sections, so keep it fixed.
static STRIP_RULES: LazyLock<Vec<StripRule>> = LazyLock::new(|| {
    vec![
        // "h2. Acceptance Criteria" up to the next heading or bold paragraph
        StripRule {
            name: "h2-acceptance-criteria",
            start: Regex::new(r"(?i)\n\nh2\.\s*acceptance\s+criteria").unwrap(),
            boundary: Regex::new(r"(?i)\n\nh2\.|\n\n\*").unwrap(),
        },
        // "*Acceptance Criteria:*" up to the next "*Success" label or heading
        StripRule {
            name: "bold-acceptance-criteria",
            start: Regex::new(r"(?i)\n\n\*acceptance\s+criteria:\*").unwrap(),
            boundary: Regex::new(r"(?i)\n\n\*success|\n\nh2\.").unwrap(),
        },
        // plain "Acceptance Criteria:" label, same boundaries as the bold form
        StripRule {
            name: "plain-acceptance-criteria",
            start: Regex::new(r"(?i)\n\nacceptance\s+criteria:").unwrap(),
            boundary: Regex::new(r"(?i)\n\n\*success|\n\nh2\.").unwrap(),
        },
        // "*Success Metrics:*" up to the next heading
        StripRule {
            name: "bold-success-metrics",
            start: Regex::new(r"(?i)\n\n\*success\s+metrics:\*").unwrap(),
            boundary: Regex::new(r"(?i)\n\nh2\.").unwrap(),
        },
        // "h2. Success Metrics" up to the next heading
        StripRule {
            name: "h2-success-metrics",
            start: Regex::new(r"(?i)\n\nh2\.\s*success\s+metrics").unwrap(),
            boundary: Regex::new(r"(?i)\n\nh2\.").unwrap(),
        },
    ]
});

/// Runs of three or more line breaks, collapsed to a single blank line.
static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip recognized "Acceptance Criteria" and "Success Metrics" sections.
///
/// Applies the rule table in order, collapses runs of blank lines into one,
/// and trims leading/trailing whitespace. Text without recognized sections
/// is returned unchanged apart from that cleanup.
#[must_use]
pub fn strip_sections(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = text.to_string();
    for rule in STRIP_RULES.iter() {
        result = rule.apply(&result);
    }

    let result = EXCESS_NEWLINES.replace_all(&result, "\n\n");
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_section_removed_to_end() {
        let input = "Intro paragraph.\n\nh2. Acceptance Criteria\n* Item 1\n* Item 2";
        assert_eq!(strip_sections(input), "Intro paragraph.");
    }

    #[test]
    fn test_heading_section_stops_at_next_heading() {
        let input = "Intro.\n\nh2. Acceptance Criteria\n* Item 1\n\nh2. Notes\nKeep this.";
        assert_eq!(strip_sections(input), "Intro.\n\nh2. Notes\nKeep this.");
    }

    #[test]
    fn test_heading_section_stops_at_bold_paragraph() {
        let input = "Intro.\n\nh2. Acceptance Criteria\n* Item 1\n\n*Note:* keep this.";
        assert_eq!(strip_sections(input), "Intro.\n\n*Note:* keep this.");
    }

    #[test]
    fn test_bold_label_section_stops_at_success_label() {
        let input =
            "Intro.\n\n*Acceptance Criteria:*\n* Item 1\n* Item 2\n\n*Success Metrics:*\n* Metric 1";
        assert_eq!(strip_sections(input), "Intro.");
    }

    #[test]
    fn test_plain_label_section_removed() {
        let input = "Intro.\n\nAcceptance Criteria:\n* Done when green.\n\nh2. Notes\nBody.";
        assert_eq!(strip_sections(input), "Intro.\n\nh2. Notes\nBody.");
    }

    #[test]
    fn test_success_metrics_heading_removed() {
        let input = "Intro.\n\nh2. Success Metrics\n* Adoption up\n\nh2. Notes\nBody.";
        assert_eq!(strip_sections(input), "Intro.\n\nh2. Notes\nBody.");
    }

    #[test]
    fn test_case_insensitive_match() {
        let input = "Intro.\n\nH2. ACCEPTANCE CRITERIA\n* Item 1";
        assert_eq!(strip_sections(input), "Intro.");
    }

    #[test]
    fn test_back_to_back_sections_removed_in_one_pass() {
        let input = "Intro.\n\nh2. Acceptance Criteria\n* a\n\nh2. Acceptance Criteria\n* b";
        assert_eq!(strip_sections(input), "Intro.");
    }

    #[test]
    fn test_no_sections_passes_through() {
        let input = "Just a paragraph.\n\nAnd another one.";
        assert_eq!(strip_sections(input), input);
    }

    #[test]
    fn test_blank_line_runs_collapsed() {
        let input = "First.\n\n\n\nSecond.";
        assert_eq!(strip_sections(input), "First.\n\nSecond.");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(strip_sections("  \nBody.\n\n"), "Body.");
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(strip_sections(""), "");
    }

    #[test]
    fn test_leading_section_without_blank_line_is_kept() {
        // Rules anchor on a preceding blank line; a section opening the text
        // has no such anchor and survives, matching the original behavior.
        let input = "h2. Acceptance Criteria\n* Item 1";
        assert_eq!(strip_sections(input), input);
    }
}
