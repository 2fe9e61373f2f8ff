use std::sync::LazyLock;

use regex::Regex;

/// Stage-2 probability rescue: a number on the same line as a
/// "probability"/"probabilité" label.
static PROBABILITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)probabilit[a-zé]*[^\d\n]*(\d+(?:\.\d+)?)").unwrap());

/// Section headings that introduce risk factors.
static RISK_SECTION_RES: LazyLock<[Regex; 2]> =
    LazyLock::new(|| section_patterns("risk factors|factors|risks|facteurs|risques"));

/// Section headings that introduce recommendations.
static RECO_SECTION_RES: LazyLock<[Regex; 2]> =
    LazyLock::new(|| section_patterns("recommendations|recommandations|suggestions"));

/// Numbered or bulleted list items, one per line.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:\d+\.|[-*•])\s*(.+?)\s*$").unwrap());

/// Two rescue shapes per heading: "heading, newline, body" and
/// "heading, colon, body". The body runs until a blank line, a fresh
/// capitalized or numbered heading line, or the end of the text.
fn section_patterns(keywords: &str) -> [Regex; 2] {
    [
        Regex::new(&format!(
            r"(?is)(?:{keywords}).*?\n(.*?)(?:\n\n|\n[A-Z0-9]|$)"
        ))
        .expect("section pattern compiles"),
        Regex::new(&format!(
            r"(?is)(?:{keywords}).*?:(.*?)(?:\n\n|\n[A-Z0-9]|$)"
        ))
        .expect("section pattern compiles"),
    ]
}

/// Find a probability-labeled number and normalize it from percent.
/// The division by 100 applies unconditionally, including to values the
/// model already wrote in [0, 1]; that quirk is part of the contract.
pub fn rescue_probability(text: &str) -> Option<f64> {
    PROBABILITY_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(|value| value / 100.0)
}

/// Locate the risk-factor section, if any. First matching pattern wins.
pub fn risk_section(text: &str) -> Option<String> {
    find_section(&RISK_SECTION_RES, text)
}

/// Locate the recommendations section, if any.
pub fn recommendation_section(text: &str) -> Option<String> {
    find_section(&RECO_SECTION_RES, text)
}

fn find_section(patterns: &[Regex; 2], text: &str) -> Option<String> {
    // A heading whose body trims to nothing counts as no section at all,
    // so the caller's generic defaults apply.
    patterns
        .iter()
        .find_map(|re| re.captures(text).map(|caps| caps[1].trim().to_string()))
        .filter(|section| !section.is_empty())
}

/// Stage 4: pull list items out of a rescued section. Falls back to
/// non-empty lines, then to the whole text as a single item.
pub fn parse_list_items(text: &str) -> Vec<String> {
    let mut items: Vec<String> = LIST_ITEM_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    if items.is_empty() {
        items = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    if items.is_empty() {
        items = vec![text.to_string()];
    }

    items
}
