//! caselaw.nationalarchives.gov.uk lookups.
//!
//! The Find Case Law service addresses judgments as
//! `{court}/{year}/{number}` with lower-case court codes, which is exactly
//! what the citation parser produces, so judgment URLs are built straight
//! from the parsed citation. The court table here only feeds the search
//! filter, and it is consulted by exact alias only; an unrecognised court
//! filter is dropped rather than guessed at.

use lexlink_core::lookup::AliasTable;
use lexlink_core::{Citation, parse_citation};
use lexlink_probe::{ProbeOutcome, Prober};
use urlencoding::encode;

pub const CASELAW_BASE: &str = "https://caselaw.nationalarchives.gov.uk";

/// Search-filter codes accepted by the service.
static COURT_CODES: AliasTable = AliasTable::new(&[
    ("uksc", "uksc"),
    ("supreme court", "uksc"),
    ("ewca", "ewca"),
    ("court of appeal", "ewca"),
    ("ewca/civ", "ewca/civ"),
    ("court of appeal civil", "ewca/civ"),
    ("ewca/crim", "ewca/crim"),
    ("court of appeal criminal", "ewca/crim"),
    ("ewhc", "ewhc"),
    ("high court", "ewhc"),
    ("ewhc/admin", "ewhc/admin"),
    ("admin court", "ewhc/admin"),
    ("administrative court", "ewhc/admin"),
    ("judicial review", "ewhc/admin"),
    ("ewhc/ch", "ewhc/ch"),
    ("chancery", "ewhc/ch"),
    ("ewhc/comm", "ewhc/comm"),
    ("commercial court", "ewhc/comm"),
    ("ewhc/fam", "ewhc/fam"),
    ("family division", "ewhc/fam"),
    ("high court family", "ewhc/fam"),
    ("ewhc/kb", "ewhc/kb"),
    ("kings bench", "ewhc/kb"),
    ("queens bench", "ewhc/kb"),
    ("qb", "ewhc/kb"),
    ("ewhc/tcc", "ewhc/tcc"),
    ("technology and construction", "ewhc/tcc"),
    ("ewcop", "ewcop"),
    ("court of protection", "ewcop"),
    ("cop", "ewcop"),
    ("ewfc", "ewfc"),
    ("family court", "ewfc"),
    ("ukut", "ukut"),
    ("upper tribunal", "ukut"),
    ("ukftt", "ukftt"),
    ("first-tier tribunal", "ukftt"),
    ("eat", "eat"),
    ("employment appeal tribunal", "eat"),
]);

/// Map a court name to its search-filter code, exact alias only.
pub fn normalize_court(court: &str) -> Option<&'static str> {
    COURT_CODES.exact(court)
}

/// Judgment URL straight from a parsed citation.
pub fn judgment_url(citation: &Citation) -> String {
    format!(
        "{CASELAW_BASE}/{}/{}/{}",
        citation.court, citation.year, citation.number
    )
}

fn unparseable(citation: &str) -> String {
    format!(
        "Could not parse citation: {citation}\n\nExpected format: [YEAR] COURT NUMBER\nExamples: [2024] EWCOP 15, [2023] UKSC 1"
    )
}

fn render_judgment(citation: &str, url: &str, outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Confirmed => format!(
            "Found: {citation}\n\nView: {url}\nPDF: {url}/data.pdf\nXML: {url}/data.xml\n\nVisit the link above for full judgment."
        ),
        ProbeOutcome::NotFound => {
            format!("Judgment not found: {citation}\n\nTry search_cases to find it.")
        }
        ProbeOutcome::OtherStatus(code) => format!("Error: HTTP {code}"),
        ProbeOutcome::TimedOut => {
            format!("Request timed out. Try again.\n\nUnverified link: {url}")
        }
        ProbeOutcome::Failed(err) => format!("Error: {err}\n\nUnverified link: {url}"),
    }
}

/// Search link for the Find Case Law service.
///
/// `from_date`/`to_date` are `YYYY-MM-DD` and take precedence over the
/// `year` shortcut, which expands to the first and last day of that year.
pub fn search_cases(
    query: &str,
    court: Option<&str>,
    year: Option<u16>,
    party: Option<&str>,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> String {
    let mut search_url = format!("{CASELAW_BASE}/judgments/search?query={}", encode(query));

    if let Some(court) = court
        && let Some(code) = normalize_court(court)
    {
        search_url.push_str(&format!("&court={code}"));
    }

    if from_date.is_some() || to_date.is_some() {
        if let Some(from) = from_date {
            search_url.push_str(&format!("&from={from}"));
        }
        if let Some(to) = to_date {
            search_url.push_str(&format!("&to={to}"));
        }
    } else if let Some(year) = year {
        search_url.push_str(&format!("&from={year}-01-01&to={year}-12-31"));
    }

    if let Some(party) = party {
        search_url.push_str(&format!("&party={}", encode(party)));
    }

    format!(
        "Search: {search_url}\n\nClick the link above to see matching judgments.\n\nTip: Use get_judgment('[YEAR] COURT NUMBER') to fetch a specific case."
    )
}

/// Parse a citation, build the judgment link, and confirm it with one probe.
pub async fn get_judgment(prober: &Prober, citation: &str) -> String {
    let Some(parsed) = parse_citation(citation) else {
        return unparseable(citation);
    };
    let url = judgment_url(&parsed);
    let outcome = prober.get(&url).await;
    render_judgment(citation, &url, &outcome)
}

/// Direct PDF link for a judgment, with no probe.
pub fn judgment_pdf_url(citation: &str) -> String {
    let Some(parsed) = parse_citation(citation) else {
        return format!("Could not parse citation: {citation}");
    };
    format!("{}/data.pdf", judgment_url(&parsed))
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgment_url_uses_lower_cased_court() {
        let parsed = parse_citation("[2024] EWCOP 15").unwrap();
        assert_eq!(
            judgment_url(&parsed),
            "https://caselaw.nationalarchives.gov.uk/ewcop/2024/15"
        );
    }

    #[test]
    fn division_codes_pass_through() {
        let parsed = parse_citation("[2023] EWCA/Civ 5").unwrap();
        assert_eq!(
            judgment_url(&parsed),
            "https://caselaw.nationalarchives.gov.uk/ewca/civ/2023/5"
        );
    }

    #[test]
    fn court_aliases_resolve_exactly() {
        assert_eq!(normalize_court("Court of Protection"), Some("ewcop"));
        assert_eq!(normalize_court("  QB "), Some("ewhc/kb"));
        assert_eq!(normalize_court("crown court"), None);
    }

    #[test]
    fn search_url_carries_all_filters() {
        let text = search_cases(
            "deprivation of liberty",
            Some("Court of Protection"),
            Some(2023),
            Some("A Local Authority"),
            None,
            None,
        );
        assert!(text.contains("judgments/search?query=deprivation%20of%20liberty"));
        assert!(text.contains("&court=ewcop"));
        assert!(text.contains("&from=2023-01-01&to=2023-12-31"));
        assert!(text.contains("&party=A%20Local%20Authority"));
    }

    #[test]
    fn unknown_court_filter_is_dropped() {
        let text = search_cases("costs", Some("crown court"), None, None, None, None);
        assert!(!text.contains("&court="));
    }

    #[test]
    fn explicit_dates_beat_the_year_shortcut() {
        let text = search_cases(
            "capacity",
            None,
            Some(2023),
            None,
            Some("2020-06-01"),
            Some("2021-06-30"),
        );
        assert!(text.contains("&from=2020-06-01&to=2021-06-30"));
        assert!(!text.contains("2023"));
    }

    #[test]
    fn open_ended_date_range() {
        let text = search_cases("capacity", None, None, None, Some("2024-01-01"), None);
        assert!(text.contains("&from=2024-01-01"));
        assert!(!text.contains("&to="));
    }

    #[test]
    fn search_text_ends_with_the_tip() {
        let text = search_cases("wardship", None, None, None, None, None);
        assert!(text.starts_with("Search: https://caselaw.nationalarchives.gov.uk/judgments/search?query=wardship"));
        assert!(
            text.ends_with("Tip: Use get_judgment('[YEAR] COURT NUMBER') to fetch a specific case.")
        );
    }

    #[test]
    fn confirmed_judgment_lists_all_formats() {
        let url = "https://caselaw.nationalarchives.gov.uk/uksc/2023/1";
        let text = render_judgment("[2023] UKSC 1", url, &ProbeOutcome::Confirmed);
        assert!(text.starts_with("Found: [2023] UKSC 1"));
        assert!(text.contains(&format!("View: {url}")));
        assert!(text.contains(&format!("PDF: {url}/data.pdf")));
        assert!(text.contains(&format!("XML: {url}/data.xml")));
    }

    #[test]
    fn missing_judgment_suggests_search() {
        let url = "https://caselaw.nationalarchives.gov.uk/ewcop/2024/999";
        let text = render_judgment("[2024] EWCOP 999", url, &ProbeOutcome::NotFound);
        assert_eq!(
            text,
            "Judgment not found: [2024] EWCOP 999\n\nTry search_cases to find it."
        );
    }

    #[test]
    fn timeout_still_hands_out_the_link() {
        let url = "https://caselaw.nationalarchives.gov.uk/ewcop/2024/15";
        let text = render_judgment("[2024] EWCOP 15", url, &ProbeOutcome::TimedOut);
        assert!(text.contains("caselaw.nationalarchives.gov.uk/ewcop/2024/15"));
        assert!(text.starts_with("Request timed out."));
    }

    #[test]
    fn failure_still_hands_out_the_link() {
        let url = "https://caselaw.nationalarchives.gov.uk/ewcop/2024/15";
        let outcome = ProbeOutcome::Failed("connection refused".into());
        let text = render_judgment("[2024] EWCOP 15", url, &outcome);
        assert!(text.contains("Error: connection refused"));
        assert!(text.contains(&format!("Unverified link: {url}")));
    }

    #[test]
    fn unparseable_citation_text_shows_examples() {
        let text = unparseable("Smith v Jones");
        assert!(text.starts_with("Could not parse citation: Smith v Jones"));
        assert!(text.contains("Expected format: [YEAR] COURT NUMBER"));
        assert!(text.contains("[2024] EWCOP 15, [2023] UKSC 1"));
    }

    #[test]
    fn pdf_url_for_parseable_citation() {
        assert_eq!(
            judgment_pdf_url("[2024] EWCOP 15"),
            "https://caselaw.nationalarchives.gov.uk/ewcop/2024/15/data.pdf"
        );
    }

    #[test]
    fn pdf_url_for_unparseable_citation() {
        assert_eq!(
            judgment_pdf_url("not a citation"),
            "Could not parse citation: not a citation"
        );
    }
}
