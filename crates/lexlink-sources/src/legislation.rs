//! legislation.gov.uk lookups.
//!
//! Resolves an act name through a quick-lookup table to its position in the
//! legislation.gov.uk URL scheme (`{type}/{year}/{chapter}`), then builds
//! deep links to individual sections. The table is deliberately small; for
//! anything outside it the answer points at the site's own search.
//!
//! # Act name resolution
//!
//! 1. Exact match on the normalised title. An exact hit wins even when the
//!    caller supplied a conflicting year, so "children act" is always the
//!    1989 Act.
//! 2. Exact match on "{title} {year}" when a year was given.
//! 3. Substring match in either direction, in table order, skipping entries
//!    whose year disagrees with the caller's.

use lexlink_core::lookup::normalize_key;
use lexlink_core::normalize::{section_ref, title_case};
use lexlink_probe::{ProbeOutcome, Prober};

pub const LEGISLATION_BASE: &str = "https://www.legislation.gov.uk";

/// A known act's position in the legislation.gov.uk URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActRef {
    pub kind: &'static str,
    pub year: u16,
    pub chapter: u16,
}

const fn act(kind: &'static str, year: u16, chapter: u16) -> ActRef {
    ActRef {
        kind,
        year,
        chapter,
    }
}

/// Acts resolvable without a search. Declaration order is lookup order.
static KNOWN_ACTS: &[(&str, ActRef)] = &[
    ("mental capacity act", act("ukpga", 2005, 9)),
    ("mca", act("ukpga", 2005, 9)),
    ("mca 2005", act("ukpga", 2005, 9)),
    ("children act", act("ukpga", 1989, 41)),
    ("children act 1989", act("ukpga", 1989, 41)),
    ("children act 2004", act("ukpga", 2004, 31)),
    ("family law act", act("ukpga", 1996, 27)),
    ("family law act 1996", act("ukpga", 1996, 27)),
    ("adoption and children act", act("ukpga", 2002, 38)),
    ("matrimonial causes act", act("ukpga", 1973, 18)),
    ("human rights act", act("ukpga", 1998, 42)),
    ("hra", act("ukpga", 1998, 42)),
    ("equality act", act("ukpga", 2010, 15)),
    ("care act", act("ukpga", 2014, 23)),
    ("care act 2014", act("ukpga", 2014, 23)),
    ("police and criminal evidence act", act("ukpga", 1984, 60)),
    ("pace", act("ukpga", 1984, 60)),
    ("criminal justice act 2003", act("ukpga", 2003, 44)),
    ("sentencing act", act("ukpga", 2020, 17)),
    ("sentencing act 2020", act("ukpga", 2020, 17)),
    ("trusts of land act", act("ukpga", 1996, 47)),
    ("tolata", act("ukpga", 1996, 47)),
    ("land registration act", act("ukpga", 2002, 9)),
    ("employment rights act", act("ukpga", 1996, 18)),
    ("era", act("ukpga", 1996, 18)),
    ("immigration act 1971", act("ukpga", 1971, 77)),
    ("immigration act 2014", act("ukpga", 2014, 22)),
    ("senior courts act", act("ukpga", 1981, 54)),
    ("tribunals courts and enforcement act", act("ukpga", 2007, 15)),
];

/// Resolve an act title, optionally disambiguated by year.
pub fn find_act(act_title: &str, year: Option<u16>) -> Option<ActRef> {
    let normalized = normalize_key(act_title);

    if let Some(&(_, found)) = KNOWN_ACTS.iter().find(|(name, _)| *name == normalized) {
        return Some(found);
    }

    if let Some(y) = year {
        let with_year = format!("{normalized} {y}");
        if let Some(&(_, found)) = KNOWN_ACTS.iter().find(|(name, _)| *name == with_year) {
            return Some(found);
        }
    }

    for &(name, details) in KNOWN_ACTS {
        if normalized.contains(name) || name.contains(normalized.as_str()) {
            if year.is_some_and(|y| details.year != y) {
                continue;
            }
            return Some(details);
        }
    }

    None
}

/// Deep link to one section of an act.
pub fn section_url(act: ActRef, section: &str) -> String {
    format!(
        "{LEGISLATION_BASE}/{}/{}/{}/section/{}",
        act.kind,
        act.year,
        act.chapter,
        section_ref(section)
    )
}

fn contents_url(act: ActRef) -> String {
    format!(
        "{LEGISLATION_BASE}/{}/{}/{}/contents",
        act.kind, act.year, act.chapter
    )
}

fn unknown_act(act_title: &str) -> String {
    format!("Could not find '{act_title}'. Try search_legislation('{act_title}') to find it.")
}

fn render_section(
    act_title: &str,
    section: &str,
    act: ActRef,
    url: &str,
    outcome: &ProbeOutcome,
) -> String {
    match outcome {
        ProbeOutcome::Confirmed => format!(
            "Found: {} {} - Section {section}\n\nSource: {url}\nPDF: {url}/data.pdf\n\nVisit the link above for full text.",
            title_case(act_title),
            act.year
        ),
        ProbeOutcome::NotFound => {
            format!(
                "Section {section} not found. View full Act: {}",
                contents_url(act)
            )
        }
        ProbeOutcome::OtherStatus(code) => format!("Error: HTTP {code}"),
        ProbeOutcome::TimedOut => {
            format!("Request timed out. Try again.\n\nUnverified link: {url}")
        }
        ProbeOutcome::Failed(err) => format!("Error: {err}\n\nUnverified link: {url}"),
    }
}

/// Resolve an act, build the section link, and confirm it with one probe.
pub async fn get_section(
    prober: &Prober,
    act_title: &str,
    section: &str,
    year: Option<u16>,
) -> String {
    let Some(act) = find_act(act_title, year) else {
        return unknown_act(act_title);
    };
    let url = section_url(act, section);
    let outcome = prober.get(&url).await;
    render_section(act_title, section, act, &url, &outcome)
}

/// Search link plus quick-lookup matches.
pub fn search(query: &str, _legislation_type: Option<&str>) -> String {
    // The type filter is declared on the tool but not applied here; the
    // search page carries its own facets.
    let search_url = format!("{LEGISLATION_BASE}/search?text={}", query.replace(' ', "+"));
    let mut result = format!("Search: {search_url}\n\nMatching known acts:\n");

    let query_lower = query.to_lowercase();
    let matches: Vec<&(&str, ActRef)> = KNOWN_ACTS
        .iter()
        .filter(|(name, _)| name.contains(&query_lower))
        .collect();

    if matches.is_empty() {
        result.push_str("None in quick lookup. Use the search link above.");
    } else {
        for (name, act) in matches.into_iter().take(5) {
            result.push_str(&format!(
                "- {} ({}): {LEGISLATION_BASE}/{}/{}/{}\n",
                title_case(name),
                act.year,
                act.kind,
                act.year,
                act.chapter
            ));
        }
    }

    result
}

/// Direct PDF link for a section, with no probe.
pub fn pdf_url(act_title: &str, section: &str, year: Option<u16>) -> String {
    let Some(act) = find_act(act_title, year) else {
        return format!("Could not find '{act_title}'.");
    };
    format!("{}/data.pdf", section_url(act, section))
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_resolve() {
        let mca = find_act("MCA", None).unwrap();
        assert_eq!((mca.kind, mca.year, mca.chapter), ("ukpga", 2005, 9));
        let pace = find_act("pace", None).unwrap();
        assert_eq!(pace.chapter, 60);
    }

    #[test]
    fn exact_match_ignores_conflicting_year() {
        // "children act" is an exact table entry, so the 2004 hint is never
        // consulted and the 1989 Act wins.
        let act = find_act("children act", Some(2004)).unwrap();
        assert_eq!(act.year, 1989);
        assert_eq!(act.chapter, 41);
    }

    #[test]
    fn year_suffix_lookup() {
        let act = find_act("children act 2004", None).unwrap();
        assert_eq!((act.year, act.chapter), (2004, 31));
    }

    #[test]
    fn appended_year_disambiguates() {
        // "immigration act" has no bare entry, so the year is appended
        // before the substring scan runs.
        let act = find_act("immigration act", Some(2014)).unwrap();
        assert_eq!((act.year, act.chapter), (2014, 22));
    }

    #[test]
    fn substring_scan_takes_first_declared() {
        let act = find_act("immigration act", None).unwrap();
        assert_eq!((act.year, act.chapter), (1971, 77));
    }

    #[test]
    fn substring_scan_skips_wrong_year() {
        let act = find_act("immigration", Some(2014)).unwrap();
        assert_eq!(act.chapter, 22);
    }

    #[test]
    fn unknown_act_is_none() {
        assert!(find_act("scotland act", None).is_none());
    }

    #[test]
    fn mca_section_three_url() {
        let act = find_act("Mental Capacity Act", None).unwrap();
        assert_eq!(
            section_url(act, "3"),
            "https://www.legislation.gov.uk/ukpga/2005/9/section/3"
        );
    }

    #[test]
    fn section_prefix_is_stripped_from_url() {
        let act = find_act("care act", None).unwrap();
        assert_eq!(
            section_url(act, "Section 117"),
            "https://www.legislation.gov.uk/ukpga/2014/23/section/117"
        );
    }

    #[test]
    fn confirmed_section_links_source_and_pdf() {
        let act = find_act("mental capacity act", None).unwrap();
        let url = section_url(act, "3");
        let text = render_section("mental capacity act", "3", act, &url, &ProbeOutcome::Confirmed);
        assert!(text.starts_with("Found: Mental Capacity Act 2005 - Section 3"));
        assert!(text.contains(&format!("Source: {url}")));
        assert!(text.contains(&format!("PDF: {url}/data.pdf")));
    }

    #[test]
    fn missing_section_points_at_contents() {
        let act = find_act("hra", None).unwrap();
        let url = section_url(act, "99");
        let text = render_section("hra", "99", act, &url, &ProbeOutcome::NotFound);
        assert_eq!(
            text,
            "Section 99 not found. View full Act: https://www.legislation.gov.uk/ukpga/1998/42/contents"
        );
    }

    #[test]
    fn other_status_is_reported() {
        let act = find_act("equality act", None).unwrap();
        let url = section_url(act, "6");
        let text = render_section("equality act", "6", act, &url, &ProbeOutcome::OtherStatus(503));
        assert_eq!(text, "Error: HTTP 503");
    }

    #[test]
    fn timeout_still_hands_out_the_link() {
        let act = find_act("care act", None).unwrap();
        let url = section_url(act, "9");
        let text = render_section("care act", "9", act, &url, &ProbeOutcome::TimedOut);
        assert!(text.starts_with("Request timed out."));
        assert!(text.contains(&format!("Unverified link: {url}")));
    }

    #[test]
    fn failure_still_hands_out_the_link() {
        let act = find_act("care act", None).unwrap();
        let url = section_url(act, "9");
        let outcome = ProbeOutcome::Failed("dns error".into());
        let text = render_section("care act", "9", act, &url, &outcome);
        assert!(text.contains("Error: dns error"));
        assert!(text.contains(&format!("Unverified link: {url}")));
    }

    #[test]
    fn unknown_act_text_suggests_search() {
        let text = unknown_act("Scotland Act");
        assert_eq!(
            text,
            "Could not find 'Scotland Act'. Try search_legislation('Scotland Act') to find it."
        );
    }

    #[test]
    fn search_lists_quick_lookup_matches() {
        let text = search("children", None);
        assert!(text.starts_with("Search: https://www.legislation.gov.uk/search?text=children"));
        assert!(text.contains("- Children Act (1989): https://www.legislation.gov.uk/ukpga/1989/41"));
        assert!(text.contains("- Children Act 2004 (2004): https://www.legislation.gov.uk/ukpga/2004/31"));
    }

    #[test]
    fn search_caps_matches_at_five() {
        let text = search("act", None);
        let hits = text.lines().filter(|l| l.starts_with("- ")).count();
        assert_eq!(hits, 5);
    }

    #[test]
    fn search_without_match_defers_to_the_site() {
        let text = search("canal boats", None);
        assert!(text.contains("None in quick lookup. Use the search link above."));
        assert!(text.contains("search?text=canal+boats"));
    }

    #[test]
    fn pdf_url_for_known_act() {
        assert_eq!(
            pdf_url("mca", "Section 3", None),
            "https://www.legislation.gov.uk/ukpga/2005/9/section/3/data.pdf"
        );
    }

    #[test]
    fn pdf_url_for_unknown_act() {
        assert_eq!(pdf_url("space act", "1", None), "Could not find 'space act'.");
    }
}
