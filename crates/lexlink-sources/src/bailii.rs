//! bailii.org lookups.
//!
//! BAILII holds the judgments the newer services do not: House of Lords
//! decisions before 2009, older Court of Appeal cases, and most tribunal
//! chambers. Its archive is organised as mask paths like
//! `/ew/cases/EWCOP/`, searched through `cgi-bin/find.cgi`.
//!
//! Chamber suffixes such as `(AAC)` only influence the constructed path for
//! `UKUT` and `UKFTT` citations, where BAILII files decisions per chamber;
//! for every other court the suffix is ignored.

use lexlink_core::lookup::{AliasTable, normalize_key};
use lexlink_core::{Citation, parse_bailii_citation};
use lexlink_probe::{ProbeOutcome, Prober};
use urlencoding::encode;

pub const BAILII_BASE: &str = "https://www.bailii.org";

/// Database mask paths, England & Wales focused.
static DATABASES: AliasTable = AliasTable::new(&[
    // Supreme Court & House of Lords
    ("uksc", "/uk/cases/UKSC/"),
    ("supreme court", "/uk/cases/UKSC/"),
    ("ukhl", "/uk/cases/UKHL/"),
    ("house of lords", "/uk/cases/UKHL/"),
    // Privy Council
    ("ukpc", "/uk/cases/UKPC/"),
    ("privy council", "/uk/cases/UKPC/"),
    // Court of Appeal
    ("ewca/civ", "/ew/cases/EWCA/Civ/"),
    ("ewca civ", "/ew/cases/EWCA/Civ/"),
    ("court of appeal civil", "/ew/cases/EWCA/Civ/"),
    ("ewca/crim", "/ew/cases/EWCA/Crim/"),
    ("ewca crim", "/ew/cases/EWCA/Crim/"),
    ("court of appeal criminal", "/ew/cases/EWCA/Crim/"),
    // High Court divisions
    ("ewhc/admin", "/ew/cases/EWHC/Admin/"),
    ("ewhc admin", "/ew/cases/EWHC/Admin/"),
    ("admin court", "/ew/cases/EWHC/Admin/"),
    ("administrative court", "/ew/cases/EWHC/Admin/"),
    ("ewhc/ch", "/ew/cases/EWHC/Ch/"),
    ("ewhc ch", "/ew/cases/EWHC/Ch/"),
    ("chancery", "/ew/cases/EWHC/Ch/"),
    ("ewhc/comm", "/ew/cases/EWHC/Comm/"),
    ("commercial court", "/ew/cases/EWHC/Comm/"),
    ("ewhc/fam", "/ew/cases/EWHC/Fam/"),
    ("ewhc fam", "/ew/cases/EWHC/Fam/"),
    ("family division", "/ew/cases/EWHC/Fam/"),
    ("ewhc/kb", "/ew/cases/EWHC/KB/"),
    ("ewhc/qb", "/ew/cases/EWHC/QB/"),
    ("kings bench", "/ew/cases/EWHC/KB/"),
    ("queens bench", "/ew/cases/EWHC/QB/"),
    ("ewhc/tcc", "/ew/cases/EWHC/TCC/"),
    ("technology and construction", "/ew/cases/EWHC/TCC/"),
    // Court of Protection
    ("ewcop", "/ew/cases/EWCOP/"),
    ("court of protection", "/ew/cases/EWCOP/"),
    ("cop", "/ew/cases/EWCOP/"),
    // Family Court
    ("ewfc", "/ew/cases/EWFC/"),
    ("family court", "/ew/cases/EWFC/"),
    // Upper Tribunal
    ("ukut", "/uk/cases/UKUT/"),
    ("upper tribunal", "/uk/cases/UKUT/"),
    ("ukut/aac", "/uk/cases/UKUT/AAC/"),
    ("upper tribunal aac", "/uk/cases/UKUT/AAC/"),
    ("administrative appeals chamber", "/uk/cases/UKUT/AAC/"),
    ("ukut/iac", "/uk/cases/UKUT/IAC/"),
    ("immigration tribunal", "/uk/cases/UKUT/IAC/"),
    ("ukut/lc", "/uk/cases/UKUT/LC/"),
    ("lands chamber", "/uk/cases/UKUT/LC/"),
    ("ukut/tcc", "/uk/cases/UKUT/TCC/"),
    ("tax chamber", "/uk/cases/UKUT/TCC/"),
    // First-tier Tribunal
    ("ukftt", "/uk/cases/UKFTT/"),
    ("first-tier tribunal", "/uk/cases/UKFTT/"),
    ("ukftt/tc", "/uk/cases/UKFTT/TC/"),
    ("tax tribunal", "/uk/cases/UKFTT/TC/"),
    ("ukftt/grc", "/uk/cases/UKFTT/GRC/"),
    ("general regulatory chamber", "/uk/cases/UKFTT/GRC/"),
    // Employment tribunals
    ("eat", "/uk/cases/UKEAT/"),
    ("employment appeal tribunal", "/uk/cases/UKEAT/"),
    // Mental Health
    ("mhlo", "/uk/cases/UKMHLO/"),
    ("mental health", "/uk/cases/UKMHLO/"),
    ("mental health tribunal", "/uk/cases/UKMHLO/"),
]);

/// Shortcuts accepted by the tribunal search on top of [`DATABASES`].
static TRIBUNAL_DATABASES: AliasTable = AliasTable::new(&[
    ("aac", "/uk/cases/UKUT/AAC/"),
    ("iac", "/uk/cases/UKUT/IAC/"),
    ("lc", "/uk/cases/UKUT/LC/"),
    ("tcc", "/uk/cases/UKUT/TCC/"),
    ("eat", "/uk/cases/UKEAT/"),
    ("tax", "/uk/cases/UKFTT/TC/"),
    ("grc", "/uk/cases/UKFTT/GRC/"),
    ("mhlo", "/uk/cases/UKMHLO/"),
    ("mental health", "/uk/cases/UKMHLO/"),
    ("information tribunal", "/uk/cases/UKFTT/GRC/"),
]);

/// Case paths keyed by upper-cased court code.
static COURT_PATHS: &[(&str, &str)] = &[
    ("UKSC", "/uk/cases/UKSC"),
    ("UKHL", "/uk/cases/UKHL"),
    ("UKPC", "/uk/cases/UKPC"),
    ("EWCA", "/ew/cases/EWCA"),
    ("EWCA/CIV", "/ew/cases/EWCA/Civ"),
    ("EWCA/CRIM", "/ew/cases/EWCA/Crim"),
    ("EWHC", "/ew/cases/EWHC"),
    ("EWHC/ADMIN", "/ew/cases/EWHC/Admin"),
    ("EWHC/CH", "/ew/cases/EWHC/Ch"),
    ("EWHC/COMM", "/ew/cases/EWHC/Comm"),
    ("EWHC/FAM", "/ew/cases/EWHC/Fam"),
    ("EWHC/KB", "/ew/cases/EWHC/KB"),
    ("EWHC/QB", "/ew/cases/EWHC/QB"),
    ("EWHC/TCC", "/ew/cases/EWHC/TCC"),
    ("EWCOP", "/ew/cases/EWCOP"),
    ("EWFC", "/ew/cases/EWFC"),
    ("UKUT", "/uk/cases/UKUT"),
    ("UKFTT", "/uk/cases/UKFTT"),
    ("UKEAT", "/uk/cases/UKEAT"),
    ("EAT", "/uk/cases/UKEAT"),
];

static UKUT_CHAMBERS: &[(&str, &str)] = &[
    ("AAC", "/uk/cases/UKUT/AAC"),
    ("IAC", "/uk/cases/UKUT/IAC"),
    ("LC", "/uk/cases/UKUT/LC"),
    ("TCC", "/uk/cases/UKUT/TCC"),
];

static UKFTT_CHAMBERS: &[(&str, &str)] = &[
    ("TC", "/uk/cases/UKFTT/TC"),
    ("GRC", "/uk/cases/UKFTT/GRC"),
];

/// Build a find.cgi search URL.
///
/// `title_only` contributes an empty `mask_path`, which find.cgi treats as a
/// title search; a recognised `database` replaces it with that database's
/// mask path.
pub fn search_url(query: &str, database: Option<&str>, title_only: bool) -> String {
    let mut mask_path: Option<&str> = None;
    if title_only {
        mask_path = Some("");
    }
    if let Some(db) = database
        && let Some(path) = DATABASES.exact(db)
    {
        mask_path = Some(path);
    }

    let mut url = format!(
        "{BAILII_BASE}/cgi-bin/find.cgi?method=boolean&query={}",
        encode(query)
    );
    if let Some(path) = mask_path {
        url.push_str(&format!("&mask_path={}", encode(path)));
    }
    url
}

/// Case URL for a parsed citation.
///
/// `UKUT` and `UKFTT` citations with a recognised chamber get the chamber
/// path; unknown court codes degrade to a find.cgi search for the raw
/// citation.
pub fn case_url(citation: &Citation) -> String {
    let court = citation.court.to_uppercase();

    if let Some(chamber) = citation.chamber.as_deref() {
        let chambers: &[(&str, &str)] = match court.as_str() {
            "UKUT" => UKUT_CHAMBERS,
            "UKFTT" => UKFTT_CHAMBERS,
            _ => &[],
        };
        if let Some((_, path)) = chambers.iter().find(|(code, _)| *code == chamber) {
            return format!(
                "{BAILII_BASE}{path}/{}/{}.html",
                citation.year, citation.number
            );
        }
    }

    if let Some((_, path)) = COURT_PATHS.iter().find(|(code, _)| *code == court) {
        return format!(
            "{BAILII_BASE}{path}/{}/{}.html",
            citation.year, citation.number
        );
    }

    format!(
        "{BAILII_BASE}/cgi-bin/find.cgi?method=boolean&query={}",
        encode(&format!(
            "[{}] {} {}",
            citation.year, citation.court, citation.number
        ))
    )
}

/// Search BAILII, optionally restricted to one database.
pub fn search(query: &str, database: Option<&str>, title_only: bool) -> String {
    let url = search_url(query, database, title_only);
    let mut result = format!("BAILII Search: {url}\n\n");

    if let Some(db) = database {
        let db_lower = normalize_key(db);
        if DATABASES.exact(db).is_some() {
            result.push_str(&format!("Searching: {} database\n", db_lower.to_uppercase()));
        } else {
            result.push_str(&format!(
                "Note: '{db}' not recognised. Searching all databases.\n"
            ));
            result.push_str("Available databases: uksc, ukhl, ewca/civ, ewca/crim, ewcop, ewfc, ");
            result.push_str("ukut/aac, ukut/iac, eat, mental health tribunal\n");
        }
    }

    result.push_str("\nTip: Use get_bailii_case('[YEAR] COURT NUMBER') to fetch a specific case.");
    result
}

/// Search restricted to tribunal decisions.
pub fn search_tribunals(query: &str, tribunal: Option<&str>, year: Option<u16>) -> String {
    let db_path = tribunal.and_then(|t| {
        TRIBUNAL_DATABASES
            .exact(t)
            .or_else(|| DATABASES.exact(t))
    });

    // No tribunal match searches every UK-level database.
    let mask = db_path.unwrap_or("/uk/cases/UK");
    let url = format!(
        "{BAILII_BASE}/cgi-bin/find.cgi?method=boolean&query={}&mask_path={}",
        encode(query),
        encode(mask)
    );

    let mut result = format!("BAILII Tribunal Search: {url}\n\n");

    match tribunal {
        Some(t) => result.push_str(&format!("Searching: {} decisions\n", t.to_uppercase())),
        None => result.push_str("Searching: All UK tribunal decisions\n"),
    }

    result.push_str("\nAvailable tribunals:\n");
    result.push_str("- eat (Employment Appeal Tribunal)\n");
    result.push_str("- aac (Administrative Appeals Chamber)\n");
    result.push_str("- iac (Immigration and Asylum Chamber)\n");
    result.push_str("- lc (Lands Chamber)\n");
    result.push_str("- tax / tcc (Tax Chamber)\n");
    result.push_str("- grc (General Regulatory Chamber)\n");
    result.push_str("- mental health (Mental Health Tribunal)\n");

    if let Some(year) = year {
        result.push_str(&format!(
            "\nNote: Filter by year {year} on the results page.\n"
        ));
    }

    result
}

fn render_case(citation: &str, url: &str, outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Confirmed => format!(
            "BAILII Case: {citation}\n\nURL: {url}\n\nVisit the link above for the full judgment.\n\nNote: BAILII is best for:\n- House of Lords cases (pre-2009)\n- Older Court of Appeal decisions\n- Tribunal decisions not on National Archives"
        ),
        ProbeOutcome::NotFound | ProbeOutcome::OtherStatus(_) => {
            let search = search_url(citation, None, true);
            format!(
                "Case URL not found: {url}\n\nThe case may be under a different path. Try searching:\n{search}\n\nAlternatively, try caselaw.nationalarchives.gov.uk for recent cases (2003+)."
            )
        }
        ProbeOutcome::TimedOut => format!(
            "BAILII Case URL (unverified): {url}\n\nCould not verify the URL (timeout). The link may still work.\nIf not, try searching on BAILII directly."
        ),
        ProbeOutcome::Failed(err) => format!(
            "BAILII Case URL (unverified): {url}\n\nCould not verify: {err}\nThe link may still work. Try it directly."
        ),
    }
}

/// Fetch a case by neutral citation or BAILII URL.
///
/// A bailii.org URL passes straight through; a citation is parsed, mapped to
/// a case path, and confirmed with one `HEAD` probe.
pub async fn get_case(prober: &Prober, citation_or_url: &str) -> String {
    if citation_or_url.starts_with("http") && citation_or_url.contains("bailii.org") {
        return format!(
            "BAILII Case: {citation_or_url}\n\nVisit the link above for the full judgment."
        );
    }

    let Some(parsed) = parse_bailii_citation(citation_or_url) else {
        let search = search_url(citation_or_url, None, true);
        return format!("Could not parse citation: {citation_or_url}\n\nTry searching: {search}");
    };

    let url = case_url(&parsed);
    let outcome = prober.head(&url).await;
    render_case(citation_or_url, &url, &outcome)
}

/// Link to a recent-decisions page.
pub fn recent_decisions(jurisdiction: &str) -> String {
    static JURISDICTIONS: &[(&str, &str, &str)] = &[
        ("ew", "ew", "England & Wales"),
        ("england", "ew", "England & Wales"),
        ("england and wales", "ew", "England & Wales"),
        ("scot", "scot", "Scotland"),
        ("scotland", "scot", "Scotland"),
        ("nie", "nie", "Northern Ireland"),
        ("ni", "nie", "Northern Ireland"),
        ("northern ireland", "nie", "Northern Ireland"),
        ("uk", "uk", "UK-wide"),
    ];

    let jur_lower = normalize_key(jurisdiction);
    let hit = JURISDICTIONS
        .iter()
        .find(|(alias, _, _)| *alias == jur_lower);

    if let Some((_, page, name)) = hit {
        let url = format!("{BAILII_BASE}/recent/{page}.html");
        return format!(
            "BAILII Recent Decisions - {name}\n\nURL: {url}\n\nThis page shows recently added decisions.\n\nOther jurisdictions:\n- England & Wales: {BAILII_BASE}/recent/ew.html\n- Scotland: {BAILII_BASE}/recent/scot.html\n- Northern Ireland: {BAILII_BASE}/recent/nie.html\n- UK-wide: {BAILII_BASE}/recent/uk.html"
        );
    }

    format!(
        "Jurisdiction not recognised: {jurisdiction}\n\nAvailable jurisdictions:\n- ew / england / england and wales\n- scot / scotland\n- nie / ni / northern ireland\n- uk (UK-wide tribunals)\n\nRecent decisions pages:\n- England & Wales: {BAILII_BASE}/recent/ew.html\n- Scotland: {BAILII_BASE}/recent/scot.html\n- Northern Ireland: {BAILII_BASE}/recent/nie.html"
    )
}

/// Static listing of the database codes worth knowing.
pub fn database_list() -> &'static str {
    "BAILII Databases (England & Wales)\n\nSupreme Court & Predecessors:\n- uksc: UK Supreme Court (2009+)\n- ukhl: House of Lords (pre-2009)\n- ukpc: Privy Council\n\nCourt of Appeal:\n- ewca/civ: Civil Division\n- ewca/crim: Criminal Division\n\nHigh Court:\n- ewhc/admin: Administrative Court\n- ewhc/ch: Chancery Division\n- ewhc/comm: Commercial Court\n- ewhc/fam: Family Division\n- ewhc/kb: King's Bench Division\n- ewhc/tcc: Technology & Construction Court\n\nSpecialist Courts:\n- ewcop: Court of Protection\n- ewfc: Family Court\n\nUpper Tribunal:\n- ukut/aac: Administrative Appeals Chamber\n- ukut/iac: Immigration and Asylum Chamber\n- ukut/lc: Lands Chamber\n- ukut/tcc: Tax and Chancery Chamber\n\nFirst-tier Tribunal:\n- ukftt/tc: Tax Chamber\n- ukftt/grc: General Regulatory Chamber\n\nEmployment:\n- eat: Employment Appeal Tribunal\n\nMental Health:\n- mhlo: Mental Health Law Online (Tribunal decisions)\n\nUse these codes with search_bailii(query, database=\"code\")"
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bailii(citation: &str) -> Citation {
        parse_bailii_citation(citation)
            .unwrap_or_else(|| panic!("citation should parse: {citation}"))
    }

    #[test]
    fn search_url_masks_known_database() {
        let url = search_url("deprivation of liberty", Some("ewcop"), false);
        assert!(url.contains("query=deprivation%20of%20liberty"));
        assert!(url.ends_with("&mask_path=%2Few%2Fcases%2FEWCOP%2F"));
    }

    #[test]
    fn title_only_sends_empty_mask() {
        let url = search_url("Bland", None, true);
        assert!(url.ends_with("&mask_path="));
    }

    #[test]
    fn known_database_overrides_title_only() {
        let url = search_url("Bland", Some("ukhl"), true);
        assert!(url.ends_with("&mask_path=%2Fuk%2Fcases%2FUKHL%2F"));
    }

    #[test]
    fn unknown_database_leaves_mask_off() {
        let url = search_url("costs", Some("crown court"), false);
        assert!(!url.contains("mask_path"));
    }

    #[test]
    fn search_text_upper_cases_known_database() {
        let text = search("capacity", Some("court of protection"), false);
        assert!(text.contains("Searching: COURT OF PROTECTION database\n"));
    }

    #[test]
    fn search_text_lists_alternatives_for_unknown_database() {
        let text = search("capacity", Some("crown court"), false);
        assert!(text.contains("Note: 'crown court' not recognised. Searching all databases."));
        assert!(text.contains("Available databases: uksc, ukhl, ewca/civ"));
        assert!(text.ends_with("Tip: Use get_bailii_case('[YEAR] COURT NUMBER') to fetch a specific case."));
    }

    #[test]
    fn tribunal_shortcut_resolves_first() {
        let text = search_tribunals("personal independence payment", Some("aac"), None);
        assert!(text.contains("mask_path=%2Fuk%2Fcases%2FUKUT%2FAAC%2F"));
        assert!(text.contains("Searching: AAC decisions\n"));
    }

    #[test]
    fn tribunal_falls_back_to_database_table() {
        let text = search_tribunals("best interests", Some("court of protection"), None);
        assert!(text.contains("mask_path=%2Few%2Fcases%2FEWCOP%2F"));
    }

    #[test]
    fn tribunal_default_mask_covers_uk_cases() {
        let text = search_tribunals("reasonable adjustments", None, None);
        assert!(text.contains("mask_path=%2Fuk%2Fcases%2FUK"));
        assert!(text.contains("Searching: All UK tribunal decisions\n"));
    }

    #[test]
    fn tribunal_year_note_is_appended() {
        let text = search_tribunals("dismissal", Some("eat"), Some(2023));
        assert!(text.ends_with("Note: Filter by year 2023 on the results page.\n"));
    }

    #[test]
    fn house_of_lords_case_url() {
        let url = case_url(&bailii("[1999] UKHL 30"));
        assert_eq!(url, "https://www.bailii.org/uk/cases/UKHL/1999/30.html");
    }

    #[test]
    fn chamber_merges_for_ukut() {
        let url = case_url(&bailii("[2020] UKUT 123 (AAC)"));
        assert_eq!(url, "https://www.bailii.org/uk/cases/UKUT/AAC/2020/123.html");
    }

    #[test]
    fn chamber_merges_for_ukftt() {
        let url = case_url(&bailii("[2021] UKFTT 456 (TC)"));
        assert_eq!(url, "https://www.bailii.org/uk/cases/UKFTT/TC/2021/456.html");
    }

    #[test]
    fn chamber_is_ignored_for_other_courts() {
        let url = case_url(&bailii("[2023] EWCA 100 (Civ)"));
        assert_eq!(url, "https://www.bailii.org/ew/cases/EWCA/2023/100.html");
    }

    #[test]
    fn unknown_chamber_falls_back_to_bare_court() {
        let url = case_url(&bailii("[2020] UKUT 5 (XYZ)"));
        assert_eq!(url, "https://www.bailii.org/uk/cases/UKUT/2020/5.html");
    }

    #[test]
    fn eat_maps_to_ukeat_path() {
        let url = case_url(&bailii("[2022] EAT 99"));
        assert_eq!(url, "https://www.bailii.org/uk/cases/UKEAT/2022/99.html");
    }

    #[test]
    fn division_codes_use_cased_paths() {
        let url = case_url(&bailii("[2001] EWCA/Civ 44"));
        assert_eq!(url, "https://www.bailii.org/ew/cases/EWCA/Civ/2001/44.html");
    }

    #[test]
    fn unknown_court_degrades_to_search() {
        let url = case_url(&bailii("[2023] NICA 7"));
        assert_eq!(
            url,
            "https://www.bailii.org/cgi-bin/find.cgi?method=boolean&query=%5B2023%5D%20NICA%207"
        );
    }

    #[tokio::test]
    async fn bailii_urls_pass_straight_through() {
        let prober = Prober::new().unwrap();
        let text = get_case(
            &prober,
            "https://www.bailii.org/ew/cases/EWCOP/2014/25.html",
        )
        .await;
        assert_eq!(
            text,
            "BAILII Case: https://www.bailii.org/ew/cases/EWCOP/2014/25.html\n\nVisit the link above for the full judgment."
        );
    }

    #[tokio::test]
    async fn unparseable_citation_suggests_title_search() {
        let prober = Prober::new().unwrap();
        let text = get_case(&prober, "Airedale NHS Trust v Bland").await;
        assert!(text.starts_with("Could not parse citation: Airedale NHS Trust v Bland"));
        assert!(text.contains("query=Airedale%20NHS%20Trust%20v%20Bland&mask_path="));
    }

    #[test]
    fn confirmed_case_keeps_the_best_for_note() {
        let url = "https://www.bailii.org/uk/cases/UKHL/1999/30.html";
        let text = render_case("[1999] UKHL 30", url, &ProbeOutcome::Confirmed);
        assert!(text.starts_with("BAILII Case: [1999] UKHL 30"));
        assert!(text.contains(&format!("URL: {url}")));
        assert!(text.contains("- House of Lords cases (pre-2009)"));
    }

    #[test]
    fn missing_case_suggests_search_and_national_archives() {
        let url = "https://www.bailii.org/ew/cases/EWCOP/2024/999.html";
        let text = render_case("[2024] EWCOP 999", url, &ProbeOutcome::NotFound);
        assert!(text.starts_with(&format!("Case URL not found: {url}")));
        assert!(text.contains("cgi-bin/find.cgi"));
        assert!(text.contains("caselaw.nationalarchives.gov.uk for recent cases (2003+)"));
    }

    #[test]
    fn timeout_hands_out_unverified_url() {
        let url = "https://www.bailii.org/ew/cases/EWCOP/2014/25.html";
        let text = render_case("[2014] EWCOP 25", url, &ProbeOutcome::TimedOut);
        assert!(text.starts_with(&format!("BAILII Case URL (unverified): {url}")));
        assert!(text.contains("Could not verify the URL (timeout)."));
    }

    #[test]
    fn failure_hands_out_unverified_url() {
        let url = "https://www.bailii.org/ew/cases/EWCOP/2014/25.html";
        let outcome = ProbeOutcome::Failed("tls handshake failed".into());
        let text = render_case("[2014] EWCOP 25", url, &outcome);
        assert!(text.contains("Could not verify: tls handshake failed"));
        assert!(text.contains(url));
    }

    #[test]
    fn recent_decisions_for_scotland() {
        let text = recent_decisions("Scotland");
        assert!(text.starts_with("BAILII Recent Decisions - Scotland"));
        assert!(text.contains("URL: https://www.bailii.org/recent/scot.html"));
    }

    #[test]
    fn recent_decisions_unknown_jurisdiction() {
        let text = recent_decisions("france");
        assert!(text.starts_with("Jurisdiction not recognised: france"));
        assert!(text.contains("- ew / england / england and wales"));
    }

    #[test]
    fn database_list_covers_the_archive() {
        let text = database_list();
        assert!(text.contains("- ukhl: House of Lords (pre-2009)"));
        assert!(text.contains("- ukftt/grc: General Regulatory Chamber"));
        assert!(text.ends_with("search_bailii(query, database=\"code\")"));
    }
}
