//! Practice directions on justice.gov.uk and judiciary.uk.
//!
//! Practice directions supplement the procedural rules with detailed
//! guidance. Three quick-lookup tables cover the Court of Protection, CPR,
//! and FPR directions; when no court is given the tables are consulted in
//! that order, so a code present in more than one rule set resolves to the
//! earliest table that knows it.
//!
//! Codes are normalised by dropping spaces and hyphens, which means the
//! hyphenated CPR "pre-action" entry can only be reached through search and
//! listings, never by code.

use lexlink_core::lookup::normalize_key;
use lexlink_core::normalize::compact_code;

pub const JUDICIARY_BASE: &str = "https://www.judiciary.uk";
pub const JUSTICE_BASE: &str = "https://www.justice.gov.uk";

const COP_INDEX: &str =
    "https://www.justice.gov.uk/courts/procedure-rules/court-of-protection/practice-directions";
const CPR_INDEX: &str = "https://www.justice.gov.uk/courts/procedure-rules/civil/rules";
const FPR_INDEX: &str =
    "https://www.justice.gov.uk/courts/procedure-rules/family/practice_directions";

struct Pd {
    code: &'static str,
    title: &'static str,
    /// URL segment under the owning index page.
    segment: &'static str,
    description: &'static str,
}

const fn pd(
    code: &'static str,
    title: &'static str,
    segment: &'static str,
    description: &'static str,
) -> Pd {
    Pd {
        code,
        title,
        segment,
        description,
    }
}

static COP_PDS: &[Pd] = &[
    pd(
        "1a",
        "Participation of P",
        "pd01a",
        "How P should participate in proceedings",
    ),
    pd(
        "2a",
        "Court Documents",
        "pd02a",
        "Requirements for court documents",
    ),
    pd(
        "2b",
        "Service of Documents",
        "pd02b",
        "How to serve documents",
    ),
    pd(
        "4b",
        "Statements of Truth",
        "pd04b",
        "Requirements for statements of truth",
    ),
    pd(
        "9e",
        "Applications Relating to Statutory Wills etc",
        "pd09e",
        "Applications for statutory wills, gifts, settlements",
    ),
    pd(
        "9f",
        "Applications Relating to Serious Medical Treatment",
        "pd09f",
        "Serious medical treatment applications",
    ),
    pd(
        "10aa",
        "Deprivation of Liberty Applications",
        "pd10aa",
        "Applications to authorise deprivation of liberty (Re X and COPDOL applications)",
    ),
    pd(
        "10b",
        "Urgent and Interim Applications",
        "pd10b",
        "Urgent applications, without notice applications",
    ),
    pd(
        "14a",
        "Written Evidence",
        "pd14a",
        "Requirements for witness statements and affidavits",
    ),
    pd(
        "14e",
        "Section 49 Reports",
        "pd14e",
        "Reports from the Official Solicitor, Public Guardian, etc.",
    ),
    pd(
        "15a",
        "Expert Evidence",
        "pd15a",
        "Use of expert evidence, duties of experts",
    ),
    pd(
        "17a",
        "Litigation Friends",
        "pd17a",
        "Appointment and duties of litigation friends",
    ),
    pd(
        "19b",
        "Fixed Costs in the COP",
        "pd19b",
        "Fixed costs regime for certain applications",
    ),
    pd(
        "20a",
        "Appeals",
        "pd20a",
        "Appeals from the Court of Protection",
    ),
    pd(
        "20b",
        "Appeals - Destination of Appeals",
        "pd20b",
        "Which court hears COP appeals",
    ),
];

static CPR_PDS: &[Pd] = &[
    pd(
        "pre-action",
        "Pre-Action Conduct and Protocols",
        "pd_pre-action_conduct",
        "Steps before issuing proceedings",
    ),
    pd(
        "3e",
        "Costs Management",
        "part03/pd_part03e",
        "Costs budgets in multi-track cases",
    ),
    pd(
        "6a",
        "Service within the UK",
        "part06/pd_part06a",
        "Methods of service within jurisdiction",
    ),
    pd(
        "22",
        "Statements of Truth",
        "part22/pd_part22",
        "Requirements for statements of truth",
    ),
    pd(
        "25a",
        "Interim Injunctions",
        "part25/pd_part25a",
        "Applications for interim injunctions",
    ),
    pd(
        "35",
        "Experts and Assessors",
        "part35/pd_part35",
        "Use of expert evidence",
    ),
    pd(
        "52a",
        "Appeals - General Provisions",
        "part52/pd_part52a",
        "How to appeal",
    ),
    pd(
        "52c",
        "Appeals to Court of Appeal",
        "part52/pd_part52c",
        "Court of Appeal civil procedure",
    ),
    pd(
        "54a",
        "Judicial Review",
        "part54/pd_part54a",
        "Judicial review procedure",
    ),
];

static FPR_PDS: &[Pd] = &[
    pd(
        "3a",
        "Pre-Application Protocol",
        "pd_part_03a",
        "Steps before starting family proceedings",
    ),
    pd(
        "12b",
        "Child Arrangements Programme",
        "pd_part_12b",
        "Private law children cases",
    ),
    pd(
        "12j",
        "Domestic Abuse in Children Proceedings",
        "pd_part_12j",
        "Handling allegations of domestic abuse",
    ),
    pd(
        "25a",
        "Experts in Family Proceedings",
        "pd_part_25a",
        "Expert evidence in family cases",
    ),
    pd(
        "27a",
        "Court Bundles",
        "pd_part_27a",
        "Requirements for bundles in family proceedings",
    ),
    pd(
        "36a",
        "Transparency",
        "pd_part_36a",
        "Reporting restrictions and transparency",
    ),
];

fn find_pd(table: &'static [Pd], code: &str) -> Option<&'static Pd> {
    table.iter().find(|pd| pd.code == code)
}

fn pd_url(index: &str, pd: &Pd) -> String {
    format!("{index}/{}", pd.segment)
}

fn list_cop_pds() -> String {
    COP_PDS
        .iter()
        .map(|pd| format!("- PD {}: {}", pd.code.to_uppercase(), pd.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up one practice direction, auto-detecting the court when possible.
pub fn get_practice_direction(pd_number: &str, court: Option<&str>) -> String {
    let code = compact_code(pd_number);

    let court_lower = match court {
        Some(c) => normalize_key(c),
        None => {
            if find_pd(COP_PDS, &code).is_some() {
                "cop".to_string()
            } else if find_pd(CPR_PDS, &code).is_some() {
                "cpr".to_string()
            } else if find_pd(FPR_PDS, &code).is_some() {
                "fpr".to_string()
            } else {
                String::new()
            }
        }
    };

    match court_lower.as_str() {
        "cop" | "copr" | "court of protection" => match find_pd(COP_PDS, &code) {
            Some(pd) => format!(
                "Practice Direction {} - {}\n\nURL: {}\n\nDescription: {}\n\nAll CoP Practice Directions: {COP_INDEX}",
                pd_number.to_uppercase(),
                pd.title,
                pd_url(COP_INDEX, pd),
                pd.description
            ),
            None => format!(
                "Practice Direction {pd_number} not found in CoP Practice Directions.\n\nAvailable CoP Practice Directions:\n{}\n\nAll CoP Practice Directions: {COP_INDEX}",
                list_cop_pds()
            ),
        },
        "cpr" | "civil" => match find_pd(CPR_PDS, &code) {
            Some(pd) => format!(
                "CPR Practice Direction {} - {}\n\nURL: {}\n\nDescription: {}\n\nAll CPR Practice Directions: {CPR_INDEX}",
                pd_number.to_uppercase(),
                pd.title,
                pd_url(CPR_INDEX, pd),
                pd.description
            ),
            None => format!(
                "Practice Direction {pd_number} not in quick lookup.\n\nCPR Practice Directions are at: {CPR_INDEX}\nNavigate to the relevant Part and look for the associated Practice Direction."
            ),
        },
        "fpr" | "family" => match find_pd(FPR_PDS, &code) {
            Some(pd) => format!(
                "FPR Practice Direction {} - {}\n\nURL: {}\n\nDescription: {}\n\nAll FPR Practice Directions: {FPR_INDEX}",
                pd_number.to_uppercase(),
                pd.title,
                pd_url(FPR_INDEX, pd),
                pd.description
            ),
            None => format!(
                "Practice Direction {pd_number} not in quick lookup.\n\nFPR Practice Directions are at: {FPR_INDEX}"
            ),
        },
        _ => format!(
            "Could not locate Practice Direction {pd_number}.\n\nSpecify court type:\n- get_practice_direction(\"{pd_number}\", court=\"cop\") for Court of Protection\n- get_practice_direction(\"{pd_number}\", court=\"cpr\") for Civil\n- get_practice_direction(\"{pd_number}\", court=\"fpr\") for Family\n\nOr use search_practice_directions(query) to search."
        ),
    }
}

/// Substring search over titles and descriptions in all three tables.
pub fn search_practice_directions(query: &str) -> String {
    let query_lower = query.to_lowercase();
    let mut results = Vec::new();

    for (label, index, table) in [
        ("CoP", COP_INDEX, COP_PDS),
        ("CPR", CPR_INDEX, CPR_PDS),
        ("FPR", FPR_INDEX, FPR_PDS),
    ] {
        for pd in table {
            if pd.title.to_lowercase().contains(&query_lower)
                || pd.description.to_lowercase().contains(&query_lower)
            {
                results.push(format!(
                    "{label} PD {}: {} - {}",
                    pd.code.to_uppercase(),
                    pd.title,
                    pd_url(index, pd)
                ));
            }
        }
    }

    let mut result = format!("Search results for '{query}':\n\n");
    if results.is_empty() {
        result.push_str("No Practice Directions found in quick lookup matching that query.\n");
    } else {
        result.push_str(&results.join("\n"));
    }

    result.push_str(&format!(
        "\n\nFull Practice Direction indexes:\n- Court of Protection: {COP_INDEX}\n- Civil: {CPR_INDEX}\n- Family: {FPR_INDEX}\n\nJudiciary guidance and resources: {JUDICIARY_BASE}/guidance-and-resources/"
    ));

    result
}

/// List every quick-lookup practice direction for one court.
pub fn list_practice_directions(court: &str) -> String {
    let (heading, index, table) = match normalize_key(court).as_str() {
        "cop" | "copr" | "court of protection" => (
            "Court of Protection Practice Directions",
            COP_INDEX,
            COP_PDS,
        ),
        "cpr" | "civil" => (
            "Civil Procedure Rules Practice Directions (selected)",
            CPR_INDEX,
            CPR_PDS,
        ),
        "fpr" | "family" => (
            "Family Procedure Rules Practice Directions (selected)",
            FPR_INDEX,
            FPR_PDS,
        ),
        _ => {
            return format!(
                "Court '{court}' not recognised.\n\nAvailable courts:\n- cop / copr / court of protection\n- cpr / civil\n- fpr / family\n\nUse list_practice_directions(\"cop\") for Court of Protection Practice Directions."
            );
        }
    };

    let mut result = format!("{heading}\n\n");
    for pd in table {
        result.push_str(&format!(
            "PD {}: {}\n  {}\n\n",
            pd.code.to_uppercase(),
            pd.title,
            pd_url(index, pd)
        ));
    }
    result.push_str(&format!("\nFull index: {index}"));
    result
}

/// Topical guidance links on judiciary.uk.
pub fn get_judiciary_guidance(topic: &str) -> String {
    static GUIDANCE_DOCS: &[(&str, &str, &str)] = &[
        (
            "experts",
            "Guidance for Experts",
            "https://www.judiciary.uk/guidance-and-resources/expert-guidance/",
        ),
        (
            "mckenzie",
            "McKenzie Friends - Practice Guidance",
            "https://www.judiciary.uk/guidance-and-resources/",
        ),
        (
            "vulnerable",
            "Vulnerable Witnesses and Parties",
            "https://www.judiciary.uk/guidance-and-resources/",
        ),
        (
            "reporting",
            "Reporting Restrictions",
            "https://www.judiciary.uk/guidance-and-resources/",
        ),
        (
            "remotehearings",
            "Remote Hearings",
            "https://www.judiciary.uk/guidance-and-resources/",
        ),
        (
            "costs",
            "Costs Guidance",
            "https://www.judiciary.uk/guidance-and-resources/",
        ),
    ];

    let topic_lower = normalize_key(topic);
    for (key, title, url) in GUIDANCE_DOCS {
        if topic_lower.contains(key) || key.contains(topic_lower.as_str()) {
            return format!(
                "{title}\n\nURL: {url}\n\nJudiciary Guidance and Resources: {JUDICIARY_BASE}/guidance-and-resources/\n\nNote: Judiciary.uk contains judicial guidance, speeches, and resources.\nFor procedural rules, use the court rules tools."
            );
        }
    }

    format!(
        "Judiciary.uk Guidance Search\n\nSearch term: {topic}\n\nMain resources page: {JUDICIARY_BASE}/guidance-and-resources/\n\nKey guidance areas:\n- Expert evidence guidance\n- McKenzie Friends guidance\n- Remote hearings protocol\n- Reporting restrictions guidance\n- Vulnerable witnesses guidance\n\nFor Practice Directions, use:\n- get_practice_direction(pd_number, court)\n- search_practice_directions(query)"
    )
}

/// Composite of every Court of Protection resource this crate links to.
pub fn court_of_protection_guidance() -> String {
    format!(
        "Court of Protection Guidance and Resources\n\nRULES AND PRACTICE DIRECTIONS\n- Court of Protection Rules 2017: https://www.legislation.gov.uk/uksi/2017/1035/contents\n- Practice Directions Index: {COP_INDEX}\n\nKEY PRACTICE DIRECTIONS\n{}\n\nFORMS\n- Court of Protection Forms: https://www.gov.uk/government/collections/court-of-protection-forms\n\nGUIDANCE\n- Judiciary CoP guidance: {JUDICIARY_BASE}/courts-and-tribunals/tribunals/court-of-protection/\n- Official Solicitor: https://www.gov.uk/government/organisations/official-solicitor-and-public-trustee\n\nMENTAL CAPACITY ACT\n- MCA Code of Practice: https://www.gov.uk/government/publications/mental-capacity-act-code-of-practice\n- Legislation: https://www.legislation.gov.uk/ukpga/2005/9/contents\n\nCASE LAW\n- CoP judgments: https://caselaw.nationalarchives.gov.uk/courts/ewcop",
        list_cop_pds()
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cop_pd_resolves_without_court() {
        let text = get_practice_direction("10aa", None);
        assert!(text.starts_with("Practice Direction 10AA - Deprivation of Liberty Applications"));
        assert!(text.contains(
            "URL: https://www.justice.gov.uk/courts/procedure-rules/court-of-protection/practice-directions/pd10aa"
        ));
    }

    #[test]
    fn single_digit_codes_pad_in_url_only() {
        let text = get_practice_direction("1a", Some("cop"));
        assert!(text.starts_with("Practice Direction 1A - Participation of P"));
        assert!(text.contains("/practice-directions/pd01a"));
    }

    #[test]
    fn codes_tolerate_spacing_and_hyphens() {
        let spaced = get_practice_direction("10 AA", None);
        let hyphenated = get_practice_direction("10-aa", None);
        assert!(spaced.contains("Deprivation of Liberty Applications"));
        assert!(hyphenated.contains("pd10aa"));
    }

    #[test]
    fn auto_detect_prefers_cpr_for_shared_codes() {
        // "25a" exists in both the CPR and FPR tables; detection order is
        // cop, cpr, fpr.
        let text = get_practice_direction("25a", None);
        assert!(text.starts_with("CPR Practice Direction 25A - Interim Injunctions"));
    }

    #[test]
    fn explicit_court_reaches_the_family_entry() {
        let text = get_practice_direction("25a", Some("fpr"));
        assert!(text.starts_with("FPR Practice Direction 25A - Experts in Family Proceedings"));
        assert!(text.contains("/family/practice_directions/pd_part_25a"));
    }

    #[test]
    fn pre_action_is_unreachable_by_code() {
        // Normalisation drops the hyphen, so the stored "pre-action" key
        // never matches; the entry surfaces through search and listings.
        let text = get_practice_direction("pre-action", Some("cpr"));
        assert!(text.starts_with("Practice Direction pre-action not in quick lookup."));
    }

    #[test]
    fn unknown_cop_pd_lists_the_table() {
        let text = get_practice_direction("99z", Some("cop"));
        assert!(text.starts_with("Practice Direction 99z not found in CoP Practice Directions."));
        assert!(text.contains("- PD 10AA: Deprivation of Liberty Applications"));
    }

    #[test]
    fn unknown_pd_everywhere_asks_for_a_court() {
        let text = get_practice_direction("99z", None);
        assert!(text.starts_with("Could not locate Practice Direction 99z."));
        assert!(text.contains("get_practice_direction(\"99z\", court=\"cop\")"));
    }

    #[test]
    fn search_spans_all_three_tables() {
        let text = search_practice_directions("experts");
        assert!(text.contains("CoP PD 15A: Expert Evidence"));
        assert!(text.contains("CPR PD 35: Experts and Assessors"));
        assert!(text.contains("FPR PD 25A: Experts in Family Proceedings"));
    }

    #[test]
    fn search_without_matches_still_links_indexes() {
        let text = search_practice_directions("maritime salvage");
        assert!(text.contains("No Practice Directions found in quick lookup matching that query."));
        assert!(text.contains("Full Practice Direction indexes:"));
        assert!(text.ends_with("https://www.judiciary.uk/guidance-and-resources/"));
    }

    #[test]
    fn listing_covers_the_cop_table() {
        let text = list_practice_directions("court of protection");
        assert!(text.starts_with("Court of Protection Practice Directions"));
        assert!(text.contains("PD 9F: Applications Relating to Serious Medical Treatment"));
        assert!(text.ends_with(&format!("Full index: {COP_INDEX}")));
    }

    #[test]
    fn listing_unknown_court() {
        let text = list_practice_directions("crown");
        assert!(text.starts_with("Court 'crown' not recognised."));
    }

    #[test]
    fn judiciary_guidance_matches_known_topic() {
        let text = get_judiciary_guidance("experts");
        assert!(text.starts_with("Guidance for Experts"));
        assert!(text.contains("expert-guidance/"));
    }

    #[test]
    fn judiciary_guidance_partial_topic() {
        let text = get_judiciary_guidance("mckenzie friend");
        assert!(text.starts_with("McKenzie Friends - Practice Guidance"));
    }

    #[test]
    fn judiciary_guidance_fallback_echoes_topic() {
        // "remote hearings" with a space does not hit the compact
        // "remotehearings" key.
        let text = get_judiciary_guidance("remote hearings");
        assert!(text.starts_with("Judiciary.uk Guidance Search"));
        assert!(text.contains("Search term: remote hearings"));
    }

    #[test]
    fn cop_guidance_composite() {
        let text = court_of_protection_guidance();
        assert!(text.contains("uksi/2017/1035"));
        assert!(text.contains("- PD 1A: Participation of P"));
        assert!(text.ends_with("https://caselaw.nationalarchives.gov.uk/courts/ewcop"));
    }
}
