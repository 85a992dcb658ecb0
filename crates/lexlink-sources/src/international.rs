//! International sources: EUR-Lex, HUDOC, and treaty databases.
//!
//! EU law stays relevant to UK research through retained EU law, and ECHR
//! case law through the Human Rights Act. EUR-Lex documents resolve by
//! CELEX identifier; a shortcut table maps common citations (GDPR, Rome I)
//! to their CELEX numbers so callers need not know the scheme.

pub const EURLEX_BASE: &str = "https://eur-lex.europa.eu";
pub const HUDOC_BASE: &str = "https://hudoc.echr.coe.int";
pub const UK_TREATIES: &str = "https://treaties.fcdo.gov.uk";
pub const UN_TREATIES: &str = "https://treaties.un.org";

// ── EUR-Lex ────────────────────────────────────────────────────────────────

/// Common citations mapped to CELEX numbers.
static COMMON_CELEX: &[(&str, &str)] = &[
    ("gdpr", "32016R0679"),
    ("2016/679", "32016R0679"),
    ("regulation 2016/679", "32016R0679"),
    ("data protection", "32016R0679"),
    ("brussels i", "32012R1215"),
    ("brussels recast", "32012R1215"),
    ("rome i", "32008R0593"),
    ("rome ii", "32007R0864"),
    ("insolvency", "32015R0848"),
];

/// Search EUR-Lex for EU law.
pub fn search_eurlex(query: &str, doc_type: Option<&str>) -> String {
    let search_url = format!(
        "{EURLEX_BASE}/search.html?text={}&scope=EURLEX&type=quick",
        urlencoding::encode(query)
    );

    let mut result = format!(
        "EUR-Lex Search\n\nSearch: {search_url}\n\nSearching for: {query}\n\nEUR-Lex contains:\n- EU Treaties\n- Regulations (directly applicable)\n- Directives (require implementation)\n- Decisions\n- Case law (CJEU)\n- Preparatory documents\n\nPOST-BREXIT RELEVANCE (UK)\n\nRetained EU Law:\nEU law in force on 31 December 2020 was retained in UK law.\nSee: European Union (Withdrawal) Act 2018\n\nUK Retained EU Law:\n{EURLEX_BASE}/summary/chapter/recast.html (understanding EU law types)\nhttps://www.legislation.gov.uk/eu-origin (UK legislation.gov.uk)\n\nCommon EU law areas still relevant:\n- Data protection (GDPR origins)\n- Employment law\n- Environmental law\n- Consumer protection\n- Competition law\n\nTo find retained EU law on legislation.gov.uk:\nhttps://www.legislation.gov.uk/eu-origin\n\nCELEX Numbers:\nEU documents have CELEX identifiers:\n- 3: Legislation (32018R0001 = Reg 2018/1)\n- 6: Case law (62015CJ0001 = Case C-1/15)"
    );

    if let Some(doc_type) = doc_type {
        result.push_str(&format!("\n\nFiltered by: {doc_type}"));
    }

    result
}

/// Resolve one EU instrument by CELEX number or common citation.
///
/// Anything starting with a digit is treated as a CELEX number and linked
/// directly; anything else falls back to a text search.
pub fn get_eu_legislation(celex_or_number: &str) -> String {
    let ref_lower = celex_or_number.trim().to_lowercase();
    let celex = COMMON_CELEX
        .iter()
        .find(|(key, _)| *key == ref_lower)
        .map(|(_, celex)| *celex)
        .unwrap_or(celex_or_number);

    let url = if celex.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("{EURLEX_BASE}/legal-content/EN/TXT/?uri=CELEX:{celex}")
    } else {
        format!(
            "{EURLEX_BASE}/search.html?text={}",
            urlencoding::encode(celex_or_number)
        )
    };

    format!(
        "EUR-Lex Document\n\nReference: {celex_or_number}\nURL: {url}\n\nThe page will show:\n- Full text of the legislation\n- Consolidated versions\n- Related documents\n- Implementation measures\n- Case law citing this provision\n\nFor UK retained version:\nSearch: https://www.legislation.gov.uk/eu-origin\n\nUnderstanding CELEX:\n- 32016R0679 = Regulation (EU) 2016/679\n  - 3 = Legislation\n  - 2016 = Year\n  - R = Regulation (L = Directive, D = Decision)\n  - 0679 = Number"
    )
}

// ── HUDOC ──────────────────────────────────────────────────────────────────

/// Search HUDOC for ECHR case law.
pub fn search_hudoc(query: &str, article: Option<&str>, respondent: Option<&str>) -> String {
    let mut search_url = format!("{HUDOC_BASE}/eng?query={}", urlencoding::encode(query));
    if let Some(article) = article {
        search_url.push_str(&format!("&article={}", urlencoding::encode(article)));
    }
    if let Some(respondent) = respondent {
        search_url.push_str(&format!("&respondent={}", urlencoding::encode(respondent)));
    }

    let mut result = format!(
        "HUDOC - European Court of Human Rights Case Law\n\nSearch: {search_url}\n\nSearching for: {query}"
    );
    if let Some(article) = article {
        result.push_str(&format!("\nArticle: {article}"));
    }
    if let Some(respondent) = respondent {
        result.push_str(&format!("\nRespondent: {respondent}"));
    }

    result.push_str(&format!(
        "\n\nHUDOC contains:\n- Judgments of the Grand Chamber and Chambers\n- Decisions on admissibility\n- Advisory opinions\n- Legal summaries\n- Press releases\n\nConvention Articles frequently cited:\n- Article 2: Right to life\n- Article 3: Prohibition of torture\n- Article 5: Right to liberty and security\n- Article 6: Right to fair trial\n- Article 8: Right to respect for private and family life\n- Article 10: Freedom of expression\n- Article 14: Prohibition of discrimination\n- Protocol 1, Article 1: Protection of property\n\nUK and ECHR:\n- Human Rights Act 1998 incorporates Convention rights\n- UK courts must \"take into account\" ECHR case law (s.2 HRA)\n- ECtHR judgments against UK are binding\n\nSearch tips:\n- Use case name: \"Smith v United Kingdom\"\n- Use application number: \"12345/67\"\n- Combine article and keyword: article=8, query=\"mental capacity\"\n\nAdvanced search:\n{HUDOC_BASE}/#{{\"sort\":[\"kpdate Descending\"]}}"
    ));

    result
}

/// Look up an ECHR case by application number.
pub fn get_echr_case(application_number: &str) -> String {
    let app_num = application_number.trim().replace(' ', "");
    let search_url = format!("{HUDOC_BASE}/eng?appno={}", urlencoding::encode(&app_num));

    format!(
        "ECHR Case Search\n\nApplication number: {application_number}\nSearch: {search_url}\n\nHUDOC will return all documents for this application:\n- Judgment (if determined)\n- Decision on admissibility\n- Communication to respondent government\n- Press release\n\nUnderstanding ECHR procedure:\n1. Application lodged\n2. Communication to respondent (if not struck out)\n3. Admissibility decision (or judgment on merits)\n4. Judgment on merits (if admissible)\n5. Just satisfaction (Article 41)\n6. Execution supervised by Committee of Ministers\n\nCitation format:\n[Name] v [State] (Application no. [number])\n\nExample: Smith v United Kingdom (Application no. 12345/67)\n\nFor execution of judgments:\nhttps://www.coe.int/en/web/execution"
    )
}

/// Key ECHR cases for one Convention article.
pub fn get_echr_article_caselaw(article: &str) -> String {
    let search_url = format!("{HUDOC_BASE}/eng?article={article}");

    let key_cases: &[(&str, &[&str])] = &[
        ("2", &["McCann v UK (1995)", "Osman v UK (1998)"]),
        (
            "3",
            &[
                "Ireland v UK (1978)",
                "Soering v UK (1989)",
                "MSS v Belgium and Greece (2011)",
            ],
        ),
        (
            "5",
            &[
                "Winterwerp v Netherlands (1979)",
                "HL v UK (2004) - Bournewood",
                "Storck v Germany (2005)",
            ],
        ),
        ("6", &["Golder v UK (1975)", "Salabiaku v France (1988)"]),
        (
            "8",
            &[
                "Goodwin v UK (2002)",
                "Von Hannover v Germany (2004)",
                "S and Marper v UK (2008)",
            ],
        ),
        ("10", &["Handyside v UK (1976)", "Sunday Times v UK (1979)"]),
        (
            "14",
            &["Belgian Linguistics (1968)", "Thlimmenos v Greece (2000)"],
        ),
    ];

    let mut result = format!(
        "ECHR Article {article} Case Law\n\nSearch all Article {article} cases:\n{search_url}\n\n"
    );

    let art = article.trim();
    if let Some((_, cases)) = key_cases.iter().find(|(a, _)| *a == art) {
        result.push_str(&format!("Key Article {art} cases:\n"));
        for case in *cases {
            result.push_str(&format!("- {case}\n"));
        }
    }

    result.push_str(&format!(
        "\nGuide to Article {article}:\n{HUDOC_BASE}/eng (select Article {article} from facets)\n\nCase Law Guides (ECHR publications):\nhttps://www.echr.coe.int/case-law-guides\n\nFactsheets by topic:\nhttps://www.echr.coe.int/factsheets"
    ));

    result
}

// ── Treaties ───────────────────────────────────────────────────────────────

/// Search the UK Treaties Online database.
pub fn search_uk_treaties(query: &str) -> String {
    let search_url = format!("{UK_TREATIES}/?query={}", urlencoding::encode(query));

    format!(
        "UK Treaties Search\n\nSearch: {search_url}\n\nSearching for: {query}\n\nThe UK Treaties Online database contains:\n- Bilateral treaties\n- Multilateral treaties\n- Treaty status\n- Reservations and declarations\n\nTreaty types:\n- Bilateral (between UK and one other state)\n- Multilateral (multiple states)\n\nStatus:\n- In force\n- Not yet in force\n- Terminated\n\nKey UK treaties:\n- Trade agreements\n- Extradition treaties\n- Investment protection\n- Tax treaties\n- Human rights conventions\n\nPost-Brexit treaties:\n{UK_TREATIES} (filter by date for post-2020)\n\nFor EU-UK agreements:\n- Trade and Cooperation Agreement (TCA)\n- Withdrawal Agreement\n\nUN Treaty Collection (global treaties):\n{UN_TREATIES}"
    )
}

/// Look up one UK treaty by name.
pub fn get_uk_treaty(treaty_name: &str) -> String {
    let search_url = format!("{UK_TREATIES}/?query={}", urlencoding::encode(treaty_name));

    format!(
        "UK Treaty Search\n\nSearching for: {treaty_name}\nSearch: {search_url}\n\nThe treaty page will show:\n- Full title\n- Parties\n- Date signed\n- Date in force\n- UK ratification date\n- Text of treaty (if available)\n- Any reservations\n\nFor treaties requiring legislation:\nCheck legislation.gov.uk for implementing Act\n\nFor tax treaties:\nhttps://www.gov.uk/government/collections/tax-treaties\n\nFor extradition treaties:\nhttps://www.gov.uk/government/collections/extradition-treaties\n\nVienna Convention on the Law of Treaties 1969:\nGoverns treaty interpretation and application."
    )
}

// ── Index ──────────────────────────────────────────────────────────────────

/// Index of international law resources.
pub fn international_law_index() -> String {
    format!(
        "International Law Resources Index\n\nEU LAW (EUR-Lex)\n{EURLEX_BASE}\n- EU legislation (regulations, directives)\n- EU case law (CJEU)\n- Retained EU law guidance\nUse: search_eurlex(), get_eu_legislation()\n\nECHR (HUDOC)\n{HUDOC_BASE}\n- European Court of Human Rights case law\n- Convention articles interpretation\nUse: search_hudoc(), get_echr_case(), get_echr_article_caselaw()\n\nUK TREATIES\n{UK_TREATIES}\n- Bilateral and multilateral treaties\n- Treaty status and text\nUse: search_uk_treaties(), get_uk_treaty()\n\nOTHER INTERNATIONAL SOURCES\n\nUN Treaty Collection:\n{UN_TREATIES}\n- Multilateral treaties\n- State signatures and ratifications\n\nICJ (International Court of Justice):\nhttps://www.icj-cij.org\n- Inter-state disputes\n- Advisory opinions\n\nWTO:\nhttps://www.wto.org/english/docs_e/legal_e/legal_e.htm\n- Trade agreements\n- Dispute settlement\n\nHague Conference:\nhttps://www.hcch.net\n- Private international law conventions\n- Child abduction\n- Service of documents\n\nUK AND INTERNATIONAL LAW\n\nDualist system:\nInternational treaties generally require domestic implementing\nlegislation to have effect in UK law.\n\nKey legislation:\n- Human Rights Act 1998 (ECHR)\n- European Union (Withdrawal) Act 2018 (retained EU law)\n- State Immunity Act 1978\n- Extradition Act 2003\n\nCustomary international law:\nPart of common law where not inconsistent with statute.\n\nFor research on public international law:\n- BAILII international materials\n- Oxford Public International Law\n- Cambridge International Law Journal"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eurlex_search_fixes_scope_and_type() {
        let text = search_eurlex("working time directive", None);
        assert!(text.contains(
            "Search: https://eur-lex.europa.eu/search.html?text=working%20time%20directive&scope=EURLEX&type=quick"
        ));
        assert!(!text.contains("Filtered by:"));
    }

    #[test]
    fn eurlex_doc_type_is_appended_last() {
        let text = search_eurlex("gdpr", Some("regulation"));
        assert!(text.ends_with("\n\nFiltered by: regulation"));
    }

    #[test]
    fn gdpr_shortcut_resolves_to_its_celex_number() {
        let text = get_eu_legislation("GDPR");
        assert!(text.contains(
            "URL: https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:32016R0679"
        ));
        assert!(text.contains("Reference: GDPR"));
    }

    #[test]
    fn raw_celex_numbers_link_directly() {
        let text = get_eu_legislation("32012R1215");
        assert!(text.contains("/legal-content/EN/TXT/?uri=CELEX:32012R1215"));
    }

    #[test]
    fn unknown_citations_fall_back_to_search() {
        let text = get_eu_legislation("Working Time Directive");
        assert!(text.contains(
            "URL: https://eur-lex.europa.eu/search.html?text=Working%20Time%20Directive"
        ));
    }

    #[test]
    fn hudoc_search_carries_article_and_respondent() {
        let text = search_hudoc("mental capacity", Some("8"), Some("United Kingdom"));
        assert!(text.contains(
            "Search: https://hudoc.echr.coe.int/eng?query=mental%20capacity&article=8&respondent=United%20Kingdom"
        ));
        assert!(text.contains("\nArticle: 8"));
        assert!(text.contains("\nRespondent: United Kingdom"));
    }

    #[test]
    fn echr_case_lookup_strips_spaces_and_encodes_the_slash() {
        let text = get_echr_case(" 12345 / 67 ");
        assert!(text.contains("Search: https://hudoc.echr.coe.int/eng?appno=12345%2F67"));
        assert!(text.contains("Application number:  12345 / 67 "));
    }

    #[test]
    fn article_five_lists_bournewood() {
        let text = get_echr_article_caselaw("5");
        assert!(text.contains("Key Article 5 cases:\n"));
        assert!(text.contains("- HL v UK (2004) - Bournewood\n"));
    }

    #[test]
    fn unknown_article_still_links_the_search() {
        let text = get_echr_article_caselaw("12");
        assert!(text.contains("Search all Article 12 cases:\nhttps://hudoc.echr.coe.int/eng?article=12"));
        assert!(!text.contains("Key Article"));
    }

    #[test]
    fn treaty_search_encodes_the_query() {
        let text = search_uk_treaties("trade and cooperation agreement");
        assert!(text.contains(
            "Search: https://treaties.fcdo.gov.uk/?query=trade%20and%20cooperation%20agreement"
        ));
    }

    #[test]
    fn index_names_the_dualist_system() {
        let text = international_law_index();
        assert!(text.contains("Dualist system:"));
        assert!(text.ends_with("- Cambridge International Law Journal"));
    }
}
