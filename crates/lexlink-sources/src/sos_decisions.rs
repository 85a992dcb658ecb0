//! Secretary of State determinations across government departments.
//!
//! Covers the statutory contexts where disputes are referred to central
//! government: ordinary residence under the Care Act, s.117 MHA aftercare,
//! education and DLUHC decisions. Searches filter gov.uk by department slug.

use crate::GOV_UK_BASE;

/// A government department with decision-making functions.
pub struct Department {
    pub code: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    /// Decision types the department determines, as gov.uk-style slugs.
    pub decisions: &'static [&'static str],
}

const fn dept(
    code: &'static str,
    name: &'static str,
    slug: &'static str,
    decisions: &'static [&'static str],
) -> Department {
    Department {
        code,
        name,
        slug,
        decisions,
    }
}

pub static DEPARTMENTS: &[Department] = &[
    dept(
        "dhsc",
        "Department of Health and Social Care",
        "department-of-health-and-social-care",
        &["ordinary-residence-disputes", "s117-disputes"],
    ),
    dept(
        "dfe",
        "Department for Education",
        "department-for-education",
        &["academy-complaints", "school-organisation"],
    ),
    dept(
        "dluhc",
        "Department for Levelling Up, Housing and Communities",
        "department-for-levelling-up-housing-and-communities",
        &["planning-called-in", "compulsory-purchase", "local-government"],
    ),
    dept(
        "moj",
        "Ministry of Justice",
        "ministry-of-justice",
        &["parole-decisions"],
    ),
    dept(
        "ho",
        "Home Office",
        "home-office",
        &["immigration-rules", "deportation"],
    ),
    dept(
        "dwp",
        "Department for Work and Pensions",
        "department-for-work-pensions",
        &["benefit-regulations"],
    ),
];

fn find_department(code: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.code == code)
}

fn government_search_url(query: &str, department: Option<&str>) -> String {
    let mut url = format!(
        "{GOV_UK_BASE}/search/all?q={}&filter_content_purpose_supergroup=government",
        urlencoding::encode(query)
    );
    if let Some(department) = department
        && let Some(dept) = find_department(department.to_lowercase().trim())
    {
        url.push_str(&format!("&filter_organisations%5B%5D={}", dept.slug));
    }
    url
}

/// Search Secretary of State determinations, optionally by department code.
pub fn search_sos_decisions(query: &str, department: Option<&str>) -> String {
    let search_url = government_search_url(query, department);

    let mut result = format!(
        "Secretary of State Decisions Search\n\nSearch: {search_url}\n\nSearching for: {query}"
    );
    // The echo only fires for an exact lowercase code, unlike the URL filter.
    if let Some(department) = department
        && let Some(dept) = find_department(&department.to_lowercase())
    {
        result.push_str(&format!("\nDepartment: {}", dept.name));
    }

    result.push_str(
        "\n\nSoS decisions arise in various statutory contexts where disputes\nor appeals are referred to central government for determination.\n\nKey areas:\n\nHEALTH AND SOCIAL CARE (DHSC)\n- Ordinary residence disputes (s.40 Care Act 2014)\n- s.117 MHA ordinary residence disputes\n- NHS Continuing Healthcare disputes\n\nEDUCATION (DfE)\n- Academy complaints (where ESFA involved)\n- School organisation decisions\n- SEND Tribunal enforcement\n\nHOUSING AND PLANNING (DLUHC)\n- Called-in planning applications\n- Recovered planning appeals\n- Compulsory purchase orders\n- Local government disputes\n\nHOME OFFICE\n- Immigration and nationality\n- Deportation appeals (national security)\n\nNote: Many SoS decisions are not routinely published.\nFor specific decision types, use the topic-specific functions.",
    );

    result
}

/// Look up one decision by its reference.
pub fn get_sos_decision(reference: &str) -> String {
    let search_url = format!(
        "{GOV_UK_BASE}/search/all?q={}",
        urlencoding::encode(reference)
    );

    format!(
        "Secretary of State Decision Search\n\nReference: {reference}\nSearch: {search_url}\n\nSoS decisions may be published:\n1. On gov.uk publications pages\n2. In departmental decision letters\n3. Through Freedom of Information requests\n\nIf searching for ordinary residence decisions:\n- DHSC publishes some determinations\n- Search: \"ordinary residence determination\" on gov.uk\n\nIf searching for planning decisions:\n- Search Planning Inspectorate: https://acp.planninginspectorate.gov.uk\n\nIf searching for education decisions:\n- DfE decisions database: https://www.gov.uk/government/organisations/department-for-education\n\nIf the decision is not published:\n- Consider FOI request to relevant department\n- Check tribunal decisions if appeal pursued"
    )
}

/// Search ministerial decisions and directions.
pub fn search_ministerial_decisions(query: &str, department: Option<&str>) -> String {
    let search_url = government_search_url(query, department);

    format!(
        "Ministerial Decisions Search\n\nSearch: {search_url}\n\nSearching for: {query}\n\nMinisterial decisions include:\n- Written ministerial statements (Commons/Lords)\n- Ministerial directions\n- Regulatory decisions\n- Statutory determinations\n\nWritten Ministerial Statements:\nhttps://questions-statements.parliament.uk/written-statements\n\nParliamentary Questions:\nhttps://questions-statements.parliament.uk/written-questions\n\nMinisterial decisions affecting legal rights usually:\n- Are published on gov.uk\n- Appear in Hansard (if announced to Parliament)\n- May be obtained via FOI\n\nFor judicial review of ministerial decisions:\n- Time limit: promptly, at most 3 months\n- Pre-action protocol applies\n- Permission required"
    )
}

/// List every department and its gov.uk surfaces.
pub fn list_departments() -> String {
    let mut result = String::from("Government Departments - Decision Functions\n\n");

    for dept in DEPARTMENTS {
        result.push_str(&format!("{}: {}\n", dept.code.to_uppercase(), dept.name));
        result.push_str(&format!(
            "  Gov.uk: {GOV_UK_BASE}/government/organisations/{}\n",
            dept.slug
        ));
        result.push_str(&format!(
            "  Publications: {GOV_UK_BASE}/government/publications?organisations[]={}\n\n",
            dept.slug
        ));
    }

    result.push_str(
        "\nOther relevant bodies:\n\nHMCTS (Courts and Tribunals):\nhttps://www.gov.uk/government/organisations/hm-courts-and-tribunals-service\n\nPlanning Inspectorate:\nhttps://www.gov.uk/government/organisations/planning-inspectorate\n\nOffice of the Public Guardian:\nhttps://www.gov.uk/government/organisations/office-of-the-public-guardian\n\nLegal Aid Agency:\nhttps://www.gov.uk/government/organisations/legal-aid-agency\n\nCQC (Care Quality Commission):\nhttps://www.cqc.org.uk",
    );

    result
}

// ── Specific decision types ────────────────────────────────────────────────

/// Ordinary residence dispute determinations by DHSC.
pub fn get_ordinary_residence_decisions() -> String {
    format!(
        "Ordinary Residence Determinations\n\nDHSC determines disputes about:\n- Which local authority is responsible under Care Act 2014\n- Which area is responsible for s.117 MHA aftercare\n\nLegal framework:\n- Care Act 2014, s.40 (Care Act disputes)\n- Mental Health Act 1983, s.117 (aftercare disputes)\n- Care Act Statutory Guidance, Chapter 17\n\nKey principles (Shah v Barnet):\n- Ordinary residence = voluntarily adopted abode\n- Settled purpose for the time being\n- Part of regular order of life\n\nDHSC determinations:\n{GOV_UK_BASE}/government/collections/ordinary-residence-guidance\n\nPublished determinations provide precedent for:\n- Application of deeming provisions\n- Treatment of hospital placements\n- Effect of care home placements\n- Cross-border issues\n\nRelated case law:\n- R (Cornwall Council) v SoS for Health [2015] UKSC 46\n- R (Worcestershire CC) v SoS for Health [2023] UKSC 31 (s.117)\n\nProcess:\n1. Dispute arises between authorities\n2. Both authorities provide evidence\n3. SoS (DHSC) determines which authority is responsible\n4. Decision is binding (subject to JR)\n\nFor live disputes:\nContact DHSC ordinary residence team"
    )
}

/// Guidance on s.117 MHA aftercare responsibility disputes.
pub fn get_s117_dispute_guidance() -> String {
    format!(
        "Section 117 MHA Aftercare Disputes\n\nDHSC determines disputes about s.117 responsibility.\n\nLegal framework:\n- Mental Health Act 1983, s.117(3)\n- As amended by Care Act 2014\n\nKey question: Where was the patient ordinarily resident\nimmediately before detention under a qualifying section?\n\nQualifying sections: 3, 37, 45A, 47, 48\n\nKey case law:\n- R (Worcestershire CC) v SoS for Health [2023] UKSC 31\n  * Responsibility can transfer if OR changes after discharge\n  * \"Snapshot at discharge\" principle\n  * Hospital stay does not establish OR\n\n- R (Sunderland CC) v South Tyneside Council [2012] EWCA Civ 1232\n\nDHSC guidance:\n{GOV_UK_BASE}/government/publications/mental-health-act-1983-code-of-practice\n(Chapter 22: After-care)\n\nCare Act guidance on OR:\n{GOV_UK_BASE}/government/publications/care-act-statutory-guidance\n(Chapter 17)\n\nDispute process:\n1. Both CCGs/local authorities refer to DHSC\n2. Evidence submitted by both parties\n3. DHSC determination issued\n4. Binding subject to judicial review\n\nNote: DHSC determinations on s.117 are relatively rare;\nmany disputes settle through negotiation."
    )
}

/// DfE education decisions.
pub fn get_education_decisions() -> String {
    format!(
        "Department for Education Decisions\n\nDfE makes decisions on:\n\nSchool Organisation:\n- Academy conversions\n- Free school applications\n- School closures and openings\n- Significant changes to schools\n\nSchool Complaints:\n- Academy complaints (after ESFA review)\n- Independent school regulation\n\nSEND:\n- Upper Tribunal appeals on points of law\n- Compliance with tribunal orders\n\nPublished decisions:\n{GOV_UK_BASE}/government/publications?organisations[]=department-for-education\n\nAcademy complaints:\n{GOV_UK_BASE}/government/organisations/education-and-skills-funding-agency\n\nRegional Schools Commissioners:\nNow part of regional DfE teams\n\nSchool organisation decisions include:\n- Opening/closing schools\n- Changes to age range\n- Changes to capacity\n- Academy orders\n\nSEND Tribunal (First-tier):\nAppeals about EHC plans go to FTT (SEND), not SoS.\n{GOV_UK_BASE}/courts-tribunals/first-tier-tribunal-special-educational-needs-and-disability"
    )
}

/// DLUHC planning, compulsory purchase, and local government decisions.
pub fn get_dluhc_decisions() -> String {
    format!(
        "Department for Levelling Up, Housing and Communities Decisions\n\nDLUHC (formerly MHCLG) makes decisions on:\n\nPlanning:\n- Called-in applications (s.77 TCPA 1990)\n- Recovered appeals\n- National infrastructure projects\nSee: Planning Inspectorate tools\n\nCompulsory Purchase:\n- CPO confirmations\n- Highways orders\n{GOV_UK_BASE}/government/collections/compulsory-purchase-system-guidance\n\nLocal Government:\n- Structural changes\n- Electoral arrangements\n- Financial matters\n\nHousing:\n- Social housing regulation\n- Right to Buy matters\n\nPublished decisions:\n{GOV_UK_BASE}/government/publications?organisations[]=department-for-levelling-up-housing-and-communities\n\nFor planning decisions specifically:\nhttps://www.gov.uk/government/organisations/planning-inspectorate\n\nLocal Government Boundary Commission:\nhttps://www.lgbce.org.uk"
    )
}

/// Index of the SoS decision operations.
pub fn sos_decisions_index() -> String {
    format!(
        "Secretary of State Decisions - Index\n\nSEARCH ALL DECISIONS\n- search_sos_decisions(query, department) - General search\n- search_ministerial_decisions(query) - Ministerial decisions\n- get_sos_decision(reference) - Specific decision lookup\n\nHEALTH AND SOCIAL CARE\n- get_ordinary_residence_decisions() - OR disputes\n- get_s117_dispute_guidance() - s.117 MHA disputes\n\nEDUCATION\n- get_education_decisions() - DfE decisions\n\nHOUSING AND PLANNING\n- get_dluhc_decisions() - DLUHC decisions\n- (For planning appeals, use the planning functions)\n\nDEPARTMENT INFORMATION\n- list_departments() - All departments\n\nAPPEALS FROM SOS DECISIONS\nMost SoS decisions can be challenged by judicial review:\n- Time limit: Promptly, at most 3 months\n- Court: Administrative Court (EWHC Admin)\n- Permission required\n- Pre-action protocol applies\n\nPublished decisions: {GOV_UK_BASE}/government/publications\n\nFOI requests for unpublished decisions:\nhttps://www.gov.uk/make-a-freedom-of-information-request"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_without_department_has_no_organisation_filter() {
        let text = search_sos_decisions("ordinary residence", None);
        assert!(text.contains(
            "Search: https://www.gov.uk/search/all?q=ordinary%20residence&filter_content_purpose_supergroup=government"
        ));
        assert!(!text.contains("filter_organisations"));
        assert!(!text.contains("\nDepartment:"));
    }

    #[test]
    fn known_department_filters_and_echoes() {
        let text = search_sos_decisions("s117", Some("DHSC"));
        assert!(text.contains(
            "&filter_organisations%5B%5D=department-of-health-and-social-care"
        ));
        assert!(text.contains("\nDepartment: Department of Health and Social Care"));
    }

    #[test]
    fn padded_department_filters_url_but_skips_echo() {
        let text = search_sos_decisions("s117", Some(" dhsc "));
        assert!(text.contains(
            "&filter_organisations%5B%5D=department-of-health-and-social-care"
        ));
        assert!(!text.contains("\nDepartment:"));
    }

    #[test]
    fn unknown_department_is_ignored() {
        let text = search_sos_decisions("parole", Some("cabinet-office"));
        assert!(!text.contains("filter_organisations"));
        assert!(!text.contains("\nDepartment:"));
    }

    #[test]
    fn decision_lookup_encodes_the_reference() {
        let text = get_sos_decision("OR 2024/15");
        assert!(text.contains("Search: https://www.gov.uk/search/all?q=OR%202024%2F15"));
    }

    #[test]
    fn ministerial_search_shares_the_filter_logic() {
        let text = search_ministerial_decisions("direction", Some("moj"));
        assert!(text.contains("&filter_organisations%5B%5D=ministry-of-justice"));
        assert!(text.contains("- Time limit: promptly, at most 3 months"));
    }

    #[test]
    fn department_listing_keeps_literal_bracket_keys() {
        let text = list_departments();
        assert!(text.contains("DHSC: Department of Health and Social Care"));
        assert!(text.contains(
            "  Publications: https://www.gov.uk/government/publications?organisations[]=department-for-work-pensions"
        ));
        assert!(text.ends_with("https://www.cqc.org.uk"));
    }

    #[test]
    fn ordinary_residence_cites_the_leading_cases() {
        let text = get_ordinary_residence_decisions();
        assert!(text.contains("Key principles (Shah v Barnet):"));
        assert!(text.contains("- R (Cornwall Council) v SoS for Health [2015] UKSC 46"));
    }

    #[test]
    fn s117_guidance_lists_qualifying_sections() {
        let text = get_s117_dispute_guidance();
        assert!(text.contains("Qualifying sections: 3, 37, 45A, 47, 48"));
        assert!(text.contains("[2023] UKSC 31"));
    }

    #[test]
    fn index_signposts_judicial_review() {
        let text = sos_decisions_index();
        assert!(text.contains("- Court: Administrative Court (EWHC Admin)"));
        assert!(text.ends_with("https://www.gov.uk/make-a-freedom-of-information-request"));
    }
}
