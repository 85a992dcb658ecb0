//! Planning Inspectorate appeals, called-in decisions, and NSIPs.
//!
//! Appeal decisions live behind the Appeals Casework Portal search form, so
//! these operations link to the portal and explain the reference format
//! rather than deep-linking individual decision letters.

pub const PINS_BASE: &str = "https://www.gov.uk/government/organisations/planning-inspectorate";
pub const APPEALS_SEARCH: &str = "https://acp.planninginspectorate.gov.uk";
pub const NATIONAL_INFRASTRUCTURE: &str = "https://infrastructure.planninginspectorate.gov.uk";

/// Appeal categories the Inspectorate handles, keyed by short code.
pub static APPEAL_TYPES: &[(&str, &str)] = &[
    ("householder", "Householder planning appeals (HAS procedure)"),
    ("full_planning", "Full planning appeals (written reps, hearing, inquiry)"),
    ("enforcement", "Enforcement notice appeals"),
    ("listed_building", "Listed building and conservation area appeals"),
    ("advertisement", "Advertisement consent appeals"),
    ("ldc", "Lawful development certificate appeals"),
    ("trees", "Tree preservation order appeals"),
    ("rights_of_way", "Public rights of way orders"),
    ("compulsory_purchase", "Compulsory purchase order inquiries"),
];

/// Search Planning Inspectorate appeal decisions.
///
/// The casework portal has no stable query-string interface, so the filters
/// are echoed back as search criteria for the caller to enter.
pub fn search_planning_appeals(
    query: &str,
    location: Option<&str>,
    appeal_type: Option<&str>,
    decision: Option<&str>,
) -> String {
    let search_url = format!("{APPEALS_SEARCH}/pap/search");

    let mut result = format!(
        "Planning Inspectorate Appeal Decisions\n\nAppeals Casework Portal: {search_url}\n\nSearching for: {query}"
    );
    if let Some(location) = location {
        result.push_str(&format!("\nLocation: {location}"));
    }
    if let Some(appeal_type) = appeal_type {
        result.push_str(&format!("\nType: {appeal_type}"));
    }
    if let Some(decision) = decision {
        result.push_str(&format!("\nOutcome: {decision}"));
    }

    result.push_str(&format!(
        "\n\nThe Planning Inspectorate handles:\n- Planning appeals (s.78 TCPA 1990)\n- Enforcement appeals (s.174 TCPA 1990)\n- Listed building consent appeals\n- Advertisement consent appeals\n- Lawful development certificate appeals\n- Tree preservation order appeals\n\nAppeal procedures:\n- Written representations (most common)\n- Hearing (for local/expert views)\n- Inquiry (for complex/significant cases)\n\nHow to search:\n1. Go to {search_url}\n2. Enter search criteria (reference, location, keywords)\n3. Filter by date range, appeal type, decision\n\nDecision letters include:\n- Inspector's assessment of main issues\n- Application of planning policies\n- Planning balance\n- Formal decision\n\nThese decisions are persuasive (not binding) but demonstrate\nhow planning policies are applied in practice.\n\nAppeal types:\n"
    ));
    for (code, description) in APPEAL_TYPES {
        result.push_str(&format!("- {code}: {description}\n"));
    }

    result
}

/// Explain how to find one appeal decision by its PINS reference.
pub fn get_planning_decision(reference: &str) -> String {
    let search_url = format!("{APPEALS_SEARCH}/pap/search");

    format!(
        "Planning Appeal Decision\n\nReference: {reference}\nSearch Portal: {search_url}\n\nEnter the appeal reference in the search box to find the decision.\n\nReference format explained:\n- APP = Appeal\n- X1234 = Local Planning Authority code\n- W = Appeal type (W = s.78 planning, C = enforcement, etc.)\n- 23 = Year (20XX)\n- 1234567 = Case number\n\nDecision types:\n- Allowed: Appeal succeeds, permission granted\n- Dismissed: Appeal fails, refusal upheld\n- Part allowed/dismissed: Split decision\n- Withdrawn: Appellant withdrew appeal\n- Invalid: Appeal not accepted\n\nThe decision letter is the key document - it contains the\nInspector's full reasoning.\n\nIf you have a specific LPA reference rather than PINS reference,\nsearch by the site address or LPA case number."
    )
}

/// Secretary of State decisions on called-in applications and recovered appeals.
pub fn search_sos_planning_decisions(query: &str) -> String {
    let search_url = format!(
        "{PINS_BASE}/collections/planning-recovered-appeals-and-called-in-planning-applications"
    );

    format!(
        "Secretary of State Planning Decisions\n\nSoS decisions collection: {search_url}\n\nSearching for: {query}\n\nThe Secretary of State decides:\n\nCalled-in applications (s.77 TCPA 1990):\n- Applications of more than local importance\n- Major controversial developments\n- Those involving significant government policy issues\n\nRecovered appeals:\n- Appeals recovered from Inspectors for SoS decision\n- Usually where significant policy issues arise\n\nThe process:\n1. Inquiry held by Planning Inspector\n2. Inspector provides report and recommendation\n3. SoS makes final decision (may agree or disagree with Inspector)\n\nSoS decision letters are published on gov.uk with:\n- Inspector's report\n- SoS's decision letter\n- Any direction under Article 31\n\nRecent SoS decisions:\n{search_url}\n\nThese decisions carry significant weight as they represent\ngovernment interpretation of planning policy."
    )
}

/// Called-in planning applications and the call-in criteria.
pub fn search_called_in_decisions(query: &str) -> String {
    format!(
        "Called-in Planning Applications\n\nCalled-in decisions: {PINS_BASE}/collections/planning-recovered-appeals-and-called-in-planning-applications\n\nSearching for: {query}\n\nCall-in criteria (updated 2024):\nThe SoS may call in applications which:\n- May conflict with national planning policies\n- May have significant effects beyond the LPA area\n- Give rise to significant regional or national controversy\n- May set precedent on significant matters\n- Involve significant architectural or urban design issues\n\nThe call-in process:\n1. LPA receives application\n2. Direction issued to refer to SoS (instead of determining locally)\n3. Written reps/hearing/inquiry held\n4. Inspector reports to SoS\n5. SoS decides (allows or refuses)\n\nCalled-in decisions are fully reasoned and represent government\npolicy application. They are persuasive in future appeals.\n\nStatistics on call-ins:\nhttps://www.gov.uk/government/statistics/planning-inspectorate-statistics\n\nRelated resources:\n- Planning policy: https://www.gov.uk/government/collections/planning-practice-guidance\n- NPPF: https://www.gov.uk/government/publications/national-planning-policy-framework--2"
    )
}

/// The NSIP regime under the Planning Act 2008.
pub fn get_national_infrastructure() -> String {
    format!(
        "Nationally Significant Infrastructure Projects (NSIPs)\n\nNSIP Database: {NATIONAL_INFRASTRUCTURE}\n\nNSIPs include:\n- Power stations (over 50MW onshore, 100MW offshore)\n- Electricity lines (132kV and above)\n- Gas pipelines (over 48\")\n- Harbours (over £250m)\n- Railways\n- Highways\n- Airports\n- Water transfers and reservoirs\n- Hazardous waste facilities\n\nProcess:\n1. Pre-application consultation\n2. Acceptance of application\n3. Pre-examination\n4. Examination (6 months)\n5. Recommendation\n6. Decision by SoS\n\nAll documents, representations, and examinations are published:\n{NATIONAL_INFRASTRUCTURE}\n\nKey documents:\n- Application documents\n- Examining Authority reports\n- SoS decision letters\n- Development Consent Orders (DCOs)\n\nPlanning Act 2008 governs NSIPs.\n\nSearch projects:\n{NATIONAL_INFRASTRUCTURE}/projects"
    )
}

/// Procedural guides and appeal timetables.
pub fn get_planning_inspectorate_guidance() -> String {
    format!(
        "Planning Inspectorate Guidance\n\nProcedural guidance:\n{PINS_BASE}/publications?keywords=procedural+guide\n\nKey guidance documents:\n\nAppeals:\n- Procedural Guide: Planning Appeals - England\n- Householder appeals guidance\n- Enforcement appeals guidance\n\nHearings and Inquiries:\n- Guide to hearings and inquiries\n- Inquiry procedure rules\n\nCosts:\n- Award of costs guidance\n- Unreasonable behaviour guidance\n\nStatement of case:\n- How to prepare your appeal\n- What to include in statements\n\nTimetables:\n- Householder appeals: 8 weeks\n- Written representations: 12-16 weeks\n- Hearings: 16-20 weeks\n- Inquiries: 24+ weeks (depending on complexity)\n\nStatistics and performance:\n{PINS_BASE}/statistics\n\nNational Planning Policy:\n- NPPF: https://www.gov.uk/government/publications/national-planning-policy-framework--2\n- Planning Practice Guidance: https://www.gov.uk/government/collections/planning-practice-guidance\n\nUse Our Land registry: https://www.gov.uk/search-property-information-land-registry"
    )
}

/// Index of planning law resources.
pub fn list_planning_resources() -> String {
    format!(
        "Planning Law Resources Index\n\nPLANNING INSPECTORATE\nMain site: {PINS_BASE}\nAppeals search: {APPEALS_SEARCH}/pap/search\nNSIPs: {NATIONAL_INFRASTRUCTURE}\n\nAPPEAL DECISIONS\n- search_planning_appeals() - Search appeal decisions\n- get_planning_decision() - Get specific appeal decision\n\nSECRETARY OF STATE DECISIONS\n- search_sos_planning_decisions() - Called-in and recovered appeals\n- search_called_in_decisions() - Called-in applications\n\nNATIONAL INFRASTRUCTURE\n- get_national_infrastructure() - NSIP database\n\nGUIDANCE\n- get_planning_inspectorate_guidance() - Procedural guides\n\nLEGISLATION\n- Town and Country Planning Act 1990\n  https://www.legislation.gov.uk/ukpga/1990/8/contents\n- Planning Act 2008 (NSIPs)\n  https://www.legislation.gov.uk/ukpga/2008/29/contents\n- Planning and Compulsory Purchase Act 2004\n  https://www.legislation.gov.uk/ukpga/2004/5/contents\n\nPOLICY\n- National Planning Policy Framework (NPPF)\n  https://www.gov.uk/government/publications/national-planning-policy-framework--2\n- Planning Practice Guidance\n  https://www.gov.uk/government/collections/planning-practice-guidance\n\nLOCAL PLANS\n- Search local authority websites for:\n  - Local Plans / Development Plan Documents\n  - Supplementary Planning Documents\n  - Neighbourhood Plans\n\nCASE LAW\nFor planning judicial reviews, search:\n- EWHC (Admin): https://caselaw.nationalarchives.gov.uk/courts/ewhc/admin\n- Court of Appeal: https://caselaw.nationalarchives.gov.uk/courts/ewca/civ\n\nCommon grounds for JR:\n- Failure to take material consideration into account\n- Taking irrelevant consideration into account\n- Failure to give adequate reasons\n- Irrationality (Wednesbury unreasonableness)"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appeal_search_echoes_every_filter() {
        let text = search_planning_appeals(
            "green belt",
            Some("Surrey"),
            Some("enforcement"),
            Some("dismissed"),
        );
        assert!(text.contains("Searching for: green belt"));
        assert!(text.contains("\nLocation: Surrey"));
        assert!(text.contains("\nType: enforcement"));
        assert!(text.contains("\nOutcome: dismissed"));
        assert!(text.contains("https://acp.planninginspectorate.gov.uk/pap/search"));
    }

    #[test]
    fn appeal_search_lists_all_nine_types() {
        let text = search_planning_appeals("change of use", None, None, None);
        for (code, _) in APPEAL_TYPES {
            assert!(text.contains(&format!("- {code}: ")), "missing {code}");
        }
        assert!(text.ends_with("- compulsory_purchase: Compulsory purchase order inquiries\n"));
    }

    #[test]
    fn decision_lookup_explains_the_reference_format() {
        let text = get_planning_decision("APP/X1234/W/23/1234567");
        assert!(text.contains("Reference: APP/X1234/W/23/1234567"));
        assert!(text.contains("- X1234 = Local Planning Authority code"));
    }

    #[test]
    fn sos_decisions_link_the_collection_twice() {
        let text = search_sos_planning_decisions("data centre");
        let url = "planning-recovered-appeals-and-called-in-planning-applications";
        assert_eq!(text.matches(url).count(), 2);
        assert!(text.contains("Called-in applications (s.77 TCPA 1990):"));
    }

    #[test]
    fn nsip_text_names_the_2008_act() {
        let text = get_national_infrastructure();
        assert!(text.contains("Planning Act 2008 governs NSIPs."));
        assert!(text.contains("https://infrastructure.planninginspectorate.gov.uk/projects"));
    }

    #[test]
    fn guidance_keeps_the_prebuilt_keyword_query() {
        let text = get_planning_inspectorate_guidance();
        assert!(text.contains("/publications?keywords=procedural+guide"));
    }

    #[test]
    fn resources_index_links_the_three_acts() {
        let text = list_planning_resources();
        assert!(text.contains("https://www.legislation.gov.uk/ukpga/1990/8/contents"));
        assert!(text.contains("https://www.legislation.gov.uk/ukpga/2008/29/contents"));
        assert!(text.contains("https://www.legislation.gov.uk/ukpga/2004/5/contents"));
    }
}
