//! UK ombudsman decision databases.
//!
//! Five schemes matter for legal research: the Local Government and Social
//! Care Ombudsman, the Housing Ombudsman, the Parliamentary and Health
//! Service Ombudsman, the Financial Ombudsman Service, and the Legal
//! Ombudsman. Each site structures its decisions differently, so reference
//! lookups go through each site's own search rather than direct URLs.

pub const LGO_BASE: &str = "https://www.lgo.org.uk";
pub const HOUSING_OMB_BASE: &str = "https://www.housing-ombudsman.org.uk";
pub const PHSO_BASE: &str = "https://www.ombudsman.org.uk";
pub const FOS_BASE: &str = "https://www.financial-ombudsman.org.uk";
pub const LEO_BASE: &str = "https://www.legalombudsman.org.uk";

// ── LGO ────────────────────────────────────────────────────────────────────

/// Search LGO decisions. Council and category are echoed for context; the
/// decisions site carries its own filters.
pub fn search_lgo(query: &str, council: Option<&str>, category: Option<&str>) -> String {
    let search_url = format!("{LGO_BASE}/decisions/?q={}", urlencoding::encode(query));

    let mut result = format!(
        "Local Government and Social Care Ombudsman (LGO) Decisions\n\nSearch: {search_url}\n\nSearching for: {query}"
    );
    if let Some(council) = council {
        result.push_str(&format!("\nCouncil: {council}"));
    }
    if let Some(category) = category {
        result.push_str(&format!("\nCategory: {category}"));
    }

    result.push_str(&format!(
        "\n\nThe LGO investigates complaints about:\n- Council services (all departments)\n- Adult social care (care homes, home care, assessments)\n- Children's services\n- Education (school admissions, SEND)\n- Housing (homelessness, allocations, repairs)\n- Planning and building control\n- Environmental health\n- Benefits administration\n- Complaint handling\n\nCategories for filtering:\n- Adult care services\n- Benefits and tax\n- Children's services\n- Corporate and other services\n- Education\n- Environment services\n- Highways and transport\n- Housing\n- Planning and development\n\nDecision database: {LGO_BASE}/decisions/\nStatistics and reports: {LGO_BASE}/information-centre/\n\nNote: LGO decisions establish good administrative practice standards.\nFinding of 'maladministration causing injustice' requires remedy."
    ));

    result
}

/// Find one LGO decision by case reference.
pub fn get_lgo_decision(case_reference: &str) -> String {
    // The decisions search takes the reference with plus signs for spaces.
    let ref_clean = case_reference.trim().replace(' ', "+");
    let search_url = format!("{LGO_BASE}/decisions/?q={ref_clean}");

    format!(
        "LGO Decision Search\n\nReference: {case_reference}\nSearch: {search_url}\n\nIf the reference is correct, the decision should appear in search results.\n\nLGO decisions include:\n- Summary of complaint\n- What the Ombudsman found\n- Whether there was fault/maladministration\n- Whether fault caused injustice\n- Recommended remedy\n\nTo cite an LGO decision:\n\"LGO Decision [reference], [date]\"\n\nDecisions are persuasive but not binding - they establish standards\nof good administrative practice for local authorities."
    )
}

/// LGO focus reports, annual reviews, and council statistics.
pub fn get_lgo_focus_reports() -> String {
    format!(
        "LGO Focus Reports and Guidance\n\nFocus Reports (thematic reviews):\n{LGO_BASE}/information-centre/focus-reports/\n\nKey recent focus reports include topics like:\n- Adult social care\n- Children's services\n- Homelessness\n- School admissions\n- Complaint handling\n\nAnnual Review:\n{LGO_BASE}/information-centre/annual-reviews/\n\nCouncil statistics:\n{LGO_BASE}/information-centre/councils-performance/\n\nGuidance for councils:\n{LGO_BASE}/information-centre/\n\nGood practice guides on:\n- Running a complaints procedure\n- Handling remedies\n- Learning from complaints\n\nThese reports are useful for:\n- Understanding LGO expectations\n- Defending judicial reviews\n- Improving council practices\n- Training staff"
    )
}

// ── Housing Ombudsman ──────────────────────────────────────────────────────

/// Search Housing Ombudsman decisions.
pub fn search_housing_ombudsman(query: &str) -> String {
    format!(
        "Housing Ombudsman Decisions\n\nDecisions database: {HOUSING_OMB_BASE}/decisions/\n\nSearching for: {query}\n\nThe Housing Ombudsman investigates complaints about:\n- Social landlords (housing associations, councils as landlords)\n- Repairs and maintenance\n- Antisocial behaviour handling\n- Complaint handling\n- Service charges (for some tenancies)\n- Tenant engagement\n\nNOT covered:\n- Private landlords (use local authority/courts)\n- Right to Buy disputes\n- Rent levels\n\nCategories:\n- Repairs\n- Antisocial behaviour\n- Complaint handling\n- Property condition\n- Staff conduct\n- Communication\n- Record keeping\n\nThe Housing Ombudsman uses a severity scale:\n- No maladministration\n- Service failure (minor issues)\n- Maladministration\n- Severe maladministration\n\nLandlord performance reports:\n{HOUSING_OMB_BASE}/landlords/\n\nComplaint handling code:\n{HOUSING_OMB_BASE}/landlords/complaint-handling-code/"
    )
}

/// Find one Housing Ombudsman decision by case reference.
pub fn get_housing_ombudsman_decision(case_reference: &str) -> String {
    format!(
        "Housing Ombudsman Decision\n\nReference: {case_reference}\n\nSearch the decisions database:\n{HOUSING_OMB_BASE}/decisions/\n\nEnter the reference number in the search box to find the specific case.\n\nHousing Ombudsman decisions include:\n- Background to the complaint\n- Assessment of each issue\n- Finding (maladministration/service failure/no maladministration)\n- Orders and recommendations\n\nFindings can be used to:\n- Support similar complaints\n- Evidence systemic failures\n- Demonstrate landlord non-compliance with Code"
    )
}

// ── PHSO ───────────────────────────────────────────────────────────────────

/// Search PHSO publications and reports.
pub fn search_phso(query: &str) -> String {
    format!(
        "Parliamentary and Health Service Ombudsman (PHSO)\n\nPublications and reports: {PHSO_BASE}/publications/\n\nSearching for: {query}\n\nPHSO investigates complaints about:\n\nNHS bodies:\n- Hospitals (NHS Trusts and Foundation Trusts)\n- GPs, dentists, pharmacists\n- Clinical Commissioning Groups / ICBs\n- NHS England\n- Mental health trusts\n- Ambulance services\n\nGovernment departments and agencies:\n- DWP (benefits decisions, PIP, UC)\n- HMRC\n- Home Office (immigration)\n- DVLA\n- Passport Office\n- Other central government bodies\n\nNOT covered:\n- Local authorities (use LGO)\n- Private healthcare\n- Social care (use LGO)\n\nPHSO's role:\n- Final stage of complaints process\n- Complainant must exhaust NHS/departmental complaints first\n- Can recommend financial remedy\n- Can require service improvements\n\nKey publications:\n- Case summaries: {PHSO_BASE}/publications/\n- Investigation reports\n- Systemic investigation reports\n- Annual report\n\nPrinciples of Good Administration:\n{PHSO_BASE}/making-a-complaint/"
    )
}

/// Find one PHSO decision or publication.
pub fn get_phso_decision(case_reference: &str) -> String {
    let search_url = format!(
        "{PHSO_BASE}/publications/?search={}",
        urlencoding::encode(case_reference)
    );

    format!(
        "PHSO Decision/Publication Search\n\nReference: {case_reference}\nSearch: {search_url}\n\nPHSO publishes:\n- Individual investigation summaries\n- Thematic reports\n- Systemic investigation reports\n\nFor individual cases, PHSO may not publish full details but provides\nsummaries on specific topics.\n\nCasework statistics:\n{PHSO_BASE}/making-a-complaint/data/\n\nContact PHSO:\n{PHSO_BASE}/making-a-complaint/"
    )
}

// ── Financial Ombudsman Service ────────────────────────────────────────────

/// Search FOS decisions, optionally narrowed to one firm.
pub fn search_financial_ombudsman(query: &str, firm: Option<&str>) -> String {
    let mut search_url = format!("{FOS_BASE}/decisions/?query={}", urlencoding::encode(query));
    if let Some(firm) = firm {
        search_url.push_str(&format!("&firm={}", urlencoding::encode(firm)));
    }

    let mut result = format!(
        "Financial Ombudsman Service (FOS) Decisions\n\nSearch: {search_url}\n\nSearching for: {query}"
    );
    if let Some(firm) = firm {
        result.push_str(&format!("\nFirm: {firm}"));
    }

    result.push_str(&format!(
        "\n\nFOS investigates complaints about:\n- Banks and building societies\n- Insurance companies\n- Investment firms\n- Pension providers\n- Credit and loans\n- Payment services\n- Debt collection\n- Financial advisers\n\nProduct types:\n- Current accounts\n- Savings accounts\n- Mortgages\n- Credit cards\n- Loans\n- Pensions\n- Investments\n- Insurance (all types)\n- PPI\n\nDecisions database:\n{FOS_BASE}/decisions/\n\nFOS can award up to £415,000 (for complaints after April 2023).\n\nOmbudsman news (case studies and guidance):\n{FOS_BASE}/businesses/resolving-complaints/ombudsman-news/\n\nComplaint data by firm:\n{FOS_BASE}/data-and-research/our-data/"
    ));

    result
}

/// Find one FOS decision by reference number.
pub fn get_fos_decision(case_reference: &str) -> String {
    let search_url = format!(
        "{FOS_BASE}/decisions/?query={}",
        urlencoding::encode(case_reference)
    );

    format!(
        "Financial Ombudsman Decision\n\nReference: {case_reference}\nSearch: {search_url}\n\nFOS decisions include:\n- Summary of complaint\n- Firm's response\n- Ombudsman's findings\n- Award (if applicable)\n\nFOS decisions are binding on the firm if accepted by the complainant.\nComplainant can reject the decision and pursue court action.\n\nFOS decisions are anonymised but searchable by:\n- Product type\n- Issue type\n- Outcome\n- Date range\n\nThese decisions establish industry practice standards."
    )
}

// ── Legal Ombudsman ────────────────────────────────────────────────────────

/// Search Legal Ombudsman information and decisions.
pub fn search_legal_ombudsman(query: &str) -> String {
    format!(
        "Legal Ombudsman (LeO)\n\nInformation centre: {LEO_BASE}/information-centre/\n\nSearching for: {query}\n\nThe Legal Ombudsman investigates complaints about:\n- Solicitors\n- Barristers\n- Licensed conveyancers\n- Legal executives (CILEx)\n- Costs lawyers\n- Patent and trade mark attorneys\n- Notaries\n- Claims management companies\n\nCommon complaint types:\n- Poor communication\n- Costs and bills\n- Delay\n- Failure to follow instructions\n- Poor quality of work\n- Loss of documents\n\nLeO can award up to £50,000.\n\nNote: LeO handles service complaints. For professional misconduct,\ncontact the relevant regulator (SRA for solicitors, BSB for barristers).\n\nDecision data:\n{LEO_BASE}/raising-standards/data-and-decisions/\n\nGuidance for legal professionals:\n{LEO_BASE}/for-lawyers/\n\nHow to complain:\n{LEO_BASE}/how-to-complain/\n\nTime limits:\n- Within 6 years of the act/omission\n- Within 3 years of when complainant knew about it\n- Within 1 year of completing the firm's complaints procedure"
    )
}

/// Legal Ombudsman decision data for one reference.
pub fn get_leo_decision(case_reference: &str) -> String {
    format!(
        "Legal Ombudsman Decision Search\n\nReference: {case_reference}\n\nLeO decision data:\n{LEO_BASE}/raising-standards/data-and-decisions/\n\nLeO publishes:\n- Annual reports\n- Statistical data\n- Case studies (anonymised)\n- Thematic reports\n\nIndividual decisions are not routinely published in full, but\nanonymised case studies illustrate LeO's approach.\n\nFirst-tier Tribunal appeals:\nAppeals against LeO decisions go to the First-tier Tribunal\n(General Regulatory Chamber).\n\nFor specific case information:\nContact LeO directly: {LEO_BASE}/contact-us/"
    )
}

// ── Index ──────────────────────────────────────────────────────────────────

/// Index of every ombudsman scheme this crate links to.
pub fn list_ombudsman_services() -> String {
    format!(
        "UK Ombudsman Services Index\n\nLOCAL GOVERNMENT AND SOCIAL CARE OMBUDSMAN (LGO)\nWebsite: {LGO_BASE}\nDecisions: {LGO_BASE}/decisions/\nJurisdiction: Councils, adult social care, children's services, education, housing (LA)\nUse: search_lgo(), get_lgo_decision()\n\nHOUSING OMBUDSMAN\nWebsite: {HOUSING_OMB_BASE}\nDecisions: {HOUSING_OMB_BASE}/decisions/\nJurisdiction: Social landlords (housing associations, council housing)\nUse: search_housing_ombudsman(), get_housing_ombudsman_decision()\n\nPARLIAMENTARY AND HEALTH SERVICE OMBUDSMAN (PHSO)\nWebsite: {PHSO_BASE}\nPublications: {PHSO_BASE}/publications/\nJurisdiction: NHS bodies, government departments and agencies\nUse: search_phso(), get_phso_decision()\n\nFINANCIAL OMBUDSMAN SERVICE (FOS)\nWebsite: {FOS_BASE}\nDecisions: {FOS_BASE}/decisions/\nJurisdiction: Banks, insurers, investment firms, pension providers\nUse: search_financial_ombudsman(), get_fos_decision()\n\nLEGAL OMBUDSMAN (LeO)\nWebsite: {LEO_BASE}\nData: {LEO_BASE}/raising-standards/data-and-decisions/\nJurisdiction: Solicitors, barristers, licensed conveyancers, other legal providers\nUse: search_legal_ombudsman(), get_leo_decision()\n\nOTHER OMBUDSMAN SCHEMES\n\nPensions Ombudsman: https://www.pensions-ombudsman.org.uk\n- Workplace and personal pensions\n\nProperty Ombudsman: https://www.tpos.co.uk\n- Estate agents, lettings agents\n\nRemovals Ombudsman: https://www.removalsombudsman.org.uk\n- Removals companies\n\nMotor Ombudsman: https://www.themotorombudsman.org\n- Vehicle sales and servicing\n\nEnergy Ombudsman: https://www.energyombudsman.org\n- Gas and electricity suppliers\n\nCommunications Ombudsman: https://www.ombudsman-services.org/communications\n- Phone, broadband, postal services"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lgo_search_encodes_query_and_echoes_filters() {
        let text = search_lgo("care assessment", Some("Devon"), Some("adult care services"));
        assert!(text.contains("Search: https://www.lgo.org.uk/decisions/?q=care%20assessment"));
        assert!(text.contains("\nCouncil: Devon"));
        assert!(text.contains("\nCategory: adult care services"));
    }

    #[test]
    fn lgo_reference_joins_with_plus_signs() {
        let text = get_lgo_decision("22 001 234");
        assert!(text.contains("Search: https://www.lgo.org.uk/decisions/?q=22+001+234"));
        assert!(text.contains("Reference: 22 001 234"));
    }

    #[test]
    fn housing_search_links_the_static_database() {
        let text = search_housing_ombudsman("damp and mould");
        assert!(text.contains("Decisions database: https://www.housing-ombudsman.org.uk/decisions/"));
        assert!(text.contains("Searching for: damp and mould"));
        assert!(text.contains("- Severe maladministration"));
    }

    #[test]
    fn phso_reference_search_is_percent_encoded() {
        let text = get_phso_decision("treatment delay report");
        assert!(text.contains("/publications/?search=treatment%20delay%20report"));
    }

    #[test]
    fn fos_search_appends_the_firm_filter() {
        let text = search_financial_ombudsman("mortgage", Some("Halifax"));
        assert!(text.contains("/decisions/?query=mortgage&firm=Halifax"));
        assert!(text.contains("\nFirm: Halifax"));
    }

    #[test]
    fn fos_search_without_firm_has_no_filter() {
        let text = search_financial_ombudsman("PPI", None);
        assert!(text.contains("/decisions/?query=PPI\n"));
        assert!(!text.contains("&firm="));
    }

    #[test]
    fn leo_search_states_award_limit_and_time_limits() {
        let text = search_legal_ombudsman("costs");
        assert!(text.contains("LeO can award up to £50,000."));
        assert!(text.ends_with("- Within 1 year of completing the firm's complaints procedure"));
    }

    #[test]
    fn leo_decision_routes_appeals_to_the_grc() {
        let text = get_leo_decision("LEO-2024-1234");
        assert!(text.contains("First-tier Tribunal\n(General Regulatory Chamber)"));
    }

    #[test]
    fn index_covers_all_five_schemes_and_the_extras() {
        let text = list_ombudsman_services();
        for heading in [
            "LOCAL GOVERNMENT AND SOCIAL CARE OMBUDSMAN (LGO)",
            "HOUSING OMBUDSMAN",
            "PARLIAMENTARY AND HEALTH SERVICE OMBUDSMAN (PHSO)",
            "FINANCIAL OMBUDSMAN SERVICE (FOS)",
            "LEGAL OMBUDSMAN (LeO)",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Pensions Ombudsman: https://www.pensions-ombudsman.org.uk"));
    }
}
