//! The tool catalogue: definitions for `tools/list` and dispatch for
//! `tools/call`.
//!
//! Every tool resolves to one function in `lexlink_sources`. Arguments
//! arrive as a JSON object; missing or mistyped required arguments are the
//! caller's fault and surface as [`CallError::InvalidParams`], while
//! anything the source modules themselves can't make sense of (unknown
//! acts, unparseable citations) comes back as ordinary response text.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::info;

use lexlink_probe::{ProbeError, Prober};
use lexlink_sources::{
    bailii, caselaw, codes, companies, court_rules, forms, guidance, international,
    land_registry, legislation, ombudsman, parliament, planning, practice_directions,
    regulators, sos_decisions,
};

/// One entry in the `tools/list` catalogue.
#[derive(Debug, Serialize)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn tool(
    name: &'static str,
    description: &'static str,
    required: &[&str],
    properties: Value,
) -> ToolDef {
    ToolDef {
        name,
        description,
        input_schema: json!({
            "type": "object",
            "properties": properties,
            "required": required
        }),
    }
}

/// The full catalogue, in module order.
pub fn definitions() -> Vec<ToolDef> {
    vec![
        // ── legislation.gov.uk ─────────────────────────────────────────
        tool(
            "get_legislation",
            "Fetch a specific section of UK legislation from legislation.gov.uk.",
            &["act_title", "section"],
            json!({
                "act_title": {"type": "string", "description": "Name of the Act, e.g. \"Mental Capacity Act\""},
                "section": {"type": "string", "description": "Section number, e.g. \"3\" or \"21A\""},
                "year": {"type": "integer", "description": "Year of the Act, e.g. 2005"}
            }),
        ),
        tool(
            "search_legislation",
            "Search all UK legislation on legislation.gov.uk.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"deprivation of liberty\""},
                "legislation_type": {"type": "string", "description": "\"primary\" for Acts, \"secondary\" for SIs"}
            }),
        ),
        tool(
            "get_legislation_pdf_url",
            "Get the PDF download URL for a legislation section.",
            &["act_title", "section"],
            json!({
                "act_title": {"type": "string", "description": "Name of the Act"},
                "section": {"type": "string", "description": "Section number"},
                "year": {"type": "integer", "description": "Year of the Act"}
            }),
        ),
        // ── caselaw.nationalarchives.gov.uk ────────────────────────────
        tool(
            "search_cases",
            "Search UK case law on caselaw.nationalarchives.gov.uk (2003+). Courts: uksc, ewca/civ, ewca/crim, ewhc, ewcop, ewfc, ukut.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"best interests\""},
                "court": {"type": "string", "description": "Court code, e.g. \"ewcop\" or \"ewca/civ\""},
                "year": {"type": "integer", "description": "Filter by year, e.g. 2024"},
                "party": {"type": "string", "description": "Party name to search for"},
                "from_date": {"type": "string", "description": "Start date as YYYY-MM-DD"},
                "to_date": {"type": "string", "description": "End date as YYYY-MM-DD"}
            }),
        ),
        tool(
            "get_judgment",
            "Fetch a specific judgment by neutral citation, e.g. \"[2024] EWCOP 15\".",
            &["citation"],
            json!({
                "citation": {"type": "string", "description": "Neutral citation, e.g. \"[2024] EWCOP 15\""}
            }),
        ),
        tool(
            "get_judgment_pdf_url",
            "Get the PDF download URL for a judgment.",
            &["citation"],
            json!({
                "citation": {"type": "string", "description": "Neutral citation, e.g. \"[2024] EWCOP 15\""}
            }),
        ),
        // ── bailii.org ─────────────────────────────────────────────────
        tool(
            "search_bailii",
            "Search BAILII for UK case law, especially older cases and tribunals.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "database": {"type": "string", "description": "Database filter, e.g. \"ewcop\", \"ukhl\", \"mental health tribunal\""},
                "title_only": {"type": "boolean", "description": "Search case titles only"}
            }),
        ),
        tool(
            "search_tribunals",
            "Search BAILII tribunal decisions (UT chambers, EAT, FTT, mental health).",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "tribunal": {"type": "string", "description": "Tribunal code, e.g. \"aac\", \"eat\", \"mhlo\""},
                "year": {"type": "integer", "description": "Year to mention in the search note"}
            }),
        ),
        tool(
            "get_bailii_case",
            "Get the BAILII URL for a case by neutral citation; best for pre-2003 cases and tribunal decisions.",
            &["citation"],
            json!({
                "citation": {"type": "string", "description": "Neutral citation or bailii.org URL, e.g. \"[1999] UKHL 30\""}
            }),
        ),
        tool(
            "get_bailii_recent",
            "Link to the recent-decisions page on BAILII for a jurisdiction.",
            &[],
            json!({
                "jurisdiction": {"type": "string", "description": "\"ew\" (default), \"scot\", \"nie\", or \"uk\""}
            }),
        ),
        tool(
            "get_bailii_database_list",
            "List BAILII database codes for use with search_bailii.",
            &[],
            json!({}),
        ),
        // ── Procedure rules ────────────────────────────────────────────
        tool(
            "get_cpr",
            "Get a Part of the Civil Procedure Rules on justice.gov.uk.",
            &["part"],
            json!({
                "part": {"type": "string", "description": "Part number, e.g. \"54\""},
                "rule": {"type": "string", "description": "Rule within the Part, e.g. \"54.5\""}
            }),
        ),
        tool(
            "get_fpr",
            "Get a Part of the Family Procedure Rules 2010.",
            &["part"],
            json!({
                "part": {"type": "string", "description": "Part number, e.g. \"12\""},
                "rule": {"type": "string", "description": "Rule within the Part"}
            }),
        ),
        tool(
            "get_copr",
            "Get a Part of the Court of Protection Rules 2017 (SI 2017/1035).",
            &["part"],
            json!({
                "part": {"type": "string", "description": "Part number, e.g. \"20\""},
                "rule": {"type": "string", "description": "Rule within the Part"}
            }),
        ),
        tool(
            "get_tribunal_rules",
            "Get procedure rules for a tribunal (FTT chambers, Upper Tribunal, EAT).",
            &["tribunal"],
            json!({
                "tribunal": {"type": "string", "description": "Tribunal name or code, e.g. \"mental health\", \"grc\", \"ut-aac\""},
                "part": {"type": "string", "description": "Part or rule to look for"}
            }),
        ),
        tool(
            "search_rules",
            "Search across the procedure rule sets (CPR, FPR, COPR, tribunal rules).",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "ruleset": {"type": "string", "description": "\"cpr\", \"fpr\", \"copr\", or \"tribunal\""}
            }),
        ),
        tool(
            "get_rules_index",
            "Index of all UK procedure rules and their SI numbers.",
            &[],
            json!({}),
        ),
        // ── Practice directions ────────────────────────────────────────
        tool(
            "get_practice_direction",
            "Get a direct link to a Practice Direction. CoP PDs have direct PDF links.",
            &["pd_number"],
            json!({
                "pd_number": {"type": "string", "description": "PD code, e.g. \"4b\", \"10aa\", \"57ac\""},
                "court": {"type": "string", "description": "\"cop\", \"cpr\", or \"fpr\"; detected from the code when omitted"}
            }),
        ),
        tool(
            "search_practice_directions",
            "Search Practice Directions across CoP, CPR, and FPR by keyword.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Topic, e.g. \"deprivation of liberty\", \"witness statements\""}
            }),
        ),
        tool(
            "list_practice_directions",
            "List the Practice Directions known for one court.",
            &["court"],
            json!({
                "court": {"type": "string", "description": "\"cop\", \"cpr\", or \"fpr\""}
            }),
        ),
        tool(
            "get_judiciary_guidance",
            "Get judiciary.uk guidance on a topic (experts, McKenzie friends, remote hearings...).",
            &["topic"],
            json!({
                "topic": {"type": "string", "description": "Guidance topic, e.g. \"experts\", \"vulnerable witnesses\""}
            }),
        ),
        tool(
            "get_court_of_protection_guidance",
            "Combined Court of Protection practice resources: rules, PDs, key guidance.",
            &[],
            json!({}),
        ),
        // ── Court forms ────────────────────────────────────────────────
        tool(
            "search_court_forms",
            "Search official court forms by code, title, or description.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Form code or keywords, e.g. \"cop1\", \"deputy\""},
                "court": {"type": "string", "description": "Restrict to one set, e.g. \"family\", \"civil\""}
            }),
        ),
        tool(
            "get_form",
            "Get the gov.uk page for one court form by its code.",
            &["form_number"],
            json!({
                "form_number": {"type": "string", "description": "Form code, e.g. \"COP3\", \"N244\", \"C100\""}
            }),
        ),
        tool(
            "list_forms_by_court",
            "List the known forms for a court or context (cop, family, civil, lpa).",
            &["court"],
            json!({
                "court": {"type": "string", "description": "\"cop\", \"family\", \"civil\", or \"lpa\""}
            }),
        ),
        tool(
            "get_fee_information",
            "Court fee amounts and the help-with-fees scheme.",
            &[],
            json!({
                "court": {"type": "string", "description": "Unused filter, kept for compatibility"}
            }),
        ),
        tool(
            "forms_index",
            "Index of the form sets and where to find them.",
            &[],
            json!({}),
        ),
        // ── gov.uk guidance ────────────────────────────────────────────
        tool(
            "search_gov_guidance",
            "Search gov.uk for statutory guidance on a topic.",
            &["topic"],
            json!({
                "topic": {"type": "string", "description": "Topic, e.g. \"mental capacity\", \"safeguarding\""},
                "department": {"type": "string", "description": "Department filter, e.g. \"dhsc\", \"moj\""}
            }),
        ),
        tool(
            "get_statutory_guidance",
            "Get a direct link to a statutory guidance document, e.g. \"mca code\", \"care act guidance\".",
            &["name"],
            json!({
                "name": {"type": "string", "description": "Guidance name, e.g. \"mca code\", \"working together\""}
            }),
        ),
        tool(
            "get_court_forms",
            "Get the form collection for a context (cop, family, civil, lpa, dols, probate, tribunal).",
            &["form_type"],
            json!({
                "form_type": {"type": "string", "description": "Collection name, e.g. \"cop\", \"lpa\", \"dols\""}
            }),
        ),
        tool(
            "get_department_publications",
            "Link to a government department's publications feed on gov.uk.",
            &["department"],
            json!({
                "department": {"type": "string", "description": "Department name or abbreviation, e.g. \"moj\", \"home office\""}
            }),
        ),
        // ── Codes of practice ──────────────────────────────────────────
        tool(
            "get_mca_code",
            "Mental Capacity Act 2005 Code of Practice, whole or by chapter.",
            &[],
            json!({
                "chapter": {"type": "string", "description": "Chapter number 1-16"}
            }),
        ),
        tool(
            "get_dols_guidance",
            "Deprivation of Liberty Safeguards: the DoLS supplement and current practice.",
            &[],
            json!({}),
        ),
        tool(
            "get_care_act_guidance",
            "Care Act 2014 statutory guidance, whole or by chapter.",
            &[],
            json!({
                "chapter": {"type": "string", "description": "Chapter number 1-23"}
            }),
        ),
        tool(
            "get_mha_code",
            "Mental Health Act 1983 Code of Practice, whole or by chapter.",
            &[],
            json!({
                "chapter": {"type": "string", "description": "Chapter number 1-34"}
            }),
        ),
        tool(
            "get_send_code",
            "SEND Code of Practice 0-25, whole or by chapter.",
            &[],
            json!({
                "chapter": {"type": "string", "description": "Chapter number 1-11"}
            }),
        ),
        tool(
            "search_codes",
            "Find which statutory code covers a topic (capacity, safeguarding, s117...).",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Topic, e.g. \"best interests\", \"ordinary residence\""}
            }),
        ),
        tool(
            "list_all_codes",
            "Index of the statutory codes of practice.",
            &[],
            json!({}),
        ),
        // ── Companies House ────────────────────────────────────────────
        tool(
            "search_companies",
            "Search the Companies House register by company name.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Company name or keywords"}
            }),
        ),
        tool(
            "get_company",
            "Get the Companies House page for a company by number.",
            &["company_number"],
            json!({
                "company_number": {"type": "string", "description": "Company number, e.g. \"00000001\" or \"SC123456\""}
            }),
        ),
        tool(
            "get_company_filings",
            "Get a company's filing history.",
            &["company_number"],
            json!({
                "company_number": {"type": "string", "description": "Company number"}
            }),
        ),
        tool(
            "get_officers",
            "Get a company's officers (directors, secretaries).",
            &["company_number"],
            json!({
                "company_number": {"type": "string", "description": "Company number"}
            }),
        ),
        tool(
            "get_charges",
            "Get a company's registered charges (mortgages, debentures).",
            &["company_number"],
            json!({
                "company_number": {"type": "string", "description": "Company number"}
            }),
        ),
        tool(
            "get_psc",
            "Get a company's persons with significant control.",
            &["company_number"],
            json!({
                "company_number": {"type": "string", "description": "Company number"}
            }),
        ),
        tool(
            "search_disqualified_directors",
            "Search the disqualified directors register by name.",
            &["name"],
            json!({
                "name": {"type": "string", "description": "Director name"}
            }),
        ),
        tool(
            "companies_house_api_info",
            "The Companies House public API endpoints and how to authenticate.",
            &[],
            json!({}),
        ),
        // ── HM Land Registry ───────────────────────────────────────────
        tool(
            "search_price_paid",
            "Search HM Land Registry price paid data by postcode, street, or town.",
            &[],
            json!({
                "postcode": {"type": "string", "description": "Postcode, e.g. \"SW1A 1AA\""},
                "street": {"type": "string", "description": "Street name"},
                "town": {"type": "string", "description": "Town or city"},
                "property_type": {"type": "string", "description": "D/S/T/F or detached/semi/terraced/flat"}
            }),
        ),
        tool(
            "get_title_summary",
            "How to get the title register and plan for a title number.",
            &["title_number"],
            json!({
                "title_number": {"type": "string", "description": "Title number, e.g. \"ABC123456\""}
            }),
        ),
        tool(
            "search_registered_titles",
            "Search property ownership information by address.",
            &["address"],
            json!({
                "address": {"type": "string", "description": "Property address"}
            }),
        ),
        tool(
            "get_inspire_index",
            "INSPIRE polygon data for land parcels.",
            &[],
            json!({}),
        ),
        tool(
            "land_registry_services_index",
            "Index of HM Land Registry services and datasets.",
            &[],
            json!({}),
        ),
        tool(
            "get_ownership_search_options",
            "All the ways to find out who owns a property, and what each costs.",
            &[],
            json!({}),
        ),
        // ── Ombudsman schemes ──────────────────────────────────────────
        tool(
            "search_lgo",
            "Search Local Government & Social Care Ombudsman decisions.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"care assessment delay\""},
                "council": {"type": "string", "description": "Council name to note in the search"},
                "category": {"type": "string", "description": "Complaint category, e.g. \"adult care services\""}
            }),
        ),
        tool(
            "get_lgo_decision",
            "Get an LGO decision by case reference, e.g. \"23 012 345\".",
            &["case_reference"],
            json!({
                "case_reference": {"type": "string", "description": "LGO case reference"}
            }),
        ),
        tool(
            "get_lgo_focus_reports",
            "LGO focus reports and public interest reports.",
            &[],
            json!({}),
        ),
        tool(
            "search_housing_ombudsman",
            "Search Housing Ombudsman decisions about social landlords.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"disrepair\""}
            }),
        ),
        tool(
            "get_housing_ombudsman_decision",
            "Get a Housing Ombudsman decision by reference.",
            &["case_reference"],
            json!({
                "case_reference": {"type": "string", "description": "Case reference"}
            }),
        ),
        tool(
            "search_phso",
            "Search Parliamentary and Health Service Ombudsman reports.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"continuing healthcare\""}
            }),
        ),
        tool(
            "get_phso_decision",
            "Get a PHSO investigation report by reference.",
            &["case_reference"],
            json!({
                "case_reference": {"type": "string", "description": "Case reference"}
            }),
        ),
        tool(
            "search_financial_ombudsman",
            "Search Financial Ombudsman Service decisions.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"mis-sold\""},
                "firm": {"type": "string", "description": "Firm name filter"}
            }),
        ),
        tool(
            "get_fos_decision",
            "Get a Financial Ombudsman decision by reference (DRN number).",
            &["case_reference"],
            json!({
                "case_reference": {"type": "string", "description": "DRN reference"}
            }),
        ),
        tool(
            "search_legal_ombudsman",
            "Legal Ombudsman complaints about lawyers: scheme rules and remedies.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"}
            }),
        ),
        tool(
            "get_leo_decision",
            "Legal Ombudsman decision data and the tribunal route for appeals.",
            &["case_reference"],
            json!({
                "case_reference": {"type": "string", "description": "Case reference"}
            }),
        ),
        tool(
            "list_ombudsman_services",
            "Index of every UK ombudsman scheme and what it covers.",
            &[],
            json!({}),
        ),
        // ── Regulators ─────────────────────────────────────────────────
        tool(
            "search_cqc",
            "Search CQC inspection reports for care providers.",
            &["provider_name"],
            json!({
                "provider_name": {"type": "string", "description": "Provider or home name"},
                "location": {"type": "string", "description": "Town or area"}
            }),
        ),
        tool(
            "get_cqc_report",
            "Get the CQC page for a provider by location ID.",
            &["provider_id"],
            json!({
                "provider_id": {"type": "string", "description": "CQC location ID, e.g. \"1-123456789\""}
            }),
        ),
        tool(
            "get_cqc_api_info",
            "The CQC public API endpoints and example queries.",
            &[],
            json!({}),
        ),
        tool(
            "search_ico_guidance",
            "Search ICO guidance on data protection, SARs, and FOI.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"subject access\""}
            }),
        ),
        tool(
            "get_ico_decisions",
            "ICO decision notices and enforcement action.",
            &[],
            json!({
                "topic": {"type": "string", "description": "Topic to note when filtering"}
            }),
        ),
        tool(
            "get_sra_rules",
            "SRA Standards and Regulations for solicitors.",
            &[],
            json!({
                "section": {"type": "string", "description": "\"code\", \"accounts\", or \"transparency\""}
            }),
        ),
        tool(
            "search_sra_decisions",
            "SRA disciplinary decisions and the solicitor checker.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Solicitor or firm name"}
            }),
        ),
        tool(
            "get_bsb_rules",
            "Bar Standards Board Handbook and Code of Conduct.",
            &[],
            json!({
                "section": {"type": "string", "description": "\"conduct\" or \"equality\""}
            }),
        ),
        tool(
            "search_laa",
            "Search Legal Aid Agency guidance on gov.uk.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"means test\""}
            }),
        ),
        tool(
            "get_laa_rates",
            "Legal aid remuneration rates, civil and criminal.",
            &[],
            json!({}),
        ),
        tool(
            "search_ofsted",
            "Search Ofsted inspection reports for schools and children's services.",
            &["provider_name"],
            json!({
                "provider_name": {"type": "string", "description": "School or provider name"},
                "location": {"type": "string", "description": "Town or area"}
            }),
        ),
        tool(
            "get_ofsted_report",
            "Get the Ofsted page for a provider by URN.",
            &["urn"],
            json!({
                "urn": {"type": "string", "description": "Unique Reference Number, e.g. \"123456\""}
            }),
        ),
        tool(
            "list_regulators",
            "Index of UK regulatory bodies and their remits.",
            &[],
            json!({}),
        ),
        // ── Parliament ─────────────────────────────────────────────────
        tool(
            "search_bills",
            "Search current and past parliamentary bills.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms or bill title"},
                "session": {"type": "string", "description": "Parliamentary session, e.g. \"2023-24\""},
                "status": {"type": "string", "description": "\"current\", \"enacted\", or \"failed\""}
            }),
        ),
        tool(
            "get_bill",
            "Get a bill's page and progress by ID or short title.",
            &["bill_id"],
            json!({
                "bill_id": {"type": "string", "description": "Bill ID or title, e.g. \"Mental Health Bill\""}
            }),
        ),
        tool(
            "search_hansard",
            "Search Hansard parliamentary debates; includes the Pepper v Hart conditions.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "date": {"type": "string", "description": "Date as YYYY-MM-DD, echoed as a filter hint"},
                "house": {"type": "string", "description": "\"Commons\" or \"Lords\""},
                "member": {"type": "string", "description": "MP or Lord name"}
            }),
        ),
        tool(
            "search_committees",
            "Search parliamentary committee reports and evidence.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "committee": {"type": "string", "description": "Committee name"},
                "report_type": {"type": "string", "description": "\"report\", \"evidence\", or \"inquiry\""}
            }),
        ),
        tool(
            "get_committee_report",
            "Get a committee's page by name, with its inquiries and reports.",
            &["committee"],
            json!({
                "committee": {"type": "string", "description": "Committee name, e.g. \"Justice Committee\""},
                "inquiry": {"type": "string", "description": "Inquiry name to look for"}
            }),
        ),
        tool(
            "search_written_questions",
            "Search parliamentary written questions and answers.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "department": {"type": "string", "description": "Answering department"},
                "member": {"type": "string", "description": "MP or Lord name"}
            }),
        ),
        tool(
            "get_member_info",
            "Look up an MP or Lord: interests, voting record, contributions.",
            &["member_name"],
            json!({
                "member_name": {"type": "string", "description": "Member name"}
            }),
        ),
        tool(
            "parliament_resources_index",
            "Index of Parliament research surfaces: bills, Hansard, committees, members.",
            &[],
            json!({}),
        ),
        // ── Planning ───────────────────────────────────────────────────
        tool(
            "search_planning_appeals",
            "Search Planning Inspectorate appeal decisions.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"green belt\""},
                "location": {"type": "string", "description": "Town, borough, or county"},
                "appeal_type": {"type": "string", "description": "e.g. \"householder\", \"enforcement\""},
                "decision": {"type": "string", "description": "\"allowed\", \"dismissed\", or \"split\""}
            }),
        ),
        tool(
            "get_planning_decision",
            "Find a planning appeal decision by PINS reference, e.g. \"APP/X1234/W/23/1234567\".",
            &["reference"],
            json!({
                "reference": {"type": "string", "description": "Appeal reference"}
            }),
        ),
        tool(
            "search_sos_planning_decisions",
            "Secretary of State decisions on called-in applications and recovered appeals.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Development name or location"}
            }),
        ),
        tool(
            "search_called_in_decisions",
            "Called-in planning applications and the call-in criteria.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Development name or location"}
            }),
        ),
        tool(
            "get_national_infrastructure",
            "The NSIP database and the Planning Act 2008 examination process.",
            &[],
            json!({}),
        ),
        tool(
            "get_planning_inspectorate_guidance",
            "Planning Inspectorate procedural guides and appeal timetables.",
            &[],
            json!({}),
        ),
        tool(
            "list_planning_resources",
            "Index of planning law resources: legislation, policy, case law.",
            &[],
            json!({}),
        ),
        // ── Secretary of State decisions ───────────────────────────────
        tool(
            "search_sos_decisions",
            "Search Secretary of State determinations across departments.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms, e.g. \"ordinary residence\""},
                "department": {"type": "string", "description": "Department code: dhsc, dfe, dluhc, moj, ho, dwp"}
            }),
        ),
        tool(
            "get_sos_decision",
            "Find a specific SoS decision by reference.",
            &["reference"],
            json!({
                "reference": {"type": "string", "description": "Decision reference or identifier"}
            }),
        ),
        tool(
            "search_ministerial_decisions",
            "Search ministerial decisions, directions, and statements.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "department": {"type": "string", "description": "Department code: dhsc, dfe, dluhc, moj, ho, dwp"}
            }),
        ),
        tool(
            "list_departments",
            "Government departments with decision-making functions.",
            &[],
            json!({}),
        ),
        tool(
            "get_ordinary_residence_decisions",
            "DHSC ordinary residence determinations under the Care Act 2014.",
            &[],
            json!({}),
        ),
        tool(
            "get_s117_dispute_guidance",
            "Section 117 MHA aftercare responsibility disputes.",
            &[],
            json!({}),
        ),
        tool(
            "get_education_decisions",
            "Department for Education decisions: school organisation, academies, SEND.",
            &[],
            json!({}),
        ),
        tool(
            "get_dluhc_decisions",
            "DLUHC decisions: planning, compulsory purchase, local government.",
            &[],
            json!({}),
        ),
        tool(
            "sos_decisions_index",
            "Index of the Secretary of State decision resources.",
            &[],
            json!({}),
        ),
        // ── International ──────────────────────────────────────────────
        tool(
            "search_eurlex",
            "Search EUR-Lex for EU law; relevant to UK retained EU law.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms"},
                "doc_type": {"type": "string", "description": "Document type to note, e.g. \"regulation\""}
            }),
        ),
        tool(
            "get_eu_legislation",
            "Get EU legislation by CELEX number or common citation (\"gdpr\", \"rome i\"...).",
            &["celex_or_number"],
            json!({
                "celex_or_number": {"type": "string", "description": "CELEX number or citation, e.g. \"32016R0679\" or \"gdpr\""}
            }),
        ),
        tool(
            "search_hudoc",
            "Search HUDOC for European Court of Human Rights case law.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Search terms or case name"},
                "article": {"type": "string", "description": "Convention article, e.g. \"5\", \"8\""},
                "respondent": {"type": "string", "description": "Respondent state, e.g. \"United Kingdom\""}
            }),
        ),
        tool(
            "get_echr_case",
            "Get an ECHR case by application number, e.g. \"12345/67\".",
            &["application_number"],
            json!({
                "application_number": {"type": "string", "description": "Application number"}
            }),
        ),
        tool(
            "get_echr_article_caselaw",
            "Key ECHR cases for one Convention article.",
            &["article"],
            json!({
                "article": {"type": "string", "description": "Article number, e.g. \"5\""}
            }),
        ),
        tool(
            "search_uk_treaties",
            "Search the UK Treaties Online database.",
            &["query"],
            json!({
                "query": {"type": "string", "description": "Treaty name or terms"}
            }),
        ),
        tool(
            "get_uk_treaty",
            "Get a UK treaty's status and text by name.",
            &["treaty_name"],
            json!({
                "treaty_name": {"type": "string", "description": "Treaty name"}
            }),
        ),
        tool(
            "international_law_index",
            "Index of international law sources: EUR-Lex, HUDOC, treaties.",
            &[],
            json!({}),
        ),
    ]
}

// ── Dispatch ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("{0}")]
    InvalidParams(String),
}

/// The dispatch table plus the one shared HTTP client behind it.
pub struct Catalogue {
    prober: Prober,
}

impl Catalogue {
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self {
            prober: Prober::new()?,
        })
    }

    /// Run one tool. Domain failures come back as `Ok` text; `Err` means
    /// the caller misused the protocol.
    pub async fn call(
        &self,
        name: &str,
        args: &Map<String, Value>,
    ) -> Result<String, CallError> {
        info!(tool = name, "tool call");
        let text = match name {
            // legislation
            "get_legislation" => {
                legislation::get_section(
                    &self.prober,
                    req_str(args, "act_title")?,
                    req_str(args, "section")?,
                    opt_u16(args, "year")?,
                )
                .await
            }
            "search_legislation" => {
                legislation::search(req_str(args, "query")?, opt_str(args, "legislation_type")?)
            }
            "get_legislation_pdf_url" => legislation::pdf_url(
                req_str(args, "act_title")?,
                req_str(args, "section")?,
                opt_u16(args, "year")?,
            ),
            // caselaw
            "search_cases" => caselaw::search_cases(
                req_str(args, "query")?,
                opt_str(args, "court")?,
                opt_u16(args, "year")?,
                opt_str(args, "party")?,
                opt_str(args, "from_date")?,
                opt_str(args, "to_date")?,
            ),
            "get_judgment" => {
                caselaw::get_judgment(&self.prober, req_str(args, "citation")?).await
            }
            "get_judgment_pdf_url" => caselaw::judgment_pdf_url(req_str(args, "citation")?),
            // bailii
            "search_bailii" => bailii::search(
                req_str(args, "query")?,
                opt_str(args, "database")?,
                flag(args, "title_only")?,
            ),
            "search_tribunals" => bailii::search_tribunals(
                req_str(args, "query")?,
                opt_str(args, "tribunal")?,
                opt_u16(args, "year")?,
            ),
            "get_bailii_case" => {
                bailii::get_case(&self.prober, req_str(args, "citation")?).await
            }
            "get_bailii_recent" => {
                bailii::recent_decisions(opt_str(args, "jurisdiction")?.unwrap_or("ew"))
            }
            "get_bailii_database_list" => bailii::database_list().to_string(),
            // court rules
            "get_cpr" => court_rules::get_cpr(req_str(args, "part")?, opt_str(args, "rule")?),
            "get_fpr" => court_rules::get_fpr(req_str(args, "part")?, opt_str(args, "rule")?),
            "get_copr" => court_rules::get_copr(req_str(args, "part")?, opt_str(args, "rule")?),
            "get_tribunal_rules" => court_rules::get_tribunal_rules(
                req_str(args, "tribunal")?,
                opt_str(args, "part")?,
            ),
            "search_rules" => {
                court_rules::search_rules(req_str(args, "query")?, opt_str(args, "ruleset")?)
            }
            "get_rules_index" => court_rules::rules_index(),
            // practice directions
            "get_practice_direction" => practice_directions::get_practice_direction(
                req_str(args, "pd_number")?,
                opt_str(args, "court")?,
            ),
            "search_practice_directions" => {
                practice_directions::search_practice_directions(req_str(args, "query")?)
            }
            "list_practice_directions" => {
                practice_directions::list_practice_directions(req_str(args, "court")?)
            }
            "get_judiciary_guidance" => {
                practice_directions::get_judiciary_guidance(req_str(args, "topic")?)
            }
            "get_court_of_protection_guidance" => {
                practice_directions::court_of_protection_guidance()
            }
            // forms
            "search_court_forms" => {
                forms::search_court_forms(req_str(args, "query")?, opt_str(args, "court")?)
            }
            "get_form" => forms::get_form(req_str(args, "form_number")?),
            "list_forms_by_court" => forms::list_forms_by_court(req_str(args, "court")?),
            "get_fee_information" => forms::get_fee_information(opt_str(args, "court")?),
            "forms_index" => forms::forms_index(),
            // gov.uk guidance
            "search_gov_guidance" => {
                guidance::search_guidance(req_str(args, "topic")?, opt_str(args, "department")?)
            }
            "get_statutory_guidance" => guidance::get_guidance(req_str(args, "name")?),
            "get_court_forms" => guidance::get_forms(req_str(args, "form_type")?),
            "get_department_publications" => {
                guidance::get_department_publications(req_str(args, "department")?)
            }
            // codes of practice
            "get_mca_code" => codes::get_mca_code(opt_str(args, "chapter")?),
            "get_dols_guidance" => codes::get_dols_guidance(),
            "get_care_act_guidance" => codes::get_care_act_guidance(opt_str(args, "chapter")?),
            "get_mha_code" => codes::get_mha_code(opt_str(args, "chapter")?),
            "get_send_code" => codes::get_send_code(opt_str(args, "chapter")?),
            "search_codes" => codes::search_codes(req_str(args, "query")?),
            "list_all_codes" => codes::list_all_codes(),
            // companies house
            "search_companies" => companies::search_companies(req_str(args, "query")?),
            "get_company" => companies::get_company(req_str(args, "company_number")?),
            "get_company_filings" => {
                companies::get_company_filings(req_str(args, "company_number")?)
            }
            "get_officers" => companies::get_officers(req_str(args, "company_number")?),
            "get_charges" => companies::get_charges(req_str(args, "company_number")?),
            "get_psc" => companies::get_psc(req_str(args, "company_number")?),
            "search_disqualified_directors" => {
                companies::search_disqualified_directors(req_str(args, "name")?)
            }
            "companies_house_api_info" => companies::companies_house_api_info(),
            // land registry
            "search_price_paid" => land_registry::search_price_paid(
                opt_str(args, "postcode")?,
                opt_str(args, "street")?,
                opt_str(args, "town")?,
                opt_str(args, "property_type")?,
            ),
            "get_title_summary" => land_registry::get_title_summary(req_str(args, "title_number")?),
            "search_registered_titles" => {
                land_registry::search_registered_titles(req_str(args, "address")?)
            }
            "get_inspire_index" => land_registry::get_inspire_index(),
            "land_registry_services_index" => land_registry::land_registry_services_index(),
            "get_ownership_search_options" => land_registry::get_ownership_search_options(),
            // ombudsman
            "search_lgo" => ombudsman::search_lgo(
                req_str(args, "query")?,
                opt_str(args, "council")?,
                opt_str(args, "category")?,
            ),
            "get_lgo_decision" => ombudsman::get_lgo_decision(req_str(args, "case_reference")?),
            "get_lgo_focus_reports" => ombudsman::get_lgo_focus_reports(),
            "search_housing_ombudsman" => {
                ombudsman::search_housing_ombudsman(req_str(args, "query")?)
            }
            "get_housing_ombudsman_decision" => {
                ombudsman::get_housing_ombudsman_decision(req_str(args, "case_reference")?)
            }
            "search_phso" => ombudsman::search_phso(req_str(args, "query")?),
            "get_phso_decision" => ombudsman::get_phso_decision(req_str(args, "case_reference")?),
            "search_financial_ombudsman" => ombudsman::search_financial_ombudsman(
                req_str(args, "query")?,
                opt_str(args, "firm")?,
            ),
            "get_fos_decision" => ombudsman::get_fos_decision(req_str(args, "case_reference")?),
            "search_legal_ombudsman" => {
                ombudsman::search_legal_ombudsman(req_str(args, "query")?)
            }
            "get_leo_decision" => ombudsman::get_leo_decision(req_str(args, "case_reference")?),
            "list_ombudsman_services" => ombudsman::list_ombudsman_services(),
            // regulators
            "search_cqc" => regulators::search_cqc(
                req_str(args, "provider_name")?,
                opt_str(args, "location")?,
            ),
            "get_cqc_report" => regulators::get_cqc_report(req_str(args, "provider_id")?),
            "get_cqc_api_info" => regulators::get_cqc_api_info(),
            "search_ico_guidance" => regulators::search_ico_guidance(req_str(args, "query")?),
            "get_ico_decisions" => regulators::get_ico_decisions(opt_str(args, "topic")?),
            "get_sra_rules" => regulators::get_sra_rules(opt_str(args, "section")?),
            "search_sra_decisions" => regulators::search_sra_decisions(req_str(args, "query")?),
            "get_bsb_rules" => regulators::get_bsb_rules(opt_str(args, "section")?),
            "search_laa" => regulators::search_laa(req_str(args, "query")?),
            "get_laa_rates" => regulators::get_laa_rates(),
            "search_ofsted" => regulators::search_ofsted(
                req_str(args, "provider_name")?,
                opt_str(args, "location")?,
            ),
            "get_ofsted_report" => regulators::get_ofsted_report(req_str(args, "urn")?),
            "list_regulators" => regulators::list_regulators(),
            // parliament
            "search_bills" => parliament::search_bills(
                req_str(args, "query")?,
                opt_str(args, "session")?,
                opt_str(args, "status")?,
            ),
            "get_bill" => parliament::get_bill(req_str(args, "bill_id")?),
            "search_hansard" => parliament::search_hansard(
                req_str(args, "query")?,
                opt_str(args, "date")?,
                opt_str(args, "house")?,
                opt_str(args, "member")?,
            ),
            "search_committees" => parliament::search_committees(
                req_str(args, "query")?,
                opt_str(args, "committee")?,
                opt_str(args, "report_type")?,
            ),
            "get_committee_report" => parliament::get_committee_report(
                req_str(args, "committee")?,
                opt_str(args, "inquiry")?,
            ),
            "search_written_questions" => parliament::search_written_questions(
                req_str(args, "query")?,
                opt_str(args, "department")?,
                opt_str(args, "member")?,
            ),
            "get_member_info" => parliament::get_member_info(req_str(args, "member_name")?),
            "parliament_resources_index" => parliament::parliament_resources_index(),
            // planning
            "search_planning_appeals" => planning::search_planning_appeals(
                req_str(args, "query")?,
                opt_str(args, "location")?,
                opt_str(args, "appeal_type")?,
                opt_str(args, "decision")?,
            ),
            "get_planning_decision" => planning::get_planning_decision(req_str(args, "reference")?),
            "search_sos_planning_decisions" => {
                planning::search_sos_planning_decisions(req_str(args, "query")?)
            }
            "search_called_in_decisions" => {
                planning::search_called_in_decisions(req_str(args, "query")?)
            }
            "get_national_infrastructure" => planning::get_national_infrastructure(),
            "get_planning_inspectorate_guidance" => {
                planning::get_planning_inspectorate_guidance()
            }
            "list_planning_resources" => planning::list_planning_resources(),
            // secretary of state decisions
            "search_sos_decisions" => sos_decisions::search_sos_decisions(
                req_str(args, "query")?,
                opt_str(args, "department")?,
            ),
            "get_sos_decision" => sos_decisions::get_sos_decision(req_str(args, "reference")?),
            "search_ministerial_decisions" => sos_decisions::search_ministerial_decisions(
                req_str(args, "query")?,
                opt_str(args, "department")?,
            ),
            "list_departments" => sos_decisions::list_departments(),
            "get_ordinary_residence_decisions" => {
                sos_decisions::get_ordinary_residence_decisions()
            }
            "get_s117_dispute_guidance" => sos_decisions::get_s117_dispute_guidance(),
            "get_education_decisions" => sos_decisions::get_education_decisions(),
            "get_dluhc_decisions" => sos_decisions::get_dluhc_decisions(),
            "sos_decisions_index" => sos_decisions::sos_decisions_index(),
            // international
            "search_eurlex" => international::search_eurlex(
                req_str(args, "query")?,
                opt_str(args, "doc_type")?,
            ),
            "get_eu_legislation" => {
                international::get_eu_legislation(req_str(args, "celex_or_number")?)
            }
            "search_hudoc" => international::search_hudoc(
                req_str(args, "query")?,
                opt_str(args, "article")?,
                opt_str(args, "respondent")?,
            ),
            "get_echr_case" => {
                international::get_echr_case(req_str(args, "application_number")?)
            }
            "get_echr_article_caselaw" => {
                international::get_echr_article_caselaw(req_str(args, "article")?)
            }
            "search_uk_treaties" => international::search_uk_treaties(req_str(args, "query")?),
            "get_uk_treaty" => international::get_uk_treaty(req_str(args, "treaty_name")?),
            "international_law_index" => international::international_law_index(),
            _ => return Err(CallError::UnknownTool(name.to_string())),
        };
        Ok(text)
    }
}

// ── Argument helpers ───────────────────────────────────────────────────────

fn req_str<'a>(args: &'a Map<String, Value>, key: &str) -> Result<&'a str, CallError> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(CallError::InvalidParams(format!(
            "argument '{key}' must be a string"
        ))),
        None => Err(CallError::InvalidParams(format!(
            "missing required argument '{key}'"
        ))),
    }
}

/// Optional string; null and the empty string both count as absent.
fn opt_str<'a>(args: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, CallError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(CallError::InvalidParams(format!(
            "argument '{key}' must be a string"
        ))),
    }
}

/// Optional year; accepts a JSON number or a numeric string.
fn opt_u16(args: &Map<String, Value>, key: &str) -> Result<Option<u16>, CallError> {
    let out_of_range =
        || CallError::InvalidParams(format!("argument '{key}' must be a small integer"));
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .map(Some)
            .ok_or_else(out_of_range),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| out_of_range()),
        Some(_) => Err(out_of_range()),
    }
}

/// Boolean flag, absent means false; tolerates "true"/"false" strings.
fn flag(args: &Map<String, Value>, key: &str) -> Result<bool, CallError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) if s == "true" => Ok(true),
        Some(Value::String(s)) if s == "false" || s.is_empty() => Ok(false),
        Some(_) => Err(CallError::InvalidParams(format!(
            "argument '{key}' must be a boolean"
        ))),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    fn args(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn tool_names_are_unique() {
        let defs = definitions();
        let names: HashSet<&str> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn catalogue_spans_every_module() {
        let defs = definitions();
        let names: HashSet<&str> = defs.iter().map(|d| d.name).collect();
        for name in [
            "get_legislation",
            "search_cases",
            "search_bailii",
            "get_cpr",
            "get_practice_direction",
            "search_court_forms",
            "search_gov_guidance",
            "get_mca_code",
            "get_company",
            "search_price_paid",
            "search_lgo",
            "search_cqc",
            "search_bills",
            "search_planning_appeals",
            "search_sos_decisions",
            "search_hudoc",
        ] {
            assert!(names.contains(name), "missing {name}");
        }
        assert_eq!(defs.len(), 109);
    }

    #[test]
    fn every_definition_has_an_object_schema() {
        for def in definitions() {
            assert_eq!(def.input_schema["type"], "object", "{}", def.name);
            assert!(def.input_schema["properties"].is_object(), "{}", def.name);
            assert!(def.input_schema["required"].is_array(), "{}", def.name);
        }
    }

    // Missing required arguments fail before any handler runs, so every
    // listed name can be checked for a live dispatch arm offline.
    #[tokio::test]
    async fn every_listed_tool_dispatches() {
        let catalogue = catalogue();
        for def in definitions() {
            let result = catalogue.call(def.name, &Map::new()).await;
            assert!(
                !matches!(result, Err(CallError::UnknownTool(_))),
                "{} does not dispatch",
                def.name
            );
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_by_name() {
        let err = catalogue()
            .call("get_star_chamber_rolls", &Map::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("get_star_chamber_rolls"));
    }

    #[tokio::test]
    async fn missing_required_argument_names_the_key() {
        let err = catalogue().call("search_cases", &Map::new()).await.unwrap_err();
        assert!(err.to_string().contains("'query'"));
    }

    #[tokio::test]
    async fn year_accepts_a_numeric_string() {
        let text = catalogue()
            .call(
                "search_cases",
                &args(&[("query", json!("best interests")), ("year", json!("2024"))]),
            )
            .await
            .unwrap();
        assert!(text.contains("&from=2024-01-01&to=2024-12-31"));
    }

    #[tokio::test]
    async fn empty_optional_strings_are_dropped() {
        let text = catalogue()
            .call(
                "search_cases",
                &args(&[("query", json!("capacity")), ("court", json!(""))]),
            )
            .await
            .unwrap();
        assert!(!text.contains("&court="));
    }

    #[tokio::test]
    async fn mistyped_argument_is_rejected() {
        let err = catalogue()
            .call("get_judgment", &args(&[("citation", json!(42))]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[tokio::test]
    async fn bailii_recent_defaults_to_england_and_wales() {
        let text = catalogue()
            .call("get_bailii_recent", &Map::new())
            .await
            .unwrap();
        assert!(text.contains("URL: https://www.bailii.org/recent/ew.html"));
    }

    #[tokio::test]
    async fn title_only_flag_reaches_the_search_url() {
        let text = catalogue()
            .call(
                "search_bailii",
                &args(&[("query", json!("bland")), ("title_only", json!(true))]),
            )
            .await
            .unwrap();
        assert!(text.contains("&mask_path="));
    }

    #[tokio::test]
    async fn guidance_department_filter_is_wired_through() {
        let text = catalogue()
            .call(
                "search_gov_guidance",
                &args(&[("topic", json!("mental capacity")), ("department", json!("moj"))]),
            )
            .await
            .unwrap();
        assert!(text.contains("Filtered by: moj"));
    }

    #[tokio::test]
    async fn zero_argument_tools_run_with_no_arguments() {
        let text = catalogue().call("get_laa_rates", &Map::new()).await.unwrap();
        assert!(text.contains("Legal Aid Remuneration Rates"));
    }
}
