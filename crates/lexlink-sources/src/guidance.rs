//! Statutory guidance and government publications on gov.uk.
//!
//! A small table of key statutory guidance documents serves quick lookups;
//! everything else goes through the gov.uk site search, optionally narrowed
//! to one department's publications.

use lexlink_core::lookup::{AliasTable, normalize_key};
use lexlink_core::normalize::title_case;

use crate::GOV_UK_BASE;

/// Departments relevant to legal research, keyed by code and common name.
static DEPARTMENTS: AliasTable = AliasTable::new(&[
    ("moj", "ministry-of-justice"),
    ("ministry of justice", "ministry-of-justice"),
    ("dhsc", "department-of-health-and-social-care"),
    ("health", "department-of-health-and-social-care"),
    ("dfe", "department-for-education"),
    ("education", "department-for-education"),
    ("ho", "home-office"),
    ("home office", "home-office"),
    ("dluhc", "department-for-levelling-up-housing-and-communities"),
    ("housing", "department-for-levelling-up-housing-and-communities"),
    ("dwp", "department-for-work-pensions"),
    ("work and pensions", "department-for-work-pensions"),
    ("hmcts", "hm-courts-and-tribunals-service"),
    ("courts", "hm-courts-and-tribunals-service"),
    ("opg", "office-of-the-public-guardian"),
    ("public guardian", "office-of-the-public-guardian"),
    ("cqc", "care-quality-commission"),
    ("laa", "legal-aid-agency"),
    ("legal aid", "legal-aid-agency"),
]);

struct Guidance {
    title: &'static str,
    url: &'static str,
    department: &'static str,
    description: &'static str,
}

static MCA_CODE: Guidance = Guidance {
    title: "Mental Capacity Act Code of Practice",
    url: "https://www.gov.uk/government/publications/mental-capacity-act-code-of-practice",
    department: "Ministry of Justice",
    description: "Statutory guidance on the Mental Capacity Act 2005",
};

static DOLS_CODE: Guidance = Guidance {
    title: "Deprivation of Liberty Safeguards Code of Practice",
    url: "https://www.gov.uk/government/publications/deprivation-of-liberty-safeguards-code-of-practice",
    department: "Ministry of Justice",
    description: "Guidance on Schedule A1 MCA 2005 (DoLS)",
};

static CARE_ACT_GUIDANCE: Guidance = Guidance {
    title: "Care Act 2014 Statutory Guidance",
    url: "https://www.gov.uk/government/publications/care-act-statutory-guidance",
    department: "DHSC",
    description: "Statutory guidance on adult social care duties",
};

static MHA_CODE: Guidance = Guidance {
    title: "Mental Health Act 1983 Code of Practice",
    url: "https://www.gov.uk/government/publications/code-of-practice-mental-health-act-1983",
    department: "DHSC",
    description: "Statutory guidance on the Mental Health Act",
};

static WORKING_TOGETHER: Guidance = Guidance {
    title: "Working Together to Safeguard Children",
    url: "https://www.gov.uk/government/publications/working-together-to-safeguard-children--2",
    department: "DfE",
    description: "Statutory guidance on inter-agency working to safeguard children",
};

static SEND_CODE: Guidance = Guidance {
    title: "SEND Code of Practice",
    url: "https://www.gov.uk/government/publications/send-code-of-practice-0-to-25",
    department: "DfE",
    description: "Special educational needs and disability guidance",
};

static OPG_GUIDANCE: Guidance = Guidance {
    title: "OPG Practice Guidance",
    url: "https://www.gov.uk/government/collections/opg-practice-guidance",
    department: "OPG",
    description: "Practice guidance from Office of the Public Guardian",
};

static DEPUTY_GUIDANCE: Guidance = Guidance {
    title: "Guidance for Deputies",
    url: "https://www.gov.uk/government/collections/deputies-guidance",
    department: "OPG",
    description: "Guidance for court-appointed deputies",
};

static LPA_GUIDANCE: Guidance = Guidance {
    title: "LPA Guidance",
    url: "https://www.gov.uk/power-of-attorney",
    department: "OPG",
    description: "Guidance on Lasting Powers of Attorney",
};

static IMMIGRATION_RULES: Guidance = Guidance {
    title: "Immigration Rules",
    url: "https://www.gov.uk/guidance/immigration-rules",
    department: "Home Office",
    description: "The Immigration Rules",
};

static LEGAL_AID_GUIDANCE: Guidance = Guidance {
    title: "Legal Aid Guidance",
    url: "https://www.gov.uk/government/collections/legal-aid-agency-guidance",
    department: "LAA",
    description: "Guidance for legal aid providers",
};

/// Key statutory guidance documents, with one entry per lookup name.
static STATUTORY_GUIDANCE: &[(&str, &Guidance)] = &[
    // Mental Capacity
    ("mca code", &MCA_CODE),
    ("mental capacity code", &MCA_CODE),
    ("mca", &MCA_CODE),
    // DoLS
    ("dols code", &DOLS_CODE),
    ("deprivation of liberty", &DOLS_CODE),
    ("dols", &DOLS_CODE),
    // Care Act
    ("care act guidance", &CARE_ACT_GUIDANCE),
    ("care act", &CARE_ACT_GUIDANCE),
    ("care and support", &CARE_ACT_GUIDANCE),
    // Mental Health
    ("mha code", &MHA_CODE),
    ("mental health code", &MHA_CODE),
    // Children
    ("working together", &WORKING_TOGETHER),
    ("safeguarding children", &WORKING_TOGETHER),
    // SEND
    ("send code", &SEND_CODE),
    ("special educational needs", &SEND_CODE),
    // OPG guidance
    ("opg guidance", &OPG_GUIDANCE),
    ("deputy guidance", &DEPUTY_GUIDANCE),
    ("lpa guidance", &LPA_GUIDANCE),
    // Immigration
    ("immigration rules", &IMMIGRATION_RULES),
    // Legal Aid
    ("legal aid guidance", &LEGAL_AID_GUIDANCE),
];

/// Gov.uk site search for guidance, plus quick matches from the key table.
pub fn search_guidance(query: &str, department: Option<&str>) -> String {
    let mut search_url = format!(
        "{GOV_UK_BASE}/search/all?q={}&filter_content_purpose_supergroup=guidance_and_regulation",
        urlencoding::encode(query)
    );
    if let Some(dept) = department
        && let Some(slug) = DEPARTMENTS.exact(dept)
    {
        search_url.push_str(&format!("&filter_organisations%5B%5D={slug}"));
    }

    let mut result = format!("Gov.uk Guidance Search: {search_url}\n\n");

    let query_lower = query.to_lowercase();
    let mut matches = Vec::new();
    for (key, guidance) in STATUTORY_GUIDANCE {
        if key.contains(&query_lower) || guidance.title.to_lowercase().contains(&query_lower) {
            matches.push(format!("- {}: {}", guidance.title, guidance.url));
        }
    }

    if !matches.is_empty() {
        matches.truncate(5);
        result.push_str("Quick matches in key statutory guidance:\n");
        result.push_str(&matches.join("\n"));
        result.push_str("\n\n");
    }

    if let Some(dept) = department {
        result.push_str(&format!("Filtered by: {dept}\n"));
    }

    result.push_str(
        "\nAvailable department filters:\n- moj: Ministry of Justice\n- dhsc: Health and Social Care\n- dfe: Education\n- ho: Home Office\n- dluhc: Housing and Communities\n- dwp: Work and Pensions\n- opg: Office of the Public Guardian\n- laa: Legal Aid Agency",
    );

    result
}

/// One statutory guidance document by name. Exact matches carry a note on
/// the document's statutory force; partial matches give the bare details.
pub fn get_guidance(name: &str) -> String {
    let name_lower = normalize_key(name);

    if let Some((_, guidance)) = STATUTORY_GUIDANCE
        .iter()
        .find(|(key, _)| *key == name_lower)
    {
        return format!(
            "{}\n\nURL: {}\n\nDepartment: {}\nDescription: {}\n\nNote: This is statutory guidance that must be followed unless there\nis a good reason to depart from it (s.42(5) MCA for MCA Code).",
            guidance.title, guidance.url, guidance.department, guidance.description
        );
    }

    if let Some((_, guidance)) = STATUTORY_GUIDANCE
        .iter()
        .find(|(key, _)| key.contains(&name_lower))
    {
        return format!(
            "{}\n\nURL: {}\n\nDepartment: {}\nDescription: {}",
            guidance.title, guidance.url, guidance.department, guidance.description
        );
    }

    format!(
        "Guidance '{name}' not found in quick lookup.\n\nAvailable guidance:\n- mca code / mental capacity code: MCA Code of Practice\n- dols code / deprivation of liberty: DoLS Code of Practice\n- care act guidance: Care Act 2014 Statutory Guidance\n- mha code / mental health code: MHA Code of Practice\n- working together: Safeguarding Children Guidance\n- send code: SEND Code of Practice\n- opg guidance: OPG Practice Guidance\n- deputy guidance: Guidance for Deputies\n- lpa guidance: LPA Guidance\n- immigration rules: Immigration Rules\n- legal aid guidance: LAA Guidance\n\nOr use search_guidance(query) to search gov.uk."
    )
}

struct FormCollection {
    key: &'static str,
    title: &'static str,
    url: &'static str,
    key_forms: &'static [&'static str],
}

static FORM_COLLECTIONS: &[FormCollection] = &[
    FormCollection {
        key: "cop",
        title: "Court of Protection Forms",
        url: "https://www.gov.uk/government/collections/court-of-protection-forms",
        key_forms: &[
            "COP1: Application form",
            "COP3: Assessment of capacity",
            "COP9: Application relating to statutory wills etc",
            "COPDOL11: Deprivation of liberty application",
            "COP24: Witness statement",
        ],
    },
    FormCollection {
        key: "court of protection",
        title: "Court of Protection Forms",
        url: "https://www.gov.uk/government/collections/court-of-protection-forms",
        key_forms: &[
            "COP1: Application form",
            "COP3: Assessment of capacity",
            "COP9: Application relating to statutory wills etc",
            "COPDOL11: Deprivation of liberty application",
            "COP24: Witness statement",
        ],
    },
    FormCollection {
        key: "lpa",
        title: "Lasting Power of Attorney Forms",
        url: "https://www.gov.uk/government/collections/lasting-power-of-attorney-forms",
        key_forms: &[
            "LP1F: Property and financial affairs LPA",
            "LP1H: Health and welfare LPA",
            "LP2: Continuation sheets",
            "LP3: LPA register search",
            "LPC: Certificate provider form",
        ],
    },
    // The long-form alias carries one form fewer than "lpa".
    FormCollection {
        key: "lasting power of attorney",
        title: "Lasting Power of Attorney Forms",
        url: "https://www.gov.uk/government/collections/lasting-power-of-attorney-forms",
        key_forms: &[
            "LP1F: Property and financial affairs LPA",
            "LP1H: Health and welfare LPA",
            "LP2: Continuation sheets",
            "LP3: LPA register search",
        ],
    },
    FormCollection {
        key: "family",
        title: "Family Court Forms",
        url: "https://www.gov.uk/government/collections/court-and-tribunal-forms#family-court-forms",
        key_forms: &[
            "C1: Application for a section 8 order",
            "C100: Application under Children Act 1989",
            "C2: Application in existing proceedings",
            "D8: Divorce/dissolution petition",
            "FL401: Non-molestation/occupation order",
        ],
    },
    FormCollection {
        key: "civil",
        title: "Civil Court Forms",
        url: "https://www.gov.uk/government/collections/court-and-tribunal-forms#civil-court-forms",
        key_forms: &[
            "N1: Claim form",
            "N244: Application notice",
            "N215: Certificate of service",
            "N161: Appeal notice",
            "N251: Notice of funding",
        ],
    },
    FormCollection {
        key: "dols",
        title: "DoLS Forms",
        url: "https://www.gov.uk/government/collections/dols-forms",
        key_forms: &[
            "Form 1: Standard authorisation request",
            "Form 3: Urgent authorisation",
            "Form 4: Standard authorisation",
            "Form 10: RPR appointment",
        ],
    },
];

/// Links to an official form collection by jurisdiction.
pub fn get_forms(form_type: &str) -> String {
    let form_type_lower = normalize_key(form_type);

    if let Some(fc) = FORM_COLLECTIONS.iter().find(|fc| fc.key == form_type_lower) {
        let mut result = format!("{}\n\nURL: {}\n\nKey forms:\n", fc.title, fc.url);
        for form in fc.key_forms {
            result.push_str(&format!("- {form}\n"));
        }
        result.push_str(&format!(
            "\nAll court and tribunal forms:\n{GOV_UK_BASE}/government/collections/court-and-tribunal-forms"
        ));
        return result;
    }

    format!(
        "Form type '{form_type}' not recognised.\n\nAvailable form collections:\n- cop: Court of Protection forms (COP1, COP3, COP9, COPDOL11, COP24, etc.)\n- lpa: Lasting Power of Attorney forms (LP1F, LP1H, etc.)\n- family: Family court forms (C1, C100, D8, FL401, etc.)\n- civil: Civil court forms (N1, N244, etc.)\n- dols: DoLS forms (Form 1, Form 3, Form 4, etc.)\n\nAll forms: {GOV_UK_BASE}/government/collections/court-and-tribunal-forms"
    )
}

/// A department's publications, guidance, and organisation pages.
pub fn get_department_publications(department: &str) -> String {
    let dept_lower = normalize_key(department);

    if let Some(slug) = DEPARTMENTS.exact(department) {
        return format!(
            "Publications from {}\n\nPublications: {GOV_UK_BASE}/government/publications?departments[]={slug}\nGuidance: {GOV_UK_BASE}/government/collections?departments[]={slug}\nDepartment page: {GOV_UK_BASE}/government/organisations/{slug}",
            department.to_uppercase()
        );
    }

    for (key, slug) in DEPARTMENTS.iter() {
        if key.contains(&dept_lower) {
            return format!(
                "Publications from {}\n\nPublications: {GOV_UK_BASE}/government/publications?departments[]={slug}\nGuidance: {GOV_UK_BASE}/government/collections?departments[]={slug}\nDepartment page: {GOV_UK_BASE}/government/organisations/{slug}",
                title_case(key)
            );
        }
    }

    format!(
        "Department '{department}' not recognised.\n\nAvailable departments:\n- moj: Ministry of Justice\n- dhsc: Department of Health and Social Care\n- dfe: Department for Education\n- ho: Home Office\n- dluhc: Levelling Up, Housing and Communities\n- dwp: Work and Pensions\n- hmcts: HM Courts and Tribunals Service\n- opg: Office of the Public Guardian\n- cqc: Care Quality Commission\n- laa: Legal Aid Agency"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_the_supergroup_filter() {
        let text = search_guidance("mental capacity", None);
        assert!(text.starts_with(
            "Gov.uk Guidance Search: https://www.gov.uk/search/all?q=mental%20capacity&filter_content_purpose_supergroup=guidance_and_regulation\n"
        ));
    }

    #[test]
    fn quick_matches_are_not_deduplicated() {
        // Three lookup names point at the MCA Code, and "mental capacity"
        // reaches all of them through the shared title.
        let text = search_guidance("mental capacity", None);
        assert_eq!(
            text.matches("- Mental Capacity Act Code of Practice:").count(),
            3
        );
    }

    #[test]
    fn known_department_becomes_an_organisation_filter() {
        let text = search_guidance("sentencing", Some("moj"));
        assert!(text.contains("&filter_organisations%5B%5D=ministry-of-justice"));
        assert!(text.contains("Filtered by: moj\n"));
    }

    #[test]
    fn unknown_department_is_echoed_but_not_filtered() {
        let text = search_guidance("sentencing", Some("xyz"));
        assert!(!text.contains("filter_organisations"));
        assert!(text.contains("Filtered by: xyz\n"));
    }

    #[test]
    fn exact_guidance_lookup_notes_statutory_force() {
        let text = get_guidance("mca code");
        assert!(text.starts_with("Mental Capacity Act Code of Practice"));
        assert!(text.contains("s.42(5) MCA for MCA Code"));
    }

    #[test]
    fn partial_guidance_lookup_skips_the_note() {
        let text = get_guidance("deprivation");
        assert!(text.starts_with("Deprivation of Liberty Safeguards Code of Practice"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn unknown_guidance_lists_the_quick_names() {
        let text = get_guidance("quantum meruit");
        assert!(text.starts_with("Guidance 'quantum meruit' not found in quick lookup."));
        assert!(text.contains("- working together: Safeguarding Children Guidance"));
    }

    #[test]
    fn dols_forms_collection() {
        let text = get_forms("dols");
        assert!(text.starts_with("DoLS Forms"));
        assert!(text.contains("- Form 10: RPR appointment\n"));
        assert!(text.ends_with("https://www.gov.uk/government/collections/court-and-tribunal-forms"));
    }

    #[test]
    fn lpa_aliases_list_different_forms() {
        let short = get_forms("lpa");
        let long = get_forms("lasting power of attorney");
        assert!(short.contains("LPC: Certificate provider form"));
        assert!(!long.contains("LPC: Certificate provider form"));
    }

    #[test]
    fn unknown_form_type_lists_collections() {
        let text = get_forms("employment");
        assert!(text.starts_with("Form type 'employment' not recognised."));
    }

    #[test]
    fn department_publications_exact() {
        let text = get_department_publications("opg");
        assert!(text.starts_with("Publications from OPG"));
        assert!(text.contains(
            "Publications: https://www.gov.uk/government/publications?departments[]=office-of-the-public-guardian"
        ));
    }

    #[test]
    fn department_publications_partial_title_cases_the_key() {
        let text = get_department_publications("justice");
        assert!(text.starts_with("Publications from Ministry Of Justice"));
        assert!(text.contains("/government/organisations/ministry-of-justice"));
    }

    #[test]
    fn unknown_department_lists_codes() {
        let text = get_department_publications("treasury");
        assert!(text.starts_with("Department 'treasury' not recognised."));
        assert!(text.contains("- cqc: Care Quality Commission"));
    }
}
