//! HMCTS and gov.uk court form lookups.
//!
//! Four quick-lookup tables hold the forms practitioners reach for most:
//! Court of Protection, Family, Civil, and LPA/OPG. Every entry links to a
//! gov.uk publication page, which carries the PDF and its guidance notes.

use lexlink_core::lookup::normalize_key;
use lexlink_core::normalize::compact_code;

use crate::GOV_UK_BASE;

/// Master collection of court and tribunal forms.
pub const HMCTS_FORMS: &str = "https://www.gov.uk/government/collections/court-and-tribunal-forms";

const COP_COLLECTION: &str =
    "https://www.gov.uk/government/collections/court-of-protection-forms";
const LPA_COLLECTION: &str =
    "https://www.gov.uk/government/collections/lasting-power-of-attorney-forms";

struct Form {
    code: &'static str,
    title: &'static str,
    /// Publication slug under gov.uk/government/publications.
    slug: &'static str,
    description: &'static str,
}

const fn form(
    code: &'static str,
    title: &'static str,
    slug: &'static str,
    description: &'static str,
) -> Form {
    Form {
        code,
        title,
        slug,
        description,
    }
}

fn form_url(form: &Form) -> String {
    format!("{GOV_UK_BASE}/government/publications/{}", form.slug)
}

static COP_FORMS: &[Form] = &[
    form(
        "cop1",
        "Application form",
        "make-a-court-of-protection-application-form-cop1",
        "Main application to the Court of Protection",
    ),
    form(
        "cop1a",
        "Annex A - Supporting information for property and affairs applications",
        "apply-to-make-decisions-on-someones-property-and-financial-affairs-cop1a",
        "Property and affairs application supplement",
    ),
    form(
        "cop1b",
        "Annex B - Supporting information for personal welfare applications",
        "apply-to-make-decisions-on-someones-personal-welfare-cop1b",
        "Personal welfare application supplement",
    ),
    form(
        "cop3",
        "Assessment of capacity",
        "assessment-of-capacity-form-cop3",
        "Capacity assessment by practitioner",
    ),
    form(
        "cop4",
        "Deputy's declaration",
        "deputys-declaration-form-cop4",
        "Declaration by proposed deputy",
    ),
    form(
        "cop5",
        "Acknowledgment of notification / service",
        "acknowledgment-of-notification-service-cop5",
        "Acknowledgment of being served/notified",
    ),
    form(
        "cop9",
        "Application relating to statutory wills, codicils, settlements and other dealings with P's property",
        "application-relating-to-a-statutory-will-codicil-or-other-dealing-with-ps-property-cop9",
        "Applications for statutory wills, gifts, settlements",
    ),
    form(
        "cop14",
        "Application to be joined as a party",
        "apply-to-be-joined-as-party-to-court-of-protection-proceedings-cop14",
        "Application to be joined as party to proceedings",
    ),
    form(
        "cop15",
        "Application for permission",
        "apply-for-permission-to-make-a-court-of-protection-application-cop15",
        "Request permission to make application",
    ),
    form(
        "cop24",
        "Witness statement",
        "witness-statement-form-cop24",
        "Template for witness statements",
    ),
    form(
        "copdol11",
        "Application to authorise deprivation of liberty",
        "apply-for-authorisation-to-deprive-someone-of-their-liberty-copdol11",
        "Re X / COPDOL application for welfare DoL",
    ),
    form(
        "copdol10",
        "P's representative appointment under s.21A",
        "appoint-a-representative-for-someone-applying-to-the-court-of-protection-copdol10",
        "Appointment of representative in s.21A case",
    ),
];

static FAMILY_FORMS: &[Form] = &[
    form(
        "c1",
        "Application for an order",
        "form-c1-application-for-an-order",
        "Section 8 orders (contact, specific issue, prohibited steps)",
    ),
    form(
        "c2",
        "Application in existing proceedings",
        "form-c2-application-for-permission-or-an-order-in-proceedings",
        "Application within existing proceedings",
    ),
    form(
        "c100",
        "Application under the Children Act 1989 for a child arrangements, prohibited steps, specific issue section 8 order",
        "form-c100-application-under-the-children-act-1989-for-a-child-arrangements-prohibited-steps-specific-issue-section-8-order",
        "Main private law children application",
    ),
    form(
        "c1a",
        "Allegations of harm and domestic abuse",
        "form-c1a-supplement-for-allegations-of-harm-form-c100",
        "Supplement for domestic abuse/harm allegations",
    ),
    form(
        "d8",
        "Divorce/dissolution petition",
        "form-d8-application-for-a-divorce-dissolution-or-judicial-separation",
        "Application for divorce or dissolution",
    ),
    form(
        "fl401",
        "Non-molestation order / occupation order",
        "form-fl401-application-for-a-non-molestation-order-occupation-order",
        "Application for protective injunctions",
    ),
    form(
        "fl403",
        "Application to vary, extend or discharge an order",
        "form-fl403-application-to-vary-extend-or-discharge-an-order",
        "Vary non-molestation/occupation orders",
    ),
    form(
        "a1",
        "Application for a matrimonial or civil partnership order",
        "form-a1-application-for-a-matrimonial-or-civil-partnership-order",
        "Financial remedy application",
    ),
];

static CIVIL_FORMS: &[Form] = &[
    form(
        "n1",
        "Claim form",
        "form-n1-claim-form-cpr-part-7",
        "Starting a civil claim",
    ),
    form(
        "n244",
        "Application notice",
        "form-n244-application-notice",
        "General application in proceedings",
    ),
    form(
        "n215",
        "Certificate of service",
        "form-n215-certificate-of-service",
        "Certificate confirming service",
    ),
    form(
        "n161",
        "Appellant's notice",
        "form-n161-appellants-notice",
        "Notice of appeal",
    ),
    form(
        "n180",
        "Directions questionnaire",
        "form-n180-directions-questionnaire-small-claims-track",
        "Case management information",
    ),
    form(
        "n251",
        "Notice of funding",
        "form-n251-notice-of-funding-of-case-or-claim",
        "Notice of funding (CFAs, legal aid)",
    ),
    form(
        "n461",
        "Application for judicial review",
        "form-n461-claim-form-for-judicial-review",
        "Judicial review claim form",
    ),
];

static LPA_FORMS: &[Form] = &[
    form(
        "lp1f",
        "Lasting Power of Attorney for property and financial affairs",
        "make-a-lasting-power-of-attorney-property-and-financial-affairs",
        "Property and financial affairs LPA",
    ),
    form(
        "lp1h",
        "Lasting Power of Attorney for health and welfare",
        "make-a-lasting-power-of-attorney-health-and-welfare",
        "Health and welfare LPA",
    ),
    form(
        "lpa002",
        "Object to an LPA registration",
        "object-to-an-lpa-registration-lpa002",
        "Objection to LPA registration",
    ),
    form(
        "lp3",
        "Search the OPG register",
        "search-the-opg-register-lp3",
        "Request search of LPA/EPA register",
    ),
];

/// Substring search over form codes, titles, and descriptions.
///
/// The court filter is a substring match against the displayed set name, so
/// "family", "civil", and "lpa" narrow as expected while "cop" matches no
/// set name at all ("protection" does).
pub fn search_court_forms(query: &str, court: Option<&str>) -> String {
    let query_lower = normalize_key(query);
    let mut results = Vec::new();

    for (set_name, forms) in [
        ("Court of Protection", COP_FORMS),
        ("Family", FAMILY_FORMS),
        ("Civil", CIVIL_FORMS),
        ("LPA", LPA_FORMS),
    ] {
        if let Some(filter) = court
            && !set_name.to_lowercase().contains(&filter.to_lowercase())
        {
            continue;
        }

        for form in forms {
            if form.code.contains(&query_lower)
                || form.title.to_lowercase().contains(&query_lower)
                || form.description.to_lowercase().contains(&query_lower)
            {
                results.push(format!(
                    "{set_name} - {}: {}\n  {}",
                    form.code.to_uppercase(),
                    form.title,
                    form_url(form)
                ));
            }
        }
    }

    let mut result = format!("Court Forms Search\n\nSearching for: {query}\n\n");
    if results.is_empty() {
        result.push_str("No exact matches found.\n");
    } else {
        results.truncate(10);
        result.push_str("Matching forms:\n\n");
        result.push_str(&results.join("\n\n"));
    }

    result.push_str(&format!(
        "\n\nAll court forms:\n{HMCTS_FORMS}\n\nForm collections:\n- Court of Protection: {COP_COLLECTION}\n- Family Court: {HMCTS_FORMS}#family-court-forms\n- Civil Court: {HMCTS_FORMS}#civil-court-forms\n- LPA forms: {LPA_COLLECTION}"
    ));

    result
}

/// Details and download link for one form, looked up across every table.
pub fn get_form(form_number: &str) -> String {
    let code = compact_code(form_number);

    let found = COP_FORMS
        .iter()
        .chain(FAMILY_FORMS)
        .chain(CIVIL_FORMS)
        .chain(LPA_FORMS)
        .find(|form| form.code == code);

    match found {
        Some(form) => format!(
            "Court Form: {}\n\nTitle: {}\nDescription: {}\n\nDownload: {}\n\nThe page will have:\n- PDF version for printing\n- Instructions and guidance notes\n- Related forms\n\nForm finder:\n{HMCTS_FORMS}",
            form_number.to_uppercase(),
            form.title,
            form.description,
            form_url(form)
        ),
        None => format!(
            "Form '{form_number}' not found in quick lookup.\n\nSearch all forms:\n{HMCTS_FORMS}\n\nOr try search_court_forms(\"{form_number}\")\n\nCommon form prefixes:\n- COP: Court of Protection\n- C: Family Court (children)\n- D: Divorce/dissolution\n- FL: Family Law Act\n- N: Civil claims\n- LP: Lasting Power of Attorney"
        ),
    }
}

/// List every quick-lookup form for one jurisdiction.
pub fn list_forms_by_court(court: &str) -> String {
    let (heading, forms, full_list) = match normalize_key(court).as_str() {
        "cop" | "court of protection" => (
            "Court of Protection Forms",
            COP_FORMS,
            COP_COLLECTION.to_string(),
        ),
        "family" | "family court" | "fpr" => (
            "Family Court Forms",
            FAMILY_FORMS,
            format!("{HMCTS_FORMS}#family-court-forms"),
        ),
        "civil" | "civil court" | "cpr" => (
            "Civil Court Forms",
            CIVIL_FORMS,
            format!("{HMCTS_FORMS}#civil-court-forms"),
        ),
        "lpa" | "opg" | "lasting power of attorney" => {
            ("LPA / OPG Forms", LPA_FORMS, LPA_COLLECTION.to_string())
        }
        _ => {
            return format!(
                "Court '{court}' not recognised.\n\nAvailable courts:\n- cop: Court of Protection\n- family: Family Court\n- civil: Civil Court\n- lpa: LPA / OPG forms\n\nAll forms: {HMCTS_FORMS}"
            );
        }
    };

    let mut result = format!("{heading}\n\n");
    for form in forms {
        result.push_str(&format!("{}: {}\n", form.code.to_uppercase(), form.title));
    }
    result.push_str(&format!("\nFull list: {full_list}"));
    result
}

/// Fee amounts and fee-help links. The fee table covers every court, so the
/// filter argument is accepted for tool parity and not applied.
pub fn get_fee_information(_court: Option<&str>) -> String {
    format!(
        "Court Fees\n\nFEE INFORMATION\n{GOV_UK_BASE}/court-fees-what-they-are\n\nCOURT OF PROTECTION FEES\nApplication fee: £371 (2024)\nAppeal fee: £234\n\nFee exemptions/remissions:\n{GOV_UK_BASE}/get-help-with-court-fees\n\nFAMILY COURT FEES\nDivorce/dissolution: £593\nChildren Act application: Various (some free)\nFinancial remedy: £275\n\nCIVIL COURT FEES\nClaims vary by value:\n- Up to £300: £35\n- £300.01 to £500: £50\n- £500.01 to £1,000: £70\n- £1,000.01 to £1,500: £80\n- £1,500.01 to £3,000: £115\n- £3,000.01 to £5,000: £205\n- £5,000.01 to £10,000: £455\n- £10,000.01 to £200,000: 5% of value\n- Over £200,000: £10,000\n\nApplication notice (N244): £119\n\nFEE HELP (EX160)\nApply for help with fees:\n{GOV_UK_BASE}/government/publications/apply-for-help-with-court-and-tribunal-fees\n\nEligibility:\n- Receipt of qualifying benefits, OR\n- Low income (disposable capital and income tests)\n\nNote: Legal aid may cover fees in funded cases."
    )
}

/// Index of every forms resource this crate links to.
pub fn forms_index() -> String {
    format!(
        "Court and Tribunal Forms Index\n\nMAIN FORMS COLLECTION\n{HMCTS_FORMS}\n\nCOURT OF PROTECTION\n{COP_COLLECTION}\nKey forms: COP1, COP3, COP4, COP9, COP24, COPDOL11\nUse: list_forms_by_court(\"cop\")\n\nFAMILY COURT\n{HMCTS_FORMS}#family-court-forms\nKey forms: C100, C1, C2, D8, FL401\nUse: list_forms_by_court(\"family\")\n\nCIVIL COURT\n{HMCTS_FORMS}#civil-court-forms\nKey forms: N1, N244, N215, N161, N461\nUse: list_forms_by_court(\"civil\")\n\nLPA / OPG\n{LPA_COLLECTION}\nKey forms: LP1F, LP1H, LP3\nUse: list_forms_by_court(\"lpa\")\n\nTRIBUNALS\n{HMCTS_FORMS}#tribunal-forms\n\nSEARCH FUNCTIONS\n- search_court_forms(query) - Search all forms\n- get_form(number) - Get specific form\n- list_forms_by_court(court) - List forms by jurisdiction\n\nFEES\n- get_fee_information() - Fee amounts and exemptions\n- Form EX160: Apply for help with fees\n\nONLINE SERVICES\nSome forms can be completed online:\n- Divorce: {GOV_UK_BASE}/apply-for-divorce\n- Money claims: {GOV_UK_BASE}/make-court-claim-for-money\n- LPA: {GOV_UK_BASE}/lasting-power-attorney"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_lookup_strips_spacing_and_hyphens() {
        let text = get_form("N-244");
        assert!(text.starts_with("Court Form: N-244"));
        assert!(text.contains("Title: Application notice"));
        assert!(text.contains(
            "Download: https://www.gov.uk/government/publications/form-n244-application-notice"
        ));
    }

    #[test]
    fn cop1_resolves() {
        let text = get_form("cop1");
        assert!(text.starts_with("Court Form: COP1"));
        assert!(text.contains("make-a-court-of-protection-application-form-cop1"));
    }

    #[test]
    fn unknown_form_explains_prefixes() {
        let text = get_form("zz9");
        assert!(text.starts_with("Form 'zz9' not found in quick lookup."));
        assert!(text.contains("Or try search_court_forms(\"zz9\")"));
        assert!(text.contains("- COP: Court of Protection"));
    }

    #[test]
    fn search_matches_descriptions() {
        let text = search_court_forms("deprivation", None);
        assert!(text.contains("Court of Protection - COPDOL11: Application to authorise deprivation of liberty"));
    }

    #[test]
    fn search_caps_results_at_ten() {
        // "a" matches nearly every entry across the four tables.
        let text = search_court_forms("a", None);
        assert_eq!(text.matches("\n  https://www.gov.uk/").count(), 10);
    }

    #[test]
    fn family_filter_narrows_the_search() {
        let text = search_court_forms("order", Some("family"));
        assert!(text.contains("Family - C1: Application for an order"));
        assert!(!text.contains("Court of Protection -"));
    }

    #[test]
    fn cop_filter_matches_no_set_name() {
        // The filter is a substring of the displayed set name, and "cop"
        // never occurs in "Court of Protection". "protection" does.
        let filtered = search_court_forms("application", Some("cop"));
        assert!(filtered.contains("No exact matches found."));

        let via_protection = search_court_forms("application", Some("protection"));
        assert!(via_protection.contains("Court of Protection - COP1: Application form"));
    }

    #[test]
    fn listing_covers_the_lpa_table() {
        let text = list_forms_by_court("opg");
        assert!(text.starts_with("LPA / OPG Forms"));
        assert!(text.contains("LP1F: Lasting Power of Attorney for property and financial affairs"));
        assert!(text.ends_with(
            "Full list: https://www.gov.uk/government/collections/lasting-power-of-attorney-forms"
        ));
    }

    #[test]
    fn listing_unknown_court() {
        let text = list_forms_by_court("crown");
        assert!(text.starts_with("Court 'crown' not recognised."));
        assert!(text.ends_with(HMCTS_FORMS));
    }

    #[test]
    fn fee_information_is_court_independent() {
        let bare = get_fee_information(None);
        assert_eq!(bare, get_fee_information(Some("cop")));
        assert!(bare.contains("Application fee: £371 (2024)"));
        assert!(bare.contains("FEE HELP (EX160)"));
    }

    #[test]
    fn index_names_the_collections() {
        let text = forms_index();
        assert!(text.contains("Key forms: COP1, COP3, COP4, COP9, COP24, COPDOL11"));
        assert!(text.contains("#tribunal-forms"));
        assert!(text.ends_with("https://www.gov.uk/lasting-power-attorney"));
    }
}
