//! justice.gov.uk procedure rules.
//!
//! Covers the four justice.gov.uk rule sets (CPR, FPR, COPR, CrimPR) and the
//! tribunal procedure rules, which live as anchored sections of a gov.uk
//! collection page instead. CPR parts are numbered `part01`..`part89` in the
//! URL scheme, so part numbers are stripped of leading zeros for display and
//! re-padded to two digits for the link.

use lexlink_core::lookup::{AliasTable, normalize_key};
use lexlink_core::normalize::{pad2, rule_part};

pub const JUSTICE_BASE: &str = "https://www.justice.gov.uk";
pub const TRIBUNAL_RULES_BASE: &str = "https://www.gov.uk/government/collections";

const CPR_BASE: &str = "https://www.justice.gov.uk/courts/procedure-rules/civil";
const FPR_BASE: &str = "https://www.justice.gov.uk/courts/procedure-rules/family";
const COPR_BASE: &str = "https://www.justice.gov.uk/courts/procedure-rules/court-of-protection";
const CRPR_BASE: &str = "https://www.justice.gov.uk/courts/procedure-rules/criminal";

const COPR_SI: &str = "https://www.legislation.gov.uk/uksi/2017/1035/contents";

/// Tribunal rule sets: code, collection path, display name.
static TRIBUNAL_RULES: &[(&str, &str, &str)] = &[
    (
        "grc",
        "tribunal-procedure-rules#general-regulatory-chamber",
        "General Regulatory Chamber",
    ),
    (
        "iac",
        "tribunal-procedure-rules#immigration-and-asylum-chamber",
        "Immigration and Asylum Chamber",
    ),
    (
        "sec",
        "tribunal-procedure-rules#social-entitlement-chamber",
        "Social Entitlement Chamber",
    ),
    (
        "hesc",
        "tribunal-procedure-rules#health-education-and-social-care-chamber",
        "Health, Education and Social Care Chamber",
    ),
    (
        "pc",
        "tribunal-procedure-rules#property-chamber",
        "Property Chamber",
    ),
    ("tc", "tribunal-procedure-rules#tax-chamber", "Tax Chamber"),
    (
        "wpc",
        "tribunal-procedure-rules#war-pensions-and-armed-forces-compensation-chamber",
        "War Pensions and Armed Forces Compensation Chamber",
    ),
    (
        "ut-aac",
        "tribunal-procedure-rules#upper-tribunal-administrative-appeals-chamber",
        "Upper Tribunal - Administrative Appeals Chamber",
    ),
    (
        "ut-iac",
        "tribunal-procedure-rules#upper-tribunal-immigration-and-asylum-chamber",
        "Upper Tribunal - Immigration and Asylum Chamber",
    ),
    (
        "ut-lc",
        "tribunal-procedure-rules#upper-tribunal-lands-chamber",
        "Upper Tribunal - Lands Chamber",
    ),
    (
        "ut-tcc",
        "tribunal-procedure-rules#upper-tribunal-tax-and-chancery-chamber",
        "Upper Tribunal - Tax and Chancery Chamber",
    ),
    (
        "eat",
        "employment-appeal-tribunal-rules-and-legislation",
        "Employment Appeal Tribunal",
    ),
];

/// Common tribunal names accepted in place of the codes above.
static TRIBUNAL_NAMES: AliasTable = AliasTable::new(&[
    ("general regulatory", "grc"),
    ("general regulatory chamber", "grc"),
    ("immigration", "iac"),
    ("immigration and asylum", "iac"),
    ("immigration and asylum chamber", "iac"),
    ("social entitlement", "sec"),
    ("social entitlement chamber", "sec"),
    ("health education", "hesc"),
    ("health education and social care", "hesc"),
    ("mental health", "hesc"),
    ("property", "pc"),
    ("property chamber", "pc"),
    ("tax", "tc"),
    ("tax chamber", "tc"),
    ("war pensions", "wpc"),
    ("employment", "eat"),
    ("employment appeal", "eat"),
    ("upper tribunal aac", "ut-aac"),
    ("aac", "ut-aac"),
    ("administrative appeals", "ut-aac"),
    ("upper tribunal iac", "ut-iac"),
    ("upper tribunal lc", "ut-lc"),
    ("lands", "ut-lc"),
    ("upper tribunal tcc", "ut-tcc"),
]);

/// Civil Procedure Rules part link.
pub fn get_cpr(part: &str, rule: Option<&str>) -> String {
    let clean = rule_part(part);
    let url = format!("{CPR_BASE}/rules/part{}", pad2(&clean));

    let mut result = format!(
        "Civil Procedure Rules - Part {clean}\n\nRules: {url}\nPractice Direction: {url}#pd\n\nCPR Contents: {CPR_BASE}/rules\n\nKey CPR Parts:\n- Part 1: Overriding objective\n- Part 3: Case management\n- Part 6: Service\n- Part 7: Starting proceedings\n- Part 23: Applications\n- Part 24: Summary judgment\n- Part 25: Interim remedies\n- Part 31: Disclosure\n- Part 32: Evidence\n- Part 35: Experts\n- Part 36: Offers to settle\n- Part 44: Costs\n- Part 52: Appeals\n- Part 54: Judicial review"
    );

    if let Some(rule) = rule {
        result.push_str(&format!(
            "\n\nSpecific rule {rule}: Check the page above and search for 'Rule {rule}'"
        ));
    }

    result
}

/// Family Procedure Rules part guidance.
pub fn get_fpr(part: &str, rule: Option<&str>) -> String {
    let clean = rule_part(part);

    let mut result = format!(
        "Family Procedure Rules - Part {clean}\n\nFPR Contents: {FPR_BASE}/rules\n\nThe FPR governs:\n- Divorce and financial remedies (Parts 7-9)\n- Children Act proceedings (Part 12)\n- Adoption proceedings (Part 14)\n- Enforcement (Part 33)\n- Appeals (Part 30)\n\nKey FPR Parts:\n- Part 1: Overriding objective\n- Part 4: General case management\n- Part 7: Divorce, dissolution, etc.\n- Part 9: Financial remedies\n- Part 12: Children proceedings (private law)\n- Part 14: Adoption\n- Part 18: Applications\n- Part 22: Evidence\n- Part 25: Experts\n- Part 27: Hearings and directions\n- Part 28: Costs\n- Part 30: Appeals"
    );

    if let Some(rule) = rule {
        result.push_str(&format!(
            "\n\nFor rule {rule}, navigate to Part {clean} on the contents page."
        ));
    }

    result
}

/// Court of Protection Rules 2017 part guidance.
pub fn get_copr(part: &str, rule: Option<&str>) -> String {
    let clean = rule_part(part);

    let mut result = format!(
        "Court of Protection Rules 2017 - Part {clean}\n\nRules index: {COPR_BASE}/rules\nLegislation.gov.uk: {COPR_SI}\n\nPractice Directions:\n- PD 1A: Participation of P\n- PD 2A: Court documents\n- PD 4B: Statements of truth\n- PD 9E: Applications within proceedings\n- PD 10AA: Deprivation of liberty applications\n- PD 10B: Urgent and interim applications\n- PD 14A: Written evidence\n- PD 14E: Section 49 reports\n- PD 17A: Litigation friend\n\nKey COPR Parts:\n- Part 1: Preliminary (rules 1.1-1.4)\n- Part 3: Interpretation and general provisions\n- Part 7: Notifying P\n- Part 8: Permission\n- Part 9: Starting proceedings (COP1)\n- Part 10: Applications within proceedings\n- Part 11: Human rights and deprivation of liberty\n- Part 12: Dealing with applications\n- Part 14: Admissions, evidence, depositions\n- Part 17: Litigation friends\n- Part 19: Costs\n- Part 20: Appeals"
    );

    if let Some(rule) = rule {
        result.push_str(&format!(
            "\n\nFor rule {rule}, check legislation.gov.uk: {COPR_SI}/part/{clean}"
        ));
    }

    result
}

/// Tribunal procedure rules by chamber code or common name.
pub fn get_tribunal_rules(tribunal: &str, part: Option<&str>) -> String {
    let mut code = normalize_key(tribunal);
    if let Some(mapped) = TRIBUNAL_NAMES.exact(&code) {
        code = mapped.to_string();
    }

    if let Some((_, path, name)) = TRIBUNAL_RULES.iter().find(|(c, _, _)| *c == code) {
        let url = format!("{TRIBUNAL_RULES_BASE}/{path}");
        let mut result = format!(
            "Tribunal Procedure Rules - {name}\n\nRules: {url}\n\nAll Tribunal Procedure Rules: {TRIBUNAL_RULES_BASE}/tribunal-procedure-rules\n\nNote: Tribunal rules are consolidated on legislation.gov.uk:\n- First-tier Tribunal rules by chamber\n- Upper Tribunal rules by chamber\n- Employment Appeal Tribunal rules"
        );
        if let Some(part) = part {
            result.push_str(&format!(
                "\n\nFor Part {part}, navigate to the rules page and search within the document."
            ));
        }
        return result;
    }

    format!(
        "Tribunal '{tribunal}' not recognised.\n\nAvailable tribunals:\n- grc: General Regulatory Chamber\n- iac: Immigration and Asylum Chamber\n- sec: Social Entitlement Chamber\n- hesc: Health, Education and Social Care Chamber (including Mental Health)\n- pc: Property Chamber\n- tc: Tax Chamber\n- wpc: War Pensions Chamber\n- ut-aac: Upper Tribunal Administrative Appeals Chamber\n- ut-iac: Upper Tribunal Immigration and Asylum Chamber\n- ut-lc: Upper Tribunal Lands Chamber\n- ut-tcc: Upper Tribunal Tax and Chancery Chamber\n- eat: Employment Appeal Tribunal\n\nAll rules: {TRIBUNAL_RULES_BASE}/tribunal-procedure-rules"
    )
}

/// Search guidance across the rule sets.
pub fn search_rules(query: &str, ruleset: Option<&str>) -> String {
    let mut result = format!("Searching for: '{query}' in court rules\n\n");
    let mut matched = false;

    if let Some(rs) = ruleset {
        match normalize_key(rs).as_str() {
            "cpr" | "civil" => {
                result.push_str(&format!(
                    "CPR Search:\n- Justice.gov.uk: {CPR_BASE} (use Ctrl+F on parts)\n- Legislation.gov.uk: https://www.legislation.gov.uk/uksi/1998/3132/contents (search function)\n\nKey CPR terms related to '{query}' - check:\n- Part index for relevant part\n- Practice Directions for guidance"
                ));
                matched = true;
            }
            "fpr" | "family" => {
                result.push_str(&format!(
                    "FPR Search:\n- Justice.gov.uk: {FPR_BASE}\n- Legislation.gov.uk: https://www.legislation.gov.uk/uksi/2010/2955/contents\n\nNavigate to the rules index and use browser search."
                ));
                matched = true;
            }
            "copr" | "cop" | "court of protection" => {
                result.push_str(&format!(
                    "COPR Search:\n- Justice.gov.uk: {COPR_BASE}\n- Legislation.gov.uk: {COPR_SI}\n\nKey COPR Practice Directions are indexed separately on the justice.gov.uk page."
                ));
                matched = true;
            }
            "tribunal" | "tribunals" => {
                result.push_str(&format!(
                    "Tribunal Rules Search:\n- All rules: {TRIBUNAL_RULES_BASE}/tribunal-procedure-rules\n\nEach chamber has its own rules - navigate to the specific chamber."
                ));
                matched = true;
            }
            _ => {
                result.push_str(&format!(
                    "Ruleset '{rs}' not recognised. Searching all rule sets.\n\n"
                ));
            }
        }
    }

    if !matched {
        result.push_str(&format!(
            "Search across all rule sets:\n\nCivil Procedure Rules (CPR):\n- {CPR_BASE}\n- https://www.legislation.gov.uk/uksi/1998/3132/contents\n\nFamily Procedure Rules (FPR):\n- {FPR_BASE}\n- https://www.legislation.gov.uk/uksi/2010/2955/contents\n\nCourt of Protection Rules (COPR):\n- {COPR_BASE}\n- {COPR_SI}\n\nCriminal Procedure Rules:\n- {CRPR_BASE}\n\nTribunal Procedure Rules:\n- {TRIBUNAL_RULES_BASE}/tribunal-procedure-rules\n\nTip: Use legislation.gov.uk's search function for precise rule location."
        ));
    }

    result
}

/// Index of every rule set this module links to.
pub fn rules_index() -> String {
    format!(
        "Court Procedure Rules Index\n\nCIVIL PROCEDURE RULES (CPR)\n- Index: {CPR_BASE}/rules\n- Legislation: https://www.legislation.gov.uk/uksi/1998/3132/contents\n- Applies to: Civil proceedings in County Court, High Court, Court of Appeal\n\nFAMILY PROCEDURE RULES (FPR)\n- Index: {FPR_BASE}/rules\n- Legislation: https://www.legislation.gov.uk/uksi/2010/2955/contents\n- Applies to: Family proceedings in Family Court, High Court Family Division\n\nCOURT OF PROTECTION RULES (COPR)\n- Index: {COPR_BASE}/rules\n- Legislation: {COPR_SI}\n- Applies to: All Court of Protection proceedings\n\nCRIMINAL PROCEDURE RULES (CrimPR)\n- Index: {CRPR_BASE}/rules\n- Applies to: Criminal proceedings in Magistrates' Court, Crown Court, Court of Appeal\n\nTRIBUNAL PROCEDURE RULES\n- Index: {TRIBUNAL_RULES_BASE}/tribunal-procedure-rules\n- First-tier Tribunal (by chamber)\n- Upper Tribunal (by chamber)\n- Employment Appeal Tribunal\n\nUse:\n- get_cpr(part) for Civil Procedure Rules\n- get_fpr(part) for Family Procedure Rules\n- get_copr(part) for Court of Protection Rules\n- get_tribunal_rules(tribunal) for Tribunal rules\n- search_rules(query) to search across all rules"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpr_part_is_zero_padded_in_url_only() {
        let text = get_cpr("3", None);
        assert!(text.starts_with("Civil Procedure Rules - Part 3\n"));
        assert!(text.contains("Rules: https://www.justice.gov.uk/courts/procedure-rules/civil/rules/part03"));
    }

    #[test]
    fn cpr_leading_zeros_are_normalised() {
        assert_eq!(get_cpr("03", None), get_cpr("3", None));
    }

    #[test]
    fn cpr_two_digit_part_is_untouched() {
        let text = get_cpr("54", None);
        assert!(text.contains("/rules/part54"));
        assert!(text.contains("Practice Direction: https://www.justice.gov.uk/courts/procedure-rules/civil/rules/part54#pd"));
    }

    #[test]
    fn cpr_rule_hint_is_appended() {
        let text = get_cpr("3", Some("3.4"));
        assert!(text.ends_with("Specific rule 3.4: Check the page above and search for 'Rule 3.4'"));
    }

    #[test]
    fn fpr_points_at_contents() {
        let text = get_fpr("12", None);
        assert!(text.starts_with("Family Procedure Rules - Part 12\n"));
        assert!(text.contains("FPR Contents: https://www.justice.gov.uk/courts/procedure-rules/family/rules"));
        assert!(text.contains("- Part 12: Children proceedings (private law)"));
    }

    #[test]
    fn fpr_rule_hint_names_the_part() {
        let text = get_fpr("012", Some("12.3"));
        assert!(text.ends_with("For rule 12.3, navigate to Part 12 on the contents page."));
    }

    #[test]
    fn copr_links_the_statutory_instrument() {
        let text = get_copr("10", None);
        assert!(text.contains("Legislation.gov.uk: https://www.legislation.gov.uk/uksi/2017/1035/contents"));
        assert!(text.contains("- PD 10AA: Deprivation of liberty applications"));
    }

    #[test]
    fn copr_rule_hint_deep_links_the_part() {
        let text = get_copr("21", Some("21.2"));
        assert!(text.ends_with(
            "For rule 21.2, check legislation.gov.uk: https://www.legislation.gov.uk/uksi/2017/1035/contents/part/21"
        ));
    }

    #[test]
    fn tribunal_rules_by_code() {
        let text = get_tribunal_rules("hesc", None);
        assert!(text.starts_with("Tribunal Procedure Rules - Health, Education and Social Care Chamber"));
        assert!(text.contains("#health-education-and-social-care-chamber"));
    }

    #[test]
    fn tribunal_rules_by_common_name() {
        let text = get_tribunal_rules("mental health", None);
        assert!(text.contains("Health, Education and Social Care Chamber"));
    }

    #[test]
    fn upper_tribunal_shortcut() {
        let text = get_tribunal_rules("aac", None);
        assert!(text.contains("Upper Tribunal - Administrative Appeals Chamber"));
        assert!(text.contains("#upper-tribunal-administrative-appeals-chamber"));
    }

    #[test]
    fn tribunal_part_note_is_appended() {
        let text = get_tribunal_rules("grc", Some("5"));
        assert!(text.ends_with("For Part 5, navigate to the rules page and search within the document."));
    }

    #[test]
    fn unknown_tribunal_lists_the_codes() {
        let text = get_tribunal_rules("maritime", None);
        assert!(text.starts_with("Tribunal 'maritime' not recognised."));
        assert!(text.contains("- hesc: Health, Education and Social Care Chamber (including Mental Health)"));
        assert!(text.ends_with("All rules: https://www.gov.uk/government/collections/tribunal-procedure-rules"));
    }

    #[test]
    fn search_rules_cpr_branch() {
        let text = search_rules("summary judgment", Some("civil"));
        assert!(text.starts_with("Searching for: 'summary judgment' in court rules"));
        assert!(text.contains("CPR Search:"));
        assert!(text.contains("uksi/1998/3132"));
        assert!(!text.contains("Search across all rule sets:"));
    }

    #[test]
    fn search_rules_unknown_ruleset_degrades_to_all() {
        let text = search_rules("costs", Some("admiralty"));
        assert!(text.contains("Ruleset 'admiralty' not recognised. Searching all rule sets."));
        assert!(text.contains("Search across all rule sets:"));
    }

    #[test]
    fn search_rules_without_ruleset_lists_everything() {
        let text = search_rules("permission", None);
        assert!(text.contains("Civil Procedure Rules (CPR):"));
        assert!(text.contains("Family Procedure Rules (FPR):"));
        assert!(text.contains("Court of Protection Rules (COPR):"));
        assert!(text.contains("Criminal Procedure Rules:"));
        assert!(text.contains("Tribunal Procedure Rules:"));
    }

    #[test]
    fn rules_index_cites_the_instruments() {
        let text = rules_index();
        assert!(text.contains("uksi/1998/3132"));
        assert!(text.contains("uksi/2010/2955"));
        assert!(text.contains("uksi/2017/1035"));
        assert!(text.contains("CRIMINAL PROCEDURE RULES (CrimPR)"));
    }
}
