//! Statutory codes of practice, with chapter-level lookups.
//!
//! Each code holds its gov.uk publication URL and a full chapter table, so
//! callers can be steered to the right chapter without fetching anything.

use std::collections::HashSet;

use crate::GOV_UK_BASE;

struct Code {
    main: &'static str,
    chapters: &'static [(&'static str, &'static str)],
}

static MCA_CODE: Code = Code {
    main: "https://www.gov.uk/government/publications/mental-capacity-act-code-of-practice",
    chapters: &[
        ("1", "What is the Mental Capacity Act 2005?"),
        ("2", "What are the statutory principles and how should they be applied?"),
        ("3", "How should people be helped to make their own decisions?"),
        ("4", "How does the Act define 'lack of capacity'?"),
        ("5", "What does the Act mean when it talks about 'best interests'?"),
        ("6", "What protection does the Act offer for people providing care or treatment?"),
        ("7", "What does the Act say about Lasting Powers of Attorney?"),
        ("8", "What is the role of the Court of Protection and the court-appointed deputies?"),
        ("9", "What does the Act say about advance decisions to refuse treatment?"),
        ("10", "What is the new Independent Mental Capacity Advocate service?"),
        ("11", "How does the Act affect research projects involving a person who lacks capacity?"),
        ("12", "How does the Act apply to children and young people?"),
        ("13", "What is the relationship between the Mental Capacity Act and the Mental Health Act?"),
        ("14", "What happens if someone is abused or neglected?"),
        ("15", "What are the roles of various public bodies in protecting those who lack capacity?"),
        ("16", "What rules govern access to information about a person who lacks capacity?"),
    ],
};

static DOLS_CODE: Code = Code {
    main: "https://www.gov.uk/government/publications/deprivation-of-liberty-safeguards-code-of-practice",
    chapters: &[
        ("1", "What are the deprivation of liberty safeguards and why were they introduced?"),
        ("2", "What is deprivation of liberty?"),
        ("3", "How and when can deprivation of liberty be applied for and authorised?"),
        ("4", "What is the role of the relevant person's representative?"),
        ("5", "What should happen once authorization is given?"),
        ("6", "When can a person be moved to another place?"),
        ("7", "What is the Court of Protection's role?"),
        ("8", "What happens when a person becomes 18?"),
        ("9", "What are the responsibilities of NHS bodies?"),
        ("10", "What is the role of the Care Quality Commission?"),
        ("11", "How is the supervisory body's role carried out?"),
    ],
};

static CARE_ACT_GUIDANCE: Code = Code {
    main: "https://www.gov.uk/government/publications/care-act-statutory-guidance",
    chapters: &[
        ("1", "Promoting individual wellbeing"),
        ("2", "Preventing, reducing or delaying needs"),
        ("3", "Information and advice"),
        ("4", "Market shaping and commissioning"),
        ("5", "Managing provider failure and other service interruptions"),
        ("6", "Assessment and eligibility"),
        ("7", "Independent advocacy"),
        ("8", "Charging and financial assessment"),
        ("9", "Deferred payment agreements"),
        ("10", "Care and support planning"),
        ("11", "Personal budgets"),
        ("12", "Direct payments"),
        ("13", "Review of care and support plans"),
        ("14", "Safeguarding"),
        ("15", "Integration and partnership working"),
        ("16", "Delegation of local authority functions"),
        ("17", "Ordinary residence"),
        ("18", "Continuity of care"),
        ("19", "Transition to adult care and support"),
        ("20", "Continuity of care for people moving between areas"),
        ("21", "Cross-border placements"),
        ("22", "Prisons and approved premises"),
        ("23", "Annexes"),
    ],
};

static MHA_CODE: Code = Code {
    main: "https://www.gov.uk/government/publications/code-of-practice-mental-health-act-1983",
    chapters: &[
        ("1", "The role of this Code and how to use it"),
        ("2", "The guiding principles"),
        ("3", "Human rights, equality and health inequalities"),
        ("4", "Information for patients, nearest relatives and others"),
        ("5", "The nearest relative"),
        ("6", "Mental disorder"),
        ("7", "Appropriate medical treatment"),
        ("8", "Applications for detention in hospital"),
        ("9", "Holding powers"),
        ("10", "Police powers"),
        ("11", "Conveyance of patients"),
        ("12", "Transfer of patients"),
        ("13", "Receipt and scrutiny of documents"),
        ("14", "Admission, guardianship and treatment under the Act"),
        ("15", "Duties of hospital managers"),
        ("16", "Communication, information and record keeping"),
        ("17", "Conflicts of interest"),
        ("18", "Doctors approved under section 12"),
        ("19", "Leave of absence"),
        ("20", "Absence without leave"),
        ("21", "Discharge"),
        ("22", "After-care"),
        ("23", "Medical treatment under the Act"),
        ("24", "Treatments requiring consent and a second opinion"),
        ("25", "Treatments requiring consent or a second opinion"),
        ("26", "The Mental Health Tribunal"),
        ("27", "CTO patients"),
        ("28", "Guardianship"),
        ("29", "Children and young people"),
        ("30", "The interface with other legislation"),
        ("31", "People with learning disabilities or autistic spectrum disorders"),
        ("32", "People with personality disorders"),
        ("33", "Patients concerned with criminal proceedings"),
        ("34", "Victims"),
    ],
};

static SEND_CODE: Code = Code {
    main: "https://www.gov.uk/government/publications/send-code-of-practice-0-to-25",
    chapters: &[
        ("1", "Principles"),
        ("2", "Impartial information, advice and support"),
        ("3", "Working together across education, health and care"),
        ("4", "The Local Offer"),
        ("5", "Early years providers"),
        ("6", "Schools"),
        ("7", "Further education"),
        ("8", "Preparing for adulthood"),
        ("9", "Education, Health and Care needs assessments and plans"),
        ("10", "Children and young people in specific circumstances"),
        ("11", "Resolving disagreements"),
    ],
};

fn chapter_section(code: &Code, chapter: &str, doc_word: &str, max: u8) -> String {
    let ch = chapter.trim();
    match code.chapters.iter().find(|(num, _)| *num == ch) {
        Some((_, title)) => format!(
            "Chapter {ch}: {title}\n\nAccess the {doc_word} and navigate to Chapter {ch}: {}",
            code.main
        ),
        None => format!("Chapter {ch} not found. Chapters run from 1 to {max}.\n"),
    }
}

fn chapter_listing(chapters: &[(&str, &str)]) -> String {
    chapters
        .iter()
        .map(|(num, title)| format!("  {num}. {title}\n"))
        .collect()
}

/// The MCA Code of Practice, optionally narrowed to one chapter.
pub fn get_mca_code(chapter: Option<&str>) -> String {
    let mut result = format!(
        "Mental Capacity Act 2005 Code of Practice\n\nMain document: {}\n\nThe MCA Code provides guidance on how to act in relation to people who lack\nmental capacity to make decisions for themselves. Under s.42(5) MCA 2005,\ncertain people must have regard to the Code.\n\n",
        MCA_CODE.main
    );

    match chapter {
        Some(ch) => result.push_str(&chapter_section(&MCA_CODE, ch, "Code", 16)),
        None => {
            result.push_str("Chapters:\n");
            result.push_str(&chapter_listing(MCA_CODE.chapters));
        }
    }

    result.push_str(
        "\n\nRelated legislation:\n- Mental Capacity Act 2005: https://www.legislation.gov.uk/ukpga/2005/9/contents\n- MCA regulations: https://www.legislation.gov.uk/uksi/2007/1899/contents",
    );
    result
}

/// DoLS guidance, including the Re X route for non-institutional settings.
pub fn get_dols_guidance() -> String {
    let chapters = DOLS_CODE
        .chapters
        .iter()
        .map(|(num, title)| format!("  {num}. {title}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Deprivation of Liberty Safeguards (DoLS) Guidance\n\nCode of Practice: {}\n\nThe DoLS Code supplements the main MCA Code with guidance specific to\nSchedule A1 MCA 2005 (Deprivation of Liberty Safeguards).\n\nChapters:\n{chapters}\n\nIMPORTANT: DoLS applies to care homes and hospitals. For supported living\nand domestic settings, deprivation of liberty must be authorised by the\nCourt of Protection (see Re X [2014] EWCOP 25).\n\nRelated resources:\n- ADASS DoLS resources: https://www.adass.org.uk/dols\n- DoLS forms: {GOV_UK_BASE}/government/collections/dols-forms\n- MCA Code of Practice: {}\n- Schedule A1 MCA 2005: https://www.legislation.gov.uk/ukpga/2005/9/schedule/A1\n\nLiberty Protection Safeguards (LPS):\nThe Mental Capacity (Amendment) Act 2019 creates Liberty Protection Safeguards\nto replace DoLS. Implementation has been delayed. Check for updates:\n{GOV_UK_BASE}/government/publications/liberty-protection-safeguards-factsheets",
        DOLS_CODE.main, MCA_CODE.main
    )
}

/// Care Act statutory guidance; the bare listing shows the first 15 chapters.
pub fn get_care_act_guidance(chapter: Option<&str>) -> String {
    let mut result = format!(
        "Care Act 2014 Statutory Guidance\n\nMain document: {}\n\nStatutory guidance issued under s.78 Care Act 2014. Local authorities must\nact under this guidance in exercising their social care functions.\n\n",
        CARE_ACT_GUIDANCE.main
    );

    match chapter {
        Some(ch) => result.push_str(&chapter_section(&CARE_ACT_GUIDANCE, ch, "guidance", 23)),
        None => {
            result.push_str("Chapters:\n");
            result.push_str(&chapter_listing(&CARE_ACT_GUIDANCE.chapters[..15]));
            result.push_str("  ...(and more)\n");
        }
    }

    result.push_str(
        "\n\nKey chapters for legal work:\n- Chapter 6: Assessment and eligibility\n- Chapter 10: Care and support planning\n- Chapter 14: Safeguarding\n- Chapter 17: Ordinary residence\n- Chapter 19: Transition to adult care\n\nLegislation: https://www.legislation.gov.uk/ukpga/2014/23/contents",
    );
    result
}

/// The MHA Code of Practice; the bare listing shows selected chapters only.
pub fn get_mha_code(chapter: Option<&str>) -> String {
    let mut result = format!(
        "Mental Health Act 1983 Code of Practice\n\nMain document: {}\n\nStatutory guidance issued under s.118 MHA 1983. Practitioners must have\nregard to the Code when exercising functions under the Act.\n\n",
        MHA_CODE.main
    );

    match chapter {
        Some(ch) => result.push_str(&chapter_section(&MHA_CODE, ch, "Code", 34)),
        None => {
            result.push_str("Selected chapters:\n");
            for key in ["2", "6", "14", "22", "23", "28", "29", "30"] {
                if let Some((num, title)) = MHA_CODE.chapters.iter().find(|(num, _)| *num == key) {
                    result.push_str(&format!("  {num}. {title}\n"));
                }
            }
            result.push_str("\n(Total 34 chapters - see full document for complete list)");
        }
    }

    result.push_str(
        "\n\nKey chapters:\n- Chapter 2: The guiding principles\n- Chapter 14: Applications and detention\n- Chapter 22: After-care (s.117)\n- Chapter 23: Medical treatment\n- Chapter 30: Interface with MCA and other legislation\n\nLegislation: https://www.legislation.gov.uk/ukpga/1983/20/contents",
    );
    result
}

/// The SEND Code of Practice, optionally narrowed to one chapter.
pub fn get_send_code(chapter: Option<&str>) -> String {
    let mut result = format!(
        "SEND Code of Practice: 0 to 25 years\n\nMain document: {}\n\nStatutory guidance for organisations which work with and support children\nand young people with special educational needs or disabilities.\n\n",
        SEND_CODE.main
    );

    match chapter {
        Some(ch) => result.push_str(&chapter_section(&SEND_CODE, ch, "Code", 11)),
        None => {
            result.push_str("Chapters:\n");
            result.push_str(&chapter_listing(SEND_CODE.chapters));
        }
    }

    result.push_str(
        "\n\nKey chapters:\n- Chapter 9: EHC needs assessments and plans\n- Chapter 10: Specific circumstances (looked after children, custody, etc.)\n- Chapter 11: Resolving disagreements (including Tribunal)\n\nLegislation:\n- Children and Families Act 2014: https://www.legislation.gov.uk/ukpga/2014/6/contents\n- SEND Regulations 2014: https://www.legislation.gov.uk/uksi/2014/1530/contents\n\nTribunal:\n- First-tier Tribunal (SEND): https://www.gov.uk/courts-tribunals/first-tier-tribunal-special-educational-needs-and-disability",
    );
    result
}

/// Topic search across every code, deduplicated per code and chapter.
pub fn search_codes(query: &str) -> String {
    let query_lower = query.to_lowercase();
    let mut result = format!("Searching codes of practice for: '{query}'\n\n");

    // One row per topic reference; rows for the same topic stay adjacent.
    let topic_refs: &[(&str, &str, &str, &str)] = &[
        ("capacity", "MCA Code", "Chapter 4: How does the Act define 'lack of capacity'?", MCA_CODE.main),
        ("capacity", "MCA Code", "Chapter 3: How should people be helped to make their own decisions?", MCA_CODE.main),
        ("best interests", "MCA Code", "Chapter 5: What does the Act mean when it talks about 'best interests'?", MCA_CODE.main),
        ("deprivation", "DoLS Code", "Chapter 2: What is deprivation of liberty?", DOLS_CODE.main),
        ("deprivation", "DoLS Code", "Chapter 3: How and when can deprivation of liberty be authorised?", DOLS_CODE.main),
        ("safeguarding", "Care Act Guidance", "Chapter 14: Safeguarding", CARE_ACT_GUIDANCE.main),
        ("safeguarding", "MCA Code", "Chapter 14: What happens if someone is abused or neglected?", MCA_CODE.main),
        ("assessment", "Care Act Guidance", "Chapter 6: Assessment and eligibility", CARE_ACT_GUIDANCE.main),
        ("assessment", "MCA Code", "Chapter 4: How does the Act define 'lack of capacity'?", MCA_CODE.main),
        ("lpa", "MCA Code", "Chapter 7: What does the Act say about Lasting Powers of Attorney?", MCA_CODE.main),
        ("deputy", "MCA Code", "Chapter 8: What is the role of the Court of Protection and court-appointed deputies?", MCA_CODE.main),
        ("imca", "MCA Code", "Chapter 10: What is the new Independent Mental Capacity Advocate service?", MCA_CODE.main),
        ("detention", "MHA Code", "Chapter 14: Applications for detention in hospital", MHA_CODE.main),
        ("detention", "DoLS Code", "Chapter 3: How and when can deprivation of liberty be authorised?", DOLS_CODE.main),
        ("s117", "MHA Code", "Chapter 22: After-care", MHA_CODE.main),
        ("after-care", "MHA Code", "Chapter 22: After-care", MHA_CODE.main),
        ("aftercare", "MHA Code", "Chapter 22: After-care", MHA_CODE.main),
        ("ehc", "SEND Code", "Chapter 9: Education, Health and Care needs assessments and plans", SEND_CODE.main),
        ("transition", "Care Act Guidance", "Chapter 19: Transition to adult care and support", CARE_ACT_GUIDANCE.main),
        ("transition", "SEND Code", "Chapter 8: Preparing for adulthood", SEND_CODE.main),
        ("ordinary residence", "Care Act Guidance", "Chapter 17: Ordinary residence", CARE_ACT_GUIDANCE.main),
    ];

    let mut found = Vec::new();
    for (topic, code, chapter, url) in topic_refs {
        if query_lower.contains(topic) {
            found.push((code, chapter, url));
        }
    }

    if found.is_empty() {
        result.push_str("No specific matches found. Try one of these topics:\n");
        result.push_str("- capacity, best interests, safeguarding, assessment\n");
        result.push_str("- deprivation, detention, lpa, deputy, imca\n");
        result.push_str("- s117, after-care, ehc, transition, ordinary residence\n\n");
    } else {
        result.push_str("Relevant sections:\n\n");
        let mut seen = HashSet::new();
        for (code, chapter, url) in found {
            if seen.insert(format!("{code}:{chapter}")) {
                result.push_str(&format!("- {code}: {chapter}\n  {url}\n\n"));
            }
        }
    }

    result.push_str(&format!(
        "\nAll Codes of Practice:\n- MCA Code: {}\n- DoLS Code: {}\n- Care Act Guidance: {}\n- MHA Code: {}\n- SEND Code: {}",
        MCA_CODE.main, DOLS_CODE.main, CARE_ACT_GUIDANCE.main, MHA_CODE.main, SEND_CODE.main
    ));

    result
}

/// Index of every code this crate links to.
pub fn list_all_codes() -> String {
    format!(
        "Codes of Practice and Statutory Guidance\n\nMENTAL CAPACITY ACT 2005\n- MCA Code of Practice: {}\n- DoLS Code of Practice: {}\n\nCARE ACT 2014\n- Care Act Statutory Guidance: {}\n\nMENTAL HEALTH ACT 1983\n- MHA Code of Practice: {}\n\nCHILDREN AND FAMILIES ACT 2014\n- SEND Code of Practice: {}\n- Working Together to Safeguard Children: {GOV_UK_BASE}/government/publications/working-together-to-safeguard-children--2\n\nOTHER KEY GUIDANCE\n- Charging for care guidance: {GOV_UK_BASE}/government/publications/charging-for-residential-accommodation-guide\n- Ordinary residence disputes: {GOV_UK_BASE}/government/publications/care-act-statutory-guidance (Chapter 17)\n- OPG practice guidance: {GOV_UK_BASE}/government/collections/opg-practice-guidance\n\nUse:\n- get_mca_code(chapter) for MCA Code\n- get_dols_guidance() for DoLS guidance\n- get_care_act_guidance(chapter) for Care Act guidance\n- get_mha_code(chapter) for MHA Code\n- get_send_code(chapter) for SEND Code\n- search_codes(query) to search across all codes",
        MCA_CODE.main, DOLS_CODE.main, CARE_ACT_GUIDANCE.main, MHA_CODE.main, SEND_CODE.main
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mca_chapter_lookup() {
        let text = get_mca_code(Some("5"));
        assert!(text.contains(
            "Chapter 5: What does the Act mean when it talks about 'best interests'?"
        ));
        assert!(text.contains("Access the Code and navigate to Chapter 5:"));
        assert!(text.ends_with("https://www.legislation.gov.uk/uksi/2007/1899/contents"));
    }

    #[test]
    fn mca_chapter_out_of_range() {
        let text = get_mca_code(Some("17"));
        assert!(text.contains("Chapter 17 not found. Chapters run from 1 to 16.\n"));
    }

    #[test]
    fn chapter_numbers_are_trimmed() {
        let text = get_mca_code(Some(" 5 "));
        assert!(text.contains("Chapter 5: What does the Act mean"));
    }

    #[test]
    fn mca_bare_listing_is_complete() {
        let text = get_mca_code(None);
        assert!(text.contains("  1. What is the Mental Capacity Act 2005?\n"));
        assert!(text.contains(
            "  16. What rules govern access to information about a person who lacks capacity?\n"
        ));
    }

    #[test]
    fn care_act_listing_stops_at_fifteen() {
        let text = get_care_act_guidance(None);
        assert!(text.contains("  15. Integration and partnership working\n"));
        assert!(!text.contains("  16. Delegation of local authority functions"));
        assert!(text.contains("  ...(and more)\n"));
    }

    #[test]
    fn care_act_chapter_seventeen() {
        let text = get_care_act_guidance(Some("17"));
        assert!(text.contains("Chapter 17: Ordinary residence"));
        assert!(text.contains("Access the guidance and navigate to Chapter 17:"));
    }

    #[test]
    fn mha_bare_listing_is_selective() {
        let text = get_mha_code(None);
        assert!(text.contains("Selected chapters:\n"));
        assert!(text.contains("  22. After-care\n"));
        assert!(!text.contains("  1. The role of this Code"));
        assert!(text.contains("(Total 34 chapters - see full document for complete list)"));
    }

    #[test]
    fn mha_last_chapter_resolves() {
        let text = get_mha_code(Some("34"));
        assert!(text.contains("Chapter 34: Victims"));
    }

    #[test]
    fn send_chapter_nine() {
        let text = get_send_code(Some("9"));
        assert!(text.contains(
            "Chapter 9: Education, Health and Care needs assessments and plans"
        ));
    }

    #[test]
    fn dols_guidance_flags_the_re_x_route() {
        let text = get_dols_guidance();
        assert!(text.contains("  2. What is deprivation of liberty?\n"));
        assert!(text.contains("Court of Protection (see Re X [2014] EWCOP 25)"));
        assert!(text.contains("ukpga/2005/9/schedule/A1"));
        assert!(text.ends_with(
            "https://www.gov.uk/government/publications/liberty-protection-safeguards-factsheets"
        ));
    }

    #[test]
    fn search_finds_best_interests() {
        let text = search_codes("best interests");
        assert!(text.contains(
            "- MCA Code: Chapter 5: What does the Act mean when it talks about 'best interests'?"
        ));
        assert!(text.contains("All Codes of Practice:"));
    }

    #[test]
    fn search_deduplicates_shared_references() {
        // "capacity" and "assessment" both point at MCA chapter 4.
        let text = search_codes("capacity assessment");
        assert_eq!(
            text.matches("Chapter 4: How does the Act define 'lack of capacity'?")
                .count(),
            1
        );
    }

    #[test]
    fn search_without_matches_suggests_topics() {
        let text = search_codes("adverse possession");
        assert!(text.contains("No specific matches found. Try one of these topics:\n"));
        assert!(text.contains("- s117, after-care, ehc, transition, ordinary residence\n"));
    }

    #[test]
    fn code_index_lists_every_code() {
        let text = list_all_codes();
        assert!(text.contains("MENTAL HEALTH ACT 1983"));
        assert!(text.contains("working-together-to-safeguard-children--2"));
        assert!(text.ends_with("- search_codes(query) to search across all codes"));
    }
}
