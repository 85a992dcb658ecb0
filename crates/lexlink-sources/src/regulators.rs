//! UK regulatory bodies: CQC, ICO, SRA, BSB, LAA, and Ofsted.
//!
//! Each regulator publishes inspection reports, rules, or decisions on its
//! own site. The operations here build search links and summarise what each
//! body covers, so a caller can route a question to the right regulator.

pub const CQC_BASE: &str = "https://www.cqc.org.uk";
pub const CQC_API: &str = "https://api.cqc.org.uk/public/v1";
pub const ICO_BASE: &str = "https://ico.org.uk";
pub const SRA_BASE: &str = "https://www.sra.org.uk";
pub const BSB_BASE: &str = "https://www.barstandardsboard.org.uk";
pub const LAA_BASE: &str = "https://www.gov.uk/government/organisations/legal-aid-agency";
pub const OFSTED_BASE: &str = "https://reports.ofsted.gov.uk";

// ── CQC ────────────────────────────────────────────────────────────────────

/// Search CQC inspection reports by provider name.
pub fn search_cqc(provider_name: &str, location: Option<&str>) -> String {
    let mut search_url = format!(
        "{CQC_BASE}/search/providers?q={}",
        urlencoding::encode(provider_name)
    );
    if let Some(location) = location {
        search_url.push_str(&format!("&location={}", urlencoding::encode(location)));
    }

    let mut result = format!(
        "CQC Provider Search\n\nSearch: {search_url}\n\nSearching for: {provider_name}"
    );
    if let Some(location) = location {
        result.push_str(&format!("\nLocation: {location}"));
    }

    result.push_str(&format!(
        "\n\nThe CQC regulates and inspects:\n- Care homes (residential and nursing)\n- Domiciliary care agencies\n- Hospitals and clinics\n- GP practices\n- Dental practices\n\nCQC API (for programmatic access):\n- API docs: {CQC_API}\n- Locations endpoint: {CQC_API}/locations\n- Providers endpoint: {CQC_API}/providers\n\nRatings explained:\n- Outstanding: Exceptionally good\n- Good: Performing well and meeting expectations\n- Requires improvement: Not performing as well as expected\n- Inadequate: Performing badly; enforcement action taken\n\nCQC inspection reports include:\n- Overall rating and ratings for each key area\n- What the service does well\n- What the service must improve\n- Evidence from inspection"
    ));

    result
}

/// Direct link to one CQC location page.
pub fn get_cqc_report(provider_id: &str) -> String {
    format!(
        "CQC Provider Page\n\nURL: {CQC_BASE}/location/{provider_id}\n\nThe page will show:\n- Current rating and date of last inspection\n- Full inspection report (PDF available)\n- Rating history\n- Services provided\n- Contact information\n\nIf the ID is incorrect, search for the provider:\n{CQC_BASE}/search/providers\n\nCQC API endpoint for this location:\n{CQC_API}/locations/{provider_id}"
    )
}

/// The CQC public API surface.
pub fn get_cqc_api_info() -> String {
    format!(
        "CQC Public API\n\nBase URL: {CQC_API}\n\nEndpoints:\n- GET /locations - Search locations (care homes, services, etc.)\n- GET /locations/{{locationId}} - Get specific location details\n- GET /providers - Search providers (organisations)\n- GET /providers/{{providerId}} - Get specific provider details\n- GET /changes/locations - Get recent changes to locations\n- GET /changes/providers - Get recent changes to providers\n\nExample searches:\n- Care homes in London: {CQC_API}/locations?careHome=Y&localAuthority=London\n- Nursing homes: {CQC_API}/locations?nursingHome=Y\n- By postcode area: {CQC_API}/locations?postalCode=SW1\n\nResponse includes:\n- Location/provider details\n- Current ratings\n- Inspection dates\n- Registration details\n- Contact information\n\nRate limits apply. For high-volume access, contact CQC.\n\nDocumentation: https://www.cqc.org.uk/about-us/transparency/using-cqc-data"
    )
}

// ── ICO ────────────────────────────────────────────────────────────────────

/// Search ICO data protection guidance.
pub fn search_ico_guidance(query: &str) -> String {
    let search_url = format!(
        "{ICO_BASE}/for-organisations/search/?q={}",
        urlencoding::encode(query)
    );

    format!(
        "ICO Guidance Search\n\nSearch: {search_url}\n\nSearching for: {query}\n\nKey ICO Guidance Resources:\n\nUK GDPR / Data Protection Act 2018:\n- Guide to UK GDPR: {ICO_BASE}/for-organisations/uk-gdpr-guidance-and-resources/\n- Lawful basis for processing: {ICO_BASE}/for-organisations/uk-gdpr-guidance-and-resources/lawful-basis-for-processing/\n- Individual rights: {ICO_BASE}/for-organisations/uk-gdpr-guidance-and-resources/individual-rights/\n\nSubject Access Requests (SAR):\n- SAR guidance: {ICO_BASE}/for-organisations/uk-gdpr-guidance-and-resources/individual-rights/right-of-access/\n\nData Breaches:\n- Breach reporting: {ICO_BASE}/for-organisations/report-a-breach/\n- Breach guidance: {ICO_BASE}/for-organisations/uk-gdpr-guidance-and-resources/personal-data-breaches/\n\nFreedom of Information:\n- FOI guidance: {ICO_BASE}/for-organisations/foi/\n- Section 14 vexatious requests: {ICO_BASE}/for-organisations/foi/section-14/\n\nDecision Notices:\n- ICO decisions database: {ICO_BASE}/action-weve-taken/decision-notices/"
    )
}

/// ICO decision notices and enforcement action.
pub fn get_ico_decisions(topic: Option<&str>) -> String {
    let mut result = format!(
        "ICO Decisions and Enforcement\n\nDecision Notices (FOI/EIR):\n{ICO_BASE}/action-weve-taken/decision-notices/\n\nEnforcement Action:\n{ICO_BASE}/action-weve-taken/enforcement/\n\nMonetary Penalties:\n{ICO_BASE}/action-weve-taken/enforcement/\n\nUndertakings:\n{ICO_BASE}/action-weve-taken/enforcement/\n\n"
    );

    if let Some(topic) = topic {
        result.push_str(&format!(
            "Filtered by topic: {topic}\n\nUse the search/filter functions on the ICO website to narrow by:\n- Organisation type\n- Sector\n- Type of breach\n- Date range\n"
        ));
    }

    result.push_str(
        "\nICO decisions are important for:\n- Understanding ICO interpretation of data protection law\n- FOI exemption application\n- Proportionality in SAR responses\n- Regulatory expectations for data controllers\n\nAppeals from ICO decisions go to the First-tier Tribunal (Information Rights).",
    );

    result
}

// ── SRA ────────────────────────────────────────────────────────────────────

/// SRA Standards and Regulations, optionally expanded for one section.
pub fn get_sra_rules(section: Option<&str>) -> String {
    let mut result = format!(
        "SRA Standards and Regulations\n\nSRA Handbook (current standards):\n{SRA_BASE}/solicitors/standards-regulations/\n\nKey Documents:\n\nSRA Principles:\n{SRA_BASE}/solicitors/standards-regulations/principles/\n- Act in a way that upholds the constitutional principle of the rule of law\n- Act in a way that upholds public trust and confidence\n- Act with independence\n- Act with honesty\n- Act with integrity\n- Act in a way that encourages equality, diversity and inclusion\n- Act in the best interests of each client\n\nSRA Code of Conduct for Solicitors:\n{SRA_BASE}/solicitors/standards-regulations/code-conduct-solicitors/\n\nSRA Code of Conduct for Firms:\n{SRA_BASE}/solicitors/standards-regulations/code-conduct-firms/\n\nSRA Accounts Rules:\n{SRA_BASE}/solicitors/standards-regulations/accounts-rules/\n\nSRA Transparency Rules:\n{SRA_BASE}/solicitors/standards-regulations/transparency-rules/\n"
    );

    if let Some(section) = section {
        let section_lower = section.to_lowercase();
        if section_lower.contains("code") {
            result.push_str(&format!(
                "\nSpecific: Code of Conduct\n\nIndividual solicitors: {SRA_BASE}/solicitors/standards-regulations/code-conduct-solicitors/\nFirms: {SRA_BASE}/solicitors/standards-regulations/code-conduct-firms/"
            ));
        } else if section_lower.contains("account") {
            result.push_str(&format!(
                "\nSpecific: Accounts Rules\n\n{SRA_BASE}/solicitors/standards-regulations/accounts-rules/\n\nKey requirements:\n- Client money handling\n- Reconciliations\n- Accountant's reports"
            ));
        } else if section_lower.contains("transparency") {
            result.push_str(&format!(
                "\nSpecific: Transparency Rules\n\n{SRA_BASE}/solicitors/standards-regulations/transparency-rules/\n\nRequirements for publishing:\n- Pricing information for certain services\n- Complaint handling procedures\n- Regulatory status"
            ));
        }
    }

    result.push_str(&format!(
        "\n\nFind a solicitor:\n{SRA_BASE}/consumers/using-solicitor/solicitor-firm-search/\n\nCheck solicitor/firm status:\n{SRA_BASE}/consumers/using-solicitor/solicitor-firm-search/\n\nReport a concern:\n{SRA_BASE}/consumers/problems-solicitor/"
    ));

    result
}

/// SRA disciplinary decisions and the solicitor checker.
pub fn search_sra_decisions(query: &str) -> String {
    format!(
        "SRA Disciplinary Decisions\n\nSearch solicitor records: {SRA_BASE}/consumers/solicitor-check/\n\nSearching for: {query}\n\nThe SRA publishes:\n- Regulatory decisions\n- Tribunal decisions (referred to SDT)\n- Conditions on practice\n- Interventions\n\nSolicitors Disciplinary Tribunal (SDT):\nhttps://www.solicitorstribunal.org.uk/\n- Full tribunal judgments\n- Searchable database of decisions\n\nFor individual solicitor records, use the solicitor checker to view:\n- Current practising status\n- Any regulatory history\n- Firm associations"
    )
}

// ── BSB ────────────────────────────────────────────────────────────────────

/// BSB Handbook and Code guidance, optionally expanded for one section.
pub fn get_bsb_rules(section: Option<&str>) -> String {
    let mut result = format!(
        "Bar Standards Board Rules and Guidance\n\nBSB Handbook:\n{BSB_BASE}/for-barristers/bsb-handbook-and-code-guidance/\n\nCore Documents:\n\nCode of Conduct:\n{BSB_BASE}/for-barristers/bsb-handbook-and-code-guidance/code-of-conduct/\n\nCore Duties:\nCD1: Act with honesty and integrity\nCD2: Do not behave in a way likely to diminish public trust\nCD3: Act in the best interests of each client\nCD4: Maintain your independence\nCD5: Do not behave in a way likely to diminish confidence in the legal profession\nCD6: Keep your affairs of clients confidential\nCD7: Provide a competent standard of work\nCD8: Do not discriminate unlawfully\nCD9: Be open and cooperative with regulators\nCD10: Take reasonable steps to manage your practice competently\n\nGuidance on:\n- Cab rank rule\n- Conflicts of interest\n- Complaints handling\n- Continuing professional development\n\n"
    );

    if let Some(section) = section {
        let section_lower = section.to_lowercase();
        if section_lower.contains("conduct") {
            result.push_str(&format!(
                "\nSpecific: Code of Conduct\n{BSB_BASE}/for-barristers/bsb-handbook-and-code-guidance/code-of-conduct/"
            ));
        } else if section_lower.contains("equality") || section_lower.contains("discrimination") {
            result.push_str(&format!(
                "\nSpecific: Equality Rules\n{BSB_BASE}/for-barristers/bsb-handbook-and-code-guidance/equality-rules/"
            ));
        }
    }

    result.push_str(&format!(
        "\n\nFind a barrister:\n{BSB_BASE}/for-the-public/search-a-barrister/\n\nReport a concern:\n{BSB_BASE}/for-the-public/reporting-concerns/\n\nDisciplinary decisions:\n{BSB_BASE}/for-the-public/search-a-barrister/ (includes disciplinary history)"
    ));

    result
}

// ── LAA ────────────────────────────────────────────────────────────────────

/// Search Legal Aid Agency guidance on gov.uk.
pub fn search_laa(query: &str) -> String {
    let search_url = format!(
        "https://www.gov.uk/search/all?q={}&filter_organisations%5B%5D=legal-aid-agency",
        urlencoding::encode(query)
    );

    format!(
        "Legal Aid Agency Guidance Search\n\nSearch: {search_url}\n\nSearching for: {query}\n\nKey LAA Resources:\n\nLegal Aid Legislation:\n- LASPO 2012: https://www.legislation.gov.uk/ukpga/2012/10/contents\n- Civil Legal Aid Regulations: https://www.legislation.gov.uk/uksi/2013/480/contents\n- Criminal Legal Aid Regulations: https://www.legislation.gov.uk/uksi/2013/435/contents\n\nGuidance and Manuals:\n\nCivil Legal Aid:\n- Scope of civil legal aid: {LAA_BASE}/collections/civil-legal-aid\n- Means assessment guidance: {LAA_BASE}/collections/civil-legal-aid\n- Merits criteria: {LAA_BASE}/collections/civil-legal-aid\n\nExceptional Case Funding (ECF):\n- ECF guidance: {LAA_BASE}/collections/civil-legal-aid\n- ECF application form: https://www.gov.uk/guidance/exceptional-case-funding-ecf-how-to-apply\n\nFamily Legal Aid:\n- Family scope: {LAA_BASE}/collections/civil-legal-aid\n- MIAM exemptions\n- Domestic abuse evidence requirements\n\nProvider Guidance:\n- Contract specifications\n- Billing guidance\n- Quality standards\n\nFind legal aid:\nhttps://www.gov.uk/check-legal-aid\nhttps://www.gov.uk/find-legal-advice"
    )
}

/// Legal aid remuneration rates.
pub fn get_laa_rates() -> String {
    format!(
        "Legal Aid Remuneration Rates\n\nCurrent Rates and Fees:\n\nCivil Legal Aid Rates:\n{LAA_BASE}/publications/civil-legal-aid-remuneration-rates\n\nFamily Legal Aid Rates:\n{LAA_BASE}/publications/civil-legal-aid-remuneration-rates\n\nCriminal Legal Aid Rates:\n{LAA_BASE}/publications/criminal-legal-aid-remuneration-rates\n\nThe rates are set out in:\n- Civil Legal Aid (Remuneration) Regulations 2013\n- Criminal Legal Aid (Remuneration) Regulations 2013\n\nKey elements:\n- Hourly rates (where applicable)\n- Fixed fees\n- Graduated fees\n- High cost case management\n\nFor Court of Protection:\n- Non-means tested under Reg 5(1)(g) for DoLS challenges\n- Controlled work rates apply\n- Licensed work for complex cases\n\nContract documents:\n{LAA_BASE}/collections/legal-aid-agency-contracts"
    )
}

// ── Ofsted ─────────────────────────────────────────────────────────────────

/// Search Ofsted inspection reports.
pub fn search_ofsted(provider_name: &str, location: Option<&str>) -> String {
    let mut search_url = format!(
        "{OFSTED_BASE}/search?q={}",
        urlencoding::encode(provider_name)
    );
    if let Some(location) = location {
        search_url.push_str(&format!("&location={}", urlencoding::encode(location)));
    }

    let mut result = format!(
        "Ofsted Inspection Reports Search\n\nSearch: {search_url}\n\nSearching for: {provider_name}"
    );
    if let Some(location) = location {
        result.push_str(&format!("\nLocation: {location}"));
    }

    result.push_str(&format!(
        "\n\nOfsted inspects and regulates:\n- Schools (maintained, academies, independent)\n- Early years providers (nurseries, childminders)\n- Children's social care (children's homes, fostering, adoption)\n- Further education colleges\n- Initial teacher training\n\nRatings:\n- Outstanding\n- Good\n- Requires improvement\n- Inadequate\n\nFor children's homes and social care:\n{OFSTED_BASE}/social-care\n\nSearch by URN (Unique Reference Number):\n{OFSTED_BASE}/provider/{{urn}}\n\nDownload data:\n- School performance tables: https://www.gov.uk/school-performance-tables\n- Ofsted data: https://www.gov.uk/government/statistical-data-sets/ofsted-annual-reports-statistics"
    ));

    result
}

/// Direct link to one Ofsted provider page by URN.
pub fn get_ofsted_report(urn: &str) -> String {
    format!(
        "Ofsted Provider Page\n\nURL: {OFSTED_BASE}/provider/{urn}\n\nThe page will show:\n- Current rating and date of last inspection\n- Full inspection report (PDF available)\n- Rating history\n- Type of provision\n- Contact information\n\nIf the URN is incorrect, search for the provider:\n{OFSTED_BASE}/search\n\nFind your URN:\n- Schools: Check Get Information About Schools (GIAS)\n- Early years: On your Ofsted registration documents\n- Children's homes: On your Ofsted certificate"
    )
}

// ── Index ──────────────────────────────────────────────────────────────────

/// Index of every regulator this crate links to.
pub fn list_regulators() -> String {
    format!(
        "UK Regulatory Bodies Index\n\nHEALTH AND SOCIAL CARE\n\nCQC (Care Quality Commission):\n- Website: {CQC_BASE}\n- API: {CQC_API}\n- Regulates: Care homes, hospitals, GPs, dental practices, domiciliary care\n- Use: search_cqc(), get_cqc_report()\n\nDATA PROTECTION\n\nICO (Information Commissioner's Office):\n- Website: {ICO_BASE}\n- Regulates: Data protection, FOI, privacy\n- Use: search_ico_guidance(), get_ico_decisions()\n\nLEGAL PROFESSION\n\nSRA (Solicitors Regulation Authority):\n- Website: {SRA_BASE}\n- Regulates: Solicitors and law firms in England & Wales\n- Use: get_sra_rules(), search_sra_decisions()\n\nBSB (Bar Standards Board):\n- Website: {BSB_BASE}\n- Regulates: Barristers in England & Wales\n- Use: get_bsb_rules()\n\nLAA (Legal Aid Agency):\n- Website: {LAA_BASE}\n- Manages: Legal aid funding\n- Use: search_laa(), get_laa_rates()\n\nEDUCATION\n\nOfsted:\n- Website: {OFSTED_BASE}\n- Regulates: Schools, nurseries, children's homes, FE colleges\n- Use: search_ofsted(), get_ofsted_report()\n\nOTHER RELEVANT REGULATORS\n\nGMC (General Medical Council): https://www.gmc-uk.org\nNMC (Nursing and Midwifery Council): https://www.nmc.org.uk\nHCPC (Health and Care Professions Council): https://www.hcpc-uk.org\nSocial Work England: https://www.socialworkengland.org.uk\nFCA (Financial Conduct Authority): https://www.fca.org.uk"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cqc_search_carries_both_parameters() {
        let text = search_cqc("Oakwood House", Some("Exeter"));
        assert!(text.contains("/search/providers?q=Oakwood%20House&location=Exeter"));
        assert!(text.contains("\nLocation: Exeter"));
    }

    #[test]
    fn cqc_report_links_web_and_api() {
        let text = get_cqc_report("1-123456789");
        assert!(text.contains("URL: https://www.cqc.org.uk/location/1-123456789"));
        assert!(text.contains("https://api.cqc.org.uk/public/v1/locations/1-123456789"));
    }

    #[test]
    fn cqc_api_info_keeps_placeholders_literal() {
        let text = get_cqc_api_info();
        assert!(text.contains("- GET /locations/{locationId} - Get specific location details"));
        assert!(text.contains("?careHome=Y&localAuthority=London"));
    }

    #[test]
    fn ico_search_encodes_the_query() {
        let text = search_ico_guidance("subject access request");
        assert!(text.contains("/for-organisations/search/?q=subject%20access%20request"));
        assert!(text.contains("Section 14 vexatious requests:"));
    }

    #[test]
    fn ico_decisions_topic_filter_is_optional() {
        let with_topic = get_ico_decisions(Some("local authority"));
        assert!(with_topic.contains("Filtered by topic: local authority"));

        let bare = get_ico_decisions(None);
        assert!(!bare.contains("Filtered by topic"));
        assert!(bare.ends_with(
            "Appeals from ICO decisions go to the First-tier Tribunal (Information Rights)."
        ));
    }

    #[test]
    fn sra_rules_expand_the_accounts_section() {
        let text = get_sra_rules(Some("accounts"));
        assert!(text.contains("\nSpecific: Accounts Rules\n"));
        assert!(text.contains("- Accountant's reports"));
        assert!(text.ends_with("https://www.sra.org.uk/consumers/problems-solicitor/"));
    }

    #[test]
    fn sra_rules_ignore_unknown_sections() {
        let text = get_sra_rules(Some("advertising"));
        assert!(!text.contains("Specific:"));
    }

    #[test]
    fn bsb_rules_list_all_ten_core_duties() {
        let text = get_bsb_rules(None);
        assert!(text.contains("CD1: Act with honesty and integrity"));
        assert!(text.contains("CD10: Take reasonable steps to manage your practice competently"));
    }

    #[test]
    fn bsb_discrimination_reaches_the_equality_rules() {
        let text = get_bsb_rules(Some("discrimination"));
        assert!(text.contains("\nSpecific: Equality Rules\n"));
    }

    #[test]
    fn laa_search_filters_by_organisation() {
        let text = search_laa("means test");
        assert!(text.contains(
            "https://www.gov.uk/search/all?q=means%20test&filter_organisations%5B%5D=legal-aid-agency"
        ));
        assert!(text.contains("- LASPO 2012: https://www.legislation.gov.uk/ukpga/2012/10/contents"));
    }

    #[test]
    fn laa_rates_cover_cop_funding() {
        let text = get_laa_rates();
        assert!(text.contains("- Non-means tested under Reg 5(1)(g) for DoLS challenges"));
    }

    #[test]
    fn ofsted_report_uses_the_urn() {
        let text = get_ofsted_report("123456");
        assert!(text.contains("URL: https://reports.ofsted.gov.uk/provider/123456"));
    }

    #[test]
    fn regulator_index_names_every_body() {
        let text = list_regulators();
        for name in ["CQC", "ICO", "SRA", "BSB", "LAA", "Ofsted"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.ends_with("FCA (Financial Conduct Authority): https://www.fca.org.uk"));
    }
}
