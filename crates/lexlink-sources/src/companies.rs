//! Companies House links, for both the public website and the JSON API.
//!
//! The register is free to browse on the web; the API needs a key but costs
//! nothing. Company numbers are normalised before use, so "1" reaches
//! company 00000001 and "sc123456" reaches SC123456.

use lexlink_core::company_number;

pub const CH_API_BASE: &str = "https://api.company-information.service.gov.uk";
pub const CH_WEB_BASE: &str = "https://find-and-update.company-information.service.gov.uk";

/// Search the register by company name or number.
pub fn search_companies(query: &str) -> String {
    let web_search_url = format!("{CH_WEB_BASE}/search?q={}", urlencoding::encode(query));
    let api_search_url = format!(
        "{CH_API_BASE}/search/companies?q={}",
        urlencoding::encode(query)
    );

    format!(
        "Companies House Search\n\nWeb search: {web_search_url}\nAPI endpoint: {api_search_url} (requires API key)\n\nSearching for: {query}\n\nThe search will return:\n- Company name\n- Company number\n- Registered office address\n- Company status (active, dissolved, etc.)\n- Company type (Ltd, PLC, LLP, etc.)\n\nTo search by company number directly, use get_company(\"12345678\")\n\nCompany types:\n- ltd / private-limited-shares-section-30-exemption\n- plc / public-limited-company\n- llp / limited-liability-partnership\n- charitable-incorporated-organisation\n- registered-society\n- scottish-partnership\n- and others\n\nFree API access:\nRegister at https://developer.company-information.service.gov.uk\n- 600 requests per 5 minutes\n- No cost for public data\n\nCompanies House web services:\n- Search: {CH_WEB_BASE}\n- Filing history\n- Accounts\n- Officers\n- Persons with significant control"
    )
}

/// Direct links to one company's register pages.
pub fn get_company(number: &str) -> String {
    let cn = company_number(number);
    let web_url = format!("{CH_WEB_BASE}/company/{cn}");
    let api_url = format!("{CH_API_BASE}/company/{cn}");

    format!(
        "Companies House - Company {cn}\n\nCompany page: {web_url}\nAPI endpoint: {api_url} (requires API key)\n\nThe company page shows:\n- Company overview (status, type, incorporation date)\n- Registered office address\n- Nature of business (SIC codes)\n- Previous company names\n\nRelated pages:\n- Filing history: {web_url}/filing-history\n- Officers: {web_url}/officers\n- Persons with significant control: {web_url}/persons-with-significant-control\n- Accounts: Available in filing history\n- Charges: {web_url}/charges\n- Insolvency: {web_url}/insolvency (if applicable)\n\nCompany prefixes:\n- No prefix: England & Wales\n- SC: Scotland\n- NI: Northern Ireland\n- FC/SF: Overseas companies\n- OC: LLPs\n- IP: Industrial and Provident Societies\n- CE/GE: European companies"
    )
}

/// A company's filing history, with the common document type codes.
pub fn get_company_filings(number: &str) -> String {
    let cn = company_number(number);
    let web_url = format!("{CH_WEB_BASE}/company/{cn}/filing-history");
    let api_url = format!("{CH_API_BASE}/company/{cn}/filing-history");

    format!(
        "Companies House - Filing History\n\nCompany: {cn}\nFiling history: {web_url}\nAPI endpoint: {api_url}\n\nFiling history includes:\n- Annual accounts\n- Confirmation statements (previously annual returns)\n- Appointment/termination of directors\n- Changes of registered office\n- Resolutions and minutes\n- Charges (mortgages and debentures)\n- Articles of association changes\n\nDocument types:\n- AA: Annual accounts\n- CS01: Confirmation statement\n- AP01-04: Appointment of director/secretary\n- TM01-02: Termination of director/secretary\n- AD01: Change of registered office\n- MR01-05: Charge documents\n- IN01: First gazette notice (insolvency)\n- SH01: Share allotment\n\nMost documents are free to download as PDFs.\nSome older documents require payment for certified copies."
    )
}

/// A company's officers register.
pub fn get_officers(number: &str) -> String {
    let cn = company_number(number);
    let web_url = format!("{CH_WEB_BASE}/company/{cn}/officers");
    let api_url = format!("{CH_API_BASE}/company/{cn}/officers");

    format!(
        "Companies House - Officers\n\nCompany: {cn}\nOfficers page: {web_url}\nAPI endpoint: {api_url}\n\nOfficers information includes:\n- Current and resigned directors\n- Company secretaries\n- LLP designated members\n- Appointment and resignation dates\n- Occupation\n- Nationality\n- Date of birth (month/year only for privacy)\n- Country of residence\n\nOfficer search (find all directorships):\n{CH_WEB_BASE}/search/officers\n\nDisqualified directors:\n{CH_WEB_BASE}/search/disqualified-officers\n\nNote: Directors' home addresses are protected.\nService addresses are shown instead."
    )
}

/// A company's charges register.
pub fn get_charges(number: &str) -> String {
    let cn = company_number(number);
    let web_url = format!("{CH_WEB_BASE}/company/{cn}/charges");
    let api_url = format!("{CH_API_BASE}/company/{cn}/charges");

    format!(
        "Companies House - Charges Register\n\nCompany: {cn}\nCharges page: {web_url}\nAPI endpoint: {api_url}\n\nCharges information includes:\n- Outstanding charges (mortgages, debentures, etc.)\n- Satisfied (paid off) charges\n- Charge holder (secured creditor)\n- Description of charged property\n- Date of creation\n- Date of satisfaction (if applicable)\n\nUnderstanding charges:\n- A charge is security over company assets\n- Must be registered within 21 days of creation\n- Fixed charge: over specific assets\n- Floating charge: over changing assets (e.g., stock)\n- Debenture: typically a floating charge over all assets\n\nCharges affect:\n- Lending decisions\n- Insolvency priorities\n- Asset disposal"
    )
}

/// A company's persons-with-significant-control register.
pub fn get_psc(number: &str) -> String {
    let cn = company_number(number);
    let web_url = format!("{CH_WEB_BASE}/company/{cn}/persons-with-significant-control");
    let api_url = format!("{CH_API_BASE}/company/{cn}/persons-with-significant-control");

    format!(
        "Companies House - Persons with Significant Control (PSC)\n\nCompany: {cn}\nPSC page: {web_url}\nAPI endpoint: {api_url}\n\nPSC conditions (any one of):\n- Holds more than 25% of shares\n- Holds more than 25% of voting rights\n- Has the right to appoint/remove majority of directors\n- Has the right to exercise significant influence or control\n- Has the right to exercise significant influence or control over a trust or firm that meets any of the above\n\nInformation shown:\n- Name\n- Date of birth (month/year)\n- Nationality\n- Country of residence\n- Nature of control\n- Date registered\n\nPSC statements:\n- Steps to identify PSC\n- PSC cannot be identified\n- No individual is a PSC (only companies)\n\nThis register supports anti-money laundering requirements.\nSome exemptions exist (e.g., for traded companies with own disclosure)."
    )
}

/// Search the disqualified directors register by name.
pub fn search_disqualified_directors(name: &str) -> String {
    let search_url = format!(
        "{CH_WEB_BASE}/search/disqualified-officers?q={}",
        urlencoding::encode(name)
    );

    format!(
        "Disqualified Directors Search\n\nSearch: {search_url}\n\nSearching for: {name}\n\nDirector disqualification means they cannot:\n- Be a director of a company\n- Be involved in company management\n- Act as an insolvency practitioner\n- Be a receiver\n\nDisqualification can be:\n- By court order (Company Directors Disqualification Act 1986)\n- By undertaking (accepted by Secretary of State)\n- Automatic on bankruptcy\n\nDisqualification periods: 2-15 years\n\nGrounds include:\n- Unfitness following company insolvency\n- Persistent breaches of Companies Act\n- Fraud\n- Wrongful or fraudulent trading\n\nRegister shows:\n- Name and aliases\n- Date of birth\n- Disqualification dates\n- Reason (court order/undertaking)\n- Duration"
    )
}

/// How to register for and call the Companies House API.
pub fn companies_house_api_info() -> String {
    format!(
        "Companies House API\n\nREGISTRATION\nDeveloper portal: https://developer.company-information.service.gov.uk\n\nFree API access:\n- 600 requests per 5 minutes\n- Public company data only\n- No cost\n\nAPI BASE URL\n{CH_API_BASE}\n\nKEY ENDPOINTS\n\nCompany:\n- GET /company/{{company_number}}\n- GET /company/{{company_number}}/filing-history\n- GET /company/{{company_number}}/officers\n- GET /company/{{company_number}}/charges\n- GET /company/{{company_number}}/persons-with-significant-control\n\nSearch:\n- GET /search/companies?q={{query}}\n- GET /search/officers?q={{query}}\n- GET /search/disqualified-officers?q={{query}}\n\nDocuments:\n- GET /company/{{company_number}}/filing-history/{{transaction_id}}/document\n\nAUTHENTICATION\nUse HTTP Basic Auth with API key as username, no password:\n  curl -u YOUR_API_KEY: {CH_API_BASE}/company/00000001\n\nRESPONSE FORMAT\nJSON by default. Accept header can request other formats.\n\nRATE LIMITING\nHTTP 429 returned if rate exceeded.\nRetry-After header indicates wait time.\n\nSTREAMING API\nFor bulk data, consider the streaming API:\nhttps://developer.company-information.service.gov.uk/streaming-api\n\nBULK DATA PRODUCTS\nFree bulk data available:\nhttp://download.companieshouse.gov.uk/en_output.html"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_company_numbers_are_zero_padded() {
        let text = get_company("1");
        assert!(text.starts_with("Companies House - Company 00000001"));
        assert!(text.contains(
            "Company page: https://find-and-update.company-information.service.gov.uk/company/00000001"
        ));
    }

    #[test]
    fn prefixed_company_numbers_are_uppercased_only() {
        let text = get_company("sc123456");
        assert!(text.starts_with("Companies House - Company SC123456"));
        assert!(text.contains("/company/SC123456"));
    }

    #[test]
    fn search_query_is_percent_encoded() {
        let text = search_companies("Smith & Co Ltd");
        assert!(text.contains("/search?q=Smith%20%26%20Co%20Ltd"));
        assert!(text.contains("Searching for: Smith & Co Ltd"));
    }

    #[test]
    fn filing_history_links_both_surfaces() {
        let text = get_company_filings("12345678");
        assert!(text.contains(
            "Filing history: https://find-and-update.company-information.service.gov.uk/company/12345678/filing-history"
        ));
        assert!(text.contains(
            "API endpoint: https://api.company-information.service.gov.uk/company/12345678/filing-history"
        ));
        assert!(text.contains("- CS01: Confirmation statement"));
    }

    #[test]
    fn officers_page_links_disqualified_search() {
        let text = get_officers("oc300001");
        assert!(text.contains("/company/OC300001/officers"));
        assert!(text.contains("/search/disqualified-officers"));
    }

    #[test]
    fn psc_page_states_the_conditions() {
        let text = get_psc("1");
        assert!(text.contains("/company/00000001/persons-with-significant-control"));
        assert!(text.contains("- Holds more than 25% of shares"));
    }

    #[test]
    fn disqualified_search_encodes_the_name() {
        let text = search_disqualified_directors("John Smith");
        assert!(text.contains("/search/disqualified-officers?q=John%20Smith"));
    }

    #[test]
    fn api_info_keeps_placeholder_paths_literal() {
        let text = companies_house_api_info();
        assert!(text.contains("- GET /company/{company_number}/officers"));
        assert!(text.contains("curl -u YOUR_API_KEY: https://api.company-information.service.gov.uk/company/00000001"));
    }
}
