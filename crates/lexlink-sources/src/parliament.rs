//! UK Parliament: bills, Hansard, committees, written questions, and members.
//!
//! Parliament splits its material across several sites (bills.parliament.uk,
//! hansard.parliament.uk, committees.parliament.uk and so on). These
//! operations build search links into each and explain how the material is
//! used in legal research, including the Pepper v Hart conditions for citing
//! Hansard as an aid to construction.

use lexlink_core::normalize::slug;

pub const BILLS_API: &str = "https://bills-api.parliament.uk";
pub const BILLS_WEB: &str = "https://bills.parliament.uk";
pub const HANSARD_WEB: &str = "https://hansard.parliament.uk";
pub const COMMITTEES_WEB: &str = "https://committees.parliament.uk";
pub const QUESTIONS_WEB: &str = "https://questions-statements.parliament.uk";

// ── Bills ──────────────────────────────────────────────────────────────────

/// Search current and past parliamentary bills.
pub fn search_bills(query: &str, session: Option<&str>, status: Option<&str>) -> String {
    let mut search_url = format!("{BILLS_WEB}/bills?q={}", urlencoding::encode(query));
    if let Some(session) = session {
        search_url.push_str(&format!("&session={}", urlencoding::encode(session)));
    }
    if let Some(status) = status {
        search_url.push_str(&format!("&status={}", urlencoding::encode(status)));
    }
    let api_url = format!(
        "{BILLS_API}/api/v1/Bills?SearchTerm={}",
        urlencoding::encode(query)
    );

    let mut result = format!(
        "UK Parliament Bills Search\n\nWeb search: {search_url}\nAPI: {api_url}\n\nSearching for: {query}"
    );
    if let Some(session) = session {
        result.push_str(&format!("\nSession: {session}"));
    }
    if let Some(status) = status {
        result.push_str(&format!("\nStatus: {status}"));
    }

    result.push_str(&format!(
        "\n\nBill types:\n- Government Bills (introduced by Ministers)\n- Private Members' Bills (introduced by backbenchers)\n- Private Bills (affecting specific persons/bodies)\n- Hybrid Bills (mix of public and private)\n\nBill stages:\n1. First Reading (formal introduction)\n2. Second Reading (principle debate)\n3. Committee Stage (detailed examination)\n4. Report Stage (amendments)\n5. Third Reading (final debate)\n6. Same stages in the other House\n7. Royal Assent (becomes Act)\n\nBill status:\n- Current: Progressing through Parliament\n- Enacted: Received Royal Assent (now an Act)\n- Failed: Did not complete passage\n- Withdrawn: Removed by sponsor\n\nBills API documentation:\n{BILLS_API}/index.html\n\nFor Acts (passed legislation):\nhttps://www.legislation.gov.uk"
    ));

    result
}

/// Link to one bill's page by id or short title.
pub fn get_bill(bill_id: &str) -> String {
    let bill_url = format!("{BILLS_WEB}/bills/{}", urlencoding::encode(&slug(bill_id)));

    format!(
        "Parliament Bill\n\nSearching for: {bill_id}\n\nBill page: {bill_url}\n\nIf the URL doesn't work, search at: {BILLS_WEB}/bills\n\nBill page includes:\n- Bill status and current stage\n- Bill documents (as introduced, as amended)\n- Explanatory notes\n- Impact assessments\n- Committee reports\n- Hansard debates\n- Voting records\n\nFor bill documents:\n{BILLS_WEB} > Select bill > Documents\n\nFor debates on the bill:\n{HANSARD_WEB} > Search for bill name\n\nFor committee consideration:\n{COMMITTEES_WEB} > Search for bill name\n\nAmendment papers:\nPublished during Committee and Report stages."
    )
}

// ── Hansard ────────────────────────────────────────────────────────────────

/// Search Hansard debates.
///
/// The date is echoed back but Hansard's search page takes it as an
/// on-page filter rather than a query parameter.
pub fn search_hansard(
    query: &str,
    date: Option<&str>,
    house: Option<&str>,
    member: Option<&str>,
) -> String {
    let mut search_url = format!("{HANSARD_WEB}/search?query={}", urlencoding::encode(query));
    if let Some(house) = house {
        search_url.push_str(&format!("&house={}", urlencoding::encode(house)));
    }
    if let Some(member) = member {
        search_url.push_str(&format!("&member={}", urlencoding::encode(member)));
    }

    let mut result =
        format!("Hansard - Parliamentary Debates\n\nSearch: {search_url}\n\nSearching for: {query}");
    if let Some(date) = date {
        result.push_str(&format!("\nDate: {date}"));
    }
    if let Some(house) = house {
        result.push_str(&format!("\nHouse: {house}"));
    }
    if let Some(member) = member {
        result.push_str(&format!("\nMember: {member}"));
    }

    result.push_str(&format!(
        "\n\nHansard contains:\n- Debates in the Chamber\n- Westminster Hall debates\n- Grand Committee (Lords)\n- Written Statements\n- Written Answers\n- Petitions\n\nDebate types:\n- Main Chamber debates\n- Westminster Hall (adjournment debates)\n- Opposition Day debates\n- Backbench Business debates\n- Urgent Questions\n- Points of Order\n- Ministerial Statements\n\nUses in legal research:\n- Pepper v Hart [1993]: Parliamentary statements may be used\n  to interpret ambiguous legislation if:\n  - Clear statement by promoter\n  - On the mischief or purpose of provision\n  - Legislation remains ambiguous\n\nSearch tips:\n- Use quotes for exact phrases\n- Use MP/Lord name for their contributions\n- Filter by date range\n- Filter by House\n\nHistorical Hansard (pre-2010):\n{HANSARD_WEB}/historic-hansard"
    ));

    result
}

// ── Committees ─────────────────────────────────────────────────────────────

/// Search committee reports and evidence.
///
/// The report type is accepted for symmetry with the other search
/// operations but the committees site has no matching query parameter.
pub fn search_committees(
    query: &str,
    committee: Option<&str>,
    _report_type: Option<&str>,
) -> String {
    let mut search_url = format!(
        "{COMMITTEES_WEB}/search/?query={}",
        urlencoding::encode(query)
    );
    if let Some(committee) = committee {
        search_url.push_str(&format!("&committee={}", urlencoding::encode(committee)));
    }

    let mut result =
        format!("Parliamentary Committees\n\nSearch: {search_url}\n\nSearching for: {query}");
    if let Some(committee) = committee {
        result.push_str(&format!("\nCommittee: {committee}"));
    }

    result.push_str(&format!(
        "\n\nCommittee types:\n- Select Committees (scrutinise government)\n- Public Bill Committees (examine bills)\n- Joint Committees (both Houses)\n\nKey Select Committees:\nCommons:\n- Health and Social Care Committee\n- Justice Committee\n- Home Affairs Committee\n- Education Committee\n- Work and Pensions Committee\n- Housing, Communities and Local Government Committee\n- Public Accounts Committee\n\nLords:\n- Constitution Committee\n- Delegated Powers Committee\n- Secondary Legislation Scrutiny Committee\n\nCommittee outputs:\n- Inquiry reports\n- Oral evidence transcripts\n- Written evidence submissions\n- Government responses\n- Special reports\n\nReports database:\n{COMMITTEES_WEB}\n\nUsing committee reports:\n- Evidence of policy intent\n- Expert views on legislation\n- Government commitments on implementation\n- Scrutiny of secondary legislation"
    ));

    result
}

/// Link to a committee's page, slugified from its name.
pub fn get_committee_report(committee: &str, inquiry: Option<&str>) -> String {
    let committee_url = format!(
        "{COMMITTEES_WEB}/committee/{}",
        slug(committee).replace('\'', "")
    );

    let mut result = format!(
        "Parliamentary Committee\n\nCommittee: {committee}\nCommittee page: {committee_url}\n\n"
    );
    if let Some(inquiry) = inquiry {
        result.push_str(&format!("Inquiry: {inquiry}\n"));
        result.push_str("Search inquiries on the committee page.\n\n");
    }

    result.push_str(&format!(
        "Committee page includes:\n- Current inquiries\n- Recent reports\n- Oral evidence sessions\n- Written evidence\n- Government responses\n\nTo find specific reports:\n{COMMITTEES_WEB} > Select committee > Publications\n\nFor pre-legislative scrutiny:\nDraft bills are often examined by select committees before\nformal introduction."
    ));

    result
}

// ── Written questions and members ──────────────────────────────────────────

/// Search written parliamentary questions and answers.
pub fn search_written_questions(
    query: &str,
    department: Option<&str>,
    member: Option<&str>,
) -> String {
    let mut search_url = format!(
        "{QUESTIONS_WEB}/written-questions?SearchTerm={}",
        urlencoding::encode(query)
    );
    if let Some(department) = department {
        search_url.push_str(&format!("&Department={}", urlencoding::encode(department)));
    }
    if let Some(member) = member {
        search_url.push_str(&format!("&Member={}", urlencoding::encode(member)));
    }

    format!(
        "Parliamentary Written Questions\n\nSearch: {search_url}\n\nSearching for: {query}\n\nWritten Questions:\n- Named Day Questions: Answer due by specific date\n- Ordinary Questions: Answer due within 7 days\n- Priority Questions (Lords): Answer due within 10 days\n\nDepartments:\nSearch by answering department to find policy positions.\n\nUses:\n- Government policy statements\n- Statistical information\n- Explanation of government position\n- Commitments on implementation\n\nWritten Statements:\n{QUESTIONS_WEB}/written-statements\nMinisterial announcements to Parliament.\n\nOral Questions:\n{HANSARD_WEB}\nRecorded in Hansard debates."
    )
}

/// Look up an MP or Lord by name.
pub fn get_member_info(member_name: &str) -> String {
    let search_url = format!(
        "https://members.parliament.uk/members/search?query={}",
        urlencoding::encode(member_name)
    );

    format!(
        "Parliament Member Search\n\nSearch: {search_url}\n\nSearching for: {member_name}\n\nMember pages include:\n- Constituency (MPs)\n- Party\n- Contact information\n- Registered interests\n- Voting record\n- Spoken contributions (Hansard)\n- Written questions asked\n- Bills sponsored\n\nMembers' Interests:\nhttps://members.parliament.uk/members/interests\n\nVoting Records:\nhttps://votes.parliament.uk\n\nMPs by constituency:\nhttps://members.parliament.uk/members/Commons\n\nLords by name:\nhttps://members.parliament.uk/members/Lords"
    )
}

// ── Index ──────────────────────────────────────────────────────────────────

/// Index of every Parliament surface this crate links to.
pub fn parliament_resources_index() -> String {
    format!(
        "UK Parliament Resources Index\n\nBILLS\nWebsite: {BILLS_WEB}\nAPI: {BILLS_API}\nUse: search_bills(), get_bill()\n- Current and past bills\n- Bill documents\n- Progress tracker\n\nHANSARD (Debates)\nWebsite: {HANSARD_WEB}\nUse: search_hansard()\n- Chamber debates\n- Westminster Hall\n- Written statements\n- Historical debates\n\nCOMMITTEES\nWebsite: {COMMITTEES_WEB}\nUse: search_committees(), get_committee_report()\n- Select Committee reports\n- Inquiry evidence\n- Government responses\n\nWRITTEN QUESTIONS\nWebsite: {QUESTIONS_WEB}\nUse: search_written_questions()\n- Questions and answers\n- Written statements\n\nMEMBERS\nWebsite: https://members.parliament.uk\nUse: get_member_info()\n- MP and Lord information\n- Voting records\n- Registered interests\n\nLEGISLATION TRACKING\nFor bill to Act:\n1. {BILLS_WEB} - Bill progress\n2. {HANSARD_WEB} - Debates\n3. {COMMITTEES_WEB} - Committee stage\n4. https://www.legislation.gov.uk - Final Act\n\nSECONDARY LEGISLATION\nJoint Committee on Statutory Instruments:\n{COMMITTEES_WEB}/committee/joint-committee-on-statutory-instruments\n\nLords Secondary Legislation Scrutiny Committee:\n{COMMITTEES_WEB}/committee/secondary-legislation-scrutiny-committee\n\nPARLIAMENT LIVE\nWatch debates live:\nhttps://parliamentlive.tv\n\nRESEARCH BRIEFINGS\nCommons Library research:\nhttps://commonslibrary.parliament.uk\n- Bill briefings\n- Topical research\n- Statistics\n\nLords Library research:\nhttps://lordslibrary.parliament.uk"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────
