//! HM Land Registry services: price paid data, title documents, and the
//! INSPIRE polygon dataset.
//!
//! Price paid and INSPIRE data are free; title documents cost a few pounds
//! through the search service, so those operations return ordering guidance
//! rather than links to the documents themselves.

pub const LR_BASE: &str = "https://www.gov.uk/government/organisations/land-registry";
pub const LR_SEARCH: &str = "https://search-property-information.service.gov.uk";
pub const LR_DATA: &str = "https://landregistry.data.gov.uk";
pub const PRICE_PAID_API: &str = "https://landregistry.data.gov.uk/data/ppi";

/// Price paid data search. Criteria become query parameters on the linked
/// data API; the property type accepts the single-letter codes D/S/T/F.
pub fn search_price_paid(
    postcode: Option<&str>,
    street: Option<&str>,
    town: Option<&str>,
    property_type: Option<&str>,
) -> String {
    let mut params = Vec::new();
    if let Some(pc) = postcode {
        params.push(("postcode", pc.trim().to_uppercase()));
    }
    if let Some(street) = street {
        params.push(("street", street.to_string()));
    }
    if let Some(town) = town {
        params.push(("town", town.to_string()));
    }
    if let Some(pt) = property_type {
        let mapped = match pt.to_lowercase().as_str() {
            "d" | "detached" => "detached".to_string(),
            "s" | "semi" => "semi-detached".to_string(),
            "t" | "terraced" => "terraced".to_string(),
            "f" | "flat" => "flat".to_string(),
            _ => pt.to_string(),
        };
        params.push(("propertyType", mapped));
    }

    let mut api_url = format!("{PRICE_PAID_API}/transaction-record.json");
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        api_url.push_str(&format!("?{query}"));
    }

    let mut result = format!(
        "Land Registry Price Paid Data\n\nWeb search: https://www.gov.uk/search-property-information-land-registry\nData API: {api_url}\n\nSearch criteria:"
    );
    if let Some(pc) = postcode {
        result.push_str(&format!("\n  Postcode: {pc}"));
    }
    if let Some(street) = street {
        result.push_str(&format!("\n  Street: {street}"));
    }
    if let Some(town) = town {
        result.push_str(&format!("\n  Town: {town}"));
    }
    if let Some(pt) = property_type {
        result.push_str(&format!("\n  Property type: {pt}"));
    }

    result.push_str(&format!(
        "\n\nPRICE PAID DATA\nFree dataset of property sales in England and Wales:\n- Transaction price\n- Transaction date\n- Property type (detached, semi, terraced, flat)\n- Old/new build\n- Freehold/leasehold\n- Address\n\nAccess options:\n1. Download bulk data: {LR_DATA}/app/ppd\n2. Query via SPARQL: {LR_DATA}/app/qonsole\n3. Use the linked data API\n\nProperty types:\n- D: Detached\n- S: Semi-detached\n- T: Terraced\n- F: Flat/maisonette\n- O: Other\n\nTransaction categories:\n- A: Standard price paid (open market)\n- B: Additional price paid (not open market - e.g., transfers between family)\n\nLimitations:\n- Does not include commercial property\n- Does not include sales below £100 (Right to Buy)\n- Some transactions excluded for legal reasons"
    ));

    result
}

/// How to obtain title documents for one title number.
pub fn get_title_summary(title_number: &str) -> String {
    format!(
        "Land Registry Title Information\n\nTitle number: {title_number}\n\nHOW TO GET TITLE INFORMATION\n\n1. Title Summary (£3 per title):\n   {LR_SEARCH}/search/search-by-title-number\n   - Shows current owner name\n   - Property address\n   - Price paid (if available)\n   - Whether there are documents\n\n2. Title Register (£3 per title):\n   Full register with:\n   - Property description\n   - Ownership details (proprietor)\n   - Restrictions\n   - Charges (mortgages)\n   - Easements and covenants affecting the property\n\n3. Title Plan (£3 per plan):\n   Map showing property boundaries\n\n4. Official Copies (£7 per document):\n   Certified copies for legal proceedings\n\nORDER ONLINE\n{LR_SEARCH}\n\nYou will need:\n- Address or title number\n- Government Gateway account or create one\n- Payment card\n\nUNDERSTANDING TITLE NUMBERS\nFormat: [Letters][Numbers]\n- DN: Devon (some areas)\n- GR: Gloucestershire (some areas)\n- HD: Hull\n- LN: Lincolnshire\n- SY: Shropshire\n- WS: West Sussex\n- etc.\n\nNewer titles have different formats depending on registration date.\n\nFOR LEGAL PROCEEDINGS\nOrder official copies for court evidence.\nTitle registers admissible under Civil Evidence Act 1995."
    )
}

/// Address search guidance, including the unregistered land caveats.
pub fn search_registered_titles(address: &str) -> String {
    format!(
        "Land Registry Address Search\n\nSearch page: {LR_SEARCH}/search/search-by-address\n\nSearching for: {address}\n\nSEARCH BY ADDRESS\nEnter the property address to find:\n- Whether the property is registered\n- Title number(s) for the property\n- Option to purchase title documents\n\nUNREGISTERED LAND\nNot all land in England and Wales is registered.\nRegistration became compulsory in stages:\n- 1990: Compulsory on sale in England and Wales\n- Some land still unregistered if not sold since\n\nMULTIPLE TITLES\nOne property may have multiple titles:\n- Freehold title\n- Leasehold title (if applicable)\n- Separate titles for different parts\n\nCOSTS\n- Search by address: Free\n- View title summary: £3\n- Download title register: £3\n- Download title plan: £3\n- Official copies: £7\n\nBULK SEARCHES\nFor commercial searches (conveyancing, etc.):\n{LR_BASE}/using-the-business-e-services"
    )
}

/// The free INSPIRE Index Polygon dataset.
pub fn get_inspire_index() -> String {
    format!(
        "Land Registry INSPIRE Index Polygons\n\nFREE SPATIAL DATA\n{LR_DATA}/app/root/doc/inspire\n\nThe INSPIRE Index Polygon dataset shows:\n- Boundaries of all registered titles\n- Title numbers\n- Tenure (freehold/leasehold)\n- Date of last update\n\nThis is FREE and OPEN data.\n\nACCESS OPTIONS\n\n1. Download bulk data (GeoPackage, GML):\n   {LR_DATA}/app/root/doc/inspire\n\n2. WFS (Web Feature Service):\n   For GIS applications\n\n3. Via QGIS or similar GIS software\n\nUSE CASES\n- Identifying registered titles in an area\n- Property boundary research\n- Planning and development analysis\n- Land ownership mapping\n\nLIMITATIONS\n- Shows boundaries, not owners\n- To get owner information, use title search service\n- Accuracy varies (based on original deed plans)\n- Does not show unregistered land\n\nSUPPLEMENTARY DATA\nLand Registry also publishes:\n- UK House Price Index: {LR_DATA}/app/ukhpi\n- Price Paid Data: {LR_DATA}/app/ppd\n- Transaction Data: {LR_DATA}/app/root/doc/td\n- Standard Reports: {LR_DATA}/app/root/doc/sr"
    )
}

/// Index of every Land Registry service this crate links to.
pub fn land_registry_services_index() -> String {
    format!(
        "HM Land Registry Services Index\n\nFREE DATA AND SEARCHES\n\nPrice Paid Data:\n- What properties sold for\n- {LR_DATA}/app/ppd\n- Use: search_price_paid()\n\nINSPIRE Index Polygons:\n- Title boundaries (no owner info)\n- {LR_DATA}/app/root/doc/inspire\n- Use: get_inspire_index()\n\nUK House Price Index:\n- Monthly price statistics\n- {LR_DATA}/app/ukhpi\n\nPAID SEARCHES (via account)\n\nSearch Property Information:\n{LR_SEARCH}\n\nCosts:\n- Title summary: £3\n- Title register: £3\n- Title plan: £3\n- Official copies: £7\n\nBUSINESS SERVICES\n\nBusiness Gateway (for professionals):\n{LR_BASE}/using-the-business-e-services\n\nPortal:\n- Conveyancers\n- Mortgage lenders\n- Solicitors\n\nGUIDANCE\n\nPractice guides:\n{LR_BASE}/publications?publication_filter_option=guidance\n\nKey guides:\n- Practice Guide 1: First registrations\n- Practice Guide 4: Restrictions\n- Practice Guide 40: Land Registry plans\n- Practice Guide 52: Adverse possession\n- Practice Guide 67: Leases\n\nLEGISLATION\n- Land Registration Act 2002\n- Land Registration Rules 2003\n\nADJUDICATOR\nHM Land Registry Adjudicator handles disputes:\nhttps://www.gov.uk/government/organisations/hm-land-registry/about/complaints-procedure\n\nFor boundary disputes, see:\nProperty Chamber (First-tier Tribunal)"
    )
}

/// Routes into ownership research, including the company-owner caveats.
pub fn get_ownership_search_options() -> String {
    format!(
        "Property Ownership Search Options\n\n1. SEARCH BY ADDRESS\n{LR_SEARCH}/search/search-by-address\n- Enter property address\n- Get title number\n- Purchase title documents\n\n2. SEARCH BY TITLE NUMBER\n{LR_SEARCH}/search/search-by-title-number\n- If you know the title number\n- Direct access to documents\n\n3. SEARCH BY MAP\n{LR_SEARCH}/search/search-by-map\n- Click on map to find titles\n- Useful for land without street address\n\n4. BULK SEARCHES\nFor multiple properties:\n- Business Gateway (account required)\n- Data services\n\nWHAT YOU GET\n\nTitle Summary (£3):\n- Owner name\n- Address\n- Price paid\n- Tenure type\n\nTitle Register (£3):\n- Full ownership details\n- Property description\n- Restrictions\n- Charges (mortgages)\n- Easements references\n\nTitle Plan (£3):\n- Property boundary on OS map\n- Coloured edging shows extent\n\nUNREGISTERED LAND\nIf property not registered:\n- Check with local authority for council tax records\n- Electoral register (voters)\n- Historical deed searches (conveyancers)\n- Land Charges search\n\nCOMPANY OWNERSHIP\nIf owner is a company:\n- Title shows company name\n- Check Companies House for company details\n- May show registered office, not beneficial owner\n\nOVERSEAS COMPANIES\nRegister of Overseas Entities:\nhttps://www.gov.uk/government/organisations/register-of-overseas-entities\n- Owners of UK property\n- From 2022 onwards"
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────
