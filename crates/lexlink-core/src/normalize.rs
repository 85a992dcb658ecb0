//! Identifier normalisation for UK legal references.
//!
//! Each target site expects its identifiers in a particular shape: CPR parts
//! are zero-padded to two digits, company numbers to eight, section
//! references drop a spelled-out "section" prefix, form codes drop spaces and
//! hyphens. These helpers reproduce those shapes exactly; none of them
//! validate, they only reformat.

/// Normalise a section reference for a legislation.gov.uk URL.
///
/// Lower-cases, strips one leading `section` word (and any whitespace after
/// it), and trims. `"Section 3"` → `"3"`, `"21A"` → `"21a"`.
pub fn section_ref(section: &str) -> String {
    let lower = section.to_lowercase();
    let rest = match lower.strip_prefix("section") {
        Some(rest) => rest.trim_start(),
        None => &lower,
    };
    rest.trim().to_string()
}

/// Strip leading zeros from a rule part number. `"03"` → `"3"`, `"0"` → `""`.
pub fn rule_part(part: &str) -> String {
    part.trim().trim_start_matches('0').to_string()
}

/// Left-pad with zeros to two characters. `"3"` → `"03"`, `"54"` → `"54"`.
pub fn pad2(s: &str) -> String {
    if s.len() >= 2 {
        s.to_string()
    } else {
        format!("{s:0>2}")
    }
}

/// Normalise a Companies House company number.
///
/// Trims and upper-cases; purely numeric inputs are zero-padded to eight
/// digits, while prefixed registrations (SC, NI, OC...) are left unpadded.
pub fn company_number(number: &str) -> String {
    let cleaned = number.trim().to_uppercase();
    if !cleaned.is_empty() && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        format!("{cleaned:0>8}")
    } else {
        cleaned
    }
}

/// Normalise a compact lookup code: lower-case, trim, drop spaces and
/// hyphens. Used for form numbers and practice direction codes.
/// `"COP 1"` → `"cop1"`, `"N-244"` → `"n244"`, `"10 AA"` → `"10aa"`.
pub fn compact_code(code: &str) -> String {
    code.trim()
        .to_lowercase()
        .replace(' ', "")
        .replace('-', "")
}

/// Slug for gov.uk and parliament.uk paths: lower-case, trim, spaces→hyphens.
pub fn slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Title-case each whitespace- or hyphen-separated word.
///
/// Used when echoing an act name back in a response: `"mental capacity act"`
/// → `"Mental Capacity Act"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
