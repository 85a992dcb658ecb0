//! Neutral citation parsing.
//!
//! UK judgments are cited by neutral citation: `[YEAR] COURT NUMBER`, e.g.
//! `[2024] EWCOP 15` or `[1999] UKHL 30`. Tribunal citations may carry a
//! parenthesised chamber suffix, e.g. `[2020] UKUT 123 (AAC)`.
//!
//! # Parsing profiles
//!
//! Two target sites want the court code in different shapes, so there are two
//! parsers sharing the same primary pattern:
//!
//! - [`parse_citation`] lower-cases the court code and ignores chamber
//!   suffixes. The lower-cased code is used directly as a URL path segment on
//!   caselaw.nationalarchives.gov.uk.
//! - [`parse_bailii_citation`] upper-cases the court code and extracts the
//!   chamber with an independent search over the whole input. BAILII paths
//!   are mixed-case and chamber-qualified for the Upper and First-tier
//!   Tribunals only.
//!
//! Both are single-shot searches: either the primary pattern matches
//! somewhere in the input or the citation is unparseable. No fuzzy recovery,
//! no multi-citation extraction, no validation of year or number ranges.

use std::sync::LazyLock;

use regex::Regex;

static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d{4})\]\s*([A-Za-z/]+)\s*(\d+)").unwrap());

static BAILII_CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d{4})\]\s*([A-Za-z]+(?:/[A-Za-z]+)?)\s*(\d+)").unwrap());

static CHAMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([A-Za-z]+)\)").unwrap());

/// Components captured from a neutral citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// Four-digit year, as written.
    pub year: String,
    /// Court code, cased per the parsing profile.
    pub court: String,
    /// Judgment number, digits only.
    pub number: String,
    /// Chamber suffix such as `AAC`, upper-cased. Only the BAILII profile
    /// fills this in; the case-law profile leaves it `None`.
    pub chamber: Option<String>,
}

/// Parse a neutral citation for caselaw.nationalarchives.gov.uk.
///
/// The court code is lower-cased; a `/` division separator is kept, so
/// `[2023] EWCA/Civ 5` parses to court `ewca/civ`. Chamber suffixes are not
/// consulted. Returns `None` when the pattern matches nowhere in the input.
pub fn parse_citation(input: &str) -> Option<Citation> {
    let caps = CITATION_RE.captures(input)?;
    Some(Citation {
        year: caps[1].to_string(),
        court: caps[2].to_lowercase(),
        number: caps[3].to_string(),
        chamber: None,
    })
}

/// Parse a neutral citation for bailii.org.
///
/// The court code is upper-cased and limited to at most one `/` division
/// segment. A chamber suffix like `(AAC)` is extracted by a second,
/// independent search anywhere in the input; whether it ends up in the URL is
/// the URL builder's decision (only UKUT and UKFTT are chamber-aware).
pub fn parse_bailii_citation(input: &str) -> Option<Citation> {
    let caps = BAILII_CITATION_RE.captures(input)?;
    let chamber = CHAMBER_RE
        .captures(input)
        .map(|c| c[1].to_uppercase());
    Some(Citation {
        year: caps[1].to_string(),
        court: caps[2].to_uppercase(),
        number: caps[3].to_string(),
        chamber,
    })
}
