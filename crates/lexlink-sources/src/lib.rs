//! UK legal source catalogue: alias tables, URL builders, and response texts.
//!
//! Each module covers one official surface (legislation.gov.uk, Find Case
//! Law, BAILII, Companies House and so on). Operations take plain string
//! arguments and return a formatted multi-line response; the handful that
//! verify a constructed link first go through [`lexlink_probe`].

pub mod bailii;
pub mod caselaw;
pub mod codes;
pub mod companies;
pub mod court_rules;
pub mod forms;
pub mod guidance;
pub mod international;
pub mod land_registry;
pub mod legislation;
pub mod ombudsman;
pub mod parliament;
pub mod planning;
pub mod practice_directions;
pub mod regulators;
pub mod sos_decisions;

/// gov.uk root, shared by the modules that link into it.
pub const GOV_UK_BASE: &str = "https://www.gov.uk";
