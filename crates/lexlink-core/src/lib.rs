pub mod citation;
pub mod lookup;
pub mod normalize;

pub use citation::{Citation, parse_bailii_citation, parse_citation};
pub use lookup::AliasTable;
pub use normalize::company_number;
