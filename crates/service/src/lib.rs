//! Service layer for marketing statuses.
//! - Separates business rules (name rules, update/delete policy) from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Owns the JSON shape clients see, see [`marketing_status::codec`].

pub mod errors;
pub mod marketing_status;
