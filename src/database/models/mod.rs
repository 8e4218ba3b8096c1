pub mod area;
pub mod center;
pub mod contact;
pub mod symbol;
pub mod tenant;

pub use area::{Area, AreaKind};
pub use center::{CenterCategory, CenterSummary, Officer, VotingCenter};
pub use contact::{ContactCategory, KeyContact};
pub use symbol::Symbol;
pub use tenant::Tenant;

/// Decode error for TEXT columns that carry a closed set of values.
#[derive(Debug, thiserror::Error)]
#[error("invalid {field} value: {value}")]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: String,
}
