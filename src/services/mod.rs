// Service exports
pub mod riot;

pub use riot::{MatchIdsQuery, RiotClient, RiotError};
