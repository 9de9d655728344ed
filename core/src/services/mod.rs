//! Business services for key lifecycle management and token issuance.

pub mod keys;
pub mod token;

pub use keys::KeyLifecycleManager;
pub use token::{IssueRequest, TokenService};
