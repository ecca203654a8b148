//! Signed access to a managed AppSync GraphQL API.
//!
//! Requests are authenticated with AWS Signature V4 headers derived from
//! explicitly passed credentials; nothing in this crate reads process-wide
//! environment state.

pub mod client;
pub mod config;
pub mod errors;
pub mod sign;

pub use client::AppSync;
pub use config::{AppSyncConfig, Credentials};
pub use errors::{Error, Result};
