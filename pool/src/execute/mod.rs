//! Execute handlers for the Stablemint Pool contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `burn` - CW20 receive hook and burn reply for outgoing transfers
//! - `mint` - attestation-gated mint and its reply for incoming transfers
//! - `registry` - domain registry updates
//! - `config` - attestation-protocol configuration and approval management
//! - `admin` - pause, unpause, owner transfer, and recovery operations

mod admin;
mod burn;
mod config;
mod mint;
mod registry;

pub use admin::*;
pub use burn::*;
pub use config::*;
pub use mint::*;
pub use registry::*;
