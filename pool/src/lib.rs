//! Stablemint Pool - Attestation-Gated Burn/Mint Stablecoin Bridging
//!
//! This contract bridges a CW20 stablecoin between chains by burning on the
//! source chain and minting on the destination chain, instead of locking
//! liquidity in custodial pools.
//!
//! # Outgoing Flow (Burn)
//! 1. User sends stablecoin to this pool via the CW20 `Send` hook
//! 2. Pool resolves the destination chain's domain record and calls the
//!    token-messenger contract, which pulls the tokens and burns them
//! 3. The messenger's nonce comes back through the reply and is returned to
//!    the caller as a `BurnReceipt`, to be carried off-band to the
//!    destination chain
//!
//! # Incoming Flow (Mint)
//! 1. Caller submits the attestation message, its attestation signature
//!    bundle, and the `BurnReceipt` from the source-chain burn
//! 2. Pool decodes the message byte-by-byte (version gated first) and
//!    cross-checks every field against the receipt and local configuration
//! 3. Only a fully matching message is forwarded to the message-transmitter
//!    contract, which verifies the attestation and performs the mint
//!
//! # Security
//! - Strict fixed-offset decoding with bounds checks before any field read
//! - Zero-tolerance equality policy on all six validated message fields
//! - Destination domain anchored to this chain's own configured identity
//! - Burn-authority spending approval managed atomically on config change
//! - Emergency pause functionality

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod message;
pub mod messenger;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::message::{validate_message, AttestationMessage};
pub use crate::msg::BurnReceipt;
