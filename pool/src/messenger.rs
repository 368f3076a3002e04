//! Interfaces of the external attestation-protocol contracts.
//!
//! The pool never implements burn or mint bookkeeping itself; it calls into
//! two contracts of the settlement network's on-chain deployment:
//!
//! - the **token messenger** (burn authority): pulls tokens via the pool's
//!   standing allowance, burns them, and issues a monotonically increasing
//!   nonce per burn;
//! - the **message transmitter** (mint authority): verifies the attestation
//!   signature bundle, enforces replay protection, and performs the mint.
//!
//! Both calls are dispatched as sub-messages so their results come back
//! through `reply` within the same transaction.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

// ============================================================================
// Token Messenger (burn authority)
// ============================================================================

/// Execute interface of the token-messenger contract
#[cw_serde]
pub enum TokenMessengerExecuteMsg {
    /// Burn `amount` of `burn_token` for minting on `destination_domain`
    DepositForBurn {
        /// Amount to burn
        amount: Uint128,
        /// Destination settlement-network domain
        destination_domain: u32,
        /// Canonical 32-byte mint recipient on the destination chain
        mint_recipient: Binary,
        /// The local token to burn
        burn_token: String,
        /// The only identity permitted to trigger the mint (32 bytes)
        destination_caller: Binary,
    },
}

/// Data returned by `DepositForBurn`
#[cw_serde]
pub struct DepositForBurnResponse {
    /// Nonce issued for this burn
    pub nonce: u64,
}

// ============================================================================
// Message Transmitter (mint authority)
// ============================================================================

/// Execute interface of the message-transmitter contract
#[cw_serde]
pub enum MessageTransmitterExecuteMsg {
    /// Verify the attestation over `message` and execute the mint it carries
    ReceiveMessage {
        /// Raw attestation message bytes
        message: Binary,
        /// Attestation signature bundle
        attestation: Binary,
    },
}

/// Data returned by `ReceiveMessage`
#[cw_serde]
pub struct ReceiveMessageResponse {
    /// Whether the transmitter accepted the attestation and minted
    pub success: bool,
}
