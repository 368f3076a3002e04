//! State definitions for the Stablemint Pool contract.
//!
//! This module defines all storage structures and state maps for the pool,
//! including the domain registry and the transient call-context items used
//! by the burn and mint reply handlers.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Pool identity and lifecycle configuration, set at instantiation.
#[cw_serde]
pub struct Config {
    /// Owner address for pool management
    pub owner: Addr,
    /// Whether the pool is currently paused
    pub paused: bool,
    /// The CW20 stablecoin this pool burns and mints
    pub token: Addr,
    /// This chain's own settlement-network domain identifier
    pub local_domain: u32,
    /// Zero out the stored authorized caller when a domain is disabled
    pub zero_caller_on_disable: bool,
}

/// Attestation-protocol configuration, replaced atomically by `SetConfig`.
#[cw_serde]
pub struct ProtocolConfig {
    /// Expected on-wire message version
    pub version: u32,
    /// Token-messenger contract trusted to burn (holds unlimited allowance)
    pub burn_authority: Addr,
    /// Message-transmitter contract trusted to verify attestations and mint
    pub mint_authority: Addr,
}

/// Pending owner change proposal
#[cw_serde]
pub struct PendingOwner {
    /// Proposed new owner address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

// ============================================================================
// Domain Registry
// ============================================================================

/// Remote domain configuration, keyed by local chain identifier.
///
/// An absent entry and a present-but-disabled entry are equivalent for the
/// burn path; the query layer exposes the difference for audit tooling only.
#[cw_serde]
pub struct DomainRecord {
    /// Settlement-network domain identifier of the remote chain
    pub domain: u32,
    /// The only identity permitted to trigger minting on the remote domain
    pub authorized_caller: [u8; 32],
    /// Whether burns may target this domain
    pub enabled: bool,
}

impl DomainRecord {
    /// The default/zero record reported for chains that were never configured.
    pub fn unset() -> Self {
        Self {
            domain: 0,
            authorized_caller: [0u8; 32],
            enabled: false,
        }
    }
}

// ============================================================================
// Transient Call Context
// ============================================================================

/// Context of an in-flight burn, saved before dispatching the messenger
/// sub-message and consumed in the matching reply branch.
#[cw_serde]
pub struct PendingBurn {
    /// Originating caller on this chain
    pub sender: Addr,
    /// Originating caller as a 32-byte identifier (left-padded canonical)
    pub sender_id: [u8; 32],
    /// Amount handed to the burn authority
    pub amount: Uint128,
    /// Destination chain (local identifier, registry key)
    pub local_chain_id: u64,
    /// Destination settlement-network domain
    pub destination_domain: u32,
    /// Canonical 32-byte mint recipient on the destination chain
    pub mint_recipient: [u8; 32],
}

/// Context of an in-flight mint, saved before dispatching the transmitter
/// sub-message and consumed in the matching reply branch.
#[cw_serde]
pub struct PendingMint {
    /// Mint recipient on this chain
    pub recipient: Addr,
    /// Amount being minted
    pub amount: Uint128,
    /// Nonce from the burn receipt
    pub nonce: u64,
    /// Source domain from the burn receipt
    pub source_domain: u32,
}

/// Pool statistics
#[cw_serde]
pub struct Stats {
    /// Total number of completed burns
    pub total_burns: u64,
    /// Total number of completed mints
    pub total_mints: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:stablemint-pool";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// 7 days in seconds for owner change timelock
pub const OWNER_TIMELOCK_DURATION: u64 = 604_800;

/// Reply id for the token-messenger burn sub-message
pub const BURN_REPLY_ID: u64 = 1;

/// Reply id for the message-transmitter mint sub-message
pub const MINT_REPLY_ID: u64 = 2;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Attestation-protocol config (authorities + expected message version)
pub const PROTOCOL_CONFIG: Item<ProtocolConfig> = Item::new("protocol_config");

/// Pending owner proposal (if any)
pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");

/// Domain registry
/// Key: local chain identifier, Value: DomainRecord
pub const DOMAINS: Map<u64, DomainRecord> = Map::new("domains");

/// In-flight burn context (present only within a single transaction)
pub const PENDING_BURN: Item<PendingBurn> = Item::new("pending_burn");

/// In-flight mint context (present only within a single transaction)
pub const PENDING_MINT: Item<PendingMint> = Item::new("pending_mint");

/// Pool statistics
pub const STATS: Item<Stats> = Item::new("stats");
