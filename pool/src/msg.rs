//! Message types for the Stablemint Pool contract.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for pool management
    pub owner: String,
    /// The CW20 stablecoin this pool bridges
    pub token: String,
    /// This chain's own settlement-network domain identifier
    pub local_domain: u32,
    /// Expected on-wire attestation message version (1 is the only layout)
    pub message_version: u32,
    /// Token-messenger contract trusted to burn
    pub burn_authority: String,
    /// Message-transmitter contract trusted to verify attestations and mint
    pub mint_authority: String,
    /// Zero out the stored authorized caller when a domain is disabled
    pub zero_caller_on_disable: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// A single domain registry update.
///
/// Overwrites any prior record for `local_chain_id` unconditionally, which
/// makes batched reconfiguration a single message.
#[cw_serde]
pub struct DomainUpdate {
    /// Local chain identifier (registry key)
    pub local_chain_id: u64,
    /// Settlement-network domain identifier of the remote chain
    pub domain: u32,
    /// The only identity permitted to trigger minting on the remote domain
    /// (exactly 32 bytes)
    pub authorized_caller: Binary,
    /// Whether burns may target this domain
    pub enabled: bool,
}

/// Receipt returned from a completed burn, to be carried off-band (inside
/// the cross-chain message envelope) and presented again at mint time.
#[cw_serde]
pub struct BurnReceipt {
    /// Monotonically increasing nonce issued by the burn authority
    pub nonce: u64,
    /// The burning chain's settlement-network domain identifier
    pub source_domain: u32,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Burn stablecoin for bridging (called via CW20 send)
    /// Implements the CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    /// Mint stablecoin from a source-chain burn
    ///
    /// Authorization: Anyone. Value creation is gated by full cross-validation
    /// of the attestation message against the receipt, plus the message
    /// transmitter's own attestation verification and replay protection.
    Mint {
        /// The original burn-initiating identity (exactly 32 bytes)
        original_sender: Binary,
        /// Mint recipient address on this chain
        receiver: String,
        /// Amount being minted
        amount: Uint128,
        /// Receipt from the source-chain burn
        receipt: BurnReceipt,
        /// Raw attestation message bytes (fixed 84-byte header + body)
        message: Binary,
        /// Attestation signature bundle from the off-chain attestation service
        attestation: Binary,
    },

    // ========================================================================
    // Domain Registry
    // ========================================================================
    /// Set one or more domain records, overwriting prior records
    ///
    /// Authorization: Owner only
    SetDomains {
        /// Updates to apply, in order
        updates: Vec<DomainUpdate>,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Atomically replace the attestation-protocol configuration
    ///
    /// Authorization: Owner only
    ///
    /// Revokes the old burn authority's spending approval and grants
    /// unlimited approval to the new one within the same transaction.
    SetConfig {
        /// Expected on-wire attestation message version
        version: u32,
        /// New token-messenger contract
        burn_authority: String,
        /// New message-transmitter contract
        mint_authority: String,
    },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Pause the pool (owner only)
    Pause {},

    /// Unpause the pool (owner only)
    Unpause {},

    /// Initiate 7-day timelock for owner transfer
    ProposeOwner { new_owner: String },

    /// Complete owner transfer after timelock
    AcceptOwner {},

    /// Cancel pending owner change
    CancelOwnerProposal {},

    /// Recover stuck assets (owner only, only when paused)
    RecoverAsset {
        asset: AssetInfo,
        amount: Uint128,
        recipient: String,
    },
}

/// CW20 receive hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Burn the received stablecoin for bridging to another chain
    Burn {
        /// Destination chain (local identifier, registry key)
        dest_chain_id: u64,
        /// Destination receiver; at least 32 bytes, of which the first 32
        /// are the canonical mint recipient identifier
        receiver: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns pool configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the attestation-protocol configuration
    #[returns(ProtocolConfigResponse)]
    ProtocolConfig {},

    /// Returns a domain record (default/zero record if unset)
    #[returns(DomainResponse)]
    Domain { local_chain_id: u64 },

    /// Returns all configured domains
    #[returns(DomainsResponse)]
    Domains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Returns the pool kind and supported capability identifiers,
    /// letting routing logic distinguish this pool from generic token pools
    #[returns(CapabilitiesResponse)]
    Capabilities {},

    /// Returns pending owner proposal details
    #[returns(Option<PendingOwnerResponse>)]
    PendingOwner {},

    /// Returns pool statistics
    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub token: Addr,
    pub local_domain: u32,
    pub zero_caller_on_disable: bool,
}

#[cw_serde]
pub struct ProtocolConfigResponse {
    pub version: u32,
    pub burn_authority: Addr,
    pub mint_authority: Addr,
}

#[cw_serde]
pub struct DomainResponse {
    pub local_chain_id: u64,
    pub domain: u32,
    pub authorized_caller: Binary,
    pub enabled: bool,
    /// Whether this chain was ever configured. Unset entries report the
    /// default/zero record with `enabled = false`; burn-path callers must
    /// treat both states as "domain disabled".
    pub configured: bool,
}

#[cw_serde]
pub struct DomainsResponse {
    pub domains: Vec<DomainResponse>,
}

#[cw_serde]
pub struct CapabilityInfo {
    /// Capability name
    pub name: String,
    /// Fixed 32-byte capability identifier (keccak256 of the name)
    pub id: Binary,
}

#[cw_serde]
pub struct CapabilitiesResponse {
    /// This pool's kind tag
    pub pool_kind: String,
    /// Supported capabilities, generic and pool-specific
    pub capabilities: Vec<CapabilityInfo>,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_burns: u64,
    pub total_mints: u64,
}
