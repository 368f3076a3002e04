//! Error types for the Stablemint Pool contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Pool State Errors
    // ========================================================================

    #[error("Pool is paused")]
    PoolPaused,

    #[error("Unknown or disabled domain for chain {local_chain_id}")]
    UnknownDomain { local_chain_id: u64 },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unsupported token: {token}")]
    UnsupportedToken { token: String },

    #[error("Invalid identifier length: expected {expected} bytes, got {got}")]
    InvalidIdentifierLength { expected: usize, got: usize },

    #[error("Invalid receiver: need at least 32 bytes, got {got}")]
    InvalidReceiver { got: usize },

    // ========================================================================
    // Message Format Errors
    // ========================================================================

    #[error("Message too short: need at least {min} bytes, got {got}")]
    InvalidMessageLength { min: usize, got: usize },

    #[error("Unsupported message version: expected {expected}, got {got}")]
    UnsupportedMessageVersion { expected: u32, got: u32 },

    // ========================================================================
    // Cross-Validation Errors
    // ========================================================================

    #[error("Source domain mismatch: expected {expected}, got {got}")]
    SourceDomainMismatch { expected: u32, got: u32 },

    #[error("Destination domain mismatch: expected {expected}, got {got}")]
    DestinationDomainMismatch { expected: u32, got: u32 },

    #[error("Nonce mismatch: expected {expected}, got {got}")]
    NonceMismatch { expected: u64, got: u64 },

    #[error("Sender mismatch: expected {expected}, got {got}")]
    SenderMismatch { expected: String, got: String },

    #[error("Receiver mismatch: expected {expected}, got {got}")]
    ReceiverMismatch { expected: String, got: String },

    // ========================================================================
    // External Capability Errors
    // ========================================================================

    #[error("Unlocking failed: mint authority rejected the attestation")]
    UnlockingFailed,

    #[error("Reply {id} carried no data")]
    MissingReplyData { id: u64 },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    // ========================================================================
    // Recovery Errors
    // ========================================================================

    #[error("Asset recovery only available when pool is paused")]
    RecoveryNotAvailable,
}
