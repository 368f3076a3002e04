//! Attestation message decoding and cross-validation.
//!
//! The attestation protocol certifies burns with a fixed-layout binary
//! message (big-endian integers):
//!
//! ```text
//! | version (4) | source domain (4) | destination domain (4) | nonce (8) |
//! | sender (32) | receiver (32) | body (variable, ignored) |
//! ```
//!
//! The version is read and gated before any other field so that malformed or
//! truncated input fails on the version check instead of running past the
//! buffer end. Only layout version 1 exists.

use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::msg::BurnReceipt;

/// The only supported wire layout version
pub const MESSAGE_VERSION: u32 = 1;

/// Fixed header length: 4 + 4 + 4 + 8 + 32 + 32
pub const MESSAGE_HEADER_LEN: usize = 84;

/// Decoded attestation message header. Transient; exists only for the
/// duration of one mint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationMessage {
    /// Wire layout version
    pub version: u32,
    /// Domain the burn happened on
    pub source_domain: u32,
    /// Domain the mint is destined for
    pub destination_domain: u32,
    /// Nonce issued by the source chain's burn authority
    pub nonce: u64,
    /// Burn-initiating identity on the source chain
    pub sender: [u8; 32],
    /// Mint recipient identity on the destination chain
    pub receiver: [u8; 32],
}

impl AttestationMessage {
    /// Decode an untrusted byte sequence.
    ///
    /// The version field is checked before anything past offset 4 is
    /// touched; a short buffer carrying a wrong version reports the version,
    /// not the length. Trailing body bytes past the header are ignored.
    pub fn decode(data: &[u8], expected_version: u32) -> Result<Self, ContractError> {
        if data.len() < 4 {
            return Err(ContractError::InvalidMessageLength {
                min: MESSAGE_HEADER_LEN,
                got: data.len(),
            });
        }

        // offset 0, width 4: version (gated first)
        let version = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        if version != expected_version {
            return Err(ContractError::UnsupportedMessageVersion {
                expected: expected_version,
                got: version,
            });
        }

        if data.len() < MESSAGE_HEADER_LEN {
            return Err(ContractError::InvalidMessageLength {
                min: MESSAGE_HEADER_LEN,
                got: data.len(),
            });
        }

        // offset 4, width 4: source domain
        let source_domain = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);

        // offset 8, width 4: destination domain
        let destination_domain = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);

        // offset 12, width 8: nonce
        let mut nonce_bytes = [0u8; 8];
        nonce_bytes.copy_from_slice(&data[12..20]);
        let nonce = u64::from_be_bytes(nonce_bytes);

        // offset 20, width 32: sender
        let mut sender = [0u8; 32];
        sender.copy_from_slice(&data[20..52]);

        // offset 52, width 32: receiver
        let mut receiver = [0u8; 32];
        receiver.copy_from_slice(&data[52..84]);

        Ok(Self {
            version,
            source_domain,
            destination_domain,
            nonce,
            sender,
            receiver,
        })
    }

    /// Encode the header followed by an opaque body.
    ///
    /// Used by orchestration tooling and tests; `encode` then `decode`
    /// recovers identical field values.
    pub fn encode(&self, body: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(MESSAGE_HEADER_LEN + body.len());
        data.extend_from_slice(&self.version.to_be_bytes());
        data.extend_from_slice(&self.source_domain.to_be_bytes());
        data.extend_from_slice(&self.destination_domain.to_be_bytes());
        data.extend_from_slice(&self.nonce.to_be_bytes());
        data.extend_from_slice(&self.sender);
        data.extend_from_slice(&self.receiver);
        data.extend_from_slice(body);
        data
    }
}

/// Cross-check a decoded message against the burn receipt and local
/// configuration, in order, short-circuiting on the first failure.
///
/// The destination domain is compared against this chain's own configured
/// identity, never against caller input; a message attested for another
/// chain cannot be replayed here. The validator keeps no state; every
/// invocation is independent given its inputs.
pub fn validate_message(
    msg: &AttestationMessage,
    expected_version: u32,
    receipt: &BurnReceipt,
    local_domain: u32,
    expected_sender: &[u8; 32],
    expected_receiver: &[u8; 32],
) -> Result<(), ContractError> {
    if msg.version != expected_version {
        return Err(ContractError::UnsupportedMessageVersion {
            expected: expected_version,
            got: msg.version,
        });
    }

    if msg.source_domain != receipt.source_domain {
        return Err(ContractError::SourceDomainMismatch {
            expected: receipt.source_domain,
            got: msg.source_domain,
        });
    }

    if msg.destination_domain != local_domain {
        return Err(ContractError::DestinationDomainMismatch {
            expected: local_domain,
            got: msg.destination_domain,
        });
    }

    if msg.nonce != receipt.nonce {
        return Err(ContractError::NonceMismatch {
            expected: receipt.nonce,
            got: msg.nonce,
        });
    }

    if &msg.sender != expected_sender {
        return Err(ContractError::SenderMismatch {
            expected: bytes32_to_hex(expected_sender),
            got: bytes32_to_hex(&msg.sender),
        });
    }

    if &msg.receiver != expected_receiver {
        return Err(ContractError::ReceiverMismatch {
            expected: bytes32_to_hex(expected_receiver),
            got: bytes32_to_hex(&msg.receiver),
        });
    }

    Ok(())
}
