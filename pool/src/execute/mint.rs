//! Inbound mint handlers.
//!
//! The attestation message is untrusted input. It is decoded byte-by-byte
//! and every field cross-checked against the burn receipt and this pool's
//! own configuration before the message transmitter is invoked; the
//! transmitter's own verdict comes back through the reply. A transmitter
//! rejection surfaces as `UnlockingFailed`, distinct from every validation
//! failure, so callers can tell "message is invalid" from "attestation
//! service rejected it".

use cosmwasm_std::{
    from_json, to_json_binary, Binary, DepsMut, MessageInfo, Reply, Response, StdError, SubMsg,
    Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::hash::encode_account_id;
use crate::message::{validate_message, AttestationMessage};
use crate::messenger::{MessageTransmitterExecuteMsg, ReceiveMessageResponse};
use crate::msg::BurnReceipt;
use crate::state::{PendingMint, CONFIG, MINT_REPLY_ID, PENDING_MINT, PROTOCOL_CONFIG, STATS};

/// Execute handler for minting from a source-chain burn.
#[allow(clippy::too_many_arguments)]
pub fn execute_mint(
    deps: DepsMut,
    _info: MessageInfo,
    original_sender: Binary,
    receiver: String,
    amount: Uint128,
    receipt: BurnReceipt,
    message: Binary,
    attestation: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::PoolPaused);
    }

    let sender_id: [u8; 32] =
        original_sender
            .to_vec()
            .try_into()
            .map_err(|_| ContractError::InvalidIdentifierLength {
                expected: 32,
                got: original_sender.len(),
            })?;

    let recipient = deps.api.addr_validate(&receiver)?;
    let receiver_id = encode_account_id(&recipient);

    let protocol = PROTOCOL_CONFIG.load(deps.storage)?;

    let decoded = AttestationMessage::decode(message.as_slice(), protocol.version)?;
    validate_message(
        &decoded,
        protocol.version,
        &receipt,
        config.local_domain,
        &sender_id,
        &receiver_id,
    )?;

    PENDING_MINT.save(
        deps.storage,
        &PendingMint {
            recipient: recipient.clone(),
            amount,
            nonce: receipt.nonce,
            source_domain: receipt.source_domain,
        },
    )?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: protocol.mint_authority.to_string(),
        msg: to_json_binary(&MessageTransmitterExecuteMsg::ReceiveMessage {
            message,
            attestation,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(mint_msg, MINT_REPLY_ID))
        .add_attribute("action", "mint_initiated")
        .add_attribute("recipient", recipient)
        .add_attribute("nonce", receipt.nonce.to_string())
        .add_attribute("source_domain", receipt.source_domain.to_string())
        .add_attribute("amount", amount.to_string()))
}

/// Reply handler for the mint sub-message.
///
/// The transmitter reports its verdict in the reply data; a `false` fails
/// the whole operation with `UnlockingFailed`, reverting everything.
pub fn reply_mint(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_MINT.load(deps.storage)?;
    PENDING_MINT.remove(deps.storage);

    let data = msg
        .result
        .into_result()
        .map_err(StdError::generic_err)?
        .data
        .ok_or(ContractError::MissingReplyData { id: MINT_REPLY_ID })?;
    let mint_response: ReceiveMessageResponse = from_json(&data)?;

    if !mint_response.success {
        return Err(ContractError::UnlockingFailed);
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.total_mints += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_attribute("action", "mint_completed")
        .add_attribute("recipient", pending.recipient)
        .add_attribute("nonce", pending.nonce.to_string())
        .add_attribute("source_domain", pending.source_domain.to_string())
        .add_attribute("amount", pending.amount.to_string()))
}
