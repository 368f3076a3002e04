//! Outbound burn handlers.
//!
//! Tokens arrive through the CW20 receive hook, the token messenger pulls
//! and burns them via the pool's standing allowance, and the nonce it issues
//! comes back through the reply. The reply returns the `BurnReceipt` as
//! response data; the orchestration layer carries it off-band to the
//! destination chain together with the attestation obtained later.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, DepsMut, MessageInfo, Reply, Response, StdError,
    SubMsg, Uint128, WasmMsg,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, encode_account_id};
use crate::messenger::{DepositForBurnResponse, TokenMessengerExecuteMsg};
use crate::msg::{BurnReceipt, ReceiveMsg};
use crate::state::{
    Config, PendingBurn, BURN_REPLY_ID, CONFIG, DOMAINS, PENDING_BURN, PROTOCOL_CONFIG, STATS,
};

/// Execute handler for receiving stablecoin to burn (CW20 send hook).
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::PoolPaused);
    }

    // Only the configured stablecoin may enter the pool
    if info.sender != config.token {
        return Err(ContractError::UnsupportedToken {
            token: info.sender.to_string(),
        });
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Burn {
            dest_chain_id,
            receiver,
        } => initiate_burn(deps, config, sender, cw20_msg.amount, dest_chain_id, receiver),
    }
}

/// Resolve the destination domain and hand the tokens to the burn authority.
///
/// Amount positivity is the surrounding rate limiter's concern, not checked
/// here.
fn initiate_burn(
    deps: DepsMut,
    config: Config,
    sender: Addr,
    amount: Uint128,
    dest_chain_id: u64,
    receiver: Binary,
) -> Result<Response, ContractError> {
    // Absent and disabled entries are equivalent here
    let record = DOMAINS
        .may_load(deps.storage, dest_chain_id)?
        .filter(|r| r.enabled)
        .ok_or(ContractError::UnknownDomain {
            local_chain_id: dest_chain_id,
        })?;

    // At least 32 bytes; the first 32 are the canonical recipient identifier
    if receiver.len() < 32 {
        return Err(ContractError::InvalidReceiver {
            got: receiver.len(),
        });
    }
    let mut mint_recipient = [0u8; 32];
    mint_recipient.copy_from_slice(&receiver.as_slice()[..32]);

    let protocol = PROTOCOL_CONFIG.load(deps.storage)?;
    let sender_id = encode_account_id(&sender);

    PENDING_BURN.save(
        deps.storage,
        &PendingBurn {
            sender: sender.clone(),
            sender_id,
            amount,
            local_chain_id: dest_chain_id,
            destination_domain: record.domain,
            mint_recipient,
        },
    )?;

    let burn_msg = WasmMsg::Execute {
        contract_addr: protocol.burn_authority.to_string(),
        msg: to_json_binary(&TokenMessengerExecuteMsg::DepositForBurn {
            amount,
            destination_domain: record.domain,
            mint_recipient: Binary::from(mint_recipient.to_vec()),
            burn_token: config.token.to_string(),
            destination_caller: Binary::from(record.authorized_caller.to_vec()),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(burn_msg, BURN_REPLY_ID))
        .add_attribute("action", "burn_initiated")
        .add_attribute("sender", sender)
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("destination_domain", record.domain.to_string())
        .add_attribute("receiver", bytes32_to_hex(&mint_recipient))
        .add_attribute("amount", amount.to_string()))
}

/// Reply handler for the burn sub-message.
///
/// Parses the nonce the messenger issued, emits the burn-completion event,
/// and returns the `BurnReceipt` as response data.
pub fn reply_burn(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_BURN.load(deps.storage)?;
    PENDING_BURN.remove(deps.storage);

    let config = CONFIG.load(deps.storage)?;

    let data = msg
        .result
        .into_result()
        .map_err(StdError::generic_err)?
        .data
        .ok_or(ContractError::MissingReplyData { id: BURN_REPLY_ID })?;
    let burn_response: DepositForBurnResponse = from_json(&data)?;

    let receipt = BurnReceipt {
        nonce: burn_response.nonce,
        source_domain: config.local_domain,
    };

    let mut stats = STATS.load(deps.storage)?;
    stats.total_burns += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .set_data(to_json_binary(&receipt)?)
        .add_attribute("action", "burn_completed")
        .add_attribute("nonce", receipt.nonce.to_string())
        .add_attribute("source_domain", receipt.source_domain.to_string())
        .add_attribute("dest_chain_id", pending.local_chain_id.to_string())
        .add_attribute("destination_domain", pending.destination_domain.to_string())
        .add_attribute("sender", pending.sender)
        .add_attribute("sender_id", bytes32_to_hex(&pending.sender_id))
        .add_attribute("receiver", bytes32_to_hex(&pending.mint_recipient))
        .add_attribute("amount", pending.amount.to_string()))
}
