//! Owner operations handlers.
//!
//! This module handles:
//! - Pause/unpause pool
//! - Owner transfer (propose/accept/cancel)
//! - Asset recovery (emergency)

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{PendingOwner, CONFIG, OWNER_TIMELOCK_DURATION, PENDING_OWNER};
use common::AssetInfo;

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the pool (stops burn and mint intake).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Unpause the pool (resumes transfers).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

// ============================================================================
// Owner Transfer
// ============================================================================

/// Propose a new owner (starts timelock).
pub fn execute_propose_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    let pending = PendingOwner {
        new_address: new_owner_addr.clone(),
        execute_after: env.block.time.plus_seconds(OWNER_TIMELOCK_DURATION),
    };
    PENDING_OWNER.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("new_owner", new_owner_addr.to_string())
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending owner role (after timelock).
pub fn execute_accept_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.owner = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("new_owner", pending.new_address.to_string()))
}

/// Cancel pending owner proposal.
pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_owner_proposal"))
}

// ============================================================================
// Asset Recovery
// ============================================================================

/// Recover stuck assets (emergency, requires paused state).
///
/// The pool only holds tokens transiently between intake and the burn
/// authority's pull; anything resting here long-term was sent by mistake.
pub fn execute_recover_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if !config.paused {
        return Err(ContractError::RecoveryNotAvailable);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let messages: Vec<CosmosMsg> = match asset {
        AssetInfo::Native { denom } => {
            vec![CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient_addr.to_string(),
                amount: vec![Coin { denom, amount }],
            })]
        }
        AssetInfo::Cw20 { contract_addr } => {
            vec![CosmosMsg::Wasm(cosmwasm_std::WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: cosmwasm_std::to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient_addr.to_string(),
                    amount,
                })?,
                funds: vec![],
            })]
        }
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "recover_asset")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}
