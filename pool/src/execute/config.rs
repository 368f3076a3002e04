//! Attestation-protocol configuration handlers.
//!
//! Replacing the configuration also moves the pool's unlimited spending
//! approval from the old burn authority to the new one inside the same
//! transaction. There is never a block in which two authorities are
//! approved, or neither is.

use cosmwasm_std::{
    to_json_binary, Addr, Api, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{ProtocolConfig, CONFIG, PROTOCOL_CONFIG};

/// Atomically replace the attestation-protocol configuration (owner only).
pub fn execute_set_config(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    version: u32,
    burn_authority: String,
    mint_authority: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let burn_authority = validate_authority(deps.api, &burn_authority, "burn_authority")?;
    let mint_authority = validate_authority(deps.api, &mint_authority, "mint_authority")?;

    let old = PROTOCOL_CONFIG.may_load(deps.storage)?;
    let messages = approval_messages(
        deps.as_ref(),
        &env,
        &config.token,
        old.as_ref().map(|p| &p.burn_authority),
        &burn_authority,
    )?;

    let protocol = ProtocolConfig {
        version,
        burn_authority,
        mint_authority,
    };
    PROTOCOL_CONFIG.save(deps.storage, &protocol)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "set_config")
        .add_attribute("version", protocol.version.to_string())
        .add_attribute("burn_authority", protocol.burn_authority)
        .add_attribute("mint_authority", protocol.mint_authority))
}

/// Reject empty/zero-valued authority addresses with a config error.
pub fn validate_authority(api: &dyn Api, input: &str, field: &str) -> Result<Addr, ContractError> {
    if input.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: format!("{} must not be empty", field),
        });
    }
    api.addr_validate(input)
        .map_err(|_| ContractError::InvalidConfig {
            reason: format!("{} is not a valid address", field),
        })
}

/// Build the allowance messages that move the unlimited spending approval
/// from `old` to `new`.
///
/// The old authority's remaining allowance is queried and revoked exactly
/// (it may be partially spent); the new authority is topped up to
/// `Uint128::MAX`.
pub fn approval_messages(
    deps: Deps,
    env: &Env,
    token: &Addr,
    old: Option<&Addr>,
    new: &Addr,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let mut messages: Vec<CosmosMsg> = vec![];

    if let Some(old) = old {
        if old != new {
            let remaining: AllowanceResponse = deps.querier.query_wasm_smart(
                token,
                &Cw20QueryMsg::Allowance {
                    owner: env.contract.address.to_string(),
                    spender: old.to_string(),
                },
            )?;
            if !remaining.allowance.is_zero() {
                messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::DecreaseAllowance {
                        spender: old.to_string(),
                        amount: remaining.allowance,
                        expires: None,
                    })?,
                    funds: vec![],
                }));
            }
        }
    }

    let current: AllowanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: env.contract.address.to_string(),
            spender: new.to_string(),
        },
    )?;
    let headroom = Uint128::MAX - current.allowance;
    if !headroom.is_zero() {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                spender: new.to_string(),
                amount: headroom,
                expires: None,
            })?,
            funds: vec![],
        }));
    }

    Ok(messages)
}
