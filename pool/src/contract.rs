//! Stablemint Pool Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! The `reply` entry point closes the loop on the two external
//! attestation-protocol calls (burn and mint).

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    approval_messages, execute_accept_owner, execute_cancel_owner_proposal, execute_mint,
    execute_pause, execute_propose_owner, execute_receive, execute_recover_asset,
    execute_set_config, execute_set_domains, execute_unpause, reply_burn, reply_mint,
    validate_authority,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_capabilities, query_config, query_domain, query_domains, query_pending_owner,
    query_protocol_config, query_stats,
};
use crate::state::{
    Config, ProtocolConfig, Stats, BURN_REPLY_ID, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    MINT_REPLY_ID, PROTOCOL_CONFIG, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let token = deps.api.addr_validate(&msg.token)?;
    let burn_authority = validate_authority(deps.api, &msg.burn_authority, "burn_authority")?;
    let mint_authority = validate_authority(deps.api, &msg.mint_authority, "mint_authority")?;

    let config = Config {
        owner,
        paused: false,
        token,
        local_domain: msg.local_domain,
        zero_caller_on_disable: msg.zero_caller_on_disable,
    };
    CONFIG.save(deps.storage, &config)?;

    let protocol = ProtocolConfig {
        version: msg.message_version,
        burn_authority,
        mint_authority,
    };
    PROTOCOL_CONFIG.save(deps.storage, &protocol)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_burns: 0,
            total_mints: 0,
        },
    )?;

    // Initial unlimited approval for the burn authority
    let messages = approval_messages(
        deps.as_ref(),
        &env,
        &config.token,
        None,
        &protocol.burn_authority,
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token", config.token)
        .add_attribute("local_domain", config.local_domain.to_string())
        .add_attribute("message_version", protocol.version.to_string())
        .add_attribute("burn_authority", protocol.burn_authority)
        .add_attribute("mint_authority", protocol.mint_authority))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::Mint {
            original_sender,
            receiver,
            amount,
            receipt,
            message,
            attestation,
        } => execute_mint(
            deps,
            info,
            original_sender,
            receiver,
            amount,
            receipt,
            message,
            attestation,
        ),

        // Domain registry
        ExecuteMsg::SetDomains { updates } => execute_set_domains(deps, info, updates),

        // Configuration
        ExecuteMsg::SetConfig {
            version,
            burn_authority,
            mint_authority,
        } => execute_set_config(deps, env, info, version, burn_authority, mint_authority),

        // Owner operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, env, info, new_owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
        ExecuteMsg::RecoverAsset {
            asset,
            amount,
            recipient,
        } => execute_recover_asset(deps, info, asset, amount, recipient),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        BURN_REPLY_ID => reply_burn(deps, msg),
        MINT_REPLY_ID => reply_mint(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ProtocolConfig {} => to_json_binary(&query_protocol_config(deps)?),
        QueryMsg::Domain { local_chain_id } => to_json_binary(&query_domain(deps, local_chain_id)?),
        QueryMsg::Domains { start_after, limit } => {
            to_json_binary(&query_domains(deps, start_after, limit)?)
        }
        QueryMsg::Capabilities {} => to_json_binary(&query_capabilities()?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
