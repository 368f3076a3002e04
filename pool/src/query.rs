//! Query handlers for the Stablemint Pool contract.

use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::hash::{
    capability_id, CAPABILITY_STABLECOIN_BURN_MINT, CAPABILITY_TOKEN_POOL, POOL_KIND,
};
use crate::msg::{
    CapabilitiesResponse, CapabilityInfo, ConfigResponse, DomainResponse, DomainsResponse,
    PendingOwnerResponse, ProtocolConfigResponse, StatsResponse,
};
use crate::state::{DomainRecord, CONFIG, DOMAINS, PENDING_OWNER, PROTOCOL_CONFIG, STATS};

/// Query pool configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        paused: config.paused,
        token: config.token,
        local_domain: config.local_domain,
        zero_caller_on_disable: config.zero_caller_on_disable,
    })
}

/// Query the attestation-protocol configuration.
pub fn query_protocol_config(deps: Deps) -> StdResult<ProtocolConfigResponse> {
    let protocol = PROTOCOL_CONFIG.load(deps.storage)?;
    Ok(ProtocolConfigResponse {
        version: protocol.version,
        burn_authority: protocol.burn_authority,
        mint_authority: protocol.mint_authority,
    })
}

/// Query a domain record.
///
/// Unset entries report the default/zero record with `configured = false`;
/// callers must treat "never configured" and "explicitly disabled" the same
/// way, the flag exists for audit tooling only.
pub fn query_domain(deps: Deps, local_chain_id: u64) -> StdResult<DomainResponse> {
    let stored = DOMAINS.may_load(deps.storage, local_chain_id)?;
    let configured = stored.is_some();
    let record = stored.unwrap_or_else(DomainRecord::unset);

    Ok(DomainResponse {
        local_chain_id,
        domain: record.domain,
        authorized_caller: Binary::from(record.authorized_caller.to_vec()),
        enabled: record.enabled,
        configured,
    })
}

/// Query paginated list of configured domains.
pub fn query_domains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DomainsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let domains: Vec<DomainResponse> = DOMAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (local_chain_id, record) = item?;
            Ok(DomainResponse {
                local_chain_id,
                domain: record.domain,
                authorized_caller: Binary::from(record.authorized_caller.to_vec()),
                enabled: record.enabled,
                configured: true,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DomainsResponse { domains })
}

/// Query the pool kind and capability identifiers.
pub fn query_capabilities() -> StdResult<CapabilitiesResponse> {
    Ok(CapabilitiesResponse {
        pool_kind: POOL_KIND.to_string(),
        capabilities: vec![
            CapabilityInfo {
                name: CAPABILITY_TOKEN_POOL.to_string(),
                id: Binary::from(capability_id(CAPABILITY_TOKEN_POOL).to_vec()),
            },
            CapabilityInfo {
                name: CAPABILITY_STABLECOIN_BURN_MINT.to_string(),
                id: Binary::from(capability_id(CAPABILITY_STABLECOIN_BURN_MINT).to_vec()),
            },
        ],
    })
}

/// Query pending owner proposal details.
pub fn query_pending_owner(deps: Deps) -> StdResult<Option<PendingOwnerResponse>> {
    let pending = PENDING_OWNER.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingOwnerResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}

/// Query pool statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_burns: stats.total_burns,
        total_mints: stats.total_mints,
    })
}
