//! Domain registry handlers.
//!
//! Each update overwrites any prior record unconditionally, so a single
//! `SetDomains` message can reconfigure the whole registry. Records are
//! never deleted, only disabled or overwritten.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::hash::bytes32_to_hex;
use crate::msg::DomainUpdate;
use crate::state::{DomainRecord, CONFIG, DOMAINS};

/// Set one or more domain records (owner only).
pub fn execute_set_domains(
    deps: DepsMut,
    info: MessageInfo,
    updates: Vec<DomainUpdate>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let count = updates.len();
    let mut events = Vec::with_capacity(count);

    for update in updates {
        let caller: [u8; 32] = update.authorized_caller.to_vec().try_into().map_err(|_| {
            ContractError::InvalidIdentifierLength {
                expected: 32,
                got: update.authorized_caller.len(),
            }
        })?;

        let authorized_caller = if !update.enabled && config.zero_caller_on_disable {
            [0u8; 32]
        } else {
            caller
        };

        let record = DomainRecord {
            domain: update.domain,
            authorized_caller,
            enabled: update.enabled,
        };
        DOMAINS.save(deps.storage, update.local_chain_id, &record)?;

        events.push(
            Event::new("domain_updated")
                .add_attribute("local_chain_id", update.local_chain_id.to_string())
                .add_attribute("domain", update.domain.to_string())
                .add_attribute("authorized_caller", bytes32_to_hex(&authorized_caller))
                .add_attribute("enabled", update.enabled.to_string()),
        );
    }

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "set_domains")
        .add_attribute("count", count.to_string()))
}
