//! Shared test setup: a cw-multi-test App wired with a real cw20-base
//! stablecoin, mock token-messenger and message-transmitter contracts, and
//! the pool under test.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    Uint128, WasmMsg,
};
use cw20::{Cw20Coin, Cw20ExecuteMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use pool::message::AttestationMessage;
use pool::messenger::{
    DepositForBurnResponse, MessageTransmitterExecuteMsg, ReceiveMessageResponse,
    TokenMessengerExecuteMsg,
};
use pool::msg::{DomainUpdate, ExecuteMsg, InstantiateMsg, ReceiveMsg};

// ============================================================================
// Fixtures
// ============================================================================

pub const OWNER: &str = "terra1owner";
pub const USER: &str = "terra1user";
pub const RECIPIENT: &str = "terra1recipient";

/// This chain's own settlement-network domain
pub const LOCAL_DOMAIN: u32 = 0x0303_0303;
/// The counterpart chain's settlement-network domain
pub const REMOTE_DOMAIN: u32 = 0x0202_0202;
/// Registry key for the counterpart chain
pub const REMOTE_CHAIN_ID: u64 = 5;
/// Authorized minting caller configured for the counterpart chain
pub const AUTHORIZED_CALLER: [u8; 32] = [0xAC; 32];

/// Initial stablecoin balance handed to USER
pub const USER_BALANCE: u128 = 1_000_000_000;

pub struct TestEnv {
    pub app: App,
    pub pool: Addr,
    pub token: Addr,
    pub messenger: Addr,
    pub transmitter: Addr,
}

// ============================================================================
// Mock Token Messenger (burn authority)
// ============================================================================

pub mod mock_messenger {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        pub start_nonce: u64,
    }

    #[cw_serde]
    pub enum QueryMsg {
        /// Nonce the next burn will receive
        NextNonce {},
    }

    const NEXT_NONCE: Item<u64> = Item::new("next_nonce");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        NEXT_NONCE.save(deps.storage, &msg.start_nonce)?;
        Ok(Response::new())
    }

    /// Pulls the tokens from the calling pool via its allowance, burns them,
    /// and reports the issued nonce as response data.
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: TokenMessengerExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            TokenMessengerExecuteMsg::DepositForBurn {
                amount, burn_token, ..
            } => {
                let nonce = NEXT_NONCE.load(deps.storage)?;
                NEXT_NONCE.save(deps.storage, &(nonce + 1))?;

                let pull = WasmMsg::Execute {
                    contract_addr: burn_token.clone(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount,
                    })?,
                    funds: vec![],
                };
                let burn = WasmMsg::Execute {
                    contract_addr: burn_token,
                    msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
                    funds: vec![],
                };

                Ok(Response::new()
                    .add_message(pull)
                    .add_message(burn)
                    .set_data(to_json_binary(&DepositForBurnResponse { nonce })?))
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::NextNonce {} => to_json_binary(&NEXT_NONCE.load(deps.storage)?),
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }
}

// ============================================================================
// Mock Message Transmitter (mint authority)
// ============================================================================

pub mod mock_transmitter {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        /// Verdict this transmitter will return for every attestation
        pub success: bool,
    }

    #[cw_serde]
    pub enum QueryMsg {
        Success {},
    }

    const SUCCESS: Item<bool> = Item::new("success");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        SUCCESS.save(deps.storage, &msg.success)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: MessageTransmitterExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            MessageTransmitterExecuteMsg::ReceiveMessage { .. } => {
                let success = SUCCESS.load(deps.storage)?;
                Ok(Response::new()
                    .add_attribute("action", "receive_message")
                    .set_data(to_json_binary(&ReceiveMessageResponse { success })?))
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Success {} => to_json_binary(&SUCCESS.load(deps.storage)?),
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }
}

// ============================================================================
// Setup
// ============================================================================

pub fn contract_pool() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        pool::contract::execute,
        pool::contract::instantiate,
        pool::contract::query,
    )
    .with_reply(pool::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

pub fn setup() -> TestEnv {
    setup_with(true, false)
}

pub fn setup_with(transmitter_success: bool, zero_caller_on_disable: bool) -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Stablecoin".to_string(),
                symbol: "USDS".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: USER.to_string(),
                    amount: Uint128::new(USER_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "stablecoin",
            None,
        )
        .unwrap();

    let messenger_code = app.store_code(mock_messenger::contract());
    let messenger = app
        .instantiate_contract(
            messenger_code,
            owner.clone(),
            &mock_messenger::InstantiateMsg { start_nonce: 0 },
            &[],
            "messenger",
            None,
        )
        .unwrap();

    let transmitter_code = app.store_code(mock_transmitter::contract());
    let transmitter = app
        .instantiate_contract(
            transmitter_code,
            owner.clone(),
            &mock_transmitter::InstantiateMsg {
                success: transmitter_success,
            },
            &[],
            "transmitter",
            None,
        )
        .unwrap();

    let pool_code = app.store_code(contract_pool());
    let pool = app
        .instantiate_contract(
            pool_code,
            owner.clone(),
            &InstantiateMsg {
                owner: OWNER.to_string(),
                token: token.to_string(),
                local_domain: LOCAL_DOMAIN,
                message_version: 1,
                burn_authority: messenger.to_string(),
                mint_authority: transmitter.to_string(),
                zero_caller_on_disable,
            },
            &[],
            "stablemint-pool",
            Some(OWNER.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner,
        pool.clone(),
        &ExecuteMsg::SetDomains {
            updates: vec![DomainUpdate {
                local_chain_id: REMOTE_CHAIN_ID,
                domain: REMOTE_DOMAIN,
                authorized_caller: Binary::from(AUTHORIZED_CALLER.to_vec()),
                enabled: true,
            }],
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        pool,
        token,
        messenger,
        transmitter,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// CW20 send that burns `amount` toward `dest_chain_id`.
pub fn send_burn_msg(pool: &Addr, amount: u128, dest_chain_id: u64, receiver: &[u8]) -> Cw20ExecuteMsg {
    Cw20ExecuteMsg::Send {
        contract: pool.to_string(),
        amount: Uint128::new(amount),
        msg: to_json_binary(&ReceiveMsg::Burn {
            dest_chain_id,
            receiver: Binary::from(receiver.to_vec()),
        })
        .unwrap(),
    }
}

/// Encode an attestation message with the given header fields.
pub fn build_message(
    version: u32,
    source_domain: u32,
    destination_domain: u32,
    nonce: u64,
    sender: [u8; 32],
    receiver: [u8; 32],
    body: &[u8],
) -> Binary {
    Binary::from(
        AttestationMessage {
            version,
            source_domain,
            destination_domain,
            nonce,
            sender,
            receiver,
        }
        .encode(body),
    )
}

/// The 32-byte wire identifier of a local address.
pub fn account_id(addr: &str) -> [u8; 32] {
    pool::hash::encode_account_id(&Addr::unchecked(addr))
}

/// First value of an event attribute across all response events.
pub fn event_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

/// The event carrying the given `action` attribute value, if any.
pub fn event_with_action<'a>(
    res: &'a AppResponse,
    action: &str,
) -> Option<&'a cosmwasm_std::Event> {
    res.events.iter().find(|e| {
        e.attributes
            .iter()
            .any(|a| a.key == "action" && a.value == action)
    })
}

/// Attribute value scoped to the event with the given `action`.
pub fn action_attr(res: &AppResponse, action: &str, key: &str) -> Option<String> {
    event_with_action(res, action)?
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn token_balance(app: &App, token: &Addr, account: &str) -> Uint128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub fn token_supply(app: &App, token: &Addr) -> Uint128 {
    let res: cw20::TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(token, &cw20::Cw20QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

pub fn allowance(app: &App, token: &Addr, owner: &Addr, spender: &Addr) -> Uint128 {
    let res: cw20::AllowanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )
        .unwrap();
    res.allowance
}

pub fn messenger_next_nonce(app: &App, messenger: &Addr) -> u64 {
    app.wrap()
        .query_wasm_smart(messenger, &mock_messenger::QueryMsg::NextNonce {})
        .unwrap()
}

pub fn native_asset(denom: &str) -> common::AssetInfo {
    common::AssetInfo::Native {
        denom: denom.to_string(),
    }
}

pub fn cw20_asset(contract_addr: &Addr) -> common::AssetInfo {
    common::AssetInfo::Cw20 {
        contract_addr: contract_addr.clone(),
    }
}
