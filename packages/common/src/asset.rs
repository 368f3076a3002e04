//! Asset abstraction over native denoms and CW20 tokens.
//!
//! Used by the contracts wherever an operation must accept either kind of
//! asset (e.g. recovery of funds accidentally sent to a contract).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

/// Identifies an asset: a native bank denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    /// Native token identified by denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 token identified by its contract address
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// The denom or contract address as a plain string (for attributes).
    pub fn identifier(&self) -> String {
        match self {
            AssetInfo::Native { denom } => denom.clone(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.to_string(),
        }
    }
}

/// An asset paired with an amount.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn native(denom: impl Into<String>, amount: impl Into<Uint128>) -> Self {
        Self {
            info: AssetInfo::Native {
                denom: denom.into(),
            },
            amount: amount.into(),
        }
    }

    pub fn cw20(contract_addr: Addr, amount: impl Into<Uint128>) -> Self {
        Self {
            info: AssetInfo::Cw20 { contract_addr },
            amount: amount.into(),
        }
    }
}
