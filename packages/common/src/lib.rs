//! Common - Shared Types and Utilities for Stablemint Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the Stablemint smart contracts.

pub mod asset;

pub use asset::{Asset, AssetInfo};
