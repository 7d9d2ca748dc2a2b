use std::time::Duration;

use alloy::primitives::{address, Address, U256};

// Ethereum mainnet
pub const UNISWAP_V2_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");
pub const USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

pub const RPC_URL_VAR: &str = "RPC_URL";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

pub const U16_BPS_ONE: u16 = 10_000;
pub const U256_BPS_ONE: U256 = U256::from_limbs([10_000, 0, 0, 0]);
pub const F64_BPS_PER_PERCENT: f64 = 100.0;

pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(60 * 20);
