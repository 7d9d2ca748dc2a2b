use alloy::{
    primitives::{utils::UnitsError, TxHash, U256},
    providers::PendingTransactionError,
    signers::local::LocalSignerError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error(transparent)]
    ContractError(#[from] alloy::contract::Error),
    #[error(transparent)]
    PendingTransactionError(#[from] PendingTransactionError),
    #[error(transparent)]
    UnitsError(#[from] UnitsError),
    #[error("Negative amount: {0}")]
    NegativeAmount(String),
    #[error("Swap path needs at least two tokens, got {0}")]
    PathTooShort(usize),
    #[error("Router returned no amounts for path")]
    EmptyAmounts,
    #[error("Invalid slippage: {0}")]
    InvalidSlippage(String),
    #[error("Insufficient {symbol} balance: have {balance}, need {required}")]
    InsufficientBalance {
        symbol: String,
        balance: U256,
        required: U256,
    },
    #[error("Transaction {0} reverted")]
    TransactionReverted(TxHash),
    #[error("System clock is set before the unix epoch")]
    ClockBeforeEpoch,
    #[error("Deadline {0}s from now does not fit a timestamp")]
    DeadlineOverflow(u64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid RPC url {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },
    #[error("Invalid private key")]
    InvalidPrivateKey(#[from] LocalSignerError),
}
