use std::sync::Arc;

use alloy::{
    network::{Network, ReceiptResponse},
    primitives::{Address, TxHash, U256},
    providers::Provider,
    sol,
    transports::Transport,
};
use tracing::instrument;

use crate::errors::SwapError;

sol!(
#[allow(missing_docs)]
#[derive(Debug, PartialEq, Eq)]
#[sol(rpc)]
contract IERC20 {
    function balanceOf(address account) external view returns (uint256 balance);
    function decimals() external view returns (uint8 decimals);
    function symbol() external view returns (string memory symbol);
    function allowance(address owner, address spender) external view returns (uint256 remaining);
    function approve(address spender, uint256 amount) external returns (bool success);
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub address: Address,
    pub decimals: u8,
    pub symbol: String,
}

impl Token {
    /// Loads decimals and symbol from the token contract.
    #[instrument(skip(provider), level = "debug")]
    pub async fn new<T, N, P>(address: Address, provider: Arc<P>) -> Result<Self, SwapError>
    where
        T: Transport + Clone,
        N: Network,
        P: Provider<T, N>,
    {
        let contract = IERC20::new(address, provider);

        let decimals = contract
            .decimals()
            .call()
            .await
            .inspect_err(|err| tracing::error!(?address, %err, "decimals() failed"))?
            .decimals;
        let symbol = contract
            .symbol()
            .call()
            .await
            .inspect_err(|err| tracing::error!(?address, %err, "symbol() failed"))?
            .symbol;

        Ok(Self {
            address,
            decimals,
            symbol,
        })
    }

    pub fn new_with_metadata(address: Address, decimals: u8, symbol: impl Into<String>) -> Self {
        Self {
            address,
            decimals,
            symbol: symbol.into(),
        }
    }

    pub const fn address(&self) -> &Address {
        &self.address
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[instrument(skip(self, provider), level = "debug")]
    pub async fn balance_of<T, N, P>(
        &self,
        owner: Address,
        provider: Arc<P>,
    ) -> Result<U256, SwapError>
    where
        T: Transport + Clone,
        N: Network,
        P: Provider<T, N>,
    {
        let balance = IERC20::new(self.address, provider)
            .balanceOf(owner)
            .call()
            .await
            .inspect_err(|err| {
                tracing::error!(token = %self.symbol, ?owner, %err, "balanceOf() failed")
            })?
            .balance;

        Ok(balance)
    }

    #[instrument(skip(self, provider), level = "debug")]
    pub async fn allowance<T, N, P>(
        &self,
        owner: Address,
        spender: Address,
        provider: Arc<P>,
    ) -> Result<U256, SwapError>
    where
        T: Transport + Clone,
        N: Network,
        P: Provider<T, N>,
    {
        let remaining = IERC20::new(self.address, provider)
            .allowance(owner, spender)
            .call()
            .await
            .inspect_err(|err| {
                tracing::error!(token = %self.symbol, ?owner, ?spender, %err, "allowance() failed")
            })?
            .remaining;

        Ok(remaining)
    }

    /// Approves `spender` for `amount` and waits for the transaction to be mined.
    #[instrument(skip(self, provider), level = "debug")]
    pub async fn approve<T, N, P>(
        &self,
        spender: Address,
        amount: U256,
        provider: Arc<P>,
    ) -> Result<TxHash, SwapError>
    where
        T: Transport + Clone,
        N: Network,
        P: Provider<T, N>,
    {
        let contract = IERC20::new(self.address, provider);
        let pending = contract
            .approve(spender, amount)
            .send()
            .await
            .inspect_err(|err| {
                tracing::error!(token = %self.symbol, ?spender, %err, "approve() failed")
            })?;

        tracing::info!(
            token = %self.symbol,
            tx_hash = ?pending.tx_hash(),
            "Approval sent, waiting for confirmation"
        );

        let receipt = pending.get_receipt().await.inspect_err(|err| {
            tracing::error!(token = %self.symbol, %err, "approval confirmation failed")
        })?;

        let tx_hash = receipt.transaction_hash();
        if !receipt.status() {
            return Err(SwapError::TransactionReverted(tx_hash));
        }

        tracing::info!(
            token = %self.symbol,
            ?tx_hash,
            block_number = ?receipt.block_number(),
            "Approval confirmed"
        );

        Ok(tx_hash)
    }
}
