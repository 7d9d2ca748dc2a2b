use std::{marker::PhantomData, sync::Arc};

use alloy::{
    network::{Network, ReceiptResponse},
    primitives::{Address, TxHash, U256},
    providers::Provider,
    sol,
    transports::Transport,
};
use tracing::instrument;

use crate::{errors::SwapError, path::SwapPath};

sol!(
#[allow(missing_docs)]
#[derive(Debug, PartialEq, Eq)]
#[sol(rpc)]
contract IUniswapV2Router02 {
    function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
    function getAmountsIn(uint256 amountOut, address[] calldata path) external view returns (uint256[] memory amounts);
    function swapExactTokensForTokens(uint256 amountIn, uint256 amountOutMin, address[] calldata path, address to, uint256 deadline) external returns (uint256[] memory amounts);
});

/// Mined swap transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapConfirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Thin client over a deployed Uniswap V2 Router02.
///
/// All pricing is done by the router itself through the constant product
/// formula of the pools along the path.
#[derive(Debug, Clone)]
pub struct UniswapV2Router<T, N, P> {
    pub address: Address,
    provider: Arc<P>,
    phantom: PhantomData<(T, N)>,
}

impl<T, N, P> UniswapV2Router<T, N, P>
where
    T: Transport + Clone,
    N: Network,
    P: Provider<T, N>,
{
    pub fn new(address: Address, provider: Arc<P>) -> Self {
        Self {
            address,
            provider,
            phantom: PhantomData,
        }
    }

    pub fn provider(&self) -> Arc<P> {
        self.provider.clone()
    }

    /// Amounts received at every hop of `path` for `amount_in` of the first token.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_amounts_out(
        &self,
        amount_in: U256,
        path: &SwapPath,
    ) -> Result<Vec<U256>, SwapError> {
        let amounts = IUniswapV2Router02::new(self.address, self.provider.clone())
            .getAmountsOut(amount_in, path.to_vec())
            .call()
            .await
            .inspect_err(|err| {
                tracing::error!(%amount_in, %path, %err, "getAmountsOut() failed")
            })?
            .amounts;

        tracing::debug!(%amount_in, %path, ?amounts, "getAmountsOut");

        Ok(amounts)
    }

    /// Amounts required at every hop of `path` to receive `amount_out` of the last token.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_amounts_in(
        &self,
        amount_out: U256,
        path: &SwapPath,
    ) -> Result<Vec<U256>, SwapError> {
        let amounts = IUniswapV2Router02::new(self.address, self.provider.clone())
            .getAmountsIn(amount_out, path.to_vec())
            .call()
            .await
            .inspect_err(|err| {
                tracing::error!(%amount_out, %path, %err, "getAmountsIn() failed")
            })?
            .amounts;

        tracing::debug!(%amount_out, %path, ?amounts, "getAmountsIn");

        Ok(amounts)
    }

    /// Output amount of the last token for `amount_in` of the first.
    #[instrument(skip(self), level = "debug")]
    pub async fn quote_amount_out(
        &self,
        amount_in: U256,
        path: &SwapPath,
    ) -> Result<U256, SwapError> {
        let amounts = self.get_amounts_out(amount_in, path).await?;
        amounts.last().copied().ok_or(SwapError::EmptyAmounts)
    }

    /// Input amount of the first token needed to receive `amount_out` of the last.
    #[instrument(skip(self), level = "debug")]
    pub async fn quote_amount_in(
        &self,
        amount_out: U256,
        path: &SwapPath,
    ) -> Result<U256, SwapError> {
        let amounts = self.get_amounts_in(amount_out, path).await?;
        amounts.first().copied().ok_or(SwapError::EmptyAmounts)
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn swap_exact_tokens_for_tokens(
        &self,
        amount_in: U256,
        amount_out_min: U256,
        path: &SwapPath,
        to: Address,
        deadline: U256,
    ) -> Result<SwapConfirmation, SwapError> {
        let router = IUniswapV2Router02::new(self.address, self.provider.clone());
        let pending = router
            .swapExactTokensForTokens(amount_in, amount_out_min, path.to_vec(), to, deadline)
            .send()
            .await
            .inspect_err(|err| {
                tracing::error!(%amount_in, %amount_out_min, %path, %err, "swapExactTokensForTokens() failed")
            })?;

        tracing::info!(
            tx_hash = ?pending.tx_hash(),
            %amount_in,
            %amount_out_min,
            "Swap sent, waiting for confirmation"
        );

        let receipt = pending.get_receipt().await.inspect_err(|err| {
            tracing::error!(%err, "swap confirmation failed")
        })?;

        let tx_hash = receipt.transaction_hash();
        if !receipt.status() {
            tracing::error!(?tx_hash, "Swap reverted");
            return Err(SwapError::TransactionReverted(tx_hash));
        }

        let block_number = receipt.block_number();
        tracing::info!(?tx_hash, ?block_number, "Swap confirmed");

        Ok(SwapConfirmation {
            tx_hash,
            block_number,
        })
    }
}
