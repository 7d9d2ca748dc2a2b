use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alloy::{
    network::Network,
    primitives::{Address, TxHash, U256},
    providers::Provider,
    transports::Transport,
};
use tracing::instrument;

use crate::{
    errors::SwapError,
    path::{SwapDirection, TokenPair},
    router::{SwapConfirmation, UniswapV2Router},
    slippage::Slippage,
    token::Token,
};

/// Unix timestamp after which the router rejects the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(u64);

impl Deadline {
    pub fn from_now(ttl: Duration) -> Result<Self, SwapError> {
        Self::after(SystemTime::now(), ttl)
    }

    pub fn after(now: SystemTime, ttl: Duration) -> Result<Self, SwapError> {
        let now = now
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SwapError::ClockBeforeEpoch)?;
        let deadline = now
            .checked_add(ttl)
            .ok_or(SwapError::DeadlineOverflow(ttl.as_secs()))?;
        Ok(Self(deadline.as_secs()))
    }

    pub const fn timestamp(&self) -> u64 {
        self.0
    }

    pub fn as_u256(&self) -> U256 {
        U256::from(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    pub direction: SwapDirection,
    pub amount_in: U256,
    pub slippage: Slippage,
    pub recipient: Address,
    pub deadline: Deadline,
}

impl SwapRequest {
    pub fn new(
        direction: SwapDirection,
        amount_in: U256,
        slippage: Slippage,
        recipient: Address,
        deadline: Deadline,
    ) -> Self {
        Self {
            direction,
            amount_in,
            slippage,
            recipient,
            deadline,
        }
    }
}

/// What has to happen on chain for a swap, decided from the current chain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    pub amount_out_min: U256,
    /// Amount to approve the router for, if the allowance is too low.
    pub approval: Option<U256>,
}

impl SwapPlan {
    pub fn new(
        request: &SwapRequest,
        token_in: &Token,
        balance: U256,
        allowance: U256,
        expected_amount_out: U256,
    ) -> Result<Self, SwapError> {
        if balance < request.amount_in {
            return Err(SwapError::InsufficientBalance {
                symbol: token_in.symbol.clone(),
                balance,
                required: request.amount_in,
            });
        }

        let approval = (allowance < request.amount_in).then_some(request.amount_in);

        Ok(Self {
            amount_out_min: request.slippage.min_amount_out(expected_amount_out),
            approval,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReceipt {
    pub approval: Option<TxHash>,
    pub swap: SwapConfirmation,
    pub expected_amount_out: U256,
    pub amount_out_min: U256,
}

/// Swaps `request.amount_in` of the direction's input token for the output token.
///
/// The router is approved for exactly `amount_in` when the current allowance is
/// lower, and both transactions are awaited until mined.
#[instrument(skip(router, pair), level = "debug")]
pub async fn execute_swap<T, N, P>(
    router: &UniswapV2Router<T, N, P>,
    pair: &TokenPair,
    owner: Address,
    request: &SwapRequest,
) -> Result<SwapReceipt, SwapError>
where
    T: Transport + Clone,
    N: Network,
    P: Provider<T, N>,
{
    let provider = router.provider();
    let token_in = pair.token_in(request.direction);
    let path = pair.path(request.direction);

    let balance = token_in.balance_of(owner, provider.clone()).await?;
    let allowance = token_in
        .allowance(owner, router.address, provider.clone())
        .await?;
    let expected_amount_out = router.quote_amount_out(request.amount_in, &path).await?;

    let plan = SwapPlan::new(request, token_in, balance, allowance, expected_amount_out)?;

    tracing::info!(
        %path,
        amount_in = %request.amount_in,
        %expected_amount_out,
        amount_out_min = %plan.amount_out_min,
        slippage = %request.slippage,
        "Prepared swap"
    );

    let approval = match plan.approval {
        Some(amount) => {
            tracing::warn!(token = %token_in.symbol, %allowance, "Allowance too low, approving router");
            Some(token_in.approve(router.address, amount, provider.clone()).await?)
        }
        None => None,
    };

    let swap = router
        .swap_exact_tokens_for_tokens(
            request.amount_in,
            plan.amount_out_min,
            &path,
            request.recipient,
            request.deadline.as_u256(),
        )
        .await?;

    Ok(SwapReceipt {
        approval,
        swap,
        expected_amount_out,
        amount_out_min: plan.amount_out_min,
    })
}
