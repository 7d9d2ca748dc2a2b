use std::{sync::Arc, time::Duration};

use alloy::{network::EthereumWallet, primitives::Address, providers::ProviderBuilder};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use v2swap::{
    config::Config,
    consts::{DEFAULT_DEADLINE, UNISWAP_V2_ROUTER, USDC, WETH},
    path::{SwapDirection, TokenPair},
    report::{Balance, Quote, QuoteKind, Report},
    router::UniswapV2Router,
    slippage::Slippage,
    swap::{execute_swap, Deadline, SwapRequest},
    token::Token,
    units::parse_amount,
};

/// Quote, and optionally execute, a swap on a Uniswap V2 router.
///
/// Reads RPC_URL and PRIVATE_KEY from the environment (or a .env file).
#[derive(Parser, Debug)]
#[command(name = "v2swap", version)]
struct Cli {
    #[arg(long, value_enum, default_value_t = SwapDirection::BaseToQuote)]
    direction: SwapDirection,

    /// Amount of the input token to sell, in whole units
    #[arg(long, default_value = "100")]
    amount_in: String,

    /// Amount of the output token to buy for the exact-out quote, in whole units
    #[arg(long, default_value = "1")]
    amount_out: String,

    /// Tolerated slippage in percent
    #[arg(long, default_value = "0.5")]
    slippage: Slippage,

    #[arg(long, default_value_t = DEFAULT_DEADLINE.as_secs())]
    deadline_secs: u64,

    /// Approve and send the swap instead of only quoting it
    #[arg(long)]
    execute: bool,

    /// Receiver of the output tokens, defaults to the signer
    #[arg(long)]
    recipient: Option<Address>,

    #[arg(long, default_value_t = UNISWAP_V2_ROUTER)]
    router: Address,

    #[arg(long, default_value_t = USDC)]
    base_token: Address,

    #[arg(long, default_value_t = WETH)]
    quote_token: Address,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        return Err(err);
    }

    Ok(())
}

async fn run(cli: Cli) -> eyre::Result<()> {
    let config = Config::from_env()?;
    let owner = config.owner();

    let provider = Arc::new(
        ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(EthereumWallet::from(config.signer.clone()))
            .on_http(config.rpc_url.clone()),
    );

    tracing::info!(?owner, rpc_url = %config.rpc_url, "Connected");

    let pair = TokenPair::new(
        Token::new(cli.base_token, provider.clone()).await?,
        Token::new(cli.quote_token, provider.clone()).await?,
    );
    let router = UniswapV2Router::new(cli.router, provider.clone());

    let mut report = Report::new(owner);
    for token in [&pair.base, &pair.quote] {
        let amount = token.balance_of(owner, provider.clone()).await?;
        report.balance(&Balance {
            token: token.clone(),
            amount,
        })?;
    }

    let path = pair.path(cli.direction);
    let token_in = pair.token_in(cli.direction);
    let token_out = pair.token_out(cli.direction);

    let amount_in = parse_amount(&cli.amount_in, token_in.decimals)?;
    let amount_out = router.quote_amount_out(amount_in, &path).await?;
    report.quote(&Quote {
        kind: QuoteKind::ExactIn,
        given: amount_in,
        given_token: token_in.clone(),
        quoted: amount_out,
        quoted_token: token_out.clone(),
    })?;

    let wanted = parse_amount(&cli.amount_out, token_out.decimals)?;
    let needed = router.quote_amount_in(wanted, &path).await?;
    report.quote(&Quote {
        kind: QuoteKind::ExactOut,
        given: wanted,
        given_token: token_out.clone(),
        quoted: needed,
        quoted_token: token_in.clone(),
    })?;

    print!("{report}");

    if !cli.execute {
        tracing::info!("Quote only, pass --execute to send the swap");
        return Ok(());
    }

    let request = SwapRequest::new(
        cli.direction,
        amount_in,
        cli.slippage,
        cli.recipient.unwrap_or(owner),
        Deadline::from_now(Duration::from_secs(cli.deadline_secs))?,
    );

    let receipt = execute_swap(&router, &pair, owner, &request).await?;

    let mut swap_report = Report::default();
    swap_report.swap(&receipt, token_out)?;
    print!("{swap_report}");

    Ok(())
}
