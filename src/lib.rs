pub mod config;
pub mod consts;
pub mod errors;
pub mod path;
pub mod report;
pub mod router;
pub mod slippage;
pub mod swap;
pub mod token;
pub mod units;
