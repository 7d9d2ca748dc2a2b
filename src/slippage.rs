use std::{fmt, str::FromStr};

use alloy::primitives::U256;

use crate::{
    consts::{F64_BPS_PER_PERCENT, U16_BPS_ONE, U256_BPS_ONE},
    errors::SwapError,
};

/// Tolerated deviation between the quoted and the executed amount, in basis points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slippage {
    bps: u16,
}

impl Slippage {
    pub fn from_bps(bps: u16) -> Result<Self, SwapError> {
        if bps > U16_BPS_ONE {
            return Err(SwapError::InvalidSlippage(format!("{bps} bps exceeds 100%")));
        }
        Ok(Self { bps })
    }

    /// Builds a slippage from a percentage, `0.5` being half a percent.
    pub fn from_percent(percent: f64) -> Result<Self, SwapError> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(SwapError::InvalidSlippage(format!(
                "{percent}% is outside 0..=100"
            )));
        }
        Self::from_bps((percent * F64_BPS_PER_PERCENT).round() as u16)
    }

    pub const fn bps(&self) -> u16 {
        self.bps
    }

    /// Lowest acceptable output for a swap quoted at `expected`.
    pub fn min_amount_out(&self, expected: U256) -> U256 {
        let keep = U256_BPS_ONE - U256::from(self.bps);
        expected * keep / U256_BPS_ONE
    }
}

impl FromStr for Slippage {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent = s
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|err| SwapError::InvalidSlippage(format!("{s}: {err}")))?;
        Self::from_percent(percent)
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", f64::from(self.bps) / F64_BPS_PER_PERCENT)
    }
}
