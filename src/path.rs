use std::{fmt, ops::Deref};

use alloy::primitives::Address;
use clap::ValueEnum;

use crate::{errors::SwapError, token::Token};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum SwapDirection {
    /// Sell the base token for the quote token.
    #[default]
    BaseToQuote,
    /// Sell the quote token for the base token.
    QuoteToBase,
}

impl SwapDirection {
    pub const fn reverse(self) -> Self {
        match self {
            SwapDirection::BaseToQuote => SwapDirection::QuoteToBase,
            SwapDirection::QuoteToBase => SwapDirection::BaseToQuote,
        }
    }
}

/// Ordered token addresses handed to the router, input token first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapPath(Vec<Address>);

impl SwapPath {
    pub fn new(tokens: Vec<Address>) -> Result<Self, SwapError> {
        if tokens.len() < 2 {
            return Err(SwapError::PathTooShort(tokens.len()));
        }
        Ok(Self(tokens))
    }

    pub fn token_in(&self) -> Address {
        self.0[0]
    }

    pub fn token_out(&self) -> Address {
        self.0[self.0.len() - 1]
    }

    pub fn to_vec(&self) -> Vec<Address> {
        self.0.clone()
    }
}

impl Deref for SwapPath {
    type Target = [Address];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hops = self
            .0
            .iter()
            .map(|address| address.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", hops.join(" -> "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub base: Token,
    pub quote: Token,
}

impl TokenPair {
    pub fn new(base: Token, quote: Token) -> Self {
        Self { base, quote }
    }

    pub fn token_in(&self, direction: SwapDirection) -> &Token {
        match direction {
            SwapDirection::BaseToQuote => &self.base,
            SwapDirection::QuoteToBase => &self.quote,
        }
    }

    pub fn token_out(&self, direction: SwapDirection) -> &Token {
        self.token_in(direction.reverse())
    }

    pub fn path(&self, direction: SwapDirection) -> SwapPath {
        SwapPath(vec![
            self.token_in(direction).address,
            self.token_out(direction).address,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{USDC, WETH};

    fn usdc_weth() -> TokenPair {
        TokenPair::new(
            Token::new_with_metadata(USDC, 6, "USDC"),
            Token::new_with_metadata(WETH, 18, "WETH"),
        )
    }

    #[test]
    fn test_base_to_quote_path() {
        let path = usdc_weth().path(SwapDirection::BaseToQuote);
        assert_eq!(&*path, &[USDC, WETH]);
        assert_eq!(path.token_in(), USDC);
        assert_eq!(path.token_out(), WETH);
    }

    #[test]
    fn test_quote_to_base_path() {
        let path = usdc_weth().path(SwapDirection::QuoteToBase);
        assert_eq!(path.to_vec(), vec![WETH, USDC]);
        assert_eq!(path.token_in(), WETH);
        assert_eq!(path.token_out(), USDC);
    }

    #[test]
    fn test_tokens_for_direction() {
        let pair = usdc_weth();
        assert_eq!(pair.token_in(SwapDirection::BaseToQuote).symbol(), "USDC");
        assert_eq!(pair.token_out(SwapDirection::BaseToQuote).symbol(), "WETH");
        assert_eq!(pair.token_in(SwapDirection::QuoteToBase).symbol(), "WETH");
        assert_eq!(pair.token_out(SwapDirection::QuoteToBase).symbol(), "USDC");
    }

    #[test]
    fn test_reverse_direction() {
        assert_eq!(
            SwapDirection::BaseToQuote.reverse(),
            SwapDirection::QuoteToBase
        );
        assert_eq!(
            SwapDirection::QuoteToBase.reverse().reverse(),
            SwapDirection::QuoteToBase
        );
    }

    #[test]
    fn test_path_too_short() {
        assert!(matches!(
            SwapPath::new(vec![USDC]),
            Err(SwapError::PathTooShort(1))
        ));
        assert!(matches!(
            SwapPath::new(vec![]),
            Err(SwapError::PathTooShort(0))
        ));
        assert!(SwapPath::new(vec![USDC, WETH]).is_ok());
    }
}
