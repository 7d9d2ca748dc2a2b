use std::fmt;

use alloy::primitives::{Address, U256};

use crate::{errors::SwapError, swap::SwapReceipt, token::Token, units::format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// Output received for an exact input.
    ExactIn,
    /// Input required for an exact output.
    ExactOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub kind: QuoteKind,
    pub given: U256,
    pub given_token: Token,
    pub quoted: U256,
    pub quoted_token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub token: Token,
    pub amount: U256,
}

/// Everything printed for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(owner: Address) -> Self {
        Self {
            lines: vec![format!("Wallet: {owner}")],
        }
    }

    pub fn balance(&mut self, balance: &Balance) -> Result<&mut Self, SwapError> {
        self.lines.push(format!(
            "{} balance: {}",
            balance.token.symbol,
            format_amount(balance.amount, balance.token.decimals)?
        ));
        Ok(self)
    }

    pub fn quote(&mut self, quote: &Quote) -> Result<&mut Self, SwapError> {
        let given = format_amount(quote.given, quote.given_token.decimals)?;
        let quoted = format_amount(quote.quoted, quote.quoted_token.decimals)?;
        let line = match quote.kind {
            QuoteKind::ExactIn => format!(
                "Amount Out ({}) for {} {}: {}",
                quote.quoted_token.symbol, given, quote.given_token.symbol, quoted
            ),
            QuoteKind::ExactOut => format!(
                "Amount In ({}) for {} {}: {}",
                quote.quoted_token.symbol, given, quote.given_token.symbol, quoted
            ),
        };
        self.lines.push(line);
        Ok(self)
    }

    pub fn swap(
        &mut self,
        receipt: &SwapReceipt,
        token_out: &Token,
    ) -> Result<&mut Self, SwapError> {
        if let Some(approval) = receipt.approval {
            self.lines.push(format!("Approval tx: {approval}"));
        }
        self.lines.push(format!(
            "Expected out ({}): {}",
            token_out.symbol,
            format_amount(receipt.expected_amount_out, token_out.decimals)?
        ));
        self.lines.push(format!(
            "Minimum out ({}): {}",
            token_out.symbol,
            format_amount(receipt.amount_out_min, token_out.decimals)?
        ));
        let block = receipt
            .swap
            .block_number
            .map(|number| format!(" (block {number})"))
            .unwrap_or_default();
        self.lines
            .push(format!("Swap tx: {}{}", receipt.swap.tx_hash, block));
        Ok(self)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};

    use super::*;
    use crate::{
        consts::{USDC, WETH},
        router::SwapConfirmation,
    };

    fn usdc() -> Token {
        Token::new_with_metadata(USDC, 6, "USDC")
    }

    fn weth() -> Token {
        Token::new_with_metadata(WETH, 18, "WETH")
    }

    #[test]
    fn test_balances_and_quotes() {
        let owner = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let mut report = Report::new(owner);
        report
            .balance(&Balance {
                token: usdc(),
                amount: U256::from(1_250_500_000_u64),
            })
            .unwrap()
            .balance(&Balance {
                token: weth(),
                amount: U256::ZERO,
            })
            .unwrap()
            .quote(&Quote {
                kind: QuoteKind::ExactIn,
                given: U256::from(100_000_000),
                given_token: usdc(),
                quoted: U256::from(26_500_000_000_000_000_u128),
                quoted_token: weth(),
            })
            .unwrap()
            .quote(&Quote {
                kind: QuoteKind::ExactOut,
                given: U256::from(1_000_000_000_000_000_000_u128),
                given_token: weth(),
                quoted: U256::from(3_771_234_567_u64),
                quoted_token: usdc(),
            })
            .unwrap();

        assert_eq!(
            report.lines(),
            &[
                "Wallet: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
                "USDC balance: 1250.5",
                "WETH balance: 0.0",
                "Amount Out (WETH) for 100.0 USDC: 0.0265",
                "Amount In (USDC) for 1.0 WETH: 3771.234567",
            ]
        );
        assert!(report.to_string().ends_with("3771.234567\n"));
    }

    #[test]
    fn test_swap_lines() {
        let tx_hash = b256!("1111111111111111111111111111111111111111111111111111111111111111");
        let receipt = SwapReceipt {
            approval: None,
            swap: SwapConfirmation {
                tx_hash,
                block_number: Some(19_000_000),
            },
            expected_amount_out: U256::from(1_000_000_000_000_000_000_u128),
            amount_out_min: U256::from(995_000_000_000_000_000_u128),
        };

        let mut report = Report::default();
        report.swap(&receipt, &weth()).unwrap();

        assert_eq!(report.lines().len(), 3);
        assert_eq!(report.lines()[0], "Expected out (WETH): 1.0");
        assert_eq!(report.lines()[1], "Minimum out (WETH): 0.995");
        assert_eq!(
            report.lines()[2],
            format!("Swap tx: {tx_hash} (block 19000000)")
        );
    }
}
