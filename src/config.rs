use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use reqwest::Url;

use crate::{
    consts::{PRIVATE_KEY_VAR, RPC_URL_VAR},
    errors::ConfigError,
};

/// Runtime settings resolved from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: Url,
    pub signer: PrivateKeySigner,
}

impl Config {
    /// Reads `RPC_URL` and `PRIVATE_KEY` from the process environment.
    ///
    /// Both are required. An empty value counts as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = require(&lookup, RPC_URL_VAR)?;
        let private_key = require(&lookup, PRIVATE_KEY_VAR)?;

        let rpc_url = Url::parse(&rpc_url).map_err(|err| ConfigError::InvalidRpcUrl {
            url: rpc_url.clone(),
            reason: err.to_string(),
        })?;
        let signer = private_key.trim().parse::<PrivateKeySigner>()?;

        Ok(Self { rpc_url, signer })
    }

    pub fn owner(&self) -> Address {
        self.signer.address()
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use alloy::primitives::address;

    use super::*;

    // Well known anvil development key
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_rpc_url() {
        let res = Config::from_lookup(lookup(&[(PRIVATE_KEY_VAR, DEV_KEY)]));
        assert!(matches!(res, Err(ConfigError::MissingVar("RPC_URL"))));
    }

    #[test]
    fn test_missing_private_key() {
        let res = Config::from_lookup(lookup(&[(RPC_URL_VAR, "http://localhost:8545")]));
        assert!(matches!(res, Err(ConfigError::MissingVar("PRIVATE_KEY"))));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let res = Config::from_lookup(lookup(&[
            (RPC_URL_VAR, "  "),
            (PRIVATE_KEY_VAR, DEV_KEY),
        ]));
        assert!(matches!(res, Err(ConfigError::MissingVar("RPC_URL"))));
    }

    #[test]
    fn test_invalid_rpc_url() {
        let res = Config::from_lookup(lookup(&[
            (RPC_URL_VAR, "not a url"),
            (PRIVATE_KEY_VAR, DEV_KEY),
        ]));
        assert!(matches!(res, Err(ConfigError::InvalidRpcUrl { .. })));
    }

    #[test]
    fn test_invalid_private_key() {
        let res = Config::from_lookup(lookup(&[
            (RPC_URL_VAR, "http://localhost:8545"),
            (PRIVATE_KEY_VAR, "0xdeadbeef"),
        ]));
        assert!(matches!(res, Err(ConfigError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_valid_config() {
        let config = Config::from_lookup(lookup(&[
            (RPC_URL_VAR, "http://localhost:8545"),
            (PRIVATE_KEY_VAR, DEV_KEY),
        ]))
        .unwrap();

        assert_eq!(config.rpc_url.as_str(), "http://localhost:8545/");
        assert_eq!(
            config.owner(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }
}
