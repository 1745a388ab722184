//! Environment Secret Source
//!
//! Reads secrets from process environment variables on every lookup.

use zeroize::Zeroizing;

use crate::domain::gateways::SecretSource;

/// Secret source backed by `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretSource;

impl SecretSource for EnvSecretSource {
    fn secret(&self, name: &str) -> Option<Zeroizing<String>> {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(Zeroizing::new)
    }
}
