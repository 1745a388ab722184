//! Secret Source Gateway
//!
//! Where provider factories read mnemonics and private keys from.

use zeroize::Zeroizing;

/// Read-only lookup of named secrets
pub trait SecretSource: Send + Sync {
    /// Look up a secret by name. Empty values count as absent.
    fn secret(&self, name: &str) -> Option<Zeroizing<String>>;
}
