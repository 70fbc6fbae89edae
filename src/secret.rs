// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Holder for server-side secrets (ledger operator key, on-ramp API secret).
//!
//! The value is zeroized on drop and never printed. Reading it back is only
//! possible inside this crate, and only the server facade does so.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string that cannot be logged or serialized.
///
/// Intentionally does not implement `Clone`, `Display` or `Serialize`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let secret = SecretString::new("302e020100300506032b657004220420deadbeef");
        let rendered = format!("{secret:?}");
        assert_eq!(rendered, "SecretString(<redacted>)");
        assert!(!rendered.contains("deadbeef"));
    }

    #[test]
    fn expose_returns_inner_value() {
        let secret = SecretString::new("api-secret");
        assert_eq!(secret.expose(), "api-secret");
        assert!(!secret.is_empty());
        assert!(SecretString::new("  ").is_empty());
    }
}
