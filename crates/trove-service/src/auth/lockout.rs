//! Brute-force lockout policy.
//!
//! Lockout is a pure function of the stored failed-login counter: `Open`
//! below the threshold, `Locked` at or above it. A locked account only
//! reopens through an administrative reset; there is no time-based expiry.

use trove_core::config::Settings;
use trove_core::constants::DEFAULT_LOCKOUT_THRESHOLD;
use trove_db::model::account::Account;

/// Lockout state derived from an account's failed-login counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutState {
    /// Login attempts are permitted.
    Open,
    /// Login attempts are rejected until an administrative reset.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    threshold: u32,
}

impl LockoutPolicy {
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.auth.lockout_threshold)
    }

    /// ## Summary
    /// Derives the lockout state for an account. The stored counter is
    /// non-negative by schema constraint; a negative value would only appear
    /// through out-of-band edits and is treated as zero.
    #[must_use]
    pub fn state(&self, account: &Account) -> LockoutState {
        let count = u32::try_from(account.failed_login_count).unwrap_or(0);
        if count >= self.threshold {
            LockoutState::Locked
        } else {
            LockoutState::Open
        }
    }

    #[must_use]
    pub fn is_locked(&self, account: &Account) -> bool {
        self.state(account) == LockoutState::Locked
    }
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LOCKOUT_THRESHOLD)
    }
}
