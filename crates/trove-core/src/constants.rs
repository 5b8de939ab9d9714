/// Consecutive failed logins after which an account locks.
pub const DEFAULT_LOCKOUT_THRESHOLD: u32 = 5;

/// Upper bound on the stored failed-login counter. Increments stop here so the
/// column can never overflow no matter how many attempts arrive.
pub const FAILED_LOGIN_COUNT_CAP: i32 = 10_000;

/// Minimum password length accepted at registration.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Characters rejected in free-text fields. Downstream consumers (templates,
/// shell-outs) must never see these from stored records.
pub const FREE_TEXT_DENYLIST: &[char] = &['<', '>', '{', '}', ';', '&', '|', '`', '$', '\\'];

/// Column widths carried over from the storage schema.
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_ASSET_NAME_LENGTH: usize = 100;
pub const MAX_ASSET_DESCRIPTION_LENGTH: usize = 1000;
