// Centralized Protocol Constants

/// Maximum number of registered providers. Fixed so the ProviderSet
/// account size stays deterministic.
pub const MAX_PROVIDERS: usize = 32;

/// Fixed-width settlement cleartext layout:
/// bytes 0..8  aggregate score (u64 LE)
/// bytes 8..16 derivative price (u64 LE)
/// byte  16    exercisability flag (0 or 1)
pub const CLEARTEXT_LEN: usize = 17;

/// First decryption request id handed out by the coordinator.
/// 0 is reserved as the "no context" sentinel.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Default cooldown between same-class actions per actor (seconds).
/// Dev default; check current config.
pub const DEFAULT_COOLDOWN_SECONDS: i64 = 60;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
