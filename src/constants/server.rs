/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port, the one the bridge UI expects.
pub const DEFAULT_PORT: u16 = 5050;

/// Default wall-clock limit for a single external CLI call, in seconds.
pub const DEFAULT_COMMAND_TIMEOUT_SECONDS: u64 = 120;

/// Digits after the decimal point when rendering balances.
pub const DEFAULT_DISPLAY_PRECISION: usize = 6;

/// Default client disconnect timeout in seconds.
/// This is the time the server waits for cleanup after a client disconnects.
pub const DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS: u64 = 5;
