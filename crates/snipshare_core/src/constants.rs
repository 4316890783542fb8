//! Shared constants for storage, validation, and rendering.

/// Default HTTP port for the server.
pub const DEFAULT_PORT: u16 = 38511;

/// Number of random bytes behind each snippet id.
pub const SNIPPET_ID_BYTES: usize = 4;

/// Length of a hex-encoded snippet id.
pub const SNIPPET_ID_LEN: usize = SNIPPET_ID_BYTES * 2;

/// Maximum stored language label length, in characters.
pub const LANGUAGE_MAX_CHARS: usize = 50;

/// Label rendered when a snippet was stored without a language.
pub const DEFAULT_LANGUAGE_LABEL: &str = "markup";

/// Total id generation attempts before a save gives up.
pub const MAX_ID_ATTEMPTS: usize = 3;

/// Default maximum snippet size in bytes (1 MiB).
pub const DEFAULT_MAX_SNIPPET_SIZE: usize = 1024 * 1024;

/// Default bound on a single store call, in milliseconds.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;
