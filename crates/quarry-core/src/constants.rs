/// Quarry system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum token length kept by the tokenizer. Shorter terms are noise.
pub const MIN_TOKEN_LEN: usize = 2;
