//! Application constants

/// Callback server (the host application's local relay endpoint).
pub const CALLBACK_URL: &str = "http://127.0.0.1:51345/callback";

/// How long the success message stays visible before the window closes.
pub const CLOSE_DELAY_MS: u32 = 2_000;
