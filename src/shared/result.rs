/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and the CLI use this; the engine returns typed `UpdaterError`s.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
