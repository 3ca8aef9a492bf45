use thiserror::Error;

/// Hook layer errors
#[derive(Error, Debug)]
pub enum HookError {
    #[error(transparent)]
    CoreError(#[from] slugmend_core::error::CoreError),

    /// Failure raised by a host platform service. The hooks never retry or
    /// downgrade these; they surface through the host's own pipeline.
    #[error(transparent)]
    PlatformError(#[from] anyhow::Error),
}

pub type HookResult<T> = std::result::Result<T, HookError>;
