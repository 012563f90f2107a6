use std::io;
use thiserror::Error;

/// Error type for pool operations.
///
/// These are protocol-level errors reported synchronously to the caller
/// making the invalid call. Errors produced while processing a single
/// job travel through the result stream as [`crate::JobError`] instead.
#[derive(Error, Debug)]
pub enum PoolError {
    /// IO error from spawning a worker thread.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A job was submitted after the pool was closed.
    #[error("job submitted after close")]
    Closed,

    /// The pool was closed more than once.
    #[error("pool already closed")]
    AlreadyClosed,

    /// The pool was run more than once.
    #[error("pool already running")]
    AlreadyRunning,

    /// Every worker has exited; nothing is left to pick the job up.
    #[error("pool stopped")]
    Stopped,

    /// The pool was configured with zero workers.
    #[error("worker count must be greater than zero")]
    ZeroWorkers,

    /// The backing thread pool could not be built.
    #[error("thread pool build error: {0}")]
    Build(String),
}

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
