use thiserror::Error;

/// A single unit of work submitted to a pool.
///
/// The payload is opaque to the pool: only the worker function
/// interprets it, and jobs have no identity beyond submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<T> {
    /// Arguments for the worker function.
    pub args: T,
}

impl<T> Job<T> {
    /// Creates a job wrapping the given arguments.
    pub fn new(args: T) -> Self {
        Job { args }
    }
}

/// Outcome of processing one [`Job`]: the worker function's value, or
/// the error it reported.
pub type JobResult<R> = std::result::Result<R, JobError>;

/// Error produced while processing a single job.
///
/// Job errors are local to the job that produced them. They travel
/// through the result stream alongside successful values and never
/// abort the pool or sibling jobs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The worker function rejected or failed the job.
    #[error("{0}")]
    Worker(String),

    /// The worker function panicked while processing the job.
    #[error("worker panicked: {0}")]
    Panic(String),
}

impl JobError {
    /// Creates a worker-reported error from a message.
    pub fn worker(msg: impl Into<String>) -> Self {
        JobError::Worker(msg.into())
    }
}
