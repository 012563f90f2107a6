use crossbeam::channel::Receiver;

use crate::job::{Job, JobResult};
use crate::Result;

/// A concurrent worker pool.
///
/// Implementors own a bounded job buffer and a fixed set of workers.
/// The caller acts as producer ([`WorkerPool::add`] then
/// [`WorkerPool::close`]) and consumer (draining the stream returned by
/// [`WorkerPool::run`]).
pub trait WorkerPool<T: Send + 'static>: Sized {
    /// Creates a pool from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (zero workers)
    /// or the backing threads cannot be set up.
    fn with_config(config: PoolConfig) -> Result<Self>;

    /// Creates a pool with one worker per available CPU and a job
    /// buffer of the same depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing threads cannot be set up.
    fn new() -> Result<Self> {
        Self::with_config(PoolConfig::default())
    }

    /// Submits a job to the workers.
    ///
    /// Blocks while the job buffer is full, until a worker frees a
    /// slot. Jobs may be submitted before `run` is called; they wait in
    /// the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoolError::Closed`] if the pool was already
    /// closed, or [`crate::PoolError::Stopped`] if every worker has
    /// exited and the job can never be picked up.
    fn add(&self, job: Job<T>) -> Result<()>;

    /// Starts the workers and returns the result stream.
    ///
    /// Exactly the configured number of workers race to pull jobs from
    /// the shared buffer and invoke `worker` on each. Results arrive in
    /// completion order, unrelated to submission order, and the stream
    /// closes once every worker has exited.
    ///
    /// The worker function is invoked concurrently from every worker;
    /// any state it captures is shared across those invocations.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoolError::AlreadyRunning`] on a second call.
    fn run<F, R>(&self, worker: F) -> Result<Receiver<JobResult<R>>>
    where
        F: Fn(Job<T>) -> JobResult<R> + Send + Sync + 'static,
        R: Send + 'static;

    /// Signals that no further jobs will be submitted.
    ///
    /// Jobs already queued are still delivered to workers; once the
    /// buffer drains, the workers exit and the result stream closes.
    /// Safe to call while other threads are blocked in `add`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoolError::AlreadyClosed`] on a second call.
    fn close(&self) -> Result<()>;

    /// Requests that queued work be abandoned.
    ///
    /// Best-effort and idempotent: each worker observes the request
    /// between jobs and exits, so a job already being processed always
    /// runs to completion. There is no confirmation that workers
    /// stopped early.
    fn stop(&self);
}

/// Configuration for constructing a pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of workers. Must be greater than zero.
    pub workers: usize,
    /// Capacity of the job buffer. Defaults to the worker count.
    pub buffer_capacity: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            workers: num_cpus::get(),
            buffer_capacity: None,
        }
    }
}

mod rayon_pool;
mod simple;
mod worker;

pub use self::rayon_pool::RayonPool;
pub use self::simple::SimplePool;
