#![deny(missing_docs)]

//! A generic concurrent worker pool library.
//!
//! A producer submits opaque jobs to a bounded buffer, a fixed set of
//! workers applies a caller-supplied function to each job, and the
//! outcomes are delivered back on a single unordered result stream.
//! Shutdown is either graceful ([`WorkerPool::close`]: finish whatever
//! is queued) or best-effort ([`WorkerPool::stop`]: abandon queued work
//! between jobs).
//!
//! ```
//! use workpool::{Job, PoolConfig, SimplePool, WorkerPool};
//!
//! let pool = SimplePool::with_config(PoolConfig {
//!     workers: 2,
//!     buffer_capacity: Some(16),
//! })
//! .unwrap();
//!
//! let results = pool.run(|job: Job<i64>| Ok(job.args * job.args)).unwrap();
//!
//! for i in 0..10 {
//!     pool.add(Job::new(i)).unwrap();
//! }
//! pool.close().unwrap();
//!
//! let mut squares: Vec<i64> = results.iter().map(|res| res.unwrap()).collect();
//! squares.sort_unstable();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
//! ```

mod error;
mod job;
/// Worker pool implementations.
pub mod pool;

pub use error::{PoolError, Result};
pub use job::{Job, JobError, JobResult};
pub use pool::{PoolConfig, RayonPool, SimplePool, WorkerPool};
