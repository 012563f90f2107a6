use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use log::debug;

use super::worker::worker_loop;
use super::{PoolConfig, WorkerPool};
use crate::job::{Job, JobResult};
use crate::{PoolError, Result};

/// The default channel-backed pool.
///
/// Jobs flow through a bounded MPMC channel whose capacity defaults to
/// the worker count, so `add` applies back-pressure once every worker
/// already has a job waiting. Workers are plain OS threads started by
/// [`WorkerPool::run`]; results are handed to the consumer over a
/// zero-capacity channel, never buffered.
///
/// Dropping the pool without calling `close` also closes the job queue,
/// so workers never outlive their pool for longer than the jobs already
/// in flight.
pub struct SimplePool<T> {
    job_tx: Mutex<Option<Sender<Job<T>>>>,
    job_rx: Receiver<Job<T>>,
    stop: Arc<AtomicBool>,
    running: AtomicBool,
    workers: usize,
}

impl<T: Send + 'static> WorkerPool<T> for SimplePool<T> {
    fn with_config(config: PoolConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(PoolError::ZeroWorkers);
        }

        let capacity = config.buffer_capacity.unwrap_or(config.workers);
        let (job_tx, job_rx) = channel::bounded(capacity);

        Ok(SimplePool {
            job_tx: Mutex::new(Some(job_tx)),
            job_rx,
            stop: Arc::new(AtomicBool::new(false)),
            running: AtomicBool::new(false),
            workers: config.workers,
        })
    }

    fn add(&self, job: Job<T>) -> Result<()> {
        let tx = match self
            .job_tx
            .lock()
            .expect("pool sender lock poisoned")
            .as_ref()
        {
            Some(tx) => tx.clone(),
            None => return Err(PoolError::Closed),
        };

        // Send outside the lock: a full buffer blocks here, not `close`.
        tx.send(job).map_err(|_| PoolError::Stopped)
    }

    fn run<F, R>(&self, worker: F) -> Result<Receiver<JobResult<R>>>
    where
        F: Fn(Job<T>) -> JobResult<R> + Send + Sync + 'static,
        R: Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(PoolError::AlreadyRunning);
        }

        let (result_tx, result_rx) = channel::bounded(0);
        let worker = Arc::new(worker);

        for id in 0..self.workers {
            let jobs = self.job_rx.clone();
            let results = result_tx.clone();
            let stop = Arc::clone(&self.stop);
            let worker = Arc::clone(&worker);

            thread::Builder::new()
                .name(format!("pool-worker-{id}"))
                .spawn(move || worker_loop(id, jobs, results, stop, worker))?;
        }

        // Workers now hold the only senders; the stream closes when the
        // last worker exits.
        Ok(result_rx)
    }

    fn close(&self) -> Result<()> {
        match self
            .job_tx
            .lock()
            .expect("pool sender lock poisoned")
            .take()
        {
            Some(tx) => {
                debug!("Job queue closed");
                drop(tx);
                Ok(())
            }
            None => Err(PoolError::AlreadyClosed),
        }
    }

    fn stop(&self) {
        debug!("Stop requested");
        // Idempotent broadcast: repeated stops are no-ops.
        self.stop.store(true, Ordering::Relaxed);
    }
}
