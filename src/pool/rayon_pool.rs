use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam::channel::{self, Receiver, Sender};
use log::debug;

use super::worker::worker_loop;
use super::{PoolConfig, WorkerPool};
use crate::job::{Job, JobResult};
use crate::{PoolError, Result};

/// A pool backed by the `rayon` library.
///
/// The pull loops run on the threads of a dedicated rayon pool sized to
/// the worker count instead of on threads this crate spawns itself.
/// Job submission, result delivery, and both shutdown modes behave
/// exactly as in [`SimplePool`](super::SimplePool).
pub struct RayonPool<T> {
    job_tx: Mutex<Option<Sender<Job<T>>>>,
    job_rx: Receiver<Job<T>>,
    stop: Arc<AtomicBool>,
    running: AtomicBool,
    workers: usize,
    pool: rayon::ThreadPool,
}

impl<T: Send + 'static> WorkerPool<T> for RayonPool<T> {
    fn with_config(config: PoolConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(PoolError::ZeroWorkers);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|e| PoolError::Build(e.to_string()))?;

        let capacity = config.buffer_capacity.unwrap_or(config.workers);
        let (job_tx, job_rx) = channel::bounded(capacity);

        Ok(RayonPool {
            job_tx: Mutex::new(Some(job_tx)),
            job_rx,
            stop: Arc::new(AtomicBool::new(false)),
            running: AtomicBool::new(false),
            workers: config.workers,
            pool,
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

        // One long-running pull loop per rayon thread; the pool is
        // dedicated, so the loops cannot starve other rayon work.
        for id in 0..self.workers {
            let jobs = self.job_rx.clone();
            let results = result_tx.clone();
            let stop = Arc::clone(&self.stop);
            let worker = Arc::clone(&worker);

            self.pool
                .spawn(move || worker_loop(id, jobs, results, stop, worker));
        }

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
        self.stop.store(true, Ordering::Relaxed);
    }
}
