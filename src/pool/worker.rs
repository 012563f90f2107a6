use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use log::{debug, error};

use crate::job::{Job, JobError, JobResult};

/// The pull loop shared by all pool backends.
///
/// Runs until a stop is requested, the job queue closes and drains, or
/// the consumer drops the result stream. The stop flag is read without
/// blocking at the top of every iteration, so an interrupt is observed
/// after at most one job; a worker parked on an empty, still-open queue
/// keeps waiting until a job arrives or the queue closes.
pub(super) fn worker_loop<T, R, F>(
    id: usize,
    jobs: Receiver<Job<T>>,
    results: Sender<JobResult<R>>,
    stop: Arc<AtomicBool>,
    worker: Arc<F>,
) where
    F: Fn(Job<T>) -> JobResult<R>,
{
    loop {
        if stop.load(Ordering::Relaxed) {
            debug!("Worker {id}: stop requested, exiting");
            return;
        }

        match jobs.recv() {
            Ok(job) => {
                // Catch panics so one bad job cannot take the worker down
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| worker(job)))
                    .unwrap_or_else(|payload| {
                        error!("Worker {id}: job panicked");
                        Err(JobError::Panic(panic_message(payload.as_ref())))
                    });

                if results.send(outcome).is_err() {
                    debug!("Worker {id}: result stream dropped, exiting");
                    return;
                }
            }
            Err(_) => {
                debug!("Worker {id}: job queue closed, shutting down");
                return;
            }
        }
    }
}

/// Extracts a printable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
