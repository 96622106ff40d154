use std::num::NonZeroUsize;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, info_span, warn};

use crate::{AnagramError, Anagrams, Result, QUEUE_CAPACITY};

/// Lines handed to the work queue but not yet filed by a worker.
#[derive(Default)]
struct InFlight {
    state: Mutex<InFlightState>,
    drained: Condvar,
}

#[derive(Default)]
struct InFlightState {
    pending: usize,
    abandoned: bool,
}

impl InFlight {
    fn lock(&self) -> MutexGuard<'_, InFlightState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatched(&self) {
        self.lock().pending += 1;
    }

    fn ack(&self) {
        let mut state = self.lock();
        state.pending -= 1;
        if thread::panicking() {
            state.abandoned = true;
        }
        if state.pending == 0 || state.abandoned {
            self.drained.notify_all();
        }
    }

    /// Blocks until every dispatched line is acknowledged, or a worker died
    /// holding one.
    fn wait_drained(&self) {
        let mut state = self.lock();
        while state.pending > 0 && !state.abandoned {
            state = self.drained.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn ack_on_drop(&self) -> Ack<'_> {
        Ack(self)
    }
}

/// Acknowledges one line when dropped, including while unwinding.
struct Ack<'a>(&'a InFlight);

impl Drop for Ack<'_> {
    fn drop(&mut self) {
        self.0.ack();
    }
}

/// Spreads `words` over `workers` threads, each filling a private index, then
/// merges the partial indexes into one.
///
/// The calling thread reads the input and feeds a queue of `QUEUE_CAPACITY`
/// lines, blocking while it is full. The queue is closed once input ends and
/// every dispatched line has been acknowledged. Each worker then publishes
/// its index, and exactly `workers` of them are merged.
pub fn build<I>(words: I, workers: NonZeroUsize) -> Result<Anagrams>
where
    I: IntoIterator<Item = Result<String>>,
{
    let workers = workers.get();
    let _span = info_span!("concurrent", workers).entered();

    let (jobs_tx, jobs_rx) = bounded::<String>(QUEUE_CAPACITY);
    let (results_tx, results_rx) = bounded::<Anagrams>(workers);
    let in_flight = Arc::new(InFlight::default());

    let mut handles = Vec::with_capacity(workers);
    for id in 0..workers {
        let jobs = jobs_rx.clone();
        let results = results_tx.clone();
        let in_flight = Arc::clone(&in_flight);

        let spawned = thread::Builder::new()
            .name(format!("anagrams-worker-{id}"))
            .spawn(move || worker(id, jobs, results, &in_flight));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                drop(jobs_tx);
                let _ = join(handles);
                return Err(AnagramError::WorkerSpawn(id, e));
            }
        }
    }
    drop(jobs_rx);
    drop(results_tx);

    let dispatched = dispatch(words, &jobs_tx, &in_flight);

    in_flight.wait_drained();
    drop(jobs_tx);

    // A worker only fails to publish by panicking, which `join` reports.
    let mut merged = Anagrams::new();
    for partial in results_rx.iter().take(workers) {
        merged.merge(partial);
    }

    let joined = join(handles);
    let dispatched = dispatched?;
    joined?;

    debug!(dispatched, words = merged.len(), "merged partial indexes");
    Ok(merged)
}

/// Feeds the queue until input ends, returning the number of lines sent.
fn dispatch<I>(words: I, jobs: &Sender<String>, in_flight: &InFlight) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut sent = 0;
    for word in words {
        let word = word?;

        in_flight.dispatched();
        if jobs.send(word).is_err() {
            // Every worker is gone; joining them reports why.
            in_flight.ack();
            warn!(sent, "work queue closed early");
            break;
        }
        sent += 1;
    }
    Ok(sent)
}

fn worker(id: usize, jobs: Receiver<String>, results: Sender<Anagrams>, in_flight: &InFlight) {
    let _span = info_span!("worker", id).entered();
    debug!("worker started");

    let mut anagrams = Anagrams::new();
    for word in jobs.iter() {
        let _ack = in_flight.ack_on_drop();
        anagrams.put(word);
    }

    debug!(words = anagrams.len(), "worker finished");
    if results.send(anagrams).is_err() {
        warn!("merge stage stopped listening");
    }
}

fn join(handles: Vec<JoinHandle<()>>) -> Result<()> {
    let mut result = Ok(());
    for (id, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && result.is_ok() {
            result = Err(AnagramError::WorkerPanicked(id));
        }
    }
    result
}
