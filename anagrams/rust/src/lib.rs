use std::io;

use thiserror::Error;

pub mod input;
pub mod lcd_sort;
pub mod output;
pub mod pipeline;
pub mod signature;
pub mod store;

pub use lcd_sort::lcd_sort;
pub use output::Output;
pub use pipeline::{run, Config, Mode, Summary};
pub use signature::{signature, Signature};
pub use store::Anagrams;

/// Size of the count tables: one slot per byte value.
pub const ALPHABET_LEN: usize = 256;

/// Longest word, in bytes, the index accepts.
pub const MAX_WORD_LENGTH: usize = 50;

/// Pending lines the concurrent work queue holds before the reader blocks.
pub const QUEUE_CAPACITY: usize = 100;

#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("could not spawn worker thread {0}: {1}")]
    WorkerSpawn(usize, #[source] io::Error),
    #[error("worker thread {0} panicked")]
    WorkerPanicked(usize),
}

pub type Result<T> = std::result::Result<T, AnagramError>;
