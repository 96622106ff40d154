use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anagrams::{Config as PipelineConfig, Mode, Output};
use clap::Parser;
use tracing::info;

/// Group the words of a file into anagram classes, one class per line.
#[derive(Parser, Debug)]
#[command(name = "anagrams", version)]
pub(crate) struct Config {
    /// Word list, one word per line; `-` reads stdin
    #[arg(
        short = 'f',
        long = "file",
        env = "ANAGRAMS_FILE",
        default_value = "sample.txt"
    )]
    file: PathBuf,

    /// Number of worker threads; runs on the calling thread when absent
    #[arg(short = 'w', long = "workers", env = "ANAGRAMS_WORKERS")]
    workers: Option<NonZeroUsize>,

    /// Order classes by length, then by their smallest word
    #[arg(long = "sorted", env = "ANAGRAMS_SORTED")]
    sorted: bool,
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "file={} mode={:?}", self.file.display(), self.mode())
    }
}

pub(crate) fn get() -> Config {
    let config = Config::parse();
    info!(%config, "initialized config");
    config
}

impl Config {
    pub(crate) fn get_file(&self) -> Option<&PathBuf> {
        (self.file.as_os_str() != "-").then_some(&self.file)
    }

    fn mode(&self) -> Mode {
        match self.workers {
            Some(workers) => Mode::Concurrent { workers },
            None => Mode::Sequential,
        }
    }

    pub(crate) fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            mode: self.mode(),
            output: if self.sorted { Output::Sorted } else { Output::Unordered },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential() {
        let config = Config::try_parse_from(["anagrams"]).unwrap();
        assert_eq!(config.pipeline().mode, Mode::Sequential);
        assert_eq!(config.pipeline().output, Output::Unordered);
    }

    #[test]
    fn workers_select_concurrent() {
        let args = ["anagrams", "-f", "words.txt", "-w", "8", "--sorted"];
        let config = Config::try_parse_from(args).unwrap();
        assert_eq!(config.get_file(), Some(&PathBuf::from("words.txt")));
        assert_eq!(
            config.pipeline().mode,
            Mode::Concurrent {
                workers: NonZeroUsize::new(8).unwrap()
            }
        );
        assert_eq!(config.pipeline().output, Output::Sorted);
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(Config::try_parse_from(["anagrams", "--workers", "0"]).is_err());
    }

    #[test]
    fn dash_reads_stdin() {
        let config = Config::try_parse_from(["anagrams", "--file", "-"]).unwrap();
        assert_eq!(config.get_file(), None);
    }
}
