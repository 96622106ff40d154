pub mod concurrent;
pub mod sequential;

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use tracing::info;

use crate::input;
use crate::output::{self, Output};
use crate::{Anagrams, Result};

/// How words are fed into the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Sequential,
    Concurrent { workers: NonZeroUsize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub mode: Mode,
    pub output: Output,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Words that made it into the index.
    pub words: usize,
    /// Lines rejected as empty, too long, or not UTF-8.
    pub skipped: usize,
    /// Anagram classes written.
    pub classes: usize,
}

/// Builds the index for `reader` in the configured mode.
///
/// Returns the index and the number of skipped lines.
pub fn build<R: BufRead>(reader: R, mode: Mode) -> Result<(Anagrams, usize)> {
    let mut words = input::words(reader);
    let anagrams = match mode {
        Mode::Sequential => sequential::build(&mut words)?,
        Mode::Concurrent { workers } => concurrent::build(&mut words, workers)?,
    };
    Ok((anagrams, words.skipped()))
}

/// Sorted anagram classes of `reader`, arranged as `output` asks.
pub fn collect<R: BufRead>(reader: R, mode: Mode, output: Output) -> Result<Vec<Vec<String>>> {
    let (anagrams, _) = build(reader, mode)?;
    let mut classes = anagrams.into_classes();
    output::arrange(&mut classes, output);
    Ok(classes)
}

/// Reads words from `reader` and writes one line per anagram class to `writer`.
pub fn run<R: BufRead, W: Write>(reader: R, writer: W, config: &Config) -> Result<Summary> {
    let (anagrams, skipped) = build(reader, config.mode)?;
    let words = anagrams.len();

    let mut classes = anagrams.into_classes();
    output::arrange(&mut classes, config.output);
    let classes = output::write_classes(&classes, writer)?;

    info!(words, skipped, classes, "wrote anagram classes");

    Ok(Summary {
        words,
        skipped,
        classes,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SAMPLE: &str = "Bee\nasleep\nElapse\nplease\nmales\nMEALS\n";

    fn concurrent(workers: usize) -> Mode {
        Mode::Concurrent {
            workers: NonZeroUsize::new(workers).unwrap(),
        }
    }

    fn run_to_string(input: &str, config: &Config) -> (String, Summary) {
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, config).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn sequential_sample() {
        let (out, summary) = run_to_string(SAMPLE, &Config::default());
        assert_eq!(out, "males meals\nasleep elapse please\n");
        assert_eq!(
            summary,
            Summary {
                words: 6,
                skipped: 0,
                classes: 2
            }
        );
    }

    #[test]
    fn concurrent_sample() {
        for workers in [1, 2, 4, 8] {
            let config = Config {
                mode: concurrent(workers),
                output: Output::Unordered,
            };
            let (out, summary) = run_to_string(SAMPLE, &config);
            assert_eq!(out, "males meals\nasleep elapse please\n", "{workers} workers");
            assert_eq!(summary.classes, 2);
        }
    }

    #[test]
    fn all_unique_words_write_nothing() {
        let (out, summary) = run_to_string("one\ntwo\nthree\nfour\n", &Config::default());
        assert!(out.is_empty());
        assert_eq!(summary.classes, 0);
        assert_eq!(summary.words, 4);
    }

    #[test]
    fn empty_input() {
        let config = Config {
            mode: concurrent(3),
            output: Output::Sorted,
        };
        let (out, summary) = run_to_string("", &config);
        assert!(out.is_empty());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn skipped_lines_are_reported() {
        let long = "z".repeat(crate::MAX_WORD_LENGTH + 1);
        let input = format!("tab\n\nbat\n{long}\n");
        let (out, summary) = run_to_string(&input, &Config::default());
        assert_eq!(out, "bat tab\n");
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.words, 2);
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        for mode in [Mode::Sequential, concurrent(2)] {
            let config = Config {
                mode,
                output: Output::Sorted,
            };
            let mut out = Vec::new();
            let input = &b"tab\nbat\ncaf\xe9\nrace\ncare\n"[..];
            let summary = run(Cursor::new(input), &mut out, &config).unwrap();

            assert_eq!(String::from_utf8(out).unwrap(), "bat tab\ncare race\n", "{mode:?}");
            assert_eq!(summary.skipped, 1);
            assert_eq!(summary.words, 4);
        }
    }

    #[test]
    fn sorted_output_is_reproducible() {
        let input = "tan\nnat\nant\nbat\ntab\nrace\ncare\nacre\nstop\npots\ntops\nx\n";
        let expected = "ant nat tan\nbat tab\nacre care race\npots stop tops\n";
        for mode in [Mode::Sequential, concurrent(2), concurrent(5)] {
            let config = Config {
                mode,
                output: Output::Sorted,
            };
            let (out, _) = run_to_string(input, &config);
            assert_eq!(out, expected, "{mode:?}");
        }
    }

    #[test]
    fn collect_is_independent_of_worker_count() {
        let mut input = String::new();
        for word in ["listen", "silent", "enlist", "tinsel", "inlets", "google", "banana"] {
            for _ in 0..3 {
                input.push_str(word);
                input.push('\n');
            }
        }

        let classes_for = |mode| collect(Cursor::new(input.as_str()), mode, Output::Sorted).unwrap();

        let expected = classes_for(Mode::Sequential);
        for workers in [1, 3, 4, 16] {
            let classes = classes_for(concurrent(workers));
            assert_eq!(classes, expected, "{workers} workers");
        }
        assert_eq!(expected.len(), 3);
    }
}
