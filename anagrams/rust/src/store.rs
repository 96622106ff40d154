use rustc_hash::FxHashMap;

use crate::signature::{signature, Signature};
use crate::MAX_WORD_LENGTH;

type Partition = FxHashMap<Signature, Vec<String>>;

/// Anagram index: words keyed by `(len - 1, signature)`.
///
/// The length picks one of `MAX_WORD_LENGTH` partitions, created on first
/// use; the signature picks the class inside it. Every stored word lives in
/// exactly one class.
#[derive(Debug, Clone)]
pub struct Anagrams {
    partitions: Vec<Option<Partition>>,
    len: usize,
}

impl Default for Anagrams {
    fn default() -> Self {
        Self::new()
    }
}

impl Anagrams {
    pub fn new() -> Self {
        let mut partitions = Vec::with_capacity(MAX_WORD_LENGTH);
        partitions.resize_with(MAX_WORD_LENGTH, || None);
        Self { partitions, len: 0 }
    }

    /// Number of words stored, singletons included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Files `word` under its class. Empty words are ignored, and so are words
    /// longer than `MAX_WORD_LENGTH` bytes, which the input layer never lets
    /// through.
    pub fn put(&mut self, word: impl Into<String>) {
        let word = word.into();
        if word.is_empty() || word.len() > MAX_WORD_LENGTH {
            return;
        }

        let key = signature(&word);
        let partition = self.partitions[word.len() - 1].get_or_insert_with(Partition::default);
        partition.entry(key).or_default().push(word);
        self.len += 1;
    }

    /// Appends every class of `other` onto the class with the same key here.
    pub fn merge(&mut self, other: Anagrams) {
        for (mine, theirs) in self.partitions.iter_mut().zip(other.partitions) {
            let Some(theirs) = theirs else {
                continue;
            };

            match mine {
                None => *mine = Some(theirs),
                Some(mine) => {
                    for (key, mut words) in theirs {
                        mine.entry(key).or_default().append(&mut words);
                    }
                }
            }
        }
        self.len += other.len;
    }

    /// Classes with at least two members, shortest words first.
    ///
    /// Order within one length follows the hash map and is not specified.
    pub fn classes(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.partitions
            .iter()
            .flatten()
            .flat_map(|partition| partition.values())
            .filter(|words| words.len() >= 2)
            .map(Vec::as_slice)
    }

    /// Draining form of [`Anagrams::classes`], same order.
    pub fn into_classes(self) -> Vec<Vec<String>> {
        self.partitions
            .into_iter()
            .flatten()
            .flat_map(|partition| partition.into_values())
            .filter(|words| words.len() >= 2)
            .collect()
    }
}

impl<S: Into<String>> Extend<S> for Anagrams {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.put(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Anagrams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut anagrams = Anagrams::new();
        anagrams.extend(iter);
        anagrams
    }
}
