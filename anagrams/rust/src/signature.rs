use std::fmt::{self, Debug, Display, Formatter};

use crate::ALPHABET_LEN;

/// Permutation-invariant key of a word: its bytes in ascending order.
///
/// Two words have equal signatures iff one is a permutation of the other.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Box<[u8]>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq<&str> for Signature {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == other.as_bytes()
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Sorts the bytes of `word` by counting, in O(len + 256).
///
/// `word` must not be empty.
pub fn signature(word: &str) -> Signature {
    debug_assert!(!word.is_empty(), "signature of an empty word");

    let mut count = [0usize; ALPHABET_LEN];
    for &b in word.as_bytes() {
        count[b as usize] += 1;
    }

    let mut sorted = Vec::with_capacity(word.len());
    for (b, &n) in count.iter().enumerate() {
        if n == 0 {
            continue;
        }
        sorted.extend(std::iter::repeat(b as u8).take(n));
    }

    Signature(sorted.into_boxed_slice())
}
