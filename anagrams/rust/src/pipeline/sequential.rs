use tracing::{debug, info_span};

use crate::{Anagrams, Result};

/// Files every word into a single index on the calling thread.
pub fn build<I>(words: I) -> Result<Anagrams>
where
    I: IntoIterator<Item = Result<String>>,
{
    let _span = info_span!("sequential").entered();

    let mut anagrams = Anagrams::new();
    for word in words {
        anagrams.put(word?);
    }

    debug!(words = anagrams.len(), "index built");
    Ok(anagrams)
}
