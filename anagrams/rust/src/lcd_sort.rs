use std::mem;

use crate::ALPHABET_LEN;

/// Least-significant-digit radix sort for strings of identical byte length.
///
/// Runs `width` stable counting passes, from the last byte to the first, so
/// the slice ends up in ascending lexicographic byte order in
/// O(n * (256 + width)). Every element must be exactly `width` bytes long.
///
/// Elements are moved, never cloned; the scratch buffer is filled with
/// `S::default()` placeholders.
pub fn lcd_sort<S>(words: &mut [S], width: usize)
where
    S: AsRef<[u8]> + Default,
{
    let n = words.len();
    if n < 2 {
        return;
    }

    debug_assert!(
        words.iter().all(|w| w.as_ref().len() == width),
        "lcd_sort requires words of length {width}"
    );

    let mut aux: Vec<S> = Vec::with_capacity(n);
    aux.resize_with(n, S::default);

    for d in (0..width).rev() {
        // Histogram shifted by one so the prefix sum yields start offsets.
        let mut count = [0usize; ALPHABET_LEN + 1];
        for w in words.iter() {
            count[w.as_ref()[d] as usize + 1] += 1;
        }

        for i in 0..ALPHABET_LEN {
            count[i + 1] += count[i];
        }

        for w in words.iter_mut() {
            let c = w.as_ref()[d] as usize;
            aux[count[c]] = mem::take(w);
            count[c] += 1;
        }

        words.swap_with_slice(&mut aux);
    }
}
