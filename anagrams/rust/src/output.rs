use std::io::{BufWriter, Write};

use crate::lcd_sort::lcd_sort;
use crate::Result;

/// Order in which classes are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    /// Shortest words first, storage order within a length.
    #[default]
    Unordered,
    /// Shortest words first, then by the class's smallest word.
    Sorted,
}

/// Radix sorts every class in place. Classes must hold equal-length words.
pub fn sort_classes(classes: &mut [Vec<String>]) {
    for class in classes.iter_mut() {
        let width = class.first().map_or(0, String::len);
        lcd_sort(class, width);
    }
}

/// Sorts each class, then orders the classes themselves as `output` asks.
pub fn arrange(classes: &mut [Vec<String>], output: Output) {
    sort_classes(classes);

    if output == Output::Sorted {
        classes.sort_unstable_by(|a, b| smallest(a).cmp(&smallest(b)));
    }
}

/// Length and first word of a sorted class, which is its smallest word.
fn smallest(class: &[String]) -> Option<(usize, &str)> {
    class.first().map(|w| (w.len(), w.as_str()))
}

/// Writes one space-joined line per class, returning the number of lines.
pub fn write_classes<W: Write>(classes: &[Vec<String>], writer: W) -> Result<usize> {
    let mut writer = BufWriter::with_capacity(1024 * 8, writer);
    for class in classes {
        writeln!(writer, "{}", class.join(" "))?;
    }
    writer.flush()?;
    Ok(classes.len())
}
