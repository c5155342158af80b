use crate::constants::{CELL_SIZE, PRINT_SYMBOL, PRINT_THRESHOLD};

/// Layout of [`print_image`] output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintOptions {
    /// Characters per emitted line.
    pub size: usize,
    /// Values strictly above this are drawn with `symbol`.
    pub threshold: f64,
    pub symbol: char,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            size: CELL_SIZE,
            threshold: PRINT_THRESHOLD,
            symbol: PRINT_SYMBOL,
        }
    }
}

/// Write a textual rendering of `matrix` to `sink`, one line per `size` values.
///
/// "On" values become `symbol`, the rest a space. A trailing partial row is
/// emitted as a shorter last line; nothing is emitted for an empty matrix.
pub fn print_image<T, F>(matrix: &[T], mut sink: F, options: PrintOptions)
where
    T: Copy + Into<f64>,
    F: FnMut(&str),
{
    let size = options.size.max(1);
    let mut line = String::with_capacity(size * options.symbol.len_utf8());
    for (index, &value) in matrix.iter().enumerate() {
        line.push(if value.into() > options.threshold {
            options.symbol
        } else {
            ' '
        });
        if (index + 1) % size == 0 {
            sink(&line);
            line.clear();
        }
    }
    if !line.is_empty() {
        sink(&line);
    }
}
