use crate::constants::CELL_SIZE;
use crate::data::model::RawImage;

// ---------------------------------------------------------------------------
// Cell – one grid square, identified by its grid coordinates
// ---------------------------------------------------------------------------

/// Grid coordinates of one cell plus its 1-based enumeration position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub rows_iterator: usize,
    pub columns_iterator: usize,
    pub position: usize,
}

// ---------------------------------------------------------------------------
// GridPartitioner – cell enumeration and pixel addressing
// ---------------------------------------------------------------------------

/// Walks a [`RawImage`] as a grid of `CELL_SIZE` squares.
///
/// `rows` is derived from the image width and `columns` from its height.
/// The addressing formula in [`byte_offset`](Self::byte_offset) matches the
/// packing of the USPS source grids. It is not a plain row-major index and
/// the train/test split depends on it, so it must not be "simplified".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPartitioner {
    rows: usize,
    columns: usize,
    channels_per_pixel: usize,
}

impl GridPartitioner {
    pub fn new(image: &RawImage) -> Self {
        Self {
            rows: image.width / CELL_SIZE,
            columns: image.height / CELL_SIZE,
            channels_per_pixel: image.channels_per_pixel,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Cells in enumeration order: outer loop over rows, inner over columns.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |rows_iterator| {
                (0..self.columns).map(move |columns_iterator| (rows_iterator, columns_iterator))
            })
            .enumerate()
            .map(|(index, (rows_iterator, columns_iterator))| Cell {
                rows_iterator,
                columns_iterator,
                position: index + 1,
            })
    }

    /// Byte offset of local pixel `(row, column)` inside `cell`.
    ///
    /// May be negative (the very first pixel of the grid) or past the end of
    /// the buffer; callers treat such samples as missing.
    pub fn byte_offset(&self, cell: Cell, row: usize, column: usize) -> i64 {
        let size = CELL_SIZE as i64;
        let global_x = row as i64 + cell.rows_iterator as i64 * size;
        let global_y = column as i64 + cell.columns_iterator as i64 * size;
        let pixel_index = (global_y - 1) + global_x * (self.columns as i64 - 1) * size;
        pixel_index * self.channels_per_pixel as i64
    }

    /// Channel-0 samples of `cell` in local row-major order.
    ///
    /// Offsets outside the buffer yield 0.
    pub fn cell_samples(&self, image: &RawImage, cell: Cell) -> Vec<u8> {
        let mut samples = Vec::with_capacity(CELL_SIZE * CELL_SIZE);
        for row in 0..CELL_SIZE {
            for column in 0..CELL_SIZE {
                let offset = self.byte_offset(cell, row, column);
                samples.push(image.sample_at(offset).unwrap_or(0));
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_come_from_width_then_height() {
        let image = RawImage::filled(CELL_SIZE * 3, CELL_SIZE * 5, 0);
        let grid = GridPartitioner::new(&image);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.capacity(), 15);
    }

    #[test]
    fn cells_enumerate_columns_fastest_with_one_based_positions() {
        let image = RawImage::filled(CELL_SIZE * 2, CELL_SIZE * 3, 0);
        let grid = GridPartitioner::new(&image);
        let order: Vec<(usize, usize, usize)> = grid
            .cells()
            .map(|c| (c.rows_iterator, c.columns_iterator, c.position))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, 0, 1),
                (0, 1, 2),
                (0, 2, 3),
                (1, 0, 4),
                (1, 1, 5),
                (1, 2, 6),
            ]
        );
    }

    #[test]
    fn byte_offset_follows_the_packed_layout() {
        let image = RawImage::filled(CELL_SIZE * 4, CELL_SIZE * 3, 0);
        let grid = GridPartitioner::new(&image);
        let cell = Cell {
            rows_iterator: 1,
            columns_iterator: 2,
            position: 6,
        };
        // global_x = 2 + 16 = 18, global_y = 5 + 32 = 37
        // pixel = 36 + 18 * 2 * 16 = 612
        assert_eq!(grid.byte_offset(cell, 2, 5), 612 * 4);
    }

    #[test]
    fn first_grid_pixel_falls_before_the_buffer() {
        let image = RawImage::filled(CELL_SIZE * 2, CELL_SIZE * 2, 255);
        let grid = GridPartitioner::new(&image);
        let first = grid.cells().next().unwrap();
        assert_eq!(grid.byte_offset(first, 0, 0), -4);

        let samples = grid.cell_samples(&image, first);
        assert_eq!(samples[0], 0);
        assert!(samples[1..].iter().all(|&s| s == 255));
    }
}
