use super::{Cell, Rgb};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Grid engine of the colored Game of Life.
///
/// The field keeps two same-shaped row-major buffers: `cells` holds the
/// externally visible generation, `scratch` is the write target of an
/// update. One update reads only `cells`, fills every slot of `scratch`
/// and swaps the two, so cell update order never matters within a
/// generation.
pub struct ColorField {
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    size: usize,
    rng: ChaCha8Rng,
}

impl ColorField {
    /// Side length used by the application window.
    pub const DEFAULT_SIZE: usize = 20;
    /// Upper bound (inclusive) of generated color channels.
    pub const CHANNEL_MAX: u8 = 225;
    /// Probability that `randomize` brings a cell to life.
    pub const FILL_RATE: f64 = 0.2;
    /// Value of the per-generation roll in `0..=100` that triggers a
    /// spontaneous mutation.
    const MUTATION_ROLL: u32 = 42;

    /// Creates an all-dead `size x size` field.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        assert!(size >= 1);
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self {
            cells: vec![Cell::Dead; size * size],
            scratch: vec![Cell::Dead; size * size],
            size,
            rng,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = cell;
    }

    /// Brings the cell to life with a fresh random color. An already
    /// alive cell is recolored, not cleared.
    pub fn toggle(&mut self, row: usize, col: usize) {
        assert!(row < self.size && col < self.size);
        let color = self.random_color();
        self.cells[row * self.size + col] = Cell::Alive(color);
    }

    /// Kills every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
        self.scratch.fill(Cell::Dead);
    }

    /// Replaces the field: each cell independently comes to life with
    /// probability `FILL_RATE`, getting its own random color.
    pub fn randomize(&mut self) {
        for i in 0..self.cells.len() {
            let cell = if self.rng.gen_bool(Self::FILL_RATE) {
                Cell::Alive(self.random_color())
            } else {
                Cell::Dead
            };
            self.cells[i] = cell;
        }
    }

    /// Advances the field by one generation, then rolls for a
    /// spontaneous mutation.
    pub fn advance(&mut self) {
        self.step_rule();
        if self.rng.gen_range(0..=100) == Self::MUTATION_ROLL {
            self.mutate_random_cell();
        }
    }

    /// One full rule pass without the mutation roll.
    ///
    /// A dead cell with exactly 3 live neighbors is born with the
    /// truncated component-wise mean of their colors. Any cell with 2
    /// or 3 neighbors otherwise carries its state over unchanged, so
    /// survivors keep their exact color bits. Everything else dies.
    pub(crate) fn step_rule(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = row * self.size + col;
                let (neighbors, avg) = self.count_neighbors(row, col);
                self.scratch[idx] = match self.cells[idx] {
                    Cell::Dead if neighbors == 3 => Cell::Alive(avg),
                    state if neighbors == 2 || neighbors == 3 => state,
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Overwrites one uniformly chosen cell with a fresh random color,
    /// resurrecting it if it was dead.
    pub(crate) fn mutate_random_cell(&mut self) {
        let row = self.rng.gen_range(0..self.size);
        let col = self.rng.gen_range(0..self.size);
        let color = self.random_color();
        self.cells[row * self.size + col] = Cell::Alive(color);
    }

    /// Counts the live Moore neighbors of `(row, col)` in the current
    /// generation and averages their channels. Neighbors are clipped to
    /// the field bounds; there is no wraparound. The mean truncates
    /// (integer division by the neighbor count).
    fn count_neighbors(&self, row: usize, col: usize) -> (usize, Rgb) {
        let mut count = 0u32;
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        let row1 = (row + 1).min(self.size - 1);
        let col1 = (col + 1).min(self.size - 1);
        for nr in row.saturating_sub(1)..=row1 {
            for nc in col.saturating_sub(1)..=col1 {
                if nr == row && nc == col {
                    continue;
                }
                if let Cell::Alive(c) = self.cells[nr * self.size + nc] {
                    count += 1;
                    r += c.r as u32;
                    g += c.g as u32;
                    b += c.b as u32;
                }
            }
        }
        if count == 0 {
            return (0, Rgb::new(0, 0, 0));
        }
        let avg = Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8);
        (count as usize, avg)
    }

    fn random_color(&mut self) -> Rgb {
        Rgb::new(
            self.rng.gen_range(0..=Self::CHANNEL_MAX),
            self.rng.gen_range(0..=Self::CHANNEL_MAX),
            self.rng.gen_range(0..=Self::CHANNEL_MAX),
        )
    }
}
