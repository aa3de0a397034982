/// All live cells sharing one y-coordinate, x-coordinates sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Row {
    pub y: i64,
    pub xs: Vec<i64>,
}

/// Sparse row-indexed set of live cells on an unbounded grid.
///
/// Rows are sorted by ascending `y`, each row keeps its x-coordinates sorted
/// ascending with no duplicates, and an empty row is dropped the moment its
/// last cell is cleared. [`next_generation`](super::next_generation) relies on
/// these invariants for its forward-only neighbour scans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LifeState {
    pub(super) rows: Vec<Row>,
}

impl LifeState {
    /// Create an empty field.
    pub fn new() -> Self {
        Self { rows: vec![] }
    }

    /// Build a field from an arbitrary list of cells; duplicates are merged.
    pub fn from_cells(cells: &[(i64, i64)]) -> Self {
        let mut state = Self::new();
        for &(x, y) in cells {
            state.set_cell(x, y);
        }
        state
    }

    /// Parse a run-length encoded pattern into a field anchored at (0, 0).
    pub fn from_rle(data: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::from_cells(&crate::parse_rle(data)?))
    }

    /// Create a field with random cells in the `width x height` rectangle
    /// anchored at (0, 0).
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: i64, height: i64, fill_rate: f64, seed: Option<u64>) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut state = Self::new();
        for y in 0..height {
            for x in 0..width {
                if rng.gen_bool(fill_rate) {
                    state.set_cell(x, y);
                }
            }
        }
        state
    }

    /// Get cell state at (x, y).
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        match self.rows.binary_search_by_key(&y, |row| row.y) {
            Ok(i) => self.rows[i].xs.binary_search(&x).is_ok(),
            Err(_) => false,
        }
    }

    /// Make the cell at (x, y) alive. No-op if it already is.
    pub fn set_cell(&mut self, x: i64, y: i64) {
        match self.rows.binary_search_by_key(&y, |row| row.y) {
            Ok(i) => {
                let xs = &mut self.rows[i].xs;
                if let Err(j) = xs.binary_search(&x) {
                    xs.insert(j, x);
                }
            }
            Err(i) => self.rows.insert(i, Row { y, xs: vec![x] }),
        }
    }

    /// Make the cell at (x, y) dead. No-op if it already is.
    pub fn clear_cell(&mut self, x: i64, y: i64) {
        if let Ok(i) = self.rows.binary_search_by_key(&y, |row| row.y) {
            let xs = &mut self.rows[i].xs;
            if let Ok(j) = xs.binary_search(&x) {
                xs.remove(j);
                if self.rows[i].xs.is_empty() {
                    self.rows.remove(i);
                }
            }
        }
    }

    /// Flip the cell at (x, y); returns its new state.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        if self.is_alive(x, y) {
            self.clear_cell(x, y);
            false
        } else {
            self.set_cell(x, y);
            true
        }
    }

    /// Total number of alive cells in the field.
    pub fn population(&self) -> u64 {
        self.rows.iter().map(|row| row.xs.len() as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bounding box of the alive cells as `(min_x, min_y, max_x, max_y)`,
    /// or `None` for an empty field.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let min_y = self.rows.first()?.y;
        let max_y = self.rows.last()?.y;
        let mut min_x = i64::MAX;
        let mut max_x = i64::MIN;
        for row in &self.rows {
            if let (Some(&first), Some(&last)) = (row.xs.first(), row.xs.last()) {
                min_x = min_x.min(first);
                max_x = max_x.max(last);
            }
        }
        Some((min_x, min_y, max_x, max_y))
    }

    /// Iterate over alive cells in row-major order (ascending y, then x).
    pub fn iter_cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.xs.iter().map(move |&x| (x, row.y)))
    }
}
