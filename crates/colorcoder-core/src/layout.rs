//! Grid placement for palette entries.
//!
//! Entries are laid out row-major in a grid [`GRID_COLUMNS`] wide: the entry at
//! sequence index `i` sits in row `i / 3`, column `i % 3`. The color-button grid
//! and the name table both follow this layout, so every add or delete is
//! reported as a set of cell changes the presentation layer replays on both.

use crate::palette::Palette;

/// Number of columns in the button grid and the name table.
pub const GRID_COLUMNS: usize = 3;

/// Rows needed to hold `count` entries.
pub fn rows_for(count: usize) -> usize {
    count.div_ceil(GRID_COLUMNS)
}

/// A (row, column) position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Cell of the entry at sequence index `index`.
    pub const fn of_index(index: usize) -> Self {
        Self::new(index / GRID_COLUMNS, index % GRID_COLUMNS)
    }

    /// The cell one step earlier in row-major order.
    ///
    /// Column 0 wraps to the last column of the previous row. `None` for (0, 0).
    pub fn previous(self) -> Option<Self> {
        if self.column == 0 {
            let row = self.row.checked_sub(1)?;
            Some(Self::new(row, GRID_COLUMNS - 1))
        } else {
            Some(Self::new(self.row, self.column - 1))
        }
    }
}

/// Where an appended entry went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cell: Cell,
    /// The entry opened a new row; the table must grow before placing it.
    pub rows_grew: bool,
    pub total_rows: usize,
}

/// One entry shifted by a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMove {
    pub name: String,
    pub from: Cell,
    pub to: Cell,
}

/// Everything a delete changed in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflow {
    /// Cell of the deleted entry; its button is destroyed.
    pub removed: Cell,
    /// Shifts in increasing sequence order. Replay them in this order.
    pub moves: Vec<CellMove>,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl Reflow {
    /// Whether the table lost a row.
    pub fn rows_shrank(&self) -> bool {
        self.rows_after < self.rows_before
    }
}

/// Tracks the row count of the grid as entries come and go.
///
/// The palette order is the source of truth for positions; this only keeps
/// `total_rows` in step and computes the cell changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutIndex {
    total_rows: usize,
}

impl LayoutIndex {
    /// Layout for a palette that already holds `count` entries.
    pub fn for_count(count: usize) -> Self {
        Self {
            total_rows: rows_for(count),
        }
    }

    /// Current number of table rows.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Place a new entry after `count` existing ones.
    pub fn append(&mut self, count: usize) -> Placement {
        let rows_grew = count % GRID_COLUMNS == 0;
        if rows_grew {
            self.total_rows += 1;
        }
        Placement {
            cell: Cell::of_index(count),
            rows_grew,
            total_rows: self.total_rows,
        }
    }

    /// Compute the reflow for deleting `index` from `palette`.
    ///
    /// `palette` is the state before the delete. Returns `None` when `index` is
    /// out of range.
    pub fn remove(&mut self, palette: &Palette, index: usize) -> Option<Reflow> {
        let count = palette.len();
        if index >= count {
            return None;
        }

        let moves: Vec<CellMove> = palette.entries()[index + 1..]
            .iter()
            .enumerate()
            .filter_map(|(offset, entry)| {
                let from = Cell::of_index(index + 1 + offset);
                let to = from.previous()?;
                log::debug!(
                    "reflow {}: ({}, {}) -> ({}, {})",
                    entry.name,
                    from.row,
                    from.column,
                    to.row,
                    to.column
                );
                Some(CellMove {
                    name: entry.name.clone(),
                    from,
                    to,
                })
            })
            .collect();

        let rows_before = self.total_rows;
        let rows_after = rows_for(count - 1);
        if rows_after != rows_before {
            self.total_rows = rows_after;
        }

        Some(Reflow {
            removed: Cell::of_index(index),
            moves,
            rows_before,
            rows_after,
        })
    }
}

/// A fixed-width table of optional items, mirroring a widget grid.
///
/// The presentation layer keeps one of these per grid (buttons, names) and
/// replays [`Placement`]s and [`Reflow`]s on it.
#[derive(Debug, Clone, PartialEq)]
pub struct CellTable<T> {
    rows: Vec<[Option<T>; GRID_COLUMNS]>,
}

impl<T> Default for CellTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> CellTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Grow or shrink to `rows` rows. Items in dropped rows are discarded.
    pub fn set_row_count(&mut self, rows: usize) {
        self.rows.resize_with(rows, || std::array::from_fn(|_| None));
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.rows.get(cell.row)?.get(cell.column)?.as_ref()
    }

    /// Take the item out of `cell`, leaving it empty.
    pub fn take(&mut self, cell: Cell) -> Option<T> {
        self.rows.get_mut(cell.row)?.get_mut(cell.column)?.take()
    }

    /// Put `item` in `cell`, returning what was there.
    ///
    /// Grows the table if `cell` lies below the last row. Items for columns
    /// past the grid width are dropped.
    pub fn put(&mut self, cell: Cell, item: T) -> Option<T> {
        if cell.row >= self.rows.len() {
            self.set_row_count(cell.row + 1);
        }
        self.rows[cell.row].get_mut(cell.column)?.replace(item)
    }

    /// Apply an append: grow if needed, then place.
    pub fn apply_placement(&mut self, placement: &Placement, item: T) {
        if placement.rows_grew {
            self.set_row_count(placement.total_rows);
        }
        self.put(placement.cell, item);
    }

    /// Apply a delete: drop the removed item, shift the rest, shrink.
    ///
    /// Returns the removed item.
    pub fn apply_reflow(&mut self, reflow: &Reflow) -> Option<T> {
        let removed = self.take(reflow.removed);
        for mv in &reflow.moves {
            if let Some(item) = self.take(mv.from) {
                self.put(mv.to, item);
            }
        }
        if reflow.rows_shrank() {
            self.set_row_count(reflow.rows_after);
        }
        removed
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.rows.iter().enumerate().flat_map(|(row, items)| {
            items
                .iter()
                .enumerate()
                .filter_map(move |(column, item)| item.as_ref().map(|it| (Cell::new(row, column), it)))
        })
    }

    /// Empty every cell and drop all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
