use super::state::{LifeState, Row};
use ahash::AHashMap;

/// How the displayed state of a cell changes during one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Born,
    Survived,
    Died,
}

/// A single cell whose state must be redrawn after an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub x: i64,
    pub y: i64,
    pub kind: ChangeKind,
}

/// Result of advancing the field by one generation.
///
/// Ownership of the new field transfers to the caller; the old one is
/// untouched and may be discarded.
pub struct Generation {
    pub state: LifeState,
    pub alive: u64,
    pub changes: Vec<CellChange>,
}

/// Advance the field by one generation of Conway's B3/S23 rule.
///
/// Every live cell and every dead cell adjacent to one is examined. The live
/// rows are swept in ascending y, cells in ascending x; neighbour lookups in
/// the rows above and below carry a forward-only cursor, so each row pair is
/// scanned once per sweep instead of once per cell. Dead neighbours are
/// tallied in a transient map and those hit exactly three times are born.
///
/// `Died`/`Survived` changes are listed in row-major order; `Born` changes
/// follow in unspecified order.
pub fn next_generation(current: &LifeState) -> Generation {
    let mut next = LifeState::new();
    let mut changes = vec![];
    let mut alive = 0u64;
    // How many live cells touch each currently-dead cell. Lives only for
    // the duration of this call.
    let mut dead_tally: AHashMap<(i64, i64), u8> = AHashMap::new();

    for (i, row) in current.rows.iter().enumerate() {
        let y = row.y;
        let top = adjacent_row(current, i, -1);
        let bottom = adjacent_row(current, i, 1);
        let (mut top_cursor, mut bottom_cursor) = (0, 0);

        for (j, &x) in row.xs.iter().enumerate() {
            // The 8 potential neighbours; a slot is struck out once the
            // cell behind it is found alive, the rest are tallied as dead.
            let mut slots = [
                Some((x - 1, y - 1)),
                Some((x, y - 1)),
                Some((x + 1, y - 1)),
                Some((x - 1, y)),
                Some((x + 1, y)),
                Some((x - 1, y + 1)),
                Some((x, y + 1)),
                Some((x + 1, y + 1)),
            ];
            let mut neighbours = 0;

            if let Some(top) = top {
                neighbours += scan_row(&top.xs, x, &mut top_cursor, &mut slots[0..3]);
            }
            if j > 0 && row.xs[j - 1] == x - 1 {
                slots[3] = None;
                neighbours += 1;
            }
            if j + 1 < row.xs.len() && row.xs[j + 1] == x + 1 {
                slots[4] = None;
                neighbours += 1;
            }
            if let Some(bottom) = bottom {
                neighbours += scan_row(&bottom.xs, x, &mut bottom_cursor, &mut slots[5..8]);
            }

            for cell in slots.into_iter().flatten() {
                *dead_tally.entry(cell).or_insert(0) += 1;
            }

            if neighbours == 2 || neighbours == 3 {
                next.set_cell(x, y);
                alive += 1;
                changes.push(CellChange {
                    x,
                    y,
                    kind: ChangeKind::Survived,
                });
            } else {
                changes.push(CellChange {
                    x,
                    y,
                    kind: ChangeKind::Died,
                });
            }
        }
    }

    for (&(x, y), &count) in dead_tally.iter() {
        if count == 3 {
            next.set_cell(x, y);
            alive += 1;
            changes.push(CellChange {
                x,
                y,
                kind: ChangeKind::Born,
            });
        }
    }

    Generation {
        state: next,
        alive,
        changes,
    }
}

/// Row adjacent to `state.rows[i]` at vertical offset `dy`, if it exists.
fn adjacent_row(state: &LifeState, i: usize, dy: i64) -> Option<&Row> {
    let y = state.rows[i].y;
    let k = i.checked_add_signed(dy as isize)?;
    let row = state.rows.get(k)?;
    (row.y == y + dy).then_some(row)
}

/// Count live cells of a sorted adjacent row that fall in `[x - 1, x + 1]`,
/// striking the matching candidate slots.
///
/// `cursor` only ever moves forward: entries left of `x - 1` can never be
/// neighbours of the later (larger) x-values of the sweep, so they are
/// skipped for good. Entries at or beyond `x - 1` stay reachable for the
/// next cell.
fn scan_row(xs: &[i64], x: i64, cursor: &mut usize, slots: &mut [Option<(i64, i64)>]) -> u8 {
    while *cursor < xs.len() && xs[*cursor] < x - 1 {
        *cursor += 1;
    }
    let mut neighbours = 0;
    for &nx in &xs[*cursor..] {
        if nx > x + 1 {
            break;
        }
        slots[(nx - (x - 1)) as usize] = None;
        neighbours += 1;
    }
    neighbours
}
