use smallvec::SmallVec;
use std::cell::RefCell;

/// Rows up to this many cells never touch the heap.
pub(crate) const INLINE_ROW_CELLS: usize = 64;

/// A pooled row keeps at most this many cells alive between calls.
const MAX_POOLED_CELLS: usize = 1 << 16;

type InlineRow = SmallVec<[usize; INLINE_ROW_CELLS]>;

thread_local! {
    static ROW_POOL: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` over a zeroed scratch row of `cells` entries.
///
/// Short rows live on the stack. Long rows borrow this thread's pooled
/// buffer for the duration of the call and hand it back afterwards, so a
/// re-entrant call simply gets a fresh allocation.
pub(crate) fn with_row<R>(cells: usize, f: impl FnOnce(&mut [usize]) -> R) -> R {
    if cells <= INLINE_ROW_CELLS {
        log::debug!("distance row of {cells} cells kept inline");
        let mut row: InlineRow = SmallVec::from_elem(0, cells);
        return f(&mut row);
    }

    log::debug!("distance row of {cells} cells taken from the pool");
    let mut row = ROW_POOL.with(|pool| pool.take());
    row.clear();
    row.resize(cells, 0);
    let result = f(&mut row);
    if row.capacity() <= MAX_POOLED_CELLS {
        ROW_POOL.with(|pool| *pool.borrow_mut() = row);
    }
    result
}
