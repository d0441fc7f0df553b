//! Container capabilities consumed by the removal strategies.
//!
//! Each trait is the real operation a strategy needs; the matching
//! capability marker is what ladders consult in generic code.
//!
//! | Trait         | Marker         | Strategy    |
//! |---------------|----------------|-------------|
//! | `BulkRemove`  | `BulkRemoval`  | `Native`    |
//! | `RangeErase`  | `RangeErasure` | `Partition` |
//! | `CursorErase` | (none)         | `Scan`      |
//!
//! `Scan` is the terminal fallback, so `CursorErase` has no marker: the
//! fallback is never guarded.

/// An ordered sequence of `Item`s.
pub trait Sequence {
    type Item;
}

/// Native bulk removal.
pub trait BulkRemove: Sequence {
    /// Remove every element for which `matches` returns true.
    ///
    /// Implementations call `matches` exactly once per element, front to
    /// back, and keep the survivors in their original order. If `matches`
    /// panics, the element being examined and every later one stay.
    fn bulk_remove<F>(&mut self, matches: F)
    where
        F: FnMut(&Self::Item) -> bool;
}

/// Random access plus erasure of a trailing range.
pub trait RangeErase: Sequence {
    /// All elements as one contiguous slice.
    fn elements_mut(&mut self) -> &mut [Self::Item];

    /// Drop every element at index `from` and beyond.
    fn erase_tail(&mut self, from: usize);
}

/// Forward iteration with single-element erasure.
pub trait CursorErase: Sequence {
    /// Element at `index`, or `None` past the end.
    fn element(&self, index: usize) -> Option<&Self::Item>;

    /// Erase the element at `index`; later elements shift down by one.
    fn erase_at(&mut self, index: usize);
}

crate::capability! {
    /// The container implements [`BulkRemove`].
    pub BulkRemoval
}

crate::capability! {
    /// The container implements [`RangeErase`].
    pub RangeErasure
}
