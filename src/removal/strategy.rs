//! The three removal strategies, most to least preferred.

use core::marker::PhantomData;

use super::capability::{BulkRemove, CursorErase, RangeErase, Sequence};
use crate::trial::Candidate;

/// A way of removing matching elements from container `C`.
///
/// Every strategy has the same observable result: the elements whose
/// predicate answered `Ok(false)` remain, in their original order. On the
/// first `Err` the strategy stops asking, keeps the failing element and
/// everything not yet examined, applies the removals already decided and
/// returns the error unchanged. A predicate that panics leaves the
/// container exactly as an `Err` from that element would.
pub trait Strategy<C: Sequence> {
    const NAME: &'static str;

    fn try_remove<F, E>(container: &mut C, matches: F) -> Result<(), E>
    where
        F: FnMut(&C::Item) -> Result<bool, E>;
}

/// Rank 0: the container's own bulk removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Native;

/// Rank 1: stable partition of survivors to the front, then one tail erase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Partition;

/// Rank 2: walk the sequence and erase matches one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl<C: BulkRemove> Strategy<C> for Native {
    const NAME: &'static str = "native";

    fn try_remove<F, E>(container: &mut C, mut matches: F) -> Result<(), E>
    where
        F: FnMut(&C::Item) -> Result<bool, E>,
    {
        let mut failure = None;
        container.bulk_remove(|item| {
            if failure.is_some() {
                return false;
            }
            match matches(item) {
                Ok(hit) => hit,
                Err(err) => {
                    failure = Some(err);
                    false
                }
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// State of one partition pass over a `RangeErase` container.
///
/// `[0, kept)` holds survivors in order, `[kept, read)` removed elements,
/// `[read, len)` elements not yet decided. Dropping the pass moves the
/// undecided elements down behind the survivors and erases the tail, so an
/// early `Err` and a panicking predicate end in the same state.
struct Compaction<'a, C: RangeErase> {
    container: &'a mut C,
    kept: usize,
    read: usize,
    len: usize,
}

impl<C: RangeErase> Drop for Compaction<'_, C> {
    fn drop(&mut self) {
        if self.read < self.len {
            let elements = self.container.elements_mut();
            elements[self.kept..].rotate_left(self.read - self.kept);
        }
        self.container.erase_tail(self.kept + (self.len - self.read));
    }
}

impl<C: RangeErase> Strategy<C> for Partition {
    const NAME: &'static str = "partition";

    fn try_remove<F, E>(container: &mut C, mut matches: F) -> Result<(), E>
    where
        F: FnMut(&C::Item) -> Result<bool, E>,
    {
        let mut pass = Compaction {
            container,
            kept: 0,
            read: 0,
            len: 0,
        };
        let elements = pass.container.elements_mut();
        pass.len = elements.len();

        let mut failure = None;
        while pass.read < pass.len {
            match matches(&elements[pass.read]) {
                Ok(true) => {}
                Ok(false) => {
                    elements.swap(pass.kept, pass.read);
                    pass.kept += 1;
                }
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
            pass.read += 1;
        }
        drop(pass);

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<C: CursorErase> Strategy<C> for Scan {
    const NAME: &'static str = "scan";

    fn try_remove<F, E>(container: &mut C, mut matches: F) -> Result<(), E>
    where
        F: FnMut(&C::Item) -> Result<bool, E>,
    {
        let mut index = 0;
        while let Some(item) = container.element(index) {
            if matches(item)? {
                container.erase_at(index);
            } else {
                index += 1;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Candidate Bridge
// =============================================================================

/// The "remove matching elements" operation as seen by the dispatch core.
pub struct Removal<F, E> {
    matches: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> Removal<F, E> {
    #[inline(always)]
    pub fn new(matches: F) -> Self {
        Removal {
            matches,
            _error: PhantomData,
        }
    }
}

impl<'a, S, C, F, E> Candidate<Removal<F, E>, &'a mut C> for S
where
    C: Sequence,
    S: Strategy<C>,
    F: FnMut(&C::Item) -> Result<bool, E>,
{
    type Output = Result<(), E>;

    #[inline(always)]
    fn invoke(op: Removal<F, E>, container: &'a mut C) -> Result<(), E> {
        #[cfg(feature = "tracing")]
        tracing::trace!(strategy = S::NAME, "remove_matching");

        S::try_remove(container, op.matches)
    }
}
