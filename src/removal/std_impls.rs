//! Capability impls and declarations for the alloc collections.
//!
//! | Type            | BulkRemove | RangeErase | CursorErase | Selected  |
//! |-----------------|------------|------------|-------------|-----------|
//! | `Vec<T>`        | yes        | yes        | yes         | `Native`  |
//! | `VecDeque<T>`   | yes        | yes        | yes         | `Native`  |
//! | `LinkedList<T>` | yes        | no         | yes         | `Native`  |

use alloc::collections::{LinkedList, VecDeque};
use alloc::vec::Vec;
use core::convert::Infallible;
use core::mem;

use super::capability::{BulkRemoval, BulkRemove, CursorErase, RangeErase, RangeErasure, Sequence};
use super::strategy::{Partition, Strategy};

crate::expose! {
    impl<T> for Vec<T> { BulkRemoval, RangeErasure }
    impl<T> for VecDeque<T> { BulkRemoval, RangeErasure }
    impl<T> for LinkedList<T> { BulkRemoval, !RangeErasure }
}

// =============================================================================
// Vec
// =============================================================================

impl<T> Sequence for Vec<T> {
    type Item = T;
}

impl<T> BulkRemove for Vec<T> {
    #[inline]
    fn bulk_remove<F>(&mut self, mut matches: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|item| !matches(item));
    }
}

impl<T> RangeErase for Vec<T> {
    #[inline]
    fn elements_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    #[inline]
    fn erase_tail(&mut self, from: usize) {
        self.truncate(from);
    }
}

impl<T> CursorErase for Vec<T> {
    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn erase_at(&mut self, index: usize) {
        self.remove(index);
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T> Sequence for VecDeque<T> {
    type Item = T;
}

impl<T> BulkRemove for VecDeque<T> {
    /// Runs the partition pass. `VecDeque::retain` leaves already swapped
    /// elements out of order when the predicate panics.
    #[inline]
    fn bulk_remove<F>(&mut self, mut matches: F)
    where
        F: FnMut(&T) -> bool,
    {
        let outcome = <Partition as Strategy<Self>>::try_remove(self, |item| {
            Ok::<_, Infallible>(matches(item))
        });
        match outcome {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<T> RangeErase for VecDeque<T> {
    #[inline]
    fn elements_mut(&mut self) -> &mut [T] {
        self.make_contiguous()
    }

    #[inline]
    fn erase_tail(&mut self, from: usize) {
        self.truncate(from);
    }
}

impl<T> CursorErase for VecDeque<T> {
    #[inline]
    fn element(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn erase_at(&mut self, index: usize) {
        self.remove(index);
    }
}

// =============================================================================
// LinkedList
// =============================================================================

impl<T> Sequence for LinkedList<T> {
    type Item = T;
}

/// Survivors collected so far, plus the elements not yet examined.
///
/// Dropping it splices `unexamined` back behind the survivors, so a
/// panicking predicate leaves the current element and everything after it
/// in place.
struct Detached<'a, T> {
    survivors: &'a mut LinkedList<T>,
    unexamined: LinkedList<T>,
}

impl<T> Drop for Detached<'_, T> {
    fn drop(&mut self) {
        self.survivors.append(&mut self.unexamined);
    }
}

impl<T> BulkRemove for LinkedList<T> {
    /// Detach the whole list, then move each survivor back. The predicate
    /// sees every element while it is still in the detached list.
    fn bulk_remove<F>(&mut self, mut matches: F)
    where
        F: FnMut(&T) -> bool,
    {
        let unexamined = mem::take(self);
        let mut pass = Detached {
            survivors: self,
            unexamined,
        };

        while let Some(front) = pass.unexamined.front() {
            let hit = matches(front);
            if let Some(item) = pass.unexamined.pop_front() {
                if !hit {
                    pass.survivors.push_back(item);
                }
            }
        }
    }
}

impl<T> CursorErase for LinkedList<T> {
    /// Walks from the front, so a forced `Scan` over a list is quadratic.
    /// The selected strategy for lists is `Native`, which is linear.
    fn element(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn erase_at(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        let mut tail = self.split_off(index);
        tail.pop_front();
        self.append(&mut tail);
    }
}
