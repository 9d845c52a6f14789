//! The single-value cell backing each ring slot.

use std::cell::UnsafeCell;

/// One cell of the ring: either empty or holding a single value.
///
/// The cell itself carries no synchronization. The queue's reservation
/// protocol guarantees that between state transitions exactly one producer
/// holds the write reservation and exactly one consumer holds the read
/// reservation for a given slot, so every access goes through an `unsafe`
/// single-owner operation whose contract is that reservation.
pub(crate) struct Slot<T> {
    value: UnsafeCell<Option<T>>,
}

impl<T> Slot<T> {
    pub(crate) const fn empty() -> Self {
        Self {
            value: UnsafeCell::new(None),
        }
    }

    /// Stores `value` into the cell, transitioning it from empty to holding.
    ///
    /// # Safety
    ///
    /// The caller must hold the write reservation for this slot: the cell
    /// must be empty, and no other thread may access it until the store
    /// completes.
    #[inline]
    pub(crate) unsafe fn store(&self, value: T) {
        let cell = unsafe { &mut *self.value.get() };
        debug_assert!(cell.is_none(), "store into occupied slot");
        *cell = Some(value);
    }

    /// Moves the held value out of the cell, leaving it empty.
    ///
    /// # Safety
    ///
    /// The caller must hold the read reservation for this slot: the cell
    /// must be holding a value, and no other thread may access it until the
    /// take completes.
    #[inline]
    pub(crate) unsafe fn take(&self) -> T {
        let cell = unsafe { &mut *self.value.get() };
        let taken = cell.take();
        debug_assert!(taken.is_some(), "take from empty slot");
        // Safety: caller's reservation contract guarantees the cell held a value.
        unsafe { taken.unwrap_unchecked() }
    }

    /// Whether the cell is empty. Exclusive access, so no reservation needed.
    #[cfg(test)]
    pub(crate) fn is_vacant(&mut self) -> bool {
        self.value.get_mut().is_none()
    }
}
