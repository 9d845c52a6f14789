//! A bounded lock-free MPMC queue for high-throughput inter-thread handoff.
//!
//! `relay-queue` provides [`BoundedQueue`], a fixed-capacity first-in
//! first-out queue that any number of producer and consumer threads can
//! share through a plain `&` reference (or an `Arc`). There are no locks:
//! all coordination happens on a handful of cache-padded atomic counters.
//!
//! # Quick Start
//!
//! ```
//! use relay_queue::BoundedQueue;
//!
//! let queue = BoundedQueue::<u64>::new(1024).unwrap();
//!
//! queue.push(42);
//! assert_eq!(queue.pop(), 42);
//! ```
//!
//! # Design
//!
//! Every enqueue and dequeue is split into four tiny steps:
//!
//! 1. **Admission**: an atomic bound counter admits the caller only while
//!    space (producers) or data (consumers) exists.
//! 2. **Reservation**: a fetch-and-increment on a monotonic lead counter
//!    hands the caller a ticket naming a slot no other caller touches.
//! 3. **Transfer**: the value moves in or out of the ticketed slot, with no
//!    synchronization on the slot itself.
//! 4. **Commit**: a trailing-edge counter advances in ticket order, making
//!    the operation FIFO-visible to the other side.
//!
//! Because reservations name disjoint slots, two operations never contend on
//! the same slot, and the trailing edges guarantee global FIFO order no
//! matter how many threads are on each side. See the [`mpmc`] module docs
//! for the full counter layout.
//!
//! # Blocking and bounded variants
//!
//! [`push`](BoundedQueue::push) and [`pop`](BoundedQueue::pop) spin (with
//! scheduler yields under contention) until they complete; they never fail.
//! [`try_push`](BoundedQueue::try_push) and [`try_pop`](BoundedQueue::try_pop)
//! take a small retry budget and hand control back to the caller when the
//! queue stays full (or empty) for that many admission rounds.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, missing_debug_implementations)]

use core::fmt;

pub mod mpmc;

pub use mpmc::{BoundedQueue, MAX_CAPACITY};

/// Error returned when a bounded push gives up on a ring that stayed full
/// through its admission retry budget.
///
/// The value was never written to a slot; it comes back to the caller inside
/// the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingFull<T> {
    /// The value the ring refused to admit.
    pub value: T,
}

impl<T> RingFull<T> {
    /// Recovers the refused value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for RingFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring stayed full through the admission retry budget")
    }
}

impl<T: fmt::Debug> std::error::Error for RingFull<T> {}

/// Error returned when a queue is constructed with an unusable capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// The requested capacity was zero.
    Zero,
    /// The requested capacity exceeds [`MAX_CAPACITY`].
    TooLarge(usize),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "queue must have non-zero capacity"),
            Self::TooLarge(requested) => write!(
                f,
                "capacity {requested} exceeds maximum allowable queue capacity {MAX_CAPACITY}"
            ),
        }
    }
}

impl std::error::Error for CapacityError {}
