//! Bounded multi-producer multi-consumer (MPMC) FIFO queue.
//!
//! Any number of producers and consumers share one [`BoundedQueue`] through
//! `&self` methods. Values leave in exactly the order their producers
//! committed them, regardless of thread counts — no coalescing, reordering,
//! duplication, or loss.
//!
//! # Protocol
//!
//! Each operation runs the reservation-and-commit sequence described in the
//! [crate docs](crate): admission on a signed bound counter, ticket
//! reservation on a lead counter, a slot-local value transfer, and an
//! in-ticket-order commit on a trail counter, followed by a signal to the
//! complementary side. The `ring` module holds the counter layout.
//!
//! Blocking [`push`](BoundedQueue::push) and [`pop`](BoundedQueue::pop)
//! never fail; once admitted they complete in a bounded number of steps
//! after the complementary side makes progress. They are not cancellable;
//! callers that need to give up use the `try_` variants and retry
//! externally.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use relay_queue::BoundedQueue;
//!
//! let queue = Arc::new(BoundedQueue::<u64>::new(64).unwrap());
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             queue.push(i);
//!         }
//!     })
//! };
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             assert_eq!(queue.pop(), i);
//!         }
//!     })
//! };
//!
//! producer.join().unwrap();
//! consumer.join().unwrap();
//! assert!(queue.is_empty());
//! ```

mod ring;
mod slot;

use std::fmt;

use crate::{CapacityError, RingFull};
use ring::Ring;

pub use ring::MAX_CAPACITY;

/// A bounded lock-free MPMC FIFO queue over a power-of-two ring.
///
/// Created with [`new`](Self::new); the requested capacity is rounded up to
/// the next power of two and never changes. All methods take `&self`, so a
/// queue is shared by reference or `Arc`; there are no separate producer
/// and consumer endpoints.
///
/// Dropping the queue drops any values still held in its slots.
pub struct BoundedQueue<T> {
    ring: Ring<T>,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue with at least `capacity` slots.
    ///
    /// The capacity is rounded up to the next power of two, which keeps the
    /// ticket-to-slot mapping exact even as the internal counters wrap.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when `capacity` is zero or exceeds
    /// [`MAX_CAPACITY`].
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<String>::new(100).unwrap();
    /// assert_eq!(queue.capacity(), 128);
    ///
    /// assert!(BoundedQueue::<String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        if capacity > MAX_CAPACITY {
            return Err(CapacityError::TooLarge(capacity));
        }

        Ok(Self {
            ring: Ring::with_capacity(capacity.next_power_of_two()),
        })
    }

    /// Pushes a value, blocking until a slot is available.
    ///
    /// Spins on admission (with scheduler yields under contention) while the
    /// queue is full. Once admitted, the push always completes.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<u64>::new(8).unwrap();
    ///
    /// queue.push(1);
    /// queue.push(2);
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn push(&self, value: T) {
        self.ring.admit_push();
        let ticket = self.ring.reserve_back();
        // Safety: ticket freshly reserved after a successful admission.
        unsafe { self.ring.store(ticket, value) };
        self.ring.commit_back(ticket);
        self.ring.signal_value();
    }

    /// Pushes a value unless the queue stays full for `attempts` admission
    /// retries.
    ///
    /// `attempts == 0` means a single admission check with no retries. On
    /// refusal the value is handed back untouched inside [`RingFull`].
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<u32>::new(2).unwrap();
    ///
    /// assert!(queue.try_push(1, 4).is_ok());
    /// assert!(queue.try_push(2, 4).is_ok());
    ///
    /// // Queue is now full.
    /// let err = queue.try_push(3, 4).unwrap_err();
    /// assert_eq!(err.into_value(), 3);
    /// ```
    pub fn try_push(&self, value: T, attempts: u16) -> Result<(), RingFull<T>> {
        if !self.ring.try_admit_push(attempts) {
            return Err(RingFull { value });
        }
        let ticket = self.ring.reserve_back();
        // Safety: ticket freshly reserved after a successful admission.
        unsafe { self.ring.store(ticket, value) };
        self.ring.commit_back(ticket);
        self.ring.signal_value();
        Ok(())
    }

    /// Pops the oldest value, blocking until one is available.
    ///
    /// Spins on admission (with scheduler yields under contention) while the
    /// queue is empty. Once admitted, the pop always completes.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<u64>::new(8).unwrap();
    ///
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// assert_eq!(queue.pop(), 1);
    /// assert_eq!(queue.pop(), 2);
    /// ```
    pub fn pop(&self) -> T {
        self.ring.admit_pop();
        let ticket = self.ring.reserve_front();
        // Safety: ticket freshly reserved after a successful admission.
        let value = unsafe { self.ring.take(ticket) };
        self.ring.commit_front(ticket);
        self.ring.signal_vacancy();
        value
    }

    /// Pops the oldest value unless the queue stays empty for `attempts`
    /// admission retries.
    ///
    /// `attempts == 0` means a single admission check with no retries.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<u32>::new(4).unwrap();
    ///
    /// assert_eq!(queue.try_pop(4), None);
    ///
    /// queue.push(7);
    /// assert_eq!(queue.try_pop(4), Some(7));
    /// ```
    pub fn try_pop(&self, attempts: u16) -> Option<T> {
        if !self.ring.try_admit_pop(attempts) {
            return None;
        }
        let ticket = self.ring.reserve_front();
        // Safety: ticket freshly reserved after a successful admission.
        let value = unsafe { self.ring.take(ticket) };
        self.ring.commit_front(ticket);
        self.ring.signal_vacancy();
        Some(value)
    }

    /// The fixed (rounded-up) capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Advisory occupancy estimate: the pessimistic upper bound, which
    /// counts in-flight writes. May be stale the instant it returns.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Advisory emptiness test from a consumer's point of view: `true`
    /// while no committed value is claimable. May be stale the instant it
    /// returns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
