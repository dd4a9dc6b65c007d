//! Single-slot overwrite mailbox
//!
//! A capacity-one channel for sensor samples where only the most recent
//! value matters. A publish replaces any unread value; a consume takes the
//! pending value exactly once. Neither side ever blocks, so polling tasks
//! can use it freely between timed delays.
//!
//! Generic over [`RawMutex`] like the embassy-sync primitives: firmware
//! statics use `CriticalSectionRawMutex`, host tests use `NoopRawMutex`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Single-slot overwrite mailbox.
///
/// Intermediate values published between consumes are lost; that is the
/// point. The consumer always sees the latest sample or nothing.
pub struct Mailbox<M: RawMutex, T> {
    slot: Mutex<M, RefCell<Option<T>>>,
}

impl<M: RawMutex, T> Mailbox<M, T> {
    /// Create an empty mailbox. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store `value`, discarding any unread previous value.
    pub fn publish(&self, value: T) {
        self.slot.lock(|slot| {
            *slot.borrow_mut() = Some(value);
        });
    }

    /// Take the pending value, if one was published since the last consume.
    pub fn try_consume(&self) -> Option<T> {
        self.slot.lock(|slot| slot.borrow_mut().take())
    }
}

impl<M: RawMutex, T> Default for Mailbox<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    #[test]
    fn test_empty_mailbox_yields_nothing() {
        let mbox: Mailbox<NoopRawMutex, u8> = Mailbox::new();
        assert_eq!(mbox.try_consume(), None);
    }

    #[test]
    fn test_publish_then_consume() {
        let mbox: Mailbox<NoopRawMutex, u8> = Mailbox::new();
        mbox.publish(b'7');
        assert_eq!(mbox.try_consume(), Some(b'7'));
    }

    #[test]
    fn test_overwrite_keeps_latest_only() {
        let mbox: Mailbox<NoopRawMutex, u32> = Mailbox::new();
        mbox.publish(1);
        mbox.publish(2);
        assert_eq!(mbox.try_consume(), Some(2));
        // Exactly one item was buffered.
        assert_eq!(mbox.try_consume(), None);
    }

    #[test]
    fn test_consume_once_semantics() {
        let mbox: Mailbox<NoopRawMutex, u8> = Mailbox::new();
        mbox.publish(b'A');
        assert_eq!(mbox.try_consume(), Some(b'A'));
        // No new publish: nothing to deliver, not the stale value again.
        assert_eq!(mbox.try_consume(), None);

        mbox.publish(b'B');
        assert_eq!(mbox.try_consume(), Some(b'B'));
    }
}
