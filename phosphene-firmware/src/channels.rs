//! Inter-task communication channels
//!
//! Single-slot overwrite mailboxes connecting the sampling tasks to their
//! consumers. Each mailbox has exactly one producer and one consumer;
//! stale samples are overwritten, never queued.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use phosphene_core::mailbox::Mailbox;

/// Newly pressed key from the keypad task, consumed by the display task.
pub static KEY_PRESSED: Mailbox<CriticalSectionRawMutex, u8> = Mailbox::new();

/// Raw pushbutton sample from the buttons task, consumed by the RGB task.
pub static BUTTON_SAMPLE: Mailbox<CriticalSectionRawMutex, u32> = Mailbox::new();
