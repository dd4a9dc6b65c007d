//! Keypad press-edge detection and key history
//!
//! The keypad driver reports a raw `(status, key)` pair every scan. The
//! edge detector turns that stream into discrete events: a key press is
//! reported exactly once, on the no-key to single-key transition, no matter
//! how long the key is held. The display side keeps the last two pressed
//! keys in a [`KeyHistory`].

/// Sentinel key value meaning "no key seen yet".
///
/// Renders as a blank digit through the segment decoder.
pub const NO_KEY: u8 = b'x';

/// Keypad driver status for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyStatus {
    /// No key is pressed
    NoKey,
    /// Exactly one key is pressed
    SingleKey,
    /// More than one key is pressed (invalid input)
    MultiKey,
}

/// Outcome of feeding one scan into the edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyScan {
    /// Key that was newly pressed this scan, if any
    pub pressed: Option<u8>,
    /// Multiple keys went down this scan (report once per transition)
    pub multi_key: bool,
    /// Status differs from the previous scan
    pub status_changed: Option<KeyStatus>,
}

/// Detects key-down edges in the raw keypad status stream.
///
/// A held key must publish exactly once; only the no-key to single-key
/// transition counts as a press.
pub struct KeyEdgeDetector {
    previous: KeyStatus,
}

impl KeyEdgeDetector {
    pub const fn new() -> Self {
        Self {
            previous: KeyStatus::NoKey,
        }
    }

    /// Feed one `(status, key)` scan result and report what happened.
    pub fn update(&mut self, status: KeyStatus, key: u8) -> KeyScan {
        let pressed = if status == KeyStatus::SingleKey && self.previous == KeyStatus::NoKey {
            Some(key)
        } else {
            None
        };

        let multi_key = status == KeyStatus::MultiKey && status != self.previous;

        let status_changed = if status != self.previous {
            Some(status)
        } else {
            None
        };

        self.previous = status;

        KeyScan {
            pressed,
            multi_key,
            status_changed,
        }
    }
}

impl Default for KeyEdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Last two pressed keys, newest first.
///
/// Owned by the display task; both fields shift together when a new key
/// arrives so the pair is always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHistory {
    current: u8,
    previous: u8,
}

impl KeyHistory {
    pub const fn new() -> Self {
        Self {
            current: NO_KEY,
            previous: NO_KEY,
        }
    }

    /// Record a newly pressed key, shifting the old current key back.
    pub fn push(&mut self, key: u8) {
        self.previous = self.current;
        self.current = key;
    }

    /// Most recently pressed key (right display digit).
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Key pressed before the current one (left display digit).
    pub fn previous(&self) -> u8 {
        self.previous
    }
}

impl Default for KeyHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_reported_once() {
        let mut det = KeyEdgeDetector::new();

        let scan = det.update(KeyStatus::SingleKey, b'7');
        assert_eq!(scan.pressed, Some(b'7'));

        // Held key: no further press events while status stays SingleKey.
        for _ in 0..5 {
            let scan = det.update(KeyStatus::SingleKey, b'7');
            assert_eq!(scan.pressed, None);
        }

        // Release and press again: a new edge.
        det.update(KeyStatus::NoKey, 0);
        let scan = det.update(KeyStatus::SingleKey, b'3');
        assert_eq!(scan.pressed, Some(b'3'));
    }

    #[test]
    fn test_single_key_after_multi_key_is_not_an_edge() {
        let mut det = KeyEdgeDetector::new();

        det.update(KeyStatus::MultiKey, 0);
        // Rolling off a chord onto a single key is not a fresh press.
        let scan = det.update(KeyStatus::SingleKey, b'5');
        assert_eq!(scan.pressed, None);
    }

    #[test]
    fn test_multi_key_reported_once_per_transition() {
        let mut det = KeyEdgeDetector::new();

        let scan = det.update(KeyStatus::MultiKey, 0);
        assert!(scan.multi_key);

        let scan = det.update(KeyStatus::MultiKey, 0);
        assert!(!scan.multi_key);

        det.update(KeyStatus::NoKey, 0);
        let scan = det.update(KeyStatus::MultiKey, 0);
        assert!(scan.multi_key);
    }

    #[test]
    fn test_status_change_reporting() {
        let mut det = KeyEdgeDetector::new();

        // Initial state is NoKey, so the first NoKey scan is not a change.
        let scan = det.update(KeyStatus::NoKey, 0);
        assert_eq!(scan.status_changed, None);

        let scan = det.update(KeyStatus::SingleKey, b'1');
        assert_eq!(scan.status_changed, Some(KeyStatus::SingleKey));

        let scan = det.update(KeyStatus::SingleKey, b'1');
        assert_eq!(scan.status_changed, None);

        let scan = det.update(KeyStatus::NoKey, 0);
        assert_eq!(scan.status_changed, Some(KeyStatus::NoKey));
    }

    #[test]
    fn test_history_starts_blank() {
        let hist = KeyHistory::new();
        assert_eq!(hist.current(), NO_KEY);
        assert_eq!(hist.previous(), NO_KEY);
    }

    #[test]
    fn test_history_shift() {
        let mut hist = KeyHistory::new();

        hist.push(b'7');
        assert_eq!((hist.current(), hist.previous()), (b'7', NO_KEY));

        hist.push(b'B');
        assert_eq!((hist.current(), hist.previous()), (b'B', b'7'));
    }

    #[test]
    fn test_scan_stream_through_mailbox_to_history() {
        // Full pipeline as the tasks run it: raw scans through the edge
        // detector, press edges through an overwrite mailbox, consumer
        // folds them into the display history.
        use embassy_sync::blocking_mutex::raw::NoopRawMutex;

        use crate::mailbox::Mailbox;

        let mbox: Mailbox<NoopRawMutex, u8> = Mailbox::new();
        let mut det = KeyEdgeDetector::new();
        let mut hist = KeyHistory::new();

        let scans = [
            (KeyStatus::NoKey, 0),
            (KeyStatus::SingleKey, b'7'),
            (KeyStatus::SingleKey, b'7'), // held
            (KeyStatus::NoKey, 0),
            (KeyStatus::SingleKey, b'B'),
            (KeyStatus::NoKey, 0),
        ];

        for (status, key) in scans {
            if let Some(pressed) = det.update(status, key).pressed {
                mbox.publish(pressed);
            }
            if let Some(new_key) = mbox.try_consume() {
                hist.push(new_key);
            }
        }

        assert_eq!((hist.current(), hist.previous()), (b'B', b'7'));
    }

    #[test]
    fn test_history_fold_tracks_last_two_edges() {
        // Edges '7', 'B', hold (no edge), '3' =>
        // (x,x) -> (7,x) -> (B,7) -> (B,7) -> (3,B)
        let mut hist = KeyHistory::new();
        let edges = [Some(b'7'), Some(b'B'), None, Some(b'3')];
        let expected = [
            (b'7', NO_KEY),
            (b'B', b'7'),
            (b'B', b'7'),
            (b'3', b'B'),
        ];

        for (edge, want) in edges.iter().zip(expected) {
            if let Some(key) = edge {
                hist.push(*key);
            }
            assert_eq!((hist.current(), hist.previous()), want);
        }
    }
}
