//! Embassy async tasks
//!
//! Each task runs independently, owns its output peripheral outright, and
//! communicates only via the mailboxes in `channels`.

pub mod buttons;
pub mod display;
pub mod heartbeat;
pub mod keypad;
pub mod rgb;

pub use buttons::{buttons_task, ButtonsConfig};
pub use display::{display_task, DisplayConfig};
pub use heartbeat::{heartbeat_task, HeartbeatConfig};
pub use keypad::keypad_task;
pub use rgb::{rgb_task, RgbConfig};
