//! # bidstore-cli
//!
//! The interactive front end for bidstore: a numbered menu over a
//! backend chosen at startup, plus timed bulk loading and sorting.
//!
//! The menu core is platform-independent - it talks to the user only
//! through the [`Console`](console::Console) trait, so tests drive it
//! with a scripted console while the binary wires up a Reedline
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Tree-backed store over the default export
//! bidstore
//!
//! # Hash-backed store with a custom bucket count
//! bidstore --backend hash --buckets 557 --source sales.csv --key 98109
//! ```

pub mod console;
pub mod menu;
pub mod session;
pub mod terminal;

pub use console::{Console, ConsoleError, LineEvent};
pub use session::{Backend, Session};
