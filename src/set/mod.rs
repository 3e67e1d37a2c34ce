//! Array-backed set container, its cursor, and its error taxonomy.
//!
//! - [`SlotSet`]: a duplicate-free container over sentinel-marked slots
//! - [`SlotCursor`]: a read-only random-access view over a container's slots
//! - [`SetError`], [`DuplicateElementError`], [`NotFoundError`]: the two
//!   failure kinds raised by the single-element primitives
//!
//! # Examples
//!
//! ```rust
//! use slotset::set::SlotSet;
//!
//! let mut letters = SlotSet::with_capacity(2);
//! assert!(letters.add("a").is_ok());
//! letters += "b";
//! letters += "b";
//! assert_eq!(letters.len(), 2);
//! ```

mod cursor;
mod error;
mod slot_set;

pub use cursor::SlotCursor;
pub use error::{DuplicateElementError, NotFoundError, SetError};
pub use slot_set::SlotSet;
