//! Saved games
//!
//! A save holds only the seed and the words found so far; everything else is
//! regenerated from the seed and the dictionary on load.
//!
//! ```text
//! #seed
//! 1613412345
//! #found
//! grade
//! reading
//! ```

mod format;
mod store;

pub use format::{SaveError, SaveFile};
pub use store::{SaveStore, default_save_path};
