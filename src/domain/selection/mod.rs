//! Selection module - picks the winner before any animation starts.

mod engine;

pub use engine::{select, Selection, SelectionError, MIN_SELECTABLE};
