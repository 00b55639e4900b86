//! Domain layer containing the decision logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine)
//! - `options` - Candidates and the editable option set
//! - `selection` - Uniform winner selection
//! - `animation` - Reveal methods and their tick-driven drivers
//! - `history` - Recorded decisions and the bounded log

pub mod animation;
pub mod foundation;
pub mod history;
pub mod options;
pub mod selection;
