//! Options module - the candidates a decision is made between.
//!
//! An [`OptionSet`] is the form-side model; selection and animation only
//! ever see the snapshot returned by [`OptionSet::valid_choices`].

mod choice;
mod option_set;
mod palette;
mod presets;

pub use choice::{position_of, truncate_label, Choice, DEFAULT_WEIGHT, ELLIPSIS};
pub use option_set::{
    OptionAvailability, OptionSet, OptionSetError, MAX_OPTIONS, MAX_TEXT_CHARS, MIN_OPTIONS,
};
pub use palette::{color_for_index, next_color, PALETTE};
pub use presets::QuickPreset;
