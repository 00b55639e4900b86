//! Notification Adapters
//!
//! Implementations of the DecisionNotifier port.
//!
//! - **TracingNotifier** - Writes outcomes to the log
//! - **ChannelNotifier** - Forwards outcomes to a UI task over a channel

mod channel_notifier;
mod tracing_notifier;

pub use channel_notifier::{ChannelNotifier, DecisionNotice};
pub use tracing_notifier::TracingNotifier;
