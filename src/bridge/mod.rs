//! Push-to-pull conversion.
//!
//! A producer cannot be paused between elements, so turning it back into a
//! pull-style [`Iterator`] means running it somewhere else. [`into_channel`]
//! drives the producer on a blocking task of a shared tokio runtime and
//! hands its elements over through a bounded channel: the producer blocks
//! while the channel is full, the consumer blocks while it is empty.
//!
//! This is the only place in the crate where a producer runs off the calling
//! thread, which is why the producer must be `Send + 'static` here.
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//!
//! let mut lines = from_iter(["alpha", "beta"]).into_channel(1)?;
//! assert_eq!(lines.next(), Some("alpha"));
//! assert_eq!(lines.next(), Some("beta"));
//! assert_eq!(lines.next(), None);
//! # Ok::<(), continuable::ContinuableError>(())
//! ```

mod channel;
pub mod runtime;

pub use channel::{ChannelIter, DEFAULT_CHANNEL_CAPACITY, into_channel};
