//! Zipping producers.
//!
//! Two push-style producers cannot be advanced in lockstep: each one only
//! returns once it has produced everything. Zipping therefore needs one of
//! two materialization strategies, chosen explicitly by the caller:
//!
//! | Strategy | Memory | Inputs |
//! |----------|--------|--------|
//! | [`ZipStrategy::Collected`] | every input, in full | any producer |
//! | [`ZipStrategy::Channel`] | `capacity` elements per input | `Send + Sync + 'static` |
//!
//! Both strategies yield the same sequence for the same finite inputs. The
//! channel strategy is slower per element but also works for inputs too
//! large (or infinite) to collect.
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//! use continuable::zip::ZipStrategy;
//!
//! let letters = from_iter(['x', 'y', 'z']);
//! let collected = from_iter(1..=3).zip(letters.clone(), ZipStrategy::Collected)?;
//! let streamed = from_iter(1..=3).zip(letters, ZipStrategy::default())?;
//! assert_eq!(collected.collect(), streamed.collect());
//! # Ok::<(), continuable::ContinuableError>(())
//! ```

#[cfg(feature = "channel")]
mod channel;
mod collected;

#[cfg(feature = "channel")]
pub use crate::bridge::DEFAULT_CHANNEL_CAPACITY;
#[cfg(feature = "channel")]
pub use channel::{ZipAllChannel, ZipChannel, zip_all_channel, zip_channel};
pub use collected::{ZipAllCollected, ZipCollected, zip_all_collected, zip_collected};

use crate::error::ContinuableError;
use crate::producer::{BoxContinuable, Continuable, ContinuableExt};

/// How [`zip`] materializes its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZipStrategy {
    /// Collect every input into a `Vec`, then pair the elements up.
    Collected,
    /// Run every input on a background task feeding a bounded channel.
    #[cfg(feature = "channel")]
    Channel {
        /// The number of elements buffered per input.
        capacity: usize,
    },
}

impl Default for ZipStrategy {
    /// The channel strategy with [`DEFAULT_CHANNEL_CAPACITY`] when the
    /// `channel` feature is enabled, `Collected` otherwise.
    fn default() -> Self {
        #[cfg(feature = "channel")]
        {
            Self::Channel {
                capacity: DEFAULT_CHANNEL_CAPACITY,
            }
        }
        #[cfg(not(feature = "channel"))]
        {
            Self::Collected
        }
    }
}

/// Zips two producers with the given strategy.
///
/// # Errors
///
/// Returns [`ContinuableError::InvalidArgument`] for a channel strategy with
/// zero capacity, and [`ContinuableError::Blocking`] for a channel strategy
/// requested from a thread that cannot block.
#[cfg(feature = "channel")]
pub fn zip<A, B>(
    left: A,
    right: B,
    strategy: ZipStrategy,
) -> Result<BoxContinuable<'static, (A::Item, B::Item)>, ContinuableError>
where
    A: Continuable + Send + Sync + 'static,
    A::Item: Send + 'static,
    B: Continuable + Send + Sync + 'static,
    B::Item: Send + 'static,
{
    match strategy {
        ZipStrategy::Collected => Ok(zip_collected(left, right).boxed()),
        ZipStrategy::Channel { capacity } => Ok(zip_channel(left, right, capacity)?.boxed()),
    }
}

/// Zips two producers with the given strategy.
///
/// # Errors
///
/// Never fails without the `channel` feature; the `Result` keeps the
/// signature stable across features.
#[cfg(not(feature = "channel"))]
pub fn zip<'a, A, B>(
    left: A,
    right: B,
    strategy: ZipStrategy,
) -> Result<BoxContinuable<'a, (A::Item, B::Item)>, ContinuableError>
where
    A: Continuable + 'a,
    B: Continuable + 'a,
{
    match strategy {
        ZipStrategy::Collected => Ok(zip_collected(left, right).boxed()),
    }
}

/// Zips any number of producers of one item type into rows with the given
/// strategy.
///
/// # Errors
///
/// Returns [`ContinuableError::InvalidArgument`] for a channel strategy with
/// zero capacity, and [`ContinuableError::Blocking`] for a channel strategy
/// requested from a thread that cannot block.
#[cfg(feature = "channel")]
pub fn zip_all<I>(
    producers: I,
    strategy: ZipStrategy,
) -> Result<BoxContinuable<'static, Vec<<I::Item as Continuable>::Item>>, ContinuableError>
where
    I: IntoIterator,
    I::Item: Continuable + Send + Sync + 'static,
    <I::Item as Continuable>::Item: Send + 'static,
{
    match strategy {
        ZipStrategy::Collected => Ok(zip_all_collected(producers).boxed()),
        ZipStrategy::Channel { capacity } => Ok(zip_all_channel(producers, capacity)?.boxed()),
    }
}

/// Zips any number of producers of one item type into rows with the given
/// strategy.
///
/// # Errors
///
/// Never fails without the `channel` feature.
#[cfg(not(feature = "channel"))]
pub fn zip_all<'a, I>(
    producers: I,
    strategy: ZipStrategy,
) -> Result<BoxContinuable<'a, Vec<<I::Item as Continuable>::Item>>, ContinuableError>
where
    I: IntoIterator,
    I::Item: Continuable + 'a,
{
    match strategy {
        ZipStrategy::Collected => Ok(zip_all_collected(producers).boxed()),
    }
}
