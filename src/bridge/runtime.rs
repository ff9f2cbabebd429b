//! The shared tokio runtime behind the channel bridge.
//!
//! Producers pushed into a channel run on the blocking pool of a lazily
//! initialized multi-thread runtime. The runtime is created once, on first
//! use, and lives for the rest of the process.
//!
//! When the caller is already inside a tokio runtime, that runtime is used
//! instead, so tracing context and runtime metrics stay with the caller.
//!
//! # Runtime Flavor Considerations
//!
//! Pulling from a channel blocks the calling thread. Inside a multi-thread
//! runtime that is done with `block_in_place`; inside a current-thread
//! runtime it is impossible and reported as
//! [`BlockingError::CurrentThreadRuntime`].

use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

// =============================================================================
// Global Runtime
// =============================================================================

/// Global tokio runtime initialized lazily on first access.
///
/// One worker thread per CPU core; the channel bridge only uses its blocking
/// pool, so no I/O or timer drivers are enabled.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    let workers = num_cpus::get();
    tracing::debug!(workers, "initializing global continuable runtime");
    Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("continuable-worker")
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the global runtime, initializing it on first call.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

// =============================================================================
// Handle Caching
// =============================================================================

thread_local! {
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns a handle to the current runtime, or to the global one when the
/// caller is outside any runtime.
///
/// The global handle is cached per thread.
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current_handle) = Handle::try_current() {
        return current_handle;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}

// =============================================================================
// Blocking Error
// =============================================================================

/// Why the calling thread cannot block on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingError {
    /// The caller is on a current-thread runtime, where `block_in_place` is
    /// not supported.
    CurrentThreadRuntime,

    /// The caller is on a runtime of a flavor this crate does not know how
    /// to block on.
    UnsupportedRuntimeFlavor,
}

impl fmt::Display for BlockingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentThreadRuntime => write!(
                formatter,
                "cannot block on a channel in a current-thread runtime: \
                 block_in_place is only supported in multi-thread runtimes"
            ),
            Self::UnsupportedRuntimeFlavor => write!(
                formatter,
                "cannot block on a channel: \
                 the runtime flavor is not supported for blocking execution"
            ),
        }
    }
}

impl Error for BlockingError {}

// =============================================================================
// Blocking Execution
// =============================================================================

/// Checks that the calling thread may block, without blocking.
///
/// # Errors
///
/// Returns the same error [`try_run_blocking`] would return from this thread.
pub fn ensure_blocking_allowed() -> Result<(), BlockingError> {
    match Handle::try_current() {
        Err(_) => Ok(()),
        Ok(current_handle) => match current_handle.runtime_flavor() {
            RuntimeFlavor::MultiThread => Ok(()),
            RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
            _ => Err(BlockingError::UnsupportedRuntimeFlavor),
        },
    }
}

/// Runs `future` to completion on the calling thread.
///
/// - Inside a multi-thread runtime: `block_in_place` on the current handle.
/// - Inside a current-thread runtime: refused.
/// - Outside any runtime: `block_on` on the global runtime.
///
/// # Errors
///
/// Returns [`BlockingError::CurrentThreadRuntime`] when called from within a
/// current-thread runtime, and [`BlockingError::UnsupportedRuntimeFlavor`]
/// for runtime flavors added after this crate was written.
#[inline]
pub fn try_run_blocking<F, T>(future: F) -> Result<T, BlockingError>
where
    F: Future<Output = T>,
{
    if let Ok(current_handle) = Handle::try_current() {
        match current_handle.runtime_flavor() {
            RuntimeFlavor::MultiThread => Ok(tokio::task::block_in_place(|| {
                current_handle.block_on(future)
            })),
            RuntimeFlavor::CurrentThread => Err(BlockingError::CurrentThreadRuntime),
            _ => Err(BlockingError::UnsupportedRuntimeFlavor),
        }
    } else {
        Ok(global().block_on(future))
    }
}
