//! crates/logging/src/exit.rs
//! Action invoked after a fatal message.

use std::fmt;
use std::process;
use std::sync::Arc;

/// Exit status used by [`ExitAction::terminate`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Zero-argument action run after every fatal emission.
///
/// The default terminates the process with [`FATAL_EXIT_CODE`]. Tests replace
/// it with an action that panics (so `catch_unwind` can observe the fatal path)
/// or with [`ExitAction::noop`]. Clones share the same closure.
///
/// # Examples
///
/// ```
/// use logging::ExitAction;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let action = ExitAction::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// action.run();
/// action.clone().run();
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct ExitAction {
    action: Arc<dyn Fn() + Send + Sync>,
    label: &'static str,
}

impl ExitAction {
    /// Wraps an arbitrary closure.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            label: "custom",
        }
    }

    /// Terminates the process with [`FATAL_EXIT_CODE`].
    #[must_use]
    pub fn terminate() -> Self {
        Self {
            action: Arc::new(|| process::exit(FATAL_EXIT_CODE)),
            label: "terminate",
        }
    }

    /// Does nothing; fatal messages are written and execution continues.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            action: Arc::new(|| {}),
            label: "noop",
        }
    }

    /// Runs the action.
    pub fn run(&self) {
        (self.action)();
    }

    /// Reports whether two handles share the same closure.
    #[must_use]
    pub fn same_action(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.action, &other.action)
    }
}

impl Default for ExitAction {
    fn default() -> Self {
        Self::terminate()
    }
}

impl fmt::Debug for ExitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExitAction").field(&self.label).finish()
    }
}
