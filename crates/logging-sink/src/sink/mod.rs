mod console;
mod shared;
mod writer;

pub use console::ConsoleStream;
pub use shared::SharedBuffer;
pub use writer::WriterSink;

use std::sync::{Mutex, MutexGuard};

/// Acquires `mutex`, recovering the guard if a previous holder panicked.
pub(crate) fn lock_recovering<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
