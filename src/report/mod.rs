mod format;
mod reporter;

pub use format::*;
pub use reporter::{ConsoleReporter, MemoryReporter, Reporter};
