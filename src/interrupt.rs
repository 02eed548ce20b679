use std::io::{self, Write};
use std::process;

use crate::errors::AppError;

/// Ctrl-C ends the session the same way end of input does.
///
/// The handler writes through an unlocked `Stdout`, so callers must not hold
/// a `StdoutLock` while blocked on input.
pub fn exit_on_interrupt() -> Result<(), AppError> {
    ctrlc::set_handler(|| {
        tracing::info!("interrupted");
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "\nExiting...");
        let _ = stdout.flush();
        process::exit(0);
    })?;
    Ok(())
}
