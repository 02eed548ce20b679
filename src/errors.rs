use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing the terminal: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error("Failed to install the interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}
