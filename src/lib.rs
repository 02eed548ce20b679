pub mod cli;
pub mod domain;
pub mod errors;
pub mod interrupt;
pub mod logging;
pub mod prelude;
