//! Finds files with identical content under a folder and deletes the
//! redundant copies, keeping the first one found of each.

pub mod config;
pub mod error;
pub mod folder_scanner;
pub mod interaction;
pub mod runner;

pub use config::{Action, Config};
pub use error::{DeletionFailure, Error};
pub use interaction::{AssumeYes, ConsoleInteraction, UserInteraction};
pub use runner::{run, Outcome};
