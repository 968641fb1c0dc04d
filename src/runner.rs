use std::fmt;
use std::path::Path;

use log::{error, info, warn};

use crate::config::{Action, Config};
use crate::error::Error;
use crate::folder_scanner::{
    find_duplicates, remove_duplicates_with, DuplicateSet, RemovalReport, RemovedFile,
};
use crate::interaction::UserInteraction;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    NoDuplicates,
    /// Report mode: duplicates were listed, nothing was deleted.
    Reported(DuplicateSet),
    /// The user declined; nothing was deleted.
    Cancelled(DuplicateSet),
    Completed(RemovalReport),
}

impl Outcome {
    pub fn files_deleted(&self) -> usize {
        match self {
            Outcome::Completed(report) => report.files_deleted,
            _ => 0,
        }
    }

    pub fn bytes_reclaimed(&self) -> u64 {
        match self {
            Outcome::Completed(report) => report.bytes_reclaimed,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoDuplicates => {
                write!(f, "No duplicate files were found in the selected folder.")
            }
            Outcome::Reported(duplicates) => {
                write!(f, "{}\nReport only: no files were deleted.", duplicates)
            }
            Outcome::Cancelled(_) => write!(f, "Cancelled: no files were deleted."),
            Outcome::Completed(report) => {
                writeln!(f, "Operation complete!")?;
                writeln!(f, "Deleted {} duplicate files.", report.files_deleted)?;
                write!(
                    f,
                    "Freed up {:.2} MB of space.",
                    report.megabytes_reclaimed()
                )?;
                if !report.all_succeeded() {
                    write!(f, "\n{} files could not be deleted:", report.failures.len())?;
                    for failure in &report.failures {
                        write!(f, "\n  {}", failure)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Scans `root`, then depending on the action and the user's answer deletes
/// the duplicates found. The outcome is passed to `interaction` before it is
/// returned.
///
/// Interaction failures are errors only up to the point where deletion
/// starts. Once files are gone the outcome is always returned, and a failed
/// echo or summary is only logged.
///
/// Idle -> Scanning -> NoDuplicates | AwaitingConfirmation -> Deleting -> Summary | Cancelled
pub fn run(
    root: &Path,
    config: &Config,
    interaction: &mut dyn UserInteraction,
) -> Result<Outcome, Error> {
    info!("Scanning for duplicate files in: {}", root.display());
    let duplicates = find_duplicates(root, config.block_size())?;

    let outcome = if duplicates.is_empty() {
        Outcome::NoDuplicates
    } else {
        match config.action {
            Action::Report => Outcome::Reported(duplicates),
            Action::Delete => {
                if interaction.confirm(&duplicates)? {
                    let report = remove_duplicates_with(&duplicates, &mut |file: &RemovedFile| {
                        if let Err(err) = interaction.deleted(file) {
                            warn!("Could not echo deletion of {}: {}", file.path.display(), err);
                        }
                    });
                    Outcome::Completed(report)
                } else {
                    info!("Deletion cancelled");
                    Outcome::Cancelled(duplicates)
                }
            }
        }
    };

    match interaction.notify(&outcome) {
        Ok(()) => Ok(outcome),
        Err(err) if matches!(outcome, Outcome::Completed(_)) => {
            error!("Could not show the summary: {}", err);
            Ok(outcome)
        }
        Err(err) => Err(err.into()),
    }
}
