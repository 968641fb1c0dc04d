use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::folder_scanner::{DuplicateSet, RemovedFile};
use crate::runner::Outcome;

/// The points where a run talks to the user.
pub trait UserInteraction {
    /// Shows the files slated for deletion and asks whether to go ahead.
    fn confirm(&mut self, pending: &DuplicateSet) -> io::Result<bool>;

    /// Reports how the run ended.
    fn notify(&mut self, outcome: &Outcome) -> io::Result<()>;

    /// Called once for every file deleted after confirmation.
    fn deleted(&mut self, _file: &RemovedFile) -> io::Result<()> {
        Ok(())
    }
}

/// Prompts on a line-based terminal.
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
}

impl ConsoleInteraction<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        ConsoleInteraction::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleInteraction { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Anything but an explicit yes declines; unknown answers ask again.
    fn prompt_confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let mut input = String::new();

        loop {
            input.clear();

            write!(self.output, "{} (y/N): ", prompt)?;
            self.output.flush()?;

            if self.input.read_line(&mut input)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match input.trim().to_uppercase().as_str() {
                "Y" | "YES" => return Ok(true),
                "N" | "NO" | "" => return Ok(false),
                _ => continue,
            }
        }
    }
}

impl<R: BufRead, W: Write> UserInteraction for ConsoleInteraction<R, W> {
    fn confirm(&mut self, pending: &DuplicateSet) -> io::Result<bool> {
        writeln!(self.output, "{}", pending)?;
        self.prompt_confirm("Delete these files? One copy of each file will be kept.")
    }

    fn notify(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()
    }

    fn deleted(&mut self, file: &RemovedFile) -> io::Result<()> {
        writeln!(self.output, "Deleted: {}", file.path.display())
    }
}

/// Answers yes without asking; still prints what is about to be deleted.
pub struct AssumeYes<W> {
    output: W,
}

impl AssumeYes<Stdout> {
    pub fn stdout() -> Self {
        AssumeYes::new(io::stdout())
    }
}

impl<W: Write> AssumeYes<W> {
    pub fn new(output: W) -> Self {
        AssumeYes { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> UserInteraction for AssumeYes<W> {
    fn confirm(&mut self, pending: &DuplicateSet) -> io::Result<bool> {
        writeln!(self.output, "{}", pending)?;
        writeln!(self.output, "Deleting without confirmation (--yes).")?;
        Ok(true)
    }

    fn notify(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()
    }

    fn deleted(&mut self, file: &RemovedFile) -> io::Result<()> {
        writeln!(self.output, "Deleted: {}", file.path.display())
    }
}
