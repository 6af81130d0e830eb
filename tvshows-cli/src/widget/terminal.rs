use std::{io::Write, sync::Arc};

use crossbeam_channel::Receiver;
use parking_lot::Mutex;

use super::{Confirm, ListTarget, RowId, TextInput};

/// Console output shared between the widgets that print to it.
pub type SharedOutput = Arc<Mutex<dyn Write + Send>>;

/// Prints the rendered rows, numbered from 1, on every refresh.
pub struct TerminalList {
    rows: Vec<(RowId, String)>,
    out: SharedOutput,
}

impl TerminalList {
    pub fn new(out: SharedOutput) -> Self {
        Self {
            rows: Vec::new(),
            out,
        }
    }

    fn print(&self) -> std::io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out)?;
        if self.rows.is_empty() {
            writeln!(out, "  (no shows)")?;
        }
        for (index, (_, content)) in self.rows.iter().enumerate() {
            writeln!(out, "{:>3}. {}", index + 1, content)?;
        }
        out.flush()
    }
}

impl ListTarget for TerminalList {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, row: RowId, content: String) {
        self.rows.push((row, content));
    }

    fn remove(&mut self, row: RowId) {
        self.rows.retain(|(id, _)| *id != row);
    }

    fn refresh(&mut self) {
        if let Err(err) = self.print() {
            log::error!("failed to print show list: {}", err);
        }
    }
}

/// The title input.  On a terminal the value is whatever was last typed.
#[derive(Default)]
pub struct LineInput {
    value: String,
}

impl TextInput for LineInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Asks on the console and waits for the next input line.
pub struct LineConfirm {
    lines: Receiver<String>,
    out: SharedOutput,
}

impl LineConfirm {
    pub fn new(lines: Receiver<String>, out: SharedOutput) -> Self {
        Self { lines, out }
    }
}

impl Confirm for LineConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        {
            let mut out = self.out.lock();
            if write!(out, "{message} [y/N] ").and_then(|_| out.flush()).is_err() {
                return false;
            }
        }
        match self.lines.recv() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}
