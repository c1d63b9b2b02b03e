//! Feeds a JSON-lines event script through a recorder session.

use std::io::{BufRead, Write};

use keychord_common::KeychordError;
use keychord_platform::{
    CapturedEvent, ClassificationResult, Conflict, ConflictPrompt, ConflictRegistry,
    OverrideChoice, Recorder, Shortcut,
};

/// Headless stand-in for the host's conflict alerts.
pub struct LogPrompt {
    choice: OverrideChoice,
}

impl LogPrompt {
    pub fn new(force_system_override: bool) -> Self {
        let choice = if force_system_override {
            OverrideChoice::ForceOverride
        } else {
            OverrideChoice::KeepDefault
        };
        Self { choice }
    }
}

impl ConflictPrompt for LogPrompt {
    fn notify_conflict(&mut self, shortcut: &Shortcut, conflict: &Conflict) {
        match conflict {
            Conflict::Menu { title } => {
                tracing::warn!(%shortcut, "shortcut is used by menu item \"{title}\"")
            }
            _ => tracing::warn!(%shortcut, "shortcut is not allowed"),
        }
    }

    fn confirm_system_override(&mut self, shortcut: &Shortcut) -> OverrideChoice {
        tracing::warn!(%shortcut, choice = ?self.choice, "shortcut is reserved by the system");
        self.choice
    }
}

/// Classify every event in `input`, writing one JSON result per line to
/// `out`. Blank lines and `#` comments are skipped.
///
/// Returns the number of events handled.
pub fn run<R, W>(
    recorder: &mut Recorder,
    registry: &dyn ConflictRegistry,
    prompt: &mut dyn ConflictPrompt,
    input: R,
    out: &mut W,
) -> Result<usize, KeychordError>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: CapturedEvent = serde_json::from_str(line)
            .map_err(|e| KeychordError::Other(format!("line {}: {e}", index + 1)))?;
        let result = recorder.handle_event(&event, registry, prompt);
        write_result(out, &result)?;
        handled += 1;
    }
    Ok(handled)
}

fn write_result<W: Write>(
    out: &mut W,
    result: &ClassificationResult,
) -> Result<(), KeychordError> {
    let json =
        serde_json::to_string(result).map_err(|e| KeychordError::Other(e.to_string()))?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Final line: the persisted record of the bound shortcut, or `null`.
pub fn write_bound<W: Write>(out: &mut W, recorder: &Recorder) -> Result<(), KeychordError> {
    match recorder.shortcut() {
        Some(shortcut) => writeln!(out, "{}", shortcut.encode())?,
        None => writeln!(out, "null")?,
    }
    Ok(())
}
