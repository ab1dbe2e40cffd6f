//! JSON-lines event protocol

use serde::Serialize;
use std::io::{BufRead, Write};

use tabpad_core::{KeyValueStore, Notepad, NotepadView, UiEvent};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Decode one input line and apply it.
pub fn handle_line<S: KeyValueStore>(
    notepad: &mut Notepad<S>,
    line: &str,
) -> CommandResult<NotepadView> {
    match serde_json::from_str::<UiEvent>(line) {
        Ok(event) => CommandResult::ok(notepad.handle(event)),
        Err(e) => {
            tracing::warn!(line = %line, "Rejected malformed event: {}", e);
            CommandResult::err(format!("Invalid event: {}", e))
        }
    }
}

/// Answer every non-blank input line with one JSON result line until the
/// input ends.
pub fn serve<S, R, W>(notepad: &mut Notepad<S>, mut input: R, mut output: W) -> anyhow::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        let result = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(notepad, line),
            Err(e) => {
                tracing::warn!(len = buf.len(), "Rejected event that is not UTF-8: {}", e);
                CommandResult::err(format!("Invalid event: {}", e))
            }
        };
        serde_json::to_writer(&mut output, &result)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    Ok(())
}
