use std::io::{self, BufRead, Write};

use crate::error::{BugboardError, Result};

/// Print `prompt` and read one line from stdin.
///
/// Returns `None` at end of input. The trailing newline is stripped.
pub fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run [`prompt_line`] on the blocking pool so async callers are not stalled.
pub async fn prompt_line_async(prompt: String) -> Result<Option<String>> {
    tokio::task::spawn_blocking(move || prompt_line(&prompt))
        .await
        .map_err(|e| BugboardError::Other(format!("prompt task failed: {e}")))?
        .map_err(BugboardError::from)
}

/// Interpret a yes/no answer. Anything that is not an explicit yes is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
