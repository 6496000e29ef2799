//! Interactive terminal session
//!
//! Reads input lines, turns them into `InputEvent`s and drives the feed
//! client. Feed operations report their own failures to the log; the
//! session only prints short acknowledgements and feedback for its own
//! commands. A line that is not valid UTF-8 is reported and skipped.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use super::feed_client::{FeedClient, RefreshTrigger, SubmitOutcome};
use super::input::{parse_input, InputEvent};
use crate::domain::entities::DraftFile;
use crate::domain::ports::{Clipboard, FeedView, ShareStore};
use crate::feed::{render_draft, render_help};

/// Run until `/quit` or end of input
pub async fn run_session<S, C, F, V, R, W>(
    client: &FeedClient<S, C, F, V>,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    S: ShareStore,
    C: Clipboard,
    F: Clipboard,
    V: FeedView,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "skipping input line that is not valid UTF-8");
            writeln!(out, "Input is not valid UTF-8, line ignored.")?;
            continue;
        };

        let event = match parse_input(line) {
            Ok(event) => event,
            Err(e) => {
                writeln!(out, "{} (try /help)", e)?;
                continue;
            }
        };
        debug!(?event, "input");

        if !handle_event(client, event, out).await? {
            break;
        }
    }

    Ok(())
}

/// Returns `false` when the session should end
async fn handle_event<S, C, F, V, W>(
    client: &FeedClient<S, C, F, V>,
    event: InputEvent,
    out: &mut W,
) -> Result<bool>
where
    S: ShareStore,
    C: Clipboard,
    F: Clipboard,
    V: FeedView,
    W: Write,
{
    match event {
        InputEvent::Commit(text) => {
            if !text.is_empty() {
                client.type_text(&text);
            }
            report_submit(client.submit().await, out)?;
        }
        InputEvent::LineBreak(text) => {
            client.type_text(&text);
            client.insert_line_break();
        }
        InputEvent::Send => {
            report_submit(client.submit().await, out)?;
        }
        InputEvent::SelectFile(path) => match DraftFile::load(&expand_home(&path)).await {
            Ok(file) => {
                writeln!(out, "Selected: {}", file.name)?;
                client.select_file(file);
            }
            Err(e) => writeln!(out, "{}", e)?,
        },
        InputEvent::ClearFile => client.clear_file(),
        InputEvent::ClearText => client.clear_text(),
        InputEvent::ShowDraft => write!(out, "{}", render_draft(&client.draft()))?,
        InputEvent::Copy(entry) => {
            if let Err(e) = client.copy_entry(entry).await {
                writeln!(out, "{}", e)?;
            }
        }
        InputEvent::Delete(entry) => {
            if let Err(e) = client.delete_entry(entry).await {
                writeln!(out, "{}", e)?;
            }
        }
        InputEvent::Save(entry, path) => {
            match client.save_image(entry, &expand_home(&path)).await {
                Ok(saved) => writeln!(out, "Saved to {}", saved.display())?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        InputEvent::Refresh => {
            client.refresh(RefreshTrigger::UserAction).await;
        }
        InputEvent::Help => write!(out, "{}", render_help())?,
        InputEvent::Quit => return Ok(false),
    }

    out.flush()?;
    Ok(true)
}

/// A failed submit has already been logged; the kept draft is its feedback
fn report_submit<W: Write>(outcome: SubmitOutcome, out: &mut W) -> Result<()> {
    match outcome {
        SubmitOutcome::Sent => writeln!(out, "Sent.")?,
        SubmitOutcome::Skipped => writeln!(out, "Nothing to send.")?,
        SubmitOutcome::Failed => {}
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
