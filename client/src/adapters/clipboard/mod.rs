//! Clipboard adapters
//!
//! - `SystemClipboard`: the platform clipboard tool of a graphical session
//! - `StagedClipboard`: fallback that stages text in a scratch file and feeds
//!   it to a legacy copy command

pub mod staged;
pub mod system;

pub use staged::StagedClipboard;
pub use system::SystemClipboard;

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::ClipboardError;

/// Where a copy command reads its text from
pub(crate) enum CopyInput<'a> {
    Pipe(&'a [u8]),
    File(std::fs::File),
}

/// Run `command` with the given stdin and wait for it to exit successfully
pub(crate) async fn run_copy_command(
    command: &[String],
    input: CopyInput<'_>,
) -> Result<(), ClipboardError> {
    let (program, args) = command.split_first().ok_or(ClipboardError::Unavailable)?;

    let (stdin, piped) = match input {
        CopyInput::Pipe(bytes) => (Stdio::piped(), Some(bytes)),
        CopyInput::File(file) => (Stdio::from(file), None),
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            program: program.clone(),
            source,
        })?;

    if let Some(bytes) = piped {
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(bytes)
                .await
                .map_err(|source| ClipboardError::Spawn {
                    program: program.clone(),
                    source,
                })?;
            // closing stdin lets the tool see EOF
            drop(stdin);
        }
    }

    let status = child.wait().await.map_err(|source| ClipboardError::Spawn {
        program: program.clone(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed {
            program: program.clone(),
            status: status.to_string(),
        })
    }
}

/// Locate a program the way a shell would
pub(crate) fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let full = dir.join(program);
        if full.is_file() {
            return Some(full);
        }
        let exe = full.with_extension("exe");
        exe.is_file().then_some(exe)
    })
}
