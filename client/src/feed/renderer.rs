//! Feed renderer
//!
//! Renders shares to plain text. Entries are numbered from 1 in display
//! order next to their share id; `/copy`, `/delete` and `/save` take
//! either one.

use chrono::TimeZone;

use crate::domain::entities::{Draft, DraftState, ImageFormat, Share, ShareType};

/// Render the whole feed
pub fn render_feed<Tz: TimeZone>(shares: &[Share], tz: &Tz) -> String {
    let mut buf = String::new();

    buf.push_str("# Shared Feed\n\n");

    if shares.is_empty() {
        buf.push_str("_Nothing shared yet._\n");
        return buf;
    }

    for (i, share) in shares.iter().enumerate() {
        buf.push_str(&render_share(i + 1, share, tz));
        buf.push('\n');
    }

    buf
}

/// One-line pointer at the newest entry, printed right above the prompt
pub fn render_latest<Tz: TimeZone>(shares: &[Share], tz: &Tz) -> Option<String> {
    let share = shares.first()?;
    let summary = match share.share_type {
        ShareType::Text => {
            let first_line = share.content.lines().next().unwrap_or_default();
            truncate(first_line, 60)
        }
        ShareType::Image => describe_image(share),
    };
    Some(format!(
        "latest [1] {} · {}\n",
        format_created_at(share, tz),
        summary
    ))
}

fn render_share<Tz: TimeZone>(index: usize, share: &Share, tz: &Tz) -> String {
    let mut buf = format!(
        "[{}] #{} · {}\n",
        index,
        share.id,
        format_created_at(share, tz)
    );

    if share.is_image() {
        buf.push_str(&format!("    {}\n", describe_image(share)));
    } else {
        for line in share.content.lines() {
            buf.push_str("    ");
            buf.push_str(line);
            buf.push('\n');
        }
        if share.content.is_empty() {
            buf.push_str("    \n");
        }
    }

    buf
}

/// Format `created_at` the way the feed displays it: `2024年1月1日 08:00`
/// in the given zone. Values that fail to parse are shown as sent.
pub fn format_created_at<Tz: TimeZone>(share: &Share, tz: &Tz) -> String {
    match share.created_at_parsed() {
        Some(at) => at
            .with_timezone(tz)
            .naive_local()
            .format("%Y年%-m月%-d日 %H:%M")
            .to_string(),
        None => share.created_at.clone(),
    }
}

fn describe_image(share: &Share) -> String {
    match share.image_bytes() {
        Some(Ok(bytes)) => {
            let kind = ImageFormat::sniff(&bytes)
                .map(|f| f.mime())
                .unwrap_or("image");
            format!("[{}, {}]", kind, human_size(bytes.len()))
        }
        _ => "[image, unreadable payload]".to_string(),
    }
}

fn human_size(len: usize) -> String {
    if len < 1024 {
        format!("{} B", len)
    } else if len < 1024 * 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}

/// Render the pending draft
pub fn render_draft(draft: &Draft) -> String {
    match draft.state() {
        DraftState::Empty => "Draft is empty.\n".to_string(),
        DraftState::TextPending => format!("Draft text:\n{}\n", draft.text()),
        DraftState::FilePending => {
            let mut buf = String::new();
            if let Some(file) = draft.file() {
                buf.push_str(&format!(
                    "Selected: {} ({}, {})\n",
                    file.name,
                    file.mime,
                    human_size(file.bytes.len())
                ));
            }
            if !draft.text().is_empty() {
                buf.push_str("Typed text is kept but not sent while a file is selected.\n");
            }
            buf
        }
    }
}

pub fn render_help() -> String {
    let mut buf = String::new();
    buf.push_str("Type text and press Enter to share it.\n");
    buf.push_str("End a line with `\\` to add a line break instead of sending.\n\n");
    buf.push_str("- `/send` - Send the draft (same as Enter on an empty line)\n");
    buf.push_str("- `/file <path>` - Attach an image (sent instead of any text)\n");
    buf.push_str("- `/unfile` - Drop the attached image\n");
    buf.push_str("- `/cleartext` - Discard typed text\n");
    buf.push_str("- `/draft` - Show the current draft\n");
    buf.push_str("- `/copy N` - Copy entry N to the clipboard\n");
    buf.push_str("- `/delete N` - Delete entry N\n");
    buf.push_str("- `/save N <path>` - Save image entry N to a file\n");
    buf.push_str("- `/refresh` - Reload the feed\n");
    buf.push_str("- `/help` - Show this help\n");
    buf.push_str("- `/quit` - Exit\n\n");
    buf.push_str("N is an entry's position in the feed, or `#id` for its share id.\n");
    buf
}
