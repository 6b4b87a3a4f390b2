//! Plain-text rendering of pages, records and form errors.

use desk_model::{Message, UserRecord, ValidationError};
use desk_store::Page;
use std::io::{self, Write};

const TITLE_WIDTH: usize = 32;
const BODY_WIDTH: usize = 48;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;

/// Collapses whitespace runs (bodies often contain newlines) and cuts the
/// text to `max` characters, marking the cut with `...`.
pub fn clip(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub fn message_row(out: &mut impl Write, message: &Message) -> io::Result<()> {
    writeln!(
        out,
        "{:<5} {:<tw$} {}",
        message.id,
        clip(&message.title, TITLE_WIDTH),
        clip(&message.body, BODY_WIDTH),
        tw = TITLE_WIDTH,
    )
}

pub fn user_row(out: &mut impl Write, user: &UserRecord) -> io::Result<()> {
    writeln!(
        out,
        "{:<5} {:<nw$} {:<ew$} {}",
        user.id,
        clip(&user.name, NAME_WIDTH),
        clip(&user.email, EMAIL_WIDTH),
        user.phone,
        nw = NAME_WIDTH,
        ew = EMAIL_WIDTH,
    )
}

pub fn message_page(out: &mut impl Write, page: &Page<Message>) -> io::Result<()> {
    writeln!(out, "{:<5} {:<tw$} BODY", "ID", "TITLE", tw = TITLE_WIDTH)?;
    for message in &page.rows {
        message_row(out, message)?;
    }
    footer(out, page, "messages")
}

pub fn user_page(out: &mut impl Write, page: &Page<UserRecord>) -> io::Result<()> {
    writeln!(
        out,
        "{:<5} {:<nw$} {:<ew$} PHONE",
        "ID",
        "NAME",
        "EMAIL",
        nw = NAME_WIDTH,
        ew = EMAIL_WIDTH,
    )?;
    for user in &page.rows {
        user_row(out, user)?;
    }
    footer(out, page, "users")
}

fn footer<R>(out: &mut impl Write, page: &Page<R>, noun: &str) -> io::Result<()> {
    writeln!(
        out,
        "Page {} of {} ({} {noun})",
        page.number,
        page.page_count(),
        page.total
    )
}

pub fn validation_errors(out: &mut impl Write, errors: &[ValidationError]) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{error}")?;
    }
    Ok(())
}
