use colored::*;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::error::ShelfError;
use shelf::model::{Book, BookStatus};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 36;
const AUTHOR_WIDTH: usize = 24;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, err: &ShelfError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

/// One row per book: id, title, author, year, status.
pub fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        let status = match book.status {
            BookStatus::Available => book.status.as_str().green(),
            BookStatus::CheckedOut => book.status.as_str().yellow(),
        };
        writeln!(
            out,
            "{:>4}. {} {} {:>5}  {}",
            book.id,
            pad_to_width(&book.title, TITLE_WIDTH),
            pad_to_width(&book.author, AUTHOR_WIDTH),
            book.year,
            status
        )?;
    }
    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
