use colored::Colorize;
use keeplink::api::{CmdMessage, MessageLevel};
use keeplink::model::Bookmark;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_COLUMN_MAX: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_bookmarks(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks yet.");
        return;
    }

    let name_width = bookmarks
        .iter()
        .map(|b| b.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_COLUMN_MAX);

    for bookmark in bookmarks {
        let name = truncate_to_width(&bookmark.name, NAME_COLUMN_MAX);
        let padding = name_width.saturating_sub(name.width());
        println!(
            "  {}{}  {}",
            name.bold(),
            " ".repeat(padding),
            bookmark.url.blue().underline()
        );
    }
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
