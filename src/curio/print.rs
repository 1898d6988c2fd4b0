use colored::Colorize;
use curio::api::{CmdMessage, MessageLevel};
use curio::model::{Artwork, GalleryItem};
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 8;
const SAVED_MARKER: &str = "●";

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

pub(super) fn print_artworks(artworks: &[Artwork], saved: &[GalleryItem]) {
    if artworks.is_empty() {
        println!("No artworks found.");
        return;
    }

    let saved_ids: HashSet<i64> = saved.iter().map(|it| it.artwork.id).collect();

    for art in artworks {
        let marker = if saved_ids.contains(&art.id) {
            format!("{} ", SAVED_MARKER).green().to_string()
        } else {
            "  ".to_string()
        };

        let id_str = format!("{:>width$}", art.id, width = ID_WIDTH);
        let artist = format!("— {}", art.artist);

        let fixed = 2 + ID_WIDTH + 2 + artist.width() + 1;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&art.title, available);

        println!("{}{}  {} {}", marker, id_str.yellow(), title, artist.dimmed());
    }
}

pub(super) fn print_gallery(items: &[GalleryItem]) {
    if items.is_empty() {
        println!("Gallery is empty.");
        return;
    }

    for item in items {
        let id_str = format!("{:>width$}", item.artwork.id, width = ID_WIDTH);
        println!(
            "{}  {} {}",
            id_str.yellow(),
            item.artwork.title.bold(),
            format!("— {}", item.artwork.artist).dimmed()
        );
        if !item.note.is_empty() {
            let indent = " ".repeat(ID_WIDTH + 2);
            println!("{}{}", indent, item.note.italic());
        }
    }
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
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
