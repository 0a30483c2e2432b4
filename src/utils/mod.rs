//! Some utility functions

use csscolorparser::Color;

use crate::traits::Record;
use crate::collection::Collection;

/// Initials of a person name, as displayed in avatars (e.g. `"Alex Morgan"` gives `"AM"`)
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// A human-readable size (e.g. `2.4 MB`)
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// An opaque colour from its 8-bit components
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f64 / 255.0,
        g: g as f64 / 255.0,
        b: b as f64 / 255.0,
        a: 1.0,
    }
}

/// A debug utility that pretty-prints the visible part of a collection
pub fn print_collection<R: Record>(title: &str, collection: &Collection<R>) {
    let filter = match (collection.search_term(), collection.filter_key()) {
        ("", Some(key)) => key.to_string(),
        ("", None) => format!("{:?}", collection.filter()),
        (term, _) => format!("search {:?}", term),
    };
    println!("{} ({}, {} of {} shown)", title, filter, collection.filtered_view().count(), collection.len());

    for record in collection.filtered_view() {
        print_record(collection, record);
    }
}

pub fn print_record<R: Record>(collection: &Collection<R>, record: &R) {
    let selection = if collection.is_selected(record.id()) { "x" } else { " " };
    let status = match record.status() {
        None => String::new(),
        Some(s) => format!(" [{:?}]", s),
    };
    println!("    [{}] {}\t{}{}\t{}", selection, record.id(), record.name(), status, record.flags().names().join(","));
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("  emma  davis "), "ED");
        assert_eq!(initials("Design Team Lead"), "DTL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(2_516_582), "2.4 MB");
        assert_eq!(human_size(29_989_273), "28.6 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(0xec, 0x48, 0x99).to_hex_string(), "#ec4899");
    }
}
