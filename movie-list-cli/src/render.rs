//! Fixed-width text rendering for categories and movie lists.

use std::fmt::Write;

use movie_list_catalog::{Category, Movie};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 40;
const YEAR_WIDTH: usize = 6;
const MINS_WIDTH: usize = 6;
const CATEGORY_WIDTH: usize = 10;
const RULE_WIDTH: usize = 65;

pub(crate) fn welcome() -> String {
    format!("The Movie List Program\n\n{}", menu())
}

pub(crate) fn menu() -> String {
    "COMMAND MENU\n\
     cat  - View movies by category\n\
     year - View movies by year\n\
     add  - Add a movie\n\
     del  - Delete a movie\n\
     exit - Exit the program\n\n"
        .to_string()
}

pub(crate) fn category_list(categories: &[Category]) -> String {
    let mut out = String::from("CATEGORIES\n");
    for category in categories {
        let _ = writeln!(out, "{}. {}", category.id, category.name);
    }
    out.push('\n');
    out
}

/// Render movies as a table headed `MOVIES - <title>`.
pub(crate) fn movie_table(title: &str, movies: &[Movie]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MOVIES - {}", title);
    let _ = writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<YEAR_WIDTH$}{:<MINS_WIDTH$}{:<CATEGORY_WIDTH$}",
        "ID", "Name", "Year", "Mins", "Category",
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for movie in movies {
        let _ = writeln!(
            out,
            "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<YEAR_WIDTH$}{:<MINS_WIDTH$}{:<CATEGORY_WIDTH$}",
            movie.id,
            truncate_str(&movie.name, NAME_WIDTH - 1),
            movie.year,
            movie.minutes,
            movie.category.name,
        );
    }
    out.push('\n');
    out
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airplane() -> Movie {
        Movie {
            id: 1,
            name: "Airplane!".to_string(),
            year: 1980,
            minutes: 88,
            category: Category::new(2, "Comedy"),
        }
    }

    #[test]
    fn table_layout() {
        let table = movie_table("COMEDY", &[airplane()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "MOVIES - COMEDY");
        assert_eq!(
            lines[1],
            format!("ID  {:<40}Year  Mins  Category  ", "Name")
        );
        assert_eq!(lines[2], "-".repeat(65));
        assert_eq!(
            lines[3],
            format!("1   {:<40}1980  88    Comedy    ", "Airplane!")
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "");
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = movie_table("1999", &[]);
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn long_names_keep_columns_aligned() {
        let mut movie = airplane();
        movie.name = "Dr. Strangelove or: How I Learned to Stop Worrying and Love the Bomb".to_string();
        let table = movie_table("COMEDY", &[movie]);
        let row = table.lines().nth(3).unwrap();
        assert_eq!(&row[ID_WIDTH + NAME_WIDTH..ID_WIDTH + NAME_WIDTH + 4], "1980");
        assert!(row.contains("..."));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_str("Amélie", 10), "Amélie");
        assert_eq!(truncate_str("Le fabuleux destin d'Amélie Poulain", 12), "Le fabule...");
        assert_eq!(truncate_str("abcdef", 3), "abc");
    }

    #[test]
    fn category_list_numbers_entries() {
        let text = category_list(&[Category::new(1, "Animation"), Category::new(2, "Comedy")]);
        assert_eq!(text, "CATEGORIES\n1. Animation\n2. Comedy\n\n");
    }

    #[test]
    fn menu_lists_every_command() {
        let menu = menu();
        for command in ["cat", "year", "add", "del", "exit"] {
            assert!(menu.lines().any(|l| l.starts_with(command)), "{command} missing");
        }
    }
}
