use anyhow::Result;
use colored::Colorize;
use comfy_table::{
    modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS},
    presets::UTF8_FULL,
    Cell, Color, Table,
};
use serde::Serialize;
use usersearch_types::{SearchResponse, User};

use crate::config::OutputFormat;

/// `next_page` is `None` when every page was already walked.
pub fn print_users(users: Vec<User>, next_page: Option<bool>, format: &OutputFormat) -> Result<()> {
    match (format, next_page) {
        (OutputFormat::Table, _) => {
            print_users_table(&users);
            match next_page {
                Some(true) => println!("{}", "More results available".yellow()),
                Some(false) => println!("{}", "No more results".green()),
                None => println!("{} {}", "Total:".blue(), users.len()),
            }
            Ok(())
        }
        (OutputFormat::Json, Some(next_page)) => print_json(&SearchResponse { users, next_page }),
        (OutputFormat::Json, None) => print_json(&users),
    }
}

fn print_users_table(users: &[User]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_header(vec![
            Cell::new("ID").fg(Color::Blue),
            Cell::new("NAME").fg(Color::Blue),
            Cell::new("AGE").fg(Color::Blue),
            Cell::new("GENDER").fg(Color::Blue),
            Cell::new("ABOUT").fg(Color::Blue),
        ]);

    for user in users {
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.name),
            Cell::new(user.age),
            Cell::new(&user.gender),
            Cell::new(&user.about),
        ]);
    }

    println!("{table}");
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
