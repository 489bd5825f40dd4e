//! Interactive menu front-end for the libris catalog manager.
//!
//! # Responsibility
//! - Drive the core inventory through a fixed text menu.
//! - Own no catalog state; render core results as plain text.
//!
//! All five inventory operations are reachable from the menu. A closed
//! stdin (EOF) or the exit option terminates the session gracefully.

use libris_core::{default_log_level, init_logging, Book, Inventory, JsonFileStore};
use log::info;
use std::io::{self, BufRead, Write};

const STORAGE_PATH: &str = "data/books.json";
const LOG_DIR: &str = "logs";

const MENU: &str = "\nLibrary Menu:\n\
    1. Add Book\n\
    2. Issue Book\n\
    3. Return Book\n\
    4. View All Books\n\
    5. Search Book\n\
    6. Exit\n";

fn main() {
    if let Err(err) = init_logging(default_log_level(), LOG_DIR) {
        // The catalog still works without a log sink.
        eprintln!("logging unavailable: {err}");
    }

    info!("event=session_start module=cli storage={STORAGE_PATH}");
    let mut inventory = Inventory::new(JsonFileStore::new(STORAGE_PATH));
    let stdin = io::stdin();
    let mut input = stdin.lock();

    run_menu(&mut inventory, &mut input);
    info!("event=session_end module=cli status=ok");
}

fn run_menu(inventory: &mut Inventory<JsonFileStore>, input: &mut impl BufRead) {
    loop {
        println!("{MENU}");
        let Some(choice) = prompt_non_empty(input, "Enter choice (1-6): ") else {
            println!("\nExiting...");
            return;
        };
        let outcome = match choice.as_str() {
            "1" => add_book(inventory, input),
            "2" => issue_book(inventory, input),
            "3" => return_book(inventory, input),
            "4" => view_all(inventory),
            "5" => search(inventory, input),
            "6" => {
                println!("Goodbye!");
                return;
            }
            _ => {
                println!("Please enter a number between 1 and 6.");
                Some(())
            }
        };
        if outcome.is_none() {
            println!("\nExiting...");
            return;
        }
    }
}

/// Prompts until the user enters non-blank text.
///
/// Returns `None` when stdin is closed or unreadable, which callers treat
/// as a request to terminate the session.
fn prompt_non_empty(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    loop {
        print!("{prompt}");
        io::stdout().flush().ok();
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let value = line.trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
        println!("Input cannot be empty. Please try again.");
    }
}

fn add_book(inventory: &mut Inventory<JsonFileStore>, input: &mut impl BufRead) -> Option<()> {
    let title = prompt_non_empty(input, "Enter title: ")?;
    let author = prompt_non_empty(input, "Enter author: ")?;
    let isbn = prompt_non_empty(input, "Enter ISBN: ")?;
    inventory.add_book(Book::new(title, author, isbn));
    println!("Book added.");
    Some(())
}

fn issue_book(inventory: &mut Inventory<JsonFileStore>, input: &mut impl BufRead) -> Option<()> {
    let isbn = prompt_non_empty(input, "Enter ISBN to issue: ")?;
    if inventory.issue_book(&isbn) {
        println!("Book issued successfully.");
    } else {
        println!("Failed to issue book. Check logs or ISBN.");
    }
    Some(())
}

fn return_book(inventory: &mut Inventory<JsonFileStore>, input: &mut impl BufRead) -> Option<()> {
    let isbn = prompt_non_empty(input, "Enter ISBN to return: ")?;
    if inventory.return_book(&isbn) {
        println!("Book returned successfully.");
    } else {
        println!("Failed to return book. Check logs or ISBN.");
    }
    Some(())
}

fn view_all(inventory: &Inventory<JsonFileStore>) -> Option<()> {
    let lines = inventory.display_all();
    if lines.is_empty() {
        println!("No books in the inventory.");
        return Some(());
    }
    println!("\nAll books:");
    for line in lines {
        println!("{line}");
    }
    Some(())
}

fn search(inventory: &Inventory<JsonFileStore>, input: &mut impl BufRead) -> Option<()> {
    let choice = prompt_non_empty(input, "Search by (1) Title or (2) ISBN? Enter 1 or 2: ")?;
    match choice.as_str() {
        "1" => {
            let title = prompt_non_empty(input, "Enter part or full title: ")?;
            let results = inventory.search_by_title(&title);
            if results.is_empty() {
                println!("No books found with that title.");
                return Some(());
            }
            for book in results {
                println!("{book}");
            }
        }
        "2" => {
            let isbn = prompt_non_empty(input, "Enter ISBN: ")?;
            match inventory.search_by_isbn(&isbn) {
                Some(book) => println!("{book}"),
                None => println!("No book found with that ISBN."),
            }
        }
        _ => println!("Invalid choice."),
    }
    Some(())
}
