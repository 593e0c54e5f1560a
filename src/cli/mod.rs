//! CLI definitions and the interactive menu loop.
//!
//! The argument surface is defined with clap's derive macros; the menu
//! maps a small fixed set of single-character commands to store-backed
//! actions.

pub mod actions;
pub mod input;

use crate::store::TaskStore;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};

/// Console to-do manager backed by a flat JSON task store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the task store file (overrides config)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}

fn print_menu() {
    println!("\nChoose an action:");
    println!("1) Show all tasks");
    println!("2) Show tasks in a category");
    println!("3) Add a task");
    println!("4) Edit a task");
    println!("5) Mark a task as done");
    println!("6) Delete a task by id");
    println!("7) Delete tasks by category");
    println!("8) Search tasks");
    println!("0) Exit\n");
}

/// Run the interactive menu loop until the user exits.
pub fn run(store: &TaskStore) -> Result<()> {
    loop {
        print_menu();
        print!(">>> ");
        io::stdout().flush()?;

        let mut choice = String::new();
        if io::stdin().read_line(&mut choice)? == 0 {
            // stdin closed
            return Ok(());
        }

        match choice.trim() {
            "0" => {
                println!("Bye");
                return Ok(());
            }
            "1" => actions::show_all(store)?,
            "2" => actions::show_for_category(store)?,
            "3" => actions::add_task(store)?,
            "4" => actions::edit_task(store)?,
            "5" => actions::mark_task_done(store)?,
            "6" => actions::delete_task_by_id(store)?,
            "7" => actions::delete_tasks_by_category(store)?,
            "8" => actions::search_tasks(store)?,
            _ => println!("{}", "Invalid input, try again".red()),
        }
    }
}
