//! App layer - interactive menu loop over the four core operations
//!
//! The menu is a thin front end: list, run one-or-all, add, save. It
//! reads line-oriented input, which keeps the loop scriptable in tests.

pub mod commands;

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::models::Collection;

/// Interactive session state: the loaded collection and the shared client.
pub struct App {
    pub collection: Collection,
    client: reqwest::Client,
}

impl App {
    pub fn new(client: reqwest::Client, collection: Collection) -> Self {
        App { collection, client }
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Run the menu loop until the user quits or input ends.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            print_menu();
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match line.trim().to_uppercase().as_str() {
                "1" => self.list_requests(),
                "2" => self.run_requests(&mut lines).await?,
                "3" => self.add_request(&mut lines).await?,
                "4" => self.save_to_file(&mut lines).await?,
                "Q" => break,
                _ => println!("Invalid input."),
            }
        }

        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("1 - List requests");
    println!("2 - Run a request");
    println!("3 - Add new request");
    println!("4 - Save collection to JSON");
    println!("Q - Quit");
    prompt("Choice: ");
}

/// Print an inline prompt and flush so it appears before the read.
pub(crate) fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}
