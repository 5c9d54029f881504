//! Command handlers - the list / run / add / save operations

use anyhow::Result;
use tokio::io::{AsyncBufRead, Lines};

use crate::app::{prompt, App};
use crate::assertions::{self, Check, ScriptReport, ARGS_SOURCE_EXPECTED};
use crate::constants::{DEFAULT_METHOD, DEFAULT_REQUEST_NAME, DEFAULT_SAVE_FILE};
use crate::models::{Body, Event, Header, Item, Request, Script, Url};
use crate::network;
use crate::storage;

impl App {
    /// Menu choice 1: list every request in the collection.
    pub fn list_requests(&self) {
        if self.collection.item.is_empty() {
            println!("No requests in collection.");
            return;
        }

        println!();
        println!("Requests:");
        for (i, item) in self.collection.item.iter().enumerate() {
            let r = &item.request;
            println!("{}. {} {} ({})", i + 1, r.method, r.url.raw, item.name);
        }
    }

    /// Menu choice 2: run one request by number, or every request with "0".
    pub async fn run_requests<R>(&mut self, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        if self.collection.item.is_empty() {
            println!("No requests to run.");
            return Ok(());
        }

        self.list_requests();
        prompt("Enter request number to run (0 = all): ");
        let Some(choice) = lines.next_line().await? else {
            return Ok(());
        };
        let choice = choice.trim();

        if choice == "0" {
            // Strictly sequential: the next request is not issued until the
            // previous response and its assertions are fully processed.
            for item in &self.collection.item {
                self.execute_item(item).await;
            }
        } else if let Ok(number) = choice.parse::<usize>() {
            if number >= 1 && number <= self.collection.item.len() {
                self.execute_item(&self.collection.item[number - 1]).await;
            } else {
                println!("Invalid choice.");
            }
        } else {
            println!("Invalid choice.");
        }

        Ok(())
    }

    /// Execute one item, print the response, then its assertion results.
    /// Failures are reported and the menu loop resumes.
    async fn execute_item(&self, item: &Item) {
        let request = &item.request;
        println!();
        println!("Executing: {} {}", request.method, request.url.raw);

        match network::execute_request(self.client(), request).await {
            Ok(response) => {
                println!("Status: {}", response.status);
                println!("{}", response.body);

                if let Some(events) = &item.event {
                    print_reports(&assertions::evaluate(&response, events));
                }
            }
            Err(e) => {
                tracing::warn!(name = %item.name, error = %e, "Request failed");
                println!("{e}");
            }
        }
    }

    /// Menu choice 3: interactively add a request to the collection.
    pub async fn add_request<R>(&mut self, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        prompt("Request name: ");
        let name = lines
            .next_line()
            .await?
            .unwrap_or_else(|| DEFAULT_REQUEST_NAME.to_string());

        prompt("Method (GET/POST/PUT/DELETE): ");
        let method = lines
            .next_line()
            .await?
            .map(|line| line.trim().to_uppercase())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_METHOD.to_string());

        prompt("URL: ");
        let url = lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string())
            .unwrap_or_default();

        let mut headers = Vec::new();
        prompt("Add headers? (y/n): ");
        if answered_yes(lines.next_line().await?) {
            loop {
                prompt("Header key (empty to finish): ");
                let Some(key) = lines.next_line().await? else {
                    break;
                };
                let key = key.trim().to_string();
                if key.is_empty() {
                    break;
                }

                prompt("Header value: ");
                let value = lines.next_line().await?.unwrap_or_default();
                headers.push(Header::new(key, value.trim()));
            }
        }

        let mut body = None;
        if method == "POST" || method == "PUT" {
            println!("Enter request body (empty to skip):");
            if let Some(raw) = lines.next_line().await? {
                if !raw.trim().is_empty() {
                    body = Some(Body {
                        mode: String::new(),
                        raw,
                    });
                }
            }
        }

        let mut script_lines = Vec::new();
        prompt("Add post-response tests? (y/n): ");
        if answered_yes(lines.next_line().await?) {
            println!("Enter post-response script lines (empty line to finish):");
            loop {
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                if line.trim().is_empty() {
                    break;
                }
                script_lines.push(line);
            }
        }

        let event = if script_lines.is_empty() {
            None
        } else {
            Some(vec![Event {
                listen: "test".to_string(),
                script: Script {
                    script_type: String::new(),
                    exec: script_lines,
                },
            }])
        };

        let item = Item {
            name: name.clone(),
            request: Request {
                method,
                url: Url::new(url),
                header: (!headers.is_empty()).then_some(headers),
                body,
            },
            event,
        };

        self.collection.item.push(item);
        tracing::info!(name = %name, "Request added");
        println!("Request '{name}' added to collection.");
        Ok(())
    }

    /// Menu choice 4: save the collection to a JSON file.
    pub async fn save_to_file<R>(&mut self, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        prompt("Enter file name to save (e.g., collection.json): ");
        let file_name = match lines.next_line().await? {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => DEFAULT_SAVE_FILE.to_string(),
        };

        match storage::save_collection(&self.collection, &file_name) {
            Ok(()) => println!("Collection saved to {file_name}"),
            Err(e) => {
                tracing::warn!(error = %e, "Save failed");
                println!("Failed to save collection: {e}");
            }
        }

        Ok(())
    }
}

fn answered_yes(line: Option<String>) -> bool {
    line.map(|l| l.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false)
}

fn print_reports(reports: &[ScriptReport]) {
    for report in reports {
        println!();
        println!("Running post-response assertions:");

        for check in &report.checks {
            match check {
                Check::StatusOk { passed } => {
                    println!("Assert Status == 200: {}", verdict(*passed));
                }
                Check::ArgsSource { passed } => {
                    println!(
                        "Assert args.source == '{ARGS_SOURCE_EXPECTED}': {}",
                        verdict(*passed)
                    );
                }
                Check::ResponseNotJson => {
                    println!("Failed to parse JSON response for assertion.");
                }
            }
        }

        if report.unsupported {
            println!("Unsupported assertion!");
        }
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}
