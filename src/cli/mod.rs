mod argument_parsing;
mod formatting;

use std::env::current_dir;

use chrono::Local;
use clap::Parser;

use crate::cli::argument_parsing::UpcomingOptions;
use crate::cli::formatting::format_upcoming_screen;
use crate::preview::UpcomingOperation;
use crate::vault::VaultImpl;

pub fn upcoming_operation() {
    let result: Result<String, String> = (|| {
        let arguments = UpcomingOptions::parse();
        let vault_path = match &arguments.vault {
            Some(path) => path.clone(),
            None => current_dir().map_err(|error| error.to_string())?,
        };
        let vault = VaultImpl { path: vault_path };

        // The only place where the clock is consulted; everything below
        // receives the date as a plain value
        let date = match arguments.from {
            Some(date) => date,
            None => Local::now().date_naive(),
        };

        let operation = UpcomingOperation::from_vault_values(date, arguments.number, &vault)?;

        Ok(format_upcoming_screen(&operation.execute()))
    })();

    match result {
        Ok(screen) => print!("{}", screen),
        Err(error) => println!("Could not compute upcoming transactions: {}", error),
    }
}
