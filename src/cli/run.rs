use std::io::{self, BufRead, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info, warn};

use crate::{
    cli::{
        command::{Cli, MenuCommand},
        menu::Console,
    },
    domain::store::ContactStore,
    errors::AppError,
    logging,
};

const NOT_FOUND_MESSAGE: &str = "Contact not found with the provided phone number.";
const SEARCH_PROMPT: &str = "Enter the phone number to search for the contact: ";

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_level)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if !cli.quiet {
        console.say("\n--- Contact BOOK ---\n")?;
    }

    let mut store = ContactStore::new();
    run_menu(&mut store, &mut console)
}

/// Drives the menu until Exit is chosen or the input runs out.
pub fn run_menu<R, W>(store: &mut ContactStore, console: &mut Console<R, W>) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    info!("contact book session started");

    loop {
        console.show_menu()?;

        let Some(choice) = console.prompt("Enter your choice: ")? else {
            break;
        };

        let command = match choice.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(AppError::ParseCommand(number)) => {
                // Numbers outside the menu just show it again
                debug!(%number, "menu option out of range");
                continue;
            }
            Err(e) => {
                warn!(input = %choice, error = %e, "rejected menu input");
                console.say_with_separator("Invalid input. Please enter a valid menu option.")?;
                continue;
            }
        };

        match command {
            MenuCommand::AddContact => {
                console.say("Enter contact details:")?;
                let Some(new_contact) = console.read_contact_details()? else {
                    break;
                };

                store.add(new_contact);
                console.say_with_separator("Contact added successfully!")?;
            }
            MenuCommand::EditContact => {
                let Some(phone) = console.prompt(SEARCH_PROMPT)? else {
                    break;
                };
                let Some(updated) = console.read_contact_details()? else {
                    break;
                };

                match store.edit_by_phone_number(&phone, updated) {
                    Ok(_) => console.say_with_separator("Contact edited successfully!")?,
                    Err(e) => {
                        info!(%phone, error = %e, "edit target not found");
                        console.say_with_separator(NOT_FOUND_MESSAGE)?
                    }
                }
            }
            MenuCommand::DeleteContact => {
                let Some(phone) = console.prompt(SEARCH_PROMPT)? else {
                    break;
                };

                match store.delete_by_phone_number(&phone) {
                    Ok(_) => console.say_with_separator("Contact deleted successfully!")?,
                    Err(e) => {
                        info!(%phone, error = %e, "delete target not found");
                        console.say_with_separator(NOT_FOUND_MESSAGE)?
                    }
                }
            }
            MenuCommand::ShowAllContacts => {
                console.show_all_contacts(store)?;
            }
            MenuCommand::Exit => break,
        }
    }

    info!(contacts = store.len(), "contact book session ended");
    Ok(())
}
