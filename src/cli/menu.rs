use std::io::{BufRead, Write};

use crate::cli::command::MenuCommand;
use crate::domain::{
    contact::{Contact, display_contact},
    store::ContactStore,
};
use crate::errors::AppError;

pub const SEPARATOR: &str = "=================================";

/// Explicit console handles for the menu. Any `BufRead`/`Write` pair works,
/// so the whole loop can be driven from memory in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // OUTPUT FUNCTIONS
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn say_with_separator(&mut self, line: &str) -> Result<(), AppError> {
        self.say(line)?;
        self.say(SEPARATOR)
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        for cmd in MenuCommand::ALL {
            writeln!(self.output, "{}. {}", cmd.number(), cmd.label())?;
        }
        Ok(())
    }

    pub fn show_all_contacts(&mut self, store: &ContactStore) -> Result<(), AppError> {
        self.say("All Contacts:")?;

        for (index, contact) in store.list_all() {
            let rendered = display_contact(index, contact);
            self.say_with_separator(&rendered)?;
        }
        Ok(())
    }

    // INPUT FUNCTIONS

    /// Prints `prompt` without a newline and reads one line.
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.get_input()
    }

    /// Reads one line as typed; only the line terminator is dropped.
    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Asks for a phone number and, for users, first and last name.
    pub fn read_contact_details(&mut self) -> Result<Option<Contact>, AppError> {
        let Some(phone) = self.prompt("Enter Phone Number: ")? else {
            return Ok(None);
        };

        let Some(is_user) = self.prompt("Is this a user? (Y/N): ")? else {
            return Ok(None);
        };

        if !is_user.trim().eq_ignore_ascii_case("y") {
            return Ok(Some(Contact::phone_only(phone)));
        }

        let Some(first_name) = self.prompt("First Name: ")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("Last Name: ")? else {
            return Ok(None);
        };

        Ok(Some(Contact::new(phone, first_name, last_name)))
    }
}
