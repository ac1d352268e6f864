use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;
use crate::logging::DEFAULT_LOG_LEVEL;

#[derive(Parser, Debug)]
#[command(name = "menu-rolodex", version, about = "In-memory contact book")]
pub struct Cli {
    /// Tracing filter directive (e.g. warn, info, menu_rolodex=debug)
    #[arg(long, env = "ROLODEX_LOG", default_value_t = String::from(DEFAULT_LOG_LEVEL))]
    pub log_level: String,

    /// Do not print the start-up banner
    #[arg(short, long, env = "ROLODEX_QUIET")]
    pub quiet: bool,
}

/// Options of the main menu, numbered as they are shown.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuCommand {
    AddContact,
    EditContact,
    DeleteContact,
    ShowAllContacts,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 5] = [
        MenuCommand::AddContact,
        MenuCommand::EditContact,
        MenuCommand::DeleteContact,
        MenuCommand::ShowAllContacts,
        MenuCommand::Exit,
    ];

    pub fn number(&self) -> i32 {
        match self {
            MenuCommand::AddContact => 1,
            MenuCommand::EditContact => 2,
            MenuCommand::DeleteContact => 3,
            MenuCommand::ShowAllContacts => 4,
            MenuCommand::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::AddContact => "Add Contact",
            MenuCommand::EditContact => "Edit Contact",
            MenuCommand::DeleteContact => "Delete Contact",
            MenuCommand::ShowAllContacts => "Show All Contacts",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl FromStr for MenuCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim().parse::<i32>()?;

        MenuCommand::ALL
            .into_iter()
            .find(|cmd| cmd.number() == choice)
            .ok_or_else(|| AppError::ParseCommand(choice.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_option() -> Result<(), AppError> {
        for cmd in MenuCommand::ALL {
            assert_eq!(cmd.number().to_string().parse::<MenuCommand>()?, cmd);
        }
        assert_eq!(" 4\n".parse::<MenuCommand>()?, MenuCommand::ShowAllContacts);
        Ok(())
    }

    #[test]
    fn non_numeric_choice_is_parse_int() {
        let err = "add".parse::<MenuCommand>().unwrap_err();
        assert!(matches!(err, AppError::ParseInt(_)));
    }

    #[test]
    fn out_of_range_choice_is_parse_command() {
        for input in ["0", "6", "-1"] {
            let err = input.parse::<MenuCommand>().unwrap_err();
            assert!(matches!(err, AppError::ParseCommand(_)), "input {input}");
        }
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["menu-rolodex"]).expect("parse");
        assert!(!cli.quiet);

        let cli = Cli::try_parse_from(["menu-rolodex", "--log-level", "debug", "-q"])
            .expect("parse");
        assert_eq!(cli.log_level, "debug");
        assert!(cli.quiet);
    }
}
