use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "contact-manager",
    version,
    about = "In-memory contact book driven by a text menu"
)]
pub struct Cli {
    /// Log filter for stderr output (warn, info, debug, contact_manager=trace ...)
    #[arg(long, env = "CONTACT_MANAGER_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Entries of the main menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ViewContacts,
    SearchContact,
    UpdateContact,
    DeleteContact,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::AddContact),
            "2" => Ok(MenuChoice::ViewContacts),
            "3" => Ok(MenuChoice::SearchContact),
            "4" => Ok(MenuChoice::UpdateContact),
            "5" => Ok(MenuChoice::DeleteContact),
            "6" => Ok(MenuChoice::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}
