use crate::{
    cli::{display_contacts, prompt, show_menu},
    prelude::{AppError, Cli, Contact, ContactManager, ContactUpdate, MenuChoice},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// What the loop does after an action has been handled.
enum Step {
    Continue,
    Quit,
}

/// Prompts and returns the answer, or leaves the handler with `Step::Quit`
/// when input has run out.
macro_rules! ask {
    ($input:expr, $output:expr, $message:expr) => {
        match prompt($input, $output, $message)? {
            Some(answer) => answer,
            None => return Ok(Step::Quit),
        }
    };
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut manager = ContactManager::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&mut manager, stdin.lock(), stdout.lock())
}

/// Installs the stderr log subscriber. An unparsable filter falls back to `warn`.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .is_err()
    {
        debug!("tracing subscriber already installed");
    }
}

/// Shows the menu and serves choices until the user exits or input ends.
/// Only I/O failures escape the loop.
pub fn run_menu<R, W>(manager: &mut ContactManager, mut input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(&mut output)?;

        let Some(action) = prompt(&mut input, &mut output, "Choose an option: ")? else {
            writeln!(output, "\nExiting...")?;
            break;
        };

        let outcome = match action.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                writeln!(output, "Exiting...")?;
                break;
            }
            Ok(choice) => {
                debug!(?choice, "menu choice");
                handle(choice, manager, &mut input, &mut output)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Step::Continue) => continue,
            Ok(Step::Quit) => {
                writeln!(output, "\nExiting...")?;
                break;
            }
            Err(e) if e.is_recoverable() => {
                info!(error = %e, "action rejected");
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }

    output.flush()?;
    Ok(())
}

fn handle<R, W>(
    choice: MenuChoice,
    manager: &mut ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<Step, AppError>
where
    R: BufRead,
    W: Write,
{
    match choice {
        MenuChoice::AddContact => {
            let name = ask!(input, output, "Enter name: ");
            let country_code = ask!(input, output, "Enter country code (e.g., +1, +44): ");
            let phone = ask!(input, output, "Enter phone number (10 digits): ");
            let email = ask!(input, output, "Enter email: ");
            let address = ask!(input, output, "Enter address: ");

            let added = manager.add_contact(Contact::new(name, country_code, phone, email, address))?;
            writeln!(output, "Contact '{}' added.", added.name)?;
        }

        MenuChoice::ViewContacts => {
            if manager.is_empty() {
                writeln!(output, "No contacts found.")?;
            } else {
                display_contacts(output, "Contacts:", manager.contact_list())?;
            }
        }

        MenuChoice::SearchContact => {
            let term = ask!(input, output, "Enter name or phone number to search: ");

            let results = manager.search(&term);
            if results.is_empty() {
                writeln!(output, "No contacts found.")?;
            } else {
                display_contacts(output, "Search Results:", results)?;
            }
        }

        MenuChoice::UpdateContact => {
            let name = ask!(input, output, "Enter the name of the contact to update: ");
            let country_code = ask!(
                input,
                output,
                "Enter new country code (leave blank to keep current): "
            );
            let phone = ask!(
                input,
                output,
                "Enter new phone number (leave blank to keep current): "
            );
            let email = ask!(input, output, "Enter new email (leave blank to keep current): ");
            let address = ask!(
                input,
                output,
                "Enter new address (leave blank to keep current): "
            );

            let update = ContactUpdate::from_answers(&country_code, &phone, &email, &address);
            manager.update_contact(&name, update)?;
            writeln!(output, "Contact '{}' updated.", name)?;
        }

        MenuChoice::DeleteContact => {
            let name = ask!(input, output, "Enter the name of the contact to delete: ");

            manager.delete_contact(&name)?;
            writeln!(output, "Contact '{}' deleted.", name)?;
        }

        // Handled by the loop itself.
        MenuChoice::Exit => return Ok(Step::Quit),
    }

    Ok(Step::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(manager: &mut ContactManager, script: &str) -> Result<String, AppError> {
        let mut output = Vec::new();
        run_menu(manager, Cursor::new(script.to_string()), &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn add_then_view() -> Result<(), AppError> {
        let mut manager = ContactManager::new();

        let out = run_script(&mut manager, "1\nAlice\n+1\n5551234\na@x.com\n1 St\n2\n6\n")?;

        assert!(out.contains("Contact 'Alice' added."));
        assert!(out.contains("Contacts:"));
        assert!(out.contains("| Name:         Alice"));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(manager.len(), 1);
        Ok(())
    }

    #[test]
    fn invalid_phone_is_reported_and_loop_continues() -> Result<(), AppError> {
        let mut manager = ContactManager::new();

        let out = run_script(&mut manager, "1\nBob\n+1\n555-1234\nb@x.com\n\n2\n6\n")?;

        assert!(out.contains("Invalid phone number. Please enter a valid phone number."));
        assert!(out.contains("No contacts found."));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn search_update_delete_round() -> Result<(), AppError> {
        let mut manager = ContactManager::new();
        manager.add_contact(Contact::new(
            "Alice".to_string(),
            "+1".to_string(),
            "5551234".to_string(),
            "a@x.com".to_string(),
            "1 St".to_string(),
        ))?;

        let script = "3\nALI\n4\nAlice\n\n7654321\n\n\n3\n7654\n5\nAlice\n2\n6\n";
        let out = run_script(&mut manager, script)?;

        assert!(out.contains("Search Results:"));
        assert!(out.contains("Contact 'Alice' updated."));
        assert!(out.contains("| Phone:        7654321"));
        assert!(out.contains("Contact 'Alice' deleted."));
        assert!(out.contains("No contacts found."));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn update_with_bad_phone_keeps_contact() -> Result<(), AppError> {
        let mut manager = ContactManager::new();
        manager.add_contact(Contact::new(
            "Alice".to_string(),
            "+1".to_string(),
            "5551234".to_string(),
            "a@x.com".to_string(),
            "1 St".to_string(),
        ))?;

        let out = run_script(&mut manager, "4\nAlice\n+44\nabc\nnew@x.com\n\n6\n")?;

        assert!(out.contains("Invalid phone number."));
        let alice = &manager.contact_list()[0];
        assert_eq!(alice.country_code, "+1");
        assert_eq!(alice.phone, "5551234");
        assert_eq!(alice.email, "a@x.com");
        Ok(())
    }

    #[test]
    fn unknown_names_and_choices_are_reported() -> Result<(), AppError> {
        let mut manager = ContactManager::new();

        let out = run_script(&mut manager, "5\nNobody\n4\nNobody\n\n\n\n\n9\n 2\n6\n")?;

        assert_eq!(out.matches("Contact not found.").count(), 2);
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert!(!out.contains("No contacts found."));
        Ok(())
    }

    #[test]
    fn end_of_input_exits_cleanly() -> Result<(), AppError> {
        let mut manager = ContactManager::new();

        // input stops in the middle of an add
        let out = run_script(&mut manager, "1\nAlice\n+1\n")?;

        assert!(out.ends_with("Exiting...\n"));
        assert!(manager.is_empty());

        let out = run_script(&mut manager, "")?;
        assert!(out.ends_with("Exiting...\n"));
        Ok(())
    }
}
