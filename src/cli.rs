pub mod command;
pub mod run;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const BOX_WIDTH: usize = 60;
const MENU_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 14;
// "| " + label + value + "|"
const VALUE_WIDTH: usize = BOX_WIDTH - 2 - LABEL_WIDTH - 1;

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "Welcome to Contact Manager")?;
    writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;
    writeln!(output, "|   Contact Manager Menu     |")?;
    writeln!(output, "+{}+", "-".repeat(MENU_WIDTH - 2))?;
    writeln!(output, "| 1. Add Contact             |")?;
    writeln!(output, "| 2. View Contacts           |")?;
    writeln!(output, "| 3. Search Contact          |")?;
    writeln!(output, "| 4. Update Contact          |")?;
    writeln!(output, "| 5. Delete Contact          |")?;
    writeln!(output, "| 6. Exit                    |")?;
    writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;
    Ok(())
}

/// Renders a contact as a box `BOX_WIDTH` columns wide. Long values push the
/// right border out instead of being cut.
pub fn display_contact(contact: &Contact) -> String {
    let border = "-".repeat(BOX_WIDTH);
    let rows = [
        ("Name:", &contact.name),
        ("Country Code:", &contact.country_code),
        ("Phone:", &contact.phone),
        ("Email:", &contact.email),
        ("Address:", &contact.address),
    ];

    let mut output = String::new();
    output.push_str(&border);
    output.push('\n');
    for (label, value) in rows {
        output.push_str(&format!(
            "| {:<lw$}{:<vw$}|\n",
            label,
            value,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH
        ));
    }
    output.push_str(&border);
    output
}

pub fn display_contacts<'a, W, I>(output: &mut W, header: &str, contacts: I) -> Result<(), AppError>
where
    W: Write,
    I: IntoIterator<Item = &'a Contact>,
{
    writeln!(output, "\n{}", header)?;
    for contact in contacts {
        writeln!(output, "{}", display_contact(contact))?;
    }
    Ok(())
}

// INPUT FUNCTIONS

/// Reads one line with its line terminator removed. `None` at end of input.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

pub fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;
    get_input(input)
}
