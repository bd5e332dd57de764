use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn add_contact() {
    // Add a contact then view it
    Command::cargo_bin("contact-manager")
        .unwrap()
        .write_stdin("1\nAlice\n+1\n5551234\na@x.com\n1 St\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' added."))
        .stdout(predicate::str::contains("| Name:         Alice"))
        .stdout(predicate::str::contains("| Country Code: +1"))
        .stdout(predicate::str::contains("| Email:        a@x.com"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn invalid_phone_numbers() {
    // NON DIGIT PHONE NUMBER
    Command::cargo_bin("contact-manager")
        .unwrap()
        .write_stdin("1\nAlice\n+1\n555-abc\na@x.com\n1 St\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid phone number. Please enter a valid phone number.",
        ))
        .stdout(predicate::str::contains("No contacts found."))
        .stdout(predicate::str::contains("Contact 'Alice' added.").not());

    // EMPTY PHONE NUMBER
    Command::cargo_bin("contact-manager")
        .unwrap()
        .write_stdin("1\nAlice\n+1\n\na@x.com\n1 St\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number."))
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn duplicate_names_are_kept() {
    Command::cargo_bin("contact-manager")
        .unwrap()
        .write_stdin(
            "1\nSam\n+44\n111\n\n\n\
             1\nSam\n+44\n222\n\n\n\
             3\nsam\n6\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("| Phone:        111"))
        .stdout(predicate::str::contains("| Phone:        222"));
}
