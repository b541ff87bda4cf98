//! Interactive menu shell.
//!
//! # Responsibility
//! - Present the fixed six-option menu and dispatch to repository
//!   operations.
//! - Keep all terminal I/O out of the core crate.
//!
//! # Invariants
//! - Unrecognized menu input re-displays the menu, it never aborts the loop.
//! - Invalid numeric-id input aborts only the current action.
//! - End of input is treated like choosing Exit.

use contactbook_core::{
    Contact, ContactId, ContactPatch, ContactRepository, ContactStore, DeleteOutcome, RepoError,
};
use log::info;
use std::io::{BufRead, Write};

const MENU: &str = "\n===== CONTACT BOOK =====\n\
1. Add Contact\n\
2. View All Contacts\n\
3. Search Contacts\n\
4. Update Contact\n\
5. Delete Contact\n\
6. Exit";

/// Runs the menu loop until Exit is chosen or input ends.
pub fn run<S, R, W>(
    repo: &mut ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    info!("event=shell_start module=shell status=ok");
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Select option (1-6): ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => add_contact(repo, input, output)?,
            "2" => view_contacts(repo, output)?,
            "3" => search_contacts(repo, input, output)?,
            "4" => update_contact(repo, input, output)?,
            "5" => delete_contact(repo, input, output)?,
            "6" => {
                writeln!(output, "Goodbye.")?;
                info!("event=shell_exit module=shell status=ok");
                return Ok(());
            }
            other => writeln!(output, "Invalid choice `{}`. Try again.", other)?,
        }
    }
}

fn add_contact<S, R, W>(
    repo: &mut ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n--- Add Contact ---")?;
    let Some(name) = prompt(input, output, "Name: ")? else {
        return Ok(());
    };
    let Some(phone) = prompt(input, output, "Phone: ")? else {
        return Ok(());
    };
    let Some(email) = prompt(input, output, "Email: ")? else {
        return Ok(());
    };
    let Some(address) = prompt(input, output, "Address: ")? else {
        return Ok(());
    };

    match repo.add(&name, &phone, &email, &address) {
        Ok(id) => writeln!(output, "Contact added with id {id}."),
        Err(err) => writeln!(output, "Cannot add contact: {err}"),
    }
}

fn view_contacts<S, W>(repo: &ContactRepository<S>, output: &mut W) -> std::io::Result<()>
where
    S: ContactStore,
    W: Write,
{
    writeln!(output, "\n--- All Contacts ---")?;
    if repo.list().is_empty() {
        return writeln!(output, "No contacts found.");
    }

    write_table_header(output)?;
    for contact in repo.list() {
        write_contact_row(output, contact)?;
    }
    Ok(())
}

fn search_contacts<S, R, W>(
    repo: &ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(query) = prompt(input, output, "Enter name / phone / email to search: ")? else {
        return Ok(());
    };

    let matches = repo.search(&query);
    if matches.is_empty() {
        return writeln!(output, "No matching contact found.");
    }

    write_table_header(output)?;
    for contact in matches {
        write_contact_row(output, contact)?;
    }
    Ok(())
}

fn update_contact<S, R, W>(
    repo: &mut ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(raw_id) = prompt(input, output, "Enter ID to update: ")? else {
        return Ok(());
    };
    let Some(id) = parse_id(&raw_id) else {
        return writeln!(output, "Invalid id `{}`.", raw_id.trim());
    };

    let Some(current) = repo.get(id).cloned() else {
        return writeln!(output, "Contact not found.");
    };

    writeln!(output, "Leave blank to keep the existing value.")?;
    let Some(name) = prompt(input, output, &format!("New Name ({}): ", current.name))? else {
        return Ok(());
    };
    let Some(phone) = prompt(input, output, &format!("New Phone ({}): ", current.phone))? else {
        return Ok(());
    };
    let Some(email) = prompt(input, output, &format!("New Email ({}): ", current.email))? else {
        return Ok(());
    };
    let Some(address) = prompt(input, output, &format!("New Address ({}): ", current.address))?
    else {
        return Ok(());
    };

    let patch = ContactPatch::from_input(&name, &phone, &email, &address);
    match repo.update(id, &patch) {
        Ok(()) => writeln!(output, "Contact updated."),
        Err(RepoError::NotFound(_)) => writeln!(output, "Contact not found."),
        Err(err) => writeln!(output, "Cannot update contact: {err}"),
    }
}

fn delete_contact<S, R, W>(
    repo: &mut ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    let Some(raw_id) = prompt(input, output, "Enter ID to delete: ")? else {
        return Ok(());
    };
    let Some(id) = parse_id(&raw_id) else {
        return writeln!(output, "Invalid id `{}`.", raw_id.trim());
    };

    let Some(name) = repo.get(id).map(|c| c.name.clone()) else {
        return writeln!(output, "Contact not found.");
    };

    let Some(answer) = prompt(input, output, &format!("Delete {name}? (y/n): "))? else {
        return Ok(());
    };
    let confirmed = answer.trim().eq_ignore_ascii_case("y");

    match repo.delete(id, confirmed) {
        Ok(DeleteOutcome::Deleted) => writeln!(output, "Contact deleted."),
        Ok(DeleteOutcome::Cancelled) => writeln!(output, "Delete cancelled."),
        Err(RepoError::NotFound(_)) => writeln!(output, "Contact not found."),
        Err(err) => writeln!(output, "Cannot delete contact: {err}"),
    }
}

/// Writes a prompt label and reads one input line.
///
/// Returns `None` at end of input so callers can wind the current action
/// down instead of looping on an exhausted stream.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> std::io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn parse_id(raw: &str) -> Option<ContactId> {
    raw.trim().parse().ok()
}

fn write_table_header<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(
        output,
        "{:<5}{:<25}{:<15}{:<25}{:<30}",
        "ID", "Name", "Phone", "Email", "Address"
    )?;
    writeln!(output, "{}", "-".repeat(100))
}

fn write_contact_row<W: Write>(output: &mut W, contact: &Contact) -> std::io::Result<()> {
    writeln!(
        output,
        "{:<5}{:<25}{:<15}{:<25}{:<30}",
        contact.id, contact.name, contact.phone, contact.email, contact.address
    )
}
