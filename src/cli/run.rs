use crate::{
    cli::command::{Cli, parse_command},
    domain::{Command, Contact, ContactStore},
    errors::AppError,
    interrupt, logging,
};
use clap::Parser;
use dotenv::dotenv;
use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    interrupt::exit_on_interrupt()?;

    let mut store = ContactStore::new();
    let mut stdout = io::stdout();

    if cli.demo {
        tracing::info!("running demo flow");
        run_demo(&mut store, &mut stdout)
    } else {
        tracing::info!("starting interactive menu");
        run_interactive(&mut store, io::stdin().lock(), &mut stdout)
    }
}

/// Scripted walk through every store operation.
pub fn run_demo<W: Write>(store: &mut ContactStore, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "Running demo...")?;

    for (name, phone) in [
        ("Alice", "1234567890"),
        ("Bob", "2345678901"),
        ("Carol", "3456789012"),
        ("Alfred", "4445556666"),
    ] {
        store.add(name, phone);
        writeln!(out, "Contact added.")?;
    }

    writeln!(out, "\nSearch keyword: Al")?;
    for contact in store.search_by_keyword("Al") {
        writeln!(out, "Match found: {contact}")?;
    }

    writeln!(out, "\nSearch exact name: Bob")?;
    match store.find_by_name("Bob") {
        Some(contact) => writeln!(out, "Exact found: {contact}")?,
        None => writeln!(out, "Exact not found")?,
    }

    writeln!(out, "\nAll forward:")?;
    print_contacts(out, &store.list_forward())?;

    writeln!(out, "\nAll backward:")?;
    print_contacts(out, &store.list_backward())?;

    out.flush()?;
    Ok(())
}

/// Menu loop. Returns on the exit option or when `input` runs dry.
pub fn run_interactive<R, W>(
    store: &mut ContactStore,
    mut input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(out)?;

        let Some(choice) = prompt(&mut input, out, "\nEnter option: ")? else {
            writeln!(out, "\nExiting...")?;
            break;
        };

        if choice.is_empty() {
            continue;
        }

        let command = match parse_command(&choice) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("{e}");
                writeln!(out, "Invalid option, try again.")?;
                continue;
            }
        };

        if dispatch(store, command, &mut input, out)?.is_break() {
            break;
        }
    }

    out.flush()?;
    tracing::info!(contacts = store.len(), "leaving interactive menu");
    Ok(())
}

fn dispatch<R, W>(
    store: &mut ContactStore,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> Result<ControlFlow<()>, AppError>
where
    R: BufRead,
    W: Write,
{
    match command {
        Command::AddContact => {
            let Some(name) = prompt(input, out, "Name: ")? else {
                return exit_on_eof(out);
            };
            let Some(phone) = prompt(input, out, "Phone: ")? else {
                return exit_on_eof(out);
            };

            store.add(&name, &phone);
            writeln!(out, "Contact added.")?;
        }
        Command::SearchKeyword => {
            let Some(keyword) = prompt(input, out, "Search keyword: ")? else {
                return exit_on_eof(out);
            };

            let matches = store.search_by_keyword(&keyword);
            if matches.is_empty() {
                writeln!(out, "No matches found.")?;
            }
            for contact in matches {
                writeln!(out, "Match found: {contact}")?;
            }
        }
        Command::SearchExact => {
            let Some(name) = prompt(input, out, "Name: ")? else {
                return exit_on_eof(out);
            };

            match store.find_by_name(&name) {
                Some(contact) => writeln!(out, "Exact found: {contact}")?,
                None => writeln!(out, "Not found.")?,
            }
        }
        Command::ListForward => {
            writeln!(out, "\nAll contacts (forward):")?;
            print_contacts(out, &store.list_forward())?;
        }
        Command::ListBackward => {
            writeln!(out, "\nAll contacts (backward):")?;
            print_contacts(out, &store.list_backward())?;
        }
        Command::Exit => {
            writeln!(out, "Goodbye.")?;
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nContact Search - Menu")?;
    writeln!(out, "1. Add Contact")?;
    writeln!(out, "2. Search by Keyword")?;
    writeln!(out, "3. Search by Exact Name")?;
    writeln!(out, "4. View All (Forward)")?;
    writeln!(out, "5. View All (Backward)")?;
    writeln!(out, "6. Exit")?;
    Ok(())
}

fn print_contacts<W: Write>(out: &mut W, contacts: &[&Contact]) -> Result<(), AppError> {
    for contact in contacts {
        writeln!(out, "  {contact}")?;
    }
    Ok(())
}

fn exit_on_eof<W: Write>(out: &mut W) -> Result<ControlFlow<()>, AppError> {
    writeln!(out, "\nExiting...")?;
    Ok(ControlFlow::Break(()))
}

// INPUT FUNCTIONS

/// Prints `label`, then reads one trimmed line. `None` means end of input.
pub fn prompt<R, W>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}
