use crate::print::{print_books, print_error, print_messages};
use shelf::api::ShelfApi;
use shelf::error::{Result, ShelfError};
use shelf::store::DataStore;
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu:\n\
1. Add book\n\
2. Delete book\n\
3. Search books\n\
4. List all books\n\
5. Change book status\n\
6. Exit";

/// Runs the numbered menu until the user picks Exit or input ends.
///
/// Bad ids, years and statuses are reported and the menu is shown again.
/// Storage failures end the loop with an error.
pub fn run<S, R, W>(api: &mut ShelfApi<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Choose an action: ")? else {
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => add(api, input, out),
            "2" => delete(api, input, out),
            "3" => search(api, input, out),
            "4" => list(api, out),
            "5" => change_status(api, input, out),
            "6" => return Ok(()),
            _ => {
                writeln!(out, "Invalid choice. Please try again.")?;
                Ok(Step::Continue)
            }
        };

        match outcome {
            Ok(Step::Continue) => {}
            Ok(Step::EndOfInput) => return Ok(()),
            Err(e @ (ShelfError::InvalidInput(_) | ShelfError::InvalidStatus(_))) => {
                print_error(out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

enum Step {
    Continue,
    EndOfInput,
}

/// Reads one line, without its line ending. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

macro_rules! ask {
    ($input:expr, $out:expr, $label:expr) => {
        match prompt($input, $out, $label)? {
            Some(line) => line,
            None => return Ok(Step::EndOfInput),
        }
    };
}

fn add<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Step> {
    let title = ask!(input, out, "Title: ");
    let author = ask!(input, out, "Author: ");
    let year = ask!(input, out, "Year: ");
    let result = api.add_book(&title, &author, &year)?;
    print_messages(out, &result.messages)?;
    Ok(Step::Continue)
}

fn delete<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Step> {
    let id = ask!(input, out, "Book id to delete: ");
    let result = api.delete_book(&id)?;
    print_messages(out, &result.messages)?;
    Ok(Step::Continue)
}

fn search<S: DataStore, R: BufRead, W: Write>(
    api: &ShelfApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Step> {
    let query = ask!(input, out, "Title, author or year: ");
    let result = api.search_books(&query)?;
    print_books(out, &result.listed_books)?;
    print_messages(out, &result.messages)?;
    Ok(Step::Continue)
}

fn list<S: DataStore, W: Write>(api: &ShelfApi<S>, out: &mut W) -> Result<Step> {
    let result = api.list_books()?;
    print_books(out, &result.listed_books)?;
    print_messages(out, &result.messages)?;
    Ok(Step::Continue)
}

fn change_status<S: DataStore, R: BufRead, W: Write>(
    api: &mut ShelfApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<Step> {
    let id = ask!(input, out, "Book id: ");
    let status = ask!(input, out, "New status (available/checked-out): ");
    let result = api.change_status(&id, &status)?;
    print_messages(out, &result.messages)?;
    Ok(Step::Continue)
}
