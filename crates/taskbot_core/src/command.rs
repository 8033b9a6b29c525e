use crate::error::AppError;
use crate::model::parse_date;
use time::Date;

/// A fully validated command line. Parsing happens before any mutation, so
/// a command either executes completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Sort,
    /// 1-based task number as entered by the user.
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Todo(String),
    Deadline {
        description: String,
        by: Date,
    },
    Event {
        description: String,
        from: Date,
        to: Date,
    },
    Find(String),
}

/// Splits the first word off the line as the command keyword and parses the
/// remainder per command. Keywords are case-sensitive.
pub fn parse(line: &str) -> Result<Command, AppError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "bye" if rest.is_empty() => Ok(Command::Bye),
        "list" if rest.is_empty() => Ok(Command::List),
        "sort" if rest.is_empty() => Ok(Command::Sort),
        "mark" => parse_task_number(rest, "mark").map(Command::Mark),
        "unmark" => parse_task_number(rest, "unmark").map(Command::Unmark),
        "delete" => parse_task_number(rest, "delete").map(Command::Delete),
        "todo" => {
            if rest.is_empty() {
                Err(AppError::invalid_input(
                    "invalid todo format. Example: todo eat lunch",
                ))
            } else {
                Ok(Command::Todo(rest.to_string()))
            }
        }
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "find" => {
            if rest.is_empty() {
                Err(AppError::invalid_input(
                    "invalid find format. Example: find book",
                ))
            } else {
                Ok(Command::Find(rest.to_string()))
            }
        }
        _ => Err(AppError::invalid_input(
            "unrecognized command. Try: todo, deadline, event, list, mark, unmark, delete, find, sort, bye",
        )),
    }
}

fn parse_task_number(rest: &str, keyword: &str) -> Result<usize, AppError> {
    if rest.is_empty() {
        return Err(AppError::invalid_input(format!(
            "specify which task to {keyword}. Example: {keyword} 1"
        )));
    }
    rest.parse::<usize>().map_err(|_| {
        AppError::invalid_input(format!(
            "task number must be a positive integer. Example: {keyword} 1"
        ))
    })
}

fn parse_deadline(rest: &str) -> Result<Command, AppError> {
    let invalid = || {
        AppError::invalid_input(
            "invalid deadline format. Example: deadline return book /by 2024-01-01",
        )
    };

    let (description, by_raw) = rest.split_once(" /by ").ok_or_else(invalid)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(invalid());
    }

    Ok(Command::Deadline {
        description: description.to_string(),
        by: parse_date(by_raw)?,
    })
}

fn parse_event(rest: &str) -> Result<Command, AppError> {
    let invalid = || {
        AppError::invalid_input(
            "invalid event format. Example: event gym workout /from 2024-01-01 /to 2024-01-02",
        )
    };

    let (description, dates) = rest.split_once(" /from ").ok_or_else(invalid)?;
    let (from_raw, to_raw) = dates.split_once(" /to ").ok_or_else(invalid)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(invalid());
    }

    let from = parse_date(from_raw)?;
    let to = parse_date(to_raw)?;
    if from >= to {
        return Err(AppError::invalid_input(
            "start date must be before end date",
        ));
    }

    Ok(Command::Event {
        description: description.to_string(),
        from,
        to,
    })
}
