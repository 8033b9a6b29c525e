use crate::error::AppError;
use crate::list::TaskList;
use crate::model::{DATE_FORMAT, Task, TaskKind, parse_date};
use std::path::{Path, PathBuf};
use time::Date;

const DATA_FILE_NAME: &str = "tasks.txt";
const DATA_PATH_ENV_VAR: &str = "TASKBOT_DATA_PATH";
const FIELD_SEPARATOR: &str = " | ";

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub tasks: TaskList,
    /// Lines that could not be parsed and were dropped.
    pub skipped: usize,
}

/// Resolution order: env var, config `data_file`, platform default.
pub fn data_path(config_data_file: Option<&str>) -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(DATA_PATH_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config_data_file
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("taskbot").join(DATA_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskbot")
            .join(DATA_FILE_NAME))
    }
}

/// Loads the task file. An absent file is an empty list; corrupt lines are
/// skipped with a warning, never an error.
pub fn load(path: &Path) -> Result<LoadOutcome, AppError> {
    if !path.exists() {
        return Ok(LoadOutcome {
            tasks: TaskList::new(),
            skipped: 0,
        });
    }

    let content = std::fs::read_to_string(path).map_err(AppError::from)?;
    let mut tasks = TaskList::new();
    let mut skipped = 0;

    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(task) => tasks.add(task),
            Err(err) => {
                skipped += 1;
                log::warn!(
                    "{}:{}: skipping corrupt task line: {}",
                    path.display(),
                    line_number + 1,
                    err.message()
                );
            }
        }
    }

    Ok(LoadOutcome { tasks, skipped })
}

/// Serializes the full list, overwriting the file.
pub fn save(path: &Path, tasks: &TaskList) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(AppError::from)?;
    }

    let mut content = String::new();
    for task in tasks.tasks() {
        content.push_str(&serialize_line(task)?);
        content.push('\n');
    }
    std::fs::write(path, content).map_err(AppError::from)?;

    Ok(())
}

fn serialize_line(task: &Task) -> Result<String, AppError> {
    let done = if task.done { "1" } else { "0" };
    let line = match &task.kind {
        TaskKind::Todo => format!("T{FIELD_SEPARATOR}{done}{FIELD_SEPARATOR}{}", task.description),
        TaskKind::Deadline { by } => format!(
            "D{FIELD_SEPARATOR}{done}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            task.description,
            format_date(*by)?
        ),
        TaskKind::Event { from, to } => format!(
            "E{FIELD_SEPARATOR}{done}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            task.description,
            format_date(*from)?,
            format_date(*to)?
        ),
    };
    Ok(line)
}

fn format_date(date: Date) -> Result<String, AppError> {
    date.format(DATE_FORMAT)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

fn parse_line(line: &str) -> Result<Task, AppError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(AppError::invalid_data("expected at least 3 fields"));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => {
            return Err(AppError::invalid_data(format!(
                "done flag must be 0 or 1, got '{other}'"
            )));
        }
    };

    // Descriptions may contain the separator themselves, so the date fields
    // are taken from the end of the line and the middle is re-joined.
    let mut task = match fields[0] {
        "T" => Task::todo(join_description(&fields[2..])?),
        "D" => {
            if fields.len() < 4 {
                return Err(AppError::invalid_data("deadline line needs a date"));
            }
            Task::deadline(
                join_description(&fields[2..fields.len() - 1])?,
                parse_field_date(fields[fields.len() - 1])?,
            )
        }
        "E" => {
            if fields.len() < 5 {
                return Err(AppError::invalid_data("event line needs two dates"));
            }
            Task::event(
                join_description(&fields[2..fields.len() - 2])?,
                parse_field_date(fields[fields.len() - 2])?,
                parse_field_date(fields[fields.len() - 1])?,
            )
            .map_err(|err| AppError::invalid_data(err.message().to_string()))?
        }
        kind => {
            return Err(AppError::invalid_data(format!("unknown kind '{kind}'")));
        }
    };
    task.done = done;

    Ok(task)
}

fn join_description(fields: &[&str]) -> Result<String, AppError> {
    let description = fields.join(FIELD_SEPARATOR);
    if description.trim().is_empty() {
        return Err(AppError::invalid_data("description is empty"));
    }
    Ok(description)
}

fn parse_field_date(raw: &str) -> Result<Date, AppError> {
    parse_date(raw).map_err(|_| AppError::invalid_data(format!("bad date '{raw}'")))
}
