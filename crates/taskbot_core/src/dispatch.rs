use crate::command::Command;
use crate::error::AppError;
use crate::list::TaskList;
use crate::model::Task;
use crate::storage::line_store;
use std::path::Path;

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
pub const NO_TASKS: &str = "No outstanding tasks.";
pub const NO_MATCHES: &str = "No tasks match your search.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub exit: bool,
}

impl Reply {
    fn message<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    fn farewell() -> Self {
        Self {
            message: FAREWELL.to_string(),
            exit: true,
        }
    }
}

/// Executes one parsed command against the task list and its backing file.
/// Every successful mutation is written through to `data_path` before the
/// reply is produced.
pub fn dispatch(
    command: Command,
    tasks: &mut TaskList,
    data_path: &Path,
) -> Result<Reply, AppError> {
    match command {
        Command::Bye => Ok(Reply::farewell()),
        Command::List => {
            if tasks.is_empty() {
                Ok(Reply::message(NO_TASKS))
            } else {
                Ok(Reply::message(tasks.render()))
            }
        }
        Command::Sort => {
            if tasks.is_empty() {
                Ok(Reply::message(NO_TASKS))
            } else {
                Ok(Reply::message(tasks.sorted().render()))
            }
        }
        Command::Mark(number) => {
            let len = tasks.len();
            let index = resolve_index(number, len)?;
            let rendered = {
                let task = tasks
                    .get_mut(index)
                    .ok_or_else(|| invalid_task_number(len))?;
                task.mark();
                task.to_string()
            };
            line_store::save(data_path, tasks)?;
            Ok(Reply::message(format!(
                "Nice! I've marked this task as done:\n  {rendered}"
            )))
        }
        Command::Unmark(number) => {
            let len = tasks.len();
            let index = resolve_index(number, len)?;
            let rendered = {
                let task = tasks
                    .get_mut(index)
                    .ok_or_else(|| invalid_task_number(len))?;
                task.unmark();
                task.to_string()
            };
            line_store::save(data_path, tasks)?;
            Ok(Reply::message(format!(
                "OK, I've marked this task as not done yet:\n  {rendered}"
            )))
        }
        Command::Delete(number) => {
            let len = tasks.len();
            let index = resolve_index(number, len)?;
            let removed = tasks
                .remove(index)
                .ok_or_else(|| invalid_task_number(len))?;
            line_store::save(data_path, tasks)?;
            Ok(Reply::message(format!(
                "Noted. I've removed this task:\n  {removed}\nNow you have {}.",
                count_phrase(tasks.len())
            )))
        }
        Command::Todo(description) => add_task(Task::todo(description), tasks, data_path),
        Command::Deadline { description, by } => {
            add_task(Task::deadline(description, by), tasks, data_path)
        }
        Command::Event {
            description,
            from,
            to,
        } => add_task(Task::event(description, from, to)?, tasks, data_path),
        Command::Find(keyword) => {
            let matches = tasks.find(&keyword);
            if matches.is_empty() {
                Ok(Reply::message(NO_MATCHES))
            } else {
                Ok(Reply::message(matches.render()))
            }
        }
    }
}

fn add_task(task: Task, tasks: &mut TaskList, data_path: &Path) -> Result<Reply, AppError> {
    let rendered = task.to_string();
    tasks.add(task);
    line_store::save(data_path, tasks)?;
    Ok(Reply::message(format!(
        "Got it. I've added this task:\n  {rendered}\nNow you have {}.",
        count_phrase(tasks.len())
    )))
}

/// Translates a user-facing 1-based number into a dense 0-based index.
fn resolve_index(number: usize, len: usize) -> Result<usize, AppError> {
    if number == 0 || number > len {
        return Err(invalid_task_number(len));
    }
    Ok(number - 1)
}

fn invalid_task_number(len: usize) -> AppError {
    AppError::invalid_input(format!(
        "invalid task number, you only have {}.",
        count_phrase(len)
    ))
}

fn count_phrase(len: usize) -> String {
    if len == 1 {
        "1 task".to_string()
    } else {
        format!("{len} tasks")
    }
}
