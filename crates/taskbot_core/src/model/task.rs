use crate::error::AppError;
use std::fmt;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar dates are read and written as `yyyy-mm-dd` everywhere.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub fn parse_date(input: &str) -> Result<Date, AppError> {
    Date::parse(input.trim(), DATE_FORMAT)
        .map_err(|_| AppError::invalid_input("invalid date format, expected yyyy-mm-dd"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: Date },
    Event { from: Date, to: Date },
}

impl TaskKind {
    pub fn marker(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// The date the task is sorted by: `by` for deadlines, `from` for events.
    pub fn relevant_date(&self) -> Option<Date> {
        match self {
            Self::Todo => None,
            Self::Deadline { by } => Some(*by),
            Self::Event { from, .. } => Some(*from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline<D: Into<String>>(description: D, by: Date) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event<D: Into<String>>(description: D, from: Date, to: Date) -> Result<Self, AppError> {
        if from >= to {
            return Err(AppError::invalid_input(
                "start date must be before end date",
            ));
        }
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        })
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.marker(), done, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                let by = by.format(DATE_FORMAT).map_err(|_| fmt::Error)?;
                write!(f, " (by: {by})")
            }
            TaskKind::Event { from, to } => {
                let from = from.format(DATE_FORMAT).map_err(|_| fmt::Error)?;
                let to = to.format(DATE_FORMAT).map_err(|_| fmt::Error)?;
                write!(f, " (from: {from} to: {to})")
            }
        }
    }
}
