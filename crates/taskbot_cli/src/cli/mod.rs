use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskbot", author, version, about = "Personal task-tracking chatbot", long_about = None)]
pub struct Cli {
    /// Override the task data file location
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to run once instead of starting the interactive session
    ///
    /// Example: taskbot todo buy milk
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Command table shown by `help` / `?` in the interactive session.
pub fn help_text() -> &'static str {
    "Commands:\n\
     \x20 todo DESC                          add a plain task\n\
     \x20 deadline DESC /by DATE             add a task due on DATE (yyyy-mm-dd)\n\
     \x20 event DESC /from DATE /to DATE     add a dated event\n\
     \x20 list                               show all tasks\n\
     \x20 mark N / unmark N                  set or clear the done flag of task N\n\
     \x20 delete N                           remove task N\n\
     \x20 find KEYWORD                       show tasks whose description matches\n\
     \x20 sort                               show tasks ordered by date\n\
     \x20 bye                                save and quit"
}
