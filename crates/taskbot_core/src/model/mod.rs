pub mod task;

pub use task::{DATE_FORMAT, Task, TaskKind, parse_date};
