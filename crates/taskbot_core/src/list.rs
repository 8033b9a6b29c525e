use crate::model::Task;
use std::cmp::Ordering;

/// Ordered task collection. Insertion order defines display order; indices
/// are 0-based internally and stay dense after deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Renders every task on its own line, prefixed by its 1-based index.
    pub fn render(&self) -> String {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}. {}", index + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Case-insensitive substring match over descriptions. The result is a
    /// fresh list, renumbered from 1.
    pub fn find(&self, keyword: &str) -> TaskList {
        let needle = keyword.to_lowercase();
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.description.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Self { tasks }
    }

    /// A sorted view: undated tasks first in insertion order, then dated
    /// tasks by their relevant date, ties broken by description. Never
    /// mutates the stored order.
    pub fn sorted(&self) -> TaskList {
        let mut tasks = self.tasks.clone();
        tasks.sort_by(|a, b| match (a.kind.relevant_date(), b.kind.relevant_date()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => left
                .cmp(&right)
                .then_with(|| a.description.cmp(&b.description)),
        });
        Self { tasks }
    }
}
