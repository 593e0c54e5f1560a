//! Console output formatting for task lists.

use crate::types::Task;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// Column headers for the task table.
const HEADERS: [&str; 7] = [
    "ID",
    "Status",
    "Title",
    "Description",
    "Category",
    "Due date",
    "Priority",
];

/// Render a list of tasks as a console table, one row per task in the
/// order given.
pub fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);

    for task in tasks {
        table.add_row(vec![
            task.id.to_string(),
            task.status.as_str().to_string(),
            task.title.clone(),
            task.description.clone(),
            task.category.clone(),
            task.due_date.to_string(),
            task.priority.as_str().to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Priority, Status};
    use chrono::NaiveDate;

    #[test]
    fn table_contains_one_row_per_task() {
        let tasks = vec![
            Task {
                title: "Task 1".to_string(),
                description: "first".to_string(),
                category: "Work".to_string(),
                due_date: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
                priority: Priority::High,
                id: 1,
                status: Status::Done,
            },
            Task {
                title: "Task 2".to_string(),
                description: "second".to_string(),
                category: "Personal".to_string(),
                due_date: NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
                priority: Priority::Medium,
                id: 2,
                status: Status::NotDone,
            },
        ];

        let rendered = task_table(&tasks).to_string();
        assert!(rendered.contains("Task 1"));
        assert!(rendered.contains("Task 2"));
        assert!(rendered.contains("2023-11-05"));
        assert!(rendered.contains("не выполнена"));
    }

    #[test]
    fn empty_list_renders_headers_only() {
        let rendered = task_table(&[]).to_string();
        assert!(rendered.contains("Due date"));
        assert!(!rendered.contains("Task"));
    }
}
