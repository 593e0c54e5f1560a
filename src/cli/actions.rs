//! The menu actions: one function per menu entry, each a thin layer of
//! prompting and display over a [`TaskStore`] operation.
//!
//! `NotFound` from the store is caught here and reported to the user;
//! anything else propagates as fatal.

use super::input;
use crate::error::StoreError;
use crate::format::task_table;
use crate::store::TaskStore;
use crate::types::{TaskDraft, TaskUpdate};
use anyhow::Result;
use colored::Colorize;

/// Show a table of all tasks.
pub fn show_all(store: &TaskStore) -> Result<()> {
    let tasks = store.tasks()?;
    println!("{}", task_table(&tasks));
    Ok(())
}

/// Show a table of tasks in one category (case-insensitive match).
pub fn show_for_category(store: &TaskStore) -> Result<()> {
    let category = input::prompt_required("Category")?.to_lowercase();
    let tasks: Vec<_> = store
        .tasks()?
        .into_iter()
        .filter(|t| t.category.to_lowercase() == category)
        .collect();
    println!("{}", task_table(&tasks));
    Ok(())
}

/// Prompt for the fields of a new task and add it.
pub fn add_task(store: &TaskStore) -> Result<()> {
    println!("New task:");
    let title = input::prompt_required("Title")?;
    let description = input::prompt_optional("Description")?;
    let category = input::prompt_required("Category")?;
    let due_date = input::prompt_due_date_required()?;
    let priority = input::prompt_priority_required()?;

    store.add(TaskDraft {
        title,
        description,
        category,
        due_date,
        priority,
    })?;
    println!("{}", "Task added".green());
    Ok(())
}

/// Prompt for sparse field updates and apply them to an existing task.
pub fn edit_task(store: &TaskStore) -> Result<()> {
    let id = input::prompt_task_id()?;
    if !store.exists(id)? {
        println!("{}", format!("No task with id '{id}'").red());
        return Ok(());
    }

    println!("New values (press Enter to leave a field unchanged):");
    let update = TaskUpdate {
        title: Some(input::prompt_optional("Title")?),
        description: Some(input::prompt_optional("Description")?),
        category: Some(input::prompt_optional("Category")?),
        due_date: input::prompt_due_date_or_blank()?,
        priority: input::prompt_priority_or_blank()?,
        status: None,
    };

    store.edit(id, &update)?;
    println!("{}", "Task updated".green());
    Ok(())
}

/// Mark a task as done.
pub fn mark_task_done(store: &TaskStore) -> Result<()> {
    let id = input::prompt_task_id()?;
    match store.mark_done(id) {
        Ok(()) => println!("{}", "Task marked as done".green()),
        Err(err @ StoreError::NotFound { .. }) => println!("{}", err.to_string().red()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Delete a task by id.
pub fn delete_task_by_id(store: &TaskStore) -> Result<()> {
    let id = input::prompt_task_id()?;
    match store.delete_by_id(id) {
        Ok(()) => println!("{}", "Task deleted".green()),
        Err(err @ StoreError::NotFound { .. }) => println!("{}", err.to_string().red()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Delete every task in a category (exact match) and report the count.
pub fn delete_tasks_by_category(store: &TaskStore) -> Result<()> {
    let category = input::prompt_required("Category to delete")?;
    let removed = store.delete_by_category(&category)?;
    println!("{}", format!("Tasks deleted: {removed}").green());
    Ok(())
}

/// Search tasks by keyword, category, or status tag.
pub fn search_tasks(store: &TaskStore) -> Result<()> {
    let query = input::prompt_required("Query")?;
    let tasks = store.search(&query)?;
    println!("{}", task_table(&tasks));
    Ok(())
}
