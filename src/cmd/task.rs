//! To-do list commands: `task list`, `add task`, `remove task`.

use anyhow::Result;

use helper::config::Config;
use helper::operations;
use helper::prompt::{Prompter, TerminalPrompter};
use helper::repository::FileTaskRepository;
use helper::ui::{colors, format};

fn repository() -> Result<FileTaskRepository> {
    let config = Config::load()?;
    Ok(FileTaskRepository::new(config.tasks_file))
}

fn print_tasks(tasks: &[String]) {
    if !helper::ui::is_quiet() {
        println!("{}", colors::heading("Your tasks:"));
    }
    for line in format::numbered(tasks) {
        println!("{}", line);
    }
}

pub fn cmd_list() -> Result<()> {
    let repo = repository()?;
    let tasks = operations::list_tasks(&repo)?;

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    print_tasks(&tasks);
    Ok(())
}

pub fn cmd_add(text: Option<String>) -> Result<()> {
    let repo = repository()?;
    let mut prompter = TerminalPrompter;

    let text = operations::answer_or_prompt(text, &mut prompter, "Task")?;
    let added = operations::add_task(&repo, &text)?;

    super::success(&format!("Task added: \"{}\"", added));
    Ok(())
}

pub fn cmd_remove(index: Option<String>) -> Result<()> {
    let repo = repository()?;

    let selection = match index {
        Some(index) => index,
        None => {
            let tasks = operations::list_tasks(&repo)?;
            if tasks.is_empty() {
                println!("No tasks to remove.");
                return Ok(());
            }
            print_tasks(&tasks);
            let mut prompter = TerminalPrompter;
            prompter.input("Task number to remove")?
        }
    };

    let removed = operations::remove_task(&repo, &selection)?;
    super::success(&format!("Removed task: \"{}\"", removed));
    Ok(())
}
