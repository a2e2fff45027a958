use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::model::{Category, Task};
use crate::plan::{Grid, PrintPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

fn short_id(task: &Task) -> &str {
    task.id.get(..8).unwrap_or(&task.id)
}

pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let truncated: String = name.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

pub fn print_task(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&task)?),
        Format::Pretty => {
            println!("[{}] {} ({}m)", task.id, task.name, task.minutes);
            println!("  category: {} | frequency: {}", task.category, task.frequency);
        }
        Format::Minimal => {
            println!(
                "{:8} {:28} {:>4} {:8} {}",
                short_id(task),
                truncate_name(&task.name, 28),
                task.minutes,
                task.frequency.to_string(),
                task.category
            );
        }
    }
    Ok(())
}

pub fn print_tasks(tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&tasks)?),
        Format::Pretty => {
            for category in Category::ALL {
                let group: Vec<&Task> =
                    tasks.iter().filter(|t| t.category == category.label()).collect();
                if group.is_empty() {
                    continue;
                }
                println!("{}", category.label().bold());
                for task in group {
                    println!(
                        "  [{}] {} ({}m, {})",
                        task.id, task.name, task.minutes, task.frequency
                    );
                }
                println!();
            }
        }
        Format::Minimal => {
            println!("{:8} {:28} {:>4} {:8} CATEGORY", "ID", "NAME", "MIN", "FREQ");
            println!("{}", "-".repeat(70));
            for task in tasks {
                print_task(task, Format::Minimal)?;
            }
        }
    }
    Ok(())
}

pub fn print_grid(grid: &Grid, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&grid)?),
        Format::Pretty => {
            for (index, summary) in grid.periods.iter().enumerate() {
                let totals = format!("{} / {}m", summary.total_minutes, grid.limit);
                let totals = if summary.over_limit {
                    format!("{}", totals.red().bold())
                } else {
                    totals
                };
                println!("{}  {}", summary.period.label().bold(), totals);

                for row in &grid.rows {
                    let cell = &row.cells[index];
                    if cell.is_empty() {
                        continue;
                    }
                    println!("  {}", row.category.label());
                    for entry in cell {
                        println!("    {} ({}m)", entry.name, entry.minutes);
                    }
                }
                println!();
            }
        }
        Format::Minimal => {
            println!("{:10} {:>12}", "PERIOD", "MINUTES");
            for summary in &grid.periods {
                let over = if summary.over_limit { " OVER" } else { "" };
                println!(
                    "{:10} {:>7} / {}{}",
                    summary.period.label(),
                    summary.total_minutes,
                    grid.limit,
                    over
                );
            }
        }
    }
    Ok(())
}

pub fn print_plan(plan: &PrintPlan, format: Format) -> Result<()> {
    match (plan, format) {
        (PrintPlan::Empty, Format::Json) => {
            println!("{}", serde_json::json!({ "empty": true }));
        }
        (PrintPlan::Empty, _) => {
            println!("No tasks scheduled yet. Assign tasks to a period first.");
        }
        (PrintPlan::Sections(sections), Format::Json) => {
            println!("{}", serde_json::to_string(&sections)?);
        }
        (PrintPlan::Sections(sections), Format::Pretty) => {
            for section in sections {
                println!("{}", section.period.label().bold());
                for group in &section.groups {
                    println!("  {}", group.category.label());
                    for name in &group.task_names {
                        println!("    - {name}");
                    }
                }
                println!();
            }
        }
        (PrintPlan::Sections(sections), Format::Minimal) => {
            for section in sections {
                let count: usize = section.groups.iter().map(|g| g.task_names.len()).sum();
                println!("{:10} {count} tasks", section.period.label());
            }
        }
    }
    Ok(())
}
