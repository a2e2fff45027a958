use std::path::Path;

use crate::error::Result;
use crate::model::{Category, Frequency, Task};
use crate::output::{self, Format};
use crate::store::planner;

pub fn run(
    dir: &Path,
    category: Option<Category>,
    frequency: Option<Frequency>,
    format: Format,
) -> Result<()> {
    let planner = planner::open_dir(dir)?;
    let mut tasks: Vec<Task> = planner.tasks.tasks().to_vec();

    if let Some(c) = category {
        tasks.retain(|t| t.category == c.label());
    }
    if let Some(f) = frequency {
        tasks.retain(|t| t.frequency == f);
    }

    output::print_tasks(&tasks, format)
}
