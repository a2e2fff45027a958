use std::path::Path;

use crate::error::{HomeplanError, Result};
use crate::output::Format;
use crate::store::planner;

pub fn run(dir: &Path, id: String, format: Format) -> Result<()> {
    let mut planner = planner::open_dir(dir)?;
    if !planner.remove_task(&id)? {
        return Err(HomeplanError::TaskNotFound(id));
    }
    match format {
        Format::Json => println!("{}", serde_json::json!({ "removed": id })),
        _ => println!("removed {id}"),
    }
    Ok(())
}
