use std::path::Path;

use crate::error::Result;
use crate::output::Format;
use crate::store::planner;

pub fn run(dir: &Path, minutes: Option<u32>, format: Format) -> Result<()> {
    let mut planner = planner::open_dir(dir)?;
    let value = match minutes {
        Some(minutes) => planner.set_limit(minutes)?,
        None => planner.limit(),
    };
    match format {
        Format::Json => println!("{}", serde_json::json!({ "limit": value })),
        _ => println!("limit: {value}m"),
    }
    Ok(())
}
