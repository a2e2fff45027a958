pub mod kv;
pub mod limit;
pub mod planner;
pub mod schedule;
pub mod tasks;

/// Record keys in the key-value store. One record per collection.
pub const TASKS_KEY: &str = "maintenanceTasks";
pub const LIMIT_KEY: &str = "maintenanceLimit";
pub const SCHEDULE_KEY: &str = "maintenanceSchedule";
