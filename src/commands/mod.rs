pub mod add;
pub mod assign;
pub mod edit;
pub mod limit;
pub mod list;
pub mod plan;
pub mod print;
pub mod remove;
