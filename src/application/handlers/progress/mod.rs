//! Progress handlers: completion marking and summary queries.

mod get_summary;
mod mark_lab_complete;
mod mark_module_complete;

pub use get_summary::GetProgressSummaryHandler;
pub use mark_lab_complete::MarkLabCompleteHandler;
pub use mark_module_complete::MarkModuleCompleteHandler;

pub(crate) use get_summary::summarize;
