pub mod command_handler;
pub mod event_handler;
pub mod submission_sheet;
