pub mod auth;
pub mod flatten_double_vec;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
pub mod spreadsheet_write;
pub mod submission_sheet;
pub mod value_range_factory;
