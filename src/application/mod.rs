pub mod forwarder;
pub mod spreadsheet_locks;
