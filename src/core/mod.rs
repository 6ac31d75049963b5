pub mod aggregate;
pub mod backup;
pub mod book;
pub mod calendar;
pub mod calendar_view;
pub mod config;
pub mod holidays;
pub mod input;
pub mod ledger;
pub mod log;
pub mod set;
pub mod summary;
