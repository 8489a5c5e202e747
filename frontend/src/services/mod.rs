pub mod api;
pub mod calendar_export;
pub mod date_utils;
pub mod logging;
