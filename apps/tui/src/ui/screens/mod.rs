pub mod dashboard;
pub mod detail;
pub mod radar;
