pub mod footer;
pub mod outlook;
pub mod today;
