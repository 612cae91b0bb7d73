pub mod format;
pub mod formatters;
pub mod onboard;
pub mod run;
pub mod status;
