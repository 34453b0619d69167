pub mod logger;
pub mod string_helpers;
pub mod time_helpers;
