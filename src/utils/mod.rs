pub mod logger;
pub mod password;
