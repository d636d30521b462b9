// Re-export specific items from logger.rs
pub use self::logger::Logger;

// Declare logger.rs as a module
mod logger;
