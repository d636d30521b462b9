use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Debug,
}

impl Level {
    pub fn from_verbosity(verbosity: u8) -> Self {
        if verbosity > 0 {
            Level::Debug
        } else {
            Level::Error
        }
    }
}

/// Console logger. Built once from the `-v` count and passed down by reference.
#[derive(Debug)]
pub struct Logger {
    level: Level,
}

impl Logger {
    pub fn new(verbosity: u8) -> Self {
        Logger {
            level: Level::from_verbosity(verbosity),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn section(&self, title: &str) {
        if !self.enabled(Level::Debug) {
            return;
        }
        println!("\n{}", "━".repeat(50).bright_black());
        println!("{}", title.bright_blue().bold());
        println!("{}", "━".repeat(50).bright_black());
    }

    pub fn success(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("{} {}", "✓".green(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("{} {}", "ℹ".blue(), message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("{} {}", "⚠".yellow(), message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("{} {}", "·".bright_black(), message.bright_black());
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}
