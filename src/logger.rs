//! Terminal output helpers. Nothing is written to disk.

pub fn log_info(message: &str) {
    println!("ℹ️  {}", message);
}

pub fn log_success(message: &str) {
    println!("✅ {}", message);
}

pub fn log_warning(message: &str) {
    println!("⚠️  {}", message);
}

/// Prints an error with its context to stderr.
pub fn log_error(context: &str, error: impl std::fmt::Display) {
    eprintln!("❌ {}: {}", context, error);
}
