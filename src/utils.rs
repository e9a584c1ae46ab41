pub mod filesystem;
pub mod format;
pub mod paths;
