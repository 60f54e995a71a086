pub mod cohort;
pub mod student;

// Re-export commonly used types
pub use cohort::*;
pub use student::*;
