pub mod cohorts;
pub mod respond;
pub mod students;
