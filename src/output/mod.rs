pub mod report;
pub mod response;

pub use response::{print_envelope, EXIT_FAILURE};
