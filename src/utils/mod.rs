//! Module for additional helper functions
pub mod test_helper;
