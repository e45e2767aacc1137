//! various helper functions used to simplify unit tests.
//!
//! **Note**: This module is only compiled during testing, so its items do not appear in the
//! generated documentation.
