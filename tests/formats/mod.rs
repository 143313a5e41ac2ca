//! Output format consistency tests

pub mod consistency_tests;
