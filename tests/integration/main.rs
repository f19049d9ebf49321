//! Integration tests

mod cli_tests;
mod translate_tests;
