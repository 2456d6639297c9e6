//! Integration tests for progtrim

mod filter_test;
