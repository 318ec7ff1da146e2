//! Integration tests for conform.

mod arrays;
mod laws;
mod logging;
mod messages;
mod nested_options;
