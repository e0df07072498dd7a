//! Protocol Tests
//!
//! Request/response encoding and decoding against documented gateway frames.

mod response_tests;
mod concurrency_tests;
