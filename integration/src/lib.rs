//! End-to-end tests for the autodata crates live in `tests/`.

#![forbid(unsafe_code)]
