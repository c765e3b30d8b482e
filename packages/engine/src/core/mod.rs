//! Core building blocks: math types and logging utilities.

// Macros first so every later module can use them.
#[macro_use]
pub mod utils;
pub mod math;
