#[macro_use]
pub mod log;
pub(crate) mod perf_timer;
