//! Host character-data API.
//!
//! Every generation offers the simple lowercase mapping. Only the full
//! generation offers `to_lower_full`; which one this crate targets is fixed
//! by `build.rs` through `cfg(case_api)`.

mod simple;

#[cfg(case_api = "full")]
mod full;

pub use simple::simple_lowercase;

#[cfg(case_api = "full")]
pub use full::to_lower_full;

#[cfg(case_api = "full")]
pub const CASE_API: &str = "full";

#[cfg(case_api = "simple")]
pub const CASE_API: &str = "simple";
