//! `imgresize` is not a library.
//! This interface is unstable and subject to change at any time.
//! Please use this documentation only if you are developing `imgresize`.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod filename;
pub mod help;
pub mod plan;
mod resize;
