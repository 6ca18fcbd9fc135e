//! Small support primitives shared by the mote boot crates.
//!
//! Everything in here is `no_std`, allocation-free and safe to use before
//! any kernel service is online.

#![cfg_attr(not(test), no_std)]

pub mod init_flag;
pub mod trace;

pub use init_flag::InitFlag;
pub use trace::NameTrace;
