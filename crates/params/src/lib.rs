//! Constant values for the nttkex library
//!
//! Parameter sets are plain constants here; validation and table
//! construction happen in `nttkex-algorithms`.

#![no_std]

pub mod kex;
