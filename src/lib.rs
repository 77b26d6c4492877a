#![doc = include_str!("../README.md")]

pub mod bound;
pub mod error;
pub mod print;
pub mod table;
