#![allow(nonstandard_style)]
pub mod hash;
pub mod crc;
pub mod stream;
pub mod display;
pub mod args;
