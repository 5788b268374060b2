// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod declaration;
pub mod helpers;
pub mod logging;
pub mod util;

pub mod scan;
pub mod validate;
pub mod types_view;

pub mod commands;
