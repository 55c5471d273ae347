//! State Active Duty pay engine for the Texas Military Department
//!
//! This crate calculates pay for Army and Air National Guard and Texas State
//! Guard members on state active duty, broken down by calendar month, from
//! the 2024 rate schedule. It also compares an original calculation against
//! a corrected one and serves both over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
