// Day Timeline Library
// Lays out a single day's events on a 24-hour axis

pub mod models;
pub mod services;
pub mod utils;
