pub mod config;
pub mod logging;

pub mod batch;
pub mod http;
pub mod outcome;
pub mod scan;
pub mod target;
