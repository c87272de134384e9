// img2text - image description relay over the Pollinations API

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pollinations;
pub mod server;
pub mod storage;
pub mod utils;
pub mod vision;
