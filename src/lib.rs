// src/lib.rs

//! College Catalog Crawler Library

pub mod dedup;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod stats;
pub mod storage;
pub mod utils;
