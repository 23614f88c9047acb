pub mod aggregate;
pub mod bucket;
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod exec;
pub mod github;
pub mod model;
pub mod paginate;
pub mod report;
