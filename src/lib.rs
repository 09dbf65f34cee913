// Library for tests to access modules

pub mod alerts;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod ranker;
pub mod recorder;
pub mod routes;
pub mod sampler;
pub mod source;
pub mod sysinfo_repo;
pub mod terminate;
pub mod version;
