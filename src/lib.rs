// Library for tests to access modules

pub mod config;
pub mod models;
pub mod observe;
pub mod state;
pub mod version;
