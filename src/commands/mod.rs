pub mod config;
pub mod context;
pub mod cwd;
pub mod plan;
pub mod precheck;
pub mod profiles;
pub mod quote;
