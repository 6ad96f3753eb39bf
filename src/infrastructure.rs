pub mod db;
pub mod session;
pub mod telemetry;
pub mod utils;
