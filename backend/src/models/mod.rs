pub mod auth;
pub mod medication;
pub mod medication_log;
pub mod stats;
pub mod user;
