pub mod config;
pub mod dns;
pub mod error;
pub mod generate;
pub mod zone;

pub use generate::ConfigGenerator;
