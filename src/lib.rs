pub mod logger;
pub mod testgen;
