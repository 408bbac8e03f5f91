pub mod error;
pub mod logger;
pub mod markup;
pub mod monitor;
pub mod validation;
