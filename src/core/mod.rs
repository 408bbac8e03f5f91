pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    DecodeOutcome, FetchResult, GraphMarkup, RefreshReport, SkipReason,
};
pub use crate::domain::ports::{ConfigProvider, Container, Pipeline};
pub use crate::utils::error::Result;
