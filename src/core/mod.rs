pub mod engine;
pub mod pipeline;
pub mod prober;

pub use crate::domain::model::{ClassifiedDomain, ClassifyResult, Label};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Prober, Storage};
pub use crate::utils::error::Result;
