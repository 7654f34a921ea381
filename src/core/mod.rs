pub mod editor;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{CleanedRecord, Document, EditReport, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Prompter, Storage};
pub use crate::utils::error::Result;
