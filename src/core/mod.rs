pub mod etl;
pub mod grid;
pub mod header;
pub mod html;
pub mod mapper;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod rows;

pub use crate::domain::model::{SourceDocument, TransformResult, TypedRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
