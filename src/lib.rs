pub mod config;
pub mod datasets;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod process;

pub use datasets::{Dataset, DATASETS};
pub use error::{ConvertError, Skip};
pub use process::Shape;
