#![warn(clippy::uninlined_format_args)]

pub mod genai;
pub mod rates;
pub mod receipt;
pub mod store;

pub use genai::{GenAiClient, GenAiError};
pub use rates::GenAiRateSource;
pub use receipt::GenAiReceiptExtractor;
pub use store::JsonFileStore;
