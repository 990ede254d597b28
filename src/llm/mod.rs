pub mod error;
pub mod markdown;
pub mod transport;

pub use error::LlmError;
pub use markdown::strip_code_fence;
pub use transport::{GeminiTransport, GenerateConfig, LlmTransport};
