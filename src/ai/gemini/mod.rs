pub mod client;
pub mod cover;

pub use cover::GeminiCoverClient;
