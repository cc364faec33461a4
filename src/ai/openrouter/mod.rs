pub mod client;
pub mod enhance;
pub mod types;

pub use enhance::OpenRouterClient;
