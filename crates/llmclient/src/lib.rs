pub mod api;
pub mod error;
pub mod types;
pub mod utils;

mod models;

pub use error::ClientError;
pub use types::{ChatClient, MessagePart};
