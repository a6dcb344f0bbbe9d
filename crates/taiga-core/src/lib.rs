pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::{AppConfig, AuthConfig, HostConfig, KeyNames, KeysConfig};
pub use error::TaigaError;
pub use input::TextInput;
pub use result::TaigaResult;
pub use selection::SelectionState;
