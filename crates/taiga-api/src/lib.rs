pub mod api;
pub mod executor;
pub mod http;
pub mod pending;

pub use api::TaigaApi;
pub use executor::{ApiExecutor, Executor};
pub use http::HttpApi;
pub use pending::{Pending, Resolver};
