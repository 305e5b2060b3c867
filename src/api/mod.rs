pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, system_routes};
pub use state::{AppState, SystemInfo};
