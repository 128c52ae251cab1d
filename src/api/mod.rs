//! API layer - HTTP endpoints and middleware

pub mod address;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireApiToken;
pub use router::create_router;
pub use state::{AddressServiceTrait, AppState};
