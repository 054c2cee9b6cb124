pub mod routes;
pub mod startup;
pub mod errors;
pub mod extract;
pub mod openapi;

pub use routes::{build_router, AppState};
pub use startup::run;
