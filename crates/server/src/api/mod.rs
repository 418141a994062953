pub mod catalogs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod scans;
pub mod search;

pub use routes::create_router;
