// Presentation layer - HTTP routing and handlers
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod router;
