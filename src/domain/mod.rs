// Domain layer - Pages and their render contexts
pub mod page;
