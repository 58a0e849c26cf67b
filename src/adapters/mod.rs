// Adapters layer: concrete implementations for external systems (HTTP for now).

pub mod http;
