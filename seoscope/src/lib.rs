pub mod api;
pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    LookupOptions, ServeOptions, fetch_config_from_matches, handle_lookup, handle_serve,
    init_tracing, parse_bind_addr,
};

// Re-export lookup functionality from seoscope-core
pub use seoscope_core::{execute_lookup, normalize_domain};
