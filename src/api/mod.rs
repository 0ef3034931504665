// Lookup service access
pub mod client;
pub mod lookup;

// Re-export the calls the shell dispatches to
pub use lookup::{fetch_ip_details, lookup_url, parse_lookup_response};
