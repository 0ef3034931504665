// Core data shapes shared by every component
pub mod context;
pub mod field;
pub mod ip_record;

// Re-export the types the rest of the crate names constantly
pub use context::AppContext;
pub use field::RecordField;
pub use ip_record::{IpRecord, NOT_AVAILABLE};
