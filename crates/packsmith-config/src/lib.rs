pub mod assemble;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod fragments;
pub mod layout;
pub mod options;
pub mod plugin;

// Re-export main types
pub use assemble::*;
pub use entry::*;
pub use error::*;
pub use layout::*;
pub use options::*;
pub use plugin::PluginSpec;

// Re-export discovery
pub use discovery::{InputDiscovery, InputSource, PackageDescriptor};
