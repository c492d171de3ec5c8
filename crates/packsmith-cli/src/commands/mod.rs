//! Command implementations.
//!
//! - [`config`] - assemble and print the bundler configuration
//! - [`init`] - relay `npm init`

pub mod config;
pub mod init;

pub use config::execute as config_execute;
pub use init::execute as init_execute;
