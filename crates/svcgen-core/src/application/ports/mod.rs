//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory listing, exclusive create, text read/write
//!   - `ConfigPrompter`: Collects the service name, author and license
//!   - `DependencyInstaller`: Runs the package manager
//!   - `Reporter`: Prints status lines
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `Orchestrator::run`

pub mod output;

pub use output::{
    ConfigPrompter, DependencyInstaller, DirEntry, EntryKind, Filesystem, InstallStatus, Reporter,
};

#[cfg(test)]
pub use output::{MockConfigPrompter, MockDependencyInstaller, MockFilesystem, MockReporter};
