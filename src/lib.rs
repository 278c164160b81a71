pub mod config;
pub mod maven;
pub mod search;
pub mod server;
pub mod util;

pub use config::ResolverConfig;
pub use maven::{ArtifactCoordinates, ClassifierPolicy};
pub use search::error::{ErrorKind, ResolveError};
pub use search::resolver::{Nexus3SearchService, VersionReader, VersionResolver};
pub use search::{resolve_query, resolve_versions, VersionQuery};
