pub mod classifier;
pub mod coordinates;
pub mod paths;

pub use classifier::ClassifierPolicy;
pub use coordinates::{ArtifactCoordinates, MavenArtifactId, MavenClassifier, MavenGroupId};
