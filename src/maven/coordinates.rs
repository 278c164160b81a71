use crate::search::error::ResolveError;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenArtifactId(pub String);

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MavenGroupId(pub String);

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum MavenClassifier {
    Unclassified,
    Classified(String),
}
impl MavenClassifier {
    /// blank or missing classifiers are treated as 'no classifier'
    pub fn from_optional(raw: Option<&str>) -> MavenClassifier {
        match non_blank(raw) {
            Some(c) => MavenClassifier::Classified(c),
            None => MavenClassifier::Unclassified,
        }
    }
}

/// The coordinates a version search is made for. There is no version here - finding the
///  versions is the whole point.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ArtifactCoordinates {
    pub repository_id: Option<String>,
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub packaging: Option<String>,
}
impl ArtifactCoordinates {
    /// All values are trimmed, blank optional values are dropped.
    pub fn new(
        repository_id: Option<&str>,
        group_id: &str,
        artifact_id: &str,
        packaging: Option<&str>,
    ) -> Result<ArtifactCoordinates, ResolveError> {
        let group_id = non_blank(Some(group_id))
            .ok_or_else(|| ResolveError::Configuration("the groupId cannot be empty".to_string()))?;
        let artifact_id = non_blank(Some(artifact_id))
            .ok_or_else(|| ResolveError::Configuration("the artifactId cannot be empty".to_string()))?;

        let packaging = non_blank(packaging);
        if let Some(p) = &packaging {
            if p.starts_with('.') {
                return Err(ResolveError::Configuration(format!("packaging must not start with a '.': {:?}", p)));
            }
        }

        Ok(ArtifactCoordinates {
            repository_id: non_blank(repository_id),
            group_id: MavenGroupId(group_id),
            artifact_id: MavenArtifactId(artifact_id),
            packaging,
        })
    }
}

pub(crate) fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
