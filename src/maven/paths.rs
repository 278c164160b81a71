use anyhow::anyhow;

use crate::maven::coordinates::{MavenArtifactId, MavenGroupId};

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

#[derive(Debug, Eq, PartialEq)]
pub struct MavenRepoPath<'a> {
    pub group_id: MavenGroupId,
    pub artifact_id: MavenArtifactId,
    pub version: &'a str,
    pub file_name: &'a str,
}

/// path is the relative path inside a maven repository, i.e. it starts with something like
///  "org/..." or "com/...". Anything in front of the group (e.g. the repository part of a
///  download URL) ends up in the group id, the version and file name are taken from the end.
pub fn parse_repo_path(path: &str) -> anyhow::Result<MavenRepoPath> {
    let trimmed = path.trim_start_matches('/');

    let mut segments = trimmed.rsplitn(4, '/');
    let file_name = segments.next().filter(|s| !s.is_empty());
    let version = segments.next().filter(|s| !s.is_empty());
    let artifact_id = segments.next().filter(|s| !s.is_empty());
    let group_path = segments.next().filter(|s| !s.is_empty());

    let (Some(file_name), Some(version), Some(artifact_id), Some(group_path)) = (file_name, version, artifact_id, group_path) else {
        return Err(anyhow!("not a valid Maven artifact path: {:?}", path));
    };

    check_file_name(file_name, artifact_id, version)
        .map_err(|e| anyhow!("not a valid Maven artifact path: {:?} - {}", path, e))?;

    Ok(MavenRepoPath {
        group_id: MavenGroupId(group_path.replace('/', ".")),
        artifact_id: MavenArtifactId(artifact_id.to_string()),
        version,
        file_name,
    })
}

/// convenience for when only the version is of interest
pub fn version_from_path(path: &str) -> Option<&str> {
    parse_repo_path(path).ok().map(|p| p.version)
}

fn check_file_name(file_name: &str, artifact_id: &str, version: &str) -> anyhow::Result<()> {
    let Some(after_artifact) = file_name
        .strip_prefix(artifact_id)
        .and_then(|s| s.strip_prefix('-'))
    else {
        return Err(anyhow!("file name {} does not start with artifact id {}", file_name, artifact_id));
    };

    // NB: timestamped snapshot files replace '-SNAPSHOT' with '-<timestamp>-<build number>'
    let expected_prefix = version.strip_suffix(SNAPSHOT_SUFFIX).unwrap_or(version);
    if !after_artifact.starts_with(expected_prefix) {
        return Err(anyhow!("file name {} does not contain version {}", file_name, version));
    }
    Ok(())
}
