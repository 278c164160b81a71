use crate::maven::classifier::ClassifierPolicy;
use crate::maven::coordinates::ArtifactCoordinates;

pub const REPOSITORY: &str = "repository";
pub const GROUP: &str = "group";
pub const NAME: &str = "name";
pub const EXTENSION: &str = "maven.extension";
pub const CLASSIFIER: &str = "maven.classifier";
pub const CONTINUATION_TOKEN: &str = "continuationToken";

/// Query parameters for the search endpoint. Order is preserved, and a name can occur
///  more than once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParameters {
    pairs: Vec<(&'static str, String)>,
}
impl SearchParameters {
    pub fn new() -> SearchParameters {
        Default::default()
    }

    /// appends a value, keeping existing values for the same name
    pub fn add(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// replaces all existing values for the name
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.retain(|(n, _)| *n != name);
        self.add(name, value);
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs.iter()
            .filter(move |(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Maps coordinates to the search endpoint's filters. Blank optional values were already
///  dropped when the coordinates were built, so this can not fail.
pub fn build_parameters(coordinates: &ArtifactCoordinates, classifiers: &ClassifierPolicy) -> SearchParameters {
    let mut result = SearchParameters::new();

    if let Some(repository_id) = &coordinates.repository_id {
        result.add(REPOSITORY, repository_id);
    }
    result.add(GROUP, &coordinates.group_id.0);
    result.add(NAME, &coordinates.artifact_id.0);
    if let Some(packaging) = &coordinates.packaging {
        result.add(EXTENSION, packaging);
    }

    // NB: how several classifier filters are combined is up to the server
    for classifier in classifiers.required() {
        result.add(CLASSIFIER, classifier);
    }

    result
}
