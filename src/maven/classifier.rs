use std::collections::BTreeSet;

use crate::maven::coordinates::MavenClassifier;
use crate::search::error::ResolveError;

const DELIMITER: char = ',';
const NEGATION: char = '!';

/// Which classifiers a version search accepts, parsed from a comma separated list such as
///  "sources,javadoc" or "!tests". Unprefixed entries are required (and requested from the
///  server explicitly), entries prefixed with '!' are excluded.
///
/// An empty specification accepts everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifierPolicy {
    required: BTreeSet<String>,
    excluded: BTreeSet<String>,
}
impl ClassifierPolicy {
    pub fn any() -> ClassifierPolicy {
        Default::default()
    }

    pub fn parse(raw: &str) -> Result<ClassifierPolicy, ResolveError> {
        let mut result = ClassifierPolicy::any();
        if raw.trim().is_empty() {
            return Ok(result);
        }

        for token in raw.split(DELIMITER).map(str::trim) {
            if token.is_empty() {
                return Err(ResolveError::Configuration(format!("empty classifier in {:?}", raw)));
            }

            if let Some(excluded) = token.strip_prefix(NEGATION) {
                // NB: the name must follow the '!' directly
                if excluded.is_empty() || excluded.starts_with(NEGATION) || excluded.starts_with(char::is_whitespace) {
                    return Err(ResolveError::Configuration(format!("invalid classifier exclusion {:?} in {:?}", token, raw)));
                }
                result.excluded.insert(excluded.to_string());
            }
            else {
                result.required.insert(token.to_string());
            }
        }

        if let Some(conflict) = result.required.intersection(&result.excluded).next() {
            return Err(ResolveError::Configuration(format!("classifier {:?} is both required and excluded", conflict)));
        }

        Ok(result)
    }

    pub fn is_any(&self) -> bool {
        self.required.is_empty() && self.excluded.is_empty()
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    pub fn matches(&self, classifier: &MavenClassifier) -> bool {
        if self.is_any() {
            return true;
        }

        match classifier {
            // exclusions always name a classifier, so they never reject an unclassified item
            MavenClassifier::Unclassified => self.required.is_empty(),
            MavenClassifier::Classified(c) => {
                (self.required.is_empty() || self.required.contains(c))
                    && !self.excluded.contains(c)
            }
        }
    }
}
