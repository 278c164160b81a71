use std::collections::HashSet;

use serde::Deserialize;

use crate::maven::classifier::ClassifierPolicy;
use crate::maven::coordinates::{non_blank, MavenClassifier};
use crate::maven::paths::version_from_path;

/// One page of the Nexus 3 asset search (`/service/rest/v1/search/assets`)
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub items: Vec<Item>,
    /// present iff there are more pages
    #[serde(default)]
    pub continuation_token: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub maven2: Option<Maven2Attributes>,
}

/// format specific attributes of an asset in a maven2 repository
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Maven2Attributes {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl Item {
    pub fn classifier(&self) -> MavenClassifier {
        match MavenClassifier::from_optional(self.classifier.as_deref()) {
            MavenClassifier::Unclassified => MavenClassifier::from_optional(
                self.maven2.as_ref().and_then(|m| m.classifier.as_deref())
            ),
            classified => classified,
        }
    }

    fn version(&self) -> Option<String> {
        non_blank(self.maven2.as_ref().and_then(|m| m.version.as_deref()))
            .or_else(|| {
                self.path.as_deref()
                    .and_then(version_from_path)
                    .map(str::to_string)
            })
    }

    pub fn result_value(&self, format: ResultFormat) -> Option<String> {
        match format {
            ResultFormat::DownloadUrl => non_blank(self.download_url.as_deref()),
            ResultFormat::Version => self.version(),
        }
    }
}

/// What is reported per matching item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultFormat {
    #[default]
    DownloadUrl,
    Version,
}

/// Returns the values of all items matching the classifier policy, without duplicates and
///  in the order of the server's response. Items without a value are skipped.
pub fn normalize(page: &SearchPage, classifiers: &ClassifierPolicy, format: ResultFormat) -> Vec<String> {
    let mut seen = HashSet::new();
    page.items.iter()
        .filter(|item| classifiers.matches(&item.classifier()))
        .filter_map(|item| item.result_value(format))
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
