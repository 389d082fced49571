use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartState;
use crate::error::{ChartError, ChartResult};

/// Fixed vocabulary of selectable features, partitioned into named groups.
///
/// Group and feature order is insertion order; dropdowns and default chart
/// states are populated in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    groups: IndexMap<String, Vec<String>>,
}

impl FeatureCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock vocabulary: school subjects plus personal and social
    /// competencies.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.groups.insert(
            "Schulfächer".to_owned(),
            vec![
                "Deutsch".to_owned(),
                "Mathematik".to_owned(),
                "Natur, Mensch, Gesellschaft".to_owned(),
                "Bildnerisches, Textiles und Technisches Gestalten".to_owned(),
                "Musik".to_owned(),
                "Bewegung und Sport".to_owned(),
            ],
        );
        catalog.groups.insert(
            "Selbstkompetenz".to_owned(),
            vec![
                "Pünktlichkeit".to_owned(),
                "Aktive Beteiligung".to_owned(),
                "Selbständigkeit".to_owned(),
                "Zuverlässigkeit".to_owned(),
                "Selbsteinschätzung".to_owned(),
                "Rückmeldungen nutzen".to_owned(),
            ],
        );
        catalog.groups.insert(
            "Sozialkompetenz".to_owned(),
            vec![
                "Angemessene Umgangsformen".to_owned(),
                "Hilfsbereitschaft und Respekt".to_owned(),
                "Zusammenarbeit".to_owned(),
                "Regeln einhalten".to_owned(),
                "Kommunikation".to_owned(),
            ],
        );
        catalog
    }

    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        features: Vec<String>,
    ) -> ChartResult<()> {
        let name = name.into();
        if self.groups.contains_key(&name) {
            return Err(ChartError::InvalidData(format!(
                "catalog group `{name}` already exists"
            )));
        }
        if features.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "catalog group `{name}` must not be empty"
            )));
        }
        self.groups.insert(name, features);
        Ok(())
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// All features across all groups, in catalog order.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.groups.values().flatten().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, feature: &str) -> bool {
        self.features().any(|f| f == feature)
    }

    /// Startup state for a group: every feature selected at maximum score.
    pub fn default_state(&self, group: &str) -> ChartResult<ChartState> {
        let features = self
            .group(group)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown catalog group `{group}`")))?;
        Ok(ChartState::full_marks(features.to_vec()))
    }
}
