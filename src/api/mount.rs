use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartState;
use crate::error::{ChartError, ChartResult};
use crate::export::ExportArtifact;
use crate::scene::SceneFrame;

/// Static description of one chart mount point in the host document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMount {
    pub title: String,
    /// Number of selection/value slot pairs the chart's form exposes.
    pub slot_count: usize,
    /// Catalog group backing the startup state, when the chart has one.
    #[serde(default)]
    pub catalog_group: Option<String>,
}

impl ChartMount {
    #[must_use]
    pub fn new(title: impl Into<String>, slot_count: usize) -> Self {
        Self {
            title: title.into(),
            slot_count,
            catalog_group: None,
        }
    }

    #[must_use]
    pub fn with_catalog_group(mut self, group: impl Into<String>) -> Self {
        self.catalog_group = Some(group.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.slot_count == 0 {
            return Err(ChartError::InvalidData(
                "chart mount must expose at least one slot".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One live chart bound to a mount point.
#[derive(Debug)]
pub(super) struct ChartInstance {
    pub(super) mount: ChartMount,
    pub(super) state: ChartState,
    pub(super) last_frame: Option<SceneFrame>,
    pub(super) export: Option<ExportArtifact>,
}

impl ChartInstance {
    pub(super) fn new(mount: ChartMount, state: ChartState) -> Self {
        Self {
            mount,
            state,
            last_frame: None,
            export: None,
        }
    }
}

/// Charts keyed by mount-point id, in registration order.
///
/// Registration models the requirement that a mount point pre-exists in
/// the host document; rendering against an unregistered id fails loudly.
#[derive(Debug, Default)]
pub(super) struct MountRegistry {
    charts: IndexMap<String, ChartInstance>,
}

impl MountRegistry {
    pub(super) fn register(
        &mut self,
        chart_id: impl Into<String>,
        instance: ChartInstance,
    ) -> ChartResult<()> {
        let chart_id = chart_id.into();
        if self.charts.contains_key(&chart_id) {
            return Err(ChartError::DuplicateMountPoint(chart_id));
        }
        self.charts.insert(chart_id, instance);
        Ok(())
    }

    pub(super) fn get(&self, chart_id: &str) -> ChartResult<&ChartInstance> {
        self.charts
            .get(chart_id)
            .ok_or_else(|| ChartError::UnknownMountPoint(chart_id.to_owned()))
    }

    pub(super) fn get_mut(&mut self, chart_id: &str) -> ChartResult<&mut ChartInstance> {
        self.charts
            .get_mut(chart_id)
            .ok_or_else(|| ChartError::UnknownMountPoint(chart_id.to_owned()))
    }

    pub(super) fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    pub(super) fn len(&self) -> usize {
        self.charts.len()
    }
}
