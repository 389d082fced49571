use tracing::{debug, trace};

use crate::core::ChartState;
use crate::error::{ChartError, ChartResult};
use crate::export::ExportArtifact;
use crate::render::Renderer;
use crate::scene::build_scene;

use super::catalog::FeatureCatalog;
use super::engine_config::ChartEngineConfig;
use super::form::FormSubmission;
use super::mount::{ChartInstance, ChartMount, MountRegistry};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the mount registry, per-chart state, the shared
/// renderer, and the export artifacts; every submission runs the full
/// render cycle (scene rebuild, backend draw, export refresh).
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    catalog: FeatureCatalog,
    charts: MountRegistry,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::with_catalog(renderer, config, FeatureCatalog::standard())
    }

    pub fn with_catalog(
        renderer: R,
        config: ChartEngineConfig,
        catalog: FeatureCatalog,
    ) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            catalog,
            charts: MountRegistry::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn chart_ids(&self) -> impl Iterator<Item = &str> {
        self.charts.ids()
    }

    /// Binds a chart to a mount-point id.
    ///
    /// The startup state selects every feature of the mount's catalog group
    /// at the maximum score; without a group the chart starts empty.
    pub fn register_chart(
        &mut self,
        chart_id: impl Into<String>,
        mount: ChartMount,
    ) -> ChartResult<()> {
        let chart_id = chart_id.into();
        mount.validate()?;

        let state = match &mount.catalog_group {
            Some(group) => self.catalog.default_state(group)?,
            None => ChartState::empty(),
        };

        debug!(
            chart_id = %chart_id,
            slot_count = mount.slot_count,
            axis_count = state.len(),
            "registered chart mount"
        );
        self.charts.register(chart_id, ChartInstance::new(mount, state))
    }

    /// Replaces the chart's state and runs the full render cycle.
    pub fn render(
        &mut self,
        chart_id: &str,
        axes: Vec<String>,
        scores: Vec<f64>,
    ) -> ChartResult<()> {
        let state = ChartState::new(axes, scores)?;
        self.render_state(chart_id, state)
    }

    /// Re-renders whatever state the chart currently holds.
    pub fn render_current(&mut self, chart_id: &str) -> ChartResult<()> {
        let state = self.charts.get(chart_id)?.state.clone();
        self.render_state(chart_id, state)
    }

    /// Resolves a submitted form into chart state and renders it.
    pub fn submit(&mut self, chart_id: &str, submission: &FormSubmission) -> ChartResult<()> {
        let slot_count = self.charts.get(chart_id)?.mount.slot_count;
        if submission.slots.len() > slot_count {
            return Err(ChartError::InvalidData(format!(
                "submission has {} slots but chart `{chart_id}` exposes {slot_count}",
                submission.slots.len()
            )));
        }

        let state = submission.resolve()?;
        debug!(
            chart_id,
            submitted_slots = submission.slots.len(),
            resolved_axes = state.len(),
            "form submission resolved"
        );
        self.render_state(chart_id, state)
    }

    fn render_state(&mut self, chart_id: &str, state: ChartState) -> ChartResult<()> {
        let title = self.charts.get(chart_id)?.mount.title.clone();

        let frame = build_scene(
            &state,
            Some(title.as_str()),
            &self.config.style,
            self.config.geometry(),
        )?;
        self.renderer.render(&frame)?;
        debug!(chart_id, axis_count = state.len(), "rendered chart scene");

        let artifact = ExportArtifact::from_frame(format!("{chart_id}.svg"), &frame)?;
        let instance = self.charts.get_mut(chart_id)?;
        instance.state = state;
        instance.last_frame = Some(frame);
        // Replacing the artifact drops the previous serialization.
        instance.export = Some(artifact);
        trace!(chart_id, "export artifact refreshed");
        Ok(())
    }

    /// Current state of one chart.
    pub fn state(&self, chart_id: &str) -> ChartResult<&ChartState> {
        Ok(&self.charts.get(chart_id)?.state)
    }

    /// Frame of the chart's most recent render, if any.
    pub fn last_frame(&self, chart_id: &str) -> ChartResult<Option<&crate::scene::SceneFrame>> {
        Ok(self.charts.get(chart_id)?.last_frame.as_ref())
    }

    /// Latest export artifact under its default file name.
    pub fn latest_export(&self, chart_id: &str) -> ChartResult<&ExportArtifact> {
        self.charts
            .get(chart_id)?
            .export
            .as_ref()
            .ok_or_else(|| ChartError::NothingToExport(chart_id.to_owned()))
    }

    /// Latest export artifact relabeled with a caller-supplied file name.
    pub fn export(&self, chart_id: &str, file_name: &str) -> ChartResult<ExportArtifact> {
        Ok(self.latest_export(chart_id)?.renamed(file_name))
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
