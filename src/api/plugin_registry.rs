use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{PluginContext, PluginEvent, VisualPlugin};
use crate::render::Renderer;

use super::engine::AreaChartEngine;

impl<R: Renderer> AreaChartEngine<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn VisualPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugins.iter().any(|entry| entry.id() == plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    fn plugin_context(&self) -> PluginContext {
        match &self.scene {
            Some(snapshot) => PluginContext {
                viewport: snapshot.viewport,
                value_domain: (snapshot.value_domain.min, snapshot.value_domain.max),
                category_count: snapshot.data.len(),
                hover: self.hover,
            },
            None => PluginContext {
                viewport: Viewport::new(0, 0),
                value_domain: (0.0, 0.0),
                category_count: 0,
                hover: self.hover,
            },
        }
    }
}
