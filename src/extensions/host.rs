use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DataSet;
use crate::error::{ChartError, ChartResult};

/// Host-supplied snapshot of the bound fields for one render pass.
///
/// One categorical column and one numeric measure, index-aligned. The
/// conversion into a [`DataSet`] is where the column-length contract is
/// enforced, so engine code downstream never reads out of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Display name of the bound measure, used to title the tooltip row.
    #[serde(default)]
    pub measure_label: Option<String>,
}

impl DataView {
    pub fn into_data_set(self) -> ChartResult<DataSet> {
        let data = DataSet::from_columns(self.categories, self.values)?;
        Ok(match self.measure_label {
            Some(label) => data.with_measure_label(label),
            None => data,
        })
    }
}

/// Identity of the visual as the host's gallery presents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualDescriptor {
    pub name: String,
    pub display_name: String,
}

/// Host-openable modal dialog.
pub trait ModalDialog {
    fn dialog_id(&self) -> &str;
}

/// Modal dialog constructor the host invokes on demand.
pub type DialogConstructor = fn() -> Box<dyn ModalDialog>;

/// Explicit host registration built once at startup.
///
/// Replaces globally reachable registries: the dialog map is an explicit,
/// insertion-ordered value handed to the host alongside the descriptor, and
/// lookups stay confined to it.
#[derive(Debug)]
pub struct HostRegistration {
    descriptor: VisualDescriptor,
    dialogs: IndexMap<String, DialogConstructor>,
}

impl HostRegistration {
    #[must_use]
    pub fn new(descriptor: VisualDescriptor) -> Self {
        Self {
            descriptor,
            dialogs: IndexMap::new(),
        }
    }

    /// Adds a dialog constructor under a unique non-empty identifier.
    pub fn with_dialog(
        mut self,
        dialog_id: impl Into<String>,
        constructor: DialogConstructor,
    ) -> ChartResult<Self> {
        let dialog_id = dialog_id.into();
        if dialog_id.is_empty() {
            return Err(ChartError::InvalidData(
                "dialog id must not be empty".to_owned(),
            ));
        }
        if self.dialogs.contains_key(&dialog_id) {
            return Err(ChartError::InvalidData(format!(
                "dialog `{dialog_id}` is already registered"
            )));
        }
        self.dialogs.insert(dialog_id, constructor);
        Ok(self)
    }

    #[must_use]
    pub fn descriptor(&self) -> &VisualDescriptor {
        &self.descriptor
    }

    /// Registered dialog identifiers in registration order.
    #[must_use]
    pub fn dialog_ids(&self) -> Vec<&str> {
        self.dialogs.keys().map(String::as_str).collect()
    }

    /// Instantiates a dialog by id. Returns `None` for unknown ids.
    #[must_use]
    pub fn create_dialog(&self, dialog_id: &str) -> Option<Box<dyn ModalDialog>> {
        self.dialogs.get(dialog_id).map(|constructor| constructor())
    }
}
