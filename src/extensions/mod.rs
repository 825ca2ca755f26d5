mod host;
mod plugins;

pub use host::{DataView, DialogConstructor, HostRegistration, ModalDialog, VisualDescriptor};
pub use plugins::{PluginContext, PluginEvent, VisualPlugin};
