mod central_panel;
mod layers_panel;
mod properties_panel;
mod toolbar;

pub use central_panel::central_panel;
pub use layers_panel::layers_panel;
pub use properties_panel::properties_panel;
pub use toolbar::toolbar;
