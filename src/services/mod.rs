// Saved.io services
// Stateless bookmark logic (ordering, form handling) and the settings engine.

pub mod bookmark_form;
pub mod ordering;
pub mod settings_engine;
