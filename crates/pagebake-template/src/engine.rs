//! Template engine for pagebake
//!
//! Provides Jinja2-compatible rendering with the numeric page filters
//! registered on an explicitly constructed environment.

use crate::error::{TemplateError, TemplateResult};
use crate::filters;
use minijinja::{AutoEscape, Environment};
use std::path::Path;
use tracing::debug;

/// Template engine with the pagebake filters
///
/// Each engine owns its own minijinja environment; nothing is registered
/// globally. Templates are compiled on every call and never cached.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine that renders standalone templates
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Configure environment
        env.set_debug(true);
        // Data is inserted verbatim, pages are responsible for their markup
        env.set_auto_escape_callback(|_| AutoEscape::None);

        Self::register_filters(&mut env);

        Self { env }
    }

    /// Create an engine whose templates can `include` and `extend` other
    /// templates found in `template_dir`
    pub fn with_template_dir(template_dir: impl AsRef<Path>) -> Self {
        let mut engine = Self::new();
        engine
            .env
            .set_loader(minijinja::path_loader(template_dir.as_ref()));
        engine
    }

    fn register_filters(env: &mut Environment<'static>) {
        // Math
        env.add_filter("divided_by", filters::divided_by);
        env.add_filter("round", filters::round);
    }

    /// Compile `source` under `name` and render it against `context`
    ///
    /// `name` shows up in error messages and in the location info minijinja
    /// attaches to them.
    pub fn render_named(
        &self,
        name: &str,
        source: &str,
        context: impl serde::Serialize,
    ) -> TemplateResult<String> {
        debug!("Rendering template: {}", name);

        let tmpl = self
            .env
            .template_from_named_str(name, source)
            .map_err(|e| TemplateError::from_minijinja(name, e))?;
        tmpl.render(context)
            .map_err(|e| TemplateError::from_minijinja(name, e))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
