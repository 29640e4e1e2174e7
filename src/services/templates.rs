use minijinja::{Environment, context, path_loader};
use std::path::Path;

/// HTML templates loaded from a fixed directory.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    /// Render the home page with the given display name.
    pub fn render_home(&self, name: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;
        tmpl.render(context! { name })
    }
}
