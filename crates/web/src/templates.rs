//! Server-side HTML rendering with Tera.
//!
//! Templates are compiled into the binary so the server does not depend on
//! its working directory.

use axum::response::Html;
use tera::{Context, Tera};

use common::{AppError, AppResult};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("name.html", include_str!("../templates/name.html")),
    ("adduser.html", include_str!("../templates/adduser.html")),
    ("userlist.html", include_str!("../templates/userlist.html")),
];

/// Compiled template set
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse every bundled template.
    pub fn load() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())
            .map_err(|e| AppError::internal(format!("Failed to parse templates: {:?}", e)))?;
        tera.autoescape_on(vec![".html"]);

        Ok(Self { tera })
    }

    /// Render a template to an HTML response body.
    pub fn render(&self, name: &str, context: &Context) -> AppResult<Html<String>> {
        self.tera
            .render(name, context)
            .map(Html)
            .map_err(|e| AppError::internal(format!("Failed to render {}: {:?}", name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        let templates = Templates::load().unwrap();
        for (name, _) in TEMPLATES {
            assert!(templates.tera.get_template_names().any(|n| n == *name));
        }
    }

    #[test]
    fn test_index_renders_title_and_messages() {
        let templates = Templates::load().unwrap();
        let mut context = Context::new();
        context.insert("title", "Home");
        context.insert("messages", &vec!["<hello>"]);

        let Html(body) = templates.render("index.html", &context).unwrap();
        assert!(body.contains("<title>Home</title>"));
        assert!(body.contains("&lt;hello&gt;"));
    }

    #[test]
    fn test_unknown_template_is_internal_error() {
        let templates = Templates::load().unwrap();
        let result = templates.render("missing.html", &Context::new());
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
