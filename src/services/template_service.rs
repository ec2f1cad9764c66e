use std::sync::Arc;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::format::format_currency;

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Service for rendering the page templates with Tera
pub struct TemplateService {
    assets: Arc<AssetLoader>,
}

impl TemplateService {
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        let templates = assets.list_templates();
        tracing::info!(templates = templates.len(), "Template service initialized");
        Self { assets }
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // currency filter: 1234.5 -> "1,234.50"
        tera.register_filter(
            "currency",
            |value: &tera::Value, _args: &std::collections::HashMap<String, tera::Value>| {
                let amount = match value {
                    tera::Value::String(s) => s.parse::<rust_decimal::Decimal>().ok(),
                    tera::Value::Number(n) => n
                        .as_f64()
                        .and_then(rust_decimal::Decimal::from_f64_retain),
                    _ => None,
                };
                match amount {
                    Some(amount) => Ok(tera::Value::String(format_currency(amount))),
                    None => Err(tera::Error::msg(format!(
                        "currency filter expects a number, got {value}"
                    ))),
                }
            },
        );
    }

    /// Render a template with the given context.
    ///
    /// Templates are loaded fresh on every call so edits under
    /// `TEMPLATES_DIR` show up without a restart.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        let content = self
            .assets
            .read_template_string(template_name)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TemplateError::NotFound(template_name.to_string()),
                _ => TemplateError::Io(e),
            })?;

        let mut tera = Tera::default();
        Self::register_filters(&mut tera);
        tera.add_raw_template(template_name, &content)?;

        Ok(tera.render(template_name, context)?)
    }

    /// Raw text of a non-template asset such as the stylesheet
    pub fn read_raw(&self, name: &str) -> Result<String, TemplateError> {
        self.assets
            .read_template_string(name)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TemplateError::NotFound(name.to_string()),
                _ => TemplateError::Io(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TemplateService {
        TemplateService::new(Arc::new(AssetLoader::new(None, None, None)))
    }

    #[test]
    fn test_missing_template() {
        let err = service()
            .render("nope.html", &Context::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "nope.html"));
    }

    #[test]
    fn test_currency_filter() {
        let mut tera = Tera::default();
        TemplateService::register_filters(&mut tera);
        tera.add_raw_template("t", "{{ a | currency }} {{ b | currency }}")
            .unwrap();
        let mut context = Context::new();
        context.insert("a", &1234.5);
        context.insert("b", "-5");
        assert_eq!(tera.render("t", &context).unwrap(), "1,234.50 -5.00");
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        let css = service().read_raw("report.css").unwrap();
        assert!(css.contains(".callout-warning"));
    }
}
