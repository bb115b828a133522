//! Report templates rendered with Liquid

use crate::form::FieldValues;
use liquid::model::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("failed to parse template: {0}")]
    Parse(String),
    /// The template does not render against its own field keys, usually
    /// because it names a field the schema does not define
    #[error("template does not render against its fields: {0}")]
    Render(String),
}

/// Renders captured values into a fixed multi-line report.
///
/// Placeholders are Liquid variables (`{{ name }}`). Every known field key is
/// bound on each render, so a field with no captured value renders as the
/// empty string and an incomplete form still produces a report.
#[derive(Clone)]
pub struct OutputFormatter {
    source: String,
    keys: Vec<String>,
    template: Arc<liquid::Template>,
}

impl OutputFormatter {
    /// Parse `template` and check that it renders with only `keys` bound
    pub fn new<I, S>(template: &str, keys: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TemplateError::Parse(e.to_string()))?;
        let parsed = parser
            .parse(template)
            .map_err(|e| TemplateError::Parse(e.to_string()))?;

        let formatter = Self {
            source: template.to_string(),
            keys: keys.into_iter().map(Into::into).collect(),
            template: Arc::new(parsed),
        };
        formatter
            .render(&FieldValues::default())
            .map_err(|e| TemplateError::Render(e.to_string()))?;
        Ok(formatter)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn format(&self, values: &FieldValues) -> String {
        match self.render(values) {
            Ok(report) => report,
            Err(err) => {
                tracing::error!("Report template failed to render: {err}");
                String::new()
            }
        }
    }

    fn render(&self, values: &FieldValues) -> Result<String, liquid::Error> {
        let mut context = liquid::Object::new();
        for key in &self.keys {
            context.insert(
                key.clone().into(),
                Value::scalar(values.get_or_empty(key).to_string()),
            );
        }
        self.template.render(&context)
    }
}

impl fmt::Debug for OutputFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputFormatter")
            .field("source", &self.source)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl PartialEq for OutputFormatter {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.keys == other.keys
    }
}

impl Eq for OutputFormatter {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substitutes_by_key() {
        let formatter =
            OutputFormatter::new("ім’я - {{ name }}, вік - {{ age }}\n", ["name", "age"]).unwrap();
        let values: FieldValues = [("name", "Іван"), ("age", "30")].into_iter().collect();
        assert_eq!(formatter.format(&values), "ім’я - Іван, вік - 30\n");
    }

    #[test]
    fn test_missing_values_render_empty() {
        let formatter = OutputFormatter::new(
            "Рубрика: {{ category }} -> {{ subcategory }}",
            ["category", "subcategory"],
        )
        .unwrap();
        let values: FieldValues = [("category", "Послуги")].into_iter().collect();
        assert_eq!(formatter.format(&values), "Рубрика: Послуги -> ");
        assert_eq!(formatter.format(&FieldValues::default()), "Рубрика:  -> ");
    }

    #[test]
    fn test_template_without_placeholders() {
        let formatter = OutputFormatter::new("===== header =====\n", ["name"]).unwrap();
        assert_eq!(
            formatter.format(&FieldValues::default()),
            "===== header =====\n"
        );
        assert_eq!(formatter.source(), "===== header =====\n");
    }

    #[test]
    fn test_values_outside_keys_are_ignored() {
        let formatter = OutputFormatter::new("{{ name }}", ["name"]).unwrap();
        let values: FieldValues = [("name", "Олена"), ("extra", "x")].into_iter().collect();
        assert_eq!(formatter.format(&values), "Олена");
    }

    #[test]
    fn test_unknown_variable_fails_construction() {
        let result = OutputFormatter::new("{{ name }} {{ phone }}", ["name"]);
        assert!(matches!(result, Err(TemplateError::Render(_))));
    }

    #[test]
    fn test_unterminated_tag_fails_to_parse() {
        let result = OutputFormatter::new("ok {{ name }} then {{ oops", ["name", "oops"]);
        assert!(matches!(result, Err(TemplateError::Parse(_))));
    }

    #[test]
    fn test_value_containing_braces_is_not_expanded() {
        let formatter = OutputFormatter::new("{{ description }}", ["description", "name"]).unwrap();
        let values: FieldValues = [("description", "{{ name }}"), ("name", "Іван")]
            .into_iter()
            .collect();
        assert_eq!(formatter.format(&values), "{{ name }}");
    }

    #[test]
    fn test_multiline_value_kept_verbatim() {
        let formatter = OutputFormatter::new("Опис: {{ description }}\n", ["description"]).unwrap();
        let values: FieldValues = [("description", "рядок 1\nрядок 2 <b>&</b>")]
            .into_iter()
            .collect();
        assert_eq!(formatter.format(&values), "Опис: рядок 1\nрядок 2 <b>&</b>\n");
    }
}
