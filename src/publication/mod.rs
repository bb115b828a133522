//! Publication strategies
//!
//! Each publication is a data record: an ordered field schema, a category
//! table and a report template. The active record is chosen once at startup
//! from the [`Publication`] enum.

mod categories;
mod formatter;
mod schema;

pub use categories::{CategoryMap, CategoryTable, BESPLATKA_CATEGORIES, COURIER_CATEGORIES};
pub use formatter::{OutputFormatter, TemplateError};
pub use schema::{Field, FieldKind, FieldSchema, SchemaError};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const COURIER_TEMPLATE: &str = "\
===== Для видання “Харківський кур’єр” =====
Рубрика: {{ category }}
Персональні дані: ім’я - {{ name }}, вік - {{ age }}
Основна інформація: {{ description }}
Контактні дані: телефон - {{ phone }}
";

const BESPLATKA_TEMPLATE: &str = "\
===== Для видання “Бесплатка” =====
Рубрика: {{ category }} -> {{ subcategory }}
Персональні дані: ім’я - {{ name }}, адреса - {{ address }}
Основна інформація: {{ description }}
Контактні дані: телефон - {{ phone }}, email - {{ email }}
";

/// The publications an ad can be submitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Publication {
    Courier,
    #[default]
    Besplatka,
}

impl Publication {
    pub fn display_name(self) -> &'static str {
        match self {
            Publication::Courier => "Харківський кур’єр",
            Publication::Besplatka => "Бесплатка",
        }
    }

    pub fn categories(self) -> CategoryMap {
        match self {
            Publication::Courier => COURIER_CATEGORIES,
            Publication::Besplatka => BESPLATKA_CATEGORIES,
        }
    }

    fn fields(self) -> Vec<Field> {
        let category_names = self.categories().category_names();
        match self {
            Publication::Courier => vec![
                Field::choice("category", "Рубрика:", category_names),
                Field::text("name", "Ім'я:"),
                Field::text("age", "Вік:"),
                Field::text("description", "Основна інформація:"),
                Field::text("phone", "Телефон:"),
            ],
            Publication::Besplatka => vec![
                Field::choice("category", "Рубрика:", category_names),
                Field::dependent_choice("subcategory", "Підкатегорія:", "category"),
                Field::text("name", "Ім'я:"),
                Field::text("address", "Адреса:"),
                Field::multiline("description", "Опис:"),
                Field::text("phone", "Телефон:"),
                Field::text("email", "Email:"),
            ],
        }
    }

    fn template(self) -> &'static str {
        match self {
            Publication::Courier => COURIER_TEMPLATE,
            Publication::Besplatka => BESPLATKA_TEMPLATE,
        }
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Configuration errors raised while assembling a strategy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublicationError {
    #[error("invalid schema for {publication}: {source}")]
    Schema {
        publication: String,
        #[source]
        source: SchemaError,
    },
    #[error("invalid report template for {publication}: {source}")]
    Template {
        publication: String,
        #[source]
        source: TemplateError,
    },
}

/// Immutable bundle of everything that varies between publications
#[derive(Debug, Clone)]
pub struct PublicationStrategy {
    name: String,
    schema: FieldSchema,
    categories: CategoryMap,
    formatter: OutputFormatter,
}

impl PublicationStrategy {
    /// Assemble a strategy. The template is rendered once with only the
    /// schema keys bound, so a placeholder naming any other field fails here
    /// rather than at submit time.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<Field>,
        categories: CategoryMap,
        template: &str,
    ) -> Result<Self, PublicationError> {
        let name = name.into();
        let schema = FieldSchema::new(fields).map_err(|source| PublicationError::Schema {
            publication: name.clone(),
            source,
        })?;
        let formatter = OutputFormatter::new(template, schema.keys()).map_err(|source| {
            PublicationError::Template {
                publication: name.clone(),
                source,
            }
        })?;

        Ok(Self {
            name,
            schema,
            categories,
            formatter,
        })
    }

    pub fn for_publication(publication: Publication) -> Result<Self, PublicationError> {
        Self::new(
            publication.display_name(),
            publication.fields(),
            publication.categories(),
            publication.template(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }
}
