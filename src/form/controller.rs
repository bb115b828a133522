//! Form controller: owns the captured values for one form session

use super::sink::ReportSink;
use super::values::FieldValues;
use crate::publication::{FieldKind, PublicationStrategy};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("no field `{0}` in this form")]
    UnknownField(String),
}

/// Drives one form session for a publication.
///
/// Values are never validated: whatever the renderer passes in is stored and
/// later formatted as-is. Submitting does not reset the form.
pub struct FormController<S> {
    strategy: PublicationStrategy,
    values: FieldValues,
    dependent_options: HashMap<String, Vec<String>>,
    sink: S,
}

impl<S: ReportSink> FormController<S> {
    pub fn new(strategy: PublicationStrategy, sink: S) -> Self {
        let values = FieldValues::empty_for(strategy.schema());
        let dependent_options = strategy
            .schema()
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::DependentChoice)
            .map(|f| (f.key.clone(), Vec::new()))
            .collect();

        Self {
            strategy,
            values,
            dependent_options,
            sink,
        }
    }

    /// Store a new value for `key`.
    ///
    /// Every field that depends on `key` gets its options looked up again in
    /// the category map and its value cleared. Clearing cascades to fields
    /// further down the dependency chain.
    pub fn on_field_changed(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.strategy.schema().contains(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        let value = value.into();
        tracing::debug!(field = key, "Field changed");

        let mut pending = vec![(key.to_string(), value.clone())];
        while let Some((parent, parent_value)) = pending.pop() {
            for dependent in self.strategy.schema().dependents_of(&parent) {
                let options = self
                    .strategy
                    .categories()
                    .subcategories(&parent_value)
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                self.dependent_options.insert(dependent.key.clone(), options);
                self.values.clear(&dependent.key);
                pending.push((dependent.key.clone(), String::new()));
            }
        }

        self.values.set(key, value);
        Ok(())
    }

    /// Format the current values, hand the report to the sink and return it
    pub fn on_submit(&mut self) -> String {
        let report = self.strategy.formatter().format(&self.values);
        tracing::info!(publication = self.strategy.name(), "Ad submitted");
        tracing::debug!("Report:\n{report}");
        self.sink.emit(self.strategy.name(), &report);
        report
    }
}

impl<S> FormController<S> {
    pub fn strategy(&self) -> &PublicationStrategy {
        &self.strategy
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get_or_empty(key)
    }

    /// Options currently offered by a choice field, empty for text fields
    pub fn options(&self, key: &str) -> &[String] {
        match self.strategy.schema().field(key) {
            Some(field) if field.kind == FieldKind::Choice => field.options.as_slice(),
            Some(field) if field.kind == FieldKind::DependentChoice => self
                .dependent_options
                .get(key)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::sink::{BufferedSink, MockReportSink};
    use crate::publication::{Field, Publication, COURIER_CATEGORIES};
    use mockall::predicate::eq;

    fn courier() -> FormController<BufferedSink> {
        let strategy = PublicationStrategy::for_publication(Publication::Courier).unwrap();
        FormController::new(strategy, BufferedSink::new())
    }

    fn besplatka() -> FormController<BufferedSink> {
        let strategy = PublicationStrategy::for_publication(Publication::Besplatka).unwrap();
        FormController::new(strategy, BufferedSink::new())
    }

    mod initialize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_values_start_empty_for_every_key() {
            let form = besplatka();
            assert_eq!(form.strategy().schema().len(), 7);
            for key in form.strategy().schema().keys() {
                assert_eq!(form.values().get(key), Some(""));
            }
        }

        #[test]
        fn test_dependent_options_start_empty() {
            let form = besplatka();
            assert!(form.options("subcategory").is_empty());
        }

        #[test]
        fn test_choice_options_come_from_schema() {
            let form = courier();
            assert_eq!(
                form.options("category"),
                &["Нерухомість", "Транспорт", "Послуги"]
            );
        }

        #[test]
        fn test_text_fields_have_no_options() {
            let form = courier();
            assert!(form.options("name").is_empty());
            assert!(form.options("missing").is_empty());
        }
    }

    mod field_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_stores_value() {
            let mut form = courier();
            form.on_field_changed("name", "Іван").unwrap();
            assert_eq!(form.value("name"), "Іван");
        }

        #[test]
        fn test_unknown_key_is_rejected() {
            let mut form = courier();
            assert_eq!(
                form.on_field_changed("email", "a@b.com"),
                Err(FormError::UnknownField("email".to_string()))
            );
            assert_eq!(form.values().get("email"), None);
        }

        #[test]
        fn test_parent_change_populates_dependent_options() {
            let mut form = besplatka();
            form.on_field_changed("category", "Нерухомість").unwrap();
            assert_eq!(form.options("subcategory"), &["Квартири"]);
            form.on_field_changed("category", "Транспорт").unwrap();
            assert_eq!(form.options("subcategory"), &["Автомобілі"]);
        }

        #[test]
        fn test_parent_change_clears_dependent_value() {
            let mut form = besplatka();
            form.on_field_changed("category", "Нерухомість").unwrap();
            form.on_field_changed("subcategory", "Квартири").unwrap();
            form.on_field_changed("category", "Послуги").unwrap();
            assert_eq!(form.value("subcategory"), "");
            assert_eq!(form.options("subcategory"), &["Ремонт"]);
        }

        #[test]
        fn test_unmapped_parent_value_empties_options_and_value() {
            let mut form = besplatka();
            form.on_field_changed("category", "Транспорт").unwrap();
            form.on_field_changed("subcategory", "Автомобілі").unwrap();
            form.on_field_changed("category", "Робота").unwrap();
            assert!(form.options("subcategory").is_empty());
            assert_eq!(form.value("subcategory"), "");
            assert_eq!(form.value("category"), "Робота");
        }

        #[test]
        fn test_values_are_not_validated() {
            let mut form = besplatka();
            form.on_field_changed("subcategory", "Not an option").unwrap();
            form.on_field_changed("email", "not-an-email").unwrap();
            assert_eq!(form.value("subcategory"), "Not an option");
            assert_eq!(form.value("email"), "not-an-email");
        }

        #[test]
        fn test_unrelated_change_keeps_dependent() {
            let mut form = besplatka();
            form.on_field_changed("category", "Нерухомість").unwrap();
            form.on_field_changed("subcategory", "Квартири").unwrap();
            form.on_field_changed("name", "Олена").unwrap();
            assert_eq!(form.value("subcategory"), "Квартири");
        }

        #[test]
        fn test_clearing_cascades_down_the_chain() {
            let strategy = PublicationStrategy::new(
                "Chain",
                vec![
                    Field::choice("category", "Рубрика:", ["Нерухомість"]),
                    Field::dependent_choice("subcategory", "Підкатегорія:", "category"),
                    Field::dependent_choice("detail", "Деталі:", "subcategory"),
                ],
                COURIER_CATEGORIES,
                "{{ category }}/{{ subcategory }}/{{ detail }}",
            )
            .unwrap();
            let mut form = FormController::new(strategy, BufferedSink::new());
            form.on_field_changed("detail", "x").unwrap();
            form.on_field_changed("category", "Нерухомість").unwrap();

            assert_eq!(form.options("subcategory"), &["Квартири", "Дома"]);
            assert_eq!(form.value("detail"), "");
            assert!(form.options("detail").is_empty());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_submits_template() {
            let mut form = courier();
            let report = form.on_submit();
            assert!(report.starts_with("===== Для видання “Харківський кур’єр” =====\n"));
            assert!(report.contains("Рубрика: \n"));
            assert_eq!(form.sink().reports(), &[report]);
        }

        #[test]
        fn test_courier_end_to_end() {
            let mut form = courier();
            form.on_field_changed("category", "Транспорт").unwrap();
            form.on_field_changed("name", "Іван").unwrap();
            form.on_field_changed("age", "30").unwrap();
            form.on_field_changed("description", "Продам авто").unwrap();
            form.on_field_changed("phone", "0991234567").unwrap();

            let report = form.on_submit();
            assert!(report.contains("Рубрика: Транспорт"));
            assert!(report.contains("ім’я - Іван, вік - 30"));
            assert!(report.contains("Продам авто"));
            assert!(report.contains("телефон - 0991234567"));
            assert_eq!(form.sink().last(), Some(report.as_str()));
        }

        #[test]
        fn test_besplatka_end_to_end() {
            let mut form = besplatka();
            form.on_field_changed("category", "Нерухомість").unwrap();
            assert_eq!(form.options("subcategory"), &["Квартири"]);
            form.on_field_changed("subcategory", "Квартири").unwrap();
            form.on_field_changed("name", "Олена").unwrap();
            form.on_field_changed("address", "вул. Сумська 1").unwrap();
            form.on_field_changed("description", "Здам квартиру").unwrap();
            form.on_field_changed("phone", "0991112233").unwrap();
            form.on_field_changed("email", "a@b.com").unwrap();

            let report = form.on_submit();
            assert_eq!(
                report,
                "===== Для видання “Бесплатка” =====\n\
                 Рубрика: Нерухомість -> Квартири\n\
                 Персональні дані: ім’я - Олена, адреса - вул. Сумська 1\n\
                 Основна інформація: Здам квартиру\n\
                 Контактні дані: телефон - 0991112233, email - a@b.com\n"
            );
        }

        #[test]
        fn test_multiline_description_kept_verbatim() {
            let mut form = besplatka();
            form.on_field_changed("description", "рядок 1\nрядок 2").unwrap();
            let report = form.on_submit();
            assert!(report.contains("Основна інформація: рядок 1\nрядок 2\n"));
        }

        #[test]
        fn test_repeated_submit_is_identical() {
            let mut form = courier();
            form.on_field_changed("name", "Іван").unwrap();
            let first = form.on_submit();
            let second = form.on_submit();
            assert_eq!(first, second);
            assert_eq!(form.sink().reports().len(), 2);
            assert_eq!(form.value("name"), "Іван");
        }

        #[test]
        fn test_submit_emits_to_sink_with_publication_name() {
            let strategy = PublicationStrategy::for_publication(Publication::Courier).unwrap();
            let expected = strategy.formatter().format(&FieldValues::default());

            let mut sink = MockReportSink::new();
            sink.expect_emit()
                .with(eq("Харківський кур’єр"), eq(expected.clone()))
                .times(1)
                .return_const(());

            let mut form = FormController::new(strategy, sink);
            assert_eq!(form.on_submit(), expected);
        }
    }
}
