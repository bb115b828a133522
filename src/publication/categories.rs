//! Category lookup tables per publication

/// Static table of `(category, subcategories)` rows in display order
pub type CategoryTable = &'static [(&'static str, &'static [&'static str])];

/// Mapping from category name to its ordered subcategory names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMap {
    entries: CategoryTable,
}

impl CategoryMap {
    pub const fn new(entries: CategoryTable) -> Self {
        Self { entries }
    }

    /// Category names in declaration order
    pub fn category_names(&self) -> impl Iterator<Item = &'static str> {
        let entries: CategoryTable = self.entries;
        entries.iter().map(|(name, _)| *name)
    }

    /// Subcategories for `category`, empty when the category is not mapped
    pub fn subcategories(&self, category: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, subs)| *subs)
            .unwrap_or(&[])
    }
}

/// Categories offered by «Харківський кур’єр»
pub const COURIER_CATEGORIES: CategoryMap = CategoryMap::new(&[
    ("Нерухомість", &["Квартири", "Дома"]),
    ("Транспорт", &["Автомобілі", "Мотоцикли"]),
    ("Послуги", &["Ремонт", "Перевезення"]),
]);

/// Categories offered by «Бесплатка»
pub const BESPLATKA_CATEGORIES: CategoryMap = CategoryMap::new(&[
    ("Нерухомість", &["Квартири"]),
    ("Транспорт", &["Автомобілі"]),
    ("Послуги", &["Ремонт"]),
]);
