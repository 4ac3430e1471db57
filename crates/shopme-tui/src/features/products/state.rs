use shopme_core::api::{Category, Product, ProductId};

use crate::common::{BusySet, TaskId};

/// Catalog screen state.
#[derive(Debug)]
pub struct ProductsState {
    pub visit: TaskId,
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Case-insensitive name filter.
    pub search: String,
    /// `None` shows every category.
    pub category: Option<Category>,
    /// Index into [`ProductsState::visible`].
    pub selected: usize,
    /// Products with an add-to-cart call in flight.
    pub adding: BusySet<ProductId>,
}

impl ProductsState {
    /// A fresh visit; the caller issues the initial load.
    pub fn new(visit: TaskId) -> Self {
        Self {
            visit,
            products: Vec::new(),
            loading: true,
            error: None,
            search: String::new(),
            category: None,
            selected: 0,
            adding: BusySet::default(),
        }
    }

    /// Products matching the search text and category filter.
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.search.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .filter(|p| self.category.as_ref().is_none_or(|c| &p.category == c))
            .collect()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.visible().get(self.selected).copied()
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Cycles the filter: All → Electronics → … → Beauty → All.
    pub fn next_category(&mut self) {
        self.category = match self.category.take() {
            None => Some(Category::ALL[0].clone()),
            Some(c) if c == Category::ALL[Category::ALL.len() - 1] => None,
            Some(c) => Some(c.next()),
        };
        self.selected = 0;
    }

    pub fn prev_category(&mut self) {
        self.category = match self.category.take() {
            None => Some(Category::ALL[Category::ALL.len() - 1].clone()),
            Some(c) if c == Category::ALL[0] => None,
            Some(c) => Some(c.prev()),
        };
        self.selected = 0;
    }

    pub fn category_label(&self) -> &str {
        self.category.as_ref().map_or("All", Category::as_str)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            price: Decimal::ONE,
            image_url: String::new(),
            category,
            stock: 1,
        }
    }

    fn state() -> ProductsState {
        let mut state = ProductsState::new(TaskId(0));
        state.products = vec![
            product("1", "Desk Lamp", Category::Furniture),
            product("2", "Laptop", Category::Electronics),
            product("3", "Lamp Shade", Category::Furniture),
        ];
        state.loading = false;
        state
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = state();
        state.search = "LAMP".into();
        let names: Vec<&str> = state.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Desk Lamp", "Lamp Shade"]);
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let mut state = state();
        state.category = Some(Category::Electronics);
        assert_eq!(state.visible().len(), 1);
        state.search = "lamp".into();
        assert!(state.visible().is_empty());
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn test_category_cycle_passes_through_all() {
        let mut state = state();
        state.next_category();
        assert_eq!(state.category, Some(Category::Electronics));
        state.prev_category();
        assert_eq!(state.category, None);
        state.prev_category();
        assert_eq!(state.category, Some(Category::Beauty));
        state.next_category();
        assert_eq!(state.category_label(), "All");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = state();
        state.selected = 2;
        state.search = "laptop".into();
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        state.select_next();
        assert_eq!(state.selected, 0);
    }
}
