//! Drink-type filter used on the specialty drink page.

use crate::app::Result;
use crate::domain::SpecialtyDrink;
use crate::fetcher::Api;

pub const DEFAULT_SELECTION: [&str; 3] = ["소주", "맥주", "리큐르"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkTypeSelection {
    all: Vec<String>,
    selected: Vec<String>,
}

impl DrinkTypeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct drink types in first-seen order.
    pub fn distinct_types(drinks: &[SpecialtyDrink]) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for drink in drinks {
            if !types.iter().any(|t| t == &drink.kind) {
                types.push(drink.kind.clone());
            }
        }
        types
    }

    /// Replace the catalog and restore the default selection.
    pub fn load(&mut self, drinks: &[SpecialtyDrink]) {
        self.all = Self::distinct_types(drinks);
        self.selected = DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect();
    }

    /// Leaves the current state untouched on failure.
    pub async fn fetch(&mut self, api: &Api) -> Result<()> {
        match api.specialty_drinks().await {
            Ok(drinks) => {
                self.load(&drinks);
                tracing::debug!("loaded {} drink types", self.all.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching specialty drinks: {}", e);
                Err(e)
            }
        }
    }

    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, kind: &str) -> bool {
        self.selected.iter().any(|s| s == kind)
    }

    pub fn toggle(&mut self, kind: &str) {
        if self.is_selected(kind) {
            self.selected.retain(|s| s != kind);
        } else {
            self.selected.push(kind.to_string());
        }
    }

    pub fn set_selected(&mut self, kinds: Vec<String>) {
        self.selected = kinds;
    }
}
