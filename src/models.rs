// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Response shapes of the coffee shop backend.
//!
//! Drinks come in two representations: the public short form (`GET /drinks`)
//! lists only each ingredient's color and parts, the long form
//! (`GET /drinks-detail`, requires `get:drinks-detail`) adds the names.

use serde::{Deserialize, Serialize};

/// One ingredient of a drink recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Only present in the long form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// CSS color used to draw the layer, e.g. `#8B4513`.
    pub color: String,
    /// Relative amount.
    pub parts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    /// Sum of all ingredient parts.
    pub fn total_parts(&self) -> u32 {
        self.recipe.iter().map(|i| i.parts).sum()
    }
}

/// Envelope used by the drinks endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DrinksResponse {
    pub success: bool,
    #[serde(default)]
    pub drinks: Vec<Drink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_has_no_ingredient_names() {
        let body = r##"{
            "success": true,
            "drinks": [
                { "id": 1, "title": "Cappuccino", "recipe": [
                    { "color": "#8B4513", "parts": 1 },
                    { "color": "#FFFFFF", "parts": 2 }
                ] }
            ]
        }"##;
        let response: DrinksResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        let drink = &response.drinks[0];
        assert_eq!(drink.title, "Cappuccino");
        assert!(drink.recipe.iter().all(|i| i.name.is_none()));
        assert_eq!(drink.total_parts(), 3);
    }

    #[test]
    fn long_form_keeps_names() {
        let body = r##"{ "id": 2, "title": "Espresso", "recipe": [
            { "name": "Coffee", "color": "#8B4513", "parts": 1 }
        ] }"##;
        let drink: Drink = serde_json::from_str(body).unwrap();
        assert_eq!(drink.recipe[0].name.as_deref(), Some("Coffee"));
    }

    #[test]
    fn failed_envelope_defaults_to_no_drinks() {
        let response: DrinksResponse = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert!(!response.success);
        assert!(response.drinks.is_empty());
    }
}
