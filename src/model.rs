use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

/// One line of the ingredient table.
///
/// Rows have no identity beyond their position, and every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub quantity: String,
    pub unit: String,
    pub ingredient: String,
}

impl IngredientRow {
    pub fn new(
        quantity: impl Into<String>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            unit: unit.into(),
            ingredient: ingredient.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Quantity => &self.quantity,
            Field::Unit => &self.unit,
            Field::Ingredient => &self.ingredient,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Quantity => &mut self.quantity,
            Field::Unit => &mut self.unit,
            Field::Ingredient => &mut self.ingredient,
        };
        *slot = value.into();
    }

    /// Text form used when writing rows back into the text box
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.quantity, self.unit, self.ingredient)
    }
}

impl fmt::Display for IngredientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Editable column of an [`IngredientRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Quantity,
    Unit,
    Ingredient,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Quantity => "quantity",
            Field::Unit => "unit",
            Field::Ingredient => "ingredient",
        }
    }
}

impl FromStr for Field {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quantity" => Ok(Field::Quantity),
            "unit" => Ok(Field::Unit),
            "ingredient" => Ok(Field::Ingredient),
            _ => Err(EditorError::UnknownField(s.to_string())),
        }
    }
}

/// Which row set an edit addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Confirmed,
    Pending,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Confirmed => "confirmed",
            Collection::Pending => "pending",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(Collection::Confirmed),
            "pending" => Ok(Collection::Pending),
            _ => Err(EditorError::InvalidCommand(format!(
                "unknown collection '{}'",
                s
            ))),
        }
    }
}
