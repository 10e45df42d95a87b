//! Validation of the incoming food item name

use thiserror::Error;

/// Максимальная длина имени после очистки (в символах)
pub const MAX_ITEM_NAME_LEN: usize = 100;

const STRIPPED_CHARS: [char; 4] = ['<', '>', '"', '\''];

/// Names must mention at least one of these to count as food.
pub const FOOD_KEYWORDS: &[&str] = &[
    "pizza", "burger", "pasta", "salad", "soup", "rice", "bread", "chicken", "beef", "fish",
    "vegetarian", "vegan", "dessert", "drink", "beverage", "appetizer", "main", "side", "tikka",
    "curry", "noodles", "sandwich", "wrap", "taco", "sushi",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid or missing food item name")]
    InvalidName,
    #[error("Please provide a valid food item name")]
    NotFood,
}

/// Trim, drop markup-ish characters and enforce the length limit.
///
/// Returns `None` for names that are empty or too long after cleaning.
pub fn sanitize_input(text: &str) -> Option<String> {
    let sanitized: String = text
        .trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    if sanitized.is_empty() || sanitized.chars().count() > MAX_ITEM_NAME_LEN {
        return None;
    }
    Some(sanitized)
}

pub fn validate_food_item(item_name: &str) -> Result<(), ValidationError> {
    if item_name.is_empty() {
        return Err(ValidationError::InvalidName);
    }

    let lower = item_name.to_lowercase();
    if FOOD_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        Ok(())
    } else {
        Err(ValidationError::NotFood)
    }
}

/// Полная проверка: очистка + проверка на еду
pub fn clean_item_name(raw: &str) -> Result<String, ValidationError> {
    let sanitized = sanitize_input(raw).ok_or(ValidationError::InvalidName)?;
    validate_food_item(&sanitized)?;
    Ok(sanitized)
}
