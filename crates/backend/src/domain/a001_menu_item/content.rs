//! Prompt, canned answers and parsing of the generated menu content

use contracts::enums::GenerationModel;
use serde::Deserialize;

pub const SYSTEM_PROMPT: &str = "You are a professional restaurant menu writer.";

/// Описание и апсейл для одного блюда
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedContent {
    pub description: String,
    pub upsell_suggestion: String,
}

impl GeneratedContent {
    fn new(description: impl Into<String>, upsell_suggestion: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            upsell_suggestion: upsell_suggestion.into(),
        }
    }

    /// Ответ на случай, если модель недоступна или вернула мусор
    pub fn fallback(item_name: &str) -> Self {
        Self::new(
            format!("Delicious {item_name} made with fresh ingredients and authentic flavors."),
            format!(
                "Pair your {item_name} with a refreshing beverage for the perfect dining experience!"
            ),
        )
    }
}

pub fn build_prompt(item_name: &str) -> String {
    format!(
        r#"You are a professional restaurant menu writer and marketing expert.

Task: Create content for a food item called "{item_name}"

Requirements:
1. Generate a compelling menu description (maximum 30 words) that:
   - Highlights key ingredients and flavors
   - Uses appetizing language
   - Appeals to customer emotions
   - Is concise and scannable

2. Suggest ONE upsell combo item that:
   - Complements the main item
   - Is realistic for a restaurant setting
   - Has clear value proposition
   - Uses persuasive language

Format your response as JSON:
{{
    "description": "Your menu description here (max 30 words)",
    "upsell_suggestion": "Your upsell combo suggestion here"
}}

Example for "Margherita Pizza":
{{
    "description": "Fresh mozzarella, basil, and tomato sauce on crispy crust",
    "upsell_suggestion": "Pair it with a refreshing Italian soda for the perfect meal!"
}}"#
    )
}

/// Parse the model's answer. Tolerates a ```json fence around the object.
pub fn parse_generated(raw: &str) -> Option<GeneratedContent> {
    let trimmed = raw.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced.trim()).ok()
}

/// (keyword, description, upsell) in match priority order
const CANNED: &[(&str, &str, &str)] = &[
    (
        "pizza",
        "Fresh-baked pizza with premium toppings and crispy crust",
        "Add a garlic bread and soft drink combo for just $3 more!",
    ),
    (
        "burger",
        "Juicy beef patty with fresh lettuce, tomato, and special sauce",
        "Upgrade to a meal with fries and drink for complete satisfaction!",
    ),
    (
        "pasta",
        "Al dente pasta tossed in rich, flavorful sauce with herbs",
        "Complete your meal with a fresh garden salad and garlic bread!",
    ),
    (
        "salad",
        "Crisp mixed greens with fresh vegetables and house dressing",
        "Add grilled chicken or shrimp for a protein-packed meal!",
    ),
    (
        "curry",
        "Aromatic spices blend with tender meat and rich gravy",
        "Pair with fluffy basmati rice and naan bread for authentic taste!",
    ),
];

/// Offline stand-in for the LLM, used when no API key is configured.
pub fn simulate(item_name: &str, model: GenerationModel) -> GeneratedContent {
    let lower = item_name.to_lowercase();
    if let Some((_, description, upsell)) =
        CANNED.iter().find(|(keyword, _, _)| lower.contains(keyword))
    {
        return GeneratedContent::new(*description, *upsell);
    }

    match model {
        GenerationModel::Gpt4 => GeneratedContent::new(
            format!(
                "Artisanal {item_name} crafted with premium ingredients and expert culinary techniques"
            ),
            format!(
                "Elevate your dining experience with our signature {item_name} paired with a curated beverage selection!"
            ),
        ),
        GenerationModel::Gpt35Turbo => GeneratedContent::new(
            format!("Delicious {item_name} prepared with fresh ingredients and authentic flavors"),
            format!("Enhance your {item_name} experience with a complementary side dish!"),
        ),
    }
}
