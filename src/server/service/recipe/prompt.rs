//! Prompts sent to the recipe model.
//!
//! Every prompt asks for a single JSON document so the reply can be parsed directly. Models
//! still tend to wrap it in a fenced block, which the client strips.

use serde_json::Value;

const JSON_ONLY: &str = "Answer with a single JSON object only, without any explanation.";

/// Asks for three dishes that can be cooked from the user's inventory.
pub fn suggestion(ingredients: &[String]) -> String {
    format!(
        "You are a home cooking assistant. The user has these ingredients: {}.\n\
         Suggest three dishes that mainly use them.\n\
         {}\n\
         Format: {{\"recipes\": [{{\"food\": string, \"use_ingredients\": [string], \
         \"description\": string}}]}}",
        ingredients.join(", "),
        JSON_ONLY
    )
}

/// Asks for a detailed recipe of `food` using the chosen ingredients.
pub fn recipe(food: &str, use_ingredients: &[String]) -> String {
    format!(
        "You are a home cooking assistant. Write a detailed recipe for \"{}\" that uses: {}.\n\
         {}\n\
         Format: {{\"food\": string, \"ingredients\": [{{\"name\": string, \"amount\": string}}], \
         \"steps\": [string], \"time\": string, \"tip\": string}}",
        food,
        if use_ingredients.is_empty() {
            "any common ingredients".to_string()
        } else {
            use_ingredients.join(", ")
        },
        JSON_ONLY
    )
}

/// Asks for a quick recipe from ingredients the user typed freely.
pub fn quick(chat: &str) -> String {
    format!(
        "You are a home cooking assistant. The user says they have: \"{}\".\n\
         Pick one dish that can be made quickly with these and explain it briefly.\n\
         {}\n\
         Format: {{\"food\": string, \"ingredients\": [string], \"steps\": [string], \
         \"time\": string}}",
        chat, JSON_ONLY
    )
}

/// Asks for the recipe of a dish the user named.
pub fn search(chat: &str) -> String {
    format!(
        "You are a home cooking assistant. The user wants to cook \"{}\".\n\
         Write the recipe for this dish.\n\
         {}\n\
         Format: {{\"food\": string, \"ingredients\": [{{\"name\": string, \"amount\": string}}], \
         \"steps\": [string], \"time\": string}}",
        chat, JSON_ONLY
    )
}

/// Renders request values as prompt text. Strings are used as is.
pub fn ingredient_names(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| match value {
            Value::String(name) => name.trim().to_string(),
            other => other.to_string(),
        })
        .filter(|name| !name.is_empty())
        .collect()
}
