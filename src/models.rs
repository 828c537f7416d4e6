//! Frontend Models
//!
//! Identifiers, response shapes, and the visual states of page controls.

use serde::Deserialize;
use std::fmt;

use crate::error::{ClientError, ClientResult};

/// Kind of item that can be saved to favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Drink,
    Ingredient,
}

impl ItemKind {
    /// Path prefix of the save endpoint, relative to the API base
    pub fn save_path(&self) -> &'static str {
        match self {
            ItemKind::Drink => "drinks/save/",
            ItemKind::Ingredient => "ingredients/save/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Drink => "drink",
            ItemKind::Ingredient => "ingredient",
        }
    }
}

/// Opaque identifier read from a control's `data-id`
///
/// Drinks use numeric ids, ingredients use their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: &str) -> ClientResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Read the id from a control's `data-id` attribute value
    pub fn from_attribute(value: Option<&str>) -> ClientResult<Self> {
        value.map_or(Err(ClientError::MissingId), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message returned by a save toggle, decoded once at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SaveMessage {
    Saved,
    Removed,
    Unrecognized(String),
}

impl From<String> for SaveMessage {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Saved" => SaveMessage::Saved,
            "Removed" => SaveMessage::Removed,
            _ => SaveMessage::Unrecognized(raw),
        }
    }
}

/// Body of `POST /drinks/save/{id}` and `POST /ingredients/save/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    pub message: SaveMessage,
}

/// Visual state of a save control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Not a favorite; offers saving
    Unsaved,
    /// A favorite; offers removal
    Saved,
}

impl Presentation {
    pub const SAVED_CLASS: &'static str = "btn-danger";
    pub const UNSAVED_CLASS: &'static str = "btn-success";

    /// State named by a save message; the raw text when it names none
    pub fn from_message(message: SaveMessage) -> Result<Self, String> {
        match message {
            SaveMessage::Saved => Ok(Presentation::Saved),
            SaveMessage::Removed => Ok(Presentation::Unsaved),
            SaveMessage::Unrecognized(raw) => Err(raw),
        }
    }

    /// Read the current state from an element's class list
    pub fn from_class_list(classes: &str) -> Option<Self> {
        let mut found = None;
        for class in classes.split_whitespace() {
            let state = match class {
                Self::SAVED_CLASS => Presentation::Saved,
                Self::UNSAVED_CLASS => Presentation::Unsaved,
                _ => continue,
            };
            if found.is_some_and(|prev| prev != state) {
                return None;
            }
            found = Some(state);
        }
        found
    }

    /// Styling class for this state
    pub fn style_class(&self) -> &'static str {
        match self {
            Presentation::Saved => Self::SAVED_CLASS,
            Presentation::Unsaved => Self::UNSAVED_CLASS,
        }
    }

    /// Class attribute showing this state, derived from the current one
    ///
    /// Contextual button colors are replaced by this state's color; hook
    /// classes, sizes and other classes keep their order.
    pub fn apply_to_class_list(&self, classes: &str) -> String {
        let mut out: Vec<&str> = Vec::new();
        for class in classes.split_whitespace() {
            if is_button_color(class) || out.contains(&class) {
                continue;
            }
            out.push(class);
        }
        if !out.contains(&"btn") {
            out.insert(0, "btn");
        }
        out.push(self.style_class());
        out.join(" ")
    }

    pub fn label(&self) -> &'static str {
        match self {
            Presentation::Saved => "Remove Save",
            Presentation::Unsaved => "Save to Favorites",
        }
    }
}

/// Bootstrap contextual color variants of `.btn`
const BUTTON_COLORS: [&str; 9] =
    ["primary", "secondary", "success", "danger", "warning", "info", "light", "dark", "link"];

fn is_button_color(class: &str) -> bool {
    class
        .strip_prefix("btn-")
        .map(|rest| rest.strip_prefix("outline-").unwrap_or(rest))
        .is_some_and(|color| BUTTON_COLORS.contains(&color))
}

/// What a clicked control asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Save(ItemKind),
    DeleteOriginal,
}

impl ControlAction {
    pub const ALL: [ControlAction; 3] = [
        ControlAction::Save(ItemKind::Drink),
        ControlAction::Save(ItemKind::Ingredient),
        ControlAction::DeleteOriginal,
    ];

    /// Hook class marking the controls bound to this action
    pub fn class_name(&self) -> &'static str {
        match self {
            ControlAction::Save(ItemKind::Drink) => "saveDrink",
            ControlAction::Save(ItemKind::Ingredient) => "saveIngredient",
            ControlAction::DeleteOriginal => "deleteOg",
        }
    }

    /// CSS selector of the controls bound to this action
    pub fn selector(&self) -> &'static str {
        match self {
            ControlAction::Save(ItemKind::Drink) => ".saveDrink",
            ControlAction::Save(ItemKind::Ingredient) => ".saveIngredient",
            ControlAction::DeleteOriginal => ".deleteOg",
        }
    }

    /// Action of an element with this class attribute, if it is a control
    pub fn from_class_list(classes: &str) -> Option<Self> {
        let classes: Vec<&str> = classes.split_whitespace().collect();
        Self::ALL.into_iter().find(|action| classes.contains(&action.class_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_messages() {
        let saved: SaveResponse = serde_json::from_str(r#"{"message":"Saved"}"#).unwrap();
        assert_eq!(saved.message, SaveMessage::Saved);

        let removed: SaveResponse = serde_json::from_str(r#"{"message":"Removed"}"#).unwrap();
        assert_eq!(removed.message, SaveMessage::Removed);
    }

    #[test]
    fn test_decode_unknown_message() {
        let resp: SaveResponse = serde_json::from_str(r#"{"message":"Unknown"}"#).unwrap();
        assert_eq!(resp.message, SaveMessage::Unrecognized("Unknown".to_string()));
        assert_eq!(Presentation::from_message(resp.message.clone()), Err("Unknown".to_string()));

        // Case matters
        let resp: SaveResponse = serde_json::from_str(r#"{"message":"saved"}"#).unwrap();
        assert!(matches!(resp.message, SaveMessage::Unrecognized(_)));
    }

    #[test]
    fn test_decode_missing_message_fails() {
        assert!(serde_json::from_str::<SaveResponse>(r#"{"status":"ok"}"#).is_err());
    }

    #[test]
    fn test_presentation_styles() {
        assert_eq!(Presentation::Saved.style_class(), "btn-danger");
        assert_eq!(Presentation::Saved.label(), "Remove Save");
        assert_eq!(Presentation::Unsaved.style_class(), "btn-success");
        assert_eq!(Presentation::Unsaved.label(), "Save to Favorites");
    }

    #[test]
    fn test_apply_keeps_hook_class() {
        assert_eq!(
            Presentation::Saved.apply_to_class_list("btn btn-success saveDrink"),
            "btn saveDrink btn-danger"
        );
        assert_eq!(
            Presentation::Unsaved.apply_to_class_list("btn saveDrink btn-danger"),
            "btn saveDrink btn-success"
        );
    }

    #[test]
    fn test_apply_replaces_other_button_colors() {
        let classes =
            Presentation::Saved.apply_to_class_list("btn btn-primary btn-sm saveIngredient");
        assert_eq!(classes, "btn btn-sm saveIngredient btn-danger");
        assert_eq!(Presentation::from_class_list(&classes), Some(Presentation::Saved));

        let classes =
            Presentation::Unsaved.apply_to_class_list("btn-outline-danger btn-success saveDrink");
        assert_eq!(classes, "btn saveDrink btn-success");
        assert_eq!(Presentation::from_class_list(&classes), Some(Presentation::Unsaved));
    }

    #[test]
    fn test_apply_is_stable_across_toggles() {
        let start = "btn btn-success saveDrink";
        let saved = Presentation::Saved.apply_to_class_list(start);
        let back = Presentation::Unsaved.apply_to_class_list(&saved);
        assert_eq!(Presentation::Saved.apply_to_class_list(&back), saved);
        let action = ControlAction::from_class_list(&back);
        assert_eq!(action, Some(ControlAction::Save(ItemKind::Drink)));
    }

    #[test]
    fn test_presentation_from_class_list() {
        let saved = Presentation::from_class_list("btn btn-danger saveDrink");
        assert_eq!(saved, Some(Presentation::Saved));
        let unsaved = Presentation::from_class_list("saveDrink btn btn-success");
        assert_eq!(unsaved, Some(Presentation::Unsaved));
        assert_eq!(Presentation::from_class_list("btn saveDrink"), None);
        assert_eq!(Presentation::from_class_list("btn btn-danger btn-success"), None);
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!(ItemId::parse(" 11007 ").unwrap().as_str(), "11007");
        assert_eq!(ItemId::parse("Light rum").unwrap().to_string(), "Light rum");
        assert_eq!(ItemId::parse("   "), Err(ClientError::MissingId));
    }

    #[test]
    fn test_item_id_from_attribute() {
        assert_eq!(ItemId::from_attribute(Some("42")).unwrap().as_str(), "42");
        assert_eq!(ItemId::from_attribute(Some("")), Err(ClientError::MissingId));
        assert_eq!(ItemId::from_attribute(None), Err(ClientError::MissingId));
    }

    #[test]
    fn test_action_from_class_list() {
        assert_eq!(
            ControlAction::from_class_list("btn btn-success saveDrink"),
            Some(ControlAction::Save(ItemKind::Drink))
        );
        assert_eq!(
            ControlAction::from_class_list("saveIngredient btn"),
            Some(ControlAction::Save(ItemKind::Ingredient))
        );
        let delete = ControlAction::from_class_list("btn deleteOg");
        assert_eq!(delete, Some(ControlAction::DeleteOriginal));
        assert_eq!(ControlAction::from_class_list("btn saveDrinks"), None);
        assert_eq!(ControlAction::from_class_list(""), None);
    }

    #[test]
    fn test_selectors_are_distinct() {
        let selectors: Vec<_> = ControlAction::ALL.iter().map(|a| a.selector()).collect();
        assert_eq!(selectors, vec![".saveDrink", ".saveIngredient", ".deleteOg"]);
    }
}
