//! Endpoint URLs
//!
//! Paths of the favorites API, resolved against the configured base.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;

use crate::error::{ClientError, ClientResult};
use crate::models::{ItemId, ItemKind};

/// Characters that must be escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

const DELETE_ORIGINAL_PATH: &str = "users/original/delete/";

#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// `base` must end with `/` (see `config::parse_api_base`)
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn toggle_save(&self, kind: ItemKind, id: &ItemId) -> ClientResult<Url> {
        self.join(kind.save_path(), id)
    }

    pub fn delete_original(&self, id: &ItemId) -> ClientResult<Url> {
        self.join(DELETE_ORIGINAL_PATH, id)
    }

    fn join(&self, prefix: &str, id: &ItemId) -> ClientResult<Url> {
        let path = format!("{}{}", prefix, utf8_percent_encode(id.as_str(), PATH_SEGMENT));
        self.base.join(&path).map_err(|e| ClientError::InvalidBaseUrl {
            value: self.base.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_api_base;

    fn endpoints(base: &str) -> Endpoints {
        Endpoints::new(parse_api_base(base).unwrap())
    }

    fn id(raw: &str) -> ItemId {
        ItemId::parse(raw).unwrap()
    }

    #[test]
    fn test_save_urls() {
        let ep = endpoints("http://127.0.0.1:5000/");
        assert_eq!(
            ep.toggle_save(ItemKind::Drink, &id("11007")).unwrap().as_str(),
            "http://127.0.0.1:5000/drinks/save/11007"
        );
        assert_eq!(
            ep.toggle_save(ItemKind::Ingredient, &id("Gin")).unwrap().as_str(),
            "http://127.0.0.1:5000/ingredients/save/Gin"
        );
    }

    #[test]
    fn test_delete_url() {
        let ep = endpoints("http://127.0.0.1:5000/");
        assert_eq!(
            ep.delete_original(&id("42")).unwrap().as_str(),
            "http://127.0.0.1:5000/users/original/delete/42"
        );
    }

    #[test]
    fn test_ingredient_names_are_one_segment() {
        let ep = endpoints("http://127.0.0.1:5000/");
        assert_eq!(
            ep.toggle_save(ItemKind::Ingredient, &id("Light rum")).unwrap().as_str(),
            "http://127.0.0.1:5000/ingredients/save/Light%20rum"
        );
        assert_eq!(
            ep.toggle_save(ItemKind::Ingredient, &id("A/B?")).unwrap().as_str(),
            "http://127.0.0.1:5000/ingredients/save/A%2FB%3F"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let ep = endpoints("https://example.com/cocktails");
        assert_eq!(
            ep.toggle_save(ItemKind::Drink, &id("1")).unwrap().as_str(),
            "https://example.com/cocktails/drinks/save/1"
        );
    }
}
