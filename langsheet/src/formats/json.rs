//! Support for plain JSON locale files.
//!
//! A file holds one language's translations as a single JSON object, pretty-printed
//! with two-space indentation.
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser, types::Translations};

/// A `<lang>.json` locale file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Format {
    pub translations: Translations,
}

impl Format {
    pub fn new(translations: Translations) -> Self {
        Self { translations }
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Ok(Format::new(super::expect_object(value)?))
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.translations)?;
        writeln!(writer)?;
        Ok(())
    }
}

impl From<Translations> for Format {
    fn from(translations: Translations) -> Self {
        Format::new(translations)
    }
}

impl From<Format> for Translations {
    fn from(format: Format) -> Self {
        format.translations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serde_json::json;

    #[test]
    fn test_write_pretty_two_space_indent() {
        let translations = match json!({ "a": { "b": "x", "c": "y" } }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let bytes = Format::new(translations).to_bytes().unwrap();
        let expected = indoc! {r#"
            {
              "a": {
                "b": "x",
                "c": "y"
              }
            }
        "#};
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn test_parse_object() {
        let format = Format::from_str(r#"{ "hello": "Hello", "count": 2 }"#).unwrap();
        assert_eq!(format.translations["hello"], json!("Hello"));
        assert_eq!(format.translations["count"], json!(2));
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let format = Format::from_str(r#"{ "z": "1", "a": "2", "m": "3" }"#).unwrap();
        let keys: Vec<_> = format.translations.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = Format::from_str("{ hello: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_rejects_top_level_array() {
        let err = Format::from_str(r#"["hello"]"#).unwrap_err();
        assert!(matches!(err, Error::Literal(_)));
    }

    #[test]
    fn test_unicode_survives_write_and_parse() {
        let mut translations = Translations::new();
        translations.insert("greeting".to_string(), json!("你好，世界 👋"));
        let bytes = Format::new(translations.clone()).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("你好，世界 👋"));
        assert_eq!(Format::from_str(&text).unwrap().translations, translations);
    }
}
