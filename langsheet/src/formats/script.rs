//! Support for JavaScript and TypeScript locale modules.
//!
//! A module wraps one language's translations in `export default <literal>` or
//! `module.exports = <literal>`. Reading never evaluates the module: the wrapper is
//! stripped and the remaining literal is parsed with a tolerant JSON parser that also
//! accepts unquoted keys, trailing commas and comments.
use std::io::{BufRead, Write};

use jsonc_parser::{ParseOptions, parse_to_serde_value};

use super::ModuleSyntax;
use crate::{error::Error, traits::Parser, types::Translations};

const COMMONJS_MARKER: &str = "module.exports";
const ESM_MARKER: &str = "export default";

/// A `<lang>.js` or `<lang>.ts` locale module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Format {
    pub translations: Translations,
    pub syntax: ModuleSyntax,
}

impl Format {
    pub fn new(translations: Translations, syntax: ModuleSyntax) -> Self {
        Self {
            translations,
            syntax,
        }
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let (syntax, literal) = strip_module_wrapper(&text)?;
        let options = ParseOptions {
            allow_comments: true,
            allow_loose_object_property_names: true,
            allow_trailing_commas: true,
            ..Default::default()
        };
        let value = parse_to_serde_value(literal, &options)
            .map_err(|e| Error::literal(e.to_string()))?
            .ok_or_else(|| Error::literal("module does not export a value"))?;

        Ok(Format::new(super::expect_object(value)?, syntax))
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.syntax.prefix().as_bytes())?;
        serde_json::to_writer_pretty(&mut writer, &self.translations)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Splits module text into its export syntax and the exported literal.
///
/// Leading comments are skipped before looking for `export default`. Otherwise
/// CommonJS is detected by `module.exports` anywhere in the text, so statements such
/// as `'use strict';` may precede it. A trailing `;` after the literal is dropped.
fn strip_module_wrapper(text: &str) -> Result<(ModuleSyntax, &str), Error> {
    let body = skip_leading_comments(text);

    let (syntax, rest) = if let Some(rest) = body.strip_prefix(ESM_MARKER) {
        (ModuleSyntax::EsModule, rest)
    } else if let Some(index) = body.find(COMMONJS_MARKER) {
        let rest = body[index + COMMONJS_MARKER.len()..].trim_start();
        let rest = rest
            .strip_prefix('=')
            .ok_or_else(|| Error::literal("expected `=` after `module.exports`"))?;
        (ModuleSyntax::CommonJs, rest)
    } else {
        return Err(Error::literal(format!(
            "expected `{}` or `{} =` at the start of the module",
            ESM_MARKER, COMMONJS_MARKER
        )));
    };

    let literal = rest.trim();
    let literal = literal.strip_suffix(';').unwrap_or(literal).trim_end();
    Ok((syntax, literal))
}

/// Drops whitespace plus `//` and `/* */` comments from the start of `text`.
fn skip_leading_comments(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        if let Some(line_comment) = rest.strip_prefix("//") {
            rest = line_comment
                .find('\n')
                .map_or("", |end| &line_comment[end + 1..])
                .trim_start();
        } else if let Some(block_comment) = rest.strip_prefix("/*") {
            rest = block_comment
                .find("*/")
                .map_or("", |end| &block_comment[end + 2..])
                .trim_start();
        } else {
            return rest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serde_json::{Value, json};

    fn translations(value: Value) -> Translations {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_write_es_module() {
        let format = Format::new(
            translations(json!({ "hello": "Hello" })),
            ModuleSyntax::EsModule,
        );
        let text = String::from_utf8(format.to_bytes().unwrap()).unwrap();
        let expected = indoc! {r#"
            export default {
              "hello": "Hello"
            }
        "#};
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_commonjs_module() {
        let format = Format::new(
            translations(json!({ "hello": "Hello" })),
            ModuleSyntax::CommonJs,
        );
        let text = String::from_utf8(format.to_bytes().unwrap()).unwrap();
        assert!(text.starts_with("module.exports = {"));
    }

    #[test]
    fn test_parse_es_module_with_loose_syntax() {
        let text = indoc! {r#"
            export default {
              hello: "Hello",
              nested: {
                title: "Title", // trailing comment
              },
            };
        "#};
        let format = Format::from_str(text).unwrap();
        assert_eq!(format.syntax, ModuleSyntax::EsModule);
        assert_eq!(
            Value::Object(format.translations),
            json!({ "hello": "Hello", "nested": { "title": "Title" } })
        );
    }

    #[test]
    fn test_parse_commonjs_module() {
        let text = "module.exports = {\n  \"bye\": \"Bye\"\n};\n";
        let format = Format::from_str(text).unwrap();
        assert_eq!(format.syntax, ModuleSyntax::CommonJs);
        assert_eq!(format.translations["bye"], json!("Bye"));
    }

    #[test]
    fn test_commonjs_detected_after_leading_statements() {
        let text = "'use strict';\nmodule.exports = { \"a\": 1 }";
        let format = Format::from_str(text).unwrap();
        assert_eq!(format.syntax, ModuleSyntax::CommonJs);
        assert_eq!(format.translations["a"], json!(1));
    }

    #[test]
    fn test_es_module_after_header_comments() {
        let text = indoc! {r#"
            // generated
            /* eslint-disable */
            export default { hello: 'Hello' }
        "#};
        let format = Format::from_str(text).unwrap();
        assert_eq!(format.syntax, ModuleSyntax::EsModule);
        assert_eq!(format.translations["hello"], json!("Hello"));
    }

    #[test]
    fn test_unterminated_leading_comment() {
        let err = Format::from_str("/* export default { \"a\": 1 }").unwrap_err();
        assert!(matches!(err, Error::Literal(_)));
    }

    #[test]
    fn test_written_module_parses_back() {
        let original = Format::new(
            translations(json!({ "a": { "b": "x" }, "n": 1.5, "flag": false })),
            ModuleSyntax::CommonJs,
        );
        let text = String::from_utf8(original.to_bytes().unwrap()).unwrap();
        assert_eq!(Format::from_str(&text).unwrap(), original);
    }

    #[test]
    fn test_reject_missing_wrapper() {
        let err = Format::from_str("{ \"a\": 1 }").unwrap_err();
        assert!(matches!(err, Error::Literal(_)));
    }

    #[test]
    fn test_reject_code_instead_of_literal() {
        let err = Format::from_str("export default require('fs').readFileSync('x')").unwrap_err();
        assert!(matches!(err, Error::Literal(_)));
    }

    #[test]
    fn test_reject_empty_export() {
        let err = Format::from_str("export default ;").unwrap_err();
        assert!(matches!(err, Error::Literal(_)));
    }

    #[test]
    fn test_reject_non_object_export() {
        let err = Format::from_str("export default \"hello\"").unwrap_err();
        assert!(err.to_string().contains("a string"));
    }
}
