use serde_json::{Map, Value};

use crate::{BumpKind, Error, FontBumpKind, FontVersion, PackageVersion, Result};

const VERSION_FIELD: &str = "version";
const FONT_VERSION_FIELD: &str = "fontVersion";

/// The `package.json` of the icon project.
///
/// Unknown fields are kept in their original order so a rewrite only touches
/// the two version strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescriptor {
    fields: Map<String, Value>,
}

/// Old and new versions after a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub old_version: PackageVersion,
    pub new_version: PackageVersion,
    pub old_font_version: FontVersion,
    pub new_font_version: FontVersion,
}

impl PackageDescriptor {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self { fields: serde_json::from_str(text)? })
    }

    fn string_field(&self, key: &'static str) -> Result<&str> {
        self.fields.get(key).and_then(Value::as_str).ok_or(Error::MissingField(key))
    }

    fn optional_string(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn version(&self) -> Result<&str> {
        self.string_field(VERSION_FIELD)
    }

    pub fn font_version(&self) -> Result<&str> {
        self.string_field(FONT_VERSION_FIELD)
    }

    pub fn url(&self) -> Option<&str> {
        self.optional_string("url")
    }

    pub fn description(&self) -> Option<&str> {
        self.optional_string("description")
    }

    /// Bump both versions in memory.
    ///
    /// Both versions are validated before either field is touched.
    pub fn bump(&mut self, package: BumpKind, font: FontBumpKind) -> Result<BumpOutcome> {
        let old_version: PackageVersion = self.version()?.parse()?;
        let old_font_version: FontVersion = self.font_version()?.parse()?;

        let new_version = old_version.bump(package)?;
        let new_font_version = old_font_version.bump(font)?;

        self.fields.insert(VERSION_FIELD.to_string(), Value::String(new_version.to_string()));
        self.fields
            .insert(FONT_VERSION_FIELD.to_string(), Value::String(new_font_version.to_string()));

        Ok(BumpOutcome { old_version, new_version, old_font_version, new_font_version })
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.fields)?;
        text.push('\n');
        Ok(text)
    }
}
