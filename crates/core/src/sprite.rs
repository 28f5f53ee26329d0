//! SVG sprite building.
//!
//! Planning decides which icons go into the sprite: one symbol per alias, all
//! aliases of a codepoint sharing the content of the primary SVG. Compilation
//! turns the plan into a single document.

use std::{fmt::Write as _, path::Path};

use codicon_mapping::{AliasIndex, Mapping};
use log::{debug, info, warn};

use crate::{AssetStore, Error, Result, io::write_text};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// One symbol of the sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteEntry {
    /// Symbol id, the alias name.
    pub id: String,
    /// Path the alias would have on disk (`<icons>/<alias>.svg`).
    pub virtual_path: String,
    /// SVG source of the primary icon.
    pub svg: String,
}

/// A codepoint whose primary SVG was not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIcon {
    pub codepoint: u32,
    pub primary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpritePlan {
    pub entries: Vec<SpriteEntry>,
    /// Number of primary SVG files used.
    pub processed: usize,
    pub skipped: Vec<SkippedIcon>,
}

impl SpritePlan {
    pub fn skipped_names(&self) -> Vec<String> {
        self.skipped.iter().map(|s| s.primary.clone()).collect()
    }
}

/// Decide the sprite contents for every codepoint of `mapping`.
///
/// Codepoints without a primary SVG are skipped and logged. An alias that the
/// index assigns to another codepoint (lenient mode) is left to that codepoint.
pub fn plan_sprite(
    mapping: &Mapping,
    index: &AliasIndex,
    store: &impl AssetStore,
) -> Result<SpritePlan> {
    let location = store.location();
    let mut plan = SpritePlan::default();

    for code in mapping.codepoints() {
        let primary = mapping.primary_alias(code)?;
        if index.get(primary) != Some(code) {
            debug!("{primary}: owned by codepoint {:?}, skipping {code}", index.get(primary));
            continue;
        }
        if !store.contains(primary) {
            warn!("{primary}.svg not found in {location}; codepoint {code} left out of the sprite");
            plan.skipped.push(SkippedIcon { codepoint: code, primary: primary.to_string() });
            continue;
        }

        let svg = store.read_svg(primary)?;
        plan.processed += 1;

        let mut emitted: Vec<&str> = Vec::new();
        for name in mapping.names_sharing_codepoint(primary, index) {
            if index.get(name) != Some(code) || emitted.contains(&name) {
                continue;
            }
            emitted.push(name);
            plan.entries.push(SpriteEntry {
                id: name.to_string(),
                virtual_path: format!("{location}/{name}.svg"),
                svg: svg.clone(),
            });
        }
    }

    Ok(plan)
}

/// Turns sprite entries into one SVG document.
pub trait SpriteCompiler {
    fn compile(&self, entries: &[SpriteEntry]) -> Result<String>;
}

/// `<symbol>`-mode sprite: each icon becomes `<symbol id="alias" …>` carrying the
/// root attributes of its `<svg>`, minus size and position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolSprite;

impl SpriteCompiler for SymbolSprite {
    fn compile(&self, entries: &[SpriteEntry]) -> Result<String> {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        let _ = write!(out, r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}">"#);

        for entry in entries {
            let symbol = Symbol::parse(&entry.id, &entry.svg)?;
            let _ = write!(out, r#"<symbol id="{}""#, escape_attr(&entry.id));
            for (name, value) in &symbol.attributes {
                let _ = write!(out, r#" {name}="{}""#, escape_attr(value));
            }
            out.push('>');
            out.push_str(symbol.body);
            out.push_str("</symbol>");
        }

        out.push_str("</svg>");
        Ok(out)
    }
}

/// Root attributes that only make sense on a standalone document.
const DROPPED_ROOT_ATTRIBUTES: &[&str] = &["id", "width", "height", "x", "y"];

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

struct Symbol<'a> {
    /// Qualified name and value of every attribute carried over to `<symbol>`.
    attributes: Vec<(String, String)>,
    body: &'a str,
}

impl<'a> Symbol<'a> {
    /// Lift the root attributes and inner markup of an icon's `<svg>`.
    fn parse(name: &str, svg: &'a str) -> Result<Self> {
        let invalid = |message: String| Error::InvalidSvg { name: name.to_string(), message };

        let options = roxmltree::ParsingOptions { allow_dtd: true, ..Default::default() };
        let doc = roxmltree::Document::parse_with_options(svg, options)
            .map_err(|e| invalid(e.to_string()))?;
        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(invalid(format!("root element is <{}>", root.tag_name().name())));
        }

        let mut attributes = Vec::new();
        if root.attribute("viewBox").is_none()
            && let (Some(width), Some(height)) = (root.attribute("width"), root.attribute("height"))
        {
            let view_box =
                format!("0 0 {} {}", width.trim_end_matches("px"), height.trim_end_matches("px"));
            attributes.push(("viewBox".to_string(), view_box));
        }

        for ns in root.namespaces() {
            match ns.name() {
                Some("xml") | None => {}
                Some("xlink") if ns.uri() == XLINK_NS => {}
                Some(prefix) => attributes.push((format!("xmlns:{prefix}"), ns.uri().to_string())),
            }
        }

        for attr in root.attributes() {
            let qualified = match attr.namespace() {
                None if DROPPED_ROOT_ATTRIBUTES.contains(&attr.name()) => continue,
                None => attr.name().to_string(),
                Some(XML_NS) => format!("xml:{}", attr.name()),
                Some(uri) => {
                    let prefix = root.lookup_prefix(uri).ok_or_else(|| {
                        invalid(format!("no prefix for namespace {uri}"))
                    })?;
                    format!("{prefix}:{}", attr.name())
                }
            };
            attributes.push((qualified, attr.value().to_string()));
        }

        let body = match (root.first_child(), root.last_child()) {
            (Some(first), Some(last)) => &svg[first.range().start..last.range().end],
            _ => "",
        };

        Ok(Self { attributes, body })
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Options for [`build_sprite`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteOptions {
    /// Treat any icon without an SVG as an error instead of skipping it.
    pub require_all_icons: bool,
}

/// Plan, compile, and write the sprite to `output`.
pub fn build_sprite(
    mapping: &Mapping,
    index: &AliasIndex,
    store: &impl AssetStore,
    compiler: &impl SpriteCompiler,
    output: &Path,
    options: SpriteOptions,
) -> Result<SpritePlan> {
    if !store.is_available() {
        return Err(Error::ConfigNotFound { what: "Icons directory", path: store.location().into() });
    }
    let svg_count = store.svg_names()?.len();
    if svg_count == 0 {
        return Err(Error::NoIcons(store.location().into()));
    }
    info!("Found {svg_count} SVG files in {}", store.location());

    let plan = plan_sprite(mapping, index, store)?;
    println!("  Processed {} SVG files from mapping", plan.processed);

    if !plan.skipped.is_empty() {
        println!("  Skipped {} icons without an SVG file", plan.skipped.len());
        if options.require_all_icons {
            return Err(Error::MissingIcons(plan.skipped_names()));
        }
    }
    if plan.processed == 0 {
        return Err(Error::EmptySprite);
    }

    let document = compiler.compile(&plan.entries)?;
    write_text(output, document)?;
    println!("  Sprite: {} ({} symbols)", output.display(), plan.entries.len());

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use codicon_mapping::AliasMode;

    use super::*;
    use crate::MemoryAssets;

    const ADD: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg"><path d="M14 7v1H8v6H7V8H1V7h6V1h1v6h6z"/></svg>"#;
    const CLOSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16px" height="16px"><rect x="1" y="1" width="2" height="2"/></svg>"#;

    fn mapping() -> Mapping {
        Mapping::from_json(r#"{"60000": ["add", "plus"], "60001": ["close"], "60002": ["gone"]}"#)
            .unwrap()
    }

    fn store() -> MemoryAssets {
        MemoryAssets::new().with_svg("add", ADD).with_svg("close", CLOSE)
    }

    #[test]
    fn test_plan_groups_aliases_with_primary_content() {
        let mapping = mapping();
        let index = mapping.index(AliasMode::Strict).unwrap();
        let plan = plan_sprite(&mapping, &index, &store()).unwrap();

        let ids: Vec<&str> = plan.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["add", "plus", "close"]);
        assert_eq!(plan.entries[0].svg, plan.entries[1].svg);
        assert_eq!(plan.entries[1].virtual_path, "memory/plus.svg");
        assert_eq!(plan.processed, 2);
        assert_eq!(plan.skipped, vec![SkippedIcon { codepoint: 60002, primary: "gone".into() }]);
    }

    #[test]
    fn test_plan_is_independent_of_mapping_order() {
        let forward = mapping();
        let reversed = Mapping::from_json(
            r#"{"60002": ["gone"], "60001": ["close"], "60000": ["add", "plus"]}"#,
        )
        .unwrap();

        let content = |m: &Mapping| {
            let index = m.index(AliasMode::Strict).unwrap();
            let mut entries: Vec<(String, String)> = plan_sprite(m, &index, &store())
                .unwrap()
                .entries
                .into_iter()
                .map(|e| (e.id, e.svg))
                .collect();
            entries.sort();
            entries
        };
        assert_eq!(content(&forward), content(&reversed));
    }

    #[test]
    fn test_plan_lenient_duplicate_goes_to_last_codepoint() {
        let mapping =
            Mapping::from_json(r#"{"60000": ["add", "plus"], "60001": ["close", "plus"]}"#).unwrap();
        let index = mapping.index(AliasMode::Lenient).unwrap();
        let plan = plan_sprite(&mapping, &index, &store()).unwrap();

        let plus: Vec<&SpriteEntry> = plan.entries.iter().filter(|e| e.id == "plus").collect();
        assert_eq!(plus.len(), 1);
        assert_eq!(plus[0].svg, CLOSE);
    }

    #[test]
    fn test_plan_empty_alias_list_is_fatal() {
        let mapping = Mapping::from_json(r#"{"60000": []}"#).unwrap();
        let index = mapping.index(AliasMode::Strict).unwrap();
        assert!(matches!(
            plan_sprite(&mapping, &index, &store()),
            Err(Error::Mapping(codicon_mapping::Error::MalformedMapping(60000)))
        ));
    }

    #[test]
    fn test_symbol_sprite() {
        let entries = vec![
            SpriteEntry { id: "add".into(), virtual_path: "add.svg".into(), svg: ADD.into() },
            SpriteEntry { id: "close".into(), virtual_path: "close.svg".into(), svg: CLOSE.into() },
        ];
        let doc = SymbolSprite.compile(&entries).unwrap();

        assert!(doc.starts_with(r#"<?xml version="1.0" encoding="utf-8"?><svg xmlns="#));
        assert!(doc.contains(
            r#"<symbol id="add" viewBox="0 0 16 16"><path d="M14 7v1H8v6H7V8H1V7h6V1h1v6h6z"/></symbol>"#
        ));
        assert!(doc.contains(
            r#"<symbol id="close" viewBox="0 0 16 16"><rect x="1" y="1" width="2" height="2"/></symbol>"#
        ));
        assert!(doc.ends_with("</svg>"));

        let parsed = roxmltree::Document::parse(&doc).unwrap();
        let symbols = parsed.descendants().filter(|n| n.has_tag_name("symbol")).count();
        assert_eq!(symbols, 2);
    }

    #[test]
    fn test_symbol_sprite_rejects_non_svg() {
        let entries = vec![SpriteEntry {
            id: "bad".into(),
            virtual_path: "bad.svg".into(),
            svg: "<html></html>".into(),
        }];
        assert!(matches!(SymbolSprite.compile(&entries), Err(Error::InvalidSvg { .. })));
    }

    fn compile_one(svg: &str) -> Result<String> {
        let entry =
            SpriteEntry { id: "add".into(), virtual_path: "add.svg".into(), svg: svg.into() };
        SymbolSprite.compile(&[entry])
    }

    #[test]
    fn test_symbol_keeps_root_presentation_attributes() {
        let doc = compile_one(
            r#"<svg id="icon" width="16" height="16" x="0" y="0" viewBox="0 0 16 16" fill="currentColor" xmlns="http://www.w3.org/2000/svg"><path d="M1 1h2v2H1z"/></svg>"#,
        )
        .unwrap();
        assert!(doc.contains(
            r#"<symbol id="add" viewBox="0 0 16 16" fill="currentColor"><path d="M1 1h2v2H1z"/></symbol>"#
        ));
        assert!(!doc.contains(r#"id="icon""#));
    }

    #[test]
    fn test_symbol_keeps_extra_namespaces() {
        let doc = compile_one(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:sketch="http://www.bohemiancoding.com/sketch/ns" viewBox="0 0 16 16" sketch:type="icon"><g sketch:type="group"/></svg>"#,
        )
        .unwrap();
        assert!(doc.contains(r#"xmlns:sketch="http://www.bohemiancoding.com/sketch/ns""#));
        assert!(doc.contains(r#"sketch:type="icon""#));

        let parsed = roxmltree::Document::parse(&doc).unwrap();
        let group = parsed.descendants().find(|n| n.has_tag_name("g")).unwrap();
        assert_eq!(
            group.attribute(("http://www.bohemiancoding.com/sketch/ns", "type")),
            Some("group")
        );
    }

    #[test]
    fn test_symbol_accepts_doctype() {
        let svg = concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M1 1h2v2H1z"/></svg>"#,
        );
        let doc = compile_one(svg).unwrap();
        assert!(doc.contains(r#"<symbol id="add" viewBox="0 0 16 16"><path d="M1 1h2v2H1z"/></symbol>"#));
        assert!(!doc.contains("DOCTYPE"));
    }

    #[test]
    fn test_plan_repeated_alias_emits_one_symbol() {
        let mapping = Mapping::from_json(r#"{"60000": ["add", "plus", "add", "plus"]}"#).unwrap();
        let index = mapping.index(AliasMode::Strict).unwrap();
        let plan = plan_sprite(&mapping, &index, &store()).unwrap();

        let ids: Vec<&str> = plan.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["add", "plus"]);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a"b<c>&"#), "a&quot;b&lt;c&gt;&amp;");
    }
}
