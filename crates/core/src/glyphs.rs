//! Reading glyph tables back from a compiled font.

use std::collections::BTreeMap;

use codicon_mapping::Mapping;
use read_fonts::{FontRef, TableProvider, types::GlyphId16};

use crate::{Result, config::PRIVATE_USE_AREA};

/// Codepoint → glyph id for every cmap subtable of the font.
pub fn read_cmap(data: &[u8]) -> Result<BTreeMap<u32, u32>> {
    let font = FontRef::new(data)?;
    let cmap = font.cmap()?;
    let mut result = BTreeMap::new();

    for record in cmap.encoding_records() {
        if let Ok(subtable) = record.subtable(cmap.offset_data()) {
            for (codepoint, gid) in subtable.iter() {
                result.entry(codepoint).or_insert(gid.to_u32());
            }
        }
    }
    Ok(result)
}

/// One line of the glyph export table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRow {
    pub glyph_id: u32,
    pub name: String,
    pub character: char,
    pub unicode: String,
}

/// Upper-case hex, padded to 4 digits, or 6 above the BMP.
pub fn format_unicode(codepoint: u32) -> String {
    if codepoint > 0xFFFF {
        format!("{codepoint:06X}")
    } else {
        format!("{codepoint:04X}")
    }
}

/// Every encoded glyph with its name and lowest codepoint, in glyph order.
pub fn export_glyphs(data: &[u8]) -> Result<Vec<GlyphRow>> {
    let cmap = read_cmap(data)?;
    let font = FontRef::new(data)?;
    let post = font.post().ok();

    let mut first_codepoint: BTreeMap<u32, u32> = BTreeMap::new();
    for (&codepoint, &gid) in &cmap {
        first_codepoint.entry(gid).or_insert(codepoint);
    }

    Ok(first_codepoint
        .into_iter()
        .map(|(gid, codepoint)| {
            let name = post
                .as_ref()
                .and_then(|post| {
                    let gid16 = GlyphId16::new(u16::try_from(gid).ok()?);
                    post.glyph_name(gid16).map(|s| s.to_string())
                })
                .unwrap_or_else(|| format!("glyph{gid}"));
            GlyphRow {
                glyph_id: gid,
                name,
                character: char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER),
                unicode: format_unicode(codepoint),
            }
        })
        .collect())
}

/// Render rows as `short_name,character,unicode` CSV.
pub fn glyph_table(rows: &[GlyphRow]) -> String {
    let mut table = String::from("short_name,character,unicode");
    for row in rows {
        table.push('\n');
        table.push_str(&format!("{},{},{}", row.name, row.character, row.unicode));
    }
    table
}

/// Agreement between the mapping and a compiled font's cmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCheck {
    /// Mapping codepoints absent from the font, with their primary alias.
    pub missing: Vec<(u32, String)>,
    /// Private-use codepoints in the font that the mapping doesn't list.
    pub unmapped: Vec<u32>,
}

impl FontCheck {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn verify_font(mapping: &Mapping, data: &[u8]) -> Result<FontCheck> {
    let cmap = read_cmap(data)?;

    let missing = mapping
        .iter()
        .filter(|(code, _)| !cmap.contains_key(code))
        .map(|(code, aliases)| (code, aliases.first().cloned().unwrap_or_default()))
        .collect();

    let unmapped = cmap
        .keys()
        .copied()
        .filter(|code| PRIVATE_USE_AREA.contains(code) && mapping.aliases(*code).is_none())
        .collect();

    Ok(FontCheck { missing, unmapped })
}
