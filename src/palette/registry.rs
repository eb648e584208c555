//! Static, read-only table of named palettes.
//!
//! The registry is constructed once and passed down explicitly; nothing in the
//! engine reaches it through global state.

use std::collections::BTreeSet;

use crate::foundation::{
    core::Rgba8,
    error::{EaselError, EaselResult},
};

/// A fixed named set of colours plus designated stroke and background colours.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Rgba8>,
    pub stroke: Rgba8,
    pub background: Rgba8,
}

impl Palette {
    pub fn new(
        name: impl Into<String>,
        colors: Vec<Rgba8>,
        stroke: Rgba8,
        background: Rgba8,
    ) -> Self {
        Self {
            name: name.into(),
            colors,
            stroke,
            background,
        }
    }

    /// Build a palette from hex strings; any malformed colour rejects the whole palette.
    pub fn from_hex(
        name: impl Into<String>,
        colors: &[&str],
        stroke: &str,
        background: &str,
    ) -> EaselResult<Self> {
        let name = name.into();
        let parse = |c: &str| {
            Rgba8::parse_hex(c)
                .map_err(|e| EaselError::validation(format!("palette '{name}': {e}")))
        };
        let colors = colors.iter().map(|c| parse(*c)).collect::<EaselResult<Vec<_>>>()?;
        let stroke = parse(stroke)?;
        let background = parse(background)?;
        Ok(Self::new(name, colors, stroke, background))
    }

    /// Group name: the palette name up to the first `_`, without trailing digits.
    pub fn group(&self) -> &str {
        let head = self.name.split('_').next().unwrap_or(&self.name);
        let trimmed = head.trim_end_matches(|c: char| c.is_ascii_digit());
        if trimmed.is_empty() { head } else { trimmed }
    }
}

type Entry = (&'static str, &'static [&'static str], &'static str, &'static str);

const BUILTIN: &[Entry] = &[
    (
        "dale_paddle",
        &["#ff7a5a", "#765aa6", "#fee7bc", "#515e8c", "#ffc64a", "#b460a6", "#ffffff", "#4781c1"],
        "#000000",
        "#abe9e8",
    ),
    (
        "dale_night",
        &["#ae5d9d", "#f1e8bc", "#ef8fa3", "#f7c047", "#58c9ed", "#f77150"],
        "#000000",
        "#00ae83",
    ),
    (
        "dale_cat",
        &["#f77656", "#f7f7f7", "#efc849", "#1484c6", "#ed2d2e", "#f6a04c"],
        "#000000",
        "#00ae83",
    ),
    (
        "tundra1",
        &["#40708c", "#8e998c", "#5d0f07", "#a8b0a0", "#c0bfb1", "#f2ede0"],
        "#1a1a1a",
        "#f2ede0",
    ),
    (
        "tundra2",
        &["#5f9e93", "#3d3638", "#733632", "#b66239", "#b0a1a4", "#e3dad2"],
        "#3d3638",
        "#e3dad2",
    ),
    (
        "tundra3",
        &["#87c3ca", "#7b7377", "#b2475d", "#7d3e3e", "#eb7f64", "#d9c67a", "#f3f2f2"],
        "#7b7377",
        "#f3f2f2",
    ),
    (
        "hilda01",
        &["#ec5526", "#f4ac12", "#9ebbc1", "#f7f4e2"],
        "#1e1b1e",
        "#f7f4e2",
    ),
    (
        "hilda02",
        &["#eb5627", "#eebb20", "#4e9eb8", "#f7f5d0"],
        "#201d13",
        "#f7f5d0",
    ),
    (
        "hilda03",
        &["#e95145", "#f8b917", "#b8bdc1", "#ffb2a2"],
        "#010101",
        "#ffb2a2",
    ),
    (
        "cc239",
        &["#e3dd34", "#78496b", "#f0527f", "#a7e0e2"],
        "#e0eff0",
        "#e0eff0",
    ),
    (
        "cc234",
        &["#ffce49", "#ede8dc", "#ff5736", "#ff99b4"],
        "#f7f4ed",
        "#f7f4ed",
    ),
    (
        "cc232",
        &["#5c5f46", "#ff7044", "#ffce39", "#66aeaa"],
        "#e9ecde",
        "#e9ecde",
    ),
    (
        "ducci_jb",
        &["#395e54", "#e77b4d", "#050006", "#e55486"],
        "#050006",
        "#efe0bc",
    ),
    (
        "ducci_a",
        &["#809498", "#d3990e", "#000000", "#ecddc5"],
        "#863f52",
        "#ecddc5",
    ),
    (
        "rohlfs_1R",
        &["#004996", "#567bae", "#ff4c48", "#ffbcb3"],
        "#004996",
        "#fff8e7",
    ),
    (
        "rohlfs_2",
        &["#4d3d9a", "#f76975", "#ffffff", "#eff0dd"],
        "#211029",
        "#58bdbc",
    ),
    (
        "kov_02",
        &["#e8dccc", "#e94641", "#eeaeae"],
        "#e8dccc",
        "#6c96be",
    ),
    (
        "kov_06",
        &["#fa1f1a", "#0f0f10", "#f2eee2", "#fbb83a", "#2d6bcf"],
        "#0f0f10",
        "#f2eee2",
    ),
    (
        "spatial01",
        &["#ff5937", "#f6f6f4", "#4169ff"],
        "#ff5937",
        "#f6f6f4",
    ),
    (
        "spatial02",
        &["#ff5937", "#f6f6f4", "#f6f6f4"],
        "#ff5937",
        "#f6f6f4",
    ),
];

/// Read-only palette table with group lookup.
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    palettes: Vec<Palette>,
}

impl PaletteRegistry {
    /// Registry over an explicit palette list, in the given order.
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// The built-in palette table. Entries that fail to parse are skipped with a warning.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .filter_map(|(name, colors, stroke, background)| {
                    Palette::from_hex(*name, colors, stroke, background)
                        .inspect_err(|e| tracing::warn!(error = %e, "skipping built-in palette"))
                        .ok()
                })
                .collect(),
        )
    }

    pub fn all(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Palettes whose name contains `group` (case-sensitive), in registry order.
    pub fn group_members(&self, group: &str) -> Vec<&Palette> {
        if group.is_empty() {
            return Vec::new();
        }
        self.palettes
            .iter()
            .filter(|p| p.name.contains(group))
            .collect()
    }

    /// Distinct group names, sorted.
    pub fn groups(&self) -> Vec<String> {
        self.palettes
            .iter()
            .map(|p| p.group().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/registry.rs"]
mod tests;
