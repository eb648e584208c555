use rand::Rng;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{EaselError, EaselResult},
    palette::registry::{Palette, PaletteRegistry},
};

/// How a drawable picks its colours.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Keep the caller's colours untouched.
    Custom,
    /// Pick from the palettes matching a group name.
    #[default]
    Colorset,
    /// Pick from any palette in the registry.
    Random,
    /// Fill and border/background come from independently sampled palettes.
    Chaos,
}

impl ColorMode {
    pub fn parse(s: &str) -> EaselResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom" => Ok(Self::Custom),
            "colorset" => Ok(Self::Colorset),
            "random" => Ok(Self::Random),
            "chaos" => Ok(Self::Chaos),
            other => Err(EaselError::validation(format!(
                "unknown color mode '{other}' (expected custom|colorset|random|chaos)"
            ))),
        }
    }
}

/// An index that is either pinned or left to fresh sampling on every resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Pick {
    #[default]
    Any,
    Index(usize),
}

impl Pick {
    /// Map a raw control value where `-1` means "unspecified".
    pub fn from_control(v: i64) -> EaselResult<Self> {
        match v {
            -1 => Ok(Self::Any),
            v if v >= 0 => Ok(Self::Index(v as usize)),
            v => Err(EaselError::validation(format!(
                "palette index must be -1 or >= 0, got {v}"
            ))),
        }
    }

    fn choose<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> usize {
        match self {
            Self::Any => rng.gen_range(0..len),
            Self::Index(i) => i.min(len - 1),
        }
    }
}

/// Inputs to one colour resolution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorRequest {
    pub mode: ColorMode,
    pub group: String,
    pub variant: Pick,
    pub number: Pick,
}

impl Default for ColorRequest {
    fn default() -> Self {
        Self {
            mode: ColorMode::Colorset,
            group: "dale".to_string(),
            variant: Pick::Any,
            number: Pick::Any,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ResolvedColors {
    pub fill: Rgba8,
    pub border: Rgba8,
    pub background: Rgba8,
}

impl Default for ResolvedColors {
    fn default() -> Self {
        Self {
            fill: Rgba8::WHITE,
            border: Rgba8::BLACK,
            background: Rgba8::WHITE,
        }
    }
}

/// Resolve fill/border/background for `request`.
///
/// With both `variant` and `number` pinned the result is a pure function of the
/// inputs. Any `Pick::Any` draws from `rng` on every call.
pub fn resolve<R: Rng + ?Sized>(
    registry: &PaletteRegistry,
    request: &ColorRequest,
    current: &ResolvedColors,
    rng: &mut R,
) -> ResolvedColors {
    if request.mode == ColorMode::Custom {
        return current.clone();
    }
    if registry.is_empty() {
        tracing::warn!("palette registry is empty; keeping current colours");
        return current.clone();
    }

    match request.mode {
        ColorMode::Custom => current.clone(),
        ColorMode::Colorset => {
            let members = registry.group_members(&request.group);
            if members.is_empty() {
                tracing::debug!(
                    group = %request.group,
                    "unknown palette group; falling back to random"
                );
                return resolve_random(registry, request.number, rng);
            }
            let palette = members[request.variant.choose(members.len(), rng)];
            colors_from(palette, palette, request.number, rng)
        }
        ColorMode::Random => resolve_random(registry, request.number, rng),
        ColorMode::Chaos => {
            let fill_palette = random_palette(registry, rng);
            let edge_palette = random_palette(registry, rng);
            colors_from(fill_palette, edge_palette, request.number, rng)
        }
    }
}

fn random_palette<'a, R: Rng + ?Sized>(registry: &'a PaletteRegistry, rng: &mut R) -> &'a Palette {
    let all = registry.all();
    &all[rng.gen_range(0..all.len())]
}

fn resolve_random<R: Rng + ?Sized>(
    registry: &PaletteRegistry,
    number: Pick,
    rng: &mut R,
) -> ResolvedColors {
    let palette = random_palette(registry, rng);
    colors_from(palette, palette, number, rng)
}

// Fill comes from `fill_palette`; border and background from `edge_palette`.
fn colors_from<R: Rng + ?Sized>(
    fill_palette: &Palette,
    edge_palette: &Palette,
    number: Pick,
    rng: &mut R,
) -> ResolvedColors {
    let fill = pick_color(fill_palette, number, 0, rng);
    let border = pick_color(edge_palette, number, 1, rng);
    ResolvedColors {
        fill,
        border,
        background: edge_palette.background,
    }
}

fn pick_color<R: Rng + ?Sized>(
    palette: &Palette,
    number: Pick,
    offset: usize,
    rng: &mut R,
) -> Rgba8 {
    let colors = &palette.colors;
    if colors.is_empty() {
        tracing::warn!(palette = %palette.name, "palette has no colours; using stroke");
        return palette.stroke;
    }
    let idx = match number {
        Pick::Any => rng.gen_range(0..colors.len()),
        Pick::Index(i) => (i.min(colors.len() - 1) + offset) % colors.len(),
    };
    colors[idx]
}

#[cfg(test)]
#[path = "../../tests/unit/palette/resolver.rs"]
mod tests;
