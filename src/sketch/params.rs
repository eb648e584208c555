//! Flat control values and their one-way derivation into structured parameters.

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::timeline::Breathe,
    format::{engine::validate_size, state::FormatParams},
    foundation::core::{Orientation, Size},
    foundation::error::{EaselError, EaselResult},
    palette::resolver::{ColorMode, ColorRequest, Pick},
    scene::{draw::DrawParams, entity::EntitySpawner},
};

/// Untyped-ish control bag as supplied by a parameter panel or JSON file.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControlValues {
    pub orientation: String,
    pub aspect_ratio: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub fencing: bool,
    pub keep_aspect_ratio: bool,
    pub color_mode: String,
    pub palette_group: String,
    pub palette_variant: i64,
    pub palette_number: i64,
    pub entity_count: i64,
    pub entity_min_radius: f64,
    pub entity_max_radius: f64,
    pub entity_max_speed: f64,
    pub slow_interval: f64,
    pub halted: bool,
    pub breathe_min: f64,
    pub breathe_max: f64,
    pub breathe_increment: f64,
    pub stroke_width: f64,
    pub show_border: bool,
    pub seed: u64,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            orientation: "portrait".to_string(),
            aspect_ratio: 1.0,
            canvas_width: 800.0,
            canvas_height: 800.0,
            fencing: true,
            keep_aspect_ratio: false,
            color_mode: "colorset".to_string(),
            palette_group: "dale".to_string(),
            palette_variant: -1,
            palette_number: -1,
            entity_count: 12,
            entity_min_radius: 4.0,
            entity_max_radius: 16.0,
            entity_max_speed: 120.0,
            slow_interval: 2.0,
            halted: false,
            breathe_min: 0.8,
            breathe_max: 1.2,
            breathe_increment: 0.01,
            stroke_width: 1.0,
            show_border: true,
            seed: 0,
        }
    }
}

impl ControlValues {
    pub fn from_json_str(s: &str) -> EaselResult<Self> {
        serde_json::from_str(s).map_err(|e| EaselError::serde(format!("control values: {e}")))
    }

    pub fn from_reader(r: impl std::io::Read) -> EaselResult<Self> {
        serde_json::from_reader(r).map_err(|e| EaselError::serde(format!("control values: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> EaselResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EaselError::validation(format!("open control values '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Entity spawning limits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntityParams {
    pub count: i64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub max_speed: f64,
}

impl EntityParams {
    /// Spawner for these limits; rejects an empty radius range or a negative speed.
    pub fn spawner(&self) -> EaselResult<EntitySpawner> {
        EntitySpawner::new(self.min_radius, self.max_radius, self.max_speed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BreatheParams {
    pub min: f64,
    pub max: f64,
    pub increment: f64,
}

impl BreatheParams {
    pub fn breathe(&self) -> EaselResult<Breathe> {
        Breathe::new(self.min, self.max, self.increment)
    }
}

/// Structured parameters, recomputed from [`ControlValues`] every tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SketchParams {
    pub format: FormatParams,
    pub colors: ColorRequest,
    pub entities: EntityParams,
    pub breathe: BreatheParams,
    pub slow_interval: f64,
    pub halted: bool,
    pub draw: DrawParams,
    pub seed: u64,
}

impl SketchParams {
    /// Pure derivation; string keys and palette sentinels are validated here.
    pub fn derive(cv: &ControlValues) -> EaselResult<Self> {
        Ok(Self {
            format: FormatParams {
                orientation: Orientation::parse(&cv.orientation)?,
                aspect_ratio: cv.aspect_ratio,
                requested_size: Size::new(cv.canvas_width, cv.canvas_height),
                fencing: cv.fencing,
                keep_aspect_ratio: cv.keep_aspect_ratio,
            },
            colors: ColorRequest {
                mode: ColorMode::parse(&cv.color_mode)?,
                group: cv.palette_group.clone(),
                variant: Pick::from_control(cv.palette_variant)?,
                number: Pick::from_control(cv.palette_number)?,
            },
            entities: EntityParams {
                count: cv.entity_count,
                min_radius: cv.entity_min_radius,
                max_radius: cv.entity_max_radius,
                max_speed: cv.entity_max_speed,
            },
            breathe: BreatheParams {
                min: cv.breathe_min,
                max: cv.breathe_max,
                increment: cv.breathe_increment,
            },
            slow_interval: cv.slow_interval,
            halted: cv.halted,
            draw: DrawParams {
                frame: 0,
                stroke_width: cv.stroke_width.max(0.0),
                show_border: cv.show_border,
            },
            seed: cv.seed,
        })
    }

    /// Every component precondition, checked up front so a bad frame mutates nothing.
    pub fn validate(&self) -> EaselResult<()> {
        let ratio = self.format.aspect_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(EaselError::validation(format!(
                "aspect ratio must be finite and > 0, got {ratio}"
            )));
        }
        validate_size(self.format.requested_size)?;
        self.entities.spawner()?;
        self.breathe.breathe()?;
        if self.entities.count < 0 {
            return Err(EaselError::validation(format!(
                "population target must be >= 0, got {}",
                self.entities.count
            )));
        }
        if !self.slow_interval.is_finite() || self.slow_interval < 0.0 {
            return Err(EaselError::validation(format!(
                "slow interval must be finite and >= 0, got {}",
                self.slow_interval
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/params.rs"]
mod tests;
