//! Drawing to G-code orchestration.
//!
//! Fill operations carry their region as an encoded mask image. The pipeline
//! decodes each mask, extracts its boundary and concatenates the boundaries
//! in drawing order before handing them to the contour emitter. Boundaries
//! are cached per fill id and reused until the fill's image data changes.

use std::collections::{HashMap, HashSet};

use image::{Rgb, RgbaImage};
use stonecut_camtools::{ContourGcodeGenerator, ContourGcodeParameters};
use stonecut_core::{DrawingOperation, FillOperation, GcodeError, Point, Result};
use stonecut_raster::{decode_mask, encode_mask_png, extract_boundary, FloodFill};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Boundary extraction result for one fill operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTrace {
    pub id: Uuid,
    /// The ordered boundary, or why the mask could not be decoded.
    pub outcome: std::result::Result<Vec<Point>, String>,
}

impl RegionTrace {
    pub fn boundary(&self) -> Option<&[Point]> {
        self.outcome.as_deref().ok()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image_data: String,
    boundary: Vec<Point>,
}

/// Extracted boundaries keyed by fill id.
///
/// An entry is valid only for the exact encoded image it was built from.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCache {
    entries: HashMap<Uuid, CacheEntry>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached boundary for `id`, if it was extracted from `image_data`.
    pub fn get(&self, id: &Uuid, image_data: &str) -> Option<&[Point]> {
        self.entries
            .get(id)
            .filter(|entry| entry.image_data == image_data)
            .map(|entry| entry.boundary.as_slice())
    }

    /// Store a boundary, replacing any entry for the same id.
    pub fn insert(&mut self, id: Uuid, image_data: String, boundary: Vec<Point>) {
        self.entries.insert(
            id,
            CacheEntry {
                image_data,
                boundary,
            },
        );
    }

    /// Drop entries whose id is not in `ids`.
    pub fn retain_only<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a Uuid>,
    {
        let keep: HashSet<&Uuid> = ids.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| keep.contains(id));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!(evicted, "Evicted stale boundaries");
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drawing to toolpath pipeline
#[derive(Debug, Default)]
pub struct FillPipeline {
    cache: BoundaryCache,
}

impl FillPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &BoundaryCache {
        &self.cache
    }

    /// Boundary of one fill, from the cache when its image is unchanged.
    pub fn trace_fill(&mut self, fill: &FillOperation) -> RegionTrace {
        if let Some(boundary) = self.cache.get(&fill.id, &fill.image_data) {
            debug!(id = %fill.id, "Boundary cache hit");
            return RegionTrace {
                id: fill.id,
                outcome: Ok(boundary.to_vec()),
            };
        }

        debug!(id = %fill.id, "Boundary cache miss");
        match decode_mask(&fill.image_data) {
            Ok(mask) => {
                let boundary = extract_boundary(&mask);
                debug!(id = %fill.id, points = boundary.len(), "Extracted fill boundary");
                self.cache
                    .insert(fill.id, fill.image_data.clone(), boundary.clone());
                RegionTrace {
                    id: fill.id,
                    outcome: Ok(boundary),
                }
            }
            Err(e) => {
                warn!(id = %fill.id, error = %e, "Boundary extraction failed, skipping region");
                RegionTrace {
                    id: fill.id,
                    outcome: Err(e.to_string()),
                }
            }
        }
    }

    /// Trace every fill operation in drawing order. Other operations and
    /// fills without image data are skipped.
    pub fn trace_regions(&mut self, operations: &[DrawingOperation]) -> Vec<RegionTrace> {
        let fills: Vec<&FillOperation> = operations
            .iter()
            .filter_map(DrawingOperation::as_fill)
            .filter(|fill| !fill.image_data.is_empty())
            .collect();

        self.cache.retain_only(fills.iter().copied().map(|fill| &fill.id));

        let traces: Vec<RegionTrace> = fills.into_iter().map(|f| self.trace_fill(f)).collect();
        let failed = traces.iter().filter(|t| !t.is_ok()).count();
        info!(regions = traces.len(), failed, "Traced fill regions");
        traces
    }

    /// All successful boundaries concatenated in drawing order.
    pub fn collect_points(&mut self, operations: &[DrawingOperation]) -> Vec<Point> {
        self.trace_regions(operations)
            .into_iter()
            .filter_map(|trace| trace.outcome.ok())
            .flatten()
            .collect()
    }

    /// Contour program for every fill in the drawing.
    ///
    /// An empty string means there was nothing drawable. Only invalid
    /// parameters are an error.
    pub fn generate_gcode(
        &mut self,
        operations: &[DrawingOperation],
        params: &ContourGcodeParameters,
    ) -> Result<String> {
        let generator =
            ContourGcodeGenerator::new(params.clone()).map_err(|e| GcodeError::InvalidParameter {
                param: "contour".to_string(),
                reason: e.to_string(),
            })?;

        let points = self.collect_points(operations);
        if points.is_empty() {
            info!("No fill boundaries to generate G-code from");
        }
        Ok(generator.generate(&points))
    }
}

/// Bucket fill at `seed` and package the region as a new fill operation.
///
/// Returns `Ok(None)` when the seed already has the fill color.
pub fn fill_at(
    raster: &RgbaImage,
    seed: (u32, u32),
    color: Rgb<u8>,
    tolerance: u8,
) -> Result<Option<FillOperation>> {
    let Some(mask) = FloodFill::new()
        .with_tolerance(tolerance)
        .fill(raster, seed, color)?
    else {
        return Ok(None);
    };

    let image_data = encode_mask_png(&mask.to_image(color))?;
    let Rgb([r, g, b]) = color;
    let fill = FillOperation::new(
        image_data,
        format!("#{:02x}{:02x}{:02x}", r, g, b),
        raster.width(),
        raster.height(),
    );
    info!(id = %fill.id, pixels = mask.len(), "Created fill operation");
    Ok(Some(fill))
}
