use log::debug;
use nalgebra::Vector2;

use crate::config::{DEFAULT_MAX_TILE_EXTENT, EngineConfig, LATTICE_TOLERANCE};
use crate::errors::LatticeError;
use crate::geometries::BoundingBox2D;
use crate::interfaces::Space;
use crate::lattice::base_matrix::BaseMatrix;
use crate::lattice::lattice_algorithms::{Rational, rationalize};
use crate::lattice::lattice_coord::LatticeCoord;
use crate::render::{Rgba, TileImage, render_lattice_tile};

/// Periodic 2D lattice with a multi-site unit cell.
///
/// Sole source of truth for coordinate math: lattice-index space `(n, m, l)`, physical
/// space (absolute length units) and scene space (physical scaled by `scale_factor`).
/// The model is immutable; a new lattice definition means a new `LatticeGeometry`, and any
/// occupancy recorded against the old one must be cleared by the caller.
#[derive(Debug, Clone)]
pub struct LatticeGeometry {
    /// Lattice vectors `a1`, `a2` with derived scalars.
    base: BaseMatrix,
    /// Basis-site offsets `b_0..b_{k-1}` within one unit cell, physical units.
    basis: Vec<Vector2<f64>>,
    /// Scene units per physical unit.
    scale_factor: f64,
    config: EngineConfig,
}

impl LatticeGeometry {
    /// Construct the geometry model from lattice vectors, basis offsets and scale factor.
    ///
    /// Fails with [`LatticeError::InvalidLattice`] for zero or collinear lattice vectors,
    /// an empty basis, non-finite basis offsets or a scale factor that is not a finite
    /// positive number.
    pub fn new(
        a1: Vector2<f64>,
        a2: Vector2<f64>,
        basis: Vec<Vector2<f64>>,
        scale_factor: f64,
        config: EngineConfig,
    ) -> Result<Self, LatticeError> {
        let base = BaseMatrix::from_base_vectors(a1, a2)?;

        if basis.is_empty() {
            return Err(LatticeError::InvalidLattice(
                "Unit cell must contain at least one basis site.".to_string(),
            ));
        }
        if basis.iter().any(|b| !b.x.is_finite() || !b.y.is_finite()) {
            return Err(LatticeError::InvalidLattice(
                "Basis site offsets must be finite.".to_string(),
            ));
        }
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(LatticeError::InvalidLattice(format!(
                "Scale factor must be finite and positive, got {}.",
                scale_factor
            )));
        }
        if !(config.max_tile_extent.is_finite() && config.max_tile_extent >= 1.0) {
            return Err(LatticeError::InvalidLattice(format!(
                "Maximum tile extent must be a finite number of at least one pixel, got {}.",
                config.max_tile_extent
            )));
        }

        debug!(
            "Lattice constructed: a1=({}, {}), a2=({}, {}), {} basis site(s), orthogonal={}, coth={:.6}, scale={}",
            a1.x,
            a1.y,
            a2.x,
            a2.y,
            basis.len(),
            base.is_orthogonal(),
            base.cotangent(),
            scale_factor
        );

        Ok(LatticeGeometry {
            base,
            basis,
            scale_factor,
            config,
        })
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    // ======================== ACCESSORS ========================

    pub fn base_matrix(&self) -> &BaseMatrix {
        &self.base
    }

    pub fn lattice_vectors(&self) -> [Vector2<f64>; 2] {
        self.base.base_vectors()
    }

    pub fn basis(&self) -> &[Vector2<f64>] {
        &self.basis
    }

    pub fn basis_count(&self) -> usize {
        self.basis.len()
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn is_orthogonal(&self) -> bool {
        self.base.is_orthogonal()
    }

    pub fn cotangent(&self) -> f64 {
        self.base.cotangent()
    }

    /// Unit-cell area `|a1 × a2|`, physical units squared.
    pub fn cell_area(&self) -> f64 {
        self.base.determinant().abs()
    }

    pub fn squared_lengths(&self) -> [f64; 2] {
        self.base.squared_lengths()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lattice vectors in scene units, rounded to whole pixels.
    pub fn scene_lattice_vectors(&self) -> [Vector2<i32>; 2] {
        self.lattice_vectors().map(|a| self.scene_pixels(a))
    }

    /// Basis-site offset `index` in scene units, rounded to whole pixels.
    pub fn scene_site_vector(&self, index: usize) -> Option<Vector2<i32>> {
        self.basis.get(index).map(|b| self.scene_pixels(*b))
    }

    fn scene_pixels(&self, physical: Vector2<f64>) -> Vector2<i32> {
        let scene = self.physical_to_scene(physical);
        Vector2::new(scene.x.round() as i32, scene.y.round() as i32)
    }

    // ======================== CONVERSIONS ========================

    /// Whether `coord` is structurally valid and its sub-site index exists in the basis.
    pub fn is_valid_coord(&self, coord: &LatticeCoord) -> bool {
        coord.is_valid() && (coord.l as usize) < self.basis.len()
    }

    fn sub_site(&self, coord: &LatticeCoord) -> Result<usize, LatticeError> {
        if coord.l < 0 || coord.l as usize >= self.basis.len() {
            return Err(LatticeError::InvalidCoordinate {
                coord: *coord,
                basis_count: self.basis.len(),
            });
        }
        Ok(coord.l as usize)
    }

    /// Physical position `a1 * n + a2 * m + b_l`. Index `l` must be in the basis.
    pub(crate) fn site_physical(&self, n: i32, m: i32, l: usize) -> Vector2<f64> {
        self.base.cartesian(Vector2::new(n as f64, m as f64)) + self.basis[l]
    }

    /// Physical location of a lattice coordinate.
    ///
    /// Negative unit-cell indices are accepted; only the sub-site index is checked.
    pub fn lattice_to_physical(&self, coord: &LatticeCoord) -> Result<Vector2<f64>, LatticeError> {
        let l = self.sub_site(coord)?;
        Ok(self.site_physical(coord.n, coord.m, l))
    }

    /// Scene position of a lattice coordinate.
    pub fn lattice_to_scene(&self, coord: &LatticeCoord) -> Result<Vector2<f64>, LatticeError> {
        Ok(self.physical_to_scene(self.lattice_to_physical(coord)?))
    }

    pub fn physical_to_scene(&self, physical: Vector2<f64>) -> Vector2<f64> {
        physical * self.scale_factor
    }

    pub fn scene_to_physical(&self, scene: Vector2<f64>) -> Vector2<f64> {
        scene / self.scale_factor
    }

    /// Bring a point tagged with its space into physical space.
    pub fn to_physical(&self, point: Vector2<f64>, space: Space) -> Vector2<f64> {
        match space {
            Space::Physical => point,
            Space::Scene => self.scene_to_physical(point),
        }
    }

    /// Real-valued lattice indices `(n_f, m_f)` with `physical = a1 * n_f + a2 * m_f`.
    pub fn fractional_indices(&self, physical: Vector2<f64>) -> Vector2<f64> {
        self.base.fractional(physical)
    }

    // ======================== SPATIAL QUERIES ========================

    /// Nearest lattice site to `point` and its exact physical position.
    ///
    /// Rounding the fractional indices alone is not enough once the unit cell holds more
    /// than one site, since a site's Voronoi cell need not line up with the unit-cell
    /// parallelogram. For every basis site the unit cell is estimated from `point - b_l`
    /// and the surrounding 3×3 block of cells is searched. Ties keep the first candidate
    /// in `(l, n, m)` scan order. A non-finite point yields [`LatticeCoord::invalid`].
    pub fn nearest_site(&self, point: Vector2<f64>, space: Space) -> (LatticeCoord, Vector2<f64>) {
        let target = self.to_physical(point, space);

        let mut best_dist = f64::INFINITY;
        let mut best = (LatticeCoord::invalid(), target);

        for (l, offset) in self.basis.iter().enumerate() {
            let cell = self.base.fractional(target - offset);
            let (n0, m0) = (cell.x.round() as i32, cell.y.round() as i32);

            for n in n0.saturating_sub(1)..=n0.saturating_add(1) {
                for m in m0.saturating_sub(1)..=m0.saturating_add(1) {
                    let pos = self.site_physical(n, m, l);
                    let dist = (pos - target).norm_squared();
                    if dist < best_dist {
                        best_dist = dist;
                        best = (LatticeCoord::new(n, m, l as i32), pos);
                    }
                }
            }
        }

        best
    }

    /// All lattice sites whose position lies inside `rect` (boundary inclusive).
    ///
    /// The rectangle corners are inverted into fractional index space and the bounding box
    /// of those indices, widened by the basis offsets and one extra cell on every side, is
    /// enumerated and filtered. Results are ordered by `n`, then `m`, then `l`.
    ///
    /// WARNING: `rect` is taken as axis-aligned with the scene. A lattice rendered under a
    /// rotation needs the query rectangle rotated into lattice-aligned space first, which
    /// this method does not do.
    pub fn enclosed_sites_in_rect(&self, rect: &BoundingBox2D, space: Space) -> Vec<LatticeCoord> {
        let rect = match space {
            Space::Physical => *rect,
            Space::Scene => rect.scaled(1.0 / self.scale_factor),
        };

        let (corner_min, corner_max) = self.fractional_extent(rect.corners().iter().copied());
        let (basis_min, basis_max) = self.fractional_extent(self.basis.iter().copied());

        let n_lo = ((corner_min.x - basis_max.x).floor() as i32).saturating_sub(1);
        let n_hi = ((corner_max.x - basis_min.x).ceil() as i32).saturating_add(1);
        let m_lo = ((corner_min.y - basis_max.y).floor() as i32).saturating_sub(1);
        let m_hi = ((corner_max.y - basis_min.y).ceil() as i32).saturating_add(1);

        let mut sites = Vec::new();
        for n in n_lo..=n_hi {
            for m in m_lo..=m_hi {
                for l in 0..self.basis.len() {
                    if rect.contains(self.site_physical(n, m, l)) {
                        sites.push(LatticeCoord::new(n, m, l as i32));
                    }
                }
            }
        }
        sites
    }

    /// All sites in the index-space rectangle spanned by two coordinates, every sub-site
    /// included. Pure index enumeration, exact regardless of lattice rotation. Results are
    /// ordered by `n`, then `m`, then `l`.
    pub fn enclosed_sites_between(&self, coord1: &LatticeCoord, coord2: &LatticeCoord) -> Vec<LatticeCoord> {
        let (n_lo, n_hi) = (coord1.n.min(coord2.n), coord1.n.max(coord2.n));
        let (m_lo, m_hi) = (coord1.m.min(coord2.m), coord1.m.max(coord2.m));

        let mut sites = Vec::new();
        for n in n_lo..=n_hi {
            for m in m_lo..=m_hi {
                for l in 0..self.basis.len() {
                    sites.push(LatticeCoord::new(n, m, l as i32));
                }
            }
        }
        sites
    }

    fn fractional_extent<I>(&self, points: I) -> (Vector2<f64>, Vector2<f64>)
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let fractional = points.into_iter().map(|p| self.base.fractional(p));
        match BoundingBox2D::from_points(fractional) {
            Some(bbox) => (bbox.min, bbox.max),
            None => (Vector2::zeros(), Vector2::zeros()),
        }
    }

    // ======================== TILING ========================

    /// Rational approximation of `x` under the configured accuracy and iteration cap.
    pub fn rationalize(&self, x: f64) -> Rational {
        rationalize(
            x,
            self.config.rationalize_max_iterations,
            self.config.rationalize_accuracy,
        )
    }

    /// Scene-space rectangle anchored at the origin that approximates a repeatable
    /// supercell.
    ///
    /// The width is the shortest horizontal lattice translation `i*a1 + j*a2` found by
    /// rationalizing the ratio of the `y` components; the height likewise from the `x`
    /// components. Exact for axis-aligned orthogonal lattices, approximate otherwise.
    /// A side that collapses or exceeds `config.max_tile_extent` falls back to the
    /// unit-cell extent, capped at the same limit.
    pub fn tile_approx(&self) -> BoundingBox2D {
        let [a1, a2] = self.lattice_vectors();
        let limit = self.tile_extent_limit() / self.scale_factor;
        let usable = |extent: f64| extent > LATTICE_TOLERANCE && extent <= limit;

        let (i, j) = self.closing_multiples(a1.y, a2.y);
        let mut width = (i * a1.x + j * a2.x).abs();

        let (i, j) = self.closing_multiples(a1.x, a2.x);
        let mut height = (i * a1.y + j * a2.y).abs();

        if !usable(width) || !usable(height) {
            let corners = [Vector2::zeros(), a1, a2, a1 + a2];
            let span = |axis: usize| {
                let lo = corners.iter().map(|c| c[axis]).fold(f64::INFINITY, f64::min);
                let hi = corners.iter().map(|c| c[axis]).fold(f64::NEG_INFINITY, f64::max);
                (hi - lo).min(limit)
            };
            if !usable(width) {
                debug!("Tile width {} unusable, falling back to the unit-cell span", width);
                width = span(0);
            }
            if !usable(height) {
                debug!("Tile height {} unusable, falling back to the unit-cell span", height);
                height = span(1);
            }
        }

        BoundingBox2D::new(
            Vector2::zeros(),
            self.physical_to_scene(Vector2::new(width, height)),
        )
    }

    /// Tile image size in whole pixels.
    ///
    /// Each side of [`Self::tile_approx`] is rationalized as `p / q` and the tile spans `q`
    /// periods, `p` pixels, so repeated tiles stay in phase with the lattice. When `p`
    /// would exceed `config.max_tile_extent` a single period rounded to whole pixels is
    /// used instead.
    pub fn tile_pixel_size(&self) -> [u32; 2] {
        let tile = self.tile_approx();
        [
            self.whole_pixel_period(tile.width()),
            self.whole_pixel_period(tile.height()),
        ]
    }

    fn whole_pixel_period(&self, period: f64) -> u32 {
        let limit = self.tile_extent_limit();
        let snapped = self.rationalize(period);
        let pixels = if snapped.numerator > 0 && snapped.numerator as f64 <= limit {
            snapped.numerator as f64
        } else {
            period.round()
        };
        pixels.max(1.0).min(limit) as u32
    }

    fn tile_extent_limit(&self) -> f64 {
        let limit = self.config.max_tile_extent;
        if limit.is_finite() && limit >= 1.0 {
            limit.min(u32::MAX as f64)
        } else {
            DEFAULT_MAX_TILE_EXTENT
        }
    }

    /// Integer multiples `(i, j)` with `i * c1 + j * c2 ≈ 0`, `(i, j) ≠ (0, 0)`.
    fn closing_multiples(&self, c1: f64, c2: f64) -> (f64, f64) {
        if c1.abs() <= LATTICE_TOLERANCE {
            return (1.0, 0.0);
        }
        if c2.abs() <= LATTICE_TOLERANCE {
            return (0.0, 1.0);
        }
        let ratio = self.rationalize(-c2 / c1);
        (ratio.numerator as f64, ratio.denominator as f64)
    }

    /// Raster image of one period of the lattice for use as a repeating background.
    ///
    /// `high_quality` selects the publication style and anti-aliased rendering.
    pub fn tileable_lattice_image(&self, background: Rgba, high_quality: bool) -> TileImage {
        render_lattice_tile(self, background, high_quality)
    }
}
