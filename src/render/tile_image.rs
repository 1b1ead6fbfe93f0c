use std::io::{self, Write};

use log::trace;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::SiteStyle;
use crate::geometries::BoundingBox2D;
use crate::interfaces::Space;
use crate::lattice::LatticeGeometry;

/// Sub-samples per pixel axis for anti-aliased rendering.
const HIGH_QUALITY_SAMPLES: u32 = 4;

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Source-over composite of `self` onto `dst`, with `self`'s alpha scaled by `coverage`.
    pub fn over(self, dst: Rgba, coverage: f64) -> Rgba {
        let src_a = self.a as f64 / 255.0 * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return dst;
        }
        let dst_a = dst.a as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let mix = |s: u8, d: u8| {
            let c = (s as f64 * src_a + d as f64 * dst_a * (1.0 - src_a)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        Rgba::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

/// Owned raster buffer, row-major, origin at the top-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl TileImage {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        TileImage {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Composite `color` onto the pixel at `(x, y)` taken modulo the image size.
    fn blend_wrapped(&mut self, x: i64, y: i64, color: Rgba, coverage: f64) {
        let x = x.rem_euclid(self.width as i64) as u32;
        let y = y.rem_euclid(self.height as i64) as u32;
        let index = self.index(x, y);
        self.pixels[index] = color.over(self.pixels[index], coverage);
    }

    /// Write the image as binary PPM (P6). Alpha is dropped.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut row = Vec::with_capacity(self.width as usize * 3);
        for y in 0..self.height {
            row.clear();
            for x in 0..self.width {
                let p = self.pixels[self.index(x, y)];
                row.extend_from_slice(&[p.r, p.g, p.b]);
            }
            out.write_all(&row)?;
        }
        out.flush()
    }
}

/// Render one period of the lattice into a tileable image.
///
/// The image size is [`LatticeGeometry::tile_pixel_size`], a whole number of lattice
/// periods bounded by `config.max_tile_extent`. Every site whose scene position falls in
/// the half-open image rectangle is drawn once as a filled dot with an outline, and dot
/// pixels wrap around the image edges so repeated tiles meet without seams.
pub fn render_lattice_tile(geometry: &LatticeGeometry, background: Rgba, high_quality: bool) -> TileImage {
    let [width, height] = geometry.tile_pixel_size();

    let style = geometry.config().style(high_quality);
    let samples = if high_quality { HIGH_QUALITY_SAMPLES } else { 1 };

    let mut image = TileImage::new(width, height, background);
    let pixel_rect = BoundingBox2D::new(
        Vector2::zeros(),
        Vector2::new(width as f64, height as f64),
    );

    let mut drawn = 0usize;
    for coord in geometry.enclosed_sites_in_rect(&pixel_rect, Space::Scene) {
        let Ok(center) = geometry.lattice_to_scene(&coord) else {
            continue;
        };
        // Half-open: sites on the far edges belong to the next tile
        if center.x >= width as f64 || center.y >= height as f64 {
            continue;
        }
        draw_site(&mut image, center, style, geometry.scale_factor(), samples);
        drawn += 1;
    }

    trace!(
        "Rendered lattice tile {}x{} px with {} site(s), high_quality={}",
        width, height, drawn, high_quality
    );
    image
}

fn draw_site(image: &mut TileImage, center: Vector2<f64>, style: &SiteStyle, scale: f64, samples: u32) {
    let radius = style.diameter * scale / 2.0;
    let inner = (radius - style.edge_width * scale).max(0.0);
    let (radius_sq, inner_sq) = (radius * radius, inner * inner);
    let total = (samples * samples) as f64;

    let x_lo = (center.x - radius).floor() as i64;
    let x_hi = (center.x + radius).ceil() as i64;
    let y_lo = (center.y - radius).floor() as i64;
    let y_hi = (center.y + radius).ceil() as i64;

    for py in y_lo..=y_hi {
        for px in x_lo..=x_hi {
            let (mut fill_hits, mut edge_hits) = (0u32, 0u32);
            for sy in 0..samples {
                for sx in 0..samples {
                    let x = px as f64 + (sx as f64 + 0.5) / samples as f64;
                    let y = py as f64 + (sy as f64 + 0.5) / samples as f64;
                    let d_sq = (x - center.x).powi(2) + (y - center.y).powi(2);
                    if d_sq <= inner_sq {
                        fill_hits += 1;
                    } else if d_sq <= radius_sq {
                        edge_hits += 1;
                    }
                }
            }
            if fill_hits > 0 {
                image.blend_wrapped(px, py, style.fill, fill_hits as f64 / total);
            }
            if edge_hits > 0 {
                image.blend_wrapped(px, py, style.edge, edge_hits as f64 / total);
            }
        }
    }
}
