// Render module: raster output of the lattice for background display

// ======================== MODULE DECLARATIONS ========================
pub mod tile_image;

// Test modules
mod _tests_tile_image;

// ======================== RASTER TYPES ========================
pub use tile_image::{
    Rgba,                // struct - 8-bit RGBA color
    TileImage,           // struct - owned pixel buffer (width, height, row-major pixels)
    render_lattice_tile, // fn(geometry: &LatticeGeometry, background: Rgba, high_quality: bool) -> TileImage
};
// TileImage impl methods:
//   new(width: u32, height: u32, fill: Rgba) -> Self          - creates a filled buffer
//   width(&self) -> u32, height(&self) -> u32                - pixel dimensions
//   pixel(&self, x: u32, y: u32) -> Option<Rgba>             - pixel lookup
//   pixels(&self) -> &[Rgba]                                 - row-major pixel data
//   write_ppm<W: Write>(&self, out: W) -> io::Result<()>     - binary PPM export (alpha dropped)
