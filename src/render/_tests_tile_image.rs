#[cfg(test)]
mod _tests_tile_image {
    use super::super::tile_image::*;
    use crate::config::{EngineConfig, SiteStyle};
    use crate::lattice::{LatticeGeometry, si_100_2x1_lattice, square_lattice};
    use nalgebra::Vector2;

    const RED: Rgba = Rgba::new(255, 0, 0, 255);
    const BLUE: Rgba = Rgba::new(0, 0, 255, 255);

    /// Unit square lattice at 10 px per unit with a dot of radius 3 px and a 1 px rim.
    fn styled_square() -> LatticeGeometry {
        let style = SiteStyle {
            diameter: 0.6,
            edge_width: 0.1,
            fill: RED,
            edge: BLUE,
        };
        let config = EngineConfig {
            tile_style: style,
            publish_style: style,
            ..EngineConfig::default()
        };
        square_lattice(1.0, 10.0).unwrap().with_config(config)
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex("#ff8000"), Some(Rgba::new(255, 128, 0, 255)));
        assert_eq!(Rgba::from_hex("11223344"), Some(Rgba::new(0x11, 0x22, 0x33, 0x44)));
        assert_eq!(Rgba::from_hex("FFFFFF"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("ff00"), None);
        assert_eq!(Rgba::from_hex("gg0000"), None);
        assert_eq!(Rgba::from_hex(""), None);
    }

    #[test]
    fn test_rgba_over() {
        assert_eq!(RED.over(Rgba::WHITE, 1.0), RED);
        assert_eq!(RED.over(Rgba::WHITE, 0.0), Rgba::WHITE);
        assert_eq!(Rgba::TRANSPARENT.over(BLUE, 1.0), BLUE);

        let half = Rgba::BLACK.over(Rgba::WHITE, 0.5);
        assert_eq!(half, Rgba::new(128, 128, 128, 255));

        // Onto a transparent destination the color survives and coverage becomes alpha
        let faint = BLUE.over(Rgba::TRANSPARENT, 0.25);
        assert_eq!((faint.r, faint.g, faint.b), (0, 0, 255));
        assert_eq!(faint.a, 64);
    }

    #[test]
    fn test_image_buffer() {
        let image = TileImage::new(4, 3, Rgba::WHITE);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 12);
        assert_eq!(image.pixel(3, 2), Some(Rgba::WHITE));
        assert_eq!(image.pixel(4, 0), None);
        assert_eq!(image.pixel(0, 3), None);
    }

    #[test]
    fn test_write_ppm() {
        let image = TileImage::new(3, 2, Rgba::new(1, 2, 3, 4));
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 3 * 2 * 3);
        assert_eq!(&out[header.len()..header.len() + 3], &[1, 2, 3]);
    }

    #[test]
    fn test_tile_size_covers_whole_periods() {
        let image = square_lattice(1.0, 10.0)
            .unwrap()
            .tileable_lattice_image(Rgba::WHITE, false);
        assert_eq!((image.width(), image.height()), (10, 10));

        // 38.4 x 76.8 scene units per cell, five cells per tile side
        let image = si_100_2x1_lattice(10.0)
            .unwrap()
            .tileable_lattice_image(Rgba::WHITE, false);
        assert_eq!((image.width(), image.height()), (192, 384));
    }

    #[test]
    fn test_nearly_horizontal_lattice_gives_bounded_image() {
        let lattice = LatticeGeometry::new(
            Vector2::new(3.84, 1e-6),
            Vector2::new(0.0, 7.68),
            vec![Vector2::zeros()],
            10.0,
            EngineConfig::default(),
        )
        .unwrap();
        let image = lattice.tileable_lattice_image(Rgba::WHITE, false);
        assert_eq!((image.width(), image.height()), (192, 384));

        let capped = lattice.with_config(EngineConfig::default().with_max_tile_extent(64.0));
        let image = capped.tileable_lattice_image(Rgba::WHITE, false);
        assert!(image.width() <= 64 && image.height() <= 64);
    }

    #[test]
    fn test_tile_repeats_with_lattice_period() {
        let config = styled_square().config().clone();
        let lattice = square_lattice(1.0, 7.5).unwrap().with_config(config);

        // 7.5 px period: the tile holds two cells per side
        let image = lattice.tileable_lattice_image(Rgba::WHITE, false);
        assert_eq!((image.width(), image.height()), (15, 15));

        // Sites at 0 and 7.5 px are both drawn
        assert_eq!(image.pixel(0, 0), Some(RED));
        assert_eq!(image.pixel(7, 0), Some(RED));
        assert_eq!(image.pixel(7, 7), Some(RED));
        assert_eq!(image.pixel(0, 7), Some(RED));
        assert_eq!(image.pixel(4, 4), Some(Rgba::WHITE));
    }

    #[test]
    fn test_site_dot_wraps_around_edges() {
        let image = styled_square().tileable_lattice_image(Rgba::WHITE, false);

        // Site at the origin: fill on both sides of every edge
        assert_eq!(image.pixel(0, 0), Some(RED));
        assert_eq!(image.pixel(9, 9), Some(RED));
        assert_eq!(image.pixel(9, 0), Some(RED));
        assert_eq!(image.pixel(0, 9), Some(RED));

        // Rim between radius 2 and 3 px
        assert_eq!(image.pixel(2, 0), Some(BLUE));
        assert_eq!(image.pixel(7, 0), Some(BLUE));

        // Far from any site
        assert_eq!(image.pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_high_quality_antialiases_rim() {
        let geometry = styled_square();
        let image = geometry.tileable_lattice_image(Rgba::TRANSPARENT, true);

        // Pixel (2, 1) straddles the outer radius
        let partial = image.pixel(2, 1).unwrap();
        assert_eq!((partial.r, partial.g, partial.b), (0, 0, 255));
        assert!(partial.a > 0 && partial.a < 255);

        // Without anti-aliasing the same pixel is all or nothing
        let crisp = geometry.tileable_lattice_image(Rgba::TRANSPARENT, false);
        let alpha = crisp.pixel(2, 1).unwrap().a;
        assert!(alpha == 0 || alpha == 255);
    }

    #[test]
    fn test_default_styles_differ_by_quality() {
        let geometry = square_lattice(1.0, 10.0).unwrap();
        let interactive = geometry.tileable_lattice_image(Rgba::WHITE, false);
        let publish = geometry.tileable_lattice_image(Rgba::WHITE, true);

        // Publication rim is black; the interactive one is faint white on white
        assert!(interactive.pixels().iter().all(|p| *p == Rgba::WHITE));
        assert!(publish.pixels().iter().any(|p| p.r < 128));
    }
}
