#[cfg(test)]
mod tests {
    use super::super::geometry2d_bounding_box::BoundingBox2D;
    use nalgebra::Vector2;

    // Helper function for approximate float comparison
    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_vector_approx_eq(v1: Vector2<f64>, v2: Vector2<f64>, epsilon: f64) {
        if !approx_eq(v1.x, v2.x, epsilon) || !approx_eq(v1.y, v2.y, epsilon) {
            panic!("Vectors not approximately equal: {:?} != {:?}", v1, v2);
        }
    }

    #[test]
    fn test_new_with_valid_bounds() {
        let bbox = BoundingBox2D::new(Vector2::new(-5.0, -10.0), Vector2::new(5.0, 10.0));

        assert_vector_approx_eq(bbox.min, Vector2::new(-5.0, -10.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(5.0, 10.0), 1e-10);
    }

    #[test]
    #[should_panic(expected = "Rectangle corners out of order")]
    #[cfg(debug_assertions)]
    fn test_new_with_invalid_bounds() {
        let _bbox = BoundingBox2D::new(Vector2::new(5.0, 10.0), Vector2::new(-5.0, -10.0));
    }

    #[test]
    fn test_from_corners_any_drag_direction() {
        let bbox = BoundingBox2D::from_corners(Vector2::new(4.0, -1.0), Vector2::new(-2.0, 3.0));
        assert_vector_approx_eq(bbox.min, Vector2::new(-2.0, -1.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(4.0, 3.0), 1e-10);
    }

    #[test]
    fn test_from_points_edge_cases() {
        assert!(BoundingBox2D::from_points(Vec::<Vector2<f64>>::new()).is_none());

        let single = BoundingBox2D::from_points(vec![Vector2::new(1.0, 2.0)]).unwrap();
        assert_vector_approx_eq(single.min, single.max, 1e-10);

        let many = BoundingBox2D::from_points(vec![
            Vector2::new(0.5, -3.0),
            Vector2::new(-1.5, 2.0),
            Vector2::new(3.0, 0.0),
        ])
        .unwrap();
        assert_vector_approx_eq(many.min, Vector2::new(-1.5, -3.0), 1e-10);
        assert_vector_approx_eq(many.max, Vector2::new(3.0, 2.0), 1e-10);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = BoundingBox2D::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0));
        assert!(bbox.contains(Vector2::new(0.0, 0.0)));
        assert!(bbox.contains(Vector2::new(2.0, 1.0)));
        assert!(bbox.contains(Vector2::new(1.0, 0.5)));
        assert!(!bbox.contains(Vector2::new(2.0001, 0.5)));
        assert!(!bbox.contains(Vector2::new(1.0, -0.0001)));
    }

    #[test]
    fn test_corners_and_properties() {
        let bbox = BoundingBox2D::new(Vector2::new(1.0, 2.0), Vector2::new(5.0, 6.0));
        let corners = bbox.corners();
        assert_vector_approx_eq(corners[1], Vector2::new(5.0, 2.0), 1e-10);
        assert_vector_approx_eq(corners[3], Vector2::new(1.0, 6.0), 1e-10);
        assert!(approx_eq(bbox.width(), 4.0, 1e-10));
        assert!(approx_eq(bbox.height(), 4.0, 1e-10));
    }

    #[test]
    fn test_scaled_changes_unit() {
        let bbox = BoundingBox2D::new(Vector2::new(1.0, 1.0), Vector2::new(3.0, 3.0));

        let scaled = bbox.scaled(10.0);
        assert_vector_approx_eq(scaled.min, Vector2::new(10.0, 10.0), 1e-10);
        assert_vector_approx_eq(scaled.max, Vector2::new(30.0, 30.0), 1e-10);

        // A negative factor flips the corners but keeps the rectangle ordered
        let flipped = bbox.scaled(-1.0);
        assert_vector_approx_eq(flipped.min, Vector2::new(-3.0, -3.0), 1e-10);
        assert_vector_approx_eq(flipped.max, Vector2::new(-1.0, -1.0), 1e-10);
    }
}
