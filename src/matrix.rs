// matrix.rs
use raylib::prelude::{Matrix, Vector4};

/// Column-major (raylib layout) matrix times column vector.
pub fn multiply_matrix_vector4(matrix: &Matrix, vector: &Vector4) -> Vector4 {
    Vector4::new(
        matrix.m0 * vector.x + matrix.m4 * vector.y + matrix.m8 * vector.z + matrix.m12 * vector.w,
        matrix.m1 * vector.x + matrix.m5 * vector.y + matrix.m9 * vector.z + matrix.m13 * vector.w,
        matrix.m2 * vector.x + matrix.m6 * vector.y + matrix.m10 * vector.z + matrix.m14 * vector.w,
        matrix.m3 * vector.x + matrix.m7 * vector.y + matrix.m11 * vector.z + matrix.m15 * vector.w,
    )
}

/// NDC to window coordinates. Window y grows downward and z lands in [0, 1].
pub fn create_viewport_matrix(x: f32, y: f32, width: f32, height: f32) -> Matrix {
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    #[rustfmt::skip]
    let viewport = Matrix {
        m0: half_width, m4: 0.0, m8: 0.0, m12: x + half_width,
        m1: 0.0, m5: -half_height, m9: 0.0, m13: y + half_height,
        m2: 0.0, m6: 0.0, m10: 0.5, m14: 0.5,
        m3: 0.0, m7: 0.0, m11: 0.0, m15: 1.0,
    };
    viewport
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_maps_ndc_corners() {
        let viewport = create_viewport_matrix(0.0, 0.0, 800.0, 600.0);

        let top_left = multiply_matrix_vector4(&viewport, &Vector4::new(-1.0, 1.0, -1.0, 1.0));
        let bottom_right = multiply_matrix_vector4(&viewport, &Vector4::new(1.0, -1.0, 1.0, 1.0));
        let center = multiply_matrix_vector4(&viewport, &Vector4::new(0.0, 0.0, 0.0, 1.0));

        assert_eq!((top_left.x, top_left.y, top_left.z), (0.0, 0.0, 0.0));
        assert_eq!((bottom_right.x, bottom_right.y, bottom_right.z), (800.0, 600.0, 1.0));
        assert_eq!((center.x, center.y, center.z, center.w), (400.0, 300.0, 0.5, 1.0));
    }

    #[test]
    fn viewport_offset_is_applied() {
        let viewport = create_viewport_matrix(10.0, 20.0, 100.0, 50.0);
        let p = multiply_matrix_vector4(&viewport, &Vector4::new(-1.0, 1.0, 0.0, 1.0));
        assert_eq!((p.x, p.y), (10.0, 20.0));
    }
}
