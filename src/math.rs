use crate::vertex::Vector3;

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Rotation matrix around the Z-axis
pub fn rotation_z(angle: f32) -> [[f64; 3]; 3] {
    let (sin_z, cos_z) = f64::from(angle).sin_cos();
    [[cos_z, -sin_z, 0.0], [sin_z, cos_z, 0.0], [0.0, 0.0, 1.0]]
}

/// Rotation matrix around the X-axis
pub fn rotation_x(angle: f32) -> [[f64; 3]; 3] {
    let (sin_x, cos_x) = f64::from(angle).sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos_x, -sin_x], [0.0, sin_x, cos_x]]
}

/// Rotates a vertex around Z and then around X, truncating back to integers.
///
/// The two rotations are applied one after the other rather than combined into
/// a single matrix, so the intermediate values round exactly as a step-by-step
/// evaluation would. Truncation goes toward zero, which makes coordinates near
/// zero jitter as the cube spins; rendered trajectories depend on that.
pub fn rotate_vertex(vertex: Vector3, angle_z: f32, angle_x: f32) -> Vector3 {
    let position = [
        f64::from(vertex.x),
        f64::from(vertex.y),
        f64::from(vertex.z),
    ];
    let around_z = multiply_matrix_vector(&rotation_z(angle_z), &position);
    let [x, y, z] = multiply_matrix_vector(&rotation_x(angle_x), &around_z);
    Vector3::new(x as i32, y as i32, z as i32)
}
