use std::ops::{Add, AddAssign};

/// Integer point in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Vector3 { x, y, z }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_component_wise() {
        let a = Vector3::new(1, -2, 3);
        let b = Vector3::new(10, 20, -30);
        assert_eq!(a + b, Vector3::new(11, 18, -27));
    }

    #[test]
    fn add_assign_matches_add() {
        let mut a = Vector3::new(-10, 0, 500);
        a += Vector3::new(10, 10, 0);
        assert_eq!(a, Vector3::new(0, 10, 500));
    }

    #[test]
    fn zero_is_additive_identity() {
        let v = Vector3::new(7, -8, 9);
        assert_eq!(v + Vector3::ZERO, v);
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }
}
