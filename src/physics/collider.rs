//! 惩罚力接触
//!
//! 只建模地面和轴对齐盒子。接触是类弹簧的惩罚力，允许轻微穿透。

use glam::Vec3;

/// 地平面
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    /// 地面高度
    pub y: f32,
    /// 地面法线
    pub normal: Vec3,
    pub ks: f32,
    pub kd: f32,
}

impl GroundPlane {
    pub fn new(y: f32, ks: f32, kd: f32) -> Self {
        Self { y, normal: Vec3::Y, ks, kd }
    }

    /// 穿透时 f = -n·(ks·(y - ground_y) + kd·(v·n))，否则为零
    #[inline]
    pub fn penalty(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        if position.y > self.y {
            return Vec3::ZERO;
        }
        let depth = position.y - self.y;
        -self.normal * (self.ks * depth + self.kd * velocity.dot(self.normal))
    }
}

/// 轴对齐盒子
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub ks: f32,
    pub kd: f32,
}

impl BoxCollider {
    pub fn new(center: Vec3, half_extents: Vec3, ks: f32, kd: f32) -> Self {
        Self { center, half_extents, ks, kd }
    }

    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        let d = (position - self.center).abs();
        d.cmple(self.half_extents).all()
    }

    /// 盒内的点沿归一化偏移最大的轴被推出
    pub fn penalty(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        if !self.contains(position) {
            return Vec3::ZERO;
        }
        let offset = position - self.center;
        let scaled = offset / self.half_extents.max(Vec3::splat(f32::EPSILON));

        let axis = if scaled.x.abs() >= scaled.y.abs() && scaled.x.abs() >= scaled.z.abs() {
            0
        } else if scaled.y.abs() >= scaled.z.abs() {
            1
        } else {
            2
        };
        let sign = if offset[axis] < 0.0 { -1.0 } else { 1.0 };
        let mut normal = Vec3::ZERO;
        normal[axis] = sign;

        let depth = self.half_extents[axis] - offset[axis].abs();
        normal * (self.ks * depth - self.kd * velocity.dot(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_sign() {
        let ground = GroundPlane::new(0.0, 5000.0, 10.0);
        let below = ground.penalty(Vec3::new(0.0, -0.1, 0.0), Vec3::ZERO);
        assert!(below.y > 0.0);
        assert_eq!(ground.penalty(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, -5.0, 0.0)), Vec3::ZERO);
    }

    #[test]
    fn test_ground_offset_height() {
        let ground = GroundPlane::new(2.0, 100.0, 0.0);
        let f = ground.penalty(Vec3::new(0.0, 1.5, 0.0), Vec3::ZERO);
        assert!((f.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_box_push_out() {
        let b = BoxCollider::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0), 100.0, 0.0);
        assert_eq!(b.penalty(Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO), Vec3::ZERO);

        // y 方向归一化偏移 0.8 > x 方向 0.75
        let f = b.penalty(Vec3::new(1.5, 0.8, 0.0), Vec3::ZERO);
        assert!(f.x.abs() < 1e-6);
        assert!((f.y - 20.0).abs() < 1e-3);

        let f = b.penalty(Vec3::new(-1.9, 0.1, 0.0), Vec3::ZERO);
        assert!((f.x + 10.0).abs() < 1e-3);
    }
}
