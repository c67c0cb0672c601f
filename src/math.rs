//! 数学辅助函数
//!
//! 所有退化情况（零向量归一化、极小旋转角）都返回中性值，不产生 NaN。

use glam::{Mat3, Mat4, Quat, Vec3};

/// 长度低于该值的向量视为零向量
pub const EPSILON: f32 = 1e-6;

/// 安全归一化：零向量返回零向量
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < EPSILON || !len.is_finite() {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// 提取平移分量
#[inline]
pub fn translation(m: &Mat4) -> Vec3 {
    m.w_axis.truncate()
}

/// 提取 3x3 旋转部分
#[inline]
pub fn rotation_part(m: &Mat4) -> Mat3 {
    Mat3::from_mat4(*m)
}

/// 旋转矩阵的对数映射（轴 × 角）
///
/// 输入应为正交矩阵。取 w ≥ 0 的四元数，保证角度在 [0, π]。
pub fn rotation_log(r: Mat3) -> Vec3 {
    let mut q = Quat::from_mat3(&r);
    if q.w < 0.0 {
        q = -q;
    }
    let v = q.xyz();
    let s = v.length();
    if s < EPSILON {
        // 小角度近似：log(q) ≈ 2·v
        return v * 2.0;
    }
    let angle = 2.0 * s.atan2(q.w.clamp(-1.0, 1.0));
    if !angle.is_finite() {
        return Vec3::ZERO;
    }
    v / s * angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_normalize_zero() {
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
        let n = safe_normalize(Vec3::new(0.0, 3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_log() {
        let r = Mat3::from_rotation_z(0.5);
        let w = rotation_log(r);
        assert!((w - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-5);

        assert!(rotation_log(Mat3::IDENTITY).length() < 1e-6);

        // 负角度
        let w = rotation_log(Mat3::from_rotation_x(-1.2));
        assert!((w - Vec3::new(-1.2, 0.0, 0.0)).length() < 1e-4);
    }
}
