//! 定长三角形缓冲区
//!
//! 长度固定，可直接上传到常驻 GPU 缓冲区；未使用部分填零（退化三角形）。

use glam::Vec3;

/// 定长三角形缓冲区（位置 + 法线，无索引）
#[derive(Clone, Debug)]
pub struct TriangleBuffer {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    /// 已写入的顶点数
    used: usize,
}

impl TriangleBuffer {
    /// 容量按整三角形向下取整
    pub fn new(vertex_capacity: usize) -> Self {
        let capacity = vertex_capacity - vertex_capacity % 3;
        Self {
            positions: vec![Vec3::ZERO; capacity],
            normals: vec![Vec3::ZERO; capacity],
            used: 0,
        }
    }

    /// 顶点容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// 已用顶点数
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.used / 3
    }

    /// 全部位置（包括零填充的尾部）
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// 全部法线（包括零填充的尾部）
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// 把已用部分清零
    pub fn clear(&mut self) {
        self.positions[..self.used].fill(Vec3::ZERO);
        self.normals[..self.used].fill(Vec3::ZERO);
        self.used = 0;
    }

    /// 写入一个三角形，缓冲区已满时返回 false
    pub fn push_triangle(&mut self, positions: [Vec3; 3], normals: [Vec3; 3]) -> bool {
        if self.used + 3 > self.capacity() {
            return false;
        }
        self.positions[self.used..self.used + 3].copy_from_slice(&positions);
        self.normals[self.used..self.used + 3].copy_from_slice(&normals);
        self.used += 3;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_capacity() {
        let mut buffer = TriangleBuffer::new(8);
        assert_eq!(buffer.capacity(), 6);
        let tri = [Vec3::X, Vec3::Y, Vec3::Z];
        assert!(buffer.push_triangle(tri, [Vec3::Z; 3]));
        assert!(buffer.push_triangle(tri, [Vec3::Z; 3]));
        assert!(!buffer.push_triangle(tri, [Vec3::Z; 3]));
        assert_eq!(buffer.triangle_count(), 2);

        buffer.clear();
        assert_eq!(buffer.vertex_count(), 0);
        assert_eq!(buffer.positions().len(), 6);
        assert!(buffer.positions().iter().all(|p| *p == Vec3::ZERO));
    }
}
