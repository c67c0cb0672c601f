//! Marching Cubes 等值面提取
//!
//! 对每个候选立方体按阈值把 8 个角点分类成 0..256 的索引，查表得到
//! 被切割的边，再在两角点密度之间线性插值出顶点。
//! 边插值总是从字典序较小的格点出发，相邻立方体共享的顶点逐位相同，
//! 网格因此是闭合的。

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use super::buffer::TriangleBuffer;
use super::tables::{CORNER_OFFSETS, EDGE_CORNERS, TRIANGLE_TABLE};
use super::voxel::VoxelField;
use crate::config::SimulationConfig;
use crate::math::safe_normalize;

/// 网格边的全局标识（两端格点，较小的在前）
pub type EdgeKey = ([i32; 3], [i32; 3]);

/// 提取出的三角形
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTriangle {
    pub positions: [Vec3; 3],
    /// 平滑后的顶点法线
    pub normals: [Vec3; 3],
    /// 每个顶点所在的网格边
    pub edges: [EdgeKey; 3],
}

/// 单次提取的统计
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// 写入缓冲区的三角形
    pub written: usize,
    /// 因容量不足被丢弃的三角形
    pub dropped: usize,
}

/// Marching Cubes 提取器
#[derive(Clone, Copy, Debug)]
pub struct MarchingCubes {
    /// 密度阈值
    pub threshold: f32,
}

impl MarchingCubes {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        Self::new(config.density_threshold)
    }

    /// 生成全部三角形（不受缓冲区容量限制）
    pub fn polygonize(&self, field: &VoxelField) -> Vec<SurfaceTriangle> {
        let mut triangles = Vec::new();
        let mut normal_sums: HashMap<EdgeKey, Vec3> = HashMap::new();

        for cube in field.candidate_cubes() {
            let origin = IVec3::from_array(cube);
            let mut corners = [IVec3::ZERO; 8];
            let mut values = [0.0f32; 8];
            let mut case = 0usize;
            for (i, offset) in CORNER_OFFSETS.iter().enumerate() {
                corners[i] = origin + IVec3::from_array(*offset);
                values[i] = field.density(corners[i]);
                if values[i] >= self.threshold {
                    case |= 1 << i;
                }
            }

            let row = &TRIANGLE_TABLE[case];
            for tri in row.chunks_exact(3).take_while(|t| t[0] >= 0) {
                let mut positions = [Vec3::ZERO; 3];
                let mut edges = [([0; 3], [0; 3]); 3];
                for (k, &edge) in tri.iter().enumerate() {
                    let [a, b] = EDGE_CORNERS[edge as usize];
                    let (key, position) = self.edge_vertex(field, (corners[a], values[a]), (corners[b], values[b]));
                    positions[k] = position;
                    edges[k] = key;
                }

                let flat = safe_normalize((positions[0] - positions[1]).cross(positions[0] - positions[2]));
                for key in &edges {
                    *normal_sums.entry(*key).or_insert(Vec3::ZERO) += flat;
                }
                triangles.push(SurfaceTriangle {
                    positions,
                    normals: [flat; 3],
                    edges,
                });
            }
        }

        // 共享顶点取平均法线
        for tri in &mut triangles {
            for k in 0..3 {
                let smooth = safe_normalize(normal_sums[&tri.edges[k]]);
                if smooth != Vec3::ZERO {
                    tri.normals[k] = smooth;
                }
            }
        }
        triangles
    }

    /// 提取到定长缓冲区；超出容量的三角形被丢弃
    pub fn extract(&self, field: &VoxelField, buffer: &mut TriangleBuffer) -> ExtractStats {
        buffer.clear();
        let mut stats = ExtractStats::default();
        for tri in self.polygonize(field) {
            if buffer.push_triangle(tri.positions, tri.normals) {
                stats.written += 1;
            } else {
                stats.dropped += 1;
            }
        }
        if stats.dropped > 0 {
            log::warn!(
                "[MC] 三角形缓冲区已满: 写入 {}, 丢弃 {} (容量 {} 顶点)",
                stats.written, stats.dropped, buffer.capacity()
            );
        }
        stats
    }

    /// 边上的等值点，从字典序较小的格点插值
    fn edge_vertex(&self, field: &VoxelField, a: (IVec3, f32), b: (IVec3, f32)) -> (EdgeKey, Vec3) {
        let (lo, hi) = if a.0.to_array() <= b.0.to_array() { (a, b) } else { (b, a) };
        let denom = hi.1 - lo.1;
        let t = if denom.abs() < 1e-6 {
            0.5
        } else {
            ((self.threshold - lo.1) / denom).clamp(0.0, 1.0)
        };
        let p0 = field.cell_position(lo.0);
        let p1 = field.cell_position(hi.0);
        ((lo.0.to_array(), hi.0.to_array()), p0 + (p1 - p0) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// 每条三角形边恰好被两个三角形共享
    fn dangling_edges(triangles: &[SurfaceTriangle]) -> usize {
        let mut counts: HashMap<(EdgeKey, EdgeKey), usize> = HashMap::new();
        for tri in triangles {
            for k in 0..3 {
                let (a, b) = (tri.edges[k], tri.edges[(k + 1) % 3]);
                let key = if a <= b { (a, b) } else { (b, a) };
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts.values().filter(|c| **c != 2).count()
    }

    #[test]
    fn test_single_particle_is_closed_sphere() {
        let mut field = VoxelField::new(1.0, 1.5);
        field.splat(Vec3::ZERO);
        let triangles = MarchingCubes::new(1.0).polygonize(&field);

        assert_eq!(triangles.len(), 104);
        assert_eq!(dangling_edges(&triangles), 0);
        for tri in &triangles {
            let centroid = (tri.positions[0] + tri.positions[1] + tri.positions[2]) / 3.0;
            let flat = (tri.positions[0] - tri.positions[1]).cross(tri.positions[0] - tri.positions[2]);
            assert!(flat.dot(centroid) > 0.0, "inward facing triangle");
            for (p, n) in tri.positions.iter().zip(&tri.normals) {
                // 大致是半径 1.3 ~ 1.5 的球
                assert!(p.length() > 1.2 && p.length() < 1.6);
                assert!((n.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_random_clouds_are_closed() {
        let mut rng = StdRng::seed_from_u64(7);
        for resolution in [0.6, 1.0] {
            let points: Vec<Vec3> = (0..30)
                .map(|_| {
                    Vec3::new(
                        rng.gen_range(-2.0..2.0),
                        rng.gen_range(0.0..3.0),
                        rng.gen_range(-2.0..2.0),
                    )
                })
                .collect();
            let mut field = VoxelField::new(resolution, 1.5);
            field.rebuild(points);
            let triangles = MarchingCubes::new(1.0).polygonize(&field);
            assert!(!triangles.is_empty());
            assert_eq!(dangling_edges(&triangles), 0);
        }
    }

    #[test]
    fn test_shared_vertices_share_normals() {
        let mut field = VoxelField::new(1.0, 1.5);
        field.rebuild([Vec3::ZERO, Vec3::new(0.8, 0.3, 0.0)]);
        let triangles = MarchingCubes::new(1.0).polygonize(&field);
        let mut seen: HashMap<EdgeKey, (Vec3, Vec3)> = HashMap::new();
        for tri in &triangles {
            for k in 0..3 {
                let entry = seen.entry(tri.edges[k]).or_insert((tri.positions[k], tri.normals[k]));
                assert_eq!(entry.0, tri.positions[k]);
                assert_eq!(entry.1, tri.normals[k]);
            }
        }
    }

    #[test]
    fn test_extract_pads_and_truncates() {
        let mut field = VoxelField::new(1.0, 1.5);
        field.splat(Vec3::ZERO);
        let mc = MarchingCubes::new(1.0);

        let mut buffer = TriangleBuffer::new(10000);
        let stats = mc.extract(&field, &mut buffer);
        assert_eq!(stats, ExtractStats { written: 104, dropped: 0 });
        assert_eq!(buffer.positions().len(), 9999);
        assert!(buffer.positions()[312..].iter().all(|p| *p == Vec3::ZERO));

        let mut small = TriangleBuffer::new(30);
        let stats = mc.extract(&field, &mut small);
        assert_eq!(stats, ExtractStats { written: 10, dropped: 94 });
    }

    #[test]
    fn test_empty_field() {
        let field = VoxelField::new(1.0, 1.5);
        assert!(MarchingCubes::new(1.0).polygonize(&field).is_empty());
    }
}
