//! 稀疏体素密度场
//!
//! 每帧从粒子云重建：每个粒子溅射到所在格点周围 3x3x3 的邻域，
//! 按反距离加权累加密度。

use std::collections::{BTreeSet, HashMap};

use glam::{IVec3, Vec3};

use crate::config::SimulationConfig;

/// 近距离时的权重上限对应的最小归一化距离
const MIN_WEIGHT_DISTANCE: f32 = 0.1;

/// 稀疏体素场
#[derive(Clone, Debug)]
pub struct VoxelField {
    /// 格点边长
    resolution: f32,
    /// 溅射半径（格点单位）
    splat_radius: f32,
    /// 格点 → 密度
    cells: HashMap<IVec3, f32>,
}

impl VoxelField {
    pub fn new(resolution: f32, splat_radius: f32) -> Self {
        Self {
            resolution: resolution.max(f32::EPSILON),
            splat_radius: splat_radius.max(f32::EPSILON),
            cells: HashMap::new(),
        }
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        Self::new(config.voxel_resolution, config.splat_radius)
    }

    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// 格点密度，未填充的格点为 0
    #[inline]
    pub fn density(&self, cell: IVec3) -> f32 {
        self.cells.get(&cell).copied().unwrap_or(0.0)
    }

    /// 格点的世界坐标
    #[inline]
    pub fn cell_position(&self, cell: IVec3) -> Vec3 {
        cell.as_vec3() * self.resolution
    }

    pub fn cells(&self) -> impl Iterator<Item = (IVec3, f32)> + '_ {
        self.cells.iter().map(|(c, d)| (*c, *d))
    }

    /// 溅射一个粒子
    pub fn splat(&mut self, position: Vec3) {
        let base = (position / self.resolution).floor().as_ivec3();
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let cell = base + IVec3::new(dx, dy, dz);
                    let distance = (self.cell_position(cell) - position).length() / self.resolution;
                    if distance > self.splat_radius {
                        continue;
                    }
                    let weight = 1.0 / (distance / self.splat_radius).max(MIN_WEIGHT_DISTANCE);
                    *self.cells.entry(cell).or_insert(0.0) += weight;
                }
            }
        }
    }

    /// 从粒子位置重建整个场
    pub fn rebuild<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Vec3>,
    {
        self.cells.clear();
        for p in positions {
            self.splat(p);
        }
    }

    /// 候选立方体（以最小角格点标识），每个被填充格点所在的 8 个立方体
    ///
    /// 有序返回，保证输出三角形顺序确定。
    pub fn candidate_cubes(&self) -> BTreeSet<[i32; 3]> {
        let mut cubes = BTreeSet::new();
        for cell in self.cells.keys() {
            for dz in 0..2 {
                for dy in 0..2 {
                    for dx in 0..2 {
                        cubes.insert((*cell - IVec3::new(dx, dy, dz)).to_array());
                    }
                }
            }
        }
        cubes
    }
}
