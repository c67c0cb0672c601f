//! 液体表面重建
//!
//! - VoxelField: 粒子溅射成稀疏密度场
//! - MarchingCubes: 密度场 → 三角形
//! - TriangleBuffer: 定长输出缓冲区

mod buffer;
mod marching_cubes;
pub mod tables;
mod voxel;

pub use buffer::TriangleBuffer;
pub use marching_cubes::{EdgeKey, ExtractStats, MarchingCubes, SurfaceTriangle};
pub use voxel::VoxelField;
