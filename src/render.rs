//! 渲染器接口
//!
//! 核心只通过这个 trait 与外部渲染框架交互，网格和材质都是不透明句柄。

use glam::Mat4;

use crate::surface::TriangleBuffer;

/// 网格句柄
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// 材质句柄
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u32);

/// 节点上的可渲染部件
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Part {
    pub mesh: MeshHandle,
    pub material: MaterialHandle,
}

/// 外部渲染器
pub trait Renderer {
    /// 绘制外部网格
    fn draw(&mut self, mesh: MeshHandle, world_transform: Mat4, material: MaterialHandle);

    /// 绘制核心生成的三角形缓冲区（无索引，按三角形列表解释）
    fn draw_triangles(&mut self, buffer: &TriangleBuffer, world_transform: Mat4, material: MaterialHandle);
}
