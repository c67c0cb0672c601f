//! 关节（Node 之间的边）
//!
//! 关节是关节链的核心单元。固定的 `location` 给出静止偏移，
//! `articulation` 由自由度值推导：先平移，再依次左乘 Rx、Ry、Rz。

use glam::{Mat4, Vec3};

use super::{DofAxis, DofMask, NodeId};
use crate::{MeadowError, Result};

/// 新开放自由度的初始值，让直链离开奇异位形
pub const INITIAL_DOF_VALUE: f32 = 0.01;

/// 单个自由度的状态
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dof {
    /// 当前值（弧度或长度）
    pub value: f32,
    /// 静止偏好值（零空间目标），缺省按 0 处理
    pub preference: Option<f32>,
}

impl Default for Dof {
    fn default() -> Self {
        Self {
            value: INITIAL_DOF_VALUE,
            preference: None,
        }
    }
}

/// 关节
#[derive(Clone, Debug)]
pub struct Joint {
    // ========================================
    // 静态数据（构建后不变）
    // ========================================

    /// 关节名称
    pub name: String,

    /// 父节点（根关节为 None）
    pub(crate) parent: Option<NodeId>,

    /// 子节点
    pub(crate) child: NodeId,

    /// 静止偏移
    location: Mat4,

    /// 自由度是否已配置
    configured: bool,

    // ========================================
    // 动态数据（每帧更新）
    // ========================================

    /// 6 个自由度，按 DofAxis 索引，None 表示锁定
    dofs: [Option<Dof>; 6],

    /// 关节变换缓存，每次写自由度后重算
    articulation: Mat4,
}

impl Joint {
    pub(crate) fn new(name: String, parent: Option<NodeId>, child: NodeId, location: Mat4) -> Self {
        Self {
            name,
            parent,
            child,
            location,
            configured: false,
            dofs: [None; 6],
            articulation: Mat4::IDENTITY,
        }
    }

    // ========================================
    // 访问器
    // ========================================

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn child(&self) -> NodeId {
        self.child
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn location(&self) -> Mat4 {
        self.location
    }

    #[inline]
    pub fn articulation(&self) -> Mat4 {
        self.articulation
    }

    /// `location · articulation`
    #[inline]
    pub fn local_transform(&self) -> Mat4 {
        self.location * self.articulation
    }

    #[inline]
    pub fn dof(&self, axis: DofAxis) -> Option<&Dof> {
        self.dofs[axis.index()].as_ref()
    }

    #[inline]
    pub fn is_free(&self, axis: DofAxis) -> bool {
        self.dofs[axis.index()].is_some()
    }

    /// 当前开放的自由度掩码
    pub fn dof_mask(&self) -> DofMask {
        DofAxis::ALL
            .into_iter()
            .filter(|a| self.is_free(*a))
            .fold(DofMask::empty(), |m, a| m | a.mask())
    }

    /// 开放自由度数量
    pub fn free_count(&self) -> usize {
        self.dofs.iter().filter(|d| d.is_some()).count()
    }

    /// 锁定自由度的读数为 0
    #[inline]
    pub fn value(&self, axis: DofAxis) -> f32 {
        self.dof(axis).map_or(0.0, |d| d.value)
    }

    // ========================================
    // 自由度写入
    // ========================================

    /// 配置自由度（只能调用一次）
    pub(crate) fn set_dof(&mut self, id: usize, mask: DofMask) -> Result<()> {
        if self.configured {
            return Err(MeadowError::DofAlreadyConfigured(id));
        }
        self.configured = true;
        for axis in DofAxis::ALL {
            self.dofs[axis.index()] = mask.contains(axis.mask()).then(Dof::default);
        }
        self.update_articulation();
        Ok(())
    }

    fn dof_mut(&mut self, id: usize, axis: DofAxis) -> Result<&mut Dof> {
        self.dofs[axis.index()]
            .as_mut()
            .ok_or(MeadowError::DofNotFree { joint: id, axis })
    }

    pub(crate) fn set_value(&mut self, id: usize, axis: DofAxis, value: f32) -> Result<()> {
        self.dof_mut(id, axis)?.value = value;
        self.update_articulation();
        Ok(())
    }

    pub(crate) fn set_preference(&mut self, id: usize, axis: DofAxis, preference: f32) -> Result<()> {
        self.dof_mut(id, axis)?.preference = Some(preference);
        Ok(())
    }

    /// 批量增量（IK 用），只改开放的自由度，最后重算一次
    pub(crate) fn add_values(&mut self, deltas: &[(DofAxis, f32)]) {
        for &(axis, delta) in deltas {
            if let Some(dof) = self.dofs[axis.index()].as_mut() {
                dof.value += delta;
            }
        }
        self.update_articulation();
    }

    /// 自由度快照（IK 回退用）
    #[inline]
    pub(crate) fn dofs(&self) -> [Option<Dof>; 6] {
        self.dofs
    }

    pub(crate) fn restore_dofs(&mut self, dofs: [Option<Dof>; 6]) {
        self.dofs = dofs;
        self.update_articulation();
    }

    // ========================================
    // 变换计算
    // ========================================

    /// 重算关节变换 A = Rz · Ry · Rx · T
    fn update_articulation(&mut self) {
        let t = Vec3::new(
            self.value(DofAxis::TransX),
            self.value(DofAxis::TransY),
            self.value(DofAxis::TransZ),
        );
        self.articulation = Mat4::from_rotation_z(self.value(DofAxis::RotZ))
            * Mat4::from_rotation_y(self.value(DofAxis::RotY))
            * Mat4::from_rotation_x(self.value(DofAxis::RotX))
            * Mat4::from_translation(t);
    }

    /// 自由度轴所在的局部框架（相对 location 之后）
    ///
    /// rz 作用于最外层，rx 之前已有 Rz·Ry，平移轴位于全部旋转之后。
    pub(crate) fn axis_frame(&self, axis: DofAxis) -> Mat4 {
        let rz = Mat4::from_rotation_z(self.value(DofAxis::RotZ));
        let ry = Mat4::from_rotation_y(self.value(DofAxis::RotY));
        let rx = Mat4::from_rotation_x(self.value(DofAxis::RotX));
        match axis {
            DofAxis::RotZ => Mat4::IDENTITY,
            DofAxis::RotY => rz,
            DofAxis::RotX => rz * ry,
            DofAxis::TransX | DofAxis::TransY | DofAxis::TransZ => rz * ry * rx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn joint() -> Joint {
        Joint::new("j".into(), None, NodeId(0), Mat4::IDENTITY)
    }

    #[test]
    fn test_set_dof_once() {
        let mut j = joint();
        j.set_dof(0, DofMask::RZ | DofMask::TX).unwrap();
        assert_eq!(j.free_count(), 2);
        assert_eq!(j.value(DofAxis::RotZ), INITIAL_DOF_VALUE);
        assert_eq!(j.value(DofAxis::RotX), 0.0);
        assert!(matches!(
            j.set_dof(0, DofMask::RX),
            Err(MeadowError::DofAlreadyConfigured(0))
        ));
        assert!(matches!(
            j.set_value(0, DofAxis::RotY, 1.0),
            Err(MeadowError::DofNotFree { joint: 0, axis: DofAxis::RotY })
        ));
    }

    #[test]
    fn test_articulation_order() {
        // 先平移再旋转：平移向量也被旋转
        let mut j = joint();
        j.set_dof(0, DofMask::RZ | DofMask::TX).unwrap();
        j.set_value(0, DofAxis::RotZ, FRAC_PI_2).unwrap();
        j.set_value(0, DofAxis::TransX, 2.0).unwrap();
        let p = j.articulation().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_articulation_rederivable() {
        let mut j = joint();
        j.set_dof(0, DofMask::all()).unwrap();
        j.add_values(&[(DofAxis::RotX, 0.3), (DofAxis::RotY, -0.2), (DofAxis::TransY, 1.5)]);
        let expected = Mat4::from_rotation_z(j.value(DofAxis::RotZ))
            * Mat4::from_rotation_y(j.value(DofAxis::RotY))
            * Mat4::from_rotation_x(j.value(DofAxis::RotX))
            * Mat4::from_translation(Vec3::new(
                j.value(DofAxis::TransX),
                j.value(DofAxis::TransY),
                j.value(DofAxis::TransZ),
            ));
        assert!(j.articulation().abs_diff_eq(expected, 1e-6));
    }
}
