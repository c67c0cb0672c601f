//! 关节链系统
//!
//! 核心设计思想：
//! - Joint: 连接父节点与子节点的边，持有最多 6 个自由度
//! - Node: 树的顶点，持有可渲染部件和固定局部变换
//! - KinematicChain: 节点与关节的 arena，保证树结构
//! - IkSolver: 阻尼最小二乘 IK，单步松弛

mod chain;
mod ik_solver;
mod joint;

pub use chain::{KinematicChain, Node};
pub use ik_solver::{IkGoal, IkReport, IkRequest, IkSolver, IkStep};
pub use joint::{Dof, Joint};

use bitflags::bitflags;
use glam::Vec3;

// ============================================================================
// 索引类型
// ============================================================================

/// 节点索引
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// 关节索引
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JointId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl JointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

// ============================================================================
// 自由度
// ============================================================================

/// 单个自由度轴
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DofAxis {
    RotX,
    RotY,
    RotZ,
    TransX,
    TransY,
    TransZ,
}

impl DofAxis {
    /// IK 收集自由度的固定顺序
    pub const ALL: [DofAxis; 6] = [
        DofAxis::RotX,
        DofAxis::RotY,
        DofAxis::RotZ,
        DofAxis::TransX,
        DofAxis::TransY,
        DofAxis::TransZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(self, DofAxis::RotX | DofAxis::RotY | DofAxis::RotZ)
    }

    /// 局部单位轴
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            DofAxis::RotX | DofAxis::TransX => Vec3::X,
            DofAxis::RotY | DofAxis::TransY => Vec3::Y,
            DofAxis::RotZ | DofAxis::TransZ => Vec3::Z,
        }
    }

    #[inline]
    pub fn mask(self) -> DofMask {
        match self {
            DofAxis::RotX => DofMask::RX,
            DofAxis::RotY => DofMask::RY,
            DofAxis::RotZ => DofMask::RZ,
            DofAxis::TransX => DofMask::TX,
            DofAxis::TransY => DofMask::TY,
            DofAxis::TransZ => DofMask::TZ,
        }
    }
}

bitflags! {
    /// 自由度掩码
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DofMask: u8 {
        /// 绕 x 旋转
        const RX = 1 << 0;
        /// 绕 y 旋转
        const RY = 1 << 1;
        /// 绕 z 旋转
        const RZ = 1 << 2;
        /// 沿 x 平移
        const TX = 1 << 3;
        /// 沿 y 平移
        const TY = 1 << 4;
        /// 沿 z 平移
        const TZ = 1 << 5;
        const ROTATION = Self::RX.bits() | Self::RY.bits() | Self::RZ.bits();
        const TRANSLATION = Self::TX.bits() | Self::TY.bits() | Self::TZ.bits();
    }
}

impl DofMask {
    /// 从 6 个布尔值构造（rx, ry, rz, tx, ty, tz）
    pub fn from_bools(rx: bool, ry: bool, rz: bool, tx: bool, ty: bool, tz: bool) -> Self {
        let mut mask = DofMask::empty();
        for (axis, on) in DofAxis::ALL.into_iter().zip([rx, ry, rz, tx, ty, tz]) {
            if on {
                mask |= axis.mask();
            }
        }
        mask
    }
}
