//! Meadow 动画与模拟核心
//!
//! 模块划分：
//! - animation: Hermite 样条（相机路径、IK 目标、驱动粒子）
//! - skeleton: 关节链（Node/Joint 树）与阻尼最小二乘 IK
//! - physics: 质点-弹簧-阻尼系统、液体粒子、碰撞惩罚力
//! - surface: 体素密度场与 Marching Cubes 网格提取
//! - render: 与外部渲染器交互的唯一接口

pub mod animation;
pub mod config;
pub mod math;
pub mod physics;
pub mod render;
mod script;
pub mod skeleton;
pub mod stepper;
pub mod surface;

pub use animation::{Curve, HermiteSpline, SplineCursor};
pub use config::{get_config, reset_config, set_config, SimulationConfig};
pub use physics::{Integrator, LiquidSimulation, MassSpringDamper, Particle, Spring};
pub use render::{MaterialHandle, MeshHandle, Part, Renderer};
pub use skeleton::{DofAxis, DofMask, IkGoal, IkRequest, IkSolver, IkStep, JointId, KinematicChain, NodeId};
pub use stepper::FixedStepper;
pub use surface::{MarchingCubes, TriangleBuffer, VoxelField};

use thiserror::Error;

/// 核心错误类型
///
/// 只用于前置条件违反（编程错误）；数值退化在各模块内部钳制为中性值。
#[derive(Debug, Error)]
pub enum MeadowError {
    // ========== 粒子系统 ==========
    #[error("particle {0} used before it was initialized")]
    UninitializedParticle(usize),

    #[error("particle {0} has non-positive or non-finite mass")]
    InvalidMass(usize),

    #[error("spring {0} used before it was connected")]
    UnconnectedSpring(usize),

    #[error("invalid rope: {0}")]
    InvalidRope(String),

    #[error("unknown integrator '{0}' (expected euler, symplectic or verlet)")]
    UnknownIntegrator(String),

    #[error("particle index {index} out of range (len {len})")]
    ParticleOutOfRange { index: usize, len: usize },

    #[error("spring index {index} out of range (len {len})")]
    SpringOutOfRange { index: usize, len: usize },

    // ========== 样条 ==========
    #[error("control point index {index} out of range (len {len})")]
    ControlPointOutOfRange { index: usize, len: usize },

    // ========== 关节链 ==========
    #[error("node {0} does not exist")]
    NodeOutOfRange(usize),

    #[error("joint {0} does not exist")]
    JointOutOfRange(usize),

    #[error("node {0} already has a parent joint")]
    NodeAlreadyAttached(usize),

    #[error("attaching node {0} would create a cycle")]
    CycleDetected(usize),

    #[error("chain already has a root joint")]
    MultipleRoots,

    #[error("chain has no root joint")]
    MissingRoot,

    #[error("node {0} is not reachable from the root joint")]
    UnreachableNode(usize),

    #[error("degrees of freedom of joint {0} are already configured")]
    DofAlreadyConfigured(usize),

    #[error("degree of freedom {axis:?} of joint {joint} is locked")]
    DofNotFree { joint: usize, axis: skeleton::DofAxis },

    // ========== IK ==========
    #[error("no free degree of freedom between end effector and root")]
    EmptyJacobian,

    #[error("damped system could not be inverted")]
    SingularSystem,

    // ========== 脚本 ==========
    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },
}

/// 结果别名
pub type Result<T> = std::result::Result<T, MeadowError>;
