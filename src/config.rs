//! 模拟配置
//!
//! 所有参数扁平化，直接在代码中修改默认值即可。
//! 各子系统的 `new()` 读取全局配置，`with_config()` 可显式注入（测试用）。

use glam::Vec3;
use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::physics::Integrator;

/// 模拟配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // ========== 质点-弹簧系统 ==========
    /// 重力加速度，默认 (0, -9.81, 0)
    pub gravity: Vec3,
    /// 地面高度，默认 0.0
    pub ground_y: f32,
    /// 地面惩罚刚度，默认 5000.0
    pub ground_ks: f32,
    /// 地面惩罚阻尼，默认 10.0
    pub ground_kd: f32,
    /// 积分方式，默认辛欧拉
    pub integrator: Integrator,

    // ========== 时间步进 ==========
    /// 固定子步长（秒），默认 1/1000
    pub fixed_step: f32,
    /// 单帧最大推进时间（秒），默认 1/30
    pub max_frame_dt: f32,

    // ========== IK ==========
    /// 阻尼 λ，默认 0.1
    pub ik_damping: f32,
    /// 步长增益 k，默认 0.01
    pub ik_gain: f32,
    /// 零空间偏好强度 β，默认 0.02
    pub ik_null_space: f32,
    /// 位置收敛阈值，默认 0.1
    pub ik_position_tolerance: f32,
    /// 朝向收敛阈值（弧度），默认 0.01
    pub ik_orientation_tolerance: f32,

    // ========== 液体 ==========
    /// 长程吸引系数 α，默认 0.1
    pub liquid_alpha: f32,
    /// 短程排斥系数 β，默认 0.3
    pub liquid_beta: f32,
    /// 吸引项的最小距离偏移，默认 0.1
    pub liquid_min_distance: f32,
    /// 距离平滑项 ε，默认 0.01
    pub liquid_epsilon: f32,
    /// 粒子间作用截断半径，默认 1.0
    pub liquid_cutoff: f32,
    /// 每步速度衰减（近似粘性），默认 0.9995
    pub liquid_damping: f32,
    /// 每步计算成对作用力的概率，默认 0.1
    pub liquid_interaction_probability: f64,
    /// 未计算成对力时的竖直偏置（伪表面张力），默认 0.0
    pub liquid_fake_tension: f32,
    /// 液体子步长（秒），默认 6e-4
    pub liquid_step: f32,
    /// 液体地面刚度，默认 5000.0
    pub liquid_ground_ks: f32,
    /// 液体地面阻尼，默认 50.0
    pub liquid_ground_kd: f32,
    /// 粒子寿命（秒），默认 10.0
    pub liquid_lifetime: f32,
    /// 每帧生成粒子的概率，默认 0.3
    pub liquid_spawn_probability: f64,
    /// 粒子质量，默认 1.0
    pub liquid_mass: f32,

    // ========== 网格提取 ==========
    /// 体素边长，默认 0.6
    pub voxel_resolution: f32,
    /// 密度溅射半径（体素单位），默认 1.5
    pub splat_radius: f32,
    /// 等值面密度阈值，默认 1.0
    pub density_threshold: f32,
    /// 三角形缓冲区顶点容量，默认 10000
    pub triangle_capacity: usize,

    // ========== 调试 ==========
    /// 是否输出调试日志，默认 false
    pub debug_log: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // ====== 质点-弹簧系统 ======
            gravity: Vec3::new(0.0, -9.81, 0.0),
            ground_y: 0.0,
            // 绳桥 / 链条调出来的参数，刚度大约 5000 时辛欧拉在 1ms 步长下稳定
            ground_ks: 5000.0,
            ground_kd: 10.0,
            integrator: Integrator::Symplectic,

            // ====== 时间步进 ======
            fixed_step: 1.0 / 1000.0,
            max_frame_dt: 1.0 / 30.0,

            // ====== IK ======
            ik_damping: 0.1,
            ik_gain: 0.01,
            ik_null_space: 0.02,
            ik_position_tolerance: 0.1,
            ik_orientation_tolerance: 0.01,

            // ====== 液体 ======
            liquid_alpha: 0.1,
            liquid_beta: 0.3,
            liquid_min_distance: 0.1,
            liquid_epsilon: 0.01,
            liquid_cutoff: 1.0,
            liquid_damping: 0.9995,
            // 约 90% 的步跳过 O(n²) 成对力
            liquid_interaction_probability: 0.1,
            liquid_fake_tension: 0.0,
            liquid_step: 6.0e-4,
            liquid_ground_ks: 5000.0,
            liquid_ground_kd: 50.0,
            liquid_lifetime: 10.0,
            liquid_spawn_probability: 0.3,
            liquid_mass: 1.0,

            // ====== 网格提取 ======
            voxel_resolution: 0.6,
            splat_radius: 1.5,
            density_threshold: 1.0,
            triangle_capacity: 10000,

            // ====== 调试 ======
            debug_log: false,
        }
    }
}

/// 全局配置实例
static SIMULATION_CONFIG: Lazy<RwLock<SimulationConfig>> = Lazy::new(|| {
    RwLock::new(SimulationConfig::default())
});

/// 获取当前配置（只读）
pub fn get_config() -> SimulationConfig {
    SIMULATION_CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// 手动设置配置（用于运行时调试）
pub fn set_config(config: SimulationConfig) {
    *SIMULATION_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = config;
}

/// 重置为默认配置
pub fn reset_config() {
    *SIMULATION_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = SimulationConfig::default();
}
