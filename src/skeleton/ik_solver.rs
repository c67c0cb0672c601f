//! IK 求解器 - 阻尼最小二乘（Levenberg-Marquardt 式）
//!
//! 设计原则：
//! - 每次调用只做一步松弛，迭代由调用方控制
//! - 阻尼项保证 J·Jᵀ+λI 在奇异位形附近仍可逆
//! - 零空间项把多余自由度拉回静止偏好值
//! - 不做关节角度限制

use glam::{Mat3, Mat4, Vec3};
use nalgebra::{DMatrix, DVector};

use super::{DofAxis, JointId, KinematicChain, NodeId};
use crate::config::{get_config, SimulationConfig};
use crate::math::{rotation_log, rotation_part, safe_normalize, translation};
use crate::{MeadowError, Result};

// ============================================================================
// 请求与结果
// ============================================================================

/// IK 目标
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IkGoal {
    /// 世界空间目标位置
    pub position: Vec3,
    /// 可选的目标朝向（旋转矩阵）
    pub orientation: Option<Mat3>,
}

/// 单次求解请求
#[derive(Clone, Copy, Debug)]
pub struct IkRequest {
    /// 末端节点
    pub end_effector: NodeId,
    /// 向根回溯时在此节点停止（不含），None 表示回溯到根
    pub start_effector: Option<NodeId>,
    pub goal: IkGoal,
    /// 世界基变换
    pub base: Mat4,
}

impl IkRequest {
    pub fn new(end_effector: NodeId, position: Vec3) -> Self {
        Self {
            end_effector,
            start_effector: None,
            goal: IkGoal { position, orientation: None },
            base: Mat4::IDENTITY,
        }
    }

    pub fn with_orientation(mut self, orientation: Mat3) -> Self {
        self.goal.orientation = Some(orientation);
        self
    }

    pub fn with_start(mut self, start_effector: NodeId) -> Self {
        self.start_effector = Some(start_effector);
        self
    }

    pub fn with_base(mut self, base: Mat4) -> Self {
        self.base = base;
        self
    }
}

/// 单步结果
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IkStep {
    /// 步前误差已低于阈值，未修改任何自由度
    Converged,
    /// 已执行一步；误差为步前值
    Stepped { position_error: f32, orientation_error: f32 },
}

/// 多步求解报告
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IkReport {
    /// 实际执行的步数
    pub steps: usize,
    pub position_error: f32,
    pub orientation_error: f32,
    pub converged: bool,
}

/// 末端位姿与回溯路径
struct EffectorState {
    /// 参与求解的关节（末端在前）
    active: Vec<JointId>,
    /// 每个活动关节的 `G_parent · location`
    frames: Vec<Mat4>,
    /// 末端世界变换
    effector: Mat4,
}

// ============================================================================
// IK 求解器
// ============================================================================

/// 阻尼最小二乘 IK 求解器
#[derive(Clone, Debug)]
pub struct IkSolver {
    /// 阻尼 λ
    pub damping: f32,
    /// 步长增益 k
    pub gain: f32,
    /// 零空间偏好强度 β
    pub null_space_strength: f32,
    /// 位置收敛阈值
    pub position_tolerance: f32,
    /// 朝向收敛阈值
    pub orientation_tolerance: f32,
    /// 是否输出调试日志
    debug_log: bool,
}

impl Default for IkSolver {
    fn default() -> Self {
        Self::with_config(&SimulationConfig::default())
    }
}

impl IkSolver {
    /// 使用全局配置创建
    pub fn new() -> Self {
        Self::with_config(&get_config())
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        Self {
            damping: config.ik_damping,
            gain: config.ik_gain,
            null_space_strength: config.ik_null_space,
            position_tolerance: config.ik_position_tolerance,
            orientation_tolerance: config.ik_orientation_tolerance,
            debug_log: config.debug_log,
        }
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_null_space_strength(mut self, beta: f32) -> Self {
        self.null_space_strength = beta;
        self
    }

    /// 当前末端误差 (位置, 朝向)；无朝向目标时朝向误差为 0
    pub fn effector_error(&self, chain: &KinematicChain, request: &IkRequest) -> Result<(f32, f32)> {
        let state = Self::effector_state(chain, request)?;
        let (p, o) = Self::error_vectors(&state.effector, &request.goal);
        Ok((p.length(), o.map_or(0.0, |o| o.length())))
    }

    /// 单步松弛
    pub fn solve_step(&self, chain: &mut KinematicChain, request: &IkRequest) -> Result<IkStep> {
        let state = Self::effector_state(chain, request)?;
        let (position_error, orientation_error) = Self::error_vectors(&state.effector, &request.goal);
        let p_norm = position_error.length();
        let o_norm = orientation_error.map_or(0.0, |o| o.length());

        if p_norm < self.position_tolerance
            && orientation_error.map_or(true, |_| o_norm < self.orientation_tolerance)
        {
            return Ok(IkStep::Converged);
        }

        // 收集雅可比列
        let e_pos = translation(&state.effector);
        let rows = if orientation_error.is_some() { 6 } else { 3 };
        let mut columns: Vec<[f32; 6]> = Vec::new();
        let mut targets: Vec<(JointId, DofAxis)> = Vec::new();
        let mut pref_diff: Vec<f32> = Vec::new();

        for (joint_id, frame) in state.active.iter().zip(&state.frames) {
            let joint = chain.joint(*joint_id)?;
            let pivot = translation(frame);
            for axis in DofAxis::ALL {
                let Some(dof) = joint.dof(axis) else {
                    continue;
                };
                let world_axis = safe_normalize((*frame * joint.axis_frame(axis)).transform_vector3(axis.unit()));
                let column = if axis.is_rotation() {
                    let linear = world_axis.cross(e_pos - pivot);
                    [linear.x, linear.y, linear.z, world_axis.x, world_axis.y, world_axis.z]
                } else {
                    [world_axis.x, world_axis.y, world_axis.z, 0.0, 0.0, 0.0]
                };
                columns.push(column);
                targets.push((*joint_id, axis));
                pref_diff.push(dof.preference.unwrap_or(0.0) - dof.value);
            }
        }

        if columns.is_empty() {
            return Err(MeadowError::EmptyJacobian);
        }

        let n = columns.len();
        let j = DMatrix::<f32>::from_fn(rows, n, |r, c| columns[c][r]);
        let jt = j.transpose();
        let damped = &j * &jt + DMatrix::<f32>::identity(rows, rows) * self.damping;
        let inverse = damped.try_inverse().ok_or(MeadowError::SingularSystem)?;
        let j_pinv = &jt * inverse;

        let mut error = [0.0f32; 6];
        error[..3].copy_from_slice(&position_error.to_array());
        if let Some(o) = orientation_error {
            error[3..].copy_from_slice(&o.to_array());
        }
        let error = DVector::<f32>::from_iterator(rows, error[..rows].iter().map(|e| e * self.gain));
        let null_space = DMatrix::<f32>::identity(n, n) - &j_pinv * &j;
        let preference = DVector::<f32>::from_vec(pref_diff);
        let delta = &j_pinv * error + null_space * preference * self.null_space_strength;

        // 按收集顺序逐关节累加
        let mut i = 0;
        while i < n {
            let joint_id = targets[i].0;
            let mut deltas: Vec<(DofAxis, f32)> = Vec::with_capacity(6);
            while i < n && targets[i].0 == joint_id {
                let d = delta[i];
                if d.is_finite() {
                    deltas.push((targets[i].1, d));
                } else {
                    log::warn!("[IK] 关节 {} 的增量非有限，已置零", joint_id.index());
                }
                i += 1;
            }
            chain.joint_mut(joint_id)?.add_values(&deltas);
        }

        Ok(IkStep::Stepped {
            position_error: p_norm,
            orientation_error: o_norm,
        })
    }

    /// 循环求解，最多 `max_steps` 步
    ///
    /// 误差开始增大时恢复到最佳位姿并退出。
    pub fn solve(&self, chain: &mut KinematicChain, request: &IkRequest, max_steps: usize) -> Result<IkReport> {
        let active = Self::effector_state(chain, request)?.active;
        let snapshot = |chain: &KinematicChain| -> Result<Vec<_>> {
            active.iter().map(|j| Ok(chain.joint(*j)?.dofs())).collect()
        };

        let (mut best_p, mut best_o) = self.effector_error(chain, request)?;
        let mut best = snapshot(chain)?;
        let mut steps = 0;
        let mut converged = false;

        while steps < max_steps {
            if let IkStep::Converged = self.solve_step(chain, request)? {
                converged = true;
                break;
            }
            steps += 1;

            let (p, o) = self.effector_error(chain, request)?;
            if p + o <= best_p + best_o {
                best_p = p;
                best_o = o;
                best = snapshot(chain)?;
            } else {
                // 恢复最佳结果并退出
                for (joint, dofs) in active.iter().zip(&best) {
                    chain.joint_mut(*joint)?.restore_dofs(*dofs);
                }
                break;
            }
        }

        if self.debug_log {
            log::info!(
                "[IK] 求解结束: 步数={}, 位置误差={:.4}, 朝向误差={:.4}, 收敛={}",
                steps, best_p, best_o, converged
            );
        }

        Ok(IkReport {
            steps,
            position_error: best_p,
            orientation_error: best_o,
            converged,
        })
    }

    // ========================================
    // 内部
    // ========================================

    /// 计算末端位姿，以及每个活动关节的 `G_parent · location`
    fn effector_state(chain: &KinematicChain, request: &IkRequest) -> Result<EffectorState> {
        let node = chain.node(request.end_effector)?;
        let first = node.parent_joint().ok_or(MeadowError::EmptyJacobian)?;
        if let Some(start) = request.start_effector {
            chain.node(start)?;
        }

        // 根在前累乘
        let path = chain.path_to_root(first)?;
        let mut pre = Vec::with_capacity(path.len());
        let mut acc = request.base;
        for joint_id in path.iter().rev() {
            let joint = chain.joint(*joint_id)?;
            let frame = acc * joint.location();
            pre.push(frame);
            acc = frame * joint.articulation();
        }
        pre.reverse();
        let effector = acc * node.transform();

        // 末端在前，遇到 start_effector 停止
        let mut active = Vec::new();
        let mut frames = Vec::new();
        for (joint_id, frame) in path.iter().zip(pre) {
            if Some(chain.joint(*joint_id)?.child()) == request.start_effector {
                break;
            }
            active.push(*joint_id);
            frames.push(frame);
        }

        Ok(EffectorState { active, frames, effector })
    }

    /// 位置误差与可选朝向误差（log(R_goal · R_curᵀ)）
    fn error_vectors(effector: &Mat4, goal: &IkGoal) -> (Vec3, Option<Vec3>) {
        let position = goal.position - translation(effector);
        let orientation = goal.orientation.map(|r_goal| {
            let r = rotation_part(effector);
            // 去掉缩放
            let r_cur = Mat3::from_cols(
                safe_normalize(r.x_axis),
                safe_normalize(r.y_axis),
                safe_normalize(r.z_axis),
            );
            rotation_log(r_goal * r_cur.transpose())
        });
        (position, orientation)
    }
}
