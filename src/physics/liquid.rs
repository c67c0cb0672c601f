//! 液体粒子模拟
//!
//! 每个子步按顺序处理粒子 i：
//! 1. 速度衰减，累加重力、地面与盒子惩罚力
//! 2. 按概率与所有 j > i 的粒子计算成对力（作用在 i 与 j 上），否则加伪表面张力
//! 3. Verlet 积分（新旧加速度平均），寿命递减
//!
//! 寿命耗尽的粒子在整轮结束后统一移除。
//! 随机数全部来自注入的 `StdRng`，同一种子得到同一结果。

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::collider::{BoxCollider, GroundPlane};
use crate::config::{get_config, SimulationConfig};
use crate::stepper::FixedStepper;
use crate::surface::{ExtractStats, MarchingCubes, TriangleBuffer, VoxelField};
use crate::Result;

/// 液体粒子
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiquidParticle {
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// 上一步的加速度（Verlet 用）
    pub acceleration: Vec3,
    pub force: Vec3,
    /// 剩余寿命（秒）
    pub lifetime: f32,
}

impl LiquidParticle {
    pub fn new(mass: f32, position: Vec3, velocity: Vec3, lifetime: f32) -> Self {
        Self {
            mass,
            position,
            velocity,
            acceleration: Vec3::ZERO,
            force: Vec3::ZERO,
            lifetime,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// 速度 Verlet：位置用旧加速度，速度用新旧加速度平均
    fn integrate(&mut self, dt: f32) {
        let new_acceleration = self.force / self.mass;
        self.position += self.velocity * dt + self.acceleration * (0.5 * dt * dt);
        self.velocity += (self.acceleration + new_acceleration) * (0.5 * dt);
        self.acceleration = new_acceleration;
        self.force = Vec3::ZERO;
    }
}

/// 液体参数
#[derive(Clone, Debug)]
pub struct LiquidParams {
    /// 吸引系数 α
    pub alpha: f32,
    /// 排斥系数 β
    pub beta: f32,
    pub min_distance: f32,
    pub epsilon: f32,
    /// 超出该距离不计成对力
    pub cutoff: f32,
    /// 每子步速度衰减因子
    pub damping: f32,
    /// 每个粒子每子步计算成对力的概率
    pub interaction_probability: f64,
    /// 未计算成对力时的向上偏置（乘以 9.8）
    pub fake_tension: f32,
    pub gravity: Vec3,
    pub mass: f32,
    pub lifetime: f32,
    /// 每帧生成一个粒子的概率
    pub spawn_probability: f64,
    /// 发射器中心
    pub spawn_origin: Vec3,
    /// 位置抖动半幅
    pub spawn_spread: Vec3,
    /// 速度抖动半幅
    pub spawn_velocity_spread: Vec3,
}

impl LiquidParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            alpha: config.liquid_alpha,
            beta: config.liquid_beta,
            min_distance: config.liquid_min_distance,
            epsilon: config.liquid_epsilon,
            cutoff: config.liquid_cutoff,
            damping: config.liquid_damping,
            interaction_probability: probability(config.liquid_interaction_probability),
            fake_tension: config.liquid_fake_tension,
            gravity: config.gravity,
            mass: config.liquid_mass,
            lifetime: config.liquid_lifetime,
            spawn_probability: probability(config.liquid_spawn_probability),
            spawn_origin: Vec3::new(0.0, 4.0, 0.0),
            spawn_spread: Vec3::ONE,
            spawn_velocity_spread: Vec3::splat(0.5),
        }
    }

    /// 成对力，沿未归一化的偏移 `offset = p_j - p_i` 作用在 i 上
    pub fn pair_force(&self, offset: Vec3, m1: f32, m2: f32) -> Vec3 {
        let d = offset.length();
        if d > self.cutoff {
            return Vec3::ZERO;
        }
        let attract = self.alpha / (d + self.epsilon + self.min_distance).powi(2);
        let repel = self.beta / (d + self.epsilon).powi(4);
        offset * (m1 * m2 * (attract - repel))
    }
}

/// 液体模拟
#[derive(Clone, Debug)]
pub struct LiquidSimulation {
    particles: Vec<LiquidParticle>,
    pub params: LiquidParams,
    pub ground: GroundPlane,
    pub boxes: Vec<BoxCollider>,
    rng: StdRng,
    stepper: FixedStepper,
    field: VoxelField,
    mesher: MarchingCubes,
    debug_log: bool,
}

impl Default for LiquidSimulation {
    fn default() -> Self {
        Self::with_config(&SimulationConfig::default())
    }
}

impl LiquidSimulation {
    /// 使用全局配置创建
    pub fn new() -> Self {
        Self::with_config(&get_config())
    }

    /// 随机源取自系统熵
    pub fn with_config(config: &SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// 注入随机源（测试与回放用固定种子）
    pub fn with_rng(config: &SimulationConfig, rng: StdRng) -> Self {
        if config.debug_log {
            log::info!(
                "[Liquid] 创建: p_dt={}, α={}, β={}, 截断={}, 交互概率={}",
                config.liquid_step,
                config.liquid_alpha,
                config.liquid_beta,
                config.liquid_cutoff,
                config.liquid_interaction_probability
            );
        }
        Self {
            particles: Vec::new(),
            params: LiquidParams::from_config(config),
            ground: GroundPlane::new(config.ground_y, config.liquid_ground_ks, config.liquid_ground_kd),
            boxes: Vec::new(),
            rng,
            stepper: FixedStepper::new(config.liquid_step, config.max_frame_dt),
            field: VoxelField::with_config(config),
            mesher: MarchingCubes::with_config(config),
            debug_log: config.debug_log,
        }
    }

    // ========================================
    // 粒子管理
    // ========================================

    #[inline]
    pub fn particles(&self) -> &[LiquidParticle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// 子步长
    #[inline]
    pub fn step(&self) -> f32 {
        self.stepper.step()
    }

    pub fn add_particle(&mut self, particle: LiquidParticle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    pub fn add_box(&mut self, collider: BoxCollider) {
        self.boxes.push(collider);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.field.clear();
    }

    /// 在发射器附近生成一个随机粒子
    pub fn spawn(&mut self) -> usize {
        let p = &self.params;
        let position = p.spawn_origin + jitter(&mut self.rng, p.spawn_spread);
        let velocity = jitter(&mut self.rng, p.spawn_velocity_spread);
        let particle = LiquidParticle::new(p.mass, position, velocity, p.lifetime);
        self.add_particle(particle)
    }

    /// 按生成概率尝试生成，返回是否生成
    pub fn maybe_spawn(&mut self) -> bool {
        if self.rng.gen_bool(probability(self.params.spawn_probability)) {
            self.spawn();
            true
        } else {
            false
        }
    }

    // ========================================
    // 模拟
    // ========================================

    /// 单个子步（步长 p_dt）
    pub fn update(&mut self) {
        let dt = self.stepper.step();
        self.substep(dt);
    }

    /// 推进一帧：尝试生成一个粒子，然后跑满子步
    pub fn advance(&mut self, frame_dt: f32) -> Result<usize> {
        self.maybe_spawn();
        let mut stepper = self.stepper;
        let result = stepper.advance(frame_dt, |dt| {
            self.substep(dt);
            Ok(())
        });
        self.stepper = stepper;
        result
    }

    fn substep(&mut self, dt: f32) {
        let params = &self.params;
        let interaction = probability(params.interaction_probability);
        let count = self.particles.len();
        for i in 0..count {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let p = &mut head[i];

            p.velocity *= params.damping;
            p.force += params.gravity * p.mass + self.ground.penalty(p.position, p.velocity);
            for b in &self.boxes {
                p.force += b.penalty(p.position, p.velocity);
            }

            if self.rng.gen_bool(interaction) {
                for q in tail.iter_mut() {
                    let f = params.pair_force(q.position - p.position, p.mass, q.mass);
                    p.force += f;
                    q.force -= f;
                }
            } else {
                p.force.y += params.fake_tension * 9.8;
            }

            p.integrate(dt);
            p.lifetime -= dt;
        }

        let before = self.particles.len();
        self.particles.retain(LiquidParticle::is_alive);
        if self.debug_log && self.particles.len() != before {
            log::info!("[Liquid] 移除 {} 个过期粒子", before - self.particles.len());
        }
    }

    // ========================================
    // 表面
    // ========================================

    /// 用当前粒子重建体素场
    pub fn voxelize(&mut self) -> &VoxelField {
        self.field.rebuild(self.particles.iter().map(|p| p.position));
        &self.field
    }

    /// 体素化并提取表面到缓冲区
    pub fn extract_surface(&mut self, buffer: &mut TriangleBuffer) -> ExtractStats {
        self.voxelize();
        let stats = self.mesher.extract(&self.field, buffer);
        if self.debug_log {
            log::info!(
                "[Liquid] 表面: {} 粒子, {} 格点, {} 三角形",
                self.particles.len(),
                self.field.len(),
                stats.written
            );
        }
        stats
    }
}

/// 钳制到 [0, 1]，NaN 视为 0
#[inline]
fn probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// 每个分量在 [-spread, spread] 内均匀分布
fn jitter(rng: &mut StdRng, spread: Vec3) -> Vec3 {
    let mut axis = |s: f32| if s > 0.0 { rng.gen_range(-s..=s) } else { 0.0 };
    Vec3::new(axis(spread.x), axis(spread.y), axis(spread.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(seed: u64) -> LiquidSimulation {
        LiquidSimulation::with_rng(&SimulationConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// 无重力、无地面的两粒子
    fn isolated_pair(distance: f32) -> LiquidSimulation {
        let mut sim = simulation(1);
        sim.params.gravity = Vec3::ZERO;
        sim.params.interaction_probability = 1.0;
        sim.params.damping = 1.0;
        sim.ground.y = -100.0;
        sim.add_particle(LiquidParticle::new(1.0, Vec3::ZERO, Vec3::ZERO, 10.0));
        sim.add_particle(LiquidParticle::new(1.0, Vec3::new(distance, 0.0, 0.0), Vec3::ZERO, 10.0));
        sim
    }

    #[test]
    fn test_spawn_within_emitter() {
        let mut sim = simulation(42);
        for _ in 0..200 {
            sim.spawn();
        }
        assert_eq!(sim.len(), 200);
        for p in sim.particles() {
            let local = p.position - Vec3::new(0.0, 4.0, 0.0);
            assert!(local.abs().max_element() <= 1.0);
            assert!(p.velocity.abs().max_element() <= 0.5);
            assert_eq!(p.lifetime, 10.0);
            assert_eq!(p.mass, 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = |seed| {
            let mut sim = simulation(seed);
            for _ in 0..20 {
                sim.spawn();
            }
            for _ in 0..50 {
                sim.update();
            }
            sim.particles().to_vec()
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }

    #[test]
    fn test_particle_settles_on_ground() {
        let mut sim = simulation(3);
        sim.add_particle(LiquidParticle::new(1.0, Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 100.0));
        let mut lowest = f32::MAX;
        for _ in 0..5000 {
            sim.update();
            lowest = lowest.min(sim.particles()[0].position.y);
        }
        let p = &sim.particles()[0];
        assert!(lowest > -0.1, "lowest = {lowest}");
        assert!(p.position.y.abs() < 0.01);
        assert!(p.velocity.length() < 0.01);
    }

    #[test]
    fn test_close_pair_repels_symmetrically() {
        let mut sim = isolated_pair(0.5);
        for _ in 0..100 {
            sim.update();
        }
        let [a, b] = [sim.particles()[0], sim.particles()[1]];
        assert!(b.position.x - a.position.x > 0.5);
        let momentum = a.velocity * a.mass + b.velocity * b.mass;
        assert!(momentum.length() < 1e-4);
    }

    #[test]
    fn test_pair_beyond_cutoff_is_ignored() {
        let mut sim = isolated_pair(2.0);
        for _ in 0..100 {
            sim.update();
        }
        assert!(sim.particles().iter().all(|p| p.velocity == Vec3::ZERO));
    }

    #[test]
    fn test_expired_particles_are_removed() {
        let mut sim = simulation(5);
        sim.add_particle(LiquidParticle::new(1.0, Vec3::Y, Vec3::ZERO, 0.001));
        sim.add_particle(LiquidParticle::new(1.0, Vec3::Y * 2.0, Vec3::ZERO, 1.0));
        sim.update();
        assert_eq!(sim.len(), 2);
        sim.update();
        assert_eq!(sim.len(), 1);
        assert!((sim.particles()[0].position.y - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_advance_runs_substeps_and_spawns() {
        let mut sim = simulation(11);
        sim.params.spawn_probability = 1.0;
        let steps = sim.advance(1.0 / 60.0).unwrap();
        // 0.01667 / 0.0006 ≈ 27.8
        assert!((27..=29).contains(&steps), "steps = {steps}");
        assert_eq!(sim.len(), 1);

        sim.params.spawn_probability = 0.0;
        sim.advance(1.0 / 60.0).unwrap();
        assert_eq!(sim.len(), 1);
    }

    #[test]
    fn test_extract_surface() {
        let mut sim = simulation(21);
        for _ in 0..30 {
            sim.spawn();
        }
        let mut buffer = TriangleBuffer::new(10000);
        let stats = sim.extract_surface(&mut buffer);
        assert!(stats.written > 0);
        assert_eq!(buffer.triangle_count(), stats.written);

        sim.clear();
        let stats = sim.extract_surface(&mut buffer);
        assert_eq!(stats.written, 0);
        assert!(buffer.positions().iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn test_out_of_range_probabilities_are_clamped() {
        let mut sim = isolated_pair(0.5);
        sim.params.interaction_probability = 1.5;
        sim.update();
        // 等同概率 1：两粒子互相排斥
        let [a, b] = [sim.particles()[0], sim.particles()[1]];
        assert!(a.velocity.x < 0.0 && b.velocity.x > 0.0);

        sim.params.spawn_probability = -0.5;
        assert!(!sim.maybe_spawn());
        sim.params.spawn_probability = f64::NAN;
        assert!(!sim.maybe_spawn());
        sim.params.spawn_probability = 7.0;
        assert!(sim.maybe_spawn());
        assert_eq!(sim.len(), 3);
    }
}
