//! 质点-弹簧-阻尼系统
//!
//! 用于绳桥、悬链和布状结构。每个子步：
//! 1. 被驱动质点从驱动器取位置/速度
//! 2. 模拟质点的外力重置为重力，加地面与盒子惩罚力
//! 3. 累加弹簧力（作用力与反作用力）
//! 4. 模拟质点按所选积分器推进
//!
//! `add_rope` / `add_bridge` 批量搭建两端固定的绳索与绳桥。

use std::collections::BTreeMap;
use std::ops::Range;

use glam::Vec3;

use super::collider::{BoxCollider, GroundPlane};
use super::particle::{Integrator, Particle, ParticleMotion};
use super::spring::Spring;
use crate::animation::{HermiteSpline, SplineCursor};
use crate::config::{get_config, SimulationConfig};
use crate::math::safe_normalize;
use crate::{MeadowError, Result};

/// 沿样条驱动质点
#[derive(Clone, Debug)]
pub struct SplineDriver {
    pub spline: HermiteSpline,
    /// 全局参数位置
    pub cursor: SplineCursor,
    /// 每秒前进的全局参数量
    pub speed: f32,
    /// 附加在样条位置上的偏移
    pub offset: Vec3,
}

impl SplineDriver {
    pub fn new(spline: HermiteSpline, speed: f32) -> Self {
        Self {
            spline,
            cursor: SplineCursor::default(),
            speed,
            offset: Vec3::ZERO,
        }
    }

    /// 前进 dt，返回 (位置, 速度)
    pub fn advance(&mut self, dt: f32) -> (Vec3, Vec3) {
        self.cursor.advance(self.speed * dt);
        let (position, tangent) = self.cursor.sample(&self.spline);
        // dp/dtime = dp/dt_local · (n-1) · du/dtime
        let segments = self.spline.len().saturating_sub(1) as f32;
        (position + self.offset, tangent * segments * self.speed)
    }
}

/// 绳桥搭建参数
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeParams {
    /// 相邻质点的最大间距
    pub segment_length: f32,
    /// 每个质点的质量
    pub mass: f32,
    pub rope_ks: f32,
    pub rope_kd: f32,
    /// 绳段自然长度；负值取初始间距
    pub rope_rest_length: f32,
    pub plank_ks: f32,
    pub plank_kd: f32,
    /// 桥面宽度，也是桥板弹簧的自然长度
    pub width: f32,
    /// 扶手绳高出桥面绳的距离
    pub railing_height: f32,
    pub railing_ks: f32,
    pub railing_kd: f32,
    /// 扶手与桥面之间连接弹簧的自然长度
    pub railing_rest_length: f32,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            mass: 1.0,
            rope_ks: 5000.0,
            rope_kd: 200.0,
            rope_rest_length: 1.0,
            plank_ks: 5000.0,
            plank_kd: 500.0,
            width: 2.0,
            railing_height: 2.0,
            railing_ks: 5000.0,
            railing_kd: 500.0,
            railing_rest_length: 1.75,
        }
    }
}

/// `add_bridge` 生成的索引范围
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bridge {
    /// 左右两条桥面绳（质点索引）
    pub deck: [Range<usize>; 2],
    /// 左右两条扶手绳（质点索引）
    pub railings: [Range<usize>; 2],
    /// 桥板弹簧，第 i 根连接两条桥面绳的第 i 个质点
    pub planks: Range<usize>,
    /// 扶手与桥面之间的连接弹簧
    pub connectors: Range<usize>,
}

/// 质点-弹簧-阻尼系统
#[derive(Clone, Debug)]
pub struct MassSpringDamper {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
    /// 样条驱动器，按质点索引
    drivers: BTreeMap<usize, SplineDriver>,
    /// 重力加速度
    pub gravity: Vec3,
    pub ground: GroundPlane,
    pub boxes: Vec<BoxCollider>,
    pub integrator: Integrator,
}

impl Default for MassSpringDamper {
    fn default() -> Self {
        Self::with_config(&SimulationConfig::default())
    }
}

impl MassSpringDamper {
    /// 使用全局配置创建
    pub fn new() -> Self {
        Self::with_config(&get_config())
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        if config.debug_log {
            log::info!(
                "[MSD] 创建: 重力={}, 地面 ks={} kd={}, 积分={}",
                config.gravity, config.ground_ks, config.ground_kd, config.integrator
            );
        }
        Self {
            particles: Vec::new(),
            springs: Vec::new(),
            drivers: BTreeMap::new(),
            gravity: config.gravity,
            ground: GroundPlane::new(config.ground_y, config.ground_ks, config.ground_kd),
            boxes: Vec::new(),
            integrator: config.integrator,
        }
    }

    // ========================================
    // 构建
    // ========================================

    /// 批量创建未初始化质点
    pub fn create_particles(&mut self, count: usize) {
        self.particles.extend(std::iter::repeat(Particle::default()).take(count));
    }

    /// 批量创建未连接弹簧
    pub fn create_springs(&mut self, count: usize) {
        self.springs.extend(std::iter::repeat(Spring::default()).take(count));
    }

    /// 追加质点，质量必须为正的有限值
    pub fn add_particle(&mut self, particle: Particle) -> Result<usize> {
        let index = self.particles.len();
        check_mass(index, particle.mass)?;
        self.particles.push(particle);
        Ok(index)
    }

    /// 添加已连接弹簧；负长度表示取当前距离
    pub fn add_spring(&mut self, p0: usize, p1: usize, ks: f32, kd: f32, rest_length: f32) -> Result<usize> {
        self.springs.push(Spring::default());
        let index = self.springs.len() - 1;
        if let Err(e) = self.connect(index, p0, p1, ks, kd, rest_length) {
            self.springs.pop();
            return Err(e);
        }
        Ok(index)
    }

    /// 设置质点初值
    pub fn set_particle(&mut self, index: usize, mass: f32, position: Vec3, velocity: Vec3) -> Result<()> {
        let particle = self.particle_mut(index)?;
        check_mass(index, mass)?;
        particle.set(mass, position, velocity);
        Ok(())
    }

    pub fn set_all_velocities(&mut self, velocity: Vec3) {
        for p in &mut self.particles {
            p.velocity = velocity;
        }
    }

    /// 连接弹簧；`rest_length < 0` 时取两质点当前距离
    pub fn connect(&mut self, spring: usize, p0: usize, p1: usize, ks: f32, kd: f32, rest_length: f32) -> Result<()> {
        let a = self.particle(p0)?.position;
        let b = self.particle(p1)?.position;
        let len = self.springs.len();
        let slot = self
            .springs
            .get_mut(spring)
            .ok_or(MeadowError::SpringOutOfRange { index: spring, len })?;
        let rest_length = if rest_length < 0.0 { a.distance(b) } else { rest_length };
        *slot = Spring::new(p0, p1, ks, kd, rest_length);
        Ok(())
    }

    /// 标记为被驱动 / 模拟
    pub fn set_driven(&mut self, index: usize, driven: bool) -> Result<()> {
        let p = self.particle_mut(index)?;
        p.motion = if driven { ParticleMotion::Driven } else { ParticleMotion::Simulated };
        if !driven {
            self.drivers.remove(&index);
        }
        Ok(())
    }

    /// 直接写入被驱动质点的位置与速度
    pub fn drive(&mut self, index: usize, position: Vec3, velocity: Vec3) -> Result<()> {
        let p = self.particle_mut(index)?;
        p.motion = ParticleMotion::Driven;
        p.position = position;
        p.velocity = velocity;
        Ok(())
    }

    /// 挂接样条驱动器，之后每个子步自动推进
    pub fn attach_driver(&mut self, index: usize, driver: SplineDriver) -> Result<()> {
        self.particle_mut(index)?.motion = ParticleMotion::Driven;
        self.drivers.insert(index, driver);
        Ok(())
    }

    pub fn add_box(&mut self, collider: BoxCollider) {
        self.boxes.push(collider);
    }

    // ========================================
    // 绳索与绳桥
    // ========================================

    /// 从 `start` 到 `end` 均匀放置 `count` 个单位质量质点，相邻质点以弹簧相连
    ///
    /// 首尾质点标记为被驱动（固定）。`rest_length < 0` 时取初始间距。
    /// 返回新质点的索引范围。
    pub fn add_rope(
        &mut self,
        start: Vec3,
        end: Vec3,
        count: usize,
        ks: f32,
        kd: f32,
        rest_length: f32,
    ) -> Result<Range<usize>> {
        if count < 2 {
            return Err(MeadowError::InvalidRope(format!("needs at least 2 particles, got {count}")));
        }
        let first = self.particles.len();
        let last = first + count - 1;
        for i in 0..count {
            let t = i as f32 / (count - 1) as f32;
            let mut particle = Particle::new(1.0, start.lerp(end, t), Vec3::ZERO);
            if i == 0 || i == count - 1 {
                particle.motion = ParticleMotion::Driven;
            }
            self.particles.push(particle);
        }
        for i in first..last {
            self.add_spring(i, i + 1, ks, kd, rest_length)?;
        }
        Ok(first..last + 1)
    }

    /// 搭建绳桥：两条桥面绳、桥板弹簧、两条扶手绳及其连接弹簧
    ///
    /// 桥面绳位于 `start`→`end` 两侧各 `width / 2` 处，质点数按
    /// `segment_length` 向上取整。所有绳索的首尾质点都被固定。
    pub fn add_bridge(&mut self, start: Vec3, end: Vec3, params: &BridgeParams) -> Result<Bridge> {
        if params.segment_length <= 0.0 || !params.segment_length.is_finite() {
            return Err(MeadowError::InvalidRope(format!(
                "segment length {} must be positive",
                params.segment_length
            )));
        }
        check_mass(self.particles.len(), params.mass)?;
        let span = end - start;
        let count = (span.length() / params.segment_length).ceil() as usize + 1;

        // 桥面横向：走向 × 上方；竖直桥退化为 X 轴
        let mut side = safe_normalize(span.cross(Vec3::Y));
        if side == Vec3::ZERO {
            side = Vec3::X;
        }
        let side = side * (params.width * 0.5);
        let lift = Vec3::Y * params.railing_height;

        let rope = |msd: &mut Self, offset: Vec3| -> Result<Range<usize>> {
            let range = msd.add_rope(
                start + offset,
                end + offset,
                count,
                params.rope_ks,
                params.rope_kd,
                params.rope_rest_length,
            )?;
            for p in &mut msd.particles[range.clone()] {
                p.mass = params.mass;
            }
            Ok(range)
        };
        let left = rope(self, -side)?;
        let right = rope(self, side)?;

        let planks_start = self.springs.len();
        for (a, b) in left.clone().zip(right.clone()) {
            self.add_spring(a, b, params.plank_ks, params.plank_kd, params.width)?;
        }
        let planks = planks_start..self.springs.len();

        let left_railing = rope(self, lift - side)?;
        let right_railing = rope(self, lift + side)?;

        let connectors_start = self.springs.len();
        let deck_particles = left.clone().chain(right.clone());
        let railing_particles = left_railing.clone().chain(right_railing.clone());
        for (a, b) in deck_particles.zip(railing_particles) {
            self.add_spring(a, b, params.railing_ks, params.railing_kd, params.railing_rest_length)?;
        }
        let connectors = connectors_start..self.springs.len();

        if get_config().debug_log {
            log::info!(
                "[MSD] 绳桥: 每条绳 {} 质点, 共 {} 质点 {} 弹簧",
                count,
                self.particles.len(),
                self.springs.len()
            );
        }
        Ok(Bridge {
            deck: [left, right],
            railings: [left_railing, right_railing],
            planks,
            connectors,
        })
    }

    // ========================================
    // 访问器
    // ========================================

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn particle(&self, index: usize) -> Result<&Particle> {
        let len = self.particles.len();
        self.particles
            .get(index)
            .ok_or(MeadowError::ParticleOutOfRange { index, len })
    }

    pub fn particle_mut(&mut self, index: usize) -> Result<&mut Particle> {
        let len = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(MeadowError::ParticleOutOfRange { index, len })
    }

    /// 弹簧当前长度
    pub fn spring_length(&self, index: usize) -> Result<f32> {
        let len = self.springs.len();
        let spring = self
            .springs
            .get(index)
            .ok_or(MeadowError::SpringOutOfRange { index, len })?;
        if !spring.is_connected() {
            return Err(MeadowError::UnconnectedSpring(index));
        }
        Ok(spring.length(&self.particles))
    }

    /// 模拟质点的总动能
    pub fn kinetic_energy(&self) -> f32 {
        self.particles
            .iter()
            .filter(|p| !p.is_driven())
            .map(Particle::kinetic_energy)
            .sum()
    }

    // ========================================
    // 模拟
    // ========================================

    /// 检查所有质点已初始化、所有弹簧已连接
    fn check_ready(&self) -> Result<()> {
        for (i, p) in self.particles.iter().enumerate() {
            if !p.is_initialized() {
                return Err(MeadowError::UninitializedParticle(i));
            }
            // particle_mut 可以直接改写质量
            check_mass(i, p.mass)?;
        }
        if let Some(i) = self.springs.iter().position(|s| !s.is_connected()) {
            return Err(MeadowError::UnconnectedSpring(i));
        }
        Ok(())
    }

    /// 单个固定子步
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.check_ready()?;

        for (&index, driver) in self.drivers.iter_mut() {
            let (position, velocity) = driver.advance(dt);
            if let Some(p) = self.particles.get_mut(index) {
                p.position = position;
                p.velocity = velocity;
            }
        }

        for p in &mut self.particles {
            match p.motion {
                ParticleMotion::Driven => p.force = Vec3::ZERO,
                ParticleMotion::Simulated => {
                    let mut force = self.gravity * p.mass + self.ground.penalty(p.position, p.velocity);
                    for b in &self.boxes {
                        force += b.penalty(p.position, p.velocity);
                    }
                    p.force = force;
                }
            }
        }

        for spring in &self.springs {
            spring.apply(&mut self.particles);
        }

        let integrator = self.integrator;
        for p in self.particles.iter_mut().filter(|p| !p.is_driven()) {
            p.integrate(dt, integrator);
        }
        Ok(())
    }
}

/// 质量为 0、负数或非有限值时积分会产生 NaN
fn check_mass(index: usize, mass: f32) -> Result<()> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(MeadowError::InvalidMass(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> MassSpringDamper {
        MassSpringDamper::with_config(&SimulationConfig::default())
    }

    #[test]
    fn test_free_fall_matches_closed_form() {
        let mut msd = system();
        msd.add_particle(Particle::new(1.0, Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 2.0, 0.0))).unwrap();
        let dt = 1.0e-3;
        let steps = 1000;
        for _ in 0..steps {
            msd.update(dt).unwrap();
        }
        let t = dt * steps as f32;
        let expected = 10.0 + 2.0 * t - 0.5 * 9.81 * t * t;
        let y = msd.particles()[0].position.y;
        // 辛欧拉误差约 ½·g·dt·t
        assert!((y - expected).abs() < 0.01, "y = {y}, expected {expected}");
    }

    #[test]
    fn test_uninitialized_particle_is_error() {
        let mut msd = system();
        msd.create_particles(2);
        msd.set_particle(0, 1.0, Vec3::ZERO, Vec3::ZERO).unwrap();
        assert!(matches!(msd.update(1e-3), Err(MeadowError::UninitializedParticle(1))));
    }

    #[test]
    fn test_unconnected_spring_is_error() {
        let mut msd = system();
        msd.add_particle(Particle::new(1.0, Vec3::ZERO, Vec3::ZERO)).unwrap();
        msd.create_springs(1);
        assert!(matches!(msd.update(1e-3), Err(MeadowError::UnconnectedSpring(0))));
    }

    #[test]
    fn test_connect_uses_current_distance() {
        let mut msd = system();
        let a = msd.add_particle(Particle::new(1.0, Vec3::ZERO, Vec3::ZERO)).unwrap();
        let b = msd.add_particle(Particle::new(1.0, Vec3::new(0.0, 3.0, 4.0), Vec3::ZERO)).unwrap();
        let s = msd.add_spring(a, b, 10.0, 1.0, -1.0).unwrap();
        assert!((msd.springs()[s].rest_length - 5.0).abs() < 1e-6);
        assert!(matches!(
            msd.add_spring(a, 9, 10.0, 1.0, 1.0),
            Err(MeadowError::ParticleOutOfRange { index: 9, len: 2 })
        ));
        assert_eq!(msd.springs().len(), 1);
    }

    #[test]
    fn test_ground_contact_pushes_up() {
        let mut msd = system();
        msd.add_particle(Particle::new(1.0, Vec3::new(0.0, -0.05, 0.0), Vec3::ZERO)).unwrap();
        msd.update(1e-3).unwrap();
        let p = &msd.particles()[0];
        // 5000·0.05 = 250 > 9.81
        assert!(p.force.y > 0.0);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn test_driven_particle_ignores_forces() {
        let mut msd = system();
        let anchor = msd.add_particle(Particle::new(1.0, Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO)).unwrap();
        let bob = msd.add_particle(Particle::new(1.0, Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO)).unwrap();
        msd.add_spring(anchor, bob, 500.0, 5.0, 1.0).unwrap();
        msd.set_driven(anchor, true).unwrap();
        for _ in 0..500 {
            msd.update(1e-3).unwrap();
        }
        assert_eq!(msd.particles()[anchor].position, Vec3::new(0.0, 5.0, 0.0));
        assert!(msd.particles()[bob].position.y < 4.0);
    }

    #[test]
    fn test_spline_driver_moves_particle() {
        let mut spline = HermiteSpline::new();
        spline.add_point(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        spline.add_point(Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let mut msd = system();
        let p = msd.add_particle(Particle::new(1.0, Vec3::ZERO, Vec3::ZERO)).unwrap();
        // 1 秒走完整条曲线
        msd.attach_driver(p, SplineDriver::new(spline, 1.0)).unwrap();
        for _ in 0..500 {
            msd.update(1e-3).unwrap();
        }
        let particle = &msd.particles()[p];
        assert!((particle.position.x - 1.0).abs() < 1e-3);
        assert!((particle.velocity.x - 2.0).abs() < 1e-3);
        assert!(msd.kinetic_energy() == 0.0);
    }

    #[test]
    fn test_box_collider_supports_particle() {
        let mut msd = system();
        msd.ground.y = -100.0;
        msd.add_box(BoxCollider::new(Vec3::ZERO, Vec3::ONE, 5000.0, 50.0));
        msd.add_particle(Particle::new(1.0, Vec3::new(0.0, 1.5, 0.0), Vec3::ZERO)).unwrap();
        for _ in 0..3000 {
            msd.update(1e-3).unwrap();
        }
        let y = msd.particles()[0].position.y;
        assert!(y > 0.9 && y < 1.0, "y = {y}");
    }

    #[test]
    fn test_non_positive_mass_is_rejected() {
        let mut msd = system();
        assert!(matches!(
            msd.add_particle(Particle::new(0.0, Vec3::Y, Vec3::ZERO)),
            Err(MeadowError::InvalidMass(0))
        ));
        assert!(msd.particles().is_empty());

        msd.create_particles(2);
        assert!(matches!(
            msd.set_particle(1, -2.0, Vec3::Y, Vec3::ZERO),
            Err(MeadowError::InvalidMass(1))
        ));
        assert!(matches!(
            msd.set_particle(1, f32::NAN, Vec3::Y, Vec3::ZERO),
            Err(MeadowError::InvalidMass(1))
        ));
        assert!(!msd.particles()[1].is_initialized());

        msd.set_particle(0, 1.0, Vec3::Y, Vec3::ZERO).unwrap();
        msd.set_particle(1, 1.0, Vec3::Y, Vec3::ZERO).unwrap();
        msd.particle_mut(0).unwrap().mass = 0.0;
        assert!(matches!(msd.update(1e-3), Err(MeadowError::InvalidMass(0))));
    }

    #[test]
    fn test_pinned_rope_sags_and_settles() {
        let mut msd = system();
        let start = Vec3::new(0.0, 5.0, 0.0);
        let end = Vec3::new(4.0, 5.0, 0.0);
        let rope = msd.add_rope(start, end, 5, 5000.0, 500.0, 1.0).unwrap();
        assert_eq!(rope, 0..5);
        assert_eq!(msd.springs().len(), 4);
        assert!(msd.particles()[0].is_driven() && msd.particles()[4].is_driven());
        assert!(!msd.particles()[2].is_driven());

        let mut lowest = f32::MAX;
        for _ in 0..12000 {
            msd.update(1e-3).unwrap();
            lowest = lowest.min(msd.particles()[2].position.y);
        }
        let mid = msd.particles()[2].position;
        assert!(lowest < 4.8, "lowest = {lowest}");
        // 平衡时中点约在 4.70
        assert!(mid.y > 4.6 && mid.y < 4.8, "mid = {mid}");
        assert!(mid.z.abs() < 1e-4);
        assert_eq!(msd.particles()[0].position, start);
        assert_eq!(msd.particles()[4].position, end);
        for s in 0..4 {
            // 承重后绳段被拉长
            assert!(msd.spring_length(s).unwrap() > 1.0);
        }
        assert!(msd.kinetic_energy() < 0.05, "ke = {}", msd.kinetic_energy());
    }

    #[test]
    fn test_rope_needs_two_particles() {
        let mut msd = system();
        assert!(matches!(
            msd.add_rope(Vec3::ZERO, Vec3::X, 1, 100.0, 1.0, -1.0),
            Err(MeadowError::InvalidRope(_))
        ));
        assert!(msd.particles().is_empty());
        let rope = msd.add_rope(Vec3::ZERO, Vec3::X * 3.0, 4, 100.0, 1.0, -1.0).unwrap();
        assert!((msd.springs()[0].rest_length - 1.0).abs() < 1e-6);
        assert_eq!(rope.len(), 4);
    }

    #[test]
    fn test_bridge_layout_and_rest() {
        let mut msd = system();
        let start = Vec3::new(0.0, 5.0, 0.0);
        let end = Vec3::new(6.0, 5.0, 0.0);
        let bridge = msd.add_bridge(start, end, &BridgeParams::default()).unwrap();

        // 6 / 1 → 7 个质点一条绳
        assert_eq!(bridge.deck, [0..7, 7..14]);
        assert_eq!(bridge.railings, [14..21, 21..28]);
        assert_eq!(bridge.planks.len(), 7);
        assert_eq!(bridge.connectors.len(), 14);
        assert_eq!(msd.springs().len(), 4 * 6 + 7 + 14);
        assert_eq!(msd.particles()[0].position, Vec3::new(0.0, 5.0, -1.0));
        assert_eq!(msd.particles()[7].position, Vec3::new(0.0, 5.0, 1.0));
        assert_eq!(msd.particles()[14].position, Vec3::new(0.0, 7.0, -1.0));
        let pinned: Vec<usize> = (0..28).filter(|&i| msd.particles()[i].is_driven()).collect();
        assert_eq!(pinned, vec![0, 6, 7, 13, 14, 20, 21, 27]);

        let before: Vec<Vec3> = pinned.iter().map(|&i| msd.particles()[i].position).collect();
        for _ in 0..6000 {
            msd.update(1e-3).unwrap();
        }
        let after: Vec<Vec3> = pinned.iter().map(|&i| msd.particles()[i].position).collect();
        assert_eq!(before, after);
        assert!(msd.particles().iter().all(|p| p.position.is_finite()));

        let deck_mid = msd.particles()[3].position;
        let railing_mid = msd.particles()[17].position;
        assert!(deck_mid.y > 4.5 && deck_mid.y < 4.85, "deck = {deck_mid}");
        assert!((railing_mid.y - deck_mid.y - 1.75).abs() < 0.05);
        for s in bridge.planks {
            assert!((msd.spring_length(s).unwrap() - 2.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_bridge_rejects_bad_segment_length() {
        let mut msd = system();
        let params = BridgeParams { segment_length: 0.0, ..BridgeParams::default() };
        assert!(matches!(
            msd.add_bridge(Vec3::ZERO, Vec3::X, &params),
            Err(MeadowError::InvalidRope(_))
        ));
        assert!(msd.particles().is_empty());
    }
}
