//! 质点与积分器

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::MeadowError;

// ============================================================================
// 积分器
// ============================================================================

/// 显式时间积分方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Integrator {
    /// 前向欧拉：x += v·dt; v += a·dt
    Euler,
    /// 辛欧拉：v += a·dt; x += v_new·dt
    #[default]
    Symplectic,
    /// 简化 Verlet：x += v·dt + a·dt²/2; v += a·dt（不在新位置重算加速度）
    Verlet,
}

impl FromStr for Integrator {
    type Err = MeadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(Integrator::Euler),
            "symplectic" => Ok(Integrator::Symplectic),
            "verlet" => Ok(Integrator::Verlet),
            other => Err(MeadowError::UnknownIntegrator(other.to_string())),
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Integrator::Euler => "euler",
            Integrator::Symplectic => "symplectic",
            Integrator::Verlet => "verlet",
        })
    }
}

// ============================================================================
// 质点
// ============================================================================

/// 质点运动方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParticleMotion {
    /// 受力积分
    #[default]
    Simulated,
    /// 位置和速度由外部（样条等）直接给定
    Driven,
}

/// 质点
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// 质量（> 0）
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// 上一次积分使用的加速度
    pub acceleration: Vec3,
    /// 本子步累积的外力
    pub force: Vec3,
    pub motion: ParticleMotion,
    /// 是否已设置初值
    initialized: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            mass: 1.0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            force: Vec3::ZERO,
            motion: ParticleMotion::Simulated,
            initialized: false,
        }
    }
}

impl Particle {
    /// 创建已初始化的质点
    pub fn new(mass: f32, position: Vec3, velocity: Vec3) -> Self {
        let mut p = Self::default();
        p.set(mass, position, velocity);
        p
    }

    /// 设置初值并标记为已初始化
    pub fn set(&mut self, mass: f32, position: Vec3, velocity: Vec3) {
        self.mass = mass;
        self.position = position;
        self.velocity = velocity;
        self.acceleration = Vec3::ZERO;
        self.force = Vec3::ZERO;
        self.initialized = true;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn is_driven(&self) -> bool {
        self.motion == ParticleMotion::Driven
    }

    /// 动能 ½mv²
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// 用累积外力推进一个子步
    pub fn integrate(&mut self, dt: f32, integrator: Integrator) {
        self.acceleration = self.force / self.mass;
        let a = self.acceleration;
        match integrator {
            Integrator::Euler => {
                self.position += self.velocity * dt;
                self.velocity += a * dt;
            }
            Integrator::Symplectic => {
                self.velocity += a * dt;
                self.position += self.velocity * dt;
            }
            Integrator::Verlet => {
                self.position += self.velocity * dt + a * (dt * dt * 0.5);
                self.velocity += a * dt;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integrator() {
        assert_eq!("verlet".parse::<Integrator>().unwrap(), Integrator::Verlet);
        assert_eq!(Integrator::Euler.to_string(), "euler");
        assert!(matches!(
            "rk4".parse::<Integrator>(),
            Err(MeadowError::UnknownIntegrator(name)) if name == "rk4"
        ));
    }

    #[test]
    fn test_single_steps() {
        let dt = 0.1;
        let force = Vec3::new(0.0, -2.0, 0.0);
        let start = Particle::new(2.0, Vec3::ZERO, Vec3::X);

        let mut p = start;
        p.force = force;
        p.integrate(dt, Integrator::Euler);
        assert!((p.position - Vec3::new(0.1, 0.0, 0.0)).length() < 1e-6);
        assert!((p.velocity - Vec3::new(1.0, -0.1, 0.0)).length() < 1e-6);

        let mut p = start;
        p.force = force;
        p.integrate(dt, Integrator::Symplectic);
        assert!((p.position - Vec3::new(0.1, -0.01, 0.0)).length() < 1e-6);

        let mut p = start;
        p.force = force;
        p.integrate(dt, Integrator::Verlet);
        assert!((p.position - Vec3::new(0.1, -0.005, 0.0)).length() < 1e-6);
        assert!((p.velocity - Vec3::new(1.0, -0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_default_is_uninitialized() {
        assert!(!Particle::default().is_initialized());
        assert!(Particle::new(1.0, Vec3::ZERO, Vec3::ZERO).is_initialized());
    }
}
