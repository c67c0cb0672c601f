//! 物理模拟
//!
//! - Particle / Spring / MassSpringDamper: 质点-弹簧-阻尼系统（三种积分器）
//! - GroundPlane / BoxCollider: 惩罚力碰撞
//! - LiquidSimulation: 成对力液体粒子
//! - msd_script: 行命令搭建质点-弹簧场景

mod collider;
mod liquid;
mod mass_spring;
mod msd_script;
mod particle;
mod spring;

pub use collider::{BoxCollider, GroundPlane};
pub use liquid::{LiquidParams, LiquidParticle, LiquidSimulation};
pub use mass_spring::{Bridge, BridgeParams, MassSpringDamper, SplineDriver};
pub use msd_script::{parse_msd_script, run_msd_script, MsdCommand};
pub use particle::{Integrator, Particle, ParticleMotion};
pub use spring::Spring;
