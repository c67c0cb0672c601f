//! 质点-弹簧场景命令
//!
//! 支持的命令：
//! - `create particles N` / `create springs N`
//! - `particle i m x y z vx vy vz`
//! - `all_velocities vx vy vz`
//! - `link s p0 p1 ks kd len`（len < 0 取当前距离）
//! - `integration euler|symplectic|verlet dt`
//! - `ground ks kd`
//! - `gravity g`（重力向下，大小为 g）

use glam::Vec3;

use super::{Integrator, MassSpringDamper};
use crate::script::{self, Tokens};
use crate::Result;

/// 单条场景命令
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MsdCommand {
    CreateParticles(usize),
    CreateSprings(usize),
    Particle { index: usize, mass: f32, position: Vec3, velocity: Vec3 },
    AllVelocities(Vec3),
    Link { spring: usize, p0: usize, p1: usize, ks: f32, kd: f32, length: f32 },
    Integration { integrator: Integrator, step: f32 },
    Ground { ks: f32, kd: f32 },
    Gravity(f32),
}

impl MsdCommand {
    fn parse(line: usize, text: &str) -> Result<Self> {
        let mut t = Tokens::new(line, text);
        let command = match t.word("command")? {
            "create" => match t.word("object kind")? {
                "particles" => MsdCommand::CreateParticles(t.usize("count")?),
                "springs" => MsdCommand::CreateSprings(t.usize("count")?),
                other => return Err(t.error(format!("cannot create '{other}'"))),
            },
            "particle" => MsdCommand::Particle {
                index: t.usize("index")?,
                mass: t.f32("mass")?,
                position: t.vec3("position")?,
                velocity: t.vec3("velocity")?,
            },
            "all_velocities" => MsdCommand::AllVelocities(t.vec3("velocity")?),
            "link" => MsdCommand::Link {
                spring: t.usize("spring index")?,
                p0: t.usize("particle index")?,
                p1: t.usize("particle index")?,
                ks: t.f32("ks")?,
                kd: t.f32("kd")?,
                length: t.f32("length")?,
            },
            "integration" => {
                let name = t.word("integrator")?;
                let integrator = name.parse::<Integrator>().map_err(|e| t.error(e.to_string()))?;
                MsdCommand::Integration { integrator, step: t.f32("timestep")? }
            }
            "ground" => MsdCommand::Ground { ks: t.f32("ks")?, kd: t.f32("kd")? },
            "gravity" => MsdCommand::Gravity(t.f32("g")?),
            other => return Err(t.error(format!("unknown command '{other}'"))),
        };
        t.finish()?;
        Ok(command)
    }

    /// 执行命令；`integration` 返回新的子步长
    pub fn apply(&self, msd: &mut MassSpringDamper) -> Result<Option<f32>> {
        match *self {
            MsdCommand::CreateParticles(n) => msd.create_particles(n),
            MsdCommand::CreateSprings(n) => msd.create_springs(n),
            MsdCommand::Particle { index, mass, position, velocity } => {
                msd.set_particle(index, mass, position, velocity)?
            }
            MsdCommand::AllVelocities(v) => msd.set_all_velocities(v),
            MsdCommand::Link { spring, p0, p1, ks, kd, length } => msd.connect(spring, p0, p1, ks, kd, length)?,
            MsdCommand::Integration { integrator, step } => {
                msd.integrator = integrator;
                return Ok(Some(step));
            }
            MsdCommand::Ground { ks, kd } => {
                msd.ground.ks = ks;
                msd.ground.kd = kd;
            }
            MsdCommand::Gravity(g) => msd.gravity = Vec3::new(0.0, -g, 0.0),
        }
        Ok(None)
    }
}

/// 解析整段脚本
pub fn parse_msd_script(text: &str) -> Result<Vec<MsdCommand>> {
    script::lines(text)
        .map(|(line, content)| MsdCommand::parse(line, content))
        .collect()
}

/// 解析并执行，返回最后一次 `integration` 指定的子步长
pub fn run_msd_script(msd: &mut MassSpringDamper, text: &str) -> Result<Option<f32>> {
    let mut step = None;
    for command in parse_msd_script(text)? {
        if let Some(dt) = command.apply(msd)? {
            step = Some(dt);
        }
    }
    Ok(step)
}
