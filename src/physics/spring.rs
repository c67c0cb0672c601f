//! 线性阻尼弹簧

use glam::Vec3;

use super::Particle;
use crate::math::safe_normalize;

/// 弹簧
///
/// 只按索引引用两个质点，每次更新从质点当前状态重算力。
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Spring {
    pub p0: usize,
    pub p1: usize,
    /// 刚度
    pub ks: f32,
    /// 阻尼
    pub kd: f32,
    /// 静止长度
    pub rest_length: f32,
    connected: bool,
}

impl Spring {
    pub fn new(p0: usize, p1: usize, ks: f32, kd: f32, rest_length: f32) -> Self {
        Self {
            p0,
            p1,
            ks,
            kd,
            rest_length,
            connected: true,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// 作用在 p0 上的力（p1 受相反的力）
    ///
    /// 两质点重合时方向取零，力为零。
    pub fn force(&self, a: &Particle, b: &Particle) -> Vec3 {
        let d = b.position - a.position;
        let dir = safe_normalize(d);
        let elastic = self.ks * (d.length() - self.rest_length);
        let damping = self.kd * (b.velocity - a.velocity).dot(dir);
        dir * (elastic + damping)
    }

    /// 按牛顿第三定律累加到两个质点
    ///
    /// 调用方保证索引有效且 p0 != p1。
    pub(crate) fn apply(&self, particles: &mut [Particle]) {
        let f = self.force(&particles[self.p0], &particles[self.p1]);
        particles[self.p0].force += f;
        particles[self.p1].force -= f;
    }

    /// 当前长度
    #[inline]
    pub fn length(&self, particles: &[Particle]) -> f32 {
        particles[self.p0].position.distance(particles[self.p1].position)
    }
}
