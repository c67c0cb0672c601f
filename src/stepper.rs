//! 固定子步推进
//!
//! 把不定长的帧间隔切成固定长度的子步，模拟时间追赶墙钟时间。
//! 帧间隔先钳制到 `max_frame_dt`，卡顿后不会一次补跑过多子步。

use crate::config::SimulationConfig;
use crate::Result;

/// 固定子步推进器
#[derive(Clone, Copy, Debug)]
pub struct FixedStepper {
    /// 子步长（秒）
    step: f32,
    /// 单帧可推进的最大时长
    max_frame_dt: f32,
    /// 已模拟时间
    sim_time: f64,
    /// 目标时间（累计的帧间隔）
    target_time: f64,
    running: bool,
}

impl FixedStepper {
    pub fn new(step: f32, max_frame_dt: f32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            max_frame_dt: max_frame_dt.max(0.0),
            sim_time: 0.0,
            target_time: 0.0,
            running: true,
        }
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        Self::new(config.fixed_step, config.max_frame_dt)
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// 修改子步长，已累计的时间保持不变
    pub fn set_step(&mut self, step: f32) {
        self.step = step.max(f32::EPSILON);
    }

    #[inline]
    pub fn max_frame_dt(&self) -> f32 {
        self.max_frame_dt
    }

    #[inline]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// 暂停；暂停期间的帧间隔被丢弃
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.sim_time = 0.0;
        self.target_time = 0.0;
    }

    /// 推进一帧，对每个子步调用 `f(step)`，返回执行的子步数
    ///
    /// 子步返回错误时立即停止，已执行的子步计入模拟时间。
    pub fn advance<F>(&mut self, frame_dt: f32, mut f: F) -> Result<usize>
    where
        F: FnMut(f32) -> Result<()>,
    {
        if !self.running {
            return Ok(0);
        }
        let frame_dt = frame_dt.clamp(0.0, self.max_frame_dt);
        self.target_time += frame_dt as f64;

        let mut steps = 0;
        while self.sim_time < self.target_time {
            f(self.step)?;
            self.sim_time += self.step as f64;
            steps += 1;
        }
        Ok(steps)
    }
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::with_config(&SimulationConfig::default())
    }
}
