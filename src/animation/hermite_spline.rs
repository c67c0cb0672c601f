//! 三次 Hermite 样条
//!
//! 用于相机路径、IK 目标和被驱动粒子。
//! 切线按 `1/(n-1)` 缩放，使整条曲线的参数化统一。

use glam::Vec3;

use crate::script::{self, Tokens};
use crate::{MeadowError, Result};

/// 弧长积分时每段的采样数
const ARC_LENGTH_SAMPLES: usize = 1000;

/// 曲线 trait：全局参数 u ∈ [0, 1] 上的取值
pub trait Curve {
    fn value(&self, u: f32) -> Vec3;
}

/// 样条控制点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: Vec3,
    pub tangent: Vec3,
}

/// Hermite 样条
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HermiteSpline {
    points: Vec<ControlPoint>,
}

impl HermiteSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加控制点
    pub fn add_point(&mut self, position: Vec3, tangent: Vec3) {
        self.points.push(ControlPoint { position, tangent });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// 修改控制点位置
    pub fn set_point(&mut self, index: usize, position: Vec3) -> Result<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(MeadowError::ControlPointOutOfRange { index, len })?;
        point.position = position;
        Ok(())
    }

    /// 修改控制点切线
    pub fn set_tangent(&mut self, index: usize, tangent: Vec3) -> Result<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(MeadowError::ControlPointOutOfRange { index, len })?;
        point.tangent = tangent;
        Ok(())
    }

    // ========================================
    // 求值
    // ========================================

    /// 切线缩放系数 1/(n-1)
    #[inline]
    fn tangent_scale(&self) -> f32 {
        1.0 / (self.points.len() - 1) as f32
    }

    /// 按基函数系数组合两个控制点
    ///
    /// 调用方保证 `len() >= 2` 且索引有效（越界会 panic）。
    fn combine(&self, h: [f32; 4], i0: usize, i1: usize) -> Vec3 {
        let scale = self.tangent_scale();
        let a = &self.points[i0];
        let b = &self.points[i1];
        a.position * h[0] + a.tangent * (h[1] * scale) + b.position * h[2] + b.tangent * (h[3] * scale)
    }

    /// 段 (i0, i1) 上参数 t 处的位置；控制点不足两个时返回零向量
    pub fn position(&self, t: f32, i0: usize, i1: usize) -> Vec3 {
        if self.points.len() < 2 {
            return Vec3::ZERO;
        }
        let t2 = t * t;
        let t3 = t2 * t;
        let h = [
            2.0 * t3 - 3.0 * t2 + 1.0,
            t3 - 2.0 * t2 + t,
            -2.0 * t3 + 3.0 * t2,
            t3 - t2,
        ];
        self.combine(h, i0, i1)
    }

    /// 位置对 t 的一阶导
    pub fn velocity(&self, t: f32, i0: usize, i1: usize) -> Vec3 {
        if self.points.len() < 2 {
            return Vec3::ZERO;
        }
        let t2 = t * t;
        let h = [
            6.0 * t2 - 6.0 * t,
            3.0 * t2 - 4.0 * t + 1.0,
            -6.0 * t2 + 6.0 * t,
            3.0 * t2 - 2.0 * t,
        ];
        self.combine(h, i0, i1)
    }

    /// 位置对 t 的二阶导
    pub fn acceleration(&self, t: f32, i0: usize, i1: usize) -> Vec3 {
        if self.points.len() < 2 {
            return Vec3::ZERO;
        }
        let h = [
            12.0 * t - 6.0,
            6.0 * t - 4.0,
            -12.0 * t + 6.0,
            6.0 * t - 2.0,
        ];
        self.combine(h, i0, i1)
    }

    /// 数值弧长：每段 1000 个采样点的折线长度之和
    pub fn arc_length(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..self.points.len() - 1 {
            let mut prev = self.position(0.0, i, i + 1);
            for k in 1..=ARC_LENGTH_SAMPLES {
                let t = k as f32 / ARC_LENGTH_SAMPLES as f32;
                let cur = self.position(t, i, i + 1);
                length += prev.distance(cur);
                prev = cur;
            }
        }
        length
    }

    /// 折线采样（每段 `samples + 1` 个点），用于绘制曲线
    pub fn sample_polyline(&self, samples_per_segment: usize) -> Vec<Vec3> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        let samples = samples_per_segment.max(1);
        let segments = self.points.len() - 1;
        let mut out = Vec::with_capacity(segments * (samples + 1));
        for i in 0..segments {
            for k in 0..=samples {
                out.push(self.position(k as f32 / samples as f32, i, i + 1));
            }
        }
        out
    }

    // ========================================
    // 文本导入导出
    // ========================================

    /// 导出：每行 `x y z tx ty tz`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for p in &self.points {
            out.push_str(&format!(
                "{} {} {} {} {} {}\n",
                p.position.x, p.position.y, p.position.z, p.tangent.x, p.tangent.y, p.tangent.z
            ));
        }
        out
    }

    /// 从 `to_text` 的格式读取
    pub fn from_text(text: &str) -> Result<Self> {
        let mut spline = Self::new();
        for (line, content) in script::lines(text) {
            let mut tokens = Tokens::new(line, content);
            let position = tokens.vec3("position")?;
            let tangent = tokens.vec3("tangent")?;
            tokens.finish()?;
            spline.add_point(position, tangent);
        }
        Ok(spline)
    }
}

impl Curve for HermiteSpline {
    fn value(&self, u: f32) -> Vec3 {
        match SplineCursor::locate(u, self.points.len()) {
            Some((i, t)) => self.position(t, i, i + 1),
            None => Vec3::ZERO,
        }
    }
}

/// 全局参数到 (段, 局部 t) 的映射
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplineCursor {
    /// 全局参数 [0, 1]
    pub u: f32,
}

impl SplineCursor {
    /// `idx = floor(u·(n-1))`, `t = u·(n-1) - idx`；u = 1 落在最后一段 t = 1
    pub fn locate(u: f32, len: usize) -> Option<(usize, f32)> {
        if len < 2 {
            return None;
        }
        let segments = (len - 1) as f32;
        let f = u.clamp(0.0, 1.0) * segments;
        let idx = (f.floor() as usize).min(len - 2);
        Some((idx, f - idx as f32))
    }

    /// 按 `du` 前进，超过 1 时回绕（循环路径）
    pub fn advance(&mut self, du: f32) {
        self.u += du;
        if self.u > 1.0 {
            self.u = self.u.fract();
        }
    }

    /// 当前位置与切向速度
    pub fn sample(&self, spline: &HermiteSpline) -> (Vec3, Vec3) {
        match Self::locate(self.u, spline.len()) {
            Some((i, t)) => (spline.position(t, i, i + 1), spline.velocity(t, i, i + 1)),
            None => (Vec3::ZERO, Vec3::ZERO),
        }
    }
}
