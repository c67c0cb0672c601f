//! 动画曲线
//!
//! - HermiteSpline: 三次 Hermite 样条
//! - SplineCursor: 全局参数 → (段, t) 映射
//! - spline_script: 行命令编辑样条

mod hermite_spline;
mod spline_script;

pub use hermite_spline::{ControlPoint, Curve, HermiteSpline, SplineCursor};
pub use spline_script::{parse_spline_script, run_spline_script, SplineCommand};
