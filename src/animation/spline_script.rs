//! 样条编辑命令
//!
//! 支持的命令：
//! - `add point x y z tx ty tz`
//! - `set point i x y z`
//! - `set tangent i x y z`
//! - `get_arc_length`

use glam::Vec3;

use super::HermiteSpline;
use crate::script::{self, Tokens};
use crate::Result;

/// 单条样条命令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineCommand {
    AddPoint { position: Vec3, tangent: Vec3 },
    SetPoint { index: usize, position: Vec3 },
    SetTangent { index: usize, tangent: Vec3 },
    GetArcLength,
}

impl SplineCommand {
    fn parse(line: usize, text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(line, text);
        let command = match tokens.word("command")? {
            "add" => {
                tokens.keyword("point")?;
                SplineCommand::AddPoint {
                    position: tokens.vec3("position")?,
                    tangent: tokens.vec3("tangent")?,
                }
            }
            "set" => match tokens.word("target")? {
                "point" => SplineCommand::SetPoint {
                    index: tokens.usize("index")?,
                    position: tokens.vec3("position")?,
                },
                "tangent" => SplineCommand::SetTangent {
                    index: tokens.usize("index")?,
                    tangent: tokens.vec3("tangent")?,
                },
                other => return Err(tokens.error(format!("cannot set '{other}'"))),
            },
            "get_arc_length" => SplineCommand::GetArcLength,
            other => return Err(tokens.error(format!("unknown command '{other}'"))),
        };
        tokens.finish()?;
        Ok(command)
    }

    /// 执行命令；`get_arc_length` 返回弧长
    pub fn apply(&self, spline: &mut HermiteSpline) -> Result<Option<f32>> {
        match *self {
            SplineCommand::AddPoint { position, tangent } => spline.add_point(position, tangent),
            SplineCommand::SetPoint { index, position } => spline.set_point(index, position)?,
            SplineCommand::SetTangent { index, tangent } => spline.set_tangent(index, tangent)?,
            SplineCommand::GetArcLength => return Ok(Some(spline.arc_length())),
        }
        Ok(None)
    }
}

/// 解析整段脚本（空行和 `#` 注释被忽略）
pub fn parse_spline_script(text: &str) -> Result<Vec<SplineCommand>> {
    script::lines(text)
        .map(|(line, content)| SplineCommand::parse(line, content))
        .collect()
}

/// 解析并依次执行，返回所有 `get_arc_length` 的结果
///
/// 解析失败时样条不会被修改。
pub fn run_spline_script(spline: &mut HermiteSpline, text: &str) -> Result<Vec<f32>> {
    let commands = parse_spline_script(text)?;
    let mut lengths = Vec::new();
    for command in &commands {
        if let Some(length) = command.apply(spline)? {
            lengths.push(length);
        }
    }
    Ok(lengths)
}
