//! 行命令脚本的分词辅助
//!
//! 样条和质点-弹簧场景都用空白分隔的一行一条命令来描述。

use std::str::SplitWhitespace;

use crate::{MeadowError, Result};

/// 单行命令的参数读取器
pub(crate) struct Tokens<'a> {
    line: usize,
    words: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// `line` 从 1 开始计数，仅用于报错
    pub fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            words: text.split_whitespace(),
        }
    }

    pub fn error(&self, message: impl Into<String>) -> MeadowError {
        MeadowError::Script {
            line: self.line,
            message: message.into(),
        }
    }

    pub fn word(&mut self, what: &str) -> Result<&'a str> {
        let line = self.line;
        self.words.next().ok_or_else(|| MeadowError::Script {
            line,
            message: format!("missing {what}"),
        })
    }

    /// 读取下一个词并要求等于 `keyword`
    pub fn keyword(&mut self, keyword: &str) -> Result<()> {
        let word = self.word(keyword)?;
        if word == keyword {
            Ok(())
        } else {
            Err(self.error(format!("expected '{keyword}', found '{word}'")))
        }
    }

    pub fn f32(&mut self, what: &str) -> Result<f32> {
        let word = self.word(what)?;
        word.parse::<f32>()
            .map_err(|_| self.error(format!("{what}: '{word}' is not a number")))
    }

    pub fn usize(&mut self, what: &str) -> Result<usize> {
        let word = self.word(what)?;
        word.parse::<usize>()
            .map_err(|_| self.error(format!("{what}: '{word}' is not an index")))
    }

    pub fn vec3(&mut self, what: &str) -> Result<glam::Vec3> {
        Ok(glam::Vec3::new(self.f32(what)?, self.f32(what)?, self.f32(what)?))
    }

    /// 要求本行已无多余参数
    pub fn finish(mut self) -> Result<()> {
        match self.words.next() {
            None => Ok(()),
            Some(extra) => Err(self.error(format!("unexpected argument '{extra}'"))),
        }
    }
}

/// 遍历非空、非注释行，返回 (行号, 内容)
pub(crate) fn lines(script: &str) -> impl Iterator<Item = (usize, &str)> {
    script
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}
