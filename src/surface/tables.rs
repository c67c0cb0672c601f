//! Marching Cubes 查找表
//!
//! 角点编号 i 对应偏移 (i & 1, (i >> 1) & 1, (i >> 2) & 1)。

/// 每条边连接的两个角点
pub const EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 3],
    [3, 2],
    [2, 0],
    [4, 5],
    [5, 7],
    [7, 6],
    [6, 4],
    [0, 4],
    [1, 5],
    [3, 7],
    [2, 6],
];

/// 角点偏移
pub const CORNER_OFFSETS: [[i32; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// 256 种角点分类对应的三角形边列表，-1 结束
#[rustfmt::skip]
pub const TRIANGLE_TABLE: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 8, 8, 1, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 0, 0, 11, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 9, 3, 2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 1, 2, 11, 9, 1, 11, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [10, 2, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 10, 0, 3, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 2, 9, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 2, 3, 8, 10, 2, 8, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 3, 3, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 0, 1, 10, 8, 0, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [9, 3, 0, 9, 11, 3, 9, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [9, 10, 8, 8, 10, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 4, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 4, 9, 1, 7, 4, 1, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [11, 3, 2, 8, 7, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 11, 7, 4, 2, 11, 4, 0, 2, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 11, 0, 9, 1, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 4, 4, 1, 7, 7, 1, 2, 7, 2, 11, -1, -1, -1, -1],
    [7, 4, 8, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 4, 3, 3, 4, 0, 10, 2, 1, -1, -1, -1, -1, -1, -1, -1],
    [10, 2, 9, 9, 2, 0, 7, 4, 8, -1, -1, -1, -1, -1, -1, -1],
    [7, 4, 9, 7, 9, 2, 9, 10, 2, 3, 7, 2, -1, -1, -1, -1],
    [1, 10, 3, 3, 10, 11, 4, 8, 7, -1, -1, -1, -1, -1, -1, -1],
    [4, 0, 7, 0, 1, 10, 7, 0, 10, 7, 10, 11, -1, -1, -1, -1],
    [7, 4, 8, 9, 3, 0, 9, 11, 3, 9, 10, 11, -1, -1, -1, -1],
    [7, 4, 11, 4, 9, 11, 9, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 0, 3, 9, 4, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 5, 5, 0, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 8, 4, 5, 3, 8, 5, 1, 3, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 11, 5, 9, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 11, 0, 0, 11, 8, 5, 9, 4, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 0, 0, 5, 1, 11, 3, 2, -1, -1, -1, -1, -1, -1, -1],
    [11, 8, 2, 8, 4, 5, 2, 8, 5, 2, 5, 1, -1, -1, -1, -1],
    [5, 9, 4, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 1, 10, 2, 5, 9, 4, -1, -1, -1, -1, -1, -1, -1],
    [2, 5, 10, 2, 4, 5, 2, 0, 4, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 8, 8, 5, 3, 3, 5, 10, 3, 10, 2, -1, -1, -1, -1],
    [11, 3, 10, 10, 3, 1, 4, 5, 9, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, 10, 0, 1, 10, 8, 0, 10, 11, 8, -1, -1, -1, -1],
    [4, 5, 10, 4, 10, 3, 10, 11, 3, 0, 4, 3, -1, -1, -1, -1],
    [4, 5, 8, 5, 10, 8, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 7, 7, 9, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 9, 0, 3, 5, 9, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1],
    [7, 0, 8, 7, 1, 0, 7, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [3, 7, 1, 1, 7, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 7, 7, 9, 8, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 0, 5, 0, 11, 0, 2, 11, 7, 5, 11, -1, -1, -1, -1],
    [2, 11, 3, 7, 0, 8, 7, 1, 0, 7, 5, 1, -1, -1, -1, -1],
    [2, 11, 1, 11, 7, 1, 7, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [8, 7, 9, 9, 7, 5, 2, 1, 10, -1, -1, -1, -1, -1, -1, -1],
    [10, 2, 1, 3, 9, 0, 3, 5, 9, 3, 7, 5, -1, -1, -1, -1],
    [2, 0, 10, 0, 8, 7, 10, 0, 7, 10, 7, 5, -1, -1, -1, -1],
    [10, 2, 5, 2, 3, 5, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 8, 5, 8, 7, 1, 10, 3, 10, 11, 3, -1, -1, -1, -1],
    [1, 10, 0, 0, 10, 11, 0, 11, 7, 0, 7, 5, 0, 5, 9, -1],
    [8, 7, 0, 0, 7, 5, 0, 5, 10, 0, 10, 11, 0, 11, 3, -1],
    [5, 11, 7, 10, 11, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 6, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 0, 7, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 9, 7, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 8, 8, 1, 3, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 2, 2, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 7, 8, 0, 6, 7, 0, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 2, 2, 7, 3, 9, 1, 0, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 2, 9, 2, 7, 2, 6, 7, 8, 9, 7, -1, -1, -1, -1],
    [10, 2, 1, 11, 6, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 10, 3, 8, 0, 7, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 2, 2, 9, 10, 7, 11, 6, -1, -1, -1, -1, -1, -1, -1],
    [6, 7, 11, 8, 2, 3, 8, 10, 2, 8, 9, 10, -1, -1, -1, -1],
    [7, 10, 6, 7, 1, 10, 7, 3, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 0, 0, 10, 8, 8, 10, 6, 8, 6, 7, -1, -1, -1, -1],
    [9, 10, 0, 10, 6, 7, 0, 10, 7, 0, 7, 3, -1, -1, -1, -1],
    [6, 7, 10, 7, 8, 10, 8, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 6, 6, 8, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 3, 11, 6, 0, 3, 6, 4, 0, -1, -1, -1, -1, -1, -1, -1],
    [11, 6, 8, 8, 6, 4, 1, 0, 9, -1, -1, -1, -1, -1, -1, -1],
    [6, 4, 11, 4, 9, 1, 11, 4, 1, 11, 1, 3, -1, -1, -1, -1],
    [2, 8, 3, 2, 4, 8, 2, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 0, 2, 8, 3, 2, 4, 8, 2, 6, 4, -1, -1, -1, -1],
    [9, 1, 4, 1, 2, 4, 2, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 6, 6, 8, 11, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 10, 2, 6, 3, 11, 6, 0, 3, 6, 4, 0, -1, -1, -1, -1],
    [0, 9, 10, 0, 10, 2, 4, 8, 6, 8, 11, 6, -1, -1, -1, -1],
    [11, 6, 3, 3, 6, 4, 3, 4, 9, 3, 9, 10, 3, 10, 2, -1],
    [1, 10, 6, 1, 6, 8, 6, 4, 8, 3, 1, 8, -1, -1, -1, -1],
    [1, 10, 0, 10, 6, 0, 6, 4, 0, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 3, 9, 10, 3, 10, 6, 3, 6, 4, 3, 4, 8, -1],
    [4, 10, 6, 9, 10, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 5, 9, 6, 7, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 11, 6, 8, 0, 3, 9, 4, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 5, 5, 0, 4, 11, 6, 7, -1, -1, -1, -1, -1, -1, -1],
    [11, 6, 7, 5, 8, 4, 5, 3, 8, 5, 1, 3, -1, -1, -1, -1],
    [3, 2, 7, 7, 2, 6, 9, 4, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 4, 0, 7, 8, 0, 6, 7, 0, 2, 6, -1, -1, -1, -1],
    [1, 0, 4, 1, 4, 5, 3, 2, 7, 2, 6, 7, -1, -1, -1, -1],
    [4, 5, 8, 8, 5, 1, 8, 1, 2, 8, 2, 6, 8, 6, 7, -1],
    [6, 7, 11, 5, 9, 4, 1, 10, 2, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 4, 7, 11, 6, 0, 3, 8, 2, 1, 10, -1, -1, -1, -1],
    [7, 11, 6, 2, 5, 10, 2, 4, 5, 2, 0, 4, -1, -1, -1, -1],
    [6, 7, 11, 3, 8, 4, 3, 4, 5, 3, 5, 2, 2, 5, 10, -1],
    [9, 4, 5, 7, 10, 6, 7, 1, 10, 7, 3, 1, -1, -1, -1, -1],
    [5, 9, 4, 8, 0, 1, 8, 1, 10, 8, 10, 7, 7, 10, 6, -1],
    [6, 7, 10, 10, 7, 3, 10, 3, 0, 10, 0, 4, 10, 4, 5, -1],
    [4, 5, 8, 8, 5, 10, 8, 10, 6, 8, 6, 7, -1, -1, -1, -1],
    [9, 6, 5, 9, 11, 6, 9, 8, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 5, 5, 3, 11, 5, 11, 6, -1, -1, -1, -1],
    [1, 0, 8, 1, 8, 6, 8, 11, 6, 5, 1, 6, -1, -1, -1, -1],
    [11, 6, 3, 6, 5, 3, 5, 1, 3, -1, -1, -1, -1, -1, -1, -1],
    [2, 6, 3, 6, 5, 9, 3, 6, 9, 3, 9, 8, -1, -1, -1, -1],
    [5, 9, 6, 9, 0, 6, 0, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 8, 8, 2, 6, 8, 6, 5, 8, 5, 1, 8, 1, 0, -1],
    [1, 6, 5, 2, 6, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 10, 9, 6, 5, 9, 11, 6, 9, 8, 11, -1, -1, -1, -1],
    [2, 1, 10, 5, 9, 0, 5, 0, 3, 5, 3, 6, 6, 3, 11, -1],
    [10, 2, 5, 5, 2, 0, 5, 0, 8, 5, 8, 11, 5, 11, 6, -1],
    [10, 2, 5, 5, 2, 3, 5, 3, 11, 5, 11, 6, -1, -1, -1, -1],
    [5, 9, 6, 6, 9, 8, 6, 8, 3, 6, 3, 1, 6, 1, 10, -1],
    [5, 9, 6, 6, 9, 0, 6, 0, 1, 6, 1, 10, -1, -1, -1, -1],
    [8, 3, 0, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 5, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 10, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 0, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 0, 10, 5, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 1, 1, 8, 9, 6, 10, 5, -1, -1, -1, -1, -1, -1, -1],
    [6, 10, 5, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 0, 11, 11, 0, 2, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 6, 1, 0, 9, 3, 2, 11, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 10, 11, 1, 2, 11, 9, 1, 11, 8, 9, -1, -1, -1, -1],
    [2, 1, 6, 6, 1, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 1, 1, 6, 2, 8, 0, 3, -1, -1, -1, -1, -1, -1, -1],
    [6, 9, 5, 6, 0, 9, 6, 2, 0, -1, -1, -1, -1, -1, -1, -1],
    [8, 9, 3, 9, 5, 6, 3, 9, 6, 3, 6, 2, -1, -1, -1, -1],
    [3, 6, 11, 3, 5, 6, 3, 1, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 6, 11, 5, 11, 0, 11, 8, 0, 1, 5, 0, -1, -1, -1, -1],
    [0, 9, 3, 3, 9, 11, 11, 9, 5, 11, 5, 6, -1, -1, -1, -1],
    [5, 6, 9, 6, 11, 9, 11, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [7, 4, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 4, 4, 3, 7, 10, 5, 6, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, 9, 1, 0, 10, 5, 6, -1, -1, -1, -1, -1, -1, -1],
    [6, 10, 5, 1, 4, 9, 1, 7, 4, 1, 3, 7, -1, -1, -1, -1],
    [11, 3, 2, 7, 4, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 6, 4, 11, 7, 4, 2, 11, 4, 0, 2, -1, -1, -1, -1],
    [7, 4, 8, 3, 2, 11, 9, 1, 0, 10, 5, 6, -1, -1, -1, -1],
    [10, 5, 6, 7, 4, 9, 7, 9, 1, 7, 1, 11, 11, 1, 2, -1],
    [2, 1, 6, 6, 1, 5, 8, 7, 4, -1, -1, -1, -1, -1, -1, -1],
    [7, 4, 0, 7, 0, 3, 5, 6, 1, 6, 2, 1, -1, -1, -1, -1],
    [8, 7, 4, 6, 9, 5, 6, 0, 9, 6, 2, 0, -1, -1, -1, -1],
    [5, 6, 9, 9, 6, 2, 9, 2, 3, 9, 3, 7, 9, 7, 4, -1],
    [4, 8, 7, 3, 6, 11, 3, 5, 6, 3, 1, 5, -1, -1, -1, -1],
    [7, 4, 11, 11, 4, 0, 11, 0, 1, 11, 1, 5, 11, 5, 6, -1],
    [4, 8, 7, 11, 3, 0, 11, 0, 9, 11, 9, 6, 6, 9, 5, -1],
    [5, 6, 9, 9, 6, 11, 9, 11, 7, 9, 7, 4, -1, -1, -1, -1],
    [9, 4, 10, 10, 4, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [6, 10, 4, 4, 10, 9, 3, 8, 0, -1, -1, -1, -1, -1, -1, -1],
    [0, 10, 1, 0, 6, 10, 0, 4, 6, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 4, 3, 4, 10, 4, 6, 10, 1, 3, 10, -1, -1, -1, -1],
    [9, 4, 10, 10, 4, 6, 3, 2, 11, -1, -1, -1, -1, -1, -1, -1],
    [8, 0, 2, 8, 2, 11, 9, 4, 10, 4, 6, 10, -1, -1, -1, -1],
    [11, 3, 2, 0, 10, 1, 0, 6, 10, 0, 4, 6, -1, -1, -1, -1],
    [2, 11, 1, 1, 11, 8, 1, 8, 4, 1, 4, 6, 1, 6, 10, -1],
    [4, 1, 9, 4, 2, 1, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 0, 4, 1, 9, 4, 2, 1, 4, 6, 2, -1, -1, -1, -1],
    [4, 6, 0, 0, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 2, 8, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [3, 1, 11, 1, 9, 4, 11, 1, 4, 11, 4, 6, -1, -1, -1, -1],
    [9, 4, 1, 1, 4, 6, 1, 6, 11, 1, 11, 8, 1, 8, 0, -1],
    [11, 3, 6, 3, 0, 6, 0, 4, 6, -1, -1, -1, -1, -1, -1, -1],
    [8, 6, 11, 4, 6, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 7, 6, 10, 8, 7, 10, 9, 8, -1, -1, -1, -1, -1, -1, -1],
    [10, 9, 6, 9, 0, 3, 6, 9, 3, 6, 3, 7, -1, -1, -1, -1],
    [8, 7, 0, 0, 7, 1, 1, 7, 6, 1, 6, 10, -1, -1, -1, -1],
    [6, 10, 7, 10, 1, 7, 1, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 11, 10, 7, 6, 10, 8, 7, 10, 9, 8, -1, -1, -1, -1],
    [6, 10, 7, 7, 10, 9, 7, 9, 0, 7, 0, 2, 7, 2, 11, -1],
    [11, 3, 2, 1, 0, 8, 1, 8, 7, 1, 7, 10, 10, 7, 6, -1],
    [6, 10, 7, 7, 10, 1, 7, 1, 2, 7, 2, 11, -1, -1, -1, -1],
    [8, 7, 6, 8, 6, 1, 6, 2, 1, 9, 8, 1, -1, -1, -1, -1],
    [0, 3, 9, 9, 3, 7, 9, 7, 6, 9, 6, 2, 9, 2, 1, -1],
    [8, 7, 0, 7, 6, 0, 6, 2, 0, -1, -1, -1, -1, -1, -1, -1],
    [7, 2, 3, 6, 2, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 3, 6, 6, 3, 1, 6, 1, 9, 6, 9, 8, 6, 8, 7, -1],
    [11, 7, 6, 1, 9, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 3, 6, 6, 3, 0, 6, 0, 8, 6, 8, 7, -1, -1, -1, -1],
    [11, 7, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 11, 11, 5, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 11, 11, 5, 7, 0, 3, 8, -1, -1, -1, -1, -1, -1, -1],
    [7, 11, 5, 5, 11, 10, 0, 9, 1, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 9, 3, 9, 1, 7, 11, 5, 11, 10, 5, -1, -1, -1, -1],
    [5, 2, 10, 5, 3, 2, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 2, 8, 2, 10, 5, 8, 2, 5, 8, 5, 7, -1, -1, -1, -1],
    [0, 9, 1, 5, 2, 10, 5, 3, 2, 5, 7, 3, -1, -1, -1, -1],
    [10, 5, 2, 2, 5, 7, 2, 7, 8, 2, 8, 9, 2, 9, 1, -1],
    [1, 11, 2, 1, 7, 11, 1, 5, 7, -1, -1, -1, -1, -1, -1, -1],
    [8, 0, 3, 1, 11, 2, 1, 7, 11, 1, 5, 7, -1, -1, -1, -1],
    [0, 9, 5, 0, 5, 11, 5, 7, 11, 2, 0, 11, -1, -1, -1, -1],
    [3, 8, 2, 2, 8, 9, 2, 9, 5, 2, 5, 7, 2, 7, 11, -1],
    [5, 7, 1, 1, 7, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 0, 7, 0, 1, 7, 1, 5, 7, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 9, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [9, 7, 8, 5, 7, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 5, 4, 8, 10, 5, 8, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 4, 10, 4, 3, 4, 0, 3, 11, 10, 3, -1, -1, -1, -1],
    [1, 0, 9, 8, 5, 4, 8, 10, 5, 8, 11, 10, -1, -1, -1, -1],
    [9, 1, 4, 4, 1, 3, 4, 3, 11, 4, 11, 10, 4, 10, 5, -1],
    [10, 5, 2, 2, 5, 3, 3, 5, 4, 3, 4, 8, -1, -1, -1, -1],
    [10, 5, 2, 5, 4, 2, 4, 0, 2, -1, -1, -1, -1, -1, -1, -1],
    [9, 1, 0, 3, 2, 10, 3, 10, 5, 3, 5, 8, 8, 5, 4, -1],
    [10, 5, 2, 2, 5, 4, 2, 4, 9, 2, 9, 1, -1, -1, -1, -1],
    [1, 5, 2, 5, 4, 8, 2, 5, 8, 2, 8, 11, -1, -1, -1, -1],
    [2, 1, 11, 11, 1, 5, 11, 5, 4, 11, 4, 0, 11, 0, 3, -1],
    [4, 8, 5, 5, 8, 11, 5, 11, 2, 5, 2, 0, 5, 0, 9, -1],
    [5, 4, 9, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 5, 8, 3, 5, 3, 1, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 5, 4, 1, 5, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 3, 3, 9, 5, 3, 5, 4, 3, 4, 8, -1, -1, -1, -1],
    [5, 4, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 4, 7, 11, 9, 4, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, 11, 4, 7, 11, 9, 4, 11, 10, 9, -1, -1, -1, -1],
    [0, 4, 1, 4, 7, 11, 1, 4, 11, 1, 11, 10, -1, -1, -1, -1],
    [7, 11, 4, 4, 11, 10, 4, 10, 1, 4, 1, 3, 4, 3, 8, -1],
    [9, 4, 7, 9, 7, 2, 7, 3, 2, 10, 9, 2, -1, -1, -1, -1],
    [8, 0, 7, 7, 0, 2, 7, 2, 10, 7, 10, 9, 7, 9, 4, -1],
    [1, 0, 10, 10, 0, 4, 10, 4, 7, 10, 7, 3, 10, 3, 2, -1],
    [7, 8, 4, 10, 1, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 4, 1, 1, 4, 2, 2, 4, 7, 2, 7, 11, -1, -1, -1, -1],
    [8, 0, 3, 2, 1, 9, 2, 9, 4, 2, 4, 11, 11, 4, 7, -1],
    [7, 11, 4, 11, 2, 4, 2, 0, 4, -1, -1, -1, -1, -1, -1, -1],
    [3, 8, 2, 2, 8, 4, 2, 4, 7, 2, 7, 11, -1, -1, -1, -1],
    [9, 4, 1, 4, 7, 1, 7, 3, 1, -1, -1, -1, -1, -1, -1, -1],
    [9, 4, 1, 1, 4, 7, 1, 7, 8, 1, 8, 0, -1, -1, -1, -1],
    [3, 4, 7, 0, 4, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 8, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 11, 9, 9, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 9, 3, 11, 9, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 10, 0, 8, 10, 8, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [10, 3, 11, 1, 3, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 8, 2, 10, 8, 10, 9, 8, -1, -1, -1, -1, -1, -1, -1],
    [9, 2, 10, 0, 2, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 0, 10, 10, 0, 8, 10, 8, 3, 10, 3, 2, -1, -1, -1, -1],
    [2, 10, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 11, 1, 9, 11, 9, 8, 11, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 11, 11, 1, 9, 11, 9, 0, 11, 0, 3, -1, -1, -1, -1],
    [11, 0, 8, 2, 0, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 8, 3, 9, 8, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 3, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert!(TRIANGLE_TABLE[0].iter().all(|e| *e == -1));
        assert!(TRIANGLE_TABLE[255].iter().all(|e| *e == -1));
        for row in TRIANGLE_TABLE.iter() {
            let used = row.iter().take_while(|e| **e >= 0).count();
            assert_eq!(used % 3, 0);
            assert!(row[used..].iter().all(|e| *e == -1));
            assert!(row[..used].iter().all(|e| (*e as usize) < EDGE_CORNERS.len()));
        }
    }

    #[test]
    fn test_edges_follow_classification() {
        for case in 0..256usize {
            for (edge, [a, b]) in EDGE_CORNERS.iter().enumerate() {
                let crosses = (case >> a) & 1 != (case >> b) & 1;
                let used = TRIANGLE_TABLE[case].contains(&(edge as i8));
                assert_eq!(crosses, used, "case {case} edge {edge}");
            }
        }
    }

    #[test]
    fn test_complementary_cases_cut_same_edges() {
        // 取反的分类切到的边集合相同
        for case in 1..255usize {
            let edges = |c: usize| {
                let mut e: Vec<i8> = TRIANGLE_TABLE[c].iter().copied().take_while(|e| *e >= 0).collect();
                e.sort_unstable();
                e.dedup();
                e
            };
            assert_eq!(edges(case), edges(255 - case), "case {case}");
        }
    }
}
