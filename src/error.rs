//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("添加了重复的边: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("未知的依赖项: {key} 依赖 {dependence}")]
    UnknownDependency { key: String, dependence: String },

    #[error("存在双向引用或循环引用")]
    CyclicDependency,
}
