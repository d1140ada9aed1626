//! Topograph - 内存图算法库
//!
//! 两个相互独立的构件：
//! - 邻接表图：顶点/边插入（拒绝重复）、深度优先与广度优先遍历
//! - 拓扑排序：按依赖关系对带键节点排序，可检测循环依赖
//!
//! 全部在内存中同步执行，无持久化、无网络接口。

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{TopologicNode, TopologicalOrder, TopologicalSort};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
