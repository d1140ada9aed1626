//! 图算法模块
//!
//! 包含拓扑排序算法

mod topological;

pub use topological::{TopologicNode, TopologicalOrder, TopologicalSort};
