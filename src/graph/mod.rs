//! 图核心模块
//!
//! 定义顶点和邻接表图的核心数据结构

mod adjacency;
mod vertex;

pub use adjacency::AdjacencyList;
pub use vertex::{AdjacencyChain, Vertex, VertexId};
