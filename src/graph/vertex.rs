//! 顶点定义
//!
//! 顶点本体归图的顶点集合所有，邻接链只保存顶点 ID

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 顶点 ID（顶点在图的顶点集合中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// 邻接链（按插入顺序记录邻接点 ID）
pub type AdjacencyChain = SmallVec<[VertexId; 4]>;

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// 顶点数据（插入后不再改动）
    data: T,
    /// 邻接链表（非占有引用，顶点本体归图所有）
    adjacency: AdjacencyChain,
    /// 访问标志，遍历时使用
    visited: bool,
}

impl<T> Vertex<T> {
    /// 创建新顶点，邻接链为空，访问标志为 false
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            adjacency: AdjacencyChain::new(),
            visited: false,
        }
    }

    /// 获取顶点数据
    pub fn data(&self) -> &T {
        &self.data
    }

    /// 获取邻接链（插入顺序）
    pub fn adjacency(&self) -> &[VertexId] {
        &self.adjacency
    }

    /// 获取顶点的度（邻接链长度）
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// 检查邻接链中是否已有某个邻接点
    pub(crate) fn has_neighbor(&self, id: VertexId) -> bool {
        self.adjacency.contains(&id)
    }

    /// 把邻接点追加到链表末尾
    pub(crate) fn push_neighbor(&mut self, id: VertexId) {
        self.adjacency.push(id);
    }

    pub(crate) fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
