//! 邻接表图
//!
//! 稀疏图的邻接表实现，支持顶点/边插入与深度、广度优先遍历

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// 邻接表图
///
/// 顶点集合按插入顺序保存，该顺序同时是遍历外层循环的回退顺序。
/// 顶点值在图内唯一；无向边按两条独立的有向邻接链接记录。
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList<T> {
    /// 图的顶点集合（插入顺序）
    vertices: Vec<Vertex<T>>,
}

impl<T> AdjacencyList<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// 创建指定容量的图
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取有向邻接链接总数（一条无向边计两条）
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    /// 图是否为空
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 通过 ID 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.as_usize())
    }

    /// 初始化 visited 标志，每次遍历开始前全部置为 false
    fn init_visited(&mut self) {
        for vertex in &mut self.vertices {
            vertex.set_visited(false);
        }
    }
}

impl<T: PartialEq + fmt::Display> AdjacencyList<T> {
    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 不允许插入重复值，重复时返回 [`Error::DuplicateVertex`]，图保持不变。
    pub fn add_vertex(&mut self, data: T) -> Result<VertexId> {
        if self.contains(&data) {
            return Err(Error::DuplicateVertex(data.to_string()));
        }

        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(data));
        debug!(id = id.as_usize(), "添加顶点");

        Ok(id)
    }

    /// 查找图中是否包含某个值
    pub fn contains(&self, data: &T) -> bool {
        self.find_id(data).is_some()
    }

    /// 查找指定值的顶点并返回（顶点归图所有）
    pub fn find(&self, data: &T) -> Option<&Vertex<T>> {
        self.find_id(data).map(|id| &self.vertices[id.as_usize()])
    }

    /// 按值线性查找顶点 ID
    fn find_id(&self, data: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.data() == data)
            .map(VertexId::new)
    }

    /// 获取某个值的邻接点值（邻接链插入顺序）
    pub fn neighbors(&self, data: &T) -> Option<Vec<&T>> {
        let vertex = self.find(data)?;
        Some(
            vertex
                .adjacency()
                .iter()
                .map(|id| self.vertices[id.as_usize()].data())
                .collect(),
        )
    }

    // ==================== 边操作 ====================

    /// 添加无向边，两个顶点的邻接链都记录边信息
    ///
    /// 任一端点不存在时返回 [`Error::VertexNotFound`]；任一方向的有向链接
    /// 已存在时返回 [`Error::DuplicateEdge`]。两个方向先整体校验再一起写入，
    /// 失败时图保持不变，不会留下只有单向链接的不对称状态。
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let from_id = self
            .find_id(from)
            .ok_or_else(|| Error::VertexNotFound(from.to_string()))?;
        let to_id = self
            .find_id(to)
            .ok_or_else(|| Error::VertexNotFound(to.to_string()))?;

        // 先校验两个方向都不重复，再开始写入
        if self.vertices[from_id.as_usize()].has_neighbor(to_id) {
            return Err(Error::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if self.vertices[to_id.as_usize()].has_neighbor(from_id) {
            return Err(Error::DuplicateEdge {
                from: to.to_string(),
                to: from.to_string(),
            });
        }

        self.add_directed_edge(from_id, to_id)?;
        if from_id != to_id {
            // 自环的两个方向是同一条链接，只记录一次
            self.add_directed_edge(to_id, from_id)?;
        }
        debug!(
            from = from_id.as_usize(),
            to = to_id.as_usize(),
            "添加无向边"
        );

        Ok(())
    }

    /// 添加有向边：扫描邻接链查重后追加到链表末尾
    fn add_directed_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if self.vertices[from.as_usize()].has_neighbor(to) {
            return Err(Error::DuplicateEdge {
                from: self.vertices[from.as_usize()].data().to_string(),
                to: self.vertices[to.as_usize()].data().to_string(),
            });
        }

        self.vertices[from.as_usize()].push_neighbor(to);
        Ok(())
    }
}

impl<T: PartialEq + fmt::Display + Clone> AdjacencyList<T> {
    // ==================== 遍历 ====================

    /// 深度优先搜索遍历
    ///
    /// 先把 visited 标志全部置为 false，再按顶点插入顺序对每个未访问
    /// 顶点做一次深度优先遍历，返回访问顺序。每个顶点恰好出现一次；
    /// 图不连通时逐个连通分量遍历完再换下一个起点。
    pub fn dfs_traverse(&mut self) -> Vec<T> {
        trace!(vertices = self.vertex_count(), "深度优先遍历");
        self.init_visited();

        let mut order = Vec::with_capacity(self.vertices.len());
        for index in 0..self.vertices.len() {
            if !self.vertices[index].visited() {
                self.dfs(VertexId::new(index), &mut order);
            }
        }
        order
    }

    /// 从某个顶点开始深度优先遍历
    ///
    /// 用显式栈代替递归，深图不会打爆调用栈；邻接链倒序入栈、
    /// 出栈时再检查访问标志，访问顺序与递归先序完全一致。
    fn dfs(&mut self, root: VertexId, order: &mut Vec<T>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let index = id.as_usize();
            if self.vertices[index].visited() {
                continue;
            }

            self.vertices[index].set_visited(true);
            order.push(self.vertices[index].data().clone());

            // 邻接链靠前的邻接点要先访问，所以倒序入栈
            for i in (0..self.vertices[index].degree()).rev() {
                let next = self.vertices[index].adjacency()[i];
                if !self.vertices[next.as_usize()].visited() {
                    stack.push(next);
                }
            }
        }
    }

    /// 广度优先搜索遍历
    ///
    /// 先把 visited 标志全部置为 false，再按顶点插入顺序对每个未访问
    /// 顶点做一次广度优先遍历，返回访问顺序。连通分量内按层序访问。
    pub fn bfs_traverse(&mut self) -> Vec<T> {
        trace!(vertices = self.vertex_count(), "广度优先遍历");
        self.init_visited();

        let mut order = Vec::with_capacity(self.vertices.len());
        for index in 0..self.vertices.len() {
            if !self.vertices[index].visited() {
                self.bfs(VertexId::new(index), &mut order);
            }
        }
        order
    }

    /// 从某个顶点开始用队列做广度优先遍历
    fn bfs(&mut self, root: VertexId, order: &mut Vec<T>) {
        let mut queue = VecDeque::new();
        self.vertices[root.as_usize()].set_visited(true);
        order.push(self.vertices[root.as_usize()].data().clone());
        queue.push_back(root);

        while let Some(id) = queue.pop_front() {
            // 访问此顶点的所有未访问邻接点
            for i in 0..self.vertices[id.as_usize()].degree() {
                let next = self.vertices[id.as_usize()].adjacency()[i];
                let neighbor = &mut self.vertices[next.as_usize()];
                if !neighbor.visited() {
                    neighbor.set_visited(true);
                    order.push(neighbor.data().clone());
                    queue.push_back(next);
                }
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for AdjacencyList<T> {
    /// 打印每个顶点和它的邻接点，仅用于人工检查
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{}:", vertex.data())?;
            for id in vertex.adjacency() {
                write!(f, "{}", self.vertices[id.as_usize()].data())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
