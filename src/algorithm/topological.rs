//! 拓扑排序
//!
//! 按依赖关系对带键节点做线性排序，可检测循环依赖

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 拓扑节点
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologicNode {
    /// 节点的键值
    pub key: String,
    /// 依赖节点的键值列表，这些键值必须排在本节点之前
    #[serde(default)]
    pub dependences: Vec<String>,
}

impl TopologicNode {
    /// 创建没有依赖项的节点
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            dependences: Vec::new(),
        }
    }

    /// 创建带依赖项的节点
    pub fn with_dependences<I, S>(key: impl Into<String>, dependences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            dependences: dependences.into_iter().map(Into::into).collect(),
        }
    }
}

/// 拓扑排序器
///
/// 每次排序都在输入的私有副本上进行，调用方的数据不会被改动。
#[derive(Debug, Clone, Copy, Default)]
pub struct TopologicalSort;

impl TopologicalSort {
    pub fn new() -> Self {
        Self
    }

    /// 对节点集合做拓扑排序，返回惰性的键值序列
    ///
    /// 输入先整体复制进工作集，再校验所有依赖项都指向集合内的节点；
    /// 未知依赖会让节点永远无法出队，与真正的循环依赖无法区分，
    /// 所以在排序开始前就以 [`Error::UnknownDependency`] 拒绝。
    /// 空输入产生空序列。
    pub fn order_by<'a, I>(&self, nodes: I) -> Result<TopologicalOrder>
    where
        I: IntoIterator<Item = &'a TopologicNode>,
    {
        let mut working: IndexMap<String, Vec<String>> = IndexMap::new();
        for node in nodes {
            working.insert(node.key.clone(), node.dependences.clone());
        }

        for (key, dependences) in &working {
            for dependence in dependences {
                if !working.contains_key(dependence) {
                    return Err(Error::UnknownDependency {
                        key: key.clone(),
                        dependence: dependence.clone(),
                    });
                }
            }
        }

        debug!(nodes = working.len(), "开始拓扑排序");
        Ok(TopologicalOrder {
            working,
            failed: false,
        })
    }
}

/// 拓扑排序的惰性结果序列
///
/// 每次 `next` 只做解出下一个键值所需的工作。检测到循环依赖时
/// 产出一次 [`Error::CyclicDependency`] 然后终止；之前产出的
/// 键值仍是合法的前缀，但整个序列应视为失败。
#[derive(Debug, Clone)]
pub struct TopologicalOrder {
    /// 工作集：尚未排出的节点及其剩余依赖（保持输入顺序）
    working: IndexMap<String, Vec<String>>,
    failed: bool,
}

impl Iterator for TopologicalOrder {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.working.is_empty() {
            return None;
        }

        // 按当前顺序查找第一个依赖项已清空的节点
        let ready = self
            .working
            .values()
            .position(|dependences| dependences.is_empty());

        match ready {
            Some(index) => {
                // shift_remove 保持剩余节点的相对顺序，排序结果稳定
                let (key, _) = self.working.shift_remove_index(index)?;

                // 移除用过的节点后，解除其它节点对它的依赖
                for dependences in self.working.values_mut() {
                    dependences.retain(|dependence| dependence != &key);
                }

                Some(Ok(key))
            }
            None => {
                self.failed = true;
                Some(Err(Error::CyclicDependency))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_keys(nodes: &[TopologicNode]) -> Result<Vec<String>> {
        TopologicalSort::new().order_by(nodes)?.collect()
    }

    #[test]
    fn test_simple_chain() {
        let nodes = vec![
            TopologicNode::with_dependences("A", ["B", "C"]),
            TopologicNode::with_dependences("B", ["C"]),
            TopologicNode::new("C"),
        ];

        // 同时就绪时取工作集中靠前的节点，结果恰好是 C, B, A
        assert_eq!(order_keys(&nodes).unwrap(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_module_dependences() {
        // 原始驱动程序里的模块依赖例子
        let nodes = vec![
            TopologicNode::with_dependences(
                "XMedia",
                ["XMedia.Controllers", "XMedia.Models", "XMedia.Logics", "XMedia.Commons"],
            ),
            TopologicNode::with_dependences(
                "XMedia.Controllers",
                ["XMedia.Models", "XMedia.Logics", "XMedia.Commons"],
            ),
            TopologicNode::with_dependences("XMedia.Logics", ["XMedia.Models", "XMedia.Commons"]),
            TopologicNode::new("XMedia.Models"),
            TopologicNode::new("XMedia.Commons"),
        ];

        assert_eq!(
            order_keys(&nodes).unwrap(),
            vec![
                "XMedia.Models",
                "XMedia.Commons",
                "XMedia.Logics",
                "XMedia.Controllers",
                "XMedia"
            ]
        );
    }

    #[test]
    fn test_cyclic_dependency() {
        let nodes = vec![
            TopologicNode::with_dependences("A", ["B"]),
            TopologicNode::with_dependences("B", ["A"]),
        ];

        assert_eq!(order_keys(&nodes).unwrap_err(), Error::CyclicDependency);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(order_keys(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let nodes = vec![TopologicNode::with_dependences("A", ["missing"])];

        let err = TopologicalSort::new().order_by(&nodes).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownDependency {
                key: "A".to_string(),
                dependence: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_lazy_prefix_before_cycle() {
        let nodes = vec![
            TopologicNode::new("C"),
            TopologicNode::with_dependences("A", ["B"]),
            TopologicNode::with_dependences("B", ["A"]),
        ];

        let mut order = TopologicalSort::new().order_by(&nodes).unwrap();
        // 已产出的前缀仍然有效
        assert_eq!(order.next(), Some(Ok("C".to_string())));
        assert_eq!(order.next(), Some(Err(Error::CyclicDependency)));
        // 失败后序列终止
        assert_eq!(order.next(), None);
    }

    #[test]
    fn test_input_not_mutated() {
        let nodes = vec![
            TopologicNode::with_dependences("B", ["C"]),
            TopologicNode::new("C"),
        ];
        let snapshot = nodes.clone();

        order_keys(&nodes).unwrap();
        assert_eq!(nodes, snapshot);
    }

    #[test]
    fn test_deserialize_missing_dependences() {
        // dependences 缺省时反序列化为空列表
        let nodes: Vec<TopologicNode> = serde_json::from_str(
            r#"[{"key": "A", "dependences": ["B"]}, {"key": "B"}]"#,
        )
        .unwrap();

        assert_eq!(nodes[1].dependences, Vec::<String>::new());
        assert_eq!(order_keys(&nodes).unwrap(), vec!["B", "A"]);
    }

    #[test]
    fn test_random_dag_respects_dependences() {
        use rand::{seq::SliceRandom, Rng};

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            // 只让节点依赖编号更小的节点，保证无环
            let count = rng.gen_range(1..30);
            let mut nodes = Vec::with_capacity(count);
            for i in 0..count {
                let mut dependences: Vec<String> =
                    (0..i).filter(|_| rng.gen_bool(0.3)).map(|d| format!("N{d}")).collect();
                dependences.shuffle(&mut rng);
                nodes.push(TopologicNode {
                    key: format!("N{i}"),
                    dependences,
                });
            }

            let keys = order_keys(&nodes).unwrap();
            assert_eq!(keys.len(), count);

            let position = |key: &str| keys.iter().position(|k| k == key).unwrap();
            for node in &nodes {
                for dependence in &node.dependences {
                    assert!(position(dependence) < position(&node.key));
                }
            }
        }
    }
}
