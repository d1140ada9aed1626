//! Topograph 演示脚本
//!
//! 构建样例图并执行遍历和拓扑排序

use topograph::{AdjacencyList, TopologicNode, TopologicalSort};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Topograph 演示");
    println!("================\n");

    // 字符图：打印每个顶点和它的邻接点
    println!("1. 邻接表...");
    let mut link = AdjacencyList::new();
    for v in ['A', 'B', 'C', 'D'] {
        link.add_vertex(v)?;
    }
    link.add_edge(&'A', &'B')?;
    link.add_edge(&'A', &'C')?;
    link.add_edge(&'A', &'D')?;
    link.add_edge(&'B', &'D')?;
    println!("{}", link);

    // 菱形格子图：深度优先与广度优先遍历
    println!("2. 图遍历...");
    let mut graph = AdjacencyList::new();
    for v in ["V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8"] {
        graph.add_vertex(v)?;
    }
    for (from, to) in [
        ("V1", "V2"),
        ("V1", "V3"),
        ("V2", "V4"),
        ("V2", "V5"),
        ("V3", "V6"),
        ("V3", "V7"),
        ("V4", "V8"),
        ("V5", "V8"),
        ("V6", "V8"),
        ("V7", "V8"),
    ] {
        graph.add_edge(&from, &to)?;
    }
    println!("   深度优先: {}", graph.dfs_traverse().join(" "));
    println!("   广度优先: {}\n", graph.bfs_traverse().join(" "));

    // 模块依赖的拓扑排序
    println!("3. 拓扑排序...");
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

    let sort = TopologicalSort::new();
    for key in sort.order_by(&nodes)? {
        println!("   {}", key?);
    }

    Ok(())
}
