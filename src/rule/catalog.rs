//! 内置规则目录
//!
//! 每条规则：全局唯一ID + 分类 + 展示名称 + 原始正则。
//! 正则面向原始文本的惯用写法（函数头 + 函数体中的关键标识符），
//! 属于启发式匹配，允许误报与漏报。
//!
//! 编写约束：
//! - 只使用惰性的 `[\s\S]*?` 衔接关键片段，不嵌套无界量词
//! - `{` / `}` 一律转义
//! - 大小写由编译器统一忽略，无需 `(?i)`

use super::model::{Category, RuleDef};

/// 函数头：`function name(...) {` / `const name(...) {`
macro_rules! fn_head {
    () => {
        r"(?:function|const|let|var)\s+\w+\s*\([^)]*\)\s*\{"
    };
}

pub static RULE_CATALOG: &[RuleDef] = &[
    // 数组算法
    RuleDef::new(
        "two_pointers",
        Category::Array,
        "two pointers",
        concat!(fn_head!(), r"[\s\S]*?(?:left|right|start|end)[\s\S]*?while\s*\([^)]*\)"),
    ),
    RuleDef::new(
        "sliding_window",
        Category::Array,
        "sliding window",
        concat!(fn_head!(), r"[\s\S]*?(?:window|slide|substr)[\s\S]*?(?:right|end)\+\+"),
    ),
    RuleDef::new(
        "prefix_sum",
        Category::Array,
        "prefix sum",
        r"(?:prefix|preSum|dp)\s*\[\s*i\s*\]\s*=\s*(?:prefix|preSum|dp)\s*\[\s*i\s*-\s*1\s*\]\s*\+",
    ),
    // 字符串算法
    RuleDef::new(
        "kmp",
        Category::String,
        "KMP string matching",
        concat!(fn_head!(), r"[\s\S]*?(?:next|lps|prefix)[\s\S]*?for[\s\S]*?\}"),
    ),
    RuleDef::new(
        "palindrome",
        Category::String,
        "palindrome",
        concat!(fn_head!(), r"[\s\S]*?(?:left|start)[\s\S]*?(?:right|end)[\s\S]*?while[\s\S]*?\}"),
    ),
    // 动态规划
    RuleDef::new(
        "dp",
        Category::DynamicProgramming,
        "dynamic programming",
        r"(?:let|var|const)\s+dp\s*=\s*(?:new\s+Array|Array\.from|Array\()[\s\S]*?for[\s\S]*?for[\s\S]*?\}",
    ),
    RuleDef::new(
        "knapsack",
        Category::DynamicProgramming,
        "knapsack",
        concat!(fn_head!(), r"[\s\S]*?(?:weight|value|dp)[\s\S]*?for[\s\S]*?for[\s\S]*?\}"),
    ),
    RuleDef::new(
        "lcs",
        Category::DynamicProgramming,
        "longest common subsequence",
        concat!(fn_head!(), r"[\s\S]*?(?:dp|length)[\s\S]*?text1[\s\S]*?text2[\s\S]*?\}"),
    ),
    // 树算法
    RuleDef::new(
        "bst_traversal",
        Category::Tree,
        "binary tree traversal",
        concat!(fn_head!(), r"[\s\S]*?(?:left|right)[\s\S]*?(?:recursion|stack|queue)[\s\S]*?\}"),
    ),
    RuleDef::new(
        "balance_tree",
        Category::Tree,
        "balanced tree operations",
        concat!(fn_head!(), r"[\s\S]*?(?:height|balance|rotate)[\s\S]*?\}"),
    ),
    // 图算法
    RuleDef::new(
        "floyd_warshall",
        Category::Graph,
        "Floyd-Warshall",
        r"(function\s+(?:floydWarshall|floyd_warshall))\s*\([^)]*\)\s*\{[\s\S]*?for[\s\S]*?for[\s\S]*?for[\s\S]*?\}",
    ),
    RuleDef::new(
        "dijkstra",
        Category::Graph,
        "Dijkstra shortest path",
        r"(function\s+(?:dijkstra|shortestPath))\s*\([^)]*\)\s*\{[\s\S]*?(?:priority|distance|dist)[\s\S]*?\}",
    ),
    RuleDef::new(
        "bellman_ford",
        Category::Graph,
        "Bellman-Ford",
        r"(function\s+(?:bellmanFord|bellman_ford))\s*\([^)]*\)\s*\{[\s\S]*?for[\s\S]*?for[\s\S]*?\}",
    ),
    RuleDef::new(
        "kruskal",
        Category::Graph,
        "Kruskal minimum spanning tree",
        r"(function\s+(?:kruskal|minimumSpanningTree))\s*\([^)]*\)\s*\{[\s\S]*?(?:union|find)[\s\S]*?\}",
    ),
    RuleDef::new(
        "prim",
        Category::Graph,
        "Prim minimum spanning tree",
        r"(function\s+(?:prim|minimumSpanningTree))\s*\([^)]*\)\s*\{[\s\S]*?(?:priority|key)[\s\S]*?\}",
    ),
    // 排序算法
    RuleDef::new(
        "quick_sort",
        Category::Sorting,
        "quick sort",
        r"(function\s+quickSort|quick_sort|QuickSort)\s*\([^)]*\)\s*\{[\s\S]*?pivot[\s\S]*?\}",
    ),
    RuleDef::new(
        "bubble_sort",
        Category::Sorting,
        "bubble sort",
        r"(function\s+bubbleSort|bubble_sort|BubbleSort)\s*\([^)]*\)\s*\{[\s\S]*?swap[\s\S]*?\}",
    ),
    RuleDef::new(
        "merge_sort",
        Category::Sorting,
        "merge sort",
        r"(function\s+mergeSort|merge_sort|MergeSort)\s*\([^)]*\)\s*\{[\s\S]*?merge[\s\S]*?\}",
    ),
    RuleDef::new(
        "heap_sort",
        Category::Sorting,
        "heap sort",
        r"(function\s+heapSort|heap_sort|HeapSort)\s*\([^)]*\)\s*\{[\s\S]*?heap[\s\S]*?\}",
    ),
    // 搜索算法
    RuleDef::new(
        "binary_search",
        Category::Search,
        "binary search",
        r"(function\s+binarySearch|binary_search|BinarySearch)\s*\([^)]*\)\s*\{[\s\S]*?while[\s\S]*?\}",
    ),
    RuleDef::new(
        "depth_first_search",
        Category::Search,
        "depth-first search",
        r"(function\s+(?:dfs|depthFirstSearch|depth_first_search))\s*\([^)]*\)\s*\{[\s\S]*?(?:visited|stack)[\s\S]*?\}",
    ),
    RuleDef::new(
        "breadth_first_search",
        Category::Search,
        "breadth-first search",
        r"(function\s+(?:bfs|breadthFirstSearch|breadth_first_search))\s*\([^)]*\)\s*\{[\s\S]*?(?:queue|visited)[\s\S]*?\}",
    ),
    // 数据结构
    RuleDef::new(
        "union_find",
        Category::DataStructure,
        "union-find",
        r"(class\s+(?:UnionFind|DisjointSet)|function\s+(?:union|find))\s*[\({][^)]*[\)}][\s\S]*?(?:parent|rank)[\s\S]*?\}",
    ),
    RuleDef::new(
        "segment_tree",
        Category::DataStructure,
        "segment tree",
        r"(class\s+SegmentTree|function\s+(?:build|update|query))\s*[\({][^)]*[\)}][\s\S]*?(?:left|right)[\s\S]*?\}",
    ),
    RuleDef::new(
        "fenwick_tree",
        Category::DataStructure,
        "Fenwick tree",
        r"(class\s+(?:FenwickTree|BIT)|function\s+(?:update|query))\s*[\({][^)]*[\)}][\s\S]*?(?:sum|add)[\s\S]*?\}",
    ),
    // 加密算法
    RuleDef::new(
        "md5",
        Category::Cryptography,
        "MD5 hash",
        r"function\s+simpleMD5\s*\([^)]*\)\s*\{[\s\S]*?hash[\s\S]*?\}",
    ),
];
