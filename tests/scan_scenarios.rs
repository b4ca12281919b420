//! 端到端扫描场景：页面/片段 -> 检测结果 -> 结果交付

use rsalgoscan::{
    AlgorithmDetector, Category, ConfigManager, DescriptionResolver, Message, PageSource,
    ResultsStore, StaticFragments, Fragment, detect_algorithms, init_algoscan,
};

const QUICK_SORT: &str = r#"
function quickSort(arr) {
  if (arr.length < 2) return arr;
  const pivot = arr[0];
  const lo = arr.slice(1).filter(x => x < pivot);
  const hi = arr.slice(1).filter(x => x >= pivot);
  return quickSort(lo).concat([pivot], quickSort(hi));
}
"#;

const BINARY_SEARCH: &str = r#"
function binarySearch(arr, target) {
  let lo = 0, hi = arr.length - 1;
  while (lo <= hi) {
    const mid = (lo + hi) >> 1;
    if (arr[mid] === target) return mid;
    if (arr[mid] < target) lo = mid + 1; else hi = mid - 1;
  }
  return -1;
}
"#;

fn detector() -> AlgorithmDetector {
    AlgorithmDetector::new(ConfigManager::get_default()).unwrap()
}

#[test]
fn quick_sort_fragment_yields_one_sorting_finding() {
    let result = detector().scan([QUICK_SORT]);
    assert_eq!(result.len(), 1);

    let groups = result.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, Category::Sorting);

    let finding = &result.findings()[0];
    assert_eq!(finding.name, "quick sort");
    assert_eq!(finding.description, *DescriptionResolver::resolve("quick_sort"));
    assert!(finding.snippet.contains("pivot"));
}

#[test]
fn binary_search_fragment_is_detected() {
    let result = detector().scan([BINARY_SEARCH]);
    let finding = result
        .findings()
        .iter()
        .find(|f| f.category == Category::Search)
        .unwrap();
    assert_eq!(finding.name, "binary search");
    assert_eq!(finding.description.complexity, "O(log n)");
}

#[test]
fn page_without_code_yields_empty_state() {
    let result = detector().scan(Vec::<&str>::new());
    assert!(result.is_empty());

    let store = ResultsStore::new();
    store.handle(Message::AlgorithmsDetected { algorithms: result });
    let reply = store.handle(Message::GetAlgorithms).unwrap();
    assert_eq!(reply.algorithms.map(|r| r.len()), Some(0));
}

#[test]
fn two_sorting_fragments_group_together_in_order() {
    let result = detector().scan([QUICK_SORT, "function bubbleSort(a) { swap(a, 0, 1); }"]);
    let groups = result.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, Category::Sorting);

    let names: Vec<&str> = groups[0].items.iter().map(|item| item.finding.name.as_str()).collect();
    assert_eq!(names, vec!["quick sort", "bubble sort"]);
}

#[test]
fn same_rule_in_two_fragments_yields_two_findings() {
    let result = detector().scan([QUICK_SORT, QUICK_SORT]);
    assert_eq!(result.len(), 2);

    let groups = result.groups();
    assert_eq!(groups.len(), 1);
    let indexes: Vec<usize> = groups[0].items.iter().map(|item| item.index).collect();
    assert_eq!(indexes, vec![0, 1]);
    for item in &groups[0].items {
        let finding = result.get(item.index).unwrap();
        assert_eq!(finding.name, "quick sort");
        assert_eq!(finding, item.finding);
    }
}

#[test]
fn repeated_scans_are_identical() {
    let detector = detector();
    let fragments = [QUICK_SORT, BINARY_SEARCH];
    assert_eq!(detector.scan(fragments), detector.scan(fragments));
}

#[test]
fn global_detector_matches_explicit_detector() {
    init_algoscan().unwrap();
    let global = detect_algorithms([QUICK_SORT]).unwrap();
    assert_eq!(global, detector().scan([QUICK_SORT]));
}

#[tokio::test]
async fn page_scan_covers_scripts_and_code_blocks() {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><script src="/static/app.js"></script></head>
<body>
  <script>{}</script>
  <div class="code-container"><pre><code>{}</code></pre></div>
</body>
</html>"#,
        BINARY_SEARCH,
        "function bubbleSort(a) { swap(a, 0, 1); }"
    );
    let config = ConfigManager::custom().fetch_external_scripts(false).build();
    let source = PageSource::new(html, None, config.clone());

    let result = AlgorithmDetector::new(config).unwrap().scan_source(&source).await.unwrap();
    let names: Vec<&str> = result.findings().iter().map(|f| f.name.as_str()).collect();

    let search = names.iter().position(|n| *n == "binary search").unwrap();
    let bubble = names.iter().position(|n| *n == "bubble sort").unwrap();
    // 脚本片段先于代码块片段
    assert!(search < bubble);
}

#[tokio::test]
async fn nested_code_elements_are_scanned_separately() {
    let html = format!("<ul><li><pre><code>{}</code></pre><li>plain prose</ul>", QUICK_SORT);
    let config = ConfigManager::custom().fetch_external_scripts(false).build();
    let source = PageSource::new(html, None, config.clone());

    let result = AlgorithmDetector::new(config).unwrap().scan_source(&source).await.unwrap();
    // <pre> 与其内部的 <code> 各自作为一个片段
    assert_eq!(result.len(), 2);
    assert!(result.findings().iter().all(|f| f.name == "quick sort"));
}

#[tokio::test]
async fn published_results_reach_subscribers_in_wire_shape() {
    let store = ResultsStore::new();
    let mut subscription = store.subscribe();

    let source = StaticFragments::new(vec![Fragment::inline(QUICK_SORT)]);
    let result = detector().scan_source(&source).await.unwrap();
    store.handle(Message::AlgorithmsDetected { algorithms: result });

    let pushed = subscription.next_message().await.unwrap();
    let value = serde_json::to_value(&pushed).unwrap();
    assert_eq!(value["type"], "UPDATE_ALGORITHMS");
    assert_eq!(value["algorithms"][0]["category"], "sorting algorithms");
    assert_eq!(value["algorithms"][0]["name"], "quick sort");
    assert!(value["algorithms"][0]["code"].as_str().unwrap().starts_with("function quickSort"));
    assert_eq!(value["algorithms"][0]["description"]["complexity"], "O(n log n) average");
}
