//! 提取模块：从页面中收集待扫描的源码片段
pub mod fragment;
pub mod fragment_guard;
pub mod html_extractor;
pub mod fetcher;
pub mod page_source;

pub use self::fragment::{Fragment, FragmentOrigin, FragmentSource, StaticFragments};
pub use self::fragment_guard::FragmentGuard;
pub use self::html_extractor::{ExtractedPage, HtmlExtractor, ScriptEntry};
pub use self::fetcher::ScriptFetcher;
pub use self::page_source::PageSource;
