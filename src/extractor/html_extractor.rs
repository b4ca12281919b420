//! HTML片段提取器
//! 负责从HTML中提取内联脚本、外部脚本地址与代码块文本
//! 脚本按词法单元流采集；代码块需要完整的树构建（隐式闭合、嵌套），基于DOM查询

use std::cell::RefCell;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 代码承载元素：pre / code / class 含 code / CodeMirror 编辑器
const CODE_BEARING_SELECTOR_STR: &str = r#"pre, code, .CodeMirror, [class*="code"]"#;

static CODE_BEARING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(CODE_BEARING_SELECTOR_STR).expect("代码块选择器解析失败")
});

/// 脚本条目（保持文档顺序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEntry {
    /// 内联脚本源码
    Inline(String),
    /// 外部脚本 src 原始值
    External(String),
}

/// 页面提取结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    pub scripts: Vec<ScriptEntry>,
    pub code_blocks: Vec<String>,
}

impl ExtractedPage {
    /// 外部脚本地址列表
    pub fn script_srcs(&self) -> Vec<&str> {
        self.scripts
            .iter()
            .filter_map(|entry| match entry {
                ScriptEntry::External(src) => Some(src.as_str()),
                ScriptEntry::Inline(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Default)]
struct SinkState {
    scripts: Vec<ScriptEntry>,
    // 当前内联脚本缓冲区（None 表示不在脚本内）
    script_text: Option<String>,
}

#[derive(Debug, Default)]
struct PageSink {
    state: RefCell<SinkState>,
}

impl TokenSink for PageSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        let mut state = self.state.borrow_mut();
        match token {
            Token::TagToken(tag) => return state.process_tag(tag),
            Token::CharacterTokens(text) => state.push_text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl SinkState {
    fn process_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let Tag {
            kind,
            name,
            self_closing,
            attrs,
            ..
        } = tag;
        let name: &str = &name;

        match kind {
            TagKind::StartTag => {
                match name {
                    "script" => {
                        match find_attr(&attrs, "src") {
                            Some(src) if !src.trim().is_empty() => {
                                self.scripts.push(ScriptEntry::External(src.trim().to_string()));
                                self.script_text = None;
                            }
                            _ => self.script_text = Some(String::new()),
                        }
                        if self_closing {
                            self.close_script();
                            return TokenSinkResult::Continue;
                        }
                        // 脚本内容按原始数据处理，避免 `a < b` 被当作标签
                        TokenSinkResult::RawData(RawKind::ScriptData)
                    }
                    "style" => TokenSinkResult::RawData(RawKind::Rawtext),
                    "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
                    _ => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                if name == "script" {
                    self.close_script();
                }
                TokenSinkResult::Continue
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(buffer) = self.script_text.as_mut() {
            buffer.push_str(text);
        }
    }

    fn close_script(&mut self) {
        if let Some(text) = self.script_text.take() {
            if !text.trim().is_empty() {
                self.scripts.push(ScriptEntry::Inline(text));
            }
        }
    }

    fn finish(mut self) -> Vec<ScriptEntry> {
        // 未闭合的脚本在文档结束时一并收尾
        self.close_script();
        self.scripts
    }
}

fn find_attr<'a>(attrs: &'a [Attribute], attr_name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|attr| &*attr.name.local == attr_name)
        .map(|attr| &*attr.value)
}

/// HTML片段提取器
pub struct HtmlExtractor;

impl HtmlExtractor {
    /// 从HTML字符串提取脚本与代码块
    pub fn extract(html: &str) -> ExtractedPage {
        ExtractedPage {
            scripts: Self::extract_scripts(html),
            code_blocks: Self::extract_code_blocks(html),
        }
    }

    /// 脚本条目（文档顺序）
    fn extract_scripts(html: &str) -> Vec<ScriptEntry> {
        let tokenizer = Tokenizer::new(PageSink::default(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink.state.into_inner().finish()
    }

    /// 每个代码承载元素的文本内容（文档顺序，嵌套元素各自产出）
    fn extract_code_blocks(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&CODE_BEARING_SELECTOR)
            .map(|element| element.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_extractor() {
        let html = r#"
            <script src="/vendor/lib.js"></script>
            <script>
              for (let i = 0; i < n; i++) { total += a[i]; }
            </script>
            <pre class="listing">let a = b &lt; c;</pre>
            <div class="CodeMirror">const x = 1;</div>
            <p>plain text</p>
        "#;

        let page = HtmlExtractor::extract(html);

        assert_eq!(page.script_srcs(), vec!["/vendor/lib.js"]);
        assert_eq!(page.scripts.len(), 2);
        match &page.scripts[1] {
            ScriptEntry::Inline(text) => assert!(text.contains("i < n; i++")),
            other => panic!("期望内联脚本，实际：{:?}", other),
        }

        assert_eq!(
            page.code_blocks,
            vec!["let a = b < c;".to_string(), "const x = 1;".to_string()]
        );
    }

    #[test]
    fn test_blank_inline_script_skipped() {
        let page = HtmlExtractor::extract("<script>   </script><script src=''></script>");
        assert!(page.scripts.is_empty());
    }

    #[test]
    fn test_nested_code_elements_each_yield_a_block() {
        let page = HtmlExtractor::extract(
            "<pre><code>function quickSort(a) { const pivot = a[0]; }</code></pre>",
        );
        assert_eq!(
            page.code_blocks,
            vec![
                "function quickSort(a) { const pivot = a[0]; }".to_string(),
                "function quickSort(a) { const pivot = a[0]; }".to_string(),
            ]
        );
    }

    #[test]
    fn test_implicitly_closed_elements_do_not_swallow_later_text() {
        let html = r#"<ul><li class="code-line">a = 1;<li class="code-line">b = 2;</ul><p>unrelated prose</p><footer>copyright</footer>"#;
        let page = HtmlExtractor::extract(html);
        assert_eq!(page.code_blocks, vec!["a = 1;".to_string(), "b = 2;".to_string()]);
    }

    #[test]
    fn test_class_match_is_substring() {
        let page = HtmlExtractor::extract(
            r#"<div class="sourcecode">x = 1;</div><div class="prose">y = 2;</div>"#,
        );
        assert_eq!(page.code_blocks, vec!["x = 1;".to_string()]);
    }
}
