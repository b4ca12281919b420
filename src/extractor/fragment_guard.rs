//! 片段输入守卫：负责在进入正则匹配前
//! 保证输入「值得分析」且「不会拖垮引擎」
use tracing::debug;

pub struct FragmentGuard {
    max_len: usize,
}

impl FragmentGuard {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// 空白片段返回 None；超长片段按 UTF-8 边界截断（零拷贝）
    #[inline(always)]
    pub fn guard<'a>(&self, fragment: &'a str) -> Option<&'a str> {
        if fragment.trim().is_empty() {
            return None;
        }

        if fragment.len() <= self.max_len {
            return Some(fragment);
        }

        let mut cut = self.max_len;
        while !fragment.is_char_boundary(cut) {
            cut -= 1;
        }
        debug!("片段超长已截断：{} -> {} 字节", fragment.len(), cut);

        let truncated = &fragment[..cut];
        if truncated.trim().is_empty() {
            None
        } else {
            Some(truncated)
        }
    }
}
