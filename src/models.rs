use std::ops::Range;

/// 默认可见窗口大小
pub const DEFAULT_WINDOW_SIZE: usize = 15;
/// 光标距离窗口上下边缘的最小行数
pub const DEFAULT_SCROLL_MARGIN: usize = 3;

/// 视口滚动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// 有序的 mod 列表，带光标和可见窗口
///
/// 所有操作在边界处都是 no-op，不会失败。
#[derive(Debug, Clone, PartialEq)]
pub struct ModList {
    items: Vec<String>,
    cursor: usize,
    start_index: usize,
    window_size: usize,
    scroll_margin: usize,
    inclusive_bound: bool,
}

impl ModList {
    pub fn new(items: Vec<String>) -> Self {
        Self::with_window(items, DEFAULT_WINDOW_SIZE, DEFAULT_SCROLL_MARGIN)
    }

    pub fn with_window(items: Vec<String>, window_size: usize, scroll_margin: usize) -> Self {
        Self {
            items,
            cursor: 0,
            start_index: 0,
            window_size: window_size.max(1),
            scroll_margin,
            inclusive_bound: true,
        }
    }

    /// `true` 时窗口渲染 `window_size + 1` 行
    pub fn with_inclusive_bound(mut self, inclusive: bool) -> Self {
        self.inclusive_bound = inclusive;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// 当前可见的索引范围，已截断到列表长度
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.start_index.min(self.items.len());
        let end = (self.start_index + self.span()).min(self.items.len());
        start..end
    }

    /// 实际渲染的行数
    fn span(&self) -> usize {
        self.window_size + usize::from(self.inclusive_bound)
    }

    // ============ 导航 ============

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.adjust_viewport(ScrollDirection::Up);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
        self.adjust_viewport(ScrollDirection::Down);
    }

    // ============ 重新排序 ============

    /// 与上一项交换，光标跟随被移动的项
    pub fn swap_with_previous(&mut self) {
        if self.cursor > 0 && self.cursor < self.items.len() {
            self.items.swap(self.cursor - 1, self.cursor);
            self.cursor -= 1;
        }
        self.adjust_viewport(ScrollDirection::Up);
    }

    /// 与下一项交换，光标跟随被移动的项
    pub fn swap_with_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.items.swap(self.cursor, self.cursor + 1);
            self.cursor += 1;
        }
        self.adjust_viewport(ScrollDirection::Down);
    }

    /// 每次最多滚动一行，让光标与窗口边缘保持 `scroll_margin` 行距离
    pub fn adjust_viewport(&mut self, direction: ScrollDirection) {
        let offset = self.cursor.saturating_sub(self.start_index);
        let last_visible_offset = self.span() - 1;
        match direction {
            ScrollDirection::Down => {
                let Some(last_item) = self.items.len().checked_sub(1) else {
                    return;
                };
                // 边距为 0 时阈值不能超过最后一个可见行
                let bottom_threshold = self
                    .window_size
                    .saturating_sub(self.scroll_margin)
                    .min(last_visible_offset);
                let cant_see_last_item = self.start_index + last_visible_offset < last_item;
                if offset > bottom_threshold && cant_see_last_item {
                    self.start_index += 1;
                }
            }
            ScrollDirection::Up => {
                let above_window = self.cursor < self.start_index;
                if (above_window || offset < self.scroll_margin) && self.start_index > 0 {
                    self.start_index -= 1;
                }
            }
        }
    }

    pub fn append_item(&mut self, name: String) {
        self.items.push(name);
    }
}

impl Default for ModList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(n: usize) -> ModList {
        ModList::new((1..=n).map(|i| format!("Brita_{i}")).collect())
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut list = mods(3);
        list.move_cursor_up();
        assert_eq!(list.cursor(), 0);

        for _ in 0..10 {
            list.move_cursor_down();
        }
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut list = ModList::default();
        list.move_cursor_down();
        list.move_cursor_up();
        list.swap_with_next();
        list.swap_with_previous();
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.start_index(), 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_swap_with_previous_tracks_item() {
        let mut list = mods(3);
        list.move_cursor_down();
        list.move_cursor_down();
        list.swap_with_previous();
        assert_eq!(list.items(), ["Brita_1", "Brita_3", "Brita_2"]);
        assert_eq!(list.cursor(), 1);
        assert_eq!(list.selected(), Some("Brita_3"));
    }

    #[test]
    fn test_swap_is_noop_at_boundaries() {
        let mut list = mods(3);
        list.swap_with_previous();
        assert_eq!(list.items(), ["Brita_1", "Brita_2", "Brita_3"]);
        assert_eq!(list.cursor(), 0);

        list.move_cursor_down();
        list.move_cursor_down();
        list.swap_with_next();
        assert_eq!(list.items(), ["Brita_1", "Brita_2", "Brita_3"]);
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_swap_previous_then_next_restores_order() {
        let mut list = mods(5);
        list.move_cursor_down();
        list.move_cursor_down();
        let before = list.clone();

        list.swap_with_previous();
        list.swap_with_next();
        assert_eq!(list.items(), before.items());
        assert_eq!(list.cursor(), before.cursor());
    }

    #[test]
    fn test_scrolls_down_one_row_past_threshold() {
        let mut list = mods(40);
        // 阈值 = 15 - 3 = 12，偏移量到 13 才开始滚动
        for _ in 0..12 {
            list.move_cursor_down();
        }
        assert_eq!(list.start_index(), 0);

        list.move_cursor_down();
        assert_eq!(list.cursor(), 13);
        assert_eq!(list.start_index(), 1);

        list.move_cursor_down();
        assert_eq!(list.start_index(), 2);
    }

    #[test]
    fn test_stops_scrolling_when_last_item_visible() {
        let mut list = mods(20);
        for _ in 0..30 {
            list.move_cursor_down();
        }
        assert_eq!(list.cursor(), 19);
        // start = 4 时 start + 15 < 19 不再成立
        assert_eq!(list.start_index(), 4);
        assert_eq!(list.visible_range(), 4..20);
    }

    #[test]
    fn test_exclusive_bound_keeps_last_item_visible() {
        let mut list = mods(20).with_inclusive_bound(false);
        for _ in 0..30 {
            list.move_cursor_down();
        }
        assert_eq!(list.cursor(), 19);
        assert_eq!(list.start_index(), 5);
        assert_eq!(list.visible_range(), 5..20);
    }

    #[test]
    fn test_zero_margin_single_row_window_follows_cursor() {
        let mut list = ModList::with_window((0..5).map(|i| i.to_string()).collect(), 1, 0)
            .with_inclusive_bound(false);
        for _ in 0..4 {
            list.move_cursor_down();
            assert_eq!(list.visible_range(), list.cursor()..list.cursor() + 1);
        }
        for _ in 0..4 {
            list.move_cursor_up();
            assert!(list.visible_range().contains(&list.cursor()));
        }
        assert_eq!(list.start_index(), 0);
    }

    #[test]
    fn test_scrolls_up_near_top_edge() {
        let mut list = mods(40);
        for _ in 0..20 {
            list.move_cursor_down();
        }
        let start = list.start_index();
        assert!(start > 0);

        // 偏移量降到边距以下之前不滚动
        while list.cursor() - list.start_index() > DEFAULT_SCROLL_MARGIN {
            list.move_cursor_up();
            assert_eq!(list.start_index(), start);
        }
        list.move_cursor_up();
        assert_eq!(list.start_index(), start - 1);
    }

    #[test]
    fn test_no_scroll_for_short_list() {
        let mut list = mods(5);
        for _ in 0..5 {
            list.move_cursor_down();
        }
        assert_eq!(list.start_index(), 0);
    }

    #[test]
    fn test_visible_range_bounds() {
        let list = mods(40);
        assert_eq!(list.visible_range(), 0..16);

        let list = mods(40).with_inclusive_bound(false);
        assert_eq!(list.visible_range(), 0..15);

        let list = mods(3);
        assert_eq!(list.visible_range(), 0..3);
    }

    #[test]
    fn test_append_accepts_any_name() {
        let mut list = mods(1);
        list.append_item(String::new());
        list.append_item("Brita_1".to_string());
        assert_eq!(list.items(), ["Brita_1", "", "Brita_1"]);
        assert_eq!(list.cursor(), 0);
    }
}
