//! 主题与侧边栏状态
//!
//! 纯展示层的两个开关。暗色模式独立持久化到 `darkMode` 键（与两个
//! 数据 store 的记录无关）；侧边栏折叠状态只活在内存里。

use leptos::prelude::*;

use crate::web::LocalStorage;

/// 暗色模式的持久化键（JSON 布尔值）
const STORAGE_DARK_MODE_KEY: &str = "darkMode";

/// 把 `dark` class 应用到文档根元素
fn apply_dark_class(enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let _ = if enabled {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: ReadSignal<bool>,
    set_is_dark: WriteSignal<bool>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = !self.is_dark.get_untracked();
        self.set_is_dark.set(next);
        apply_dark_class(next);
        LocalStorage::set_json(STORAGE_DARK_MODE_KEY, &next);
    }
}

/// 创建主题上下文并注入 Context；立即应用持久化的偏好
pub fn provide_theme() {
    let initial = LocalStorage::get_json::<bool>(STORAGE_DARK_MODE_KEY).unwrap_or(false);
    apply_dark_class(initial);
    let (is_dark, set_is_dark) = signal(initial);
    provide_context(ThemeContext {
        is_dark,
        set_is_dark,
    });
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// 侧边栏上下文（不持久化）
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub collapsed: ReadSignal<bool>,
    set_collapsed: WriteSignal<bool>,
}

impl SidebarContext {
    pub fn toggle(&self) {
        self.set_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }
}

pub fn provide_sidebar() {
    let (collapsed, set_collapsed) = signal(false);
    provide_context(SidebarContext {
        collapsed,
        set_collapsed,
    });
}

pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>().expect("SidebarContext should be provided")
}
