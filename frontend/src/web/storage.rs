//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。写入都是
//! 尽力而为：失败只记录到控制台，绝不向调用方传播。

use serde::{Serialize, de::DeserializeOwned};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值
    ///
    /// # 返回
    /// - `true` 如果操作成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对（purge，而非覆盖）
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 读取并反序列化 JSON 值
    ///
    /// 键不存在或内容损坏时返回 `None`（损坏内容会记录警告）。
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[Storage] discarding corrupt record {key:?}: {e}").into(),
                );
                None
            }
        }
    }

    /// 序列化并写入 JSON 值，尽力而为
    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => Self::set(key, &raw),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[Storage] failed to serialize {key:?}: {e}").into(),
                );
                false
            }
        }
    }
}
