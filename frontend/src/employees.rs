//! 团队名单模块
//!
//! 单一的拉取缓存：idle/loading/loaded/errored，没有登录/登出的
//! 生命周期概念，登出后依旧保留。每次成功拉取都无条件覆盖整个
//! 列表；快速连续拉取通过请求代号排序，过期结果直接丢弃，保证
//! 最后一次发出的请求获胜。

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use onboarding_shared::Employee;

use crate::api::PortalApi;
use crate::web::LocalStorage;

/// 持久化键。只落盘 `employees` 数组。
const STORAGE_EMPLOYEES_KEY: &str = "employees";

/// 名单状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeesState {
    /// 最近一次成功拉取的名单
    pub employees: Vec<Employee>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// 请求代号，单调递增
    generation: u64,
}

impl EmployeesState {
    /// 开始一次拉取，返回本次请求的代号
    pub fn fetch_pending(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.generation
    }

    /// 应用拉取结果；过期代号的结果被丢弃，返回是否已应用
    pub fn fetch_fulfilled(&mut self, generation: u64, employees: Vec<Employee>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.is_loading = false;
        self.error = None;
        self.employees = employees;
        true
    }

    /// 记录拉取失败；上一次成功的名单保持不动
    pub fn fetch_failed(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.is_loading = false;
        self.error = Some(message);
        true
    }
}

/// 持久化白名单
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedEmployees {
    employees: Vec<Employee>,
}

/// 名单上下文
#[derive(Clone, Copy)]
pub struct EmployeesContext {
    pub state: ReadSignal<EmployeesState>,
    pub set_state: WriteSignal<EmployeesState>,
}

impl EmployeesContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(EmployeesState::default());
        Self { state, set_state }
    }
}

impl Default for EmployeesContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取名单上下文
pub fn use_employees() -> EmployeesContext {
    use_context::<EmployeesContext>().expect("EmployeesContext should be provided")
}

/// 初始化名单状态：从 LocalStorage 恢复上次的列表
pub fn init_employees(ctx: &EmployeesContext) {
    let Some(persisted) = LocalStorage::get_json::<PersistedEmployees>(STORAGE_EMPLOYEES_KEY)
    else {
        return;
    };
    ctx.set_state
        .update(|state| state.employees = persisted.employees);
}

/// 拉取公司团队名单
///
/// `employee_id` 作为端点的授权/过滤参数传入；缺省时客户端会
/// 补一个服务端接受的默认值。
pub async fn fetch_employees(ctx: &EmployeesContext, company_id: u64, employee_id: Option<u64>) {
    let Some(generation) = ctx.set_state.try_update(|state| state.fetch_pending()) else {
        return;
    };

    match PortalApi::default()
        .fetch_employees(company_id, employee_id)
        .await
    {
        Ok(list) => {
            let applied = ctx
                .set_state
                .try_update(|state| state.fetch_fulfilled(generation, list))
                .unwrap_or(false);
            if applied {
                let record = PersistedEmployees {
                    employees: ctx.state.get_untracked().employees,
                };
                LocalStorage::set_json(STORAGE_EMPLOYEES_KEY, &record);
            }
        }
        Err(message) => {
            ctx.set_state
                .try_update(|state| state.fetch_failed(generation, message));
        }
    }
}

#[cfg(test)]
mod tests;
