//! 入职门户的共享领域层
//!
//! 与目标平台无关的纯逻辑：线上协议类型、员工记录、派生展示数据。
//! 前端（wasm）与原生测试共用同一份实现。

pub mod employee;
pub mod profile;
pub mod protocol;

pub use employee::Employee;
pub use protocol::{
    AcceptOfferRequest, AcceptOfferResponse, ApiRequest, ApiStatus, EmployeesResponse,
    FetchEmployeesRequest, HttpMethod, LoginRequest, LoginResponse, OfferFieldError,
};
