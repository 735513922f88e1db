//! 员工/候选人记录
//!
//! 远程服务返回的记录是一个松散的可选字段包。这里将所有已知字段
//! 显式声明为类型化的 `Option`，未知字段统一落入 `extra` 扩展表。
//! 线上字段名（包括服务端的拼写错误）通过 `serde(rename)` 保留。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 将空字符串视为缺失值（与服务端的“空串即未填”约定一致）
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

// =========================================================
// 领域模型 (Domain Model)
// =========================================================

/// A candidate/employee record as returned by the remote service.
///
/// Field names on the wire are preserved verbatim, misspellings included
/// (`employee_fristname`, `Highest_qualification`, ...). Unknown or future
/// fields are captured in [`Employee::extra`] rather than dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    // --- identifiers ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<i64>,

    // --- name parts ---
    #[serde(rename = "employee_fristname", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "employee_middle_name", skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(rename = "employee_lastname", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "employee_nick_name", skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,

    // --- role ---
    #[serde(rename = "employee_designation", skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(rename = "employee_position", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(rename = "employee_department", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "Highest_qualification", skip_serializing_if = "Option::is_none")]
    pub highest_qualification: Option<String>,
    #[serde(rename = "employee_manager", skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_hire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    // --- contact ---
    #[serde(rename = "employee_email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "employee_officialemail", skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
    #[serde(rename = "employee_phone1", skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,
    #[serde(rename = "employee_phone2", skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,

    // --- address / origin ---
    #[serde(rename = "employee_address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_state: Option<String>,
    #[serde(rename = "postcode/zipcode", skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(rename = "employee_state", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        rename = "employee_local_government",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_government: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "employee_nationality", skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    // --- personal ---
    #[serde(
        rename = "employee_date_of_birth",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<String>,
    #[serde(
        rename = "employee_place_of_birth",
        skip_serializing_if = "Option::is_none"
    )]
    pub place_of_birth: Option<String>,
    #[serde(
        rename = "employee_maritalstatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub marital_status: Option<String>,
    #[serde(rename = "employee_sex", skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(
        rename = "employee_number_of_children",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_children: Option<String>,
    #[serde(
        rename = "employee_Identity_cardnumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity_card_number: Option<String>,
    #[serde(
        rename = "employee_means_of_identification",
        skip_serializing_if = "Option::is_none"
    )]
    pub means_of_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fathers_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mothers_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouses_name: Option<String>,

    // --- documents ---
    #[serde(rename = "offerletter_url", skip_serializing_if = "Option::is_none")]
    pub offer_letter_url: Option<String>,
    #[serde(rename = "offerletter", skip_serializing_if = "Option::is_none")]
    pub offer_letter: Option<String>,
    #[serde(
        rename = "employeeletter_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_letter_url: Option<String>,
    #[serde(
        rename = "employeepolicy_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_policy_url: Option<String>,
    #[serde(rename = "paddtional_info", skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    // --- payroll ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paygrade_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradelevel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_status: Option<i64>,

    // --- guarantor / next of kin ---
    #[serde(
        rename = "guarantor_frist_Name",
        skip_serializing_if = "Option::is_none"
    )]
    pub guarantor_first_name: Option<String>,
    #[serde(
        rename = "guarantor_last_Name",
        skip_serializing_if = "Option::is_none"
    )]
    pub guarantor_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantor_address: Option<String>,
    #[serde(
        rename = "employee_grelationship",
        skip_serializing_if = "Option::is_none"
    )]
    pub guarantor_relationship: Option<String>,
    #[serde(
        rename = "name_of_next_of_kin",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_of_kin_name: Option<String>,
    #[serde(rename = "relationship_nok", skip_serializing_if = "Option::is_none")]
    pub next_of_kin_relationship: Option<String>,
    #[serde(rename = "address_nok", skip_serializing_if = "Option::is_none")]
    pub next_of_kin_address: Option<String>,
    #[serde(rename = "mobile_no_nok", skip_serializing_if = "Option::is_none")]
    pub next_of_kin_mobile: Option<String>,

    // --- bookkeeping ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status: Option<i64>,
    #[serde(rename = "lastlogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,

    /// 未知/未来字段的扩展表：不丢弃，随记录一起持久化
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// =========================================================
// 字段回退链 (Aliased Field Fallbacks)
// =========================================================
//
// 服务端在不同端点/版本间对同一逻辑字段使用了不同的名字。
// 每条回退链只在这里定义一次，按优先级排列。

impl Employee {
    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    fn extra_u64(&self, key: &str) -> Option<u64> {
        match self.extra.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Tracking number: `tracking_number` → `employee_id` → record `id`.
    pub fn tracking_number(&self) -> Option<String> {
        if let Some(t) = non_empty(&self.tracking_number) {
            return Some(t.to_string());
        }
        if let Some(e) = non_empty(&self.employee_id) {
            return Some(e.to_string());
        }
        self.id.map(|id| id.to_string())
    }

    /// Contact email: `employee_email` → `employee_officialemail`.
    pub fn contact_email(&self) -> Option<&str> {
        non_empty(&self.email).or_else(|| non_empty(&self.official_email))
    }

    /// Company id: `company_id` → `companyId` (camel-cased alias seen in
    /// some responses; lives in the extension map).
    pub fn company_ref(&self) -> Option<u64> {
        self.company_id.or_else(|| self.extra_u64("companyId"))
    }

    /// Roster display name: bare `name` (display-ready roster shape) →
    /// joined name parts.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.extra_str("name") {
            return Some(name.to_string());
        }
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Roster display role: `employee_position` → bare `position` →
    /// `employee_department` → bare `department` → bare `title`.
    pub fn display_role(&self) -> Option<String> {
        non_empty(&self.position)
            .or_else(|| self.extra_str("position"))
            .or_else(|| non_empty(&self.department))
            .or_else(|| self.extra_str("department"))
            .or_else(|| self.extra_str("title"))
            .map(str::to_string)
    }

    /// Avatar image: bare `avatar` → `profile_image_url`.
    pub fn avatar_url(&self) -> Option<&str> {
        self.extra_str("avatar")
            .or_else(|| non_empty(&self.profile_image_url))
    }
}
