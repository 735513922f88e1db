//! 派生展示数据
//!
//! 基于会话中的员工记录计算的纯函数：姓名、头像、职位行、
//! 入职完成度。每次读取都重新计算，不做缓存（底层记录随时可能变化）。

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::employee::{Employee, non_empty};

/// 头像底色盘，按首字母的码点取模选择
pub const AVATAR_PALETTE: [&str; 7] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-yellow-500",
    "bg-red-500",
    "bg-teal-500",
];

/// 入职进度统计的字段数
const TRACKED_FIELDS: u32 = 8;

/// Full name: first/middle/last joined with single spaces, skipping empty
/// parts; `"User"` when everything is empty or no record is loaded.
pub fn full_name(user: Option<&Employee>) -> String {
    let Some(user) = user else {
        return "User".to_string();
    };
    let parts: Vec<&str> = [&user.first_name, &user.middle_name, &user.last_name]
        .into_iter()
        .filter_map(non_empty)
        .collect();
    if parts.is_empty() {
        "User".to_string()
    } else {
        parts.join(" ")
    }
}

/// Greeting name: first name → nickname → `"there"`.
pub fn greeting_name(user: Option<&Employee>) -> String {
    user.and_then(|u| {
        non_empty(&u.first_name)
            .or_else(|| non_empty(&u.nick_name))
            .map(str::to_string)
    })
    .unwrap_or_else(|| "there".to_string())
}

/// Avatar initials: first-name initial + last-name initial, whichever single
/// initial is present otherwise, `"U"` when neither is.
pub fn initials(user: Option<&Employee>) -> String {
    let Some(user) = user else {
        return "U".to_string();
    };
    let first = non_empty(&user.first_name)
        .and_then(|s| s.chars().next())
        .map(|c| c.to_uppercase().to_string());
    let last = non_empty(&user.last_name)
        .and_then(|s| s.chars().next())
        .map(|c| c.to_uppercase().to_string());

    match (first, last) {
        (Some(f), Some(l)) => format!("{f}{l}"),
        (Some(f), None) => f,
        (None, Some(l)) => l,
        (None, None) => "U".to_string(),
    }
}

/// Avatar background class, keyed off the first initial's code point.
pub fn avatar_color(user: Option<&Employee>) -> &'static str {
    let initials = initials(user);
    let code = initials.chars().next().map(|c| c as u32).unwrap_or(0);
    AVATAR_PALETTE[(code % AVATAR_PALETTE.len() as u32) as usize]
}

/// Title line: designation, position, department and highest qualification
/// joined with `" • "`; `None` when all are empty.
pub fn title_line(user: Option<&Employee>) -> Option<String> {
    let user = user?;
    let parts: Vec<&str> = [
        &user.designation,
        &user.position,
        &user.department,
        &user.highest_qualification,
    ]
    .into_iter()
    .filter_map(non_empty)
    .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

/// Role line for the offer page: designation → position → `"Employee"`.
pub fn role_line(user: Option<&Employee>) -> String {
    user.and_then(|u| {
        non_empty(&u.designation)
            .or_else(|| non_empty(&u.position))
            .map(str::to_string)
    })
    .unwrap_or_else(|| "Employee".to_string())
}

/// Education line: highest qualification, else `"Not specified"`.
pub fn education_line(user: Option<&Employee>) -> String {
    user.and_then(|u| non_empty(&u.highest_qualification).map(str::to_string))
        .unwrap_or_else(|| "Not specified".to_string())
}

/// Onboarding completion percentage.
///
/// `round(100 * k / 8)` over the eight tracked profile fields. City and
/// address count as one slot.
pub fn onboarding_progress(user: Option<&Employee>) -> u8 {
    let Some(user) = user else { return 0 };
    let mut completed = 0u32;
    if non_empty(&user.first_name).is_some() {
        completed += 1;
    }
    if non_empty(&user.last_name).is_some() {
        completed += 1;
    }
    if non_empty(&user.email).is_some() {
        completed += 1;
    }
    if non_empty(&user.phone1).is_some() {
        completed += 1;
    }
    if non_empty(&user.marital_status).is_some() {
        completed += 1;
    }
    if non_empty(&user.city).is_some() || non_empty(&user.address).is_some() {
        completed += 1;
    }
    if non_empty(&user.date_of_birth).is_some() {
        completed += 1;
    }
    if non_empty(&user.sex).is_some() {
        completed += 1;
    }
    ((completed * 100 + TRACKED_FIELDS / 2) / TRACKED_FIELDS) as u8
}

/// Year component of a birth-date string.
///
/// 服务端日期格式不统一，按常见格式依次尝试。
pub fn birth_year(date: Option<&str>) -> Option<i32> {
    let date = date?.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.year());
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.year());
    }
    NaiveDate::parse_from_str(date, "%d/%m/%Y").ok().map(|d| d.year())
}

#[cfg(test)]
mod tests;
