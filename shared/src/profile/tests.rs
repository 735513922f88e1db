use super::*;
use crate::employee::Employee;

fn employee(fields: &[(&str, &str)]) -> Employee {
    let mut user = Employee::default();
    for (key, value) in fields {
        let value = Some(value.to_string());
        match *key {
            "first" => user.first_name = value,
            "middle" => user.middle_name = value,
            "last" => user.last_name = value,
            "nick" => user.nick_name = value,
            "email" => user.email = value,
            "phone" => user.phone1 = value,
            "marital" => user.marital_status = value,
            "city" => user.city = value,
            "address" => user.address = value,
            "dob" => user.date_of_birth = value,
            "sex" => user.sex = value,
            "designation" => user.designation = value,
            "position" => user.position = value,
            "department" => user.department = value,
            "qualification" => user.highest_qualification = value,
            other => panic!("unknown field {other}"),
        }
    }
    user
}

// =========================================================
// Names
// =========================================================

#[test]
fn full_name_joins_parts_with_single_spaces() {
    let user = employee(&[("first", "Ada"), ("middle", "M."), ("last", "Lovelace")]);
    assert_eq!(full_name(Some(&user)), "Ada M. Lovelace");
}

#[test]
fn full_name_skips_empty_parts() {
    let user = employee(&[("first", "Ada"), ("last", "Lovelace")]);
    assert_eq!(full_name(Some(&user)), "Ada Lovelace");

    let only_last = employee(&[("last", "Lovelace")]);
    assert_eq!(full_name(Some(&only_last)), "Lovelace");

    let blank_middle = employee(&[("first", "Ada"), ("middle", "  "), ("last", "Lovelace")]);
    assert_eq!(full_name(Some(&blank_middle)), "Ada Lovelace");
}

#[test]
fn full_name_falls_back_to_user_only_when_all_parts_empty() {
    assert_eq!(full_name(None), "User");
    assert_eq!(full_name(Some(&Employee::default())), "User");
    assert_eq!(full_name(Some(&employee(&[("first", "Ada")]))), "Ada");
}

#[test]
fn greeting_prefers_first_name_then_nickname() {
    assert_eq!(
        greeting_name(Some(&employee(&[("first", "Ada"), ("nick", "Lady A")]))),
        "Ada"
    );
    assert_eq!(
        greeting_name(Some(&employee(&[("nick", "Lady A")]))),
        "Lady A"
    );
    assert_eq!(greeting_name(Some(&Employee::default())), "there");
    assert_eq!(greeting_name(None), "there");
}

// =========================================================
// Avatar
// =========================================================

#[test]
fn initials_use_first_and_last_name() {
    assert_eq!(
        initials(Some(&employee(&[("first", "ada"), ("last", "lovelace")]))),
        "AL"
    );
    assert_eq!(initials(Some(&employee(&[("first", "Ada")]))), "A");
    assert_eq!(initials(Some(&employee(&[("last", "Lovelace")]))), "L");
    assert_eq!(initials(Some(&Employee::default())), "U");
    assert_eq!(initials(None), "U");
}

#[test]
fn avatar_color_is_selected_by_initial_code_point() {
    let user = employee(&[("first", "Ada"), ("last", "Lovelace")]);
    // 'A' == 65, 65 % 7 == 2
    assert_eq!(avatar_color(Some(&user)), AVATAR_PALETTE[2]);
    // fallback initial 'U' == 85, 85 % 7 == 1
    assert_eq!(avatar_color(None), AVATAR_PALETTE[1]);
}

// =========================================================
// Title / role lines
// =========================================================

#[test]
fn title_line_joins_non_empty_parts() {
    let user = employee(&[
        ("designation", "Engineer"),
        ("department", "Platform"),
        ("qualification", "MSc"),
    ]);
    assert_eq!(
        title_line(Some(&user)).as_deref(),
        Some("Engineer • Platform • MSc")
    );
    assert_eq!(title_line(Some(&Employee::default())), None);
    assert_eq!(title_line(None), None);
}

#[test]
fn role_and_education_lines_have_fixed_fallbacks() {
    assert_eq!(role_line(Some(&employee(&[("position", "Analyst")]))), "Analyst");
    assert_eq!(role_line(Some(&Employee::default())), "Employee");
    assert_eq!(
        education_line(Some(&employee(&[("qualification", "BSc")]))),
        "BSc"
    );
    assert_eq!(education_line(None), "Not specified");
}

// =========================================================
// Onboarding progress
// =========================================================

#[test]
fn progress_is_zero_without_a_user() {
    assert_eq!(onboarding_progress(None), 0);
    assert_eq!(onboarding_progress(Some(&Employee::default())), 0);
}

#[test]
fn progress_counts_each_tracked_field_once() {
    let user = employee(&[
        ("first", "Ada"),
        ("last", "Lovelace"),
        ("email", "ada@example.com"),
        ("phone", "0700000000"),
    ]);
    assert_eq!(onboarding_progress(Some(&user)), 50);
}

#[test]
fn progress_reaches_100_with_all_eight_fields() {
    let user = employee(&[
        ("first", "Ada"),
        ("last", "Lovelace"),
        ("email", "ada@example.com"),
        ("phone", "0700000000"),
        ("marital", "single"),
        ("city", "London"),
        ("dob", "1815-12-10"),
        ("sex", "female"),
    ]);
    assert_eq!(onboarding_progress(Some(&user)), 100);
}

#[test]
fn city_and_address_share_one_slot() {
    let both = employee(&[("city", "London"), ("address", "12 St James Sq")]);
    let city_only = employee(&[("city", "London")]);
    let address_only = employee(&[("address", "12 St James Sq")]);
    assert_eq!(onboarding_progress(Some(&both)), 13);
    assert_eq!(onboarding_progress(Some(&city_only)), 13);
    assert_eq!(onboarding_progress(Some(&address_only)), 13);
}

#[test]
fn progress_is_monotone_as_fields_fill_in() {
    let fields = [
        ("first", "Ada"),
        ("last", "Lovelace"),
        ("email", "ada@example.com"),
        ("phone", "0700000000"),
        ("marital", "single"),
        ("city", "London"),
        ("dob", "1815-12-10"),
        ("sex", "female"),
    ];
    let mut previous = 0;
    for k in 0..=fields.len() {
        let user = employee(&fields[..k]);
        let progress = onboarding_progress(Some(&user));
        assert!(progress >= previous, "progress dropped at k={k}");
        assert_eq!(progress, ((k as u32 * 100 + 4) / 8) as u8);
        previous = progress;
    }
}

// =========================================================
// Birth year
// =========================================================

#[test]
fn birth_year_accepts_common_service_formats() {
    assert_eq!(birth_year(Some("1990-04-12")), Some(1990));
    assert_eq!(birth_year(Some("1990-04-12 00:00:00")), Some(1990));
    assert_eq!(birth_year(Some("1990-04-12T00:00:00+01:00")), Some(1990));
    assert_eq!(birth_year(Some("12/04/1990")), Some(1990));
}

#[test]
fn birth_year_rejects_garbage() {
    assert_eq!(birth_year(None), None);
    assert_eq!(birth_year(Some("")), None);
    assert_eq!(birth_year(Some("not a date")), None);
}
