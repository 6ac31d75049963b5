use rattendance::core::calendar::{WeekStart, first_weekday_of_month_from, is_leap_year, month_grid};
use rattendance::core::holidays::holiday_name;
use rattendance::core::input::{from_hours_minutes, parse_minutes};
use rattendance::export::range::parse_range;
use rattendance::{DayKey, MonthKey, YearKey, days_in_month, first_weekday_of_month};

#[test]
fn test_first_weekday_of_month() {
    // 2025-01-01 was a Wednesday
    assert_eq!(first_weekday_of_month(2025, 1).expect("valid"), 3);
    // 2025-06-01 was a Sunday
    assert_eq!(first_weekday_of_month(2025, 6).expect("valid"), 0);
    // 2025-11-01 was a Saturday
    assert_eq!(first_weekday_of_month(2025, 11).expect("valid"), 6);

    assert_eq!(
        first_weekday_of_month_from(2025, 6, WeekStart::Monday).expect("valid"),
        6
    );
    assert!(first_weekday_of_month(2025, 13).is_err());
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2025, 1).expect("valid"), 31);
    assert_eq!(days_in_month(2025, 4).expect("valid"), 30);
    assert_eq!(days_in_month(2025, 2).expect("valid"), 28);
    assert_eq!(days_in_month(2024, 2).expect("valid"), 29);
    assert_eq!(days_in_month(1900, 2).expect("valid"), 28);
    assert_eq!(days_in_month(2000, 2).expect("valid"), 29);
    assert!(days_in_month(2025, 0).is_err());

    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));
}

#[test]
fn test_month_grid_shape() {
    let march: MonthKey = "2025-03".parse().expect("valid month");
    let cells = month_grid(&march, WeekStart::Sunday);

    // 2025-03-01 is a Saturday: six leading blanks
    assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 6);
    assert_eq!(cells.iter().flatten().count(), 31);
    assert_eq!(cells[6].map(|k| k.to_string()).as_deref(), Some("2025-03-01"));

    let monday = month_grid(&march, WeekStart::Monday);
    assert_eq!(monday.iter().take_while(|c| c.is_none()).count(), 5);
}

#[test]
fn test_month_key_navigation() {
    let jan: MonthKey = "2025-01".parse().expect("valid");
    let dec: MonthKey = "2024-12".parse().expect("valid");

    assert_eq!(jan.pred(), dec);
    assert_eq!(dec.succ(), jan);
    assert_eq!(jan.shift(-13).to_string(), "2023-12");
    assert_eq!(jan.shift(14).to_string(), "2026-03");
    assert_eq!(jan.shift(0), jan);
}

#[test]
fn test_month_key_shift_saturates() {
    let jan: MonthKey = "2025-01".parse().expect("valid");

    assert_eq!(jan.shift(i32::MAX).to_string(), "9999-12");
    assert_eq!(jan.shift(i32::MIN).to_string(), "0000-01");

    let last: MonthKey = "9999-12".parse().expect("valid");
    assert_eq!(last.succ(), last);
    assert_eq!(last.shift(1), last);
    assert_eq!(last.shift(-1).to_string(), "9999-11");
}

#[test]
fn test_month_key_parsing_is_strict() {
    assert!("+202-03".parse::<MonthKey>().is_err());
    assert!("2025-+3".parse::<MonthKey>().is_err());
    assert!("2025- 3".parse::<MonthKey>().is_err());
    assert!("2025-3".parse::<MonthKey>().is_err());
    assert_eq!("0000-01".parse::<MonthKey>().expect("valid").to_string(), "0000-01");
}

#[test]
fn test_keys_are_prefixes() {
    let d: DayKey = "2025-03-05".parse().expect("valid");
    assert!(d.to_string().starts_with(&d.month_key().prefix()));
    assert!(d.to_string().starts_with(&d.year_key().prefix()));

    let months: Vec<String> = YearKey::new(2025)
        .expect("valid")
        .months()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(months.first().map(String::as_str), Some("2025-01"));
    assert_eq!(months.last().map(String::as_str), Some("2025-12"));
}

#[test]
fn test_day_key_parsing_is_strict() {
    assert!("2025-03-05".parse::<DayKey>().is_ok());
    assert!("2025-3-5".parse::<DayKey>().is_err());
    assert!("2025-02-30".parse::<DayKey>().is_err());
    assert!("2025/03/05".parse::<DayKey>().is_err());
    assert!("20250305".parse::<DayKey>().is_err());
    assert!("2025-13".parse::<MonthKey>().is_err());
}

#[test]
fn test_parse_minutes_forms() {
    assert_eq!(parse_minutes("").expect("empty"), 0);
    assert_eq!(parse_minutes("90").expect("plain"), 90);
    assert_eq!(parse_minutes("1:30").expect("colon"), 90);
    assert_eq!(parse_minutes("1h30m").expect("h/m"), 90);
    assert_eq!(parse_minutes("8h").expect("hours"), 480);
    assert_eq!(parse_minutes("45m").expect("minutes"), 45);
    assert_eq!(parse_minutes("45min").expect("min"), 45);
    assert_eq!(parse_minutes("1.5h").expect("fraction"), 90);
    assert_eq!(parse_minutes("-30").expect("negative"), 0);

    assert!(parse_minutes("abc").is_err());
    assert!(parse_minutes("1:75").is_err());
    assert!(parse_minutes("-").is_err());
}

#[test]
fn test_from_hours_minutes_clamps() {
    assert_eq!(from_hours_minutes(1, 30), 90);
    assert_eq!(from_hours_minutes(-2, 15), 15);
    assert_eq!(from_hours_minutes(2, -5), 120);
    assert_eq!(from_hours_minutes(0, 0), 0);
}

#[test]
fn test_holiday_lookup() {
    let new_year: DayKey = "2025-01-01".parse().expect("valid");
    let ordinary: DayKey = "2025-01-02".parse().expect("valid");

    assert_eq!(holiday_name(&new_year), Some("New Year's Day"));
    assert!(holiday_name(&ordinary).is_none());
}

#[test]
fn test_parse_range_forms() {
    let (s, e) = parse_range("2025").expect("year");
    assert_eq!((s.to_string(), e.to_string()), ("2025-01-01".into(), "2025-12-31".into()));

    let (s, e) = parse_range("2024-02").expect("month");
    assert_eq!((s.to_string(), e.to_string()), ("2024-02-01".into(), "2024-02-29".into()));

    let (s, e) = parse_range("2025-03:2025-05").expect("months");
    assert_eq!((s.to_string(), e.to_string()), ("2025-03-01".into(), "2025-05-31".into()));

    assert!(parse_range("2025-05:2025-03").is_err());
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("25").is_err());
}
