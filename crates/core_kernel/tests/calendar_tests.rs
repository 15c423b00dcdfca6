//! Tests for the calendar engine
//!
//! Covers date parsing, age and service calculation, retirement dates and
//! the increment date helpers. Every today-relative call uses a pinned date.

use chrono::NaiveDate;
use core_kernel::calendar::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_rejects_day_that_does_not_exist_in_month() {
        assert_eq!(parse_date("31-02-2024"), None);
        assert_eq!(parse_date("31-04-2024"), None);
    }

    #[test]
    fn test_accepts_leap_day_only_in_leap_years() {
        assert_eq!(parse_date("29-02-2024"), Some(date(2024, 2, 29)));
        assert_eq!(parse_date("29-02-1900"), None);
        assert_eq!(parse_date("29-02-2000"), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert_eq!(parse_date("1970/06/15"), None);
        assert_eq!(parse_date("15-06-70"), None);
        assert_eq!(parse_date("15-06"), None);
        assert_eq!(parse_date("aa-bb-cccc"), None);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse_date("  15-06-1970 "), Some(date(1970, 6, 15)));
    }

    #[test]
    fn test_input_date_conversion() {
        assert_eq!(convert_input_date_to_display("1970-06-15"), "15-06-1970");
        assert_eq!(convert_input_date_to_display(""), "");
        assert_eq!(convert_input_date_to_display("1970-13-01"), "1970-13-01");
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_date(date(1970, 6, 5)), "05-06-1970");
        assert_eq!(format_date_for_input(date(1970, 6, 5)), "1970-06-05");
    }
}

mod age_and_service {
    use super::*;

    #[test]
    fn test_age_from_display_string() {
        assert_eq!(calculate_age("15-06-1970", date(2024, 6, 15)), 54);
        assert_eq!(calculate_age("15-06-1970", date(2024, 6, 14)), 53);
    }

    #[test]
    fn test_age_of_unreadable_date_is_zero() {
        assert_eq!(calculate_age("not a date", date(2024, 1, 1)), 0);
        assert_eq!(calculate_age(None::<NaiveDate>, date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_future_dates_clamp_to_zero() {
        let today = date(2024, 1, 1);
        assert_eq!(calculate_age(date(2030, 5, 1), today), 0);
        assert_eq!(years_of_service(date(2024, 1, 2), today), 0);
    }

    #[test]
    fn test_years_of_service() {
        let today = date(2024, 3, 1);
        assert_eq!(years_of_service("01-03-2000", today), 24);
        assert_eq!(years_of_service("02-03-2000", today), 23);
    }

    #[test]
    fn test_leap_day_birthday_counts_on_first_of_march() {
        let birth = date(2000, 2, 29);
        assert_eq!(calculate_age(birth, date(2023, 2, 28)), 22);
        assert_eq!(calculate_age(birth, date(2023, 3, 1)), 23);
    }
}

mod retirement {
    use super::*;

    #[test]
    fn test_sixty_years_after_birth() {
        assert_eq!(calculate_retirement_date("15-06-1970", 60), "15-06-2030");
        assert_eq!(
            calculate_retirement_date("15-06-1970", DEFAULT_RETIREMENT_AGE),
            "15-06-2030"
        );
    }

    #[test]
    fn test_unreadable_birth_date_gives_empty_string() {
        assert_eq!(calculate_retirement_date("", 60), "");
        assert_eq!(retirement_date("31-02-1970", 60), None);
    }

    #[test]
    fn test_near_retirement_window() {
        let today = date(2024, 6, 1);
        assert!(is_near_retirement("01-01-1966", 60, today));
        assert!(!is_near_retirement("01-01-1980", 60, today));
        assert!(!is_near_retirement("garbage", 60, today));
    }
}

mod ranges {
    use super::*;

    #[test]
    fn test_birth_date_rules() {
        let today = date(2024, 6, 1);
        let rules = DateRangeRules::birth_date(18, 60);

        assert_eq!(validate_date_range("15-06-1980", &rules, today), Ok(()));
        assert_eq!(
            validate_date_range("01-01-2010", &rules, today),
            Err(CalendarError::BelowMinimumAge(18))
        );
        assert_eq!(
            validate_date_range("01-01-1950", &rules, today),
            Err(CalendarError::AboveMaximumAge(60))
        );
        assert_eq!(
            validate_date_range("01-01-2025", &rules, today),
            Err(CalendarError::FutureDate)
        );
        assert_eq!(
            validate_date_range("nope", &rules, today),
            Err(CalendarError::InvalidFormat)
        );
    }

    #[test]
    fn test_future_allowed_without_age_limits() {
        let rules = DateRangeRules {
            allow_future: true,
            ..Default::default()
        };
        assert_eq!(validate_date_range("01-01-2030", &rules, date(2024, 1, 1)), Ok(()));
    }

    #[test]
    fn test_relative_time() {
        let today = date(2024, 6, 15);
        assert_eq!(relative_time(today, today), "Today");
        assert_eq!(relative_time(date(2024, 6, 16), today), "Tomorrow");
        assert_eq!(relative_time(date(2024, 6, 14), today), "Yesterday");
        assert_eq!(relative_time(date(2024, 6, 18), today), "In 3 days");
        assert_eq!(relative_time(date(2024, 4, 16), today), "2 months ago");
        assert_eq!(relative_time(date(2023, 5, 1), today), "1 year ago");
        assert_eq!(relative_time("bad", today), "");
    }

    #[test]
    fn test_format_date_range() {
        let start = Some(date(2024, 1, 1));
        let end = Some(date(2024, 12, 31));
        assert_eq!(format_date_range(start, end), "01-01-2024 - 31-12-2024");
        assert_eq!(format_date_range(start, None), "From 01-01-2024");
        assert_eq!(format_date_range(None, end), "Until 31-12-2024");
        assert_eq!(format_date_range(None, None), "");
    }
}

mod increment_dates {
    use super::*;

    #[test]
    fn test_auto_format_while_typing() {
        assert_eq!(auto_format_increment_date(""), "");
        assert_eq!(auto_format_increment_date("0"), "0");
        assert_eq!(auto_format_increment_date("02"), "02");
        assert_eq!(auto_format_increment_date("020"), "02-0");
        assert_eq!(auto_format_increment_date("0203"), "02-03");
        assert_eq!(auto_format_increment_date("02033"), "02-03");
        assert_eq!(auto_format_increment_date("02-03"), "02-03");
        assert_eq!(auto_format_increment_date("ab"), "");
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(validate_increment_date(""), Err(CalendarError::MissingIncrementDate));
        assert_eq!(validate_increment_date("0203"), Err(CalendarError::IncrementDateFormat));
        assert_eq!(validate_increment_date("123-1"), Err(CalendarError::IncrementDateFormat));
        assert_eq!(validate_increment_date("32-01"), Err(CalendarError::DayOutOfRange(32)));
        assert_eq!(validate_increment_date("00-01"), Err(CalendarError::DayOutOfRange(0)));
        assert_eq!(validate_increment_date("10-13"), Err(CalendarError::MonthOutOfRange(13)));
        assert_eq!(
            validate_increment_date("30-02"),
            Err(CalendarError::DayNotInMonth { day: 30, month: 2 })
        );
    }

    #[test]
    fn test_validation_accepts_short_forms() {
        let increment = validate_increment_date("2-3").unwrap();
        assert_eq!(increment.day(), 2);
        assert_eq!(increment.month(), 3);
        assert_eq!(increment.to_string(), "02-03");
    }

    #[test]
    fn test_format_for_storage() {
        assert_eq!(format_increment_date("2-3"), "02-03");
        assert_eq!(format_increment_date("15-06-1970"), "15-06");
        assert_eq!(format_increment_date("1970-06-15"), "15-06");
        assert_eq!(format_increment_date("abc"), "abc");
        assert_eq!(format_increment_date(""), "");
    }

    #[test]
    fn test_next_occurrence() {
        assert_eq!(next_increment_date("02-03", date(2024, 3, 1)), Some(date(2024, 3, 2)));
        assert_eq!(next_increment_date("02-03", date(2024, 3, 2)), Some(date(2025, 3, 2)));
        assert_eq!(next_increment_date("29-02", date(2024, 3, 1)), Some(date(2028, 2, 29)));
        assert_eq!(next_increment_date("31-04", date(2024, 3, 1)), None);
    }

    #[test]
    fn test_serde_as_string() {
        let increment: IncrementDate = serde_json::from_str("\"01-07\"").unwrap();
        assert_eq!(increment.month(), 7);
        assert_eq!(serde_json::to_string(&increment).unwrap(), "\"01-07\"");
        assert!(serde_json::from_str::<IncrementDate>("\"31-06\"").is_err());
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn future_birth_dates_never_give_positive_age(offset in 1i64..40_000) {
            let today = date(2024, 6, 15);
            let birth = today + chrono::Duration::days(offset);
            prop_assert_eq!(calculate_age(birth, today), 0);
            prop_assert_eq!(years_of_service(birth, today), 0);
        }

        #[test]
        fn age_is_year_difference_or_one_less(offset in 0i64..40_000) {
            let today = date(2024, 6, 15);
            let birth = today - chrono::Duration::days(offset);
            let age = calculate_age(birth, today) as i32;
            let diff = chrono::Datelike::year(&today) - chrono::Datelike::year(&birth);
            prop_assert!(age == diff || age == diff - 1);
        }

        #[test]
        fn display_format_parses_back(offset in 0i64..60_000) {
            let d = date(1900, 1, 1) + chrono::Duration::days(offset);
            prop_assert_eq!(parse_date(&format_date(d)), Some(d));
        }

        #[test]
        fn auto_format_never_exceeds_five_chars(input in "[0-9a-z/-]{0,12}") {
            let formatted = auto_format_increment_date(&input);
            prop_assert!(formatted.len() <= 5);
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == '-'));
        }
    }
}
