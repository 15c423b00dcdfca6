//! Codec tests: reference numbers, boundaries and properties

use chrono::NaiveDate;
use domain_nic::*;
use test_utils::{assert_nic_vector, NicFixtures, TemporalFixtures, NIC_VECTORS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    TemporalFixtures::today()
}

mod reference_numbers {
    use super::*;

    #[test]
    fn test_legacy_numbers_normalize() {
        for vector in NIC_VECTORS.iter() {
            assert_eq!(
                normalize(vector.legacy).unwrap(),
                vector.modern,
                "normalizing {}",
                vector.legacy
            );
        }
    }

    #[test]
    fn test_legacy_and_modern_decode_alike() {
        for vector in NIC_VECTORS.iter() {
            assert_nic_vector(vector, today());
            let from_legacy = decode_checked(vector.legacy, today()).unwrap();
            let from_modern = decode_checked(vector.modern, today()).unwrap();
            assert_eq!(from_legacy, from_modern);
        }
    }

    #[test]
    fn test_derived_birth_date_and_age() {
        for vector in NIC_VECTORS.iter() {
            assert_eq!(birth_date_of(vector.legacy, today()), vector.birth_date);
            assert_eq!(age_of(vector.modern, today()), vector.age);
        }
    }

    #[test]
    fn test_female_reference_number() {
        let info = decode("916980123V", today());
        assert!(info.is_valid);
        assert_eq!(info.birth_year, 1991);
        assert_eq!(info.day_of_year, 198);
        assert_eq!(info.gender, Some(Gender::Female));
        assert_eq!(info.normalized, "199169800123");
    }
}

mod input_cleanup {
    use super::*;

    #[test]
    fn test_whitespace_and_case() {
        assert_eq!(normalize(" 741 922 757 v ").unwrap(), "197419202757");
        assert_eq!(normalize("\t1974 1920 2757\n").unwrap(), "197419202757");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(normalize(""), Err(NicError::InvalidFormat(FormatViolation::Length(0))));
        assert_eq!(
            normalize("19741920275A"),
            Err(NicError::InvalidFormat(FormatViolation::NonDigit))
        );
        assert_eq!(
            normalize("74192275X"),
            Err(NicError::InvalidFormat(FormatViolation::NonDigit))
        );
        assert_eq!(normalize("7419227571"), Err(NicError::InvalidLetter('1')));
        assert_eq!(normalize("740002757V"), Err(NicError::InvalidDayOfYear(0)));
        assert_eq!(normalize("743672757V"), Err(NicError::InvalidDayOfYear(367)));
        assert_eq!(normalize("748672757V"), Err(NicError::InvalidDayOfYear(867)));
    }

    #[test]
    fn test_malformed_numbers_fail_both_tiers() {
        for raw in NicFixtures::malformed() {
            assert!(normalize(raw).is_err(), "{raw:?} should not normalize");
            assert!(!decode(raw, today()).is_valid, "{raw:?} should not decode");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NicError::InvalidLetter('Z').to_string(),
            "Invalid NIC format: letter must be V or X, found 'Z'"
        );
        assert_eq!(
            NicError::InvalidFormat(FormatViolation::Length(7)).to_string(),
            "Invalid NIC format: expected 9, 10 or 12 characters, found 7"
        );
        assert_eq!(NicError::InvalidDayOfYear(500).code(), "INVALID_DAY_OF_YEAR");
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_century_cutoff() {
        assert_eq!(normalize("501001234V").unwrap(), "205010001234");
        assert_eq!(normalize("511001234V").unwrap(), "195110001234");
    }

    #[test]
    fn test_birth_year_window_follows_today() {
        // 2050 is more than ten years after 2024
        assert!(!is_valid_nic("501001234V", today()));
        assert!(is_valid_nic("501001234V", date(2040, 1, 1)));
        assert_eq!(
            decode_checked("501001234V", today()),
            Err(NicError::BirthYearOutOfRange(2050))
        );
    }

    #[test]
    fn test_gender_offset() {
        assert_eq!(normalize("745002757V"), Err(NicError::InvalidDayOfYear(500)));

        let first = decode("745012757V", today());
        assert_eq!(first.gender, Some(Gender::Female));
        assert_eq!(first.day_of_year, 1);

        let last = decode("728662757V", today());
        assert_eq!(last.gender, Some(Gender::Female));
        assert_eq!(last.day_of_year, 366);

        let male_last = decode("723662757V", today());
        assert_eq!(male_last.gender, Some(Gender::Male));
        assert_eq!(male_last.day_of_year, 366);
    }

    #[test]
    fn test_day_366_needs_a_leap_year() {
        assert_eq!(birth_date("723662757V", today()), Some(date(1972, 12, 31)));
        assert_eq!(birth_date_of("728662757V", today()), "31-12-1972");
        assert_eq!(birth_date("733662757V", today()), None);
        assert_eq!(birth_date_of("733662757V", today()), "");
        assert_eq!(age_of("733662757V", today()), 0);
    }

    #[test]
    fn test_first_day_of_year() {
        assert_eq!(birth_date("850011234V", today()), Some(date(1985, 1, 1)));
    }
}

mod lenient_sentinels {
    use super::*;

    #[test]
    fn test_invalid_info_keeps_raw_input() {
        let info = decode("  12ab ", today());
        assert_eq!(info, NicInfo::invalid("  12ab "));
        assert_eq!(info.birth_year, 0);
        assert_eq!(info.day_of_year, 0);
        assert_eq!(info.gender, None);
    }

    #[test]
    fn test_age_from_nic() {
        assert_eq!(age_of("861234567V", today()), 38);
        assert_eq!(age_of("", today()), 0);
    }
}

mod newtype {
    use super::*;

    #[test]
    fn test_parse_and_details() {
        let nic: Nic = "916980123V".parse().unwrap();
        assert_eq!(nic.to_string(), "199169800123");
        let details = nic.details(today()).unwrap();
        assert_eq!(details.gender, Gender::Female);
        assert_eq!(format_nic(nic.as_str()), "1991 698 0012 3");
    }

    #[test]
    fn test_parse_rejects_bad_letter() {
        assert_eq!(Nic::parse("916980123Q"), Err(NicError::InvalidLetter('Q')));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{junk_nic_strategy, legacy_nic_parts_strategy, legacy_nic_strategy};

    proptest! {
        #[test]
        fn legacy_round_trip(parts in legacy_nic_parts_strategy()) {
            // the birth year window then reaches 2035
            let today = date(2025, 1, 1);
            let normalized = normalize(&parts.render()).unwrap();
            prop_assert_eq!(&normalized, &parts.modern());

            let details = decode_checked(&normalized, today).unwrap();
            prop_assert_eq!(details.birth_year, parts.birth_year());
            prop_assert_eq!(details.day_of_year, parts.day);
            let gender = if parts.female { Gender::Female } else { Gender::Male };
            prop_assert_eq!(details.gender, gender);
            prop_assert_eq!(&normalized[7..8], "0");
        }

        #[test]
        fn normalize_is_idempotent(raw in legacy_nic_strategy()) {
            let once = normalize(&raw).unwrap();
            prop_assert_eq!(normalize(&once).unwrap(), once.clone());
            prop_assert_eq!(once.len(), 12);
        }

        #[test]
        fn bare_digits_match_lettered_form(raw in legacy_nic_strategy()) {
            prop_assert_eq!(normalize(&raw[..9]), normalize(&raw));
        }

        #[test]
        fn lenient_validity_implies_strict_success(raw in junk_nic_strategy()) {
            if is_valid_nic(&raw, today()) {
                prop_assert!(normalize(&raw).is_ok());
            }
        }

        #[test]
        fn decode_never_panics(raw in "\\PC{0,16}") {
            let info = decode(&raw, today());
            if !info.is_valid {
                prop_assert_eq!(info.normalized, raw);
            }
        }
    }
}
