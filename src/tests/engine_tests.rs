use crate::{
    errors::ParseError,
    metadata::{NumberDesc, NumberFormat, NumberingPlanDatabase, RegionMetadata},
    CountryCodeSource, FormatStyle, PhoneNumber, PhoneNumberEngine, PhoneNumberType,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_engine() -> PhoneNumberEngine {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberEngine::new()
}

#[test]
fn parse_international_number() {
    let engine = get_engine();
    let number = engine
        .parse("+44 1234 567890", RegionCode::us())
        .unwrap();
    assert_eq!(44, number.country_code());
    assert_eq!(1234567890, number.national_number());
    assert_eq!(None, number.extension());
    assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
    assert_eq!(None, number.raw_input());
}

#[test]
fn default_region_is_ignored_when_a_plus_is_present() {
    let engine = get_engine();
    for default_region in [RegionCode::us(), RegionCode::de(), RegionCode::get_unknown()] {
        let number = engine.parse("+441234567890", default_region).unwrap();
        assert_eq!(RegionCode::gb(), engine.region_for_number(&number));
    }
}

#[test]
fn national_and_international_input_parse_alike() {
    let engine = get_engine();
    let international = engine
        .parse("+441234567890", RegionCode::get_unknown())
        .unwrap();
    let with_prefix = engine.parse("01234 567890", RegionCode::gb()).unwrap();
    let without_prefix = engine.parse("1234 567890", RegionCode::gb()).unwrap();
    assert_eq!(international, with_prefix);
    assert_eq!(international, without_prefix);
}

#[test]
fn format_styles() {
    let engine = get_engine();
    let number = engine
        .parse("+441234567890", RegionCode::get_unknown())
        .unwrap();
    assert_eq!("+441234567890", engine.format(&number, FormatStyle::E164));
    assert_eq!(
        "+44 1234 567890",
        engine.format(&number, FormatStyle::International)
    );
    assert_eq!("01234 567890", engine.format(&number, FormatStyle::National));
    assert_eq!(
        "tel:+44-1234-567890",
        engine.format(&number, FormatStyle::Rfc3966)
    );
}

#[test]
fn format_us_number() {
    let engine = get_engine();
    let number = engine
        .parse("+1 650-253-0000", RegionCode::gb())
        .unwrap();
    assert_eq!(RegionCode::us(), engine.region_for_number(&number));
    assert_eq!("(650) 253-0000", engine.format(&number, FormatStyle::National));
    assert_eq!(
        "+1 650-253-0000",
        engine.format(&number, FormatStyle::International)
    );
    assert_eq!(
        "tel:+1-650-253-0000",
        engine.format(&number, FormatStyle::Rfc3966)
    );
}

#[test]
fn format_out_of_country() {
    let engine = get_engine();
    let us_number = engine.parse("+16502530000", RegionCode::us()).unwrap();
    assert_eq!(
        "00 1 650-253-0000",
        engine.format_out_of_country(&us_number, RegionCode::gb())
    );
    // Inside NANPA the shared calling code is still dialed.
    assert_eq!(
        "1 (650) 253-0000",
        engine.format_out_of_country(&us_number, RegionCode::ca())
    );

    let gb_number = engine.parse("+441234567890", RegionCode::gb()).unwrap();
    assert_eq!(
        "01234 567890",
        engine.format_out_of_country(&gb_number, RegionCode::gb())
    );

    let it_number = engine.parse("+390236618300", RegionCode::it()).unwrap();
    assert_eq!(
        "810 39 02 3661 8300",
        engine.format_out_of_country(&it_number, RegionCode::ru())
    );
}

#[test]
fn region_inference_within_nanpa() {
    let engine = get_engine();
    let cases = [
        ("+16502530000", RegionCode::us()),
        ("+16042345678", RegionCode::ca()),
        ("+12423456789", RegionCode::bs()),
    ];
    for (input, expected_region) in cases {
        let number = engine.parse(input, RegionCode::get_unknown()).unwrap();
        assert_eq!(
            expected_region,
            engine.region_for_number(&number),
            "wrong region for {input}"
        );
    }
}

#[test]
fn region_inference_for_shared_code_seven() {
    let engine = get_engine();
    let kazakh = engine
        .parse("+7 7123456789", RegionCode::get_unknown())
        .unwrap();
    assert_eq!(RegionCode::kz(), engine.region_for_number(&kazakh));

    let russian = engine
        .parse("+7 9123456789", RegionCode::get_unknown())
        .unwrap();
    assert_eq!(RegionCode::ru(), engine.region_for_number(&russian));
}

#[test]
fn parse_format_round_trip_is_idempotent() {
    let engine = get_engine();
    let inputs = [
        "+441234567890",
        "+16502530000",
        "+390236618300",
        "+79123456789",
        "+800 1234 5678",
    ];
    for input in inputs {
        let number = engine.parse(input, RegionCode::get_unknown()).unwrap();
        for style in [FormatStyle::E164, FormatStyle::International] {
            let formatted = engine.format(&number, style);
            let reparsed = engine
                .parse(&formatted, RegionCode::get_unknown())
                .unwrap();
            assert_eq!(number, reparsed, "round trip changed {input} via {style:?}");
        }
    }
}

#[test]
fn italian_leading_zero_survives() {
    let engine = get_engine();
    let number = engine.parse("02 3661 8300", RegionCode::it()).unwrap();
    assert!(number.italian_leading_zero());
    assert_eq!(236618300, number.national_number());
    assert_eq!("0236618300", number.national_significant_number());
    assert_eq!("+390236618300", engine.format(&number, FormatStyle::E164));
    assert_eq!("02 3661 8300", engine.format(&number, FormatStyle::National));
}

#[test]
fn extensions_parse_and_format() {
    let engine = get_engine();

    let nz_number = engine
        .parse("03 331 6005 ext 3456", RegionCode::nz())
        .unwrap();
    assert_eq!(Some("3456"), nz_number.extension());
    assert_eq!(33316005, nz_number.national_number());
    assert_eq!(
        "03-331 6005 ext. 3456",
        engine.format(&nz_number, FormatStyle::National)
    );
    // E.164 never carries the extension.
    assert_eq!("+6433316005", engine.format(&nz_number, FormatStyle::E164));

    let us_number = engine.parse("6502530000x2303", RegionCode::us()).unwrap();
    assert_eq!(Some("2303"), us_number.extension());
    assert_eq!(
        "(650) 253-0000 ext. 2303",
        engine.format(&us_number, FormatStyle::National)
    );
    assert_eq!(
        "tel:+1-650-253-0000;ext=2303",
        engine.format(&us_number, FormatStyle::Rfc3966)
    );
}

#[test]
fn russian_national_prefix_formatting() {
    let engine = get_engine();
    let number = engine.parse("8 (495) 123-45-67", RegionCode::ru()).unwrap();
    assert_eq!(4951234567, number.national_number());
    assert_eq!(
        "8 (495) 123-45-67",
        engine.format(&number, FormatStyle::National)
    );
    assert_eq!(
        "+7 495 123-45-67",
        engine.format(&number, FormatStyle::International)
    );
}

#[test]
fn german_numbers_format_by_leading_digits() {
    let engine = get_engine();

    let berlin = engine.parse("030 123456", RegionCode::de()).unwrap();
    assert_eq!("030 123456", engine.format(&berlin, FormatStyle::National));
    assert_eq!(PhoneNumberType::FixedLine, engine.number_type(&berlin));

    let mobile = engine.parse("0151 23456789", RegionCode::de()).unwrap();
    assert_eq!(
        "0151 23456789",
        engine.format(&mobile, FormatStyle::National)
    );
    assert_eq!(PhoneNumberType::Mobile, engine.number_type(&mobile));
}

#[test]
fn french_numbers_format_in_pairs() {
    let engine = get_engine();
    let number = engine.parse("+33 1 23 45 67 89", RegionCode::get_unknown()).unwrap();
    assert_eq!(
        "01 23 45 67 89",
        engine.format(&number, FormatStyle::National)
    );
    assert_eq!(
        "+33 1 23 45 67 89",
        engine.format(&number, FormatStyle::International)
    );
    assert_eq!(PhoneNumberType::FixedLine, engine.number_type(&number));
}

#[test]
fn universal_toll_free_numbers() {
    let engine = get_engine();
    let number = engine
        .parse("+800 1234 5678", RegionCode::get_unknown())
        .unwrap();
    assert_eq!(800, number.country_code());
    assert_eq!(RegionCode::un001(), engine.region_for_number(&number));
    assert_eq!(PhoneNumberType::TollFree, engine.number_type(&number));
    assert!(engine.is_valid_number(&number));
    assert_eq!(
        "+800 1234 5678",
        engine.format(&number, FormatStyle::International)
    );
}

#[test]
fn vanity_numbers_parse_via_the_keypad() {
    let engine = get_engine();
    let number = engine.parse("1-800-FLOWERS", RegionCode::us()).unwrap();
    assert_eq!(8003569377, number.national_number());
    assert_eq!(PhoneNumberType::TollFree, engine.number_type(&number));
}

#[test]
fn parse_rejects_garbage() {
    let engine = get_engine();
    for input in ["", "   ", "This is not a phone number"] {
        assert_eq!(
            Err(ParseError::NotANumber),
            engine.parse(input, RegionCode::us()),
            "input {input:?} should not parse"
        );
    }
}

#[test]
fn parse_rejects_out_of_range_lengths() {
    let engine = get_engine();
    assert_eq!(
        Err(ParseError::TooShort),
        engine.parse("+44123", RegionCode::gb())
    );
    assert_eq!(
        Err(ParseError::TooLong),
        engine.parse("123456789012345678901", RegionCode::us())
    );
}

#[test]
fn parse_requires_a_resolvable_calling_code() {
    let engine = get_engine();
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        engine.parse("123 456 7890", RegionCode::get_unknown())
    );
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        engine.parse("+999 123 4567", RegionCode::us())
    );
}

#[test]
fn possible_but_invalid_numbers() {
    let engine = get_engine();

    let valid = engine.parse("6502530000", RegionCode::us()).unwrap();
    assert!(engine.is_valid_number(&valid));
    assert_eq!(PhoneNumberType::FixedLineOrMobile, engine.number_type(&valid));

    // A seven-digit string parses as a local-only candidate but is not a
    // complete, diallable number.
    let local_only = engine.parse("2530000", RegionCode::us()).unwrap();
    assert!(!engine.is_valid_number(&local_only));
    assert_eq!(PhoneNumberType::Unknown, engine.number_type(&local_only));
}

#[test]
fn parse_and_keep_raw_input_records_provenance() {
    let engine = get_engine();

    let plus = engine
        .parse_and_keep_raw_input("+44 1234 567890", RegionCode::us())
        .unwrap();
    assert_eq!(Some("+44 1234 567890"), plus.raw_input());
    assert_eq!(
        CountryCodeSource::FromNumberWithPlusSign,
        plus.country_code_source()
    );

    let idd = engine
        .parse_and_keep_raw_input("011 44 1234 567890", RegionCode::us())
        .unwrap();
    assert_eq!(44, idd.country_code());
    assert_eq!(
        CountryCodeSource::FromNumberWithIdd,
        idd.country_code_source()
    );

    let national = engine
        .parse_and_keep_raw_input("01234 567890", RegionCode::gb())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromDefaultCountry,
        national.country_code_source()
    );
}

#[test]
fn unusual_but_valid_codepoints() {
    let engine = get_engine();

    // EN DASH as separator.
    let number = engine
        .parse("+44\u{2013}2087654321", RegionCode::get_unknown())
        .unwrap();
    assert_eq!(2087654321, number.national_number());

    // Full-width plus sign and digits.
    let full_width = engine
        .parse(
            "\u{FF0B}\u{FF11}\u{FF16}\u{FF15}\u{FF10}\u{FF12}\u{FF15}\u{FF13}\u{FF10}\u{FF10}\u{FF10}\u{FF10}",
            RegionCode::get_unknown(),
        )
        .unwrap();
    assert_eq!(1, full_width.country_code());
    assert_eq!(6502530000, full_width.national_number());
}

#[test]
fn supported_regions_and_calling_codes() {
    let engine = get_engine();
    let regions: std::collections::HashSet<_> = engine.supported_regions().collect();
    assert_eq!(10, regions.len());
    assert!(regions.contains(RegionCode::gb()));
    assert!(!regions.contains(RegionCode::un001()));

    let calling_codes: Vec<_> = engine.supported_calling_codes().collect();
    assert_eq!(vec![1, 7, 33, 39, 44, 49, 64, 800], calling_codes);
}

#[test]
fn region_and_calling_code_lookups() {
    let engine = get_engine();
    assert_eq!(RegionCode::gb(), engine.region_code_for_country_code(44));
    assert_eq!(RegionCode::us(), engine.region_code_for_country_code(1));
    assert_eq!(RegionCode::ru(), engine.region_code_for_country_code(7));
    assert_eq!(
        RegionCode::get_unknown(),
        engine.region_code_for_country_code(999)
    );

    assert_eq!(Some(49), engine.country_code_for_region(RegionCode::de()));
    assert_eq!(None, engine.country_code_for_region("XX"));
}

#[test]
fn supported_types_per_region() {
    let engine = get_engine();
    assert_eq!(
        vec![
            PhoneNumberType::FixedLine,
            PhoneNumberType::Mobile,
            PhoneNumberType::TollFree,
            PhoneNumberType::PremiumRate,
        ],
        engine.supported_types_for_region(RegionCode::us())
    );
    assert_eq!(
        vec![PhoneNumberType::FixedLine, PhoneNumberType::Mobile],
        engine.supported_types_for_region(RegionCode::kz())
    );
    assert!(engine.supported_types_for_region("XX").is_empty());
}

#[test]
fn example_numbers_are_valid() {
    let engine = get_engine();
    for region in [RegionCode::us(), RegionCode::gb(), RegionCode::it()] {
        let example = engine
            .example_number(region)
            .unwrap_or_else(|| panic!("no example number for {region}"));
        assert!(
            engine.is_valid_number(&example),
            "example number for {region} is invalid"
        );
        assert_eq!(region, engine.region_for_number(&example));
    }
}

#[test]
fn country_choice_switches_with_the_input() {
    let engine = get_engine();
    // Input typed with a plus overrides the chosen country.
    let number = engine.parse("+16502530000", RegionCode::gb()).unwrap();
    assert_eq!(RegionCode::us(), engine.region_for_number(&number));
    assert_eq!("(650) 253-0000", engine.format(&number, FormatStyle::National));
}

static TEST_REGIONS: &[RegionMetadata] = &[RegionMetadata {
    id: "AD",
    country_code: 376,
    main_country_for_code: true,
    national_prefix: None,
    international_prefix: Some("00"),
    preferred_extn_prefix: None,
    leading_digits: None,
    general: NumberDesc {
        national_number_pattern: Some(r"[1-9]\d{5}"),
        possible_lengths: &[6],
        possible_lengths_local_only: &[],
        example_number: None,
    },
    fixed_line: NumberDesc {
        national_number_pattern: Some(r"[78]\d{5}"),
        possible_lengths: &[6],
        possible_lengths_local_only: &[],
        example_number: Some("712345"),
    },
    mobile: NumberDesc::EMPTY,
    toll_free: NumberDesc::EMPTY,
    premium_rate: NumberDesc::EMPTY,
    formats: &[NumberFormat {
        pattern: r"(\d{3})(\d{3})",
        format: "$1 $2",
        intl_format: None,
        leading_digits: None,
        national_prefix_formatting_rule: None,
    }],
}];

#[test]
fn engine_accepts_a_substitute_database() {
    let engine = PhoneNumberEngine::with_database(NumberingPlanDatabase::from_regions(
        TEST_REGIONS,
    ));

    let number = engine.parse("+376 712 345", RegionCode::get_unknown()).unwrap();
    assert_eq!("AD", engine.region_for_number(&number));
    assert_eq!(PhoneNumberType::FixedLine, engine.number_type(&number));
    assert_eq!(
        "+376 712 345",
        engine.format(&number, FormatStyle::International)
    );

    // The shipped plans are gone entirely.
    assert!(engine.metadata_for_region(RegionCode::us()).is_none());
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        engine.parse("+441234567890", RegionCode::get_unknown())
    );
}

#[test]
fn format_returns_raw_input_when_there_is_nothing_to_format() {
    let engine = get_engine();
    let mut number = PhoneNumber::new(44, 0);
    number.raw_input = Some("012".to_string());
    assert_eq!("012", engine.format(&number, FormatStyle::International));
}
