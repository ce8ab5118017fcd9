use jiff::civil::date;
use jiff::tz::{self, Offset, TimeZone};
use jiff::Zoned;

use sftgen_verify::{CASES, Case, Strategy, reference};

const US_EASTERN: &str = "EST5EDT,M3.2.0,M11.1.0";
/// 36-byte standard-time abbreviation, past the preallocation estimate.
const LONG_NAME: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJ5";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn zoned(ymd: (i16, i8, i8), hms: (i8, i8, i8), nanos: i32, zone: TimeZone) -> Zoned {
    date(ymd.0, ymd.1, ymd.2)
        .at(hms.0, hms.1, hms.2, nanos)
        .to_zoned(zone)
        .unwrap()
}

fn fixed(seconds: i32) -> TimeZone {
    TimeZone::fixed(Offset::from_seconds(seconds).unwrap())
}

fn eastern() -> TimeZone {
    TimeZone::posix(US_EASTERN).unwrap()
}

/// Timestamps chosen to hit padding, week numbering and offset edge cases.
fn timestamps() -> Vec<Zoned> {
    vec![
        zoned((-1, 6, 1), (12, 0, 0), 0, TimeZone::UTC),
        zoned((1, 1, 1), (0, 0, 0), 0, TimeZone::UTC),
        zoned((1969, 12, 31), (23, 59, 59), 0, TimeZone::UTC),
        zoned((2006, 1, 2), (3, 4, 5), 123_456_789, TimeZone::UTC),
        zoned((2021, 1, 3), (12, 0, 0), 0, TimeZone::UTC),
        zoned((2023, 12, 31), (23, 59, 59), 1_000, fixed(5 * 3600 + 1800)),
        zoned((2024, 2, 29), (12, 0, 0), 999_999_999, TimeZone::fixed(tz::offset(-7))),
        zoned((2024, 12, 30), (0, 30, 0), 7_000_000, fixed(-1800)),
        zoned((2024, 3, 10), (1, 59, 59), 0, eastern()),
        zoned((2024, 3, 10), (3, 0, 0), 0, eastern()),
        zoned((2024, 11, 3), (1, 30, 0), 0, eastern()),
        zoned((2025, 7, 4), (23, 5, 9), 50, fixed(14 * 3600)),
        zoned((2025, 7, 4), (8, 0, 0), 0, TimeZone::posix(LONG_NAME).unwrap()),
        zoned((2000, 1, 1), (0, 0, 0), 0, fixed(-12 * 3600)),
        zoned((9999, 12, 30), (12, 0, 0), 999_999_999, fixed(14 * 3600)),
    ]
}

fn render(case: &Case, t: &Zoned) -> String {
    String::from_utf8(case.render(t)).unwrap()
}

#[test]
fn every_case_matches_reference() {
    init_logging();
    let timestamps = timestamps();
    log::debug!("checking {} cases at {} timestamps", CASES.len(), timestamps.len());

    for case in CASES {
        for t in &timestamps {
            assert_eq!(
                render(case, t),
                reference::format(case.spec, t),
                "{case:?} at {t}"
            );
        }
    }
}

#[test]
fn both_strategies_are_generated() {
    let index = CASES.iter().filter(|c| c.strategy == Strategy::Index).count();
    let append = CASES.iter().filter(|c| c.strategy == Strategy::Append).count();

    assert_eq!(index, append);
    assert!(index > 40);
}

#[test]
fn index_overwrites_dirty_buffer() {
    init_logging();
    let t = zoned((2024, 2, 29), (12, 0, 0), 999_999_999, fixed(-1800));

    for case in CASES.iter().filter(|c| c.strategy == Strategy::Index) {
        let out = (case.format)(vec![b'#'; 256], &t);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            reference::format(case.spec, &t),
            "{case:?}"
        );
    }
}

#[test]
fn index_grows_short_buffer() {
    let t = zoned((2006, 1, 2), (3, 4, 5), 0, TimeZone::UTC);
    let case = find("%Y-%m-%dT%H:%M:%S%1", Strategy::Index);

    let out = (case.format)(vec![b'#'; 3], &t);
    assert_eq!(out, b"2006-01-02T03:04:05Z");
}

#[test]
fn append_keeps_existing_bytes() {
    init_logging();
    let t = zoned((2023, 12, 31), (23, 59, 59), 1_000, fixed(5 * 3600 + 1800));

    for case in CASES.iter().filter(|c| c.strategy == Strategy::Append) {
        let out = (case.format)(b"prefix: ".to_vec(), &t);
        let expected = format!("prefix: {}", reference::format(case.spec, &t));
        assert_eq!(String::from_utf8(out).unwrap(), expected, "{case:?}");
    }
}

#[test]
fn long_zone_name_grows_buffer() {
    let t = zoned((2025, 7, 4), (8, 0, 0), 0, TimeZone::posix(LONG_NAME).unwrap());

    let out = (find("%Z", Strategy::Index).format)(Vec::new(), &t);
    assert_eq!(out, b"ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJ");

    let out = (find("%+", Strategy::Index).format)(Vec::new(), &t);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Fri Jul  4 08:00:00 ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJ 2025"
    );
}

#[test]
fn negative_years_render_as_zero() {
    let t = zoned((-1, 6, 1), (12, 0, 0), 0, TimeZone::UTC);

    for (spec, expected) in [("%Y", "0000"), ("%C", "00"), ("%y", "00"), ("%G", "0000"), ("%g", "00")] {
        for strategy in [Strategy::Index, Strategy::Append] {
            let out = (find(spec, strategy).format)(Vec::new(), &t);
            assert_eq!(out, expected.as_bytes(), "{spec} {strategy:?}");
        }
    }
}

#[test]
fn literal_only_specs_ignore_timestamp() {
    let t = zoned((2006, 1, 2), (3, 4, 5), 0, TimeZone::UTC);

    assert_eq!(render(find("%%", Strategy::Index), &t), "%");
    assert_eq!(render(find("%n", Strategy::Append), &t), "\n");
    assert_eq!(render(find("%t", Strategy::Index), &t), "\t");
}

#[test]
fn buffer_can_be_reused() {
    let case = find("%a, %d %b %Y %H:%M:%S %z", Strategy::Index);
    let first = zoned((2024, 3, 10), (1, 59, 59), 0, eastern());
    let second = zoned((2024, 3, 10), (3, 0, 0), 0, eastern());

    let buf = (case.format)(Vec::with_capacity(64), &first);
    assert_eq!(buf, b"Sun, 10 Mar 2024 01:59:59 -0500");
    let buf = (case.format)(buf, &second);
    assert_eq!(buf, b"Sun, 10 Mar 2024 03:00:00 -0400");
}

#[test]
fn named_layouts_render() {
    let t = zoned((2006, 1, 2), (15, 4, 5), 123_456_789, TimeZone::fixed(tz::offset(-7)));

    insta::assert_snapshot!(
        render(find("%Y-%m-%dT%H:%M:%S.%N%1", Strategy::Append), &t),
        @"2006-01-02T15:04:05.123456789-07:00"
    );
    insta::assert_snapshot!(render(find("%2:%M%p", Strategy::Index), &t), @"3:04PM");
    insta::assert_snapshot!(
        render(find("%b %e %H:%M:%S.%4", Strategy::Index), &t),
        @"Jan  2 15:04:05.123456"
    );
    insta::assert_snapshot!(render(find("%c", Strategy::Index), &t), @"Mon Jan  2 15:04:05 2006");
}

#[test]
fn week_numbers_at_year_boundary() {
    // 2021-01-03 is a Sunday that still belongs to ISO week 53 of 2020.
    let t = zoned((2021, 1, 3), (12, 0, 0), 0, TimeZone::UTC);

    insta::assert_snapshot!(
        render(find("%G-W%V-%u|%U|%W|%w|%j", Strategy::Index), &t),
        @"2020-W53-7|01|00|0|003"
    );
}

fn find(spec: &str, strategy: Strategy) -> &'static Case {
    CASES
        .iter()
        .find(|c| c.spec == spec && c.strategy == strategy)
        .unwrap_or_else(|| panic!("no generated case for {spec:?}"))
}
