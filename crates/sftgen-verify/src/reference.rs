//! Straightforward interpreter for format specs.
//!
//! Slow and allocation-heavy, but written directly against jiff's accessors
//! so generated code can be compared with it.

use std::fmt::Write as _;

use jiff::Zoned;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render `spec` for `t`. Extra verbs are always accepted; a trailing `%`
/// and unknown verbs are dropped. Years before 0000 render as 0000.
pub fn format(spec: &str, t: &Zoned) -> String {
    let mut out = String::new();
    let mut chars = spec.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(code) = chars.next() else {
            break;
        };
        verb(&mut out, code, t);
    }
    out
}

fn verb(out: &mut String, code: char, t: &Zoned) {
    let weekday = WEEKDAYS[t.weekday().to_sunday_zero_offset() as usize];
    let month = MONTHS[t.month() as usize - 1];
    let hour12 = match t.hour() % 12 {
        0 => 12,
        h => h,
    };
    let iso = t.date().iso_week_date();
    let year = t.year().max(0);
    let iso_year = iso.year().max(0);

    // Writing to a String cannot fail.
    let _ = match code {
        'a' => write!(out, "{}", &weekday[..3]),
        'A' => write!(out, "{weekday}"),
        'b' | 'h' => write!(out, "{}", &month[..3]),
        'B' => write!(out, "{month}"),
        'c' => write!(out, "{}", format("%a %b %e %H:%M:%S %Y", t)),
        'C' => write!(out, "{:02}", year / 100),
        'd' => write!(out, "{:02}", t.day()),
        'D' | 'x' => write!(out, "{}", format("%m/%d/%y", t)),
        'e' => write!(out, "{:>2}", t.day()),
        'F' => write!(out, "{}", format("%Y-%m-%d", t)),
        'g' => write!(out, "{:02}", iso_year % 100),
        'G' => write!(out, "{iso_year:04}"),
        'H' => write!(out, "{:02}", t.hour()),
        'I' => write!(out, "{hour12:02}"),
        'j' => write!(out, "{:03}", t.day_of_year()),
        'k' => write!(out, "{:>2}", t.hour()),
        'l' => write!(out, "{hour12:>2}"),
        'm' => write!(out, "{:02}", t.month()),
        'M' => write!(out, "{:02}", t.minute()),
        'n' => write!(out, "\n"),
        'N' => write!(out, "{:09}", t.subsec_nanosecond()),
        'p' => write!(out, "{}", if t.hour() < 12 { "AM" } else { "PM" }),
        'P' => write!(out, "{}", if t.hour() < 12 { "am" } else { "pm" }),
        'r' => write!(out, "{}", format("%I:%M:%S %p", t)),
        'R' => write!(out, "{}", format("%H:%M", t)),
        's' => write!(out, "{}", t.timestamp().as_second()),
        'S' => write!(out, "{:02}", t.second()),
        't' => write!(out, "\t"),
        'T' | 'X' => write!(out, "{}", format("%H:%M:%S", t)),
        'u' => write!(out, "{}", t.weekday().to_monday_one_offset()),
        'U' => write!(out, "{:02}", week_number(t, 0)),
        'V' => write!(out, "{:02}", iso.week()),
        'w' => write!(out, "{}", t.weekday().to_sunday_zero_offset()),
        'W' => write!(out, "{:02}", week_number(t, 1)),
        'y' => write!(out, "{:02}", year % 100),
        'Y' => write!(out, "{year:04}"),
        'z' => write!(out, "{}", numeric_offset(t, "")),
        'Z' => write!(out, "{}", abbreviation(t)),
        '%' => write!(out, "%"),
        '+' => write!(out, "{}", format("%a %b %e %H:%M:%S %Z %Y", t)),
        '1' => match t.offset().seconds() {
            0 => write!(out, "Z"),
            _ => write!(out, "{}", numeric_offset(t, ":")),
        },
        '2' => write!(out, "{hour12}"),
        '3' => write!(out, "{:03}", t.subsec_nanosecond() / 1_000_000),
        '4' => write!(out, "{:06}", t.subsec_nanosecond() / 1_000),
        _ => Ok(()),
    };
}

/// Week of the year where week 1 starts on the first `first_day` of January
/// (0 for Sunday, 1 for Monday). Days before it fall in week 0.
fn week_number(t: &Zoned, first_day: i16) -> i16 {
    let jan1 = t.date().first_of_year();
    let jan1_weekday = i16::from(jan1.weekday().to_sunday_zero_offset());
    let first = (7 + first_day - jan1_weekday) % 7;
    let day = t.day_of_year() - 1;
    if day < first { 0 } else { (day - first) / 7 + 1 }
}

fn numeric_offset(t: &Zoned, separator: &str) -> String {
    let seconds = t.offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("{sign}{:02}{separator}{:02}", abs / 3600, abs / 60 % 60)
}

fn abbreviation(t: &Zoned) -> String {
    t.time_zone()
        .to_offset_info(t.timestamp())
        .abbreviation()
        .to_string()
}
