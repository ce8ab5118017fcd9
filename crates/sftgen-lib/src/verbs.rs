//! The verb set and composite expansions.

/// One format directive, as written after `%`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    // Names
    WeekdayShort,
    WeekdayLong,
    MonthShort,
    MonthLong,

    // Date fields
    Century,
    Day,
    DaySpace,
    DayOfYear,
    Month,
    Year,
    YearShort,
    IsoYear,
    IsoYearShort,
    IsoWeek,
    WeekOfYearSunday,
    WeekOfYearMonday,
    WeekdayMonday,
    WeekdaySunday,

    // Time fields
    Hour,
    HourSpace,
    Hour12,
    Hour12Space,
    Minute,
    Second,
    Nanosecond,
    MeridiemUpper,
    MeridiemLower,
    UnixSeconds,

    // Zone
    ZoneOffset,
    ZoneName,

    // Literals
    Newline,
    Tab,
    Percent,

    // Composites
    DateTime,
    UsDate,
    IsoDate,
    Clock12,
    HourMinute,
    Time,
    DateTimeZone,

    // Non-standard
    Rfc3339Zone,
    Hour12Min,
    Millisecond,
    Microsecond,
}

/// One step of a composite verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    Verb(Verb),
    Literal(&'static str),
}

use Piece::{Literal as L, Verb as V};

impl Verb {
    /// Look up the verb for the character after `%`.
    ///
    /// Non-standard verbs are only recognized when `allow_extra` is set.
    pub fn from_code(code: char, allow_extra: bool) -> Option<Verb> {
        let verb = match code {
            'a' => Verb::WeekdayShort,
            'A' => Verb::WeekdayLong,
            'b' | 'h' => Verb::MonthShort,
            'B' => Verb::MonthLong,
            'c' => Verb::DateTime,
            'C' => Verb::Century,
            'd' => Verb::Day,
            'D' | 'x' => Verb::UsDate,
            'e' => Verb::DaySpace,
            'F' => Verb::IsoDate,
            'g' => Verb::IsoYearShort,
            'G' => Verb::IsoYear,
            'H' => Verb::Hour,
            'I' => Verb::Hour12,
            'j' => Verb::DayOfYear,
            'k' => Verb::HourSpace,
            'l' => Verb::Hour12Space,
            'm' => Verb::Month,
            'M' => Verb::Minute,
            'n' => Verb::Newline,
            'N' => Verb::Nanosecond,
            'p' => Verb::MeridiemUpper,
            'P' => Verb::MeridiemLower,
            'r' => Verb::Clock12,
            'R' => Verb::HourMinute,
            's' => Verb::UnixSeconds,
            'S' => Verb::Second,
            't' => Verb::Tab,
            'T' | 'X' => Verb::Time,
            'u' => Verb::WeekdayMonday,
            'U' => Verb::WeekOfYearSunday,
            'V' => Verb::IsoWeek,
            'w' => Verb::WeekdaySunday,
            'W' => Verb::WeekOfYearMonday,
            'y' => Verb::YearShort,
            'Y' => Verb::Year,
            'z' => Verb::ZoneOffset,
            'Z' => Verb::ZoneName,
            '%' => Verb::Percent,
            '+' => Verb::DateTimeZone,
            '1' if allow_extra => Verb::Rfc3339Zone,
            '2' if allow_extra => Verb::Hour12Min,
            '3' if allow_extra => Verb::Millisecond,
            '4' if allow_extra => Verb::Microsecond,
            _ => return None,
        };
        Some(verb)
    }

    /// Canonical code for this verb (aliases map to one code).
    pub fn code(self) -> char {
        match self {
            Verb::WeekdayShort => 'a',
            Verb::WeekdayLong => 'A',
            Verb::MonthShort => 'b',
            Verb::MonthLong => 'B',
            Verb::DateTime => 'c',
            Verb::Century => 'C',
            Verb::Day => 'd',
            Verb::UsDate => 'D',
            Verb::DaySpace => 'e',
            Verb::IsoDate => 'F',
            Verb::IsoYearShort => 'g',
            Verb::IsoYear => 'G',
            Verb::Hour => 'H',
            Verb::Hour12 => 'I',
            Verb::DayOfYear => 'j',
            Verb::HourSpace => 'k',
            Verb::Hour12Space => 'l',
            Verb::Month => 'm',
            Verb::Minute => 'M',
            Verb::Newline => 'n',
            Verb::Nanosecond => 'N',
            Verb::MeridiemUpper => 'p',
            Verb::MeridiemLower => 'P',
            Verb::Clock12 => 'r',
            Verb::HourMinute => 'R',
            Verb::UnixSeconds => 's',
            Verb::Second => 'S',
            Verb::Tab => 't',
            Verb::Time => 'T',
            Verb::WeekdayMonday => 'u',
            Verb::WeekOfYearSunday => 'U',
            Verb::IsoWeek => 'V',
            Verb::WeekdaySunday => 'w',
            Verb::WeekOfYearMonday => 'W',
            Verb::YearShort => 'y',
            Verb::Year => 'Y',
            Verb::ZoneOffset => 'z',
            Verb::ZoneName => 'Z',
            Verb::Percent => '%',
            Verb::DateTimeZone => '+',
            Verb::Rfc3339Zone => '1',
            Verb::Hour12Min => '2',
            Verb::Millisecond => '3',
            Verb::Microsecond => '4',
        }
    }

    /// Whether the verb is only available with extra verbs enabled.
    pub fn is_extra(self) -> bool {
        matches!(
            self,
            Verb::Rfc3339Zone | Verb::Hour12Min | Verb::Millisecond | Verb::Microsecond
        )
    }

    /// The ordered pieces a composite verb unfolds into.
    ///
    /// Returns `None` for verbs with their own rule.
    pub fn expansion(self) -> Option<&'static [Piece]> {
        let pieces: &'static [Piece] = match self {
            Verb::DateTime => &[
                V(Verb::WeekdayShort),
                L(" "),
                V(Verb::MonthShort),
                L(" "),
                V(Verb::DaySpace),
                L(" "),
                V(Verb::Time),
                L(" "),
                V(Verb::Year),
            ],
            Verb::UsDate => &[
                V(Verb::Month),
                L("/"),
                V(Verb::Day),
                L("/"),
                V(Verb::YearShort),
            ],
            Verb::IsoDate => &[V(Verb::Year), L("-"), V(Verb::Month), L("-"), V(Verb::Day)],
            Verb::Clock12 => &[
                V(Verb::Hour12),
                L(":"),
                V(Verb::Minute),
                L(":"),
                V(Verb::Second),
                L(" "),
                V(Verb::MeridiemUpper),
            ],
            Verb::HourMinute => &[V(Verb::Hour), L(":"), V(Verb::Minute)],
            Verb::Time => &[V(Verb::Hour), L(":"), V(Verb::Minute), L(":"), V(Verb::Second)],
            Verb::DateTimeZone => &[
                V(Verb::WeekdayShort),
                L(" "),
                V(Verb::MonthShort),
                L(" "),
                V(Verb::DaySpace),
                L(" "),
                V(Verb::Time),
                L(" "),
                V(Verb::ZoneName),
                L(" "),
                V(Verb::Year),
            ],
            Verb::Newline => &[L("\n")],
            Verb::Tab => &[L("\t")],
            Verb::Percent => &[L("%")],
            _ => return None,
        };
        Some(pieces)
    }

    /// Every verb, standard ones first.
    pub fn all() -> &'static [Verb] {
        &[
            Verb::WeekdayShort,
            Verb::WeekdayLong,
            Verb::MonthShort,
            Verb::MonthLong,
            Verb::DateTime,
            Verb::Century,
            Verb::Day,
            Verb::UsDate,
            Verb::DaySpace,
            Verb::IsoDate,
            Verb::IsoYearShort,
            Verb::IsoYear,
            Verb::Hour,
            Verb::Hour12,
            Verb::DayOfYear,
            Verb::HourSpace,
            Verb::Hour12Space,
            Verb::Month,
            Verb::Minute,
            Verb::Newline,
            Verb::Nanosecond,
            Verb::MeridiemUpper,
            Verb::MeridiemLower,
            Verb::Clock12,
            Verb::HourMinute,
            Verb::UnixSeconds,
            Verb::Second,
            Verb::Tab,
            Verb::Time,
            Verb::WeekdayMonday,
            Verb::WeekOfYearSunday,
            Verb::IsoWeek,
            Verb::WeekdaySunday,
            Verb::WeekOfYearMonday,
            Verb::YearShort,
            Verb::Year,
            Verb::ZoneOffset,
            Verb::ZoneName,
            Verb::Percent,
            Verb::DateTimeZone,
            Verb::Rfc3339Zone,
            Verb::Hour12Min,
            Verb::Millisecond,
            Verb::Microsecond,
        ]
    }
}
