//! Verb rules.
//!
//! Each rule requests the timestamp values it needs from the symbol table,
//! derives secondary values algebraically, and calls primitives. Composite
//! verbs never reach a rule of their own: they unfold into their expansion.

use crate::symbols::Symbol;
use crate::verbs::{Piece, Verb};

use super::emitter::OffsetMode;
use super::{Emitter, Table};

const WEEKDAY: &str = "t.weekday().to_sunday_zero_offset() as usize";
const DATE: &str = "(t.year().max(0) as usize, t.month() as usize, t.day() as usize)";
const CLOCK: &str = "(t.hour() as usize, t.minute() as usize, t.second() as usize)";
const ISO_WEEK: &str = "{ let iso = jiff::civil::ISOWeekDate::from_date(t.date()); \
                        (iso.year().max(0) as usize, iso.week() as usize) }";
const DAY_OF_YEAR: &str = "t.day_of_year() as usize";
const NANOSECOND: &str = "t.subsec_nanosecond() as usize";
const UNIX_SECONDS: &str = "t.timestamp().as_second()";
const ZONE_OFFSET: &str = "t.offset().seconds()";
const ZONE_INFO: &str = "t.time_zone().to_offset_info(t.timestamp())";

/// Recorded in the header of any unit that reads a year.
const YEAR_RANGE_NOTE: &str = "Years before 0000 are written as 0000.";

/// Longest decimal rendering of an `i64`.
const UNIX_SECONDS_BOUND: usize = 20;
/// Preallocation estimate for a zone abbreviation; longer ones grow the buffer.
const ZONE_NAME_BOUND: usize = 30;

impl Emitter {
    /// Compile one verb at the current write position.
    pub fn compile_verb(&mut self, verb: Verb) {
        log::trace!("compile %{} ({verb:?}) in {:?}", verb.code(), self.mode);

        if let Some(pieces) = verb.expansion() {
            for piece in pieces {
                match *piece {
                    Piece::Verb(inner) => self.compile_verb(inner),
                    Piece::Literal(text) => self.literal(text),
                }
            }
            return;
        }

        match verb {
            Verb::WeekdayShort => {
                let start = self.weekday_start();
                self.copy_range(Table::Weekdays, start, 3);
            }
            Verb::WeekdayLong => {
                let start = self.weekday_start();
                let weekday = self.weekday();
                let end = self.derive(format!("WEEKDAY_STARTS[{weekday} + 1]"));
                self.long_name(Table::Weekdays, start, end);
            }
            Verb::MonthShort => {
                let start = self.month_start();
                self.copy_range(Table::Months, start, 3);
            }
            Verb::MonthLong => {
                let start = self.month_start();
                let month = self.month();
                let end = self.derive(format!("MONTH_STARTS[{month}]"));
                self.long_name(Table::Months, start, end);
            }

            Verb::Century => {
                let year = self.year();
                let century = self.derive(format!("{year} / 100"));
                self.zero_padded(century, 2);
            }
            Verb::Day => {
                let day = self.day();
                self.zero_padded(day, 2);
            }
            Verb::DaySpace => {
                let day = self.day();
                self.space_padded(day);
            }
            Verb::DayOfYear => {
                let day_of_year = self.day_of_year();
                self.zero_padded(day_of_year, 3);
            }
            Verb::Month => {
                let month = self.month();
                self.zero_padded(month, 2);
            }
            Verb::Year => {
                let year = self.year();
                self.zero_padded(year, 4);
            }
            Verb::YearShort => {
                let year = self.year();
                let short = self.derive(format!("{year} % 100"));
                self.zero_padded(short, 2);
            }
            Verb::IsoYear => {
                let iso_year = self.iso_year();
                self.zero_padded(iso_year, 4);
            }
            Verb::IsoYearShort => {
                let iso_year = self.iso_year();
                let short = self.derive(format!("{iso_year} % 100"));
                self.zero_padded(short, 2);
            }
            Verb::IsoWeek => {
                let iso_week = self.symbols.intern(ISO_WEEK, 1, 2);
                self.zero_padded(iso_week, 2);
            }
            Verb::WeekOfYearSunday => {
                let day_of_year = self.day_of_year();
                let weekday = self.weekday();
                let week = self.derive(format!("({day_of_year} + 6 - {weekday}) / 7"));
                self.zero_padded(week, 2);
            }
            Verb::WeekOfYearMonday => {
                let day_of_year = self.day_of_year();
                let weekday = self.weekday();
                let week = self.derive(format!(
                    "({day_of_year} + 6 - ({weekday} + 6) % 7) / 7"
                ));
                self.zero_padded(week, 2);
            }
            Verb::WeekdayMonday => {
                let weekday = self.weekday();
                let monday_based = self.derive(format!("({weekday} + 6) % 7 + 1"));
                self.zero_padded(monday_based, 1);
            }
            Verb::WeekdaySunday => {
                let weekday = self.weekday();
                self.zero_padded(weekday, 1);
            }

            Verb::Hour => {
                let hour = self.hour();
                self.zero_padded(hour, 2);
            }
            Verb::HourSpace => {
                let hour = self.hour();
                self.space_padded(hour);
            }
            Verb::Hour12 => {
                let hour12 = self.hour12();
                self.zero_padded(hour12, 2);
            }
            Verb::Hour12Space => {
                let hour12 = self.hour12();
                self.space_padded(hour12);
            }
            Verb::Hour12Min => {
                let hour12 = self.hour12();
                self.minimal(hour12);
            }
            Verb::Minute => {
                let minute = self.symbols.intern(CLOCK, 1, 3);
                self.zero_padded(minute, 2);
            }
            Verb::Second => {
                let second = self.symbols.intern(CLOCK, 2, 3);
                self.zero_padded(second, 2);
            }
            Verb::Nanosecond => {
                let nanosecond = self.symbols.single(NANOSECOND);
                self.zero_padded(nanosecond, 9);
            }
            Verb::Millisecond => {
                let nanosecond = self.symbols.single(NANOSECOND);
                let millisecond = self.derive(format!("{nanosecond} / 1000000"));
                self.zero_padded(millisecond, 3);
            }
            Verb::Microsecond => {
                let nanosecond = self.symbols.single(NANOSECOND);
                let microsecond = self.derive(format!("{nanosecond} / 1000"));
                self.zero_padded(microsecond, 6);
            }
            Verb::MeridiemUpper => self.meridiem(Table::MeridiemUpper),
            Verb::MeridiemLower => self.meridiem(Table::MeridiemLower),
            Verb::UnixSeconds => {
                let seconds = self.symbols.single(UNIX_SECONDS);
                self.display(seconds, UNIX_SECONDS_BOUND);
            }

            Verb::ZoneOffset => self.zone_offset(false),
            Verb::Rfc3339Zone => self.zone_offset(true),
            Verb::ZoneName => {
                let info = self.symbols.single(ZONE_INFO);
                self.copy_estimated(
                    &format!("{info}.abbreviation().as_bytes()"),
                    ZONE_NAME_BOUND,
                );
            }

            Verb::Newline
            | Verb::Tab
            | Verb::Percent
            | Verb::DateTime
            | Verb::UsDate
            | Verb::IsoDate
            | Verb::Clock12
            | Verb::HourMinute
            | Verb::Time
            | Verb::DateTimeZone => unreachable!("{verb:?} is an expansion"),
        }
    }

    /// Compile literal text at the current write position.
    pub fn compile_literal(&mut self, text: &str) {
        log::trace!("compile literal {text:?} in {:?}", self.mode);
        self.literal(text);
    }

    fn derive(&mut self, expr: String) -> Symbol {
        self.symbols.single(&expr)
    }

    fn weekday(&mut self) -> Symbol {
        self.symbols.single(WEEKDAY)
    }

    fn year(&mut self) -> Symbol {
        self.add_note(YEAR_RANGE_NOTE);
        self.symbols.intern(DATE, 0, 3)
    }

    fn iso_year(&mut self) -> Symbol {
        self.add_note(YEAR_RANGE_NOTE);
        self.symbols.intern(ISO_WEEK, 0, 2)
    }

    fn month(&mut self) -> Symbol {
        self.symbols.intern(DATE, 1, 3)
    }

    fn day(&mut self) -> Symbol {
        self.symbols.intern(DATE, 2, 3)
    }

    fn hour(&mut self) -> Symbol {
        self.symbols.intern(CLOCK, 0, 3)
    }

    fn day_of_year(&mut self) -> Symbol {
        self.symbols.single(DAY_OF_YEAR)
    }

    /// 1 through 12; midnight and noon are 12.
    fn hour12(&mut self) -> Symbol {
        let hour = self.hour();
        self.derive(format!("({hour} + 11) % 12 + 1"))
    }

    fn weekday_start(&mut self) -> Symbol {
        let weekday = self.weekday();
        self.derive(format!("WEEKDAY_STARTS[{weekday}]"))
    }

    fn month_start(&mut self) -> Symbol {
        let month = self.month();
        self.derive(format!("MONTH_STARTS[{month} - 1]"))
    }

    fn long_name(&mut self, table: Table, start: Symbol, end: Symbol) {
        let name = self.use_table(table);
        self.copy_value(&format!("&{name}[{start}..{end}]"), table.longest_name());
    }

    fn meridiem(&mut self, table: Table) {
        let hour = self.hour();
        let index = self.derive(format!("{hour} / 12 * 2"));
        self.copy_range(table, index, 2);
    }

    /// `±hhmm`, or `Z` / `±hh:mm` when `rfc3339` is set.
    ///
    /// Both signs are rendered from non-negative values computed up front;
    /// the sign is only tested where the bytes are written.
    fn zone_offset(&mut self, rfc3339: bool) {
        let offset = self.symbols.single(ZONE_OFFSET);
        let negated = self.derive(format!("-{offset}"));
        let west_hours = self.derive(format!("({negated} / 3600) as usize"));
        let west_minutes = self.derive(format!("({negated} / 60 % 60) as usize"));
        let east_hours = self.derive(format!("({offset} / 3600) as usize"));
        let east_minutes = self.derive(format!("({offset} / 60 % 60) as usize"));

        let separator = if rfc3339 { ":" } else { "" };

        let mut branch = if rfc3339 {
            // `Z` is shorter than the numeric forms.
            if self.mode != OffsetMode::Append {
                self.ensure_dynamic();
            }
            let mut branch = self.begin_branch(&format!("{offset} == 0"));
            self.literal("Z");
            self.next_arm(&mut branch, Some(&format!("{offset} < 0")));
            branch
        } else {
            self.begin_branch(&format!("{offset} < 0"))
        };

        self.literal("-");
        self.zero_padded(west_hours, 2);
        self.literal(separator);
        self.zero_padded(west_minutes, 2);

        self.next_arm(&mut branch, None);
        self.literal("+");
        self.zero_padded(east_hours, 2);
        self.literal(separator);
        self.zero_padded(east_minutes, 2);

        self.end_branch(branch);
    }
}
