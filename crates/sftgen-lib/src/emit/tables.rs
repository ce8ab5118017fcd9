//! Constant lookup tables referenced by generated code.
//!
//! Name tables are one concatenated byte string plus a start-offset array
//! with one extra trailing entry, so name `i` is `NAMES[STARTS[i]..STARTS[i + 1]]`.

/// Digit lookup: `0`-`9` at 0..10, then a space and `1`-`9` at 10..20.
pub const DIGITS: &str = "0123456789 123456789";

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
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

/// A table the generated function may declare.
///
/// Ordering is declaration order in the emitted unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    Digits,
    Weekdays,
    Months,
    MeridiemUpper,
    MeridiemLower,
}

impl Table {
    /// Identifier of the byte table.
    pub fn name(self) -> &'static str {
        match self {
            Table::Digits => "DIGITS",
            Table::Weekdays => "WEEKDAYS",
            Table::Months => "MONTHS",
            Table::MeridiemUpper => "MERIDIEM_UPPER",
            Table::MeridiemLower => "MERIDIEM_LOWER",
        }
    }

    /// Identifier of the start-offset array, for name tables.
    pub fn starts_name(self) -> Option<&'static str> {
        match self {
            Table::Weekdays => Some("WEEKDAY_STARTS"),
            Table::Months => Some("MONTH_STARTS"),
            _ => None,
        }
    }

    fn names(self) -> Option<&'static [&'static str]> {
        match self {
            Table::Weekdays => Some(&WEEKDAY_NAMES),
            Table::Months => Some(&MONTH_NAMES),
            _ => None,
        }
    }

    /// Contents of the byte table.
    pub fn contents(self) -> String {
        match self {
            Table::Digits => DIGITS.to_string(),
            Table::MeridiemUpper => "AMPM".to_string(),
            Table::MeridiemLower => "ampm".to_string(),
            Table::Weekdays | Table::Months => self.names().unwrap_or_default().concat(),
        }
    }

    /// Length of the longest entry, for name tables.
    pub fn longest_name(self) -> usize {
        self.names()
            .unwrap_or_default()
            .iter()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
    }

    /// `const` items declaring this table.
    pub fn declarations(self) -> Vec<String> {
        let contents = self.contents();
        let mut items = vec![format!(
            "const {}: &[u8; {}] = b\"{}\";",
            self.name(),
            contents.len(),
            contents
        )];

        if let (Some(starts_name), Some(names)) = (self.starts_name(), self.names()) {
            let starts = starts(names);
            let list: Vec<String> = starts.iter().map(|s| s.to_string()).collect();
            items.push(format!(
                "const {starts_name}: [usize; {}] = [{}];",
                starts.len(),
                list.join(", ")
            ));
        }

        items
    }
}

/// Start offsets of `names` within their concatenation, plus the total length.
pub fn starts(names: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(names.len() + 1);
    let mut at = 0;
    offsets.push(at);
    for name in names {
        at += name.len();
        offsets.push(at);
    }
    offsets
}
