//! Well-known formats, addressable by name or by Go layout string.

use serde::Serialize;

/// A named format and the spec it compiles to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NamedFormat {
    pub name: &'static str,
    /// The reference time rendered in this format, as a Go layout.
    pub layout: &'static str,
    pub spec: &'static str,
}

const fn named(name: &'static str, layout: &'static str, spec: &'static str) -> NamedFormat {
    NamedFormat { name, layout, spec }
}

pub const NAMED_FORMATS: &[NamedFormat] = &[
    named("ANSIC", "Mon Jan _2 15:04:05 2006", "%c"),
    named("UnixDate", "Mon Jan _2 15:04:05 MST 2006", "%a %b %e %T %Z %Y"),
    named("RubyDate", "Mon Jan 02 15:04:05 -0700 2006", "%a %b %d %T %z %Y"),
    named("RFC822", "02 Jan 06 15:04 MST", "%d %b %y %R %Z"),
    named("RFC822Z", "02 Jan 06 15:04 -0700", "%d %b %y %R %z"),
    named("RFC850", "Monday, 02-Jan-06 15:04:05 MST", "%A, %d-%b-%y %T %Z"),
    named("RFC1123", "Mon, 02 Jan 2006 15:04:05 MST", "%a, %d %b %Y %T %Z"),
    named("RFC1123Z", "Mon, 02 Jan 2006 15:04:05 -0700", "%a, %d %b %Y %T %z"),
    named("RFC3339", "2006-01-02T15:04:05Z07:00", "%Y-%m-%dT%T%1"),
    named(
        "RFC3339Nano",
        "2006-01-02T15:04:05.999999999Z07:00",
        "%Y-%m-%dT%T.%N%1",
    ),
    named("Kitchen", "3:04PM", "%2:%M%p"),
    named("Stamp", "Jan _2 15:04:05", "%b %e %T"),
    named("StampMilli", "Jan _2 15:04:05.000", "%b %e %T.%3"),
    named("StampMicro", "Jan _2 15:04:05.000000", "%b %e %T.%4"),
    named("StampNano", "Jan _2 15:04:05.000000000", "%b %e %T.%N"),
];

/// Find a named format by its name or its layout string.
pub fn lookup(key: &str) -> Option<&'static NamedFormat> {
    NAMED_FORMATS
        .iter()
        .find(|format| format.name == key || format.layout == key)
}
