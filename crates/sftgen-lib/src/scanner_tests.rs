use crate::Error;
use crate::scanner::{Segment, scan};
use crate::verbs::Verb;

#[test]
fn literal_only() {
    let segments = scan("hello", false).unwrap();
    assert_eq!(segments, vec![Segment::Literal("hello".into())]);
}

#[test]
fn literals_and_verbs_interleave() {
    let segments = scan("[%Y-%m]", false).unwrap();
    assert_eq!(
        segments,
        vec![
            Segment::Literal("[".into()),
            Segment::Verb {
                verb: Verb::Year,
                index: 2
            },
            Segment::Literal("-".into()),
            Segment::Verb {
                verb: Verb::Month,
                index: 5
            },
            Segment::Literal("]".into()),
        ]
    );
}

#[test]
fn adjacent_verbs_have_no_empty_literal() {
    let segments = scan("%H%M", false).unwrap();
    assert_eq!(segments.len(), 2);
    assert!(
        segments
            .iter()
            .all(|segment| matches!(segment, Segment::Verb { .. }))
    );
}

#[test]
fn percent_escape_is_a_verb() {
    let segments = scan("%%", false).unwrap();
    assert_eq!(
        segments,
        vec![Segment::Verb {
            verb: Verb::Percent,
            index: 1
        }]
    );
}

#[test]
fn aliases_map_to_the_same_verb() {
    let segments = scan("%h%b%x%D%X%T", false).unwrap();
    let verbs: Vec<Verb> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Verb { verb, .. } => Some(*verb),
            Segment::Literal(_) => None,
        })
        .collect();
    assert_eq!(
        verbs,
        vec![
            Verb::MonthShort,
            Verb::MonthShort,
            Verb::UsDate,
            Verb::UsDate,
            Verb::Time,
            Verb::Time,
        ]
    );
}

#[test]
fn empty_spec() {
    assert_eq!(scan("", false), Err(Error::EmptySpec));
}

#[test]
fn unknown_verb_reports_index_of_code() {
    assert_eq!(
        scan("%q", false),
        Err(Error::UnknownVerb { verb: 'q', index: 1 })
    );
    assert_eq!(
        scan("ab %Y %q", false),
        Err(Error::UnknownVerb { verb: 'q', index: 7 })
    );
}

#[test]
fn unknown_verb_index_is_byte_offset() {
    assert_eq!(
        scan("é%é", false),
        Err(Error::UnknownVerb { verb: 'é', index: 3 })
    );
}

#[test]
fn unterminated_verb() {
    assert_eq!(scan("%", false), Err(Error::UnterminatedVerb { index: 0 }));
    assert_eq!(
        scan("%Y %", false),
        Err(Error::UnterminatedVerb { index: 3 })
    );
}

#[test]
fn extra_verbs_are_gated() {
    assert_eq!(
        scan("%3", false),
        Err(Error::UnknownVerb { verb: '3', index: 1 })
    );
    assert_eq!(
        scan("%3", true),
        Ok(vec![Segment::Verb {
            verb: Verb::Millisecond,
            index: 1
        }])
    );
}

#[test]
fn non_ascii_literals_pass_through() {
    let segments = scan("日%d日", false).unwrap();
    assert_eq!(
        segments,
        vec![
            Segment::Literal("日".into()),
            Segment::Verb {
                verb: Verb::Day,
                index: 4
            },
            Segment::Literal("日".into()),
        ]
    );
}
