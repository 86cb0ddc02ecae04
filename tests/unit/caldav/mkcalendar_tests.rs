use caldav_request::{BuildError, DavRequest, DocumentFormat, MkCalendar};

use crate::util::{child_names, find, flatten};

const PROP: &str = "c:mkcalendar/d:set/d:prop";

#[test]
fn builds_displayname_and_description() {
    let body = MkCalendar::new()
        .displayname("Personal")
        .description("Family events")
        .to_xml()
        .unwrap();
    let nodes = flatten(&body);

    let root = find(&nodes, "c:mkcalendar").expect("root");
    assert_eq!(root.attr("xmlns:d"), Some("DAV:"));
    assert_eq!(root.attr("xmlns:c"), Some("urn:ietf:params:xml:ns:caldav"));

    assert_eq!(
        child_names(&nodes, PROP),
        vec!["d:displayname", "c:calendar-description"]
    );
    assert_eq!(find(&nodes, &format!("{PROP}/d:displayname")).unwrap().text, "Personal");
    let description = find(&nodes, &format!("{PROP}/c:calendar-description")).unwrap();
    assert_eq!(description.text, "Family events");
    assert_eq!(description.attr("xml:lang"), Some("en"));
}

#[test]
fn only_displayname() {
    let nodes = flatten(&MkCalendar::new().displayname("Work").to_xml().unwrap());
    assert_eq!(child_names(&nodes, PROP), vec!["d:displayname"]);
}

#[test]
fn only_description() {
    let nodes = flatten(&MkCalendar::new().description("Shared").to_xml().unwrap());
    assert_eq!(child_names(&nodes, PROP), vec!["c:calendar-description"]);
}

#[test]
fn empty_values_keep_the_set_prop_shell() {
    for calendar in [
        MkCalendar::new(),
        MkCalendar::new().displayname("").description(""),
    ] {
        let nodes = flatten(&calendar.to_xml().unwrap());
        let paths: Vec<&str> = nodes.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["c:mkcalendar", "c:mkcalendar/d:set", PROP]);
    }

    let compact = MkCalendar::new().to_xml_with(DocumentFormat::Compact).unwrap();
    assert!(compact.ends_with("<d:set><d:prop></d:prop></d:set></c:mkcalendar>"));
}

#[test]
fn text_is_escaped() {
    let body = MkCalendar::new()
        .displayname("R&D <team>")
        .to_xml()
        .unwrap();
    assert!(body.contains("<d:displayname>R&amp;D &lt;team&gt;</d:displayname>"));
}

#[test]
fn mkcalendar_has_no_depth() {
    let calendar = MkCalendar::new();
    assert_eq!(calendar.method(), "MKCALENDAR");
    assert_eq!(calendar.depth(), None);
}

#[test]
fn rejects_characters_xml_cannot_carry() {
    for calendar in [
        MkCalendar::new().displayname("Work\u{0}\u{1b}"),
        MkCalendar::new().displayname("Work").description("line\u{c}feed"),
        MkCalendar::new().description("\u{FFFF}"),
    ] {
        let result = calendar.to_xml();
        assert!(
            matches!(result, Err(BuildError::InvalidArgument(_))),
            "{calendar:?} -> {result:?}"
        );
    }
}

#[test]
fn tabs_and_line_breaks_are_kept() {
    let body = MkCalendar::new()
        .description("first\tline\r\nsecond line")
        .to_xml()
        .unwrap();
    assert!(body.contains(">first\tline\r\nsecond line</c:calendar-description>"));
}
