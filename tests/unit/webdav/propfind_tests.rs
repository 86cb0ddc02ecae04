use caldav_request::{BuildError, DavRequest, Depth, DocumentFormat, Property, PropfindRequest};

use crate::util::{child_names, declared_prefixes, find, flatten};

const PROP: &str = "d:propfind/d:prop";

fn expected_element(property: Property) -> String {
    let prefix = match property {
        Property::GetCtag => "cs",
        _ => "d",
    };
    format!("{prefix}:{}", property.identifier().replace('_', "-"))
}

#[test]
fn builds_requested_properties_in_order() {
    let body = PropfindRequest::new(["sync_token", "displayname", "getctag"])
        .to_xml()
        .expect("supported properties");

    let nodes = flatten(&body);
    assert_eq!(
        child_names(&nodes, PROP),
        vec!["d:sync-token", "d:displayname", "cs:getctag"]
    );
    assert!(body.contains("<d:sync-token/>"));
    assert!(body.contains("<cs:getctag/>"));
}

#[test]
fn every_subset_of_the_vocabulary_is_serialized_faithfully() {
    let all = Property::ALL;
    for mask in 1u32..(1 << all.len()) {
        let subset: Vec<Property> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, p)| *p)
            .collect();

        let body = PropfindRequest::from_properties(subset.iter().copied())
            .to_xml_with(DocumentFormat::Compact)
            .expect("vocabulary subset");
        let nodes = flatten(&body);

        let expected: Vec<String> = subset.iter().copied().map(expected_element).collect();
        assert_eq!(child_names(&nodes, PROP), expected, "mask {mask:#b}");
    }
}

#[test]
fn reversed_order_is_preserved() {
    let forward = PropfindRequest::from_properties(Property::ALL);
    let mut reversed_props = Property::ALL;
    reversed_props.reverse();
    let reversed = PropfindRequest::from_properties(reversed_props);

    let mut forward_names = child_names(&flatten(&forward.to_xml().unwrap()), PROP);
    let reversed_names = child_names(&flatten(&reversed.to_xml().unwrap()), PROP);
    forward_names.reverse();
    assert_eq!(forward_names, reversed_names);
}

#[test]
fn root_declares_dav_and_calendarserver_namespaces() {
    let body = PropfindRequest::new(["getctag"]).to_xml().unwrap();
    assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let nodes = flatten(&body);
    let root = find(&nodes, "d:propfind").expect("root element");
    assert_eq!(root.attr("xmlns:d"), Some("DAV:"));
    assert_eq!(root.attr("xmlns:cs"), Some("http://calendarserver.org/ns/"));
    assert_eq!(declared_prefixes(&nodes), vec!["cs", "d"]);
}

#[test]
fn unsupported_property_reports_the_vocabulary() {
    let err = PropfindRequest::new(["displayname", "calendar_color", "getctag"])
        .to_xml()
        .expect_err("calendar_color is not supported");

    match &err {
        BuildError::UnsupportedProperty {
            property,
            supported,
        } => {
            assert_eq!(property, "calendar_color");
            assert_eq!(supported, &Property::supported_identifiers());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains("calendar_color"));
    for identifier in Property::supported_identifiers() {
        assert!(message.contains(identifier), "{message}");
    }
}

#[test]
fn hyphenated_or_cased_identifiers_are_rejected() {
    for identifier in ["sync-token", "DisplayName", "GETCTAG", " displayname"] {
        let result = PropfindRequest::new([identifier]).to_xml();
        assert!(
            matches!(result, Err(BuildError::UnsupportedProperty { .. })),
            "{identifier} should be rejected"
        );
    }
}

#[test]
fn empty_property_list_is_invalid() {
    let result = PropfindRequest::new(Vec::<String>::new()).to_xml();
    assert!(matches!(result, Err(BuildError::InvalidArgument(_))));
}

#[test]
fn parses_identifiers_via_from_str() {
    assert_eq!("sync_token".parse::<Property>().unwrap(), Property::SyncToken);
    assert_eq!(Property::GetCtag.to_string(), "getctag");
    assert!("nope".parse::<Property>().is_err());
}

#[test]
fn propfind_method_and_depth() {
    let request = PropfindRequest::new(["displayname"]);
    assert_eq!(request.method(), "PROPFIND");
    assert_eq!(request.depth(), Some(Depth::Zero));
    assert_eq!(request.properties(), ["displayname".to_string()]);
}

#[test]
fn output_is_deterministic() {
    let request = PropfindRequest::new(["displayname", "getctag", "sync_token"]);
    assert_eq!(request.to_xml().unwrap(), request.to_xml().unwrap());
    assert_eq!(
        request.to_bytes().unwrap(),
        request.to_bytes().unwrap()
    );
}
