// Copyright 2023 Remi Bernotavicius

use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts category names from a recipe-type XML document, in document
/// order. The document is a flat list of `<recipetype><name>…</name>
/// </recipetype>` elements; attributes and deeper nesting are ignored.
///
/// A parse error ends the scan and whatever complete entries were read
/// before it are returned. Callers that need the full list must supply a
/// well-formed document.
pub fn load_categories(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut names = vec![];
    let mut entry_name = None;
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref().eq_ignore_ascii_case(b"recipetype") {
                    entry_name = None;
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Ok(t) = e.unescape() {
                    text = t.into_owned();
                }
            }
            Ok(Event::End(ref e)) => {
                let tag = e.local_name();
                if tag.as_ref().eq_ignore_ascii_case(b"name") {
                    entry_name = Some(text.clone());
                } else if tag.as_ref().eq_ignore_ascii_case(b"recipetype") {
                    names.push(entry_name.take().unwrap_or_default());
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                log::warn!("category source parse error, returning partial list: {err}");
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<recipetypes>
    <recipetype>
        <name>Vegetarian</name>
    </recipetype>
    <recipetype>
        <name>Fast Food</name>
    </recipetype>
    <recipetype>
        <name>Healthy</name>
    </recipetype>
    <recipetype>
        <name>No-Cook</name>
    </recipetype>
    <recipetype>
        <name>Make Ahead</name>
    </recipetype>
</recipetypes>
"#;

    #[test]
    fn well_formed_document_in_order() {
        assert_eq!(
            load_categories(WELL_FORMED),
            vec!["Vegetarian", "Fast Food", "Healthy", "No-Cook", "Make Ahead"]
        );
    }

    #[test]
    fn bundled_document_in_order() {
        assert_eq!(
            load_categories(crate::RECIPE_TYPES_XML),
            vec!["Vegetarian", "Fast Food", "Healthy", "No-Cook", "Make Ahead"]
        );
    }

    #[test]
    fn malformed_document_keeps_complete_entries() {
        // Cut off in the middle of the third entry's start tag.
        let truncated = "<recipetypes>\
            <recipetype><name>Vegetarian</name></recipetype>\
            <recipetype><name>Fast Food</name></recipetype>\
            <recipetype><nam";
        assert_eq!(load_categories(truncated), vec!["Vegetarian", "Fast Food"]);
    }

    #[test]
    fn truncated_document_keeps_complete_entries() {
        let truncated = "<recipetypes>\
            <recipetype><name>Vegetarian</name></recipetype>\
            <recipetype><name>Heal";
        assert_eq!(load_categories(truncated), vec!["Vegetarian"]);
    }

    #[test]
    fn empty_document_yields_no_categories() {
        assert_eq!(load_categories(""), Vec::<String>::new());
        assert_eq!(load_categories("<recipetypes></recipetypes>"), Vec::<String>::new());
    }
}
