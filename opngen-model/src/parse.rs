//! XML text to [`Element`] tree.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{Element, Error, Result};

/// Parse a model document into its root element.
///
/// `locator` only labels errors. Comments, processing instructions and the
/// XML declaration are skipped; text and CDATA are collected onto the
/// enclosing element.
pub fn parse_document(xml: &str, locator: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let malformed =
        |message: String, offset: usize| Error::malformed(locator, xml, message, Some(offset));

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let offset = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(start_element(e).map_err(|msg| malformed(msg, offset))?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e).map_err(|msg| malformed(msg, offset))?;
                attach(element, &mut stack, &mut root).map_err(|msg| malformed(msg, offset))?;
            }
            Ok(Event::End(ref e)) => {
                let Some(element) = stack.pop() else {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(malformed(format!("unexpected closing tag '{name}'"), offset));
                };
                attach(element, &mut stack, &mut root).map_err(|msg| malformed(msg, offset))?;
            }
            Ok(Event::Text(ref t)) => {
                let text = t.unescape().map_err(|err| malformed(err.to_string(), offset))?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(&text),
                    None => {
                        let message = "text outside of the root element".to_string();
                        return Err(malformed(message, offset));
                    }
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&String::from_utf8_lossy(c));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(malformed(err.to_string(), reader.buffer_position())),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(
            format!("unclosed tag '{}'", open.name()),
            reader.buffer_position(),
        ));
    }

    root.ok_or_else(|| malformed("document has no root element".to_string(), 0))
}

fn start_element(start: &BytesStart<'_>) -> std::result::Result<Element, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|err| err.to_string())?;
        element.set_attribute(key, value);
    }

    Ok(element)
}

fn attach(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> std::result::Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(format!("second root element '{}'", element.name()));
    }
    *root = Some(element);
    Ok(())
}
