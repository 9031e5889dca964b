//! Parsers for the remote vocabulary documents.

use crate::error::{AuditError, ParseErrorKind, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use scraper::{ElementRef, Html, Selector};

/// Extract media type identifiers from the IANA registry page.
///
/// The registry is split into one table per top-level type. Each table has a
/// "Template" header column; the second column of every row links to the
/// registration template, and that link's `href` is the identifier
/// (`application/json`, `text/csv`, ...).
#[must_use]
pub fn parse_media_type_registry(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let (Ok(th), Ok(td), Ok(a)) = (
        Selector::parse("th"),
        Selector::parse("td"),
        Selector::parse("a"),
    ) else {
        return Vec::new();
    };

    let mut media_types = Vec::new();
    for header in document
        .select(&th)
        .filter(|h| h.text().collect::<String>().trim() == "Template")
    {
        let Some(table) = header
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "table")
        else {
            continue;
        };

        for cell in table.select(&td).skip(1).step_by(3) {
            if let Some(href) = cell.select(&a).next().and_then(|l| l.value().attr("href")) {
                media_types.push(href.to_string());
            }
        }
    }
    media_types
}

#[derive(Clone, Copy)]
enum LicenceField {
    Identifier,
    PrefLabel,
}

/// Extract licence identifiers and preferred labels from the SKOS vocabulary.
///
/// Returns every `dc:identifier` value followed by every `skos:prefLabel`
/// value, so both short codes (`CC0`) and labels match during scoring.
pub fn parse_licence_rdf(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut identifiers = Vec::new();
    let mut labels = Vec::new();
    let mut current: Option<(LicenceField, String)> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            AuditError::parse(
                "licence vocabulary",
                ParseErrorKind::InvalidXml(e.to_string()),
            )
        })?;

        match event {
            Event::Start(e) => {
                current = match e.name().as_ref() {
                    b"dc:identifier" => Some((LicenceField::Identifier, String::new())),
                    b"skos:prefLabel" => Some((LicenceField::PrefLabel, String::new())),
                    _ => current,
                };
            }
            Event::Text(t) => {
                if let Some((_, buf)) = current.as_mut() {
                    let text = t.unescape().map_err(|e| {
                        AuditError::parse(
                            "licence vocabulary",
                            ParseErrorKind::InvalidXml(e.to_string()),
                        )
                    })?;
                    buf.push_str(&text);
                }
            }
            Event::CData(t) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::End(e) => {
                let closes_current = matches!(
                    (e.name().as_ref(), &current),
                    (b"dc:identifier", Some((LicenceField::Identifier, _)))
                        | (b"skos:prefLabel", Some((LicenceField::PrefLabel, _)))
                );
                if closes_current && let Some((field, value)) = current.take() {
                    match field {
                        LicenceField::Identifier => identifiers.push(value),
                        LicenceField::PrefLabel => labels.push(value),
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    identifiers.extend(labels);
    Ok(identifiers)
}
