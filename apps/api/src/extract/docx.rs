//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the document body lives in
//! `word/document.xml` as WordprocessingML. Text runs sit in `<w:t>`
//! elements; paragraphs (`<w:p>`) and explicit breaks (`<w:br/>`) become
//! newlines so downstream sentence segmentation sees paragraph structure.

use std::io::{BufReader, Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Extracts the plain paragraph text of a DOCX document.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a valid docx archive: {e}")))?;
    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| ExtractError::Docx(format!("missing {DOCUMENT_ENTRY}: {e}")))?;
    let mut xml = Vec::new();
    entry
        .read_to_end(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("failed to read {DOCUMENT_ENTRY}: {e}")))?;
    document_xml_to_text(&xml)
}

/// Walks the WordprocessingML event stream and collects visible text.
fn document_xml_to_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(BufReader::new(xml));
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"br" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("invalid document xml: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Docx(format!("invalid document xml: {e}"))),
        }
        buf.clear();
    }

    Ok(text)
}
