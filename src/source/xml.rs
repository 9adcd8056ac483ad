//! Thesaurus XML reader.
//!
//! Expected layout, one file per part of speech:
//!
//! ```text
//! <synsets>
//!   <synset>
//!     <terms><term>warm</term><term>mild</term></terms>
//!     <gloss desc="orig"><orig>moderately hot</orig></gloss>
//!     <ants><ant>cool</ant></ants>
//!   </synset>
//! </synsets>
//! ```
//!
//! Only `<synset>` elements directly below the root count. Terms come from
//! `<terms>/<term>`, the definition from the first `<gloss desc="orig">/<orig>`,
//! and antonyms from every `<ant>` anywhere inside the synset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{LadderError, Result};
use crate::lexicon::{Category, SynsetRecord};
use crate::source::SynsetSource;

/// A per-category thesaurus XML file.
#[derive(Debug, Clone)]
pub struct XmlSynsetSource {
    path: PathBuf,
    category: Category,
}

impl XmlSynsetSource {
    /// Create a source with an explicit category.
    pub fn new<P: Into<PathBuf>>(path: P, category: Category) -> Self {
        XmlSynsetSource {
            path: path.into(),
            category,
        }
    }

    /// Create a source whose category is the file stem (`adj.xml`, ...).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self::new(path, Category::from_path(path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynsetSource for XmlSynsetSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn category(&self) -> Category {
        self.category
    }

    fn read_records(&self) -> Result<Vec<SynsetRecord>> {
        let file = File::open(&self.path)
            .map_err(|e| LadderError::source_unreadable(self.name(), e.to_string()))?;
        parse_synsets(BufReader::new(file))
            .map_err(|e| LadderError::source_unreadable(self.name(), e.to_string()))
    }
}

/// Where the reader currently is relative to the enclosing synset.
#[derive(Debug, Default)]
struct SynsetCursor {
    record: SynsetRecord,
    /// Element names below the `<synset>` element.
    path: Vec<Vec<u8>>,
    /// Set while inside a `<gloss desc="orig">` directly below the synset.
    in_orig_gloss: bool,
    text: String,
}

impl SynsetCursor {
    fn open(&mut self, element: &BytesStart<'_>) {
        let name = element.name().as_ref().to_vec();
        if name == b"gloss" && self.path.is_empty() && is_orig(element) {
            self.in_orig_gloss = true;
        }
        self.path.push(name);
        self.text.clear();
    }

    fn close(&mut self) {
        let text = self.text.trim().to_string();
        self.text.clear();

        let Some(name) = self.path.last() else {
            return;
        };
        let depth = self.path.len();

        match name.as_slice() {
            b"term" if depth == 2 && self.path[0] == b"terms" => {
                if !text.is_empty() {
                    self.record.terms.push(text);
                }
            }
            b"ant" => {
                if !text.is_empty() {
                    self.record.antonyms.push(text);
                }
            }
            b"orig" if depth == 2 && self.in_orig_gloss => {
                if self.record.definition.is_none() && !text.is_empty() {
                    self.record.definition = Some(text);
                }
            }
            b"gloss" if depth == 1 => self.in_orig_gloss = false,
            _ => {}
        }

        self.path.pop();
    }
}

fn is_orig(element: &BytesStart<'_>) -> bool {
    element
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"desc" && attr.value.as_ref() == b"orig")
}

/// Parse every top-level `<synset>` of a thesaurus document.
///
/// Any XML error fails the whole document.
pub fn parse_synsets<R: BufRead>(reader: R) -> Result<Vec<SynsetRecord>> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();
    // Elements open above the current synset, including the root.
    let mut depth = 0usize;
    let mut cursor: Option<SynsetCursor> = None;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if let Some(current) = cursor.as_mut() {
                    current.open(e);
                } else if depth == 1 && e.name().as_ref() == b"synset" {
                    cursor = Some(SynsetCursor::default());
                } else {
                    depth += 1;
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(current) = cursor.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| LadderError::other(format!("XML text error: {err}")))?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = cursor.as_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let closes_synset = cursor.as_ref().is_some_and(|c| c.path.is_empty());
                if closes_synset {
                    if let Some(done) = cursor.take() {
                        records.push(done.record);
                    }
                } else if let Some(current) = cursor.as_mut() {
                    current.close();
                } else {
                    depth = depth.saturating_sub(1);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LadderError::other(format!(
                    "XML parse error at position {}: {}",
                    xml.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if cursor.is_some() || depth != 0 {
        return Err(LadderError::other("XML document ended inside an open element"));
    }

    Ok(records)
}
