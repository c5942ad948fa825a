//! XML reader.
//!
//! Every element named like the layout's record element is one record,
//! wherever it sits in the document. Each field takes the text content of
//! the first descendant element with the field's name.

use std::{fs, path::Path};

use roxmltree::{Document, Node};

use super::{
    record::{RecordLayout, Row, Rows},
    ImportFormat,
};
use crate::error::{Result, TrackerError};

pub(super) fn read_rows(path: &Path, layout: RecordLayout) -> Result<Rows> {
    let text = fs::read_to_string(path).map_err(|source| TrackerError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;

    let document = Document::parse(&text).map_err(|e| TrackerError::Parse {
        format: ImportFormat::Xml,
        message: e.to_string(),
    })?;

    // The document borrows `text`, so records are shaped up front
    let rows: Vec<Row> = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == layout.element)
        .enumerate()
        .map(|(index, node)| shape_element(node, layout, index + 1))
        .collect();

    Ok(Box::new(rows.into_iter().map(Ok)))
}

fn shape_element(element: Node, layout: RecordLayout, position: usize) -> Row {
    let mut values = Vec::with_capacity(layout.fields.len());

    for field in layout.fields {
        match child_text(element, field) {
            Some(value) => values.push(value),
            None => {
                return Row::Malformed {
                    position,
                    reason: format!("Missing <{field}> element"),
                }
            }
        }
    }

    Row::Fields { position, values }
}

fn child_text(element: Node, name: &str) -> Option<String> {
    element
        .descendants()
        .skip(1)
        .find(|node| node.is_element() && node.tag_name().name() == name)
        .map(|node| {
            node.descendants()
                .filter(Node::is_text)
                .filter_map(|text| text.text())
                .collect()
        })
}
