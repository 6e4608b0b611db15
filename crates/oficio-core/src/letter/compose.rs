//! Letter layout: the ordered paragraphs and record table of an Ofício.

use chrono::NaiveDate;
use tracing::debug;

use super::template::{
    date_line, ADDRESSEE_PREFIX, CLOSING, REQUEST_PARAGRAPH, SALUTATION, SIGNATURE_LINE,
    STATUTE_PARAGRAPH, TABLE_HEADER, WARNING_PARAGRAPH,
};
use crate::error::BuildError;
use crate::models::config::LetterTemplate;
use crate::models::letter::LetterRequest;

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A paragraph; `lines` are joined with line breaks inside one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub alignment: Alignment,
    pub bold: bool,
    /// Run size in points, overriding the document default.
    pub size_pt: Option<usize>,
}

impl TextBlock {
    /// Left-aligned paragraph; `\n` in `text` becomes a line break.
    pub fn plain(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Empty spacing paragraph.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, size_pt: usize) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The three-column record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    pub header: [String; 3],
    pub rows: Vec<[String; 3]>,
}

impl RecordTable {
    /// Header row plus data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// A top-level document element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(TextBlock),
    Table(RecordTable),
}

/// The complete letter, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub font_name: String,
    pub font_size_pt: usize,
    pub blocks: Vec<Block>,
}

impl Letter {
    pub fn table(&self) -> Option<&RecordTable> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }
}

/// Lay out the letter for `request`, dated `generated_on`.
///
/// Pure: the same inputs always give the same layout.
pub fn compose(
    request: &LetterRequest,
    template: &LetterTemplate,
    generated_on: NaiveDate,
) -> Result<Letter, BuildError> {
    let period = request.search_period();

    let mut rows = Vec::with_capacity(request.records.len());
    for record in &request.records {
        let row = [
            record.report_number.to_string(),
            record.device_ids_text(),
            period.clone(),
        ];
        for cell in &row {
            check_text(&record.source_file_name, cell)?;
        }
        rows.push(row);
    }

    let title = format!("Ofício nº {}{}", request.letter_number, template.title_suffix);

    let blocks = vec![
        Block::Paragraph(
            TextBlock::plain(&template.document_code)
                .align(Alignment::Right)
                .size(9),
        ),
        Block::Paragraph(TextBlock {
            lines: template.header_lines.clone(),
            alignment: Alignment::Center,
            bold: true,
            size_pt: None,
        }),
        Block::Paragraph(TextBlock::blank()),
        Block::Paragraph(TextBlock::plain(&title).align(Alignment::Center).bold().size(12)),
        Block::Paragraph(TextBlock::plain(&date_line(&template.city, generated_on))),
        Block::Paragraph(TextBlock::plain(&template.reply_email)),
        Block::Paragraph(TextBlock::blank()),
        Block::Paragraph(TextBlock::plain(SALUTATION)),
        Block::Paragraph(TextBlock::plain(&format!("\n{}\n", REQUEST_PARAGRAPH))),
        Block::Table(RecordTable {
            header: TABLE_HEADER.map(str::to_string),
            rows,
        }),
        Block::Paragraph(TextBlock::plain(&format!(
            "\n{}\n\n{}\n",
            WARNING_PARAGRAPH, STATUTE_PARAGRAPH
        ))),
        Block::Paragraph(TextBlock::plain(CLOSING)),
        Block::Paragraph(TextBlock::blank()),
        Block::Paragraph(TextBlock::plain(SIGNATURE_LINE)),
        Block::Paragraph(TextBlock::plain(&template.signatory_name)),
        Block::Paragraph(TextBlock::plain(&template.signatory_title)),
        Block::Paragraph(TextBlock::blank()),
        Block::Paragraph(TextBlock::plain(ADDRESSEE_PREFIX)),
        Block::Paragraph(TextBlock::plain(&template.addressee)),
    ];

    // Letterhead text from config is checked like the table cells
    for block in &blocks {
        if let Block::Paragraph(p) = block {
            for line in &p.lines {
                check_text("letter template", line)?;
            }
        }
    }
    check_text("letter template", &template.font_name)?;

    debug!(
        "Composed letter {} with {} table rows",
        request.letter_number,
        request.records.len() + 1
    );

    Ok(Letter {
        font_name: template.font_name.clone(),
        font_size_pt: template.font_size_pt,
        blocks,
    })
}

/// Reject characters that cannot appear in WordprocessingML text.
fn check_text(origin: &str, text: &str) -> Result<(), BuildError> {
    let invalid = text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\t' | '\r'));
    if invalid {
        return Err(BuildError::InvalidText {
            origin: origin.to_string(),
            value: text.to_string(),
        });
    }
    Ok(())
}
