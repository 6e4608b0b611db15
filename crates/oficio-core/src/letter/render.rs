//! DOCX rendering with docx-rs.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Table, TableCell, TableRow,
};
use tracing::{debug, trace};

use super::compose::{Alignment, Block, Letter, RecordTable, TextBlock};
use crate::error::BuildError;

/// Column widths of the record table, in twentieths of a point.
const TABLE_GRID: [usize; 3] = [3000, 3200, 3200];

/// Render a composed letter to WordprocessingML (`.docx`) bytes.
pub fn render(letter: &Letter) -> Result<Vec<u8>, BuildError> {
    let fonts = RunFonts::new()
        .ascii(&letter.font_name)
        .hi_ansi(&letter.font_name)
        .cs(&letter.font_name);

    // docx-rs sizes are half-points
    let mut docx = Docx::new()
        .default_fonts(fonts)
        .default_size(letter.font_size_pt * 2);

    for block in &letter.blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(paragraph(p)),
            Block::Table(t) => docx.add_table(table(t)),
        };
    }

    let mut out = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut out)
        .map_err(|e| BuildError::Docx(e.to_string()))?;

    let bytes = out.into_inner();
    debug!("Rendered letter: {} bytes", bytes.len());
    Ok(bytes)
}

fn paragraph(block: &TextBlock) -> Paragraph {
    let alignment = match block.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
    };

    let p = Paragraph::new().align(alignment);
    if block.lines.is_empty() {
        return p;
    }

    let mut run = Run::new();
    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    if block.bold {
        run = run.bold();
    }
    if let Some(size) = block.size_pt {
        run = run.size(size * 2);
    }

    p.add_run(run)
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(paragraph(&TextBlock::plain(text)))
}

fn row(cells: &[String; 3]) -> TableRow {
    TableRow::new(cells.iter().map(|c| cell(c)).collect())
}

/// Record table with the default single-line borders on every edge.
fn table(records: &RecordTable) -> Table {
    trace!("Rendering table with {} rows", records.row_count());

    let rows = std::iter::once(&records.header)
        .chain(records.rows.iter())
        .map(row)
        .collect();

    Table::new(rows).set_grid(TABLE_GRID.to_vec())
}
