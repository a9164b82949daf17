//! LaTeX document assembly
//!
//! Wraps already-converted chapter files into a complete `book`-class
//! document: preamble, title page, optional revision stamp, table of
//! contents, and one `\chapter` per source with `\part` breaks between
//! chapter groups.

use crate::config::{ChapterRef, ProjectConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One unit of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// A chapter backed by a converted manuscript file.
    Chapter(ChapterRef),
    /// A part-level division between chapter groups.
    PartBreak,
}

/// Render a LaTeX command: `\name[options]{params}` plus a newline.
/// The brace group is always present, the bracket group only when
/// options are given.
fn cmd(name: &str, params: &[&str], options: &[&str]) -> String {
    let options = if options.is_empty() {
        String::new()
    } else {
        format!("[{}]", options.join(","))
    };
    format!("\\{name}{options}{{{}}}\n", params.join(","))
}

/// Expand the configured sources into body pieces.
///
/// Every `null` source is a part break. When any break occurs and none
/// opens the document, an implicit leading break is inserted so the
/// first chapter group is also introduced by a `\part`.
pub fn pieces(config: &ProjectConfig) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = config
        .sources
        .iter()
        .map(|source| match source {
            Some(chapter) => Piece::Chapter(chapter.clone()),
            None => Piece::PartBreak,
        })
        .collect();
    let any_break = pieces.contains(&Piece::PartBreak);
    if any_break && pieces.first() != Some(&Piece::PartBreak) {
        pieces.insert(0, Piece::PartBreak);
    }
    pieces
}

/// Assemble the full document as a sequence of output chunks.
///
/// `revision` is embedded on the title page when present; chapter
/// paths are resolved against `root`. A missing chapter file fails
/// assembly; a missing revision merely omits the stamp.
pub fn assemble(config: &ProjectConfig, root: &Path, revision: Option<&str>) -> Result<Vec<String>> {
    let mut out = Vec::new();

    out.push(cmd("documentclass", &["book"], &[]));
    out.push(cmd("usepackage", &["indentfirst"], &[]));

    if let Some(watermark) = &config.watermark {
        out.push(cmd("usepackage", &["draftwatermark"], &[]));
        out.push(cmd("SetWatermarkText", &[watermark.as_str()], &[]));
        out.push(cmd("SetWatermarkScale", &["0.4"], &[]));
        out.push(cmd("SetWatermarkLightness", &["0.875"], &[]));
    }

    out.push(cmd("usepackage", &["fontenc"], &["T1"]));
    out.push(cmd("usepackage", &["librebaskerville"], &[]));

    if let Some(header) = &config.header {
        out.push(cmd("usepackage", &["fancyhdr"], &[]));
        out.push(cmd("pagestyle", &["fancy"], &[]));
        out.push(cmd("fancyhead", &[], &[]));
        let italic_header = format!("\\textit{{{header}}}");
        out.push(cmd("fancyhead", &[italic_header.as_str()], &["L"]));
    }

    // the introduction counts as chapter zero
    out.push("\\setcounter{chapter}{-1}\n".to_string());

    out.push(cmd("begin", &["document"], &[]));
    out.push(cmd("title", &[config.title.as_str()], &[]));
    out.push(cmd("author", &[config.author.as_str()], &[]));
    out.push(cmd("maketitle", &[], &[]));

    if let Some(revision) = revision {
        out.push(cmd("begin", &["center"], &[]));
        out.push(cmd("hspace", &["0pt"], &[]));
        out.push(cmd("vfill", &[], &[]));
        out.push(format!("\n{revision}\n"));
        out.push(cmd("vfill", &[], &[]));
        out.push(cmd("hspace", &["0pt"], &[]));
        out.push(cmd("end", &["center"], &[]));
    }

    out.push(cmd("tableofcontents", &[], &[]));

    for piece in pieces(config) {
        match piece {
            Piece::PartBreak => out.push(cmd("part", &[], &[])),
            Piece::Chapter(chapter) => {
                out.push(cmd("chapter", &[chapter.title.as_deref().unwrap_or("")], &[]));
                let path = root.join(&chapter.path);
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read chapter {}", path.display()))?;
                out.push(contents);
            }
        }
    }

    out.push(cmd("end", &["document"], &[]));
    Ok(out)
}
