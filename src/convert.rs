//! File conversion.
//!
//! [`Converter`] turns one `.md` or `.txt` file into `{stem}.html` inside
//! an output directory, or every file of a flat directory one after the
//! other. Files never share state: each gets its own parser and writer.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::front_matter;
use crate::metadata::Metadata;
use crate::render::{DocumentRenderer, RenderSummary};
use crate::Mode;

impl Mode {
    /// Pick the mode for an input path from its extension.
    ///
    /// `.md` is Markdown, `.txt` is plain text; anything else, including no
    /// extension at all, is rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Ok(Mode::Markdown),
            Some("txt") => Ok(Mode::PlainText),
            _ => Err(Error::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

/// One successfully converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Source file.
    pub input: PathBuf,
    /// Written HTML file.
    pub output: PathBuf,
    /// End-of-input state of the body.
    pub summary: RenderSummary,
}

/// Outcome of converting a file or a directory.
#[derive(Debug, Default)]
pub struct Report {
    /// Files converted, in processing order.
    pub converted: Vec<Converted>,
    /// Files that failed, in processing order.
    pub failed: Vec<(PathBuf, Error)>,
}

impl Report {
    /// Whether every file converted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of files attempted.
    pub fn len(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Whether no file was attempted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&mut self, path: &Path, result: Result<Converted>) {
        match result {
            Ok(converted) => self.converted.push(converted),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "conversion failed");
                self.failed.push((path.to_path_buf(), err));
            }
        }
    }
}

/// Converts files into a fixed output directory.
#[derive(Debug, Clone)]
pub struct Converter {
    output_dir: PathBuf,
    stylesheet: String,
}

impl Converter {
    /// Create a converter. The output directory must already exist.
    pub fn new(output_dir: impl Into<PathBuf>, stylesheet: impl Into<String>) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.is_dir() {
            return Err(Error::OutputDirectory(output_dir));
        }
        Ok(Self {
            output_dir,
            stylesheet: stylesheet.into(),
        })
    }

    /// Create a converter from resolved settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.output_dir.clone(), settings.stylesheet.clone())
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the HTML for `input` is written.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = input.file_stem().unwrap_or_default().to_os_string();
        name.push(".html");
        self.output_dir.join(name)
    }

    /// Convert a file, or every regular file directly inside a directory.
    ///
    /// Per-file failures land in the [`Report`]; only a missing `path` or an
    /// unreadable directory is an `Err`.
    pub fn convert_path(&self, path: &Path) -> Result<Report> {
        let mut report = Report::default();
        if path.is_file() {
            report.record(path, self.convert_file(path));
        } else if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| Error::io(path, e))?;
                let file = entry.path();
                if file.is_file() {
                    report.record(&file, self.convert_file(&file));
                }
            }
        } else {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        Ok(report)
    }

    /// Convert one file.
    ///
    /// The extension is checked before anything is read or written.
    pub fn convert_file(&self, input: &Path) -> Result<Converted> {
        let mode = Mode::from_path(input)?;
        let title = input.file_stem().unwrap_or_default().to_string_lossy();
        let output = self.output_path(input);

        let summary = match mode {
            Mode::Markdown => self.convert_markdown(input, &output, &title)?,
            Mode::PlainText => self.convert_text(input, &output, &title)?,
        };

        if summary.unclosed_fence {
            warn!(path = %input.display(), "document ends inside an unclosed code fence");
        }
        debug!(
            input = %input.display(),
            output = %output.display(),
            lines = summary.lines,
            "converted"
        );

        Ok(Converted {
            input: input.to_path_buf(),
            output,
            summary,
        })
    }

    fn convert_markdown(&self, input: &Path, output: &Path, title: &str) -> Result<RenderSummary> {
        let source = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
        let (metadata, body) =
            front_matter::extract(&source).map_err(|err| Error::FrontMatter {
                path: input.to_path_buf(),
                source: err,
            })?;

        self.write_page(output, title, &metadata, Mode::Markdown, |doc| {
            doc.push_str(body).map_err(|e| Error::io(output, e))
        })
    }

    fn convert_text(&self, input: &Path, output: &Path, title: &str) -> Result<RenderSummary> {
        let mut reader = File::open(input)
            .map(BufReader::new)
            .map_err(|e| Error::io(input, e))?;

        self.write_page(output, title, &Metadata::new(), Mode::PlainText, |doc| {
            // Chunks end at `\n`; a lone `\r` inside one is split by `push_str`.
            let mut chunk = Vec::new();
            loop {
                chunk.clear();
                let read = reader
                    .read_until(b'\n', &mut chunk)
                    .map_err(|e| Error::io(input, e))?;
                if read == 0 {
                    return Ok(());
                }
                let text = std::str::from_utf8(&chunk)
                    .map_err(|e| Error::io(input, io::Error::new(io::ErrorKind::InvalidData, e)))?;
                doc.push_str(text).map_err(|e| Error::io(output, e))?;
            }
        })
    }

    /// Create `output`, stream a page into it, and remove it again if any
    /// step after creation fails.
    fn write_page<F>(
        &self,
        output: &Path,
        title: &str,
        metadata: &Metadata,
        mode: Mode,
        body: F,
    ) -> Result<RenderSummary>
    where
        F: FnOnce(&mut DocumentRenderer<BufWriter<File>>) -> Result<()>,
    {
        let file = File::create(output).map_err(|e| Error::io(output, e))?;
        let result = DocumentRenderer::begin(
            BufWriter::new(file),
            title,
            metadata,
            &self.stylesheet,
            mode,
        )
        .map_err(|e| Error::io(output, e))
        .and_then(|mut doc| {
            body(&mut doc)?;
            let (_, summary) = doc.finish().map_err(|e| Error::io(output, e))?;
            Ok(summary)
        });

        if result.is_err() {
            if let Err(err) = fs::remove_file(output) {
                warn!(path = %output.display(), error = %err, "could not remove partial output");
            }
        }
        result
    }
}
