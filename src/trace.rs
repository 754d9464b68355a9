//! Per-iteration observation of the rectangle sets.
//!
//! The driver calls [`IterationObserver::on_iteration`] once per iteration,
//! after selection and before any rectangle is split, with the working set
//! and the selected candidates. `()` is the no-op observer.
//!
//! [`TsvWriter`] dumps rows in a tab-separated layout:
//! ```text
//! <iteration>\t<radius>\t<value>\t[<c0>, <c1>, ...]\t[<d0>, <d1>, ...]
//! ```

use std::fmt::Write as FmtWrite;
use std::io;

use serde::Serialize;

use crate::rect::{RectId, Rectangle};

/// Receives the rectangle sets of every iteration.
pub trait IterationObserver {
    fn on_iteration(&mut self, iteration: usize, working: &[Rectangle], candidates: &[Rectangle]);
}

impl IterationObserver for () {
    fn on_iteration(&mut self, _: usize, _: &[Rectangle], _: &[Rectangle]) {}
}

impl<T: IterationObserver + ?Sized> IterationObserver for &mut T {
    fn on_iteration(&mut self, iteration: usize, working: &[Rectangle], candidates: &[Rectangle]) {
        (**self).on_iteration(iteration, working, candidates)
    }
}

impl<T: IterationObserver + ?Sized> IterationObserver for Box<T> {
    fn on_iteration(&mut self, iteration: usize, working: &[Rectangle], candidates: &[Rectangle]) {
        (**self).on_iteration(iteration, working, candidates)
    }
}

/// Which set a row was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Working,
    Candidate,
}

/// Which sets an observer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceScope {
    #[default]
    All,
    WorkingOnly,
    CandidatesOnly,
}

impl TraceScope {
    fn working(self) -> bool {
        matches!(self, TraceScope::All | TraceScope::WorkingOnly)
    }

    fn candidates(self) -> bool {
        matches!(self, TraceScope::All | TraceScope::CandidatesOnly)
    }
}

/// One rectangle as seen in one iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRow {
    pub iteration: usize,
    pub kind: RowKind,
    pub id: RectId,
    pub radius: f64,
    pub value: f64,
    pub center: Vec<f64>,
    pub division_depth: Vec<u32>,
}

impl TraceRow {
    pub fn new(iteration: usize, kind: RowKind, rect: &Rectangle) -> Self {
        Self {
            iteration,
            kind,
            id: rect.id(),
            radius: rect.radius(),
            value: rect.value(),
            center: rect.center().to_vec(),
            division_depth: rect.division_depth().to_vec(),
        }
    }

    /// Tab-separated line without the trailing newline.
    pub fn to_tsv(&self) -> String {
        let mut line = String::with_capacity(64);
        let _ = write!(line, "{}\t{}\t{}\t", self.iteration, self.radius, self.value);
        write_list(&mut line, &self.center);
        line.push('\t');
        write_list(&mut line, &self.division_depth);
        line
    }
}

fn write_list<T: std::fmt::Display>(out: &mut String, items: &[T]) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", item);
    }
    out.push(']');
}

/// Calls `emit` for every row the scope selects, working rows first.
fn for_each_row(
    scope: TraceScope,
    iteration: usize,
    working: &[Rectangle],
    candidates: &[Rectangle],
    mut emit: impl FnMut(TraceRow),
) {
    if scope.working() {
        for rect in working {
            emit(TraceRow::new(iteration, RowKind::Working, rect));
        }
    }
    if scope.candidates() {
        for rect in candidates {
            emit(TraceRow::new(iteration, RowKind::Candidate, rect));
        }
    }
}

/// Collects rows in memory.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    scope: TraceScope,
    rows: Vec<TraceRow>,
    iterations: usize,
}

impl TraceRecorder {
    pub fn new(scope: TraceScope) -> Self {
        Self {
            scope,
            rows: Vec::new(),
            iterations: 0,
        }
    }

    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    /// Number of `on_iteration` calls seen.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rows recorded for one iteration.
    pub fn rows_for(&self, iteration: usize) -> impl Iterator<Item = &TraceRow> {
        self.rows.iter().filter(move |r| r.iteration == iteration)
    }

    pub fn into_rows(self) -> Vec<TraceRow> {
        self.rows
    }
}

impl IterationObserver for TraceRecorder {
    fn on_iteration(&mut self, iteration: usize, working: &[Rectangle], candidates: &[Rectangle]) {
        self.iterations += 1;
        let rows = &mut self.rows;
        for_each_row(self.scope, iteration, working, candidates, |row| rows.push(row));
    }
}

/// Streams rows to any writer as tab-separated lines.
///
/// The first I/O error stops further output and is returned by
/// [`TsvWriter::finish`].
#[derive(Debug)]
pub struct TsvWriter<W: io::Write> {
    writer: W,
    scope: TraceScope,
    rows_written: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> TsvWriter<W> {
    pub fn new(writer: W, scope: TraceScope) -> Self {
        Self {
            writer,
            scope,
            rows_written: 0,
            error: None,
        }
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the writer, or the first error hit while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write> IterationObserver for TsvWriter<W> {
    fn on_iteration(&mut self, iteration: usize, working: &[Rectangle], candidates: &[Rectangle]) {
        if self.error.is_some() {
            return;
        }
        let mut buf = String::new();
        let mut count = 0;
        for_each_row(self.scope, iteration, working, candidates, |row| {
            buf.push_str(&row.to_tsv());
            buf.push('\n');
            count += 1;
        });
        match self.writer.write_all(buf.as_bytes()) {
            Ok(()) => self.rows_written += count,
            Err(e) => {
                tracing::warn!(error = %e, iteration, "trace output failed, disabling");
                self.error = Some(e);
            }
        }
    }
}
