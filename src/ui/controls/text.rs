//! Text helpers: baseline-relative placement and underlined spans.

use std::ops::Range;
use std::sync::Arc;

use eframe::egui::{
    Align, Color32, FontId, Galley, Response, Sense, Stroke, TextFormat, Ui, pos2,
    text::LayoutJob, vec2,
};

// ── Baselines ──────────────────────────────────────────────────────────────────

/// Baseline positions of a laid-out text block, relative to its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub first_baseline: f32,
    pub last_baseline: f32,
    pub height: f32,
}

impl LineMetrics {
    /// `None` when the layout has no glyph to take a baseline from.
    pub fn of(galley: &Galley) -> Option<Self> {
        let first = galley
            .rows
            .first()
            .and_then(|row| row.glyphs.first().map(|g| row.pos.y + g.pos.y))?;
        let last = galley
            .rows
            .last()
            .and_then(|row| row.glyphs.first().map(|g| row.pos.y + g.pos.y))?;
        Some(Self {
            first_baseline: first,
            last_baseline: last,
            height: galley.size().y,
        })
    }

    /// Extra space above and below so that the first baseline sits `top`
    /// below the slot top and the slot ends `bottom` below the last baseline.
    pub fn padding(&self, top: f32, bottom: f32) -> (f32, f32) {
        let above = (top - self.first_baseline).max(0.0);
        let below = (bottom - (self.height - self.last_baseline)).max(0.0);
        (above, below)
    }
}

/// Lay out `text` on a single line.
pub fn galley(ui: &Ui, text: &str, font: FontId, color: Color32) -> Arc<Galley> {
    ui.painter().layout_no_wrap(text.to_owned(), font, color)
}

/// Place a galley by its baselines.
///
/// Centered galleys take the full available width; others take their own.
///
/// # Panics
/// If the galley has no first or last baseline (e.g. empty text).
pub fn baseline_label(
    ui: &mut Ui,
    galley: Arc<Galley>,
    top: f32,
    bottom: f32,
    color: Color32,
) -> Response {
    let Some(metrics) = LineMetrics::of(&galley) else {
        panic!("baseline padding needs text with a first and last baseline");
    };
    let (above, below) = metrics.padding(top, bottom);
    let centered = galley.job.halign == Align::Center;
    let width = if centered {
        ui.available_width()
    } else {
        galley.size().x
    };

    let (rect, response) =
        ui.allocate_exact_size(vec2(width, above + metrics.height + below), Sense::hover());
    let x = if centered { rect.center().x } else { rect.left() };
    ui.painter().galley(pos2(x, rect.top() + above), galley, color);
    response
}

// ── Annotated text ─────────────────────────────────────────────────────────────

/// A string with underlined spans given as **character** offsets.
///
/// Offsets are fixed: editing the text without updating them shifts the
/// emphasis. Out-of-range offsets are clamped to the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    underlines: Vec<Range<usize>>,
}

impl AnnotatedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            underlines: Vec::new(),
        }
    }

    pub fn underline(mut self, chars: Range<usize>) -> Self {
        self.underlines.push(chars);
        self
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(b, _)| b)
    }

    /// Underlined substrings, in insertion order.
    #[cfg(test)]
    pub fn underlined(&self) -> impl Iterator<Item = &str> {
        self.underlines
            .iter()
            .map(|r| &self.text[self.byte_offset(r.start)..self.byte_offset(r.end.max(r.start))])
    }

    /// Byte ranges covering the whole text, each flagged as underlined or not.
    fn segments(&self) -> Vec<(Range<usize>, bool)> {
        let spans: Vec<Range<usize>> = self
            .underlines
            .iter()
            .map(|r| self.byte_offset(r.start)..self.byte_offset(r.end.max(r.start)))
            .collect();

        let mut cuts: Vec<usize> = spans.iter().flat_map(|r| [r.start, r.end]).collect();
        cuts.extend([0, self.text.len()]);
        cuts.sort_unstable();
        cuts.dedup();

        cuts.windows(2)
            .map(|w| {
                let seg = w[0]..w[1];
                let underlined = spans.iter().any(|s| s.start <= seg.start && seg.end <= s.end);
                (seg, underlined)
            })
            .collect()
    }

    pub fn layout_job(
        &self,
        font: FontId,
        color: Color32,
        halign: Align,
        wrap_width: f32,
    ) -> LayoutJob {
        let mut job = LayoutJob {
            halign,
            ..Default::default()
        };
        job.wrap.max_width = wrap_width;
        for (range, underlined) in self.segments() {
            let underline = if underlined {
                Stroke::new(1.0, color)
            } else {
                Stroke::NONE
            };
            job.append(
                &self.text[range],
                0.0,
                TextFormat {
                    font_id: font.clone(),
                    color,
                    underline,
                    ..Default::default()
                },
            );
        }
        job
    }
}
