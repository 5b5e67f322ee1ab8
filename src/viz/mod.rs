//! Terminal sentiment-distribution report
//!
//! Renders the label distribution as a categorical bar chart and a donut
//! chart collapsed to a single ring of colored segments. Output goes to the
//! terminal only; nothing is persisted.

use colored::{ColoredString, Colorize};

/// Width of the longest bar in the bar chart
const BAR_WIDTH: usize = 40;
/// Number of segments in the ring chart
const RING_SEGMENTS: usize = 36;

/// Canonical label display order
const LABEL_ORDER: [&str; 4] = ["positive", "neutral", "negative", "mixed"];

/// Sentiment-label distribution over the classified documents
#[derive(Debug, Clone)]
pub struct SentimentReport {
    counts: Vec<(String, usize)>,
    total: usize,
}

impl SentimentReport {
    /// Tally labels in canonical order; unknown labels follow in first-seen order
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for canonical in LABEL_ORDER {
            let count = labels.iter().filter(|l| l.as_ref() == canonical).count();
            if count > 0 {
                counts.push((canonical.to_string(), count));
            }
        }

        for label in labels {
            let label = label.as_ref();
            if !counts.iter().any(|(name, _)| name == label) {
                let count = labels.iter().filter(|l| l.as_ref() == label).count();
                counts.push((label.to_string(), count));
            }
        }

        Self {
            counts,
            total: labels.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Label counts in display order
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    /// Share of a label in percent
    pub fn percentage(&self, label: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = self
            .counts
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, c)| *c)
            .unwrap_or(0);
        count as f64 * 100.0 / self.total as f64
    }

    /// Horizontal bar chart of label counts
    pub fn bar_chart(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Sentiment Distribution".bold()));
        out.push_str(&format!("{}\n", "-".repeat(60)));

        if self.total == 0 {
            out.push_str("no classified documents\n");
            return out;
        }

        let max_count = self.counts.iter().map(|(_, c)| *c).max().unwrap_or(1);

        for (label, count) in &self.counts {
            let width = (count * BAR_WIDTH).div_ceil(max_count);
            let bar = colorize("█".repeat(width), label);
            out.push_str(&format!(
                "{:>8}  {} {}  ({:.1}%)\n",
                colorize(label.clone(), label),
                bar,
                count,
                self.percentage(label)
            ));
        }

        out
    }

    /// Label shares as a ring of proportional colored segments
    pub fn ring_chart(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Sentiment Share".bold()));
        out.push_str(&format!("{}\n", "-".repeat(60)));

        if self.total == 0 {
            out.push_str("no classified documents\n");
            return out;
        }

        let mut ring = String::from("( ");
        for (label, count) in &self.counts {
            let segments = allocate_segments(*count, self.total);
            ring.push_str(&colorize("●".repeat(segments), label).to_string());
        }
        ring.push_str(" )");
        out.push_str(&ring);
        out.push('\n');

        for (label, count) in &self.counts {
            out.push_str(&format!(
                "  {} {:>8}  {:.1}%  ({})\n",
                colorize("●".to_string(), label),
                colorize(label.clone(), label),
                self.percentage(label),
                count
            ));
        }

        out
    }

    /// Print both charts to the terminal
    pub fn print(&self) {
        println!("\n{}", self.bar_chart());
        println!("{}", self.ring_chart());
    }
}

/// Segments owed to a label, rounded so small shares stay visible
fn allocate_segments(count: usize, total: usize) -> usize {
    let exact = count as f64 / total as f64 * RING_SEGMENTS as f64;
    (exact.round() as usize).max(1)
}

fn colorize(text: String, label: &str) -> ColoredString {
    match label {
        "positive" => text.green(),
        "negative" => text.red(),
        "neutral" => text.yellow(),
        "mixed" => text.magenta(),
        _ => text.normal(),
    }
}
