// ============================================================
// Layer 5 — Introspection Charts
// ============================================================
// Two views of what a trained phoneme model believes:
//
// 1. Next-phoneme distribution
//    Given /K AE1/, which phonemes does the model expect next?
//    Entries under `min_probability` are dropped and the rest
//    are sorted from most to least likely.
//
// 2. Pronunciation probability
//    For /K AE1 T/ the bars are
//      P(K | <START>)
//      P(AE1 | <START> K)
//      P(T | <START> K AE1)
//      P(<END> | <START> K AE1 T)
//
// Builders return a BarChart; the plot_* wrappers pass it
// straight to a ChartRenderer.

use anyhow::Result;

use crate::analysis::chart::BarChart;
use crate::domain::error::UtilsError;
use crate::domain::traits::{ChartRenderer, LanguageModel};

pub const DEFAULT_MIN_PROBABILITY: f64 = 0.01;

const X_LABEL: &str = "Phoneme";
const CONDITIONAL_Y_LABEL: &str = "P(i | 0 ... i - n)";
const PRONUNCIATION_TITLE: &str = "Probability of Each Phoneme in Word";

/// Chart of the model's next-phoneme distribution after `pronunciation`.
///
/// Returns `Ok(None)` (and logs a warning) when no phoneme reaches
/// `min_probability`. That is a normal outcome, not an error.
pub fn next_phoneme_distribution(
    model:           &impl LanguageModel,
    pronunciation:   &[String],
    min_probability: f64,
) -> Result<Option<BarChart>> {
    let mut kept: Vec<(String, f64)> = model
        .next_probabilities(pronunciation)?
        .into_iter()
        .filter(|(_, p)| *p >= min_probability)
        .collect();

    if kept.is_empty() {
        tracing::warn!("No phonemes had probability above {}", min_probability);
        return Ok(None);
    }

    // Descending probability; labels break ties so output is stable
    kept.sort_by(|(a_label, a), (b_label, b)| {
        b.total_cmp(a).then_with(|| a_label.cmp(b_label))
    });

    let title = format!(
        "Probability of each phoneme coming after /{}/",
        pronunciation.join(" ")
    );
    Ok(Some(BarChart::new(title, X_LABEL).with_bars(kept)))
}

/// Chart of P(phoneme_i | phonemes before i) for every phoneme of
/// `pronunciation`, followed by the probability of the end symbol.
///
/// # Errors
/// Fails if the model does not return exactly `len + 1` probabilities.
pub fn pronunciation_probability(
    model:         &impl LanguageModel,
    pronunciation: &[String],
) -> Result<BarChart> {
    let probabilities = model.conditional_probabilities_of_text(pronunciation)?;

    let expected = pronunciation.len() + 1;
    if probabilities.len() != expected {
        return Err(UtilsError::ModelContract(format!(
            "expected {} conditional probabilities for /{}/, got {}",
            expected,
            pronunciation.join(" "),
            probabilities.len()
        ))
        .into());
    }

    let labels = pronunciation
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(model.end_symbol()));

    Ok(BarChart::new(PRONUNCIATION_TITLE, X_LABEL)
        .with_y_label(CONDITIONAL_Y_LABEL)
        .with_bars(labels.zip(probabilities)))
}

/// Build the next-phoneme chart and render it. Renders nothing when
/// no phoneme clears the threshold. Returns whether a chart was drawn.
pub fn plot_next_phoneme_distribution(
    model:           &impl LanguageModel,
    pronunciation:   &[String],
    min_probability: f64,
    renderer:        &mut impl ChartRenderer,
) -> Result<bool> {
    match next_phoneme_distribution(model, pronunciation, min_probability)? {
        Some(chart) => {
            renderer.render(&chart)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Build the pronunciation-probability chart and render it.
pub fn plot_pronunciation_probability(
    model:         &impl LanguageModel,
    pronunciation: &[String],
    renderer:      &mut impl ChartRenderer,
) -> Result<()> {
    let chart = pronunciation_probability(model, pronunciation)?;
    renderer.render(&chart)
}
