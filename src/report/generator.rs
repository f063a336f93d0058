//! Console report generation.
//!
//! This module renders the full pattern analysis to any `io::Write` sink,
//! section by section: pattern overview, the four facet impact analyses,
//! recommendations, and the completion footer.

use crate::analysis::{
    keyword_hits, sorted_buckets, top_title_words, AnchorPatterns, RunSummary, TitleDiversity,
    BUDGET_KEYWORDS, MOBILITY_KEYWORDS, PRIORITY_KEYWORDS, VIBE_KEYWORDS,
};
use crate::config::ReportConfig;
use crate::models::{Anchor, TestRecord, ALL_TIERS};
use std::io::{self, Write};

/// Render the complete analysis report.
pub fn render_report<W: Write>(
    out: &mut W,
    records: &[TestRecord],
    patterns: &AnchorPatterns,
    config: &ReportConfig,
) -> io::Result<()> {
    let summary = RunSummary::from_records(records);

    render_pattern_overview(out, patterns, &summary)?;
    render_budget_impact(out, patterns, config)?;
    render_vibe_impact(out, patterns, config)?;
    render_priority_impact(out, patterns, config)?;
    render_mobility_impact(out, patterns)?;
    render_recommendations(out, records, patterns, &summary, config)?;
    render_completion(out, &summary)?;

    Ok(())
}

/// Render the totals header for the aggregation pass.
fn render_pattern_overview<W: Write>(
    out: &mut W,
    patterns: &AnchorPatterns,
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(out, "🔍 ANALYZING ANCHOR PATTERNS")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "📊 Total Anchors Analyzed: {}", patterns.all_anchors.len())?;
    writeln!(out, "📊 Successful Tests: {}", summary.succeeded)?;
    Ok(())
}

/// Render the budget impact section, one block per non-empty tier.
fn render_budget_impact<W: Write>(
    out: &mut W,
    patterns: &AnchorPatterns,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "💰 BUDGET IMPACT ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(50))?;

    for tier in ALL_TIERS {
        let anchors = patterns
            .by_budget
            .get(&tier)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        if anchors.is_empty() {
            continue;
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} BUDGET ({} anchors):",
            tier.to_string().to_uppercase(),
            anchors.len()
        )?;
        render_keyword_lines(out, "Budget Keywords Found", &keyword_hits(anchors, BUDGET_KEYWORDS))?;
        render_sample_titles(out, anchors, config.sample_titles)?;
    }

    Ok(())
}

/// Render the vibe impact section.
fn render_vibe_impact<W: Write>(
    out: &mut W,
    patterns: &AnchorPatterns,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎭 VIBE IMPACT ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(50))?;

    for (vibe, anchors) in sorted_buckets(&patterns.by_vibe) {
        writeln!(out)?;
        writeln!(out, "{} VIBE ({} anchors):", vibe.to_uppercase(), anchors.len())?;
        render_keyword_lines(out, "Vibe Keywords Found", &keyword_hits(anchors, VIBE_KEYWORDS))?;
        render_sample_titles(out, anchors, config.sample_titles)?;
    }

    Ok(())
}

/// Render the priority impact section.
fn render_priority_impact<W: Write>(
    out: &mut W,
    patterns: &AnchorPatterns,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎯 PRIORITY IMPACT ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(50))?;

    for (priority, anchors) in sorted_buckets(&patterns.by_priority) {
        writeln!(out)?;
        writeln!(
            out,
            "{} PRIORITY ({} anchors):",
            priority.to_uppercase(),
            anchors.len()
        )?;
        render_keyword_lines(
            out,
            "Priority Keywords Found",
            &keyword_hits(anchors, PRIORITY_KEYWORDS),
        )?;
        render_sample_titles(out, anchors, config.sample_titles)?;
    }

    Ok(())
}

/// Render the mobility impact section. Unlike the other facets this one
/// lists no sample titles.
fn render_mobility_impact<W: Write>(out: &mut W, patterns: &AnchorPatterns) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚶 MOBILITY IMPACT ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(50))?;

    for (mobility, anchors) in sorted_buckets(&patterns.by_mobility) {
        writeln!(out)?;
        writeln!(
            out,
            "{} MOBILITY ({} anchors):",
            mobility.to_uppercase(),
            anchors.len()
        )?;
        render_keyword_lines(
            out,
            "Transportation Keywords Found",
            &keyword_hits(anchors, MOBILITY_KEYWORDS),
        )?;
    }

    Ok(())
}

/// Render success rate, failure listing, diversity, and common title words.
fn render_recommendations<W: Write>(
    out: &mut W,
    records: &[TestRecord],
    patterns: &AnchorPatterns,
    summary: &RunSummary,
    config: &ReportConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "💡 RECOMMENDATIONS")?;
    writeln!(out, "{}", "=".repeat(50))?;

    writeln!(
        out,
        "✅ Success Rate: {}/{} ({:.1}%)",
        summary.succeeded,
        summary.total,
        summary.success_rate()
    )?;

    if summary.failed > 0 {
        writeln!(out, "❌ Failed Tests: {}", summary.failed)?;
        for record in records.iter().filter(|r| !r.success) {
            writeln!(out, "    - {}: {}", record.profile_name, record.error_message())?;
        }
    }

    let diversity = TitleDiversity::from_anchors(&patterns.all_anchors);
    writeln!(out)?;
    writeln!(out, "📊 Anchor Diversity:")?;
    writeln!(out, "    Total Anchors: {}", diversity.total)?;
    writeln!(out, "    Unique Anchors: {}", diversity.unique)?;
    writeln!(out, "    Diversity Rate: {:.1}%", diversity.rate())?;

    writeln!(out)?;
    writeln!(out, "🔍 Common Patterns:")?;
    writeln!(out, "    Most Common Words in Titles:")?;
    // Short words hold ranking slots but are hidden here.
    for (word, count) in top_title_words(&patterns.all_anchors, config.top_words) {
        if word.chars().count() >= config.min_word_display_len {
            writeln!(out, "        {}: {}", word, count)?;
        }
    }

    Ok(())
}

/// Render the closing totals.
fn render_completion<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎯 Analysis Complete!")?;
    writeln!(out, "📊 Total Tests: {}", summary.total)?;
    writeln!(out, "✅ Successful: {}", summary.succeeded)?;
    writeln!(out, "❌ Failed: {}", summary.failed)?;
    Ok(())
}

/// Write a keyword block: the header line, then one line per matched keyword.
fn render_keyword_lines<W: Write>(
    out: &mut W,
    label: &str,
    hits: &[(&str, usize)],
) -> io::Result<()> {
    writeln!(out, "  {}:", label)?;
    for (keyword, count) in hits {
        writeln!(out, "    {}: {}", keyword, count)?;
    }
    Ok(())
}

/// Write the numbered sample-title block for a facet bucket.
fn render_sample_titles<W: Write>(out: &mut W, anchors: &[&Anchor], limit: usize) -> io::Result<()> {
    writeln!(out, "  Sample Titles:")?;
    for (i, anchor) in anchors.iter().take(limit).enumerate() {
        writeln!(out, "    {}. {}", i + 1, anchor.title)?;
    }
    Ok(())
}
