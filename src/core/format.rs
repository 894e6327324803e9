use crate::domain::model::{ExperienceEntry, ProjectEntry, Skill, SkillCategory};
use std::fmt::Write;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';
pub const DETAIL_BAR_LENGTH: usize = 40;
pub const OVERVIEW_BAR_LENGTH: usize = 20;

/// Fixed-width bar: `round(p / 100 * length)` filled glyphs, the rest empty.
pub fn progress_bar(percentage: u8, length: usize) -> String {
    let filled = filled_length(percentage, length);
    let mut bar = String::with_capacity(length * FILLED_GLYPH.len_utf8());
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(length - filled));
    bar
}

pub fn filled_length(percentage: u8, length: usize) -> usize {
    let ratio = f64::from(percentage.min(100)) / 100.0;
    ((ratio * length as f64).round() as usize).min(length)
}

/// Pads by character count so multi-byte names line up.
pub fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

pub fn pad_start(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

pub fn rule(glyph: char, width: usize) -> String {
    std::iter::repeat(glyph).take(width).collect()
}

/// `\nTITLE\n═══…\n`
pub fn heading(title: &str, width: usize) -> String {
    format!("\n{}\n{}\n", title, rule('═', width))
}

pub fn skill_line(skill: &Skill, name_width: usize, bar_length: usize) -> String {
    format!(
        "{} {} {}",
        pad_end(&skill.name, name_width),
        progress_bar(skill.proficiency, bar_length),
        pad_start(&format!("{}%", skill.proficiency), 4)
    )
}

pub fn format_skill_category(category: &SkillCategory) -> String {
    let mut output = format!("\n{}\n{}\n", category.name, rule('─', 50));
    for skill in &category.skills {
        output.push_str(&skill_line(skill, 20, DETAIL_BAR_LENGTH));
        output.push('\n');
    }
    output
}

pub fn format_experience(entry: &ExperienceEntry) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "\n{}", entry.title);
    let _ = writeln!(output, "Location: {}", entry.location);
    let _ = writeln!(output, "Duration: {}", entry.date);
    let _ = writeln!(output, "Type: {}\n", entry.kind.as_str().to_uppercase());
    let _ = writeln!(output, "{}\n", entry.description);

    if !entry.skills.is_empty() {
        output.push_str("Tech Stack:\n");
        for (index, skill) in entry.skills.iter().enumerate() {
            let _ = writeln!(output, "   {}. {}", index + 1, skill);
        }
    }

    if !entry.details.is_empty() {
        output.push_str("\nKey Responsibilities:\n");
        for detail in &entry.details {
            let _ = writeln!(output, "   • {}", detail);
        }
    }

    output.push('\n');
    output
}

pub fn format_project(project: &ProjectEntry) -> String {
    let mut output = format!("\n{}\n{}\n", project.title, rule('─', 50));
    let _ = writeln!(output, "{}\n", project.description);
    let _ = writeln!(output, "Tech Stack: {}", project.tags.join(", "));
    let _ = writeln!(output, "Type: {}", project.kind.as_str().to_uppercase());

    if let Some(live) = project.live() {
        let _ = writeln!(output, "Live: {}", live);
    }
    if let Some(github) = project.github() {
        let _ = writeln!(output, "GitHub: {}", github);
    }

    if !project.key_features.is_empty() {
        output.push_str("\nKey Features:\n");
        for feature in &project.key_features {
            let _ = writeln!(output, "   • {}", feature);
        }
    }

    if !project.tech_details.is_empty() {
        let _ = writeln!(output, "\nTechnical Details:\n   {}", project.tech_details);
    }

    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(bar: &str, glyph: char) -> usize {
        bar.chars().filter(|c| *c == glyph).count()
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(progress_bar(0, 40), rule(EMPTY_GLYPH, 40));
        assert_eq!(progress_bar(100, 40), rule(FILLED_GLYPH, 40));
        assert_eq!(progress_bar(100, 0), "");
    }

    #[test]
    fn test_bar_lengths_for_every_percentage() {
        for length in [7usize, 20, 40] {
            for p in 0..=100u8 {
                let bar = progress_bar(p, length);
                let filled = count(&bar, FILLED_GLYPH);
                let expected = (f64::from(p) / 100.0 * length as f64).round() as usize;
                assert_eq!(filled, expected, "p={} length={}", p, length);
                assert_eq!(filled + count(&bar, EMPTY_GLYPH), length);
                assert_eq!(bar.chars().count(), length);
            }
        }
    }

    #[test]
    fn test_bar_rounding() {
        assert_eq!(filled_length(85, 20), 17);
        assert_eq!(filled_length(75, 40), 30);
        assert_eq!(filled_length(25, 2), 1);
    }

    #[test]
    fn test_out_of_range_percentage_is_clamped() {
        assert_eq!(progress_bar(250, 10), rule(FILLED_GLYPH, 10));
    }

    #[test]
    fn test_padding_counts_chars() {
        assert_eq!(pad_end("C#", 5), "C#   ");
        assert_eq!(pad_end("█░", 4).chars().count(), 4);
        assert_eq!(pad_start("95%", 4), " 95%");
        assert_eq!(pad_start("100%", 4), "100%");
    }

    #[test]
    fn test_skill_line_layout() {
        let skill = Skill {
            name: "Rust".to_string(),
            proficiency: 50,
        };
        let line = skill_line(&skill, 8, 10);
        assert_eq!(line, "Rust     █████░░░░░  50%");
    }
}
