/// Levenshtein distance over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// First candidate (in list order) that contains or is contained by `input`,
/// or lies within [`MAX_SUGGESTION_DISTANCE`] edits of it.
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }

    candidates.iter().copied().find(|candidate| {
        candidate.contains(input)
            || input.contains(candidate)
            || edit_distance(input, candidate) <= MAX_SUGGESTION_DISTANCE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: &[&str] = &["help", "about", "skills", "experience", "projects", "contact"];

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("skills", "skills"), 0);
        assert_eq!(edit_distance("skils", "skills"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "help"), 4);
    }

    #[test]
    fn test_closest_by_typo() {
        assert_eq!(closest("skils", COMMANDS), Some("skills"));
        assert_eq!(closest("projcets", COMMANDS), Some("projects"));
        assert_eq!(closest("contcat", COMMANDS), Some("contact"));
    }

    #[test]
    fn test_closest_by_containment() {
        assert_eq!(closest("experi", COMMANDS), Some("experience"));
        assert_eq!(closest("helpme", COMMANDS), Some("help"));
    }

    #[test]
    fn test_no_suggestion_for_unrelated_input() {
        assert_eq!(closest("kubernetes", COMMANDS), None);
        assert_eq!(closest("", COMMANDS), None);
    }
}
