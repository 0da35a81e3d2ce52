/// Searchable metadata for one blog post in the static catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostMeta {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub url: String,
    pub date: String,
    pub read_time: String,
}

/// Case-insensitive substring search over title, excerpt and category. Each
/// field is checked on its own, so a query cannot match across a field
/// boundary. An empty or whitespace-only query matches nothing (the UI
/// hides the dropdown instead of listing everything).
pub fn search<'a>(posts: &'a [PostMeta], query: &str) -> Vec<&'a PostMeta> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    posts
        .iter()
        .filter(|p| {
            [&p.title, &p.excerpt, &p.category]
                .into_iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

/// One piece of a highlighted text: either plain or part of a query match.
/// The UI renders `Match` segments with mark-style emphasis; because the
/// segmentation happens on the text itself, user input never reaches the
/// DOM as markup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Splits `text` into plain and matching segments for the trimmed,
/// case-insensitive `query`.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let query = query.trim().to_lowercase();
    let lower = text.to_lowercase();
    // Lowercasing that changes the byte length (rare non-ASCII case folds)
    // defeats the index mapping below; emphasis is cosmetic, so skip it.
    if query.is_empty() || lower.len() != text.len() {
        return vec![Segment::Plain(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut rest = 0;
    let mut at = 0;
    while let Some(found) = lower[at..].find(&query) {
        let start = at + found;
        let end = start + query.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            at = start + 1;
            continue;
        }
        if start > rest {
            segments.push(Segment::Plain(text[rest..start].to_string()));
        }
        segments.push(Segment::Match(text[start..end].to_string()));
        rest = end;
        at = end;
    }
    if rest < text.len() {
        segments.push(Segment::Plain(text[rest..].to_string()));
    }
    if segments.is_empty() {
        segments.push(Segment::Plain(String::new()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<PostMeta> {
        let post = |title: &str, excerpt: &str, category: &str| PostMeta {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            url: String::from("#"),
            date: String::from("January 15, 2024"),
            read_time: String::from("8 min read"),
        };
        vec![
            post("The Art of SQL Injection", "Detection and prevention.", "Security"),
            post("Building Secure APIs", "A developer's checklist.", "Development"),
            post("My First Bug Bounty", "Lessons learned.", "Bug Hunting"),
        ]
    }

    #[test]
    fn matches_are_case_insensitive_across_fields() {
        let posts = posts();
        assert_eq!(search(&posts, "sql").len(), 1);
        assert_eq!(search(&posts, "SECURITY").len(), 1);
        assert_eq!(search(&posts, "checklist").len(), 1);
        assert_eq!(search(&posts, "nothing-matches-this").len(), 0);
    }

    #[test]
    fn queries_do_not_match_across_field_boundaries() {
        let posts = posts();
        // "...SQL Injection" (title) + "Detection and..." (excerpt): matches
        // neither field alone
        assert!(search(&posts, "injection detection").is_empty());
        // but a phrase within a single field still matches
        assert_eq!(search(&posts, "sql injection").len(), 1);
        assert_eq!(search(&posts, "detection and").len(), 1);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let posts = posts();
        assert!(search(&posts, "").is_empty());
        assert!(search(&posts, "   ").is_empty());
    }

    #[test]
    fn highlight_segments_cover_the_text() {
        assert_eq!(
            highlight("SQL and more sql", "sql"),
            vec![
                Segment::Match(String::from("SQL")),
                Segment::Plain(String::from(" and more ")),
                Segment::Match(String::from("sql")),
            ]
        );
        assert_eq!(
            highlight("no match here", "zzz"),
            vec![Segment::Plain(String::from("no match here"))]
        );
        assert_eq!(
            highlight("anything", ""),
            vec![Segment::Plain(String::from("anything"))]
        );
    }
}
