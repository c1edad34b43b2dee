//! Label suggestions for shell completion (`--complete`).

use csv_labeler_core::catalog::LabelCatalog;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Labels to offer for `text`.
///
/// Labels containing `text` come from the same partial matching the prompt
/// uses. When nothing contains `text`, falls back to fuzzy matching ordered by
/// score, then catalog order; those suggestions are full labels and are not
/// accepted by the prompt in their abbreviated form. Empty `text` offers
/// every label.
#[must_use]
pub fn complete<'a>(catalog: &'a LabelCatalog, text: &str) -> Vec<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        return catalog.iter().collect();
    }

    let partial = catalog.resolve_partial(text);
    if !partial.is_empty() {
        return partial;
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, usize, &str)> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            matcher
                .fuzzy_match(label, text)
                .map(|score| (score, index, label))
        })
        .collect();

    scored.sort_by(|(score1, index1, _), (score2, index2, _)| {
        score2.cmp(score1).then(index1.cmp(index2))
    });

    scored.into_iter().map(|(_, _, label)| label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LabelCatalog {
        LabelCatalog::new(["Lebensmittel", "Auto", "Versicherung", "Miete"]).unwrap()
    }

    #[test]
    fn test_empty_text_offers_everything() {
        assert_eq!(
            complete(&catalog(), ""),
            vec!["Lebensmittel", "Auto", "Versicherung", "Miete"]
        );
    }

    #[test]
    fn test_partial_matches_come_first() {
        assert_eq!(complete(&catalog(), "mi"), vec!["Lebensmittel", "Miete"]);
        assert_eq!(complete(&catalog(), "AUTO"), vec!["Auto"]);
    }

    #[test]
    fn test_fuzzy_fallback() {
        let catalog = catalog();
        assert!(catalog.resolve_partial("vsch").is_empty());
        assert_eq!(complete(&catalog, "vsch"), vec!["Versicherung"]);
        assert!(complete(&catalog, "zzz").is_empty());
    }
}
