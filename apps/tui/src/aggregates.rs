use crate::dataset::{Dataset, System};
use crate::domain::Category;

/// Highest scorer in `category` among `names`, in the given order. Ties keep
/// the earlier system.
pub fn top_scorer<'a>(
    dataset: &'a Dataset,
    names: &[String],
    category: Category,
) -> Option<&'a System> {
    names
        .iter()
        .filter_map(|name| dataset.get(name))
        .fold(None, |best: Option<&System>, system| match best {
            Some(leader) if system.score(category) <= leader.score(category) => Some(leader),
            _ => Some(system),
        })
}

/// Mean of the four category scores, rounded half up.
pub fn average_score(system: &System) -> u32 {
    let scores = system.scores();
    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    #[allow(clippy::cast_possible_truncation)]
    let count = scores.len() as u32;
    (2 * sum + count) / (2 * count)
}

/// Name as shown on the compact summary cards.
pub fn short_name(name: &str) -> String {
    name.replace(" Storage", "").replace(" EMC", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin;

    fn with_scores(name: &str, scores: [u8; 4]) -> System {
        let mut system = builtin::systems().remove(0);
        system.name = name.to_string();
        system.performance.score = scores[0];
        system.scalability.score = scores[1];
        system.cost.score = scores[2];
        system.cloud.score = scores[3];
        system
    }

    fn dataset(systems: Vec<System>) -> Dataset {
        Dataset::new(systems).expect("valid dataset")
    }

    #[test]
    fn average_of_netapp_scores_is_exact() {
        let system = with_scores("NetApp ONTAP", [88, 92, 62, 94]);
        assert_eq!(average_score(&system), 84);
    }

    #[test]
    fn average_rounds_half_up() {
        // 334 / 4 = 83.5
        assert_eq!(average_score(&with_scores("A", [84, 84, 83, 83])), 84);
        // 333 / 4 = 83.25
        assert_eq!(average_score(&with_scores("A", [84, 83, 83, 83])), 83);
        // 335 / 4 = 83.75
        assert_eq!(average_score(&with_scores("A", [84, 84, 84, 83])), 84);
        // 2 / 4 = 0.5
        assert_eq!(average_score(&with_scores("A", [1, 1, 0, 0])), 1);
    }

    #[test]
    fn average_of_builtin_systems() {
        let data = Dataset::builtin();
        let averages: Vec<u32> = data.systems().iter().map(average_score).collect();
        // 336/4, 324/4, 333/4
        assert_eq!(averages, vec![84, 81, 83]);
    }

    #[test]
    fn tie_keeps_first_system() {
        let data = dataset(vec![
            with_scores("A", [85, 0, 0, 0]),
            with_scores("B", [85, 0, 0, 0]),
        ]);
        let names = vec!["A".to_string(), "B".to_string()];
        let top = top_scorer(&data, &names, Category::Performance);
        assert_eq!(top.map(|system| system.name.as_str()), Some("A"));

        let reversed = vec!["B".to_string(), "A".to_string()];
        let top = top_scorer(&data, &reversed, Category::Performance);
        assert_eq!(top.map(|system| system.name.as_str()), Some("B"));
    }

    #[test]
    fn strictly_greater_later_score_wins() {
        let data = dataset(vec![
            with_scores("A", [85, 0, 0, 0]),
            with_scores("B", [86, 0, 0, 0]),
            with_scores("C", [86, 0, 0, 0]),
        ]);
        let names = data.names();
        let top = top_scorer(&data, &names, Category::Performance);
        assert_eq!(top.map(|system| system.name.as_str()), Some("B"));
    }

    #[test]
    fn top_scorer_per_builtin_category() {
        let data = Dataset::builtin();
        let names = data.names();
        let top = |category| {
            top_scorer(&data, &names, category).map(|system| system.name.clone())
        };

        assert_eq!(top(Category::Performance).as_deref(), Some("Pure Storage FlashArray"));
        assert_eq!(top(Category::Scalability).as_deref(), Some("NetApp ONTAP"));
        assert_eq!(top(Category::Cost).as_deref(), Some("Dell EMC PowerStore"));
        assert_eq!(top(Category::Cloud).as_deref(), Some("NetApp ONTAP"));
    }

    #[test]
    fn top_scorer_only_considers_given_names() {
        let data = Dataset::builtin();
        let names = vec!["Dell EMC PowerStore".to_string(), "NetApp ONTAP".to_string()];
        let top = top_scorer(&data, &names, Category::Performance);
        assert_eq!(top.map(|system| system.name.as_str()), Some("NetApp ONTAP"));
        assert!(top_scorer(&data, &[], Category::Performance).is_none());
    }

    #[test]
    fn short_name_drops_vendor_suffixes() {
        assert_eq!(short_name("Pure Storage FlashArray"), "Pure FlashArray");
        assert_eq!(short_name("Dell EMC PowerStore"), "Dell PowerStore");
        assert_eq!(short_name("NetApp ONTAP"), "NetApp ONTAP");
    }
}
