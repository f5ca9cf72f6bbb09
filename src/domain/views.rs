use super::enums::{FilterMode, SortMode};
use super::task::Task;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use tracing::warn;

/// Tasks passing the filter, in store order
pub fn filter_tasks<'a>(tasks: &'a [Task], mode: FilterMode) -> Vec<&'a Task> {
    tasks.iter().filter(|task| mode.matches(task.completed)).collect()
}

/// Order tasks by text for display.
///
/// The sort is stable: tasks whose text compares equal keep their
/// incoming relative order in both directions.
pub fn sort_tasks(tasks: &mut [&Task], mode: SortMode) {
    if mode == SortMode::None {
        return;
    }

    let collator = root_collator();
    let compare = |a: &str, b: &str| compare_text(collator.as_ref(), a, b);
    match mode {
        SortMode::None => {}
        SortMode::Ascending => tasks.sort_by(|a, b| compare(&a.text, &b.text)),
        SortMode::Descending => tasks.sort_by(|a, b| compare(&b.text, &a.text)),
    }
}

/// Root-locale collator with default strength, built from compiled data
fn root_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|e| warn!(error = %e, "collator unavailable, sorting by code point"))
        .ok()
}

fn compare_text(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// The list as the user sees it: filter first, then sort.
/// Borrows the store, so its own order is untouched.
pub fn display_tasks<'a>(tasks: &'a [Task], filter: FilterMode, sort: SortMode) -> Vec<&'a Task> {
    let mut visible = filter_tasks(tasks, filter);
    sort_tasks(&mut visible, sort);
    visible
}

/// Counts for the status line: (total, completed)
pub fn count_completed(tasks: &[Task]) -> (usize, usize) {
    let done = tasks.iter().filter(|t| t.completed).count();
    (tasks.len(), done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_filter_modes() {
        let tasks = vec![task("1", "a", false), task("2", "b", true)];

        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::Completed)), vec!["2"]);
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::Incomplete)), vec!["1"]);
        assert_eq!(ids(&filter_tasks(&tasks, FilterMode::All)), vec!["1", "2"]);
    }

    #[test]
    fn test_sort_modes() {
        let tasks = vec![task("1", "banana", false), task("2", "apple", false)];

        let asc = display_tasks(&tasks, FilterMode::All, SortMode::Ascending);
        assert_eq!(texts(&asc), vec!["apple", "banana"]);

        let desc = display_tasks(&tasks, FilterMode::All, SortMode::Descending);
        assert_eq!(texts(&desc), vec!["banana", "apple"]);

        let none = display_tasks(&tasks, FilterMode::All, SortMode::None);
        assert_eq!(texts(&none), vec!["banana", "apple"]);
    }

    #[test]
    fn test_sort_does_not_touch_store() {
        let tasks = vec![task("1", "c", false), task("2", "a", false), task("3", "b", false)];
        let _ = display_tasks(&tasks, FilterMode::All, SortMode::Ascending);
        let order: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_text() {
        let tasks = vec![
            task("1", "same", false),
            task("2", "other", false),
            task("3", "same", false),
        ];

        let asc = display_tasks(&tasks, FilterMode::All, SortMode::Ascending);
        assert_eq!(ids(&asc), vec!["2", "1", "3"]);

        let desc = display_tasks(&tasks, FilterMode::All, SortMode::Descending);
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let tasks = vec![
            task("1", "pear", true),
            task("2", "fig", false),
            task("3", "apple", true),
        ];
        let visible = display_tasks(&tasks, FilterMode::Completed, SortMode::Ascending);
        assert_eq!(texts(&visible), vec!["apple", "pear"]);
    }

    fn collate(a: &str, b: &str) -> Ordering {
        let collator = root_collator().expect("compiled collation data");
        compare_text(Some(&collator), a, b)
    }

    #[test]
    fn test_collate_ignores_case_at_primary_level() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Apple", "banana"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("a", "a"), Ordering::Equal);
    }

    #[test]
    fn test_collate_accents() {
        assert_eq!(collate("éclair", "fig"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("Zebra", "ábaco"), Ordering::Greater);
    }

    #[test]
    fn test_collate_letters_outside_latin_1_base() {
        assert_eq!(collate("æble", "banana"), Ordering::Less);
        assert_eq!(collate("øl", "pear"), Ordering::Less);
        assert_eq!(collate("straße", "strasz"), Ordering::Less);
        assert_eq!(collate("Łódź", "Madrid"), Ordering::Less);
    }

    #[test]
    fn test_collate_punctuation_before_letters() {
        assert_eq!(collate("~note", "apple"), Ordering::Less);
    }

    #[test]
    fn test_sort_uses_collation_order() {
        let tasks = vec![
            task("1", "Madrid", false),
            task("2", "Łódź", false),
            task("3", "banana", false),
            task("4", "æble", false),
        ];

        let asc = display_tasks(&tasks, FilterMode::All, SortMode::Ascending);
        assert_eq!(texts(&asc), vec!["æble", "banana", "Łódź", "Madrid"]);
    }

    #[test]
    fn test_count_completed() {
        let tasks = vec![task("1", "a", true), task("2", "b", false), task("3", "c", true)];
        assert_eq!(count_completed(&tasks), (3, 2));
        assert_eq!(count_completed(&[]), (0, 0));
    }
}
