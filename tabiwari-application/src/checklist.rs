use tabiwari_domain::{Assignee, ChecklistItem, ChecklistKind};

use crate::trip::TripBook;

/// Packing and shopping checklists.
pub struct ChecklistService;

impl ChecklistService {
    pub fn upsert(book: &mut TripBook, item: ChecklistItem) {
        if let Some(existing) = book
            .checklist
            .iter_mut()
            .find(|candidate| candidate.id == item.id)
        {
            *existing = item;
        } else {
            book.checklist.push(item);
        }
    }

    pub fn remove(book: &mut TripBook, id: &str) -> bool {
        let before = book.checklist.len();
        book.checklist.retain(|item| item.id != id);
        book.checklist.len() != before
    }

    /// Flips an item's completed flag; returns the new state.
    pub fn toggle(book: &mut TripBook, id: &str) -> Option<bool> {
        let item = book.checklist.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Unchecked items of one kind, for everyone or a specific assignee.
    pub fn open_items<'a>(
        book: &'a TripBook,
        kind: ChecklistKind,
        assignee: Option<&Assignee>,
    ) -> Vec<&'a ChecklistItem> {
        book.checklist
            .iter()
            .filter(|item| item.kind == kind && !item.completed)
            .filter(|item| match assignee {
                Some(wanted) => &item.assignee == wanted,
                None => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabiwari_domain::MemberId;

    fn item(id: &str, kind: ChecklistKind, assignee: Assignee) -> ChecklistItem {
        ChecklistItem {
            id: id.to_owned(),
            kind,
            title: id.to_owned(),
            assignee,
            completed: false,
        }
    }

    #[fixture]
    fn book() -> TripBook {
        let mut book = TripBook::default();
        ChecklistService::upsert(
            &mut book,
            item("passport", ChecklistKind::Packing, Assignee::Everyone),
        );
        ChecklistService::upsert(
            &mut book,
            item(
                "kitkat",
                ChecklistKind::Shopping,
                Assignee::Member(MemberId::new("a")),
            ),
        );
        book
    }

    #[rstest]
    fn toggle_flips_and_reports(mut book: TripBook) {
        assert_eq!(ChecklistService::toggle(&mut book, "passport"), Some(true));
        assert_eq!(ChecklistService::toggle(&mut book, "passport"), Some(false));
        assert_eq!(ChecklistService::toggle(&mut book, "nope"), None);
    }

    #[rstest]
    fn open_items_filter_by_kind_and_assignee(mut book: TripBook) {
        ChecklistService::toggle(&mut book, "passport");

        assert!(ChecklistService::open_items(&book, ChecklistKind::Packing, None).is_empty());
        let shopping = ChecklistService::open_items(&book, ChecklistKind::Shopping, None);
        assert_eq!(shopping.len(), 1);

        let for_a = Assignee::Member(MemberId::new("a"));
        assert_eq!(
            ChecklistService::open_items(&book, ChecklistKind::Shopping, Some(&for_a)).len(),
            1
        );
        let for_b = Assignee::Member(MemberId::new("b"));
        assert!(
            ChecklistService::open_items(&book, ChecklistKind::Shopping, Some(&for_b)).is_empty()
        );
    }
}
