use tabiwari_domain::JournalPost;

use crate::{error::JournalError, trip::TripBook};

/// The shared travel journal.
pub struct JournalService;

impl JournalService {
    pub fn add_post(book: &mut TripBook, post: JournalPost) -> Result<(), JournalError> {
        if !book.is_member(&post.author) {
            return Err(JournalError::UnknownAuthor {
                member: post.author.clone(),
            });
        }
        book.journal.push(post);
        Ok(())
    }

    pub fn remove_post(book: &mut TripBook, id: &str) -> bool {
        let before = book.journal.len();
        book.journal.retain(|post| post.id != id);
        book.journal.len() != before
    }

    /// Posts newest-first; same-day posts keep insertion order.
    pub fn posts_latest_first(book: &TripBook) -> Vec<&JournalPost> {
        let mut posts: Vec<&JournalPost> = book.journal.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Up to `count` memorable posts for the trip summary, oldest first as
    /// they were written.
    pub fn highlights(book: &TripBook, count: usize) -> Vec<&JournalPost> {
        book.journal.iter().take(count).collect()
    }
}
