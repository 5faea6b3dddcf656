//! Ordering of the question list.

use api::{Millis, Question};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    LastUpdate,
    /// Most recently asked first.
    Creation,
}

impl SortKey {
    fn timestamp(self, question: &Question) -> Millis {
        match self {
            SortKey::LastUpdate => question.updated_at,
            SortKey::Creation => question.created_at,
        }
    }
}

/// Drop empty slots and order newest first by `key`. Ties keep input order.
pub fn sort_questions<I>(unsorted: I, key: SortKey) -> Vec<Question>
where
    I: IntoIterator<Item = Option<Question>>,
{
    let mut questions: Vec<Question> = unsorted.into_iter().flatten().collect();
    questions.sort_by(|a, b| key.timestamp(b).cmp(&key.timestamp(a)));
    questions
}
