use crate::config::SearchConfig;
use crate::document::{DocId, Document, DocumentStatus, Rating};
use crate::index::InvertedIndex;
use crate::query::Query;
use std::collections::BTreeMap;

/// Decides whether a matched document may appear in search results.
///
/// Implemented for plain closures `Fn(DocId, DocumentStatus, Rating) -> bool`
/// and for [`DocumentStatus`], which keeps only documents with that status.
pub trait DocumentFilter {
    fn accepts(&self, id: DocId, status: DocumentStatus, rating: Rating) -> bool;
}

impl<F> DocumentFilter for F
where
    F: Fn(DocId, DocumentStatus, Rating) -> bool,
{
    fn accepts(&self, id: DocId, status: DocumentStatus, rating: Rating) -> bool {
        self(id, status, rating)
    }
}

impl DocumentFilter for DocumentStatus {
    fn accepts(&self, _id: DocId, status: DocumentStatus, _rating: Rating) -> bool {
        *self == status
    }
}

fn inverse_document_frequency(document_count: usize, posting_count: usize) -> f64 {
    (document_count as f64 / posting_count as f64).ln()
}

/// Score every document matching `query` by TF-IDF and keep the ones `filter` accepts.
/// Results come out in ascending id order.
pub fn find_all_documents<F>(index: &InvertedIndex, query: &Query, filter: &F) -> Vec<Document>
where
    F: DocumentFilter + ?Sized,
{
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for term in &query.plus_terms {
        let postings = index.term_postings(term);
        if postings.is_empty() {
            continue;
        }
        let idf = inverse_document_frequency(index.document_count(), postings.len());
        for (&id, &tf) in postings {
            *relevance.entry(id).or_insert(0.0) += idf * tf;
        }
    }
    for term in &query.minus_terms {
        for id in index.term_postings(term).keys() {
            relevance.remove(id);
        }
    }

    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            let data = index.document(id)?;
            filter
                .accepts(id, data.status, data.rating)
                .then(|| Document::new(id, relevance, data.rating))
        })
        .collect()
}

/// Order by relevance descending; documents whose relevances lie within
/// `relevance_epsilon` of each other are ordered by rating descending.
/// Truncates to `max_results`.
pub fn rank(mut documents: Vec<Document>, config: &SearchConfig) -> Vec<Document> {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id)));

    // Chains of neighbours closer than epsilon form one tie group.
    let mut start = 0;
    while start < documents.len() {
        let mut end = start + 1;
        while end < documents.len()
            && documents[end - 1].relevance - documents[end].relevance < config.relevance_epsilon
        {
            end += 1;
        }
        order_tie_group(&mut documents[start..end], config.relevance_epsilon);
        start = end;
    }

    documents.truncate(config.max_results);
    documents
}

/// Whether `a` has to be listed before `b`.
fn precedes(a: &Document, b: &Document, epsilon: f64) -> bool {
    if (a.relevance - b.relevance).abs() < epsilon {
        a.rating > b.rating
    } else {
        a.relevance > b.relevance
    }
}

/// Reorder a relevance-sorted tie group so every pair honours [`precedes`].
/// Documents with no constraint between them keep their relevance order.
fn order_tie_group(group: &mut [Document], epsilon: f64) {
    let (Some(first), Some(last)) = (group.first(), group.last()) else {
        return;
    };
    if first.relevance - last.relevance < epsilon {
        // every pair is a near tie; the sort is stable
        group.sort_by(|a, b| b.rating.cmp(&a.rating));
        return;
    }

    let len = group.len();
    let mut incoming: Vec<usize> = (0..len)
        .map(|i| (0..len).filter(|&j| precedes(&group[j], &group[i], epsilon)).count())
        .collect();
    let mut placed = vec![false; len];
    let mut order = Vec::with_capacity(len);
    for _ in 0..len {
        // a cycle of constraints leaves no free document; fall back to relevance order
        let next = (0..len)
            .find(|&i| !placed[i] && incoming[i] == 0)
            .or_else(|| (0..len).find(|&i| !placed[i]))
            .unwrap_or_default();
        placed[next] = true;
        order.push(group[next]);
        for (i, count) in incoming.iter_mut().enumerate() {
            if !placed[i] && *count > 0 && precedes(&group[next], &group[i], epsilon) {
                *count -= 1;
            }
        }
    }
    group.copy_from_slice(&order);
}
