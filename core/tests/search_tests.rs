use search_core::{
    DocId, DocumentStatus, ErrorKind, Rating, SearchConfig, SearchError, SearchServer, StopWords,
};

fn pets() -> SearchServer {
    let mut server = SearchServer::from_stop_words_text("and with").unwrap();
    server.add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    server.add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    server
}

fn ids(docs: &[search_core::Document]) -> Vec<DocId> {
    docs.iter().map(|d| d.id).collect()
}

#[test]
fn document_matching_more_terms_ranks_first() {
    let server = pets();
    let top = server.find_top_documents("curly pet").unwrap();
    assert_eq!(ids(&top), vec![2, 1]);
    assert_eq!(top[0].rating, 2);
    assert_eq!(top[1].rating, 5);
    // "pet" is in every document, so only "curly" contributes
    let expected = (2f64).ln() * 0.25;
    assert!((top[0].relevance - expected).abs() < 1e-9);
    assert_eq!(top[1].relevance, 0.0);
}

#[test]
fn status_filter_excludes_other_statuses() {
    let mut server = SearchServer::from_stop_words_text("and in on").unwrap();
    server.add_document(0, "white cat and fancy collar", DocumentStatus::Active, &[8, -3]).unwrap();
    assert!(server.find_top_documents_with("cat", &DocumentStatus::Banned).unwrap().is_empty());
    assert_eq!(ids(&server.find_top_documents("cat").unwrap()), vec![0]);
}

#[test]
fn minus_term_excludes_document() {
    let mut server = SearchServer::default();
    server.add_document(5, "fluffy fluffy fluffy dog", DocumentStatus::Active, &[9]).unwrap();
    server.add_document(6, "fluffy cat", DocumentStatus::Active, &[1]).unwrap();
    server.add_document(7, "plain bird", DocumentStatus::Active, &[1]).unwrap();
    assert_eq!(ids(&server.find_top_documents("fluffy -dog").unwrap()), vec![6]);
}

#[test]
fn malformed_queries_fail() {
    let server = pets();
    let err = server.find_top_documents("--cat").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(server.find_top_documents("fluffy -"), Err(SearchError::DanglingMinus));
    assert_eq!(
        server.match_document("pet --rat", 1).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn negative_or_duplicate_id_leaves_count_unchanged() {
    let mut server = pets();
    let err = server.add_document(-1, "text", DocumentStatus::Active, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = server.add_document(2, "other text", DocumentStatus::Banned, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(server.document_count(), 2);
}

#[test]
fn term_frequencies_sum_to_one() {
    let mut server = SearchServer::from_stop_words_text("the").unwrap();
    let text = "the quick brown fox jumps over the lazy dog fox";
    server.add_document(0, text, DocumentStatus::Active, &[]).unwrap();
    server.add_document(1, text, DocumentStatus::Irrelevant, &[]).unwrap();

    for id in [0, 1] {
        let sum: f64 = text
            .split(' ')
            .filter(|w| *w != "the")
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .map(|w| server.term_postings(w)[&id])
            .sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum for {id} was {sum}");
    }
}

#[test]
fn never_returns_more_than_max_results() {
    let mut server = SearchServer::default();
    for id in 0..20 {
        server.add_document(id, &format!("common word{id}"), DocumentStatus::Active, &[id]).unwrap();
    }
    server.add_document(20, "unrelated", DocumentStatus::Active, &[]).unwrap();
    let top = server.find_top_documents("common").unwrap();
    assert_eq!(top.len(), 5);

    let mut wide = SearchServer::with_config(StopWords::new(), SearchConfig { max_results: 50, ..Default::default() });
    for id in 0..20 {
        wide.add_document(id, "common", DocumentStatus::Active, &[]).unwrap();
    }
    assert_eq!(wide.find_top_documents("common").unwrap().len(), 20);
}

#[test]
fn near_ties_are_broken_by_rating() {
    let mut server = SearchServer::default();
    server.add_document(0, "cat", DocumentStatus::Active, &[1]).unwrap();
    server.add_document(1, "cat", DocumentStatus::Active, &[8]).unwrap();
    server.add_document(2, "cat", DocumentStatus::Active, &[4]).unwrap();
    server.add_document(3, "dog", DocumentStatus::Active, &[0]).unwrap();

    let top = server.find_top_documents("cat").unwrap();
    assert_eq!(ids(&top), vec![1, 2, 0]);
    for pair in top.windows(2) {
        if (pair[0].relevance - pair[1].relevance).abs() < 1e-6 {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let server = pets();
    let first = server.find_top_documents("funny curly -rat").unwrap();
    for _ in 0..5 {
        assert_eq!(server.find_top_documents("funny curly -rat").unwrap(), first);
    }
}

#[test]
fn stop_word_query_matches_nothing() {
    let mut server = SearchServer::from_stop_words_text("in the").unwrap();
    server.add_document(3, "in the", DocumentStatus::Active, &[4]).unwrap();
    assert!(server.find_top_documents("in").unwrap().is_empty());
    assert!(server.find_top_documents("-the").unwrap().is_empty());
    let query = server.parse_query("in -the").unwrap();
    assert!(query.is_empty());
    assert_eq!(server.document_id_at(0), Ok(3));
}

#[test]
fn predicate_filter_sees_id_status_and_rating() {
    let mut server = SearchServer::from_stop_words_text("и в на").unwrap();
    server.add_document(0, "белый кот и модный ошейник", DocumentStatus::Active, &[8, -3]).unwrap();
    server.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    server.add_document(2, "ухоженный пёс выразительные глаза", DocumentStatus::Active, &[5, -12, 2, 1]).unwrap();
    server.add_document(3, "ухоженный скворец евгений", DocumentStatus::Banned, &[9]).unwrap();

    let even = |id: DocId, _: DocumentStatus, _: Rating| id % 2 == 0;
    assert_eq!(ids(&server.find_top_documents_with("пушистый ухоженный кот", &even).unwrap()), vec![0, 2]);

    let banned = server.find_top_documents_with("пушистый ухоженный кот", &DocumentStatus::Banned).unwrap();
    assert_eq!(ids(&banned), vec![3]);

    let positive = |_: DocId, _: DocumentStatus, rating: Rating| rating > 0;
    assert_eq!(ids(&server.find_top_documents_with("ухоженный", &positive).unwrap()), vec![3]);
}

#[test]
fn match_document_lists_sorted_plus_terms() {
    let server = pets();
    let (words, status) = server.match_document("rat funny funny cat", 1).unwrap();
    assert_eq!(words, vec!["funny", "rat"]);
    assert_eq!(status, DocumentStatus::Active);

    let (words, status) = server.match_document("funny -nasty", 1).unwrap();
    assert!(words.is_empty());
    assert_eq!(status, DocumentStatus::Active);

    let err = server.match_document("funny", 42).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn document_with_only_stop_words_is_retrievable_by_position() {
    let mut server = SearchServer::from_stop_words_text("a an").unwrap();
    server.add_document(11, "a an a", DocumentStatus::Removed, &[3, 4]).unwrap();
    assert_eq!(server.document_count(), 1);
    assert_eq!(server.document_id_at(0), Ok(11));
    let (words, status) = server.match_document("a", 11).unwrap();
    assert!(words.is_empty());
    assert_eq!(status, DocumentStatus::Removed);
    assert_eq!(server.document_id_at(1).unwrap_err().kind(), ErrorKind::OutOfRange);
}
