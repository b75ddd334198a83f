use super::*;
use crate::config::Config;
use crate::document::Document;
use crate::error::Error;
use crate::separator::{self, Separator};

/// A sentence of exactly `len` characters: five-letter words, final period
fn sentence(len: usize) -> String {
    let mut s: String = (0..len - 1)
        .map(|i| if i % 6 == 5 && i != len - 2 { ' ' } else { 'a' })
        .collect();
    s.push('.');
    s
}

fn placeholder() -> String {
    Separator::new(0, 280).render()
}

fn bodies(doc: &Document) -> Vec<String> {
    let seps = separator::find_all(doc, 0..doc.len_chars());
    seps.windows(2)
        .map(|pair| doc.slice(pair[0].range.end..pair[1].range.start).unwrap())
        .collect()
}

#[test]
fn test_short_text_single_chunk() {
    let text = "x".repeat(49) + ".";
    let mut doc = Document::from(text.as_str());

    let outcome = chunk_region(&mut doc, 0, 50, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 1);
    assert_eq!(outcome.end, doc.len_chars());
    assert_eq!(doc.text(), format!("{}{}{}", placeholder(), text, placeholder()));
}

#[test]
fn test_sentences_become_chunks() {
    let sentences = [sentence(200), sentence(200), sentence(200)];
    let text = sentences.join(" ");
    let mut doc = Document::from(text.as_str());
    let end = doc.len_chars();

    let outcome = chunk_region(&mut doc, 0, end, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 3);
    let expected = format!(
        "{sep}{}{sep}{}{sep}{}{sep}",
        sentences[0],
        sentences[1],
        sentences[2],
        sep = placeholder()
    );
    assert_eq!(doc.text(), expected);
}

#[test]
fn test_word_fallback_for_long_sentence() {
    let text = sentence(400);
    let mut doc = Document::from(text.as_str());

    let outcome = chunk_region(&mut doc, 0, 400, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 2);
    let parts = bodies(&doc);
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.chars().count() <= 272));
    assert!(parts[0].chars().count() > 136);
    assert_eq!(parts.join(" "), text);
}

#[test]
fn test_unchunkable_token() {
    let text = "a".repeat(400);
    let mut doc = Document::from(text.as_str());

    let result = chunk_region(&mut doc, 0, 400, &Config::default());

    assert_eq!(
        result,
        Err(Error::UnchunkableToken {
            position: placeholder().chars().count(),
            available: 272,
        })
    );
}

#[test]
fn test_boundary_whitespace_is_eaten() {
    let text = format!("{}  \n  {}", sentence(200), sentence(200));
    let mut doc = Document::from(text.as_str());
    let end = doc.len_chars();

    chunk_region(&mut doc, 0, end, &Config::default()).unwrap();

    assert_eq!(bodies(&doc), vec![sentence(200), sentence(200)]);
}

#[test]
fn test_leading_whitespace_dropped() {
    let mut doc = Document::from("   Hello there.");
    let end = doc.len_chars();

    let outcome = chunk_region(&mut doc, 0, end, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 1);
    assert!(doc.text().starts_with(&placeholder()));
    assert_eq!(bodies(&doc), vec!["Hello there.".to_string()]);
}

#[test]
fn test_region_inside_document() {
    let mut doc = Document::from("Before. Middle part. After.");

    let outcome = chunk_region(&mut doc, 8, 20, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 1);
    assert_eq!(
        doc.text(),
        format!("Before. {sep}Middle part.{sep} After.", sep = placeholder())
    );
    assert_eq!(outcome.end, 8 + 30 + 12 + 30);
}

#[test]
fn test_mid_word_end_pushed_outward() {
    let mut doc = Document::from("hello world");

    let outcome = chunk_region(&mut doc, 0, 8, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 1);
    assert_eq!(bodies(&doc), vec!["hello world".to_string()]);
}

#[test]
fn test_mid_sentence_begin_clamped() {
    let text = format!("{} {}", sentence(200), sentence(200));
    let mut doc = Document::from(text.as_str());
    let end = doc.len_chars();

    let outcome = chunk_region(&mut doc, 50, end, &Config::default()).unwrap();

    assert_eq!(outcome.chunks, 2);
    assert!(doc.text().starts_with(&text[..50]));
    let parts = bodies(&doc);
    assert_eq!(parts[0], text[50..200]);
    assert_eq!(parts[1], sentence(200));
}

#[test]
fn test_accept_ratio_is_policy() {
    let text = format!("{} {}", sentence(150), sentence(150));

    let mut loose = Document::from(text.as_str());
    chunk_region(&mut loose, 0, 301, &Config::default()).unwrap();
    assert_eq!(bodies(&loose)[0], sentence(150));

    let strict = Config {
        accept_ratio: 0.25,
        ..Config::default()
    };
    let mut tight = Document::from(text.as_str());
    chunk_region(&mut tight, 0, 301, &strict).unwrap();
    let first = bodies(&tight)[0].chars().count();
    assert!(first > 200 && first <= 272, "first chunk was {}", first);
}

#[test]
fn test_precondition_errors() {
    let mut doc = Document::from("   \n  ");
    assert!(matches!(
        chunk_region(&mut doc, 0, 6, &Config::default()),
        Err(Error::EmptyRegion { .. })
    ));

    let mut doc = Document::from("abc");
    assert!(matches!(
        chunk_region(&mut doc, 2, 1, &Config::default()),
        Err(Error::InvalidRegion { .. })
    ));
    assert!(matches!(
        chunk_region(&mut doc, 0, 3, &Config::with_max_len(8)),
        Err(Error::BudgetTooSmall { .. })
    ));

    let chunked = format!("{}Already split.{}", placeholder(), placeholder());
    let mut doc = Document::from(chunked.as_str());
    let end = doc.len_chars();
    assert_eq!(
        chunk_region(&mut doc, 0, end, &Config::default()),
        Err(Error::RegionHasSeparators(0))
    );
}

#[test]
fn test_fill_keeps_lengths() {
    let text = sentence(120);
    let config = Config {
        fill_column: Some(40),
        ..Config::default()
    };
    let mut doc = Document::from(text.as_str());

    chunk_region(&mut doc, 0, 120, &config).unwrap();

    let parts = bodies(&doc);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].chars().count(), 120);
    assert!(parts[0].contains('\n'));
    assert_eq!(parts[0].replace('\n', " "), text);
}

#[test]
fn test_wrap_text() {
    assert_eq!(wrap_text("one two three four", 8), "one two\nthree\nfour");
    assert_eq!(wrap_text("short", 80), "short");
    assert_eq!(wrap_text("averyveryverylongword next", 5), "averyveryverylongword\nnext");
}
