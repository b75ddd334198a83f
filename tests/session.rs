use tweetstorm::separator::{self, Separator};
use tweetstorm::{Config, Error, Session};

/// A sentence of exactly `len` characters: five-letter words, final period
fn sentence(len: usize) -> String {
    let mut s: String = (0..len - 1)
        .map(|i| if i % 6 == 5 && i != len - 2 { ' ' } else { 'a' })
        .collect();
    s.push('.');
    s
}

fn three_sentences() -> Session {
    let text = [sentence(200), sentence(200), sentence(200)].join(" ");
    let mut session = Session::new(&text, Config::default()).unwrap();
    session.chunk_whole_document(280).unwrap();
    session
}

fn readouts(session: &Session) -> Vec<usize> {
    let doc = session.document();
    separator::find_all(doc, 0..doc.len_chars())
        .into_iter()
        .map(|located| located.separator.num)
        .collect()
}

#[test]
fn test_short_text_is_one_untagged_chunk() {
    let text = "x".repeat(49) + ".";
    let mut session = Session::new(&text, Config::default()).unwrap();

    let outcome = session.chunk_whole_document(280).unwrap();

    assert_eq!(outcome.chunks, 1);
    let views = session.chunks();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].text, text);
    assert_eq!(views[0].readout, 50);
    assert_eq!(
        session.text(),
        format!("{}{}{}", Separator::new(50, 280), text, Separator::new(0, 280))
    );
}

#[test]
fn test_three_sentences_are_tagged() {
    let session = three_sentences();
    let views = session.chunks();

    assert_eq!(views.len(), 3);
    for (i, view) in views.iter().enumerate() {
        let tag = format!(" ({}/3)", i + 1);
        assert!(view.text.ends_with(&tag), "chunk {} was {:?}", i + 1, view.text);
        assert!(view.length - tag.len() <= 272);
        assert_eq!(view.length, 206);
        assert_eq!(view.readout, 206);
        assert!(!view.over_budget);
    }
    assert_eq!(readouts(&session), vec![206, 206, 206, 0]);
}

#[test]
fn test_unchunkable_word() {
    let text = "a".repeat(400);
    let mut session = Session::new(&text, Config::default()).unwrap();

    let result = session.chunk_whole_document(280);

    assert!(matches!(
        result,
        Err(Error::UnchunkableToken { available: 272, .. })
    ));
}

#[test]
fn test_edit_updates_only_its_chunk() {
    let mut session = three_sentences();
    session.enable_live_tracking();
    let before = session.chunks();

    session.insert(before[1].start + 10, "HELLO").unwrap();

    let after = session.chunks();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].length, 211);
    assert_eq!(after[1].readout, 211);
    assert_eq!(after[2].text, before[2].text);
    assert_eq!(after[2].readout, before[2].readout);
    assert_eq!(readouts(&session), vec![206, 211, 206, 0]);
}

#[test]
fn test_edit_in_empty_chunk_is_a_miss() {
    let sep = Separator::new(0, 280).render();
    let text = format!("{}Some words.{}{}", sep, sep, sep);
    let mut session = Session::new(&text, Config::default()).unwrap();
    session.enable_live_tracking();

    let gap = sep.chars().count() * 2 + 11;
    session.insert(gap, "   ").unwrap();

    assert_eq!(readouts(&session), vec![0, 0, 0]);
    assert_eq!(session.chunks().len(), 1);
}

#[test]
fn test_deletes_are_tracked() {
    let mut session = three_sentences();
    session.enable_live_tracking();
    let start = session.chunks()[0].start;

    session.delete(start..start + 12).unwrap();

    let views = session.chunks();
    assert_eq!(views[0].length, 194);
    assert!(views.iter().all(|v| v.is_in_sync()));
}

#[test]
fn test_untracked_edits_fixed_by_refresh() {
    let mut session = three_sentences();
    let start = session.chunks()[2].start;

    session.insert(start, "Extra words. ").unwrap();
    assert!(!session.chunks()[2].is_in_sync());

    assert_eq!(session.refresh_all().unwrap(), 1);
    assert!(session.chunks().iter().all(|v| v.is_in_sync()));
}

#[test]
fn test_tracking_state_survives_chunking() {
    let mut session = Session::new("Hello there. General text.", Config::default()).unwrap();
    session.enable_live_tracking();

    session.chunk_whole_document(280).unwrap();
    assert!(session.is_tracking());
    assert!(session.chunks().iter().all(|v| v.is_in_sync()));

    let mut failing = Session::new(&"a".repeat(400), Config::default()).unwrap();
    failing.enable_live_tracking();
    assert!(failing.chunk_whole_document(280).is_err());
    assert!(failing.is_tracking());
}

#[test]
fn test_region_leaves_rest_alone() {
    let text = format!("Intro line.\n\n{}\n\nOutro line.", sentence(100));
    let mut session = Session::new(&text, Config::default()).unwrap();

    let outcome = session.chunk_region(13, 113, 140).unwrap();

    assert_eq!(outcome.chunks, 1);
    let result = session.text();
    assert!(result.starts_with("Intro line.\n\n"));
    assert!(result.ends_with("\n\nOutro line."));
    let views = session.chunks();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].text, sentence(100));
    assert_eq!(views[0].max_len, 140);
    assert_eq!(outcome.end, 13 + 30 + 100 + 30);
}

#[test]
fn test_rejects_bad_config() {
    let config = Config {
        accept_ratio: 1.5,
        ..Config::default()
    };
    assert!(matches!(
        Session::new("text", config),
        Err(Error::InvalidConfig(_))
    ));

    let mut session = Session::new("some text", Config::default()).unwrap();
    assert!(matches!(
        session.chunk_whole_document(8),
        Err(Error::BudgetTooSmall { max_len: 8, fuzz: 8 })
    ));
}
