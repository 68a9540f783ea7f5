use jumpto_core::{
    JumpOptions, JumpOutcome, JumpSession, OverlayLayerId, Region, RopeBuffer, SessionState,
    TextHost,
};

#[test]
fn test_preview_never_touches_the_selection() {
    let mut buffer = RopeBuffer::new("foo bar baz");
    let mut session = JumpSession::new(JumpOptions::default());
    assert_eq!(session.state(), SessionState::Idle);

    session.update(&mut buffer, "b");
    assert_eq!(session.state(), SessionState::Previewing);
    assert_eq!(
        buffer.overlay(OverlayLayerId::JUMP_PREVIEW),
        &[Region::caret(4)]
    );
    assert_eq!(buffer.selections(), vec![Region::caret(0)]);

    // A new keystroke supersedes the previous preview.
    session.update(&mut buffer, "baz");
    assert_eq!(
        buffer.overlay(OverlayLayerId::JUMP_PREVIEW),
        &[Region::caret(8)]
    );
    assert_eq!(buffer.selections(), vec![Region::caret(0)]);
}

#[test]
fn test_empty_input_previews_the_current_selection() {
    let originals = vec![Region::new(1, 4)];
    let mut buffer = RopeBuffer::with_selections("foo bar baz", originals.clone());
    let mut session = JumpSession::new(JumpOptions::default());

    session.update(&mut buffer, "");
    assert_eq!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW), &originals[..]);
    assert_eq!(buffer.selections(), originals);
}

#[test]
fn test_create_new_preview_shows_originals_and_new_carets() {
    let mut buffer = RopeBuffer::new("foo bar baz");
    let mut session = JumpSession::new(JumpOptions::adding_carets());

    session.update(&mut buffer, "bar");
    assert_eq!(
        buffer.overlay(OverlayLayerId::JUMP_PREVIEW),
        &[Region::caret(0), Region::caret(4)]
    );
}

#[test]
fn test_confirm_commits_and_clears_the_overlay() {
    let mut buffer = RopeBuffer::new("foo bar baz");
    let mut session = JumpSession::new(JumpOptions::default());

    session.update(&mut buffer, "bar");
    let outcome = session.confirm(&mut buffer, "bar");

    assert_eq!(outcome, JumpOutcome::Applied { moved: 1 });
    assert_eq!(session.state(), SessionState::Committed);
    assert_eq!(buffer.selections(), vec![Region::caret(4)]);
    assert!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW).is_empty());
}

#[test]
fn test_confirm_recomputes_from_current_selections() {
    // The cursor moves (e.g. by mouse) while the panel is open; the commit
    // must use the selection as it is at confirm time, not the previewed one.
    let mut buffer = RopeBuffer::new("aXaXa");
    let mut session = JumpSession::new(JumpOptions::default());

    session.update(&mut buffer, "a");
    buffer.set_selections(vec![Region::caret(2)]);

    session.confirm(&mut buffer, "a");
    assert_eq!(buffer.selections(), vec![Region::caret(4)]);
}

#[test]
fn test_cancel_is_a_true_noop_on_the_selection() {
    let originals = vec![Region::new(2, 5)];
    let mut buffer = RopeBuffer::with_selections("foo bar baz", originals.clone());
    let mut session = JumpSession::new(JumpOptions::default());

    session.update(&mut buffer, "baz");
    session.cancel(&mut buffer);

    assert_eq!(session.state(), SessionState::Cancelled);
    assert_eq!(buffer.selections(), originals);
    assert!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW).is_empty());

    // Late change callbacks after cancel are ignored.
    session.update(&mut buffer, "foo");
    assert_eq!(session.state(), SessionState::Cancelled);
    assert!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW).is_empty());
}

#[test]
fn test_invalid_regex_preview_notifies_and_clears_overlay() {
    let mut buffer = RopeBuffer::new("foo bar baz");
    let mut session = JumpSession::new(JumpOptions::default());

    session.update(&mut buffer, "/ba/");
    assert!(!buffer.overlay(OverlayLayerId::JUMP_PREVIEW).is_empty());

    session.update(&mut buffer, "/[/");
    assert!(buffer.overlay(OverlayLayerId::JUMP_PREVIEW).is_empty());
    assert_eq!(buffer.notices().len(), 1);
    assert_eq!(buffer.selections(), vec![Region::caret(0)]);
}

#[test]
fn test_prompt_label_wording_follows_the_mode() {
    let plain = JumpSession::new(JumpOptions::default());
    assert_eq!(
        plain.prompt_label(),
        "Jump to (chars or [chars] or {count} or /regex/):"
    );

    let extending = JumpSession::new(JumpOptions::extending());
    assert_eq!(
        extending.prompt_label(),
        "Expand selection to (chars or [chars] or {count} or /regex/):"
    );

    let adding = JumpSession::new(JumpOptions::adding_carets());
    assert_eq!(
        adding.prompt_label(),
        "Create caret at (chars or [chars] or {count} or /regex/):"
    );
}
