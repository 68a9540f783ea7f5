//! Simulates the interactive command end to end against the rope-backed
//! reference host: open the prompt, type a specifier one character at a
//! time (watching the preview overlay), then confirm.

use jumpto_core::{
    JumpOptions, JumpSession, OverlayLayerId, RopeBuffer, TextHost, jump_to,
};

fn main() {
    let text = "let value = compute(input);\nlet other = compute(value);";
    let mut buffer = RopeBuffer::new(text);

    let mut session = JumpSession::new(JumpOptions {
        whole_match: true,
        ..JumpOptions::default()
    });
    println!("{}", session.prompt_label());

    // The host would call update() from its input panel's change callback.
    let typed = "/compute\\(\\w+\\)/";
    for end in 1..=typed.len() {
        let Some(partial) = typed.get(..end) else {
            continue;
        };
        session.update(&mut buffer, partial);
        println!(
            "typed {partial:24} preview: {:?}",
            buffer.overlay(OverlayLayerId::JUMP_PREVIEW)
        );
    }

    let outcome = session.confirm(&mut buffer, typed);
    println!("committed: {outcome:?}");
    println!("selection: {:?}", buffer.selections());

    // The direct command reuses the same core without a prompt.
    let outcome = jump_to(&mut buffer, "{1}", JumpOptions::default());
    println!("then {{1}} -> {outcome:?}: {:?}", buffer.selections());
}
