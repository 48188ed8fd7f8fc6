//! Keyboard-driven sessions through `Gui`, with scripted input.
//!
//! Run with: cargo test --test gui

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shell_canvas::input::keys;
use shell_canvas::{
    shared, BorderStyle, BufferSink, Button, Canvas, CanvasConfig, ColorName, Component,
    FocusChange, Gui, KeyPress, Label, ScriptedKeyReader, ZIndex,
};

fn tab() -> KeyPress {
    KeyPress::new(keys::TAB)
}

fn enter() -> KeyPress {
    KeyPress::new(keys::RETURN)
}

fn quit() -> KeyPress {
    KeyPress::new(keys::CTRL_Q)
}

#[test]
fn form_session_presses_second_button() {
    let mut canvas = Canvas::new(20, 4).with_border(BorderStyle::NONE);
    let status = Rc::new(RefCell::new(Label::new((0, 3), "idle")));
    canvas.add(status.clone(), ZIndex::Append).unwrap();

    for (i, text) in ["Yes", "No"].into_iter().enumerate() {
        let mut button = Button::new((6 * i as i32, 0), text);
        let status = status.clone();
        button.on_press.on(move |_, _| status.borrow_mut().set_text(format!("{text}!")));
        canvas.add(shared(button), ZIndex::Append).unwrap();
    }

    let script = ScriptedKeyReader::new([tab(), tab(), enter(), quit()]);
    let mut gui = Gui::new(canvas, script, BufferSink::new());
    gui.run().unwrap();

    assert_eq!(status.borrow().text(), "No!");
    // Initial frame plus one per handled key; the quit key draws nothing
    assert_eq!(gui.sink().len(), 4);

    let last = gui.sink().last().unwrap();
    let rows: Vec<&str> = last.lines().collect();
    assert_eq!(rows[0], "┌───┐ ┌──┐          ");
    assert_eq!(rows[1], "│Yes│ │No│          ");
    assert_eq!(rows[3], "No!                 ");
}

#[test]
fn focus_notifications_follow_tab_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut canvas = Canvas::new(10, 3);

    for name in ["a", "b"] {
        let mut button = Button::new((0, 0), name);
        let gained = log.clone();
        button.core_mut().on_focus.on(move |_, change: &FocusChange| {
            gained.borrow_mut().push(format!("{name}:{change:?}"));
        });
        let lost = log.clone();
        button.core_mut().focus_lost.on(move |_, change: &FocusChange| {
            lost.borrow_mut().push(format!("{name}:{change:?}"));
        });
        canvas.add(shared(button), ZIndex::Append).unwrap();
    }

    let script = ScriptedKeyReader::new([tab(), tab(), tab()]);
    let mut gui = Gui::new(canvas, script, BufferSink::new());
    gui.run().unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["a:Gained", "a:Lost", "b:Gained", "b:Lost", "a:Gained"]
    );
}

#[test]
fn unfocused_keys_reach_nobody() {
    let mut canvas = Canvas::new(10, 3);
    let mut button = Button::new((0, 0), "x");
    let seen = Rc::new(Cell::new(0));
    let seen_clone = seen.clone();
    button.core_mut().key_press.on(move |_, _| seen_clone.set(seen_clone.get() + 1));
    canvas.add(shared(button), ZIndex::Append).unwrap();

    let script = ScriptedKeyReader::from_text("abc");
    let mut gui = Gui::new(canvas, script, BufferSink::new());
    gui.run().unwrap();

    assert_eq!(seen.get(), 0);
    assert_eq!(gui.last_key(), Some(KeyPress::char('c')));
}

#[test]
fn configured_session_uses_color_and_border() {
    let config = CanvasConfig::from_toml_str(
        r#"
        width = 4
        height = 1
        border = "thin-vertical"
        color = "orange"
        "#,
    )
    .unwrap();

    let mut canvas = config.build_canvas().unwrap();
    canvas.add(shared(Label::new((0, 0), "ok")), ZIndex::Append).unwrap();

    let mut gui = Gui::new(canvas, ScriptedKeyReader::default(), BufferSink::new())
        .with_options(config.draw_options().unwrap());
    gui.run().unwrap();

    assert_eq!(gui.sink().writes(), &[("│ok  │\n".to_string(), ColorName::Orange)]);
}
