use insta::assert_snapshot;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers},
};
use shoplist_lib::item::Unit;

use crate::{
    store::{
        MockDispatcher, StateGetter, Store, reducer::StoreReducer,
        state::Notification,
    },
    ui::colors::Theme,
};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctx(state: &State) -> CustomWidgetContext<'_> {
    CustomWidgetContext {
        state,
        app_area: Rect::new(0, 0, 80, 24),
    }
}

fn render(app: &App, state: &State, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };
            app.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    terminal
}

#[test]
fn renders_empty_app() {
    let app = App::new(Rc::new(MockDispatcher::new()));
    let state = State::default();
    let terminal = render(&app, &state, 14);
    assert_snapshot!(terminal.backend(), @r#"
    " Shopping List                                      0 items "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "        Your list is empty, press (a) to add an item        "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    " ╔════════════════════════════════════════════════════════╗ "
    " ║             (a) add · (t) theme · (q) quit             ║ "
    " ╚════════════════════════════════════════════════════════╝ "
    "#);
}

#[test]
fn renders_items_and_count() {
    let app = App::new(Rc::new(MockDispatcher::new()));
    let mut state = State::default();
    state.list.add("Milk", "2", Unit::Packets).unwrap();

    let terminal = render(&app, &state, 14);
    assert_snapshot!(terminal.backend(), @r#"
    " Shopping List                                       1 item "
    "                                                            "
    " ╭───────────────────────────────────────────────────────╮  "
    " │Milk                Qty: 2pkt      (e) edit  (d) delete│  "
    " ╰───────────────────────────────────────────────────────╯  "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    "                                                            "
    " ╔════════════════════════════════════════════════════════╗ "
    " ║     (j/k) select · (a) add · (e) edit · (d) delete     ║ "
    " ╚════════════════════════════════════════════════════════╝ "
    "#);
}

#[test]
fn renders_add_dialog_and_its_legend() {
    let app = App::new(Rc::new(MockDispatcher::new()));
    let mut state = State::default();
    state.list.open_add_dialog();

    let terminal = render(&app, &state, 20);
    assert_snapshot!(terminal.backend(), @r#"
    " Shopping List                                      0 items "
    "                                                            "
    "                                                            "
    "                                                            "
    "     ╔ Add Shopping Item ═════════════════════════════╗     "
    "     ║ Enter Name:                                    ║     "
    "     ║                                                ║     "
    "     ║ Enter Quantity:                                ║     "
    "     ║                                                ║     "
    "     ║ Unit: [Unit ▾]                                 ║     "
    "     ║                                                ║     "
    "     ║                                                ║     "
    "     ║                                                ║     "
    "     ║                                                ║     "
    "     ║      (tab) next  (enter) add  (esc) cancel     ║     "
    "     ╚════════════════════════════════════════════════╝     "
    "                                                            "
    " ╔════════════════════════════════════════════════════════╗ "
    " ║      (tab) next field · (enter) add · (esc) cancel     ║ "
    " ╚════════════════════════════════════════════════════════╝ "
    "#);
}

#[test]
fn renders_notification_popover() {
    let app = App::new(Rc::new(MockDispatcher::new()));
    let mut state = State::default();
    state.notification = Some(Notification::new("Enter Valid Name & Unit"));

    let terminal = render(&app, &state, 14);
    assert_snapshot!(terminal.backend(), @r#"
    " Shopping List                                      0 items "
    "                                                            "
    "                                                            "
    "                                                            "
    "          ╔══════════════════════════════════════╗          "
    "          ║        Enter Valid Name & Unit       ║          "
    "        Yo║                                      ║em        "
    "          ║                                      ║          "
    "          ║            (enter) dismiss           ║          "
    "          ╚══════════════════════════════════════╝          "
    "                                                            "
    " ╔════════════════════════════════════════════════════════╗ "
    " ║             (a) add · (t) theme · (q) quit             ║ "
    " ╚════════════════════════════════════════════════════════╝ "
    "#);
}

#[test]
fn enter_dismisses_notification_first() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::DismissNotification)
        .times(1)
        .return_const(());

    let app = App::new(Rc::new(dispatcher));
    let mut state = State::default();
    state.list.open_add_dialog();
    state.notification = Some(Notification::new("Enter Valid Name & Unit"));

    assert!(app.process_event(&key(KeyCode::Enter), &ctx(&state)));
}

#[test]
fn t_cycles_theme_when_not_typing() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::CycleTheme)
        .times(1)
        .return_const(());

    let app = App::new(Rc::new(dispatcher));
    let state = State::default();
    assert!(app.process_event(&key(KeyCode::Char('t')), &ctx(&state)));
}

#[test]
fn t_is_typed_into_open_dialog() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|a| *a == Action::UpdateDraftName("t".to_string()))
        .times(1)
        .return_const(());

    let app = App::new(Rc::new(dispatcher));
    let mut state = State::default();
    state.list.open_add_dialog();
    assert!(app.process_event(&key(KeyCode::Char('t')), &ctx(&state)));
}

#[test]
fn q_is_not_handled_on_list() {
    let app = App::new(Rc::new(MockDispatcher::new()));
    let state = State::default();
    assert!(!app.process_event(&key(KeyCode::Char('q')), &ctx(&state)));
}

#[test]
fn full_add_edit_delete_flow() {
    let store = Rc::new(Store::new(State::default(), StoreReducer::boxed()));
    let app = App::new(Rc::clone(&store) as Rc<dyn Dispatcher>);

    let send = |code: KeyCode| {
        let state = store.get_state();
        app.process_event(&key(code), &ctx(&state));
    };

    // add "Milk" 2 pkt
    send(KeyCode::Char('a'));
    for c in "Milk".chars() {
        send(KeyCode::Char(c));
    }
    send(KeyCode::Tab);
    send(KeyCode::Char('2'));
    send(KeyCode::Tab);
    send(KeyCode::Enter);
    send(KeyCode::Down);
    send(KeyCode::Down);
    send(KeyCode::Enter);
    send(KeyCode::Tab);
    send(KeyCode::Enter);

    let state = store.get_state();
    assert_eq!(state.list.len(), 1);
    assert_eq!(state.list.items()[0].quantity_label(), "2pkt");

    // edit to "Bread" 3
    send(KeyCode::Char('e'));
    for _ in 0..4 {
        send(KeyCode::Backspace);
    }
    for c in "Bread".chars() {
        send(KeyCode::Char(c));
    }
    send(KeyCode::Tab);
    send(KeyCode::Backspace);
    send(KeyCode::Char('3'));
    send(KeyCode::Enter);

    let state = store.get_state();
    let item = &state.list.items()[0];
    assert_eq!(item.name, "Bread");
    assert_eq!(item.quantity_label(), "3pkt");
    assert!(!item.is_editing);

    send(KeyCode::Char('d'));
    assert!(store.get_state().list.is_empty());
}

#[test]
fn cycling_theme_updates_state() {
    let store = Rc::new(Store::new(State::default(), StoreReducer::boxed()));
    let app = App::new(Rc::clone(&store) as Rc<dyn Dispatcher>);

    let state = store.get_state();
    app.process_event(&key(KeyCode::Char('t')), &ctx(&state));

    let state = store.get_state();
    assert_eq!(state.theme, Theme::Emerald);
    assert_eq!(state.config.theme, Theme::Emerald.to_string());
}
