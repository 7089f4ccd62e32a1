/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 Editora Prelo
*/

mod common;
use common::*;

use prelo_board::{
    BoardState, ChangeEvent, ChangeFeed, Column, DragGesture, DragReorderController,
    InMemoryFeed, Reconciler,
};

fn loaded_board() -> BoardState {
    let mut state = BoardState::new();
    state.load(vec![
        card("a1", "Gramática Viva", Column::AwaitingShipment),
        card("p1", "O Livro", Column::AtPrinter),
    ]);
    state
}

#[test]
fn insert_echo_for_a_known_id_is_a_noop() {
    let mut state = loaded_board();
    let before = state.clone();
    let reconciler = Reconciler::new();

    reconciler.apply(
        &mut state,
        ChangeEvent::Insert(row("p1", "O Livro", Column::AtPrinter)),
    );
    assert_eq!(state, before);
}

#[test]
fn insert_for_a_new_id_lands_in_awaiting_shipment() {
    let mut state = loaded_board();
    let reconciler = Reconciler::new();

    // The feed's insert carries whatever the server row says, but a
    // freshly created card always starts in the awaiting column.
    reconciler.apply(
        &mut state,
        ChangeEvent::Insert(row("n1", "Novo Título", Column::AwaitingShipment)),
    );
    let awaiting = state.column(Column::AwaitingShipment);
    assert_eq!(awaiting.last().unwrap().id, "n1");
    assert_eq!(state.card("n1").unwrap().status, Column::AwaitingShipment);
}

#[test]
fn update_rehomes_the_card_to_its_status_column() {
    let mut state = loaded_board();
    let reconciler = Reconciler::new();

    reconciler.apply(
        &mut state,
        ChangeEvent::Update(row("p1", "O Livro", Column::ArrivedAtPublisher)),
    );
    assert!(state.column(Column::AtPrinter).is_empty());
    let (column, _) = state.find_card("p1").unwrap();
    assert_eq!(column, Column::ArrivedAtPublisher);
}

#[test]
fn update_in_the_same_column_replaces_in_place() {
    let mut state = BoardState::new();
    state.load(vec![
        card("p1", "O Livro", Column::AtPrinter),
        card("p2", "Mar Aberto", Column::AtPrinter),
    ]);
    let reconciler = Reconciler::new();

    let mut updated = row("p1", "O Livro (2. tiragem)", Column::AtPrinter);
    updated.quantidade_prevista = Some(5000);
    reconciler.apply(&mut state, ChangeEvent::Update(updated));

    let printer = state.column(Column::AtPrinter);
    assert_eq!(printer[0].id, "p1");
    assert_eq!(printer[0].title, "O Livro (2. tiragem)");
    assert_eq!(printer[0].expected_quantity, Some(5000));
    assert_eq!(printer[1].id, "p2");
}

#[test]
fn update_and_delete_for_unknown_ids_are_noops() {
    let mut state = loaded_board();
    let before = state.clone();
    let reconciler = Reconciler::new();

    reconciler.apply(
        &mut state,
        ChangeEvent::Update(row("ghost", "Fantasma", Column::Completed)),
    );
    reconciler.apply(
        &mut state,
        ChangeEvent::Delete {
            id: "ghost".to_string(),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn delete_removes_from_whichever_column_holds_the_card() {
    let mut state = loaded_board();
    let reconciler = Reconciler::new();

    reconciler.apply(
        &mut state,
        ChangeEvent::Delete {
            id: "a1".to_string(),
        },
    );
    assert_eq!(state.card_count(), 1);
    assert!(state.find_card("a1").is_none());
}

#[test]
fn drain_applies_events_in_delivery_order() {
    let mut state = loaded_board();
    let reconciler = Reconciler::new();
    let mut feed = InMemoryFeed::new();

    feed.push(ChangeEvent::Insert(row(
        "n1",
        "Novo Título",
        Column::AwaitingShipment,
    )));
    feed.push(ChangeEvent::Update(row(
        "n1",
        "Novo Título",
        Column::AtPrinter,
    )));
    feed.push(ChangeEvent::Delete {
        id: "a1".to_string(),
    });

    let applied = reconciler.drain(&mut state, &mut feed);
    assert_eq!(applied, 3);
    let (column, _) = state.find_card("n1").unwrap();
    assert_eq!(column, Column::AtPrinter);
    assert!(state.find_card("a1").is_none());
}

#[test]
fn unsubscribed_feed_delivers_nothing() {
    let mut feed = InMemoryFeed::new();
    feed.push(ChangeEvent::Delete {
        id: "a1".to_string(),
    });
    feed.unsubscribe();
    assert!(feed.next_event().is_none());
}

#[test]
fn delayed_feed_event_overwrites_a_newer_local_edit() {
    // Last-applied-event-wins: a stale update arriving after a local
    // move drags the card back. Accepted weak-consistency tradeoff.
    let mut state = loaded_board();
    let reconciler = Reconciler::new();
    let mut controller = DragReorderController::new();

    let gesture = DragGesture {
        card_id: "p1".to_string(),
        from: Column::AtPrinter,
        from_index: 0,
        to: Column::Completed,
        to_index: 0,
    };
    let patch = controller
        .apply_drag(&mut state, &gesture)
        .unwrap()
        .unwrap();
    controller.confirm(patch.token);

    reconciler.apply(
        &mut state,
        ChangeEvent::Update(row("p1", "O Livro", Column::AtPrinter)),
    );
    let (column, _) = state.find_card("p1").unwrap();
    assert_eq!(column, Column::AtPrinter);
}

#[test]
fn change_events_round_trip_through_json() {
    let event = ChangeEvent::Update(row("p1", "O Livro", Column::AtPrinter));
    let json = serde_json::to_string(&event).unwrap();
    let back: ChangeEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
