use anyhow::{Context, Result};
use stageboard_core::{
    CardId, ColumnId, Config, FileStore, HitTarget, MemoryStore, Point, PointerDownOutcome,
    PointerEvent, Rect, TaskBoard,
};
use tempfile::TempDir;

const TODO: ColumnId = ColumnId::new(0);
const IN_PROGRESS: ColumnId = ColumnId::new(1);
const DONE: ColumnId = ColumnId::new(2);

fn event(target: HitTarget) -> PointerEvent {
    PointerEvent::new(target, Point::new(120.0, 80.0))
}

/// A board holding `cards`, added in order
async fn seeded(cards: &[(ColumnId, &str)]) -> Result<TaskBoard<MemoryStore>> {
    let mut tb = TaskBoard::new(Config::default(), MemoryStore::new())?;
    for (col, text) in cards {
        tb.add_card(*col, text).await?.context("card text rejected")?;
    }
    Ok(tb)
}

fn texts(tb: &TaskBoard<MemoryStore>, col: ColumnId) -> Vec<String> {
    tb.board()
        .column(col)
        .map(|col| col.cards().map(|card| card.text.clone()).collect())
        .unwrap_or_default()
}

fn card_id(tb: &TaskBoard<MemoryStore>, col: ColumnId, text: &str) -> CardId {
    tb.board()
        .column(col)
        .and_then(|col| col.cards().find(|card| card.text == text))
        .map(|card| card.id.clone())
        .unwrap_or_else(|| panic!("no card {text:?} in {col}"))
}

/// Presses `card`, moves over each of `hovers`, releases over `release`
async fn drag(
    tb: &mut TaskBoard<MemoryStore>,
    card: &CardId,
    hovers: &[HitTarget],
    release: HitTarget,
) -> Result<()> {
    let started = tb
        .on_pointer_down(
            event(HitTarget::Card(card.clone())),
            Rect::new(100.0, 60.0, 200.0, 40.0),
        )
        .await?;
    anyhow::ensure!(
        matches!(started, PointerDownOutcome::DragStarted { .. }),
        "drag did not start: {started:?}"
    );

    for target in hovers {
        tb.on_pointer_move(event(target.clone()));
    }
    tb.on_pointer_up(event(release))
        .await?
        .context("nothing was dropped")?;
    Ok(())
}

#[tokio::test]
async fn e2e_added_card_survives_reload() -> Result<()> {
    let mut tb = TaskBoard::new(Config::default(), MemoryStore::new())?;
    tb.open_add_form(TODO)?;
    tb.set_form_input("Design spec");
    tb.submit_add_form().await?.context("card not added")?;

    let raw = tb.store().raw().context("nothing persisted")?;
    let (reloaded, report) =
        TaskBoard::open(Config::default(), MemoryStore::with_raw(raw)).await?;

    assert!(report.is_clean());
    assert_eq!(texts(&reloaded, TODO), vec!["Design spec"]);
    assert!(texts(&reloaded, IN_PROGRESS).is_empty());
    assert!(texts(&reloaded, DONE).is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_drag_into_empty_column() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B")]).await?;
    let a = card_id(&tb, TODO, "A");

    drag(
        &mut tb,
        &a,
        &[HitTarget::ColumnList(IN_PROGRESS)],
        HitTarget::ColumnList(IN_PROGRESS),
    )
    .await?;

    assert_eq!(texts(&tb, TODO), vec!["B"]);
    assert_eq!(texts(&tb, IN_PROGRESS), vec!["A"]);
    assert_eq!(tb.board().marker_count(), 0);
    Ok(())
}

#[tokio::test]
async fn e2e_reorder_last_card_to_front() -> Result<()> {
    let mut tb = seeded(&[(DONE, "X"), (DONE, "Y"), (DONE, "Z")]).await?;
    let x = card_id(&tb, DONE, "X");
    let z = card_id(&tb, DONE, "Z");

    drag(&mut tb, &z, &[HitTarget::Card(x.clone())], HitTarget::Card(x)).await?;

    assert_eq!(texts(&tb, DONE), vec!["Z", "X", "Y"]);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_is_persisted() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B")]).await?;
    let b = card_id(&tb, TODO, "B");

    let outcome = tb
        .on_pointer_down(event(HitTarget::DeleteControl(b)), Rect::default())
        .await?;

    assert!(matches!(outcome, PointerDownOutcome::CardDeleted(_)));
    assert_eq!(texts(&tb, TODO), vec!["A"]);
    assert_eq!(
        tb.store().raw().as_deref(),
        Some(r#"{"stages":[{"name":"To Do","cards":["A"]},{"name":"In Progress","cards":[]},{"name":"Done","cards":[]}]}"#)
    );
    Ok(())
}

#[tokio::test]
async fn single_marker_during_long_gesture() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B"), (TODO, "C"), (DONE, "X")]).await?;
    let ids = [
        card_id(&tb, TODO, "A"),
        card_id(&tb, TODO, "B"),
        card_id(&tb, TODO, "C"),
        card_id(&tb, DONE, "X"),
    ];

    tb.on_pointer_down(event(HitTarget::Card(ids[1].clone())), Rect::default())
        .await?;
    assert_eq!(tb.board().marker_count(), 1);

    let targets = [
        HitTarget::Card(ids[0].clone()),
        HitTarget::ColumnList(IN_PROGRESS),
        HitTarget::Outside,
        HitTarget::Card(ids[3].clone()),
        HitTarget::Marker,
        HitTarget::Card(ids[2].clone()),
        HitTarget::ColumnList(TODO),
        HitTarget::Card(ids[1].clone()),
        HitTarget::DeleteControl(ids[0].clone()),
    ];
    for (step, target) in targets.iter().cycle().take(200).enumerate() {
        tb.on_pointer_move(event(target.clone()));
        assert_eq!(tb.board().marker_count(), 1, "step {step} over {target:?}");
    }

    tb.on_pointer_up(event(HitTarget::Outside)).await?;
    assert_eq!(tb.board().marker_count(), 0);

    let total: usize = tb.board().columns().iter().map(|col| col.card_count()).sum();
    assert_eq!(total, 4);
    Ok(())
}

#[tokio::test]
async fn drop_lands_at_hovered_index_across_columns() -> Result<()> {
    for i in 0..4 {
        for j in 0..4 {
            let mut tb = seeded(&[
                (TODO, "a0"),
                (TODO, "a1"),
                (TODO, "a2"),
                (TODO, "a3"),
                (DONE, "b0"),
                (DONE, "b1"),
                (DONE, "b2"),
            ])
            .await?;
            let dragged = card_id(&tb, TODO, &format!("a{i}"));
            let last = card_id(&tb, DONE, "b2");
            // Hovering the last card appends the marker; hovering it again
            // steps the marker back in front of it
            let hovers = match j {
                2 => vec![HitTarget::Card(last.clone()), HitTarget::Card(last.clone())],
                3 => vec![HitTarget::Card(last.clone())],
                _ => vec![HitTarget::Card(card_id(&tb, DONE, &format!("b{j}")))],
            };

            drag(&mut tb, &dragged, &hovers, HitTarget::Card(last)).await?;

            let done = texts(&tb, DONE);
            assert_eq!(done[j], format!("a{i}"), "i={i} j={j}");
            assert_eq!(done.len(), 4);

            let todo = texts(&tb, TODO);
            assert_eq!(todo.len(), 3);
            assert!(!todo.contains(&format!("a{i}")));
        }
    }
    Ok(())
}

#[tokio::test]
async fn drop_between_last_two_cards() -> Result<()> {
    let mut tb = seeded(&[(TODO, "Q"), (DONE, "X"), (DONE, "Y")]).await?;
    let q = card_id(&tb, TODO, "Q");
    let y = card_id(&tb, DONE, "Y");

    drag(
        &mut tb,
        &q,
        &[HitTarget::Card(y.clone()), HitTarget::Card(y.clone())],
        HitTarget::Card(y),
    )
    .await?;

    assert_eq!(texts(&tb, DONE), vec!["X", "Q", "Y"]);
    assert!(texts(&tb, TODO).is_empty());
    Ok(())
}

#[tokio::test]
async fn swap_first_two_cards_of_column() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B"), (TODO, "C")]).await?;
    let a = card_id(&tb, TODO, "A");
    let c = card_id(&tb, TODO, "C");

    drag(
        &mut tb,
        &a,
        &[HitTarget::Card(c.clone()), HitTarget::Card(c.clone())],
        HitTarget::Card(c),
    )
    .await?;

    assert_eq!(texts(&tb, TODO), vec!["B", "A", "C"]);
    Ok(())
}

#[tokio::test]
async fn drop_lands_at_hovered_index_within_column() -> Result<()> {
    for j in 0..3 {
        let mut tb = seeded(&[(TODO, "a0"), (TODO, "a1"), (TODO, "a2"), (TODO, "a3")]).await?;
        let dragged = card_id(&tb, TODO, "a3");
        let over = card_id(&tb, TODO, &format!("a{j}"));

        drag(&mut tb, &dragged, &[HitTarget::Card(over.clone())], HitTarget::Card(over)).await?;

        let todo = texts(&tb, TODO);
        assert_eq!(todo[j], "a3", "j={j}");
        assert_eq!(todo.len(), 4);
    }
    Ok(())
}

#[tokio::test]
async fn hovering_last_card_drops_after_it() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B"), (TODO, "C")]).await?;
    let a = card_id(&tb, TODO, "A");
    let c = card_id(&tb, TODO, "C");

    drag(&mut tb, &a, &[HitTarget::Card(c.clone())], HitTarget::Card(c)).await?;

    assert_eq!(texts(&tb, TODO), vec!["B", "C", "A"]);
    Ok(())
}

#[tokio::test]
async fn empty_column_drop_from_any_source() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (DONE, "X"), (DONE, "Y")]).await?;
    let y = card_id(&tb, DONE, "Y");
    let a = card_id(&tb, TODO, "A");

    drag(
        &mut tb,
        &y,
        &[HitTarget::ColumnList(IN_PROGRESS)],
        HitTarget::Card(a),
    )
    .await?;

    assert_eq!(texts(&tb, IN_PROGRESS), vec!["Y"]);
    assert_eq!(texts(&tb, DONE), vec!["X"]);
    assert_eq!(texts(&tb, TODO), vec!["A"]);
    Ok(())
}

#[tokio::test]
async fn release_outside_board_commits_last_marker_slot() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B")]).await?;
    let b = card_id(&tb, TODO, "B");

    drag(
        &mut tb,
        &b,
        &[HitTarget::ColumnList(DONE), HitTarget::Outside],
        HitTarget::Outside,
    )
    .await?;

    assert_eq!(texts(&tb, TODO), vec!["A"]);
    assert_eq!(texts(&tb, DONE), vec!["B"]);
    Ok(())
}

#[tokio::test]
async fn release_without_moving_keeps_order() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A"), (TODO, "B"), (TODO, "C")]).await?;
    let b = card_id(&tb, TODO, "B");

    drag(&mut tb, &b, &[], HitTarget::Card(b.clone())).await?;

    assert_eq!(texts(&tb, TODO), vec!["A", "B", "C"]);
    Ok(())
}

#[tokio::test]
async fn snapshot_round_trip_into_fresh_board() -> Result<()> {
    let tb = seeded(&[
        (TODO, "Write docs"),
        (TODO, "Fix login"),
        (IN_PROGRESS, "Review PR"),
        (DONE, "Release 0.1"),
        (DONE, "Tag"),
        (DONE, "Announce"),
    ])
    .await?;

    let raw = tb.store().raw().context("nothing persisted")?;
    let (fresh, report) =
        TaskBoard::open(Config::default(), MemoryStore::with_raw(raw)).await?;

    assert_eq!(report.restored_cards, 6);
    assert_eq!(fresh.board().snapshot(), tb.board().snapshot());
    Ok(())
}

#[tokio::test]
async fn discard_without_form_is_noop() -> Result<()> {
    let mut tb = seeded(&[(TODO, "A")]).await?;
    let saves = tb.store().save_count();

    tb.discard_add_form();
    tb.discard_add_form();

    assert_eq!(tb.form().active_column(), None);
    assert_eq!(tb.store().save_count(), saves);
    assert_eq!(texts(&tb, TODO), vec!["A"]);
    Ok(())
}

#[tokio::test]
async fn every_structural_change_is_flushed() -> Result<()> {
    let mut tb = TaskBoard::new(Config::default(), MemoryStore::new())?;

    let a = tb.add_card(TODO, "A").await?.context("add")?;
    assert_eq!(tb.store().save_count(), 1);

    tb.add_card(TODO, "B").await?;
    assert_eq!(tb.store().save_count(), 2);

    drag(&mut tb, &a, &[HitTarget::ColumnList(DONE)], HitTarget::Outside).await?;
    assert_eq!(tb.store().save_count(), 3);

    tb.delete_card(&a).await?;
    assert_eq!(tb.store().save_count(), 4);
    Ok(())
}

#[tokio::test]
async fn unmatched_stage_is_reported_not_fatal() -> Result<()> {
    let raw = r#"{"stages":[{"name":"To","cards":["lost"]},{"name":"Done","cards":["kept"]}]}"#;
    let (tb, report) = TaskBoard::open(Config::default(), MemoryStore::with_raw(raw)).await?;

    assert_eq!(report.unmatched_stages, vec!["To"]);
    assert!(texts(&tb, TODO).is_empty());
    assert_eq!(texts(&tb, DONE), vec!["kept"]);
    Ok(())
}

#[tokio::test]
async fn file_store_reload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileStore::new(temp_dir.path());
    let config = store.load_config().await?;

    let (mut tb, report) = TaskBoard::open(config.clone(), store).await?;
    assert!(report.is_clean());
    assert!(temp_dir.path().join(".stageboard").is_dir());
    tb.add_card(TODO, "A").await?;
    tb.add_card(TODO, "B").await?;

    let (reloaded, _) = TaskBoard::open(config, FileStore::new(temp_dir.path())).await?;
    let names: Vec<&str> = reloaded
        .board()
        .column(TODO)
        .map(|col| col.card_texts())
        .unwrap_or_default();
    assert_eq!(names, vec!["A", "B"]);
    Ok(())
}
