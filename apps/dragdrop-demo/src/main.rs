mod fruit_column;

use anyhow::{bail, Context};
use dragdrop_foundation::{
    CancelPolicy, DragDropConfig, DragDropListState, LazyListLayoutSource, PointerEvent,
};
use dragdrop_ui_graphics::{Dp, Point};
use web_time::{Duration, Instant};

use fruit_column::FruitColumn;

const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "kiwi",
    "lemon",
    "mango",
    "orange",
    "papaya",
    "quince",
    "raspberry",
    "strawberry",
    "tangerine",
    "watermelon",
];

const DENSITY: f32 = 2.0;
const CARD_HEIGHT: Dp = Dp(64.0);
const CARD_SPACING: Dp = Dp(10.0);
const VIEWPORT_HEIGHT: Dp = Dp(480.0);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let column = FruitColumn::new(
        FRUITS,
        CARD_HEIGHT.to_px(DENSITY),
        CARD_SPACING.to_px(DENSITY),
        VIEWPORT_HEIGHT.to_px(DENSITY),
    );
    let config = DragDropConfig::default()
        .cancel_policy(CancelPolicy::RollBack)
        .max_auto_scroll_step(Dp(24.0).to_px(DENSITY));

    let sink = column.clone();
    let mut state = DragDropListState::with_config(column.clone(), config, move |from, to| {
        log::info!("move {from} -> {to}");
        sink.move_item(from, to);
    })
    .context("invalid drag-and-drop configuration")?
    .with_on_drag_finished(|| log::info!("drag finished; persist the new order here"));

    log::info!("initial order: {}", column.fruits().join(", "));
    let row = column.row_size();

    // Carry the second card down past six rows with plain drag deltas; the
    // bottom edge is crossed on the way, so the list auto-scrolls.
    let grab = Point::new(20.0, row + row / 2.0);
    if !state.on_drag_start(grab) {
        bail!("no card under {grab:?}");
    }
    for _ in 0..60 {
        state.on_drag(Point::new(0.0, row / 10.0));
    }
    state.on_drag_end();
    log::info!("scroll offset after drag: {:.1}px", column.scroll_offset());
    log::info!("order after drag: {}", column.fruits().join(", "));

    // Long-press a visible card with raw pointer events, drag it a row and a
    // half down and cancel; the rollback policy puts it back.
    let before_cancel = column.fruits();
    let layout = state.list().layout_info();
    let Some(card) = layout.visible_items_info.get(1) else {
        bail!("fewer than two cards visible");
    };
    let press = Point::new(20.0, card.offset + card.size / 2.0);
    let lifted = press + Point::new(0.0, row * 1.5);
    let t0 = Instant::now();
    let held = t0 + state.controller().config().long_press_timeout;

    state.handle_pointer_event(&PointerEvent::down(press, t0));
    state.poll(held);
    state.handle_pointer_event(&PointerEvent::moved(lifted, held + FRAME));
    log::info!("order while dragging: {}", column.fruits().join(", "));
    state.handle_pointer_event(&PointerEvent::cancel(lifted, held + FRAME * 2));

    if column.fruits() != before_cancel {
        bail!("cancelled drag left the list reordered");
    }
    log::info!("order after cancelled drag: {}", column.fruits().join(", "));
    Ok(())
}
