use std::time::Duration;

use elementary_ca::config::CELL_SIZE_RANGE;
use elementary_ca::{
    AnimationState, Cell, GridConfig, InitialState, Palette, Rule, Session, Settings, Speed,
};
use macroquad::color::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn settings(rule: u8, width: usize, generations: usize) -> Settings {
    Settings {
        grid: GridConfig {
            rule: Rule::new(rule),
            width,
            generations,
            initial_state: InitialState::Single,
        },
        palette: Palette::default(),
        cell_size: 2,
        speed: Speed::default(),
    }
}

fn session(rule: u8, width: usize, generations: usize) -> Session<StdRng> {
    Session::with_rng(settings(rule, width, generations), StdRng::seed_from_u64(7))
}

fn pixel(session: &Session<StdRng>, x: usize, y: usize) -> [u8; 4] {
    let surface = session.surface();
    surface.get_image_data()[y * surface.width() + x]
}

#[test]
fn test_new_session_shows_full_grid() {
    let session = session(30, 21, 10);

    assert_eq!(session.state(), AnimationState::Idle);
    assert!(!session.has_pending_tick());
    assert_eq!(session.visible_rows(), 10);
    assert_eq!(session.frame(), 1);
    assert_eq!((session.surface().width(), session.surface().height()), (42, 20));

    let alive: [u8; 4] = Palette::default().alive.into();
    let dead: [u8; 4] = Palette::default().dead.into();
    assert_eq!(pixel(&session, 20, 0), alive);
    assert_eq!(pixel(&session, 21, 1), alive);
    assert_eq!(pixel(&session, 0, 0), dead);
}

#[test]
fn test_play_reveals_rows_until_idle() {
    let mut session = session(30, 21, 100);
    session.play();

    // first step happens immediately
    assert_eq!(session.state(), AnimationState::Animating { cursor: 1 });
    assert_eq!(session.visible_rows(), 1);
    assert!(session.has_pending_tick());

    let mut ticks = 0;
    while session.tick() {
        ticks += 1;
        assert!(ticks <= 100, "animation never finished");
    }

    assert_eq!(ticks, 99);
    assert_eq!(session.state(), AnimationState::Idle);
    assert_eq!(session.visible_rows(), 100);
    assert!(!session.has_pending_tick());
}

#[test]
fn test_intermediate_frames_reveal_prefix() {
    let mut session = session(90, 21, 100);
    session.play();
    session.tick();
    session.tick();

    assert_eq!(session.visible_rows(), 3);
    let dead: [u8; 4] = session.palette().dead.into();
    // rule 90 from a single cell keeps row 10 non-empty, yet it is hidden
    assert!(session.grid().row(10).unwrap().contains(&Cell::Alive));
    let width = session.surface().width();
    for x in 0..width {
        assert_eq!(pixel(&session, x, 10 * 2), dead);
    }
}

#[test]
fn test_advance_follows_speed_delay() {
    let mut session = session(30, 21, 100);
    session.set_speed(Speed::new(50));
    session.play();
    assert_eq!(session.visible_rows(), 1);

    session.advance(Duration::from_millis(50));
    assert_eq!(session.visible_rows(), 1);

    session.advance(Duration::from_millis(1));
    assert_eq!(session.visible_rows(), 2);

    // a long frame fires every tick that fell due
    session.advance(Duration::from_millis(51 * 3));
    assert_eq!(session.visible_rows(), 5);
}

#[test]
fn test_fastest_speed_fires_after_one_millisecond() {
    let mut session = session(30, 21, 100);
    session.set_speed(Speed::MAX);
    session.play();

    session.advance(Duration::from_millis(1));
    assert_eq!(session.visible_rows(), 2);
}

#[test]
fn test_speed_change_applies_to_next_schedule() {
    let mut session = session(30, 21, 100);
    session.set_speed(Speed::MIN);
    session.play();

    // pending tick was armed at 100ms; changing speed does not shorten it
    session.set_speed(Speed::MAX);
    session.advance(Duration::from_millis(50));
    assert_eq!(session.visible_rows(), 1);

    session.advance(Duration::from_millis(50));
    assert_eq!(session.visible_rows(), 2);
    session.advance(Duration::from_millis(1));
    assert_eq!(session.visible_rows(), 3);
}

#[test]
fn test_stop_shows_full_grid() {
    let mut session = session(30, 21, 100);
    session.play();
    session.tick();
    session.stop();

    assert_eq!(session.state(), AnimationState::Idle);
    assert!(!session.has_pending_tick());
    assert!(!session.tick());
    assert_eq!(session.visible_rows(), 100);
}

#[test]
fn test_toggle_switches_states() {
    let mut session = session(30, 21, 100);
    session.toggle();
    assert!(session.is_animating());
    session.toggle();
    assert!(!session.is_animating());
    assert_eq!(session.visible_rows(), 100);
}

#[test]
fn test_parameter_change_cancels_animation() {
    let mut session = session(30, 21, 100);
    session.play();
    session.set_rule(Rule::new(90));

    assert_eq!(session.state(), AnimationState::Idle);
    assert!(!session.has_pending_tick());
    assert_eq!(session.visible_rows(), 100);
    assert_eq!(session.grid().get(9, 1), Some(Cell::Alive));
    assert_eq!(session.grid().get(10, 1), Some(Cell::Dead));

    // a stale tick never fires
    session.advance(Duration::from_secs(10));
    assert_eq!(session.state(), AnimationState::Idle);
}

#[test]
fn test_unchanged_config_is_noop() {
    let mut session = session(30, 21, 100);
    let frame = session.frame();
    session.set_config(*session.config());
    assert_eq!(session.frame(), frame);
}

#[test]
fn test_set_width_resizes_surface() {
    let mut session = session(30, 21, 10);
    session.set_width(31);

    assert_eq!(session.grid().dimensions(), (31, 10));
    assert_eq!(session.surface().width(), 62);
    assert_eq!(session.surface().height(), 20);

    session.set_cell_size(4);
    assert_eq!(session.surface().width(), 124);
    assert_eq!(session.visible_rows(), 10);
}

#[test]
fn test_cell_size_is_capped() {
    let mut session = session(30, 401, 300);
    let max = *CELL_SIZE_RANGE.end();

    session.set_cell_size(1000);
    assert_eq!(session.cell_size(), max);
    assert_eq!(session.surface().width(), 401 * max);
    assert_eq!(session.surface().height(), 300 * max);

    session.set_cell_size(0);
    assert_eq!(session.cell_size(), 1);
    assert_eq!(session.surface().width(), 401);
}

#[test]
fn test_settings_are_bounded_on_creation() {
    let mut settings = settings(30, 0, 0);
    settings.cell_size = 500;
    let session = Session::with_rng(settings, StdRng::seed_from_u64(7));

    assert_eq!(session.grid().dimensions(), (1, 1));
    assert_eq!(session.config().width, 1);
    assert_eq!(session.config().generations, 1);
    assert_eq!(session.cell_size(), *CELL_SIZE_RANGE.end());
    assert_eq!(session.grid().get(0, 0), Some(Cell::Alive));
}

#[test]
fn test_color_change_when_idle_rerenders() {
    let mut session = session(30, 21, 10);
    let frame = session.frame();
    let red = Color::from_rgba(255, 0, 0, 255);
    session.set_alive_color(red);

    assert_eq!(session.frame(), frame + 1);
    let red: [u8; 4] = red.into();
    assert_eq!(pixel(&session, 20, 0), red);
}

#[test]
fn test_color_change_while_animating_waits_for_tick() {
    let mut session = session(30, 21, 100);
    session.play();
    let frame = session.frame();
    let red = Color::from_rgba(255, 0, 0, 255);
    session.set_alive_color(red);

    assert_eq!(session.frame(), frame);
    assert!(session.is_animating());

    session.tick();
    let red: [u8; 4] = red.into();
    assert_eq!(pixel(&session, 20, 0), red);
}

#[test]
fn test_random_regenerate_draws_new_row() {
    let mut settings = settings(30, 101, 50);
    settings.grid.initial_state = InitialState::Random;
    let mut session = Session::with_rng(settings, StdRng::seed_from_u64(1));

    let first = session.grid().row(0).unwrap().to_vec();
    session.regenerate();
    let second = session.grid().row(0).unwrap().to_vec();

    assert_ne!(first, second);
    assert_eq!(session.visible_rows(), 50);
}

#[test]
fn test_single_regenerate_is_deterministic() {
    let mut session = session(110, 51, 50);
    let before = session.grid().clone();
    session.regenerate();
    assert_eq!(session.grid(), &before);
}
