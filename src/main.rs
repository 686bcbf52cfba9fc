use std::process;
use std::time::Duration;

use clap::Parser;
use elementary_ca::{
    Args, Camera, InitialState, Session, input, presets,
    rendering::{self, render_rule_table, rule_table_size},
    ui::{self, Dropdown, RULE_ICON_CELL},
};
use log::{error, info};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Elementary Cellular Automata".to_owned(),
        window_width: 1100,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Upload a CPU image as a pixel-exact texture
fn upload(image: &Image) -> Texture2D {
    let texture = Texture2D::from_image(image);
    texture.set_filter(FilterMode::Nearest);
    texture
}

fn rule_strip(session: &Session) -> Texture2D {
    let (w, h) = rule_table_size(RULE_ICON_CELL);
    let mut image = Image::gen_image_color(w as u16, h as u16, BLANK);
    let palette = session.palette();
    render_rule_table(
        &mut image,
        &session.config().rule.transition_table(),
        RULE_ICON_CELL,
        palette.alive,
        palette.dead,
        Color::from_rgba(55, 65, 81, 255),
    );
    upload(&image)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(err) => {
            error!("{err}");
            process::exit(2);
        }
    };

    let mut session = Session::new(settings);
    let mut camera = Camera::new();
    if args.play {
        session.play();
    }
    info!("starting with {}", session.config().rule);

    // Dropdowns - simple vertical stack at top of the panel
    let px = ui::panel_x();
    let preset_items = presets::all_presets().iter().map(|p| p.label()).collect();
    let mut preset_dropdown =
        Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Preset", preset_items).with_placeholder("Custom");

    let initial_items = InitialState::all().iter().map(|s| s.name().to_string()).collect();
    let mut initial_dropdown = Dropdown::new(px, 80.0, ui::PANEL_WIDTH, "Initial row", initial_items);

    let palettes = ui::palettes();
    let palette_items = palettes.iter().map(|(name, _)| name.to_string()).collect();
    let mut palette_dropdown = Dropdown::new(px, 140.0, ui::PANEL_WIDTH, "Colors", palette_items);
    palette_dropdown.set_selected(palettes.iter().position(|(_, p)| *p == session.palette()));

    let mut texture = upload(session.surface());
    let mut strip = rule_strip(&session);
    let mut uploaded_frame = session.frame();
    let mut strip_key = (session.config().rule, session.palette());

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        preset_dropdown.set_position(px, 20.0);
        initial_dropdown.set_position(px, 80.0);
        palette_dropdown.set_position(px, 140.0);

        // Keep the selectors in step with keyboard changes
        preset_dropdown.set_selected(presets::find(session.config().rule));
        initial_dropdown.set_selected(
            InitialState::all()
                .iter()
                .position(|s| *s == session.config().initial_state),
        );

        let buttons = ui::create_buttons(session.is_animating(), session.config().initial_state);

        // An open menu swallows the click, buttons included
        let menu_open = preset_dropdown.is_open() || initial_dropdown.is_open() || palette_dropdown.is_open();

        if is_mouse_button_pressed(MouseButton::Left) {
            let mut dropdowns = [&mut preset_dropdown, &mut initial_dropdown, &mut palette_dropdown];
            match ui::click_dropdowns(&mut dropdowns, mouse_pos) {
                Some((0, i)) => session.set_rule(presets::PRESETS[i].rule),
                Some((1, i)) => session.set_initial_state(InitialState::all()[i]),
                Some((2, i)) => session.set_palette(palettes[i].1),
                _ => {}
            }
        }

        if !menu_open {
            input::process_button_clicks(&mut session, &buttons, mouse_pos);
        }
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);
        input::process_keyboard_input(&mut session, &mut camera);

        session.advance(Duration::from_secs_f32(get_frame_time()));

        if session.frame() != uploaded_frame {
            texture = upload(session.surface());
            uploaded_frame = session.frame();
        }
        if strip_key != (session.config().rule, session.palette()) {
            strip = rule_strip(&session);
            strip_key = (session.config().rule, session.palette());
        }

        let hovered = input::canvas_pointer(mouse_pos).and_then(|pos| {
            camera.screen_to_cell(
                pos,
                ui::canvas_origin(),
                session.cell_size(),
                session.grid().dimensions(),
            )
        });

        clear_background(BLACK);
        rendering::draw_canvas(&texture, &camera);
        rendering::draw_rule_strip(&strip, &session.config().rule.to_string(), ui::MARGIN, ui::MARGIN);
        rendering::draw_controls(
            &session,
            hovered,
            &buttons,
            &[&preset_dropdown, &initial_dropdown, &palette_dropdown],
            mouse_pos,
        );

        next_frame().await;
    }
}
