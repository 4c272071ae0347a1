//! Browser adapter for the Pong core
//!
//! The page owns the canvas and the `requestAnimationFrame` loop. Each
//! callback calls [`PongClient::frame`], which renders through a JS callback
//! and reports whether another frame should be requested.

mod input;

use game_core::{
    animate, Config, ConfigError, FrameHost, FrameOutcome, FrameSnapshot, GameMode, Opponent, Score, Session,
    SessionPhase, Side, SpeedProfile,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;
    log::info!("Pong client loaded");
    Ok(())
}

/// Headline shown on the game-over screen
pub fn winner_label(mode: GameMode, winner: Side) -> &'static str {
    match (mode.opponent, winner) {
        (Opponent::Computer, Side::Left) => "Computer",
        (Opponent::Computer, Side::Right) => "Player",
        (Opponent::Human, Side::Left) => "Player 1",
        (Opponent::Human, Side::Right) => "Player 2",
    }
}

fn parse_mode(mode: &str) -> Result<GameMode, JsValue> {
    GameMode::from_name(mode)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown game mode: {}", mode)))
}

/// Speeds follow the screen size; a JSON document overrides individual fields
fn build_config(screen_width: u32, config_json: Option<&str>) -> Result<Config, ConfigError> {
    let profile = SpeedProfile::for_screen_width(screen_width);
    match config_json {
        Some(json) => Config::from_json_with_profile(json, profile),
        None => Ok(Config::with_profile(profile)),
    }
}

/// Forwards frame-driver calls to page callbacks
struct JsHost {
    render: Function,
    on_game_over: Function,
    mode: GameMode,
    frame_requested: bool,
}

impl FrameHost for JsHost {
    fn render(&mut self, frame: &FrameSnapshot) {
        let json = match serde_json::to_string(frame) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize frame: {}", e);
                return;
            }
        };
        if let Err(e) = self.render.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
            log::warn!("Render callback failed: {:?}", e);
        }
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn game_over(&mut self, winner: Side, score: Score) {
        let label = JsValue::from_str(winner_label(self.mode, winner));
        let result = self.on_game_over.call3(
            &JsValue::NULL,
            &label,
            &JsValue::from(score.left),
            &JsValue::from(score.right),
        );
        if let Err(e) = result {
            log::warn!("Game over callback failed: {:?}", e);
        }
    }
}

#[wasm_bindgen]
pub struct PongClient {
    session: Session,
    host: JsHost,
}

#[wasm_bindgen]
impl PongClient {
    /// `mode` is `"single"`, `"mouse"` or `"multi"`; `screen_width` picks the
    /// speed profile; `config_json` optionally overrides the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        mode: &str,
        screen_width: u32,
        render: Function,
        on_game_over: Function,
        config_json: Option<String>,
    ) -> Result<PongClient, JsValue> {
        let mode = parse_mode(mode)?;
        let config = build_config(screen_width, config_json.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let session =
            Session::new(config, mode).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            session,
            host: JsHost {
                render,
                on_game_over,
                mode,
                frame_requested: false,
            },
        })
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    /// Run one frame; true when the page should request another
    pub fn frame(&mut self) -> bool {
        self.host.frame_requested = false;
        let outcome = animate(&mut self.session, &mut self.host);
        matches!(outcome, FrameOutcome::Scheduled) && self.host.frame_requested
    }

    /// Toggle the settings pause; true when the loop should be restarted
    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause() == SessionPhase::Running
    }

    pub fn reset(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = parse_mode(mode)?;
        self.session.reset(mode);
        self.host.mode = mode;
        Ok(())
    }

    /// True when the key is bound (the page should prevent the default action)
    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        input::key_from_event(event).is_some_and(|key| self.session.key_down(key))
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
        input::key_from_event(event).is_some_and(|key| self.session.key_up(key))
    }

    /// Pointer moved over the canvas; `canvas_top` is the canvas offset in the viewport
    pub fn pointer_move(&mut self, client_y: f32, canvas_top: f32) -> bool {
        self.session
            .pointer_moved(input::pointer_to_playfield(client_y, canvas_top))
    }

    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u8 {
        self.session.score().left
    }

    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u8 {
        self.session.score().right
    }

    #[wasm_bindgen(getter)]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[wasm_bindgen(getter)]
    pub fn winner(&self) -> Option<String> {
        self.session
            .winner()
            .map(|side| winner_label(self.session.mode(), side).to_string())
    }

    /// Current frame as JSON, for drawing the first frame before `start`
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
