// src/main.rs
//
// Quiz Q-pur : binaire egui au-dessus de quiz_qpur::noyau.
// Natif via run_native (journal tracing, RUST_LOG), web via WebRunner
// sur <canvas id="the_canvas_id">.

mod app;

use app::AppQuiz;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Quiz Q-pur";

/* ------------------------ Journal (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG=quiz_qpur=debug pour voir chaque problème généré.
    let filtre =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_qpur=info"));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 460.0]),
        ..Default::default()
    };

    tracing::info!("démarrage de {TITRE_APP}");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppQuiz>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

// wasm32 : démarrage par `web::start` (wasm_bindgen start).
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppQuiz, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Titre de l’onglet, puis le quiz dans le canvas `CANVAS_ID`.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppQuiz>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
