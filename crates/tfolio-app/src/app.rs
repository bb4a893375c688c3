//! The portfolio page model: one state machine wiring theme, navigation,
//! language selection, scrolling, and the typewriter together.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use tfolio_core::{KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseEvent, MouseEventKind, Rect};
use tfolio_i18n::{Dictionary, LoadError, Loader};
use tfolio_render::{Cell, Frame};
use tfolio_runtime::{Cmd, Every, Model, Subscription};
use tfolio_style::{Theme, ThemeMode};
use tfolio_widgets::particles::PARTICLE_COUNT;
use tfolio_widgets::{LangMenu, LangOption, NavMenu, ParticleField, Typewriter};

use crate::config::AppConfig;
use crate::msg::Msg;
use crate::page::Page;
use crate::panels::footer::{self, FOOTER_HEIGHT};
use crate::panels::header::{self, HEADER_HEIGHT};
use crate::panels::content;
use crate::scroll::{Scroller, active_section, reveal_visible};
use crate::store::{PrefStore, Preferences};

/// Cadence of the shared UI tick (particles, scroll easing, observers).
const UI_TICK: Duration = Duration::from_millis(50);

pub struct PortfolioApp {
    loader: Loader,
    store: PrefStore,
    theme: Theme,
    page: Page,
    nav: NavMenu,
    lang_menu: LangMenu,
    typewriter: Typewriter,
    particles: ParticleField,
    scroller: Scroller,
    width: u16,
    height: u16,
    /// Sequence of the most recent language load request; completions
    /// carrying an older sequence are discarded.
    load_seq: u64,
}

impl PortfolioApp {
    /// Build the app and run the startup load-and-apply cycle. The first
    /// load happens here, before the program loop starts, so the page
    /// never renders untranslated when a dictionary is available.
    pub fn new(config: AppConfig) -> Self {
        let store = PrefStore::new(&config.prefs_path);
        let prefs = store.load();
        let theme = Theme::for_mode(ThemeMode::from_str_lossy(&prefs.theme));
        let loader = Loader::new(&config.content_root);

        let mut page = Page::new();
        let mut lang_menu = LangMenu::new(vec![
            LangOption::new("pt", "Português"),
            LangOption::new("en", "English"),
        ]);

        let code = prefs.language.clone();
        match loader.load(&code) {
            Ok(dict) => {
                page.apply(&dict);
                page.language = code.clone();
                lang_menu.set_active_code(&code);
                let effective = Preferences {
                    theme: theme.mode.as_str().to_string(),
                    language: code.clone(),
                };
                if let Err(err) = store.save(&effective) {
                    warn!(%err, "could not persist preferences");
                }
                info!(code, "initial language applied");
            }
            Err(err) => {
                // Fallback content stays; the page is stale but consistent.
                error!(error = %err, "initial language load failed");
            }
        }

        let typewriter = Typewriter::start(page.role_source());
        let nav = NavMenu::new(page.nav_labels());
        let particles = ParticleField::new(PARTICLE_COUNT, &mut rand::rng());

        Self {
            loader,
            store,
            theme,
            page,
            nav,
            lang_menu,
            typewriter,
            particles,
            scroller: Scroller::new(),
            width: 0,
            height: 0,
            load_seq: 0,
        }
    }

    fn content_height(&self) -> u16 {
        self.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
    }

    fn max_offset(&self) -> u16 {
        self.page
            .total_height()
            .saturating_sub(self.content_height())
    }

    fn screen_rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn persist_prefs(&self) {
        let prefs = Preferences {
            theme: self.theme.mode.as_str().to_string(),
            language: self.page.language.clone(),
        };
        if let Err(err) = self.store.save(&prefs) {
            warn!(%err, "could not persist preferences");
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = Theme::for_mode(self.theme.mode.toggled());
        debug!(mode = self.theme.mode.as_str(), "theme toggled");
        self.persist_prefs();
    }

    /// Kick off an asynchronous load for `code`. The dropdown closes
    /// immediately; everything else waits for the confirmed result.
    fn select_language(&mut self, code: String) -> Cmd<Msg> {
        self.lang_menu.close();
        self.load_seq += 1;
        let seq = self.load_seq;
        let loader = self.loader.clone();
        info!(code, seq, "language selected");
        Cmd::task(move || {
            let result = loader.load(&code);
            Msg::LanguageLoaded { seq, code, result }
        })
    }

    /// Restart the typing animation from the page's current role-list
    /// text. Scheduling through the tick slot discards any pending chain.
    fn restart_typewriter(&mut self) -> Cmd<Msg> {
        self.typewriter = Typewriter::start(self.page.role_source());
        match self.typewriter.first_delay() {
            Some(delay) => Cmd::tick(delay, Msg::TypeTick),
            None => Cmd::none(),
        }
    }

    fn language_loaded(
        &mut self,
        seq: u64,
        code: String,
        result: Result<Dictionary, LoadError>,
    ) -> Cmd<Msg> {
        if seq != self.load_seq {
            debug!(seq, latest = self.load_seq, "stale language load discarded");
            return Cmd::none();
        }
        match result {
            Ok(dict) => {
                self.page.apply(&dict);
                self.page.language = code.clone();
                self.lang_menu.set_active_code(&code);
                self.nav.set_labels(self.page.nav_labels());
                self.persist_prefs();
                info!(code, "language applied");
                self.restart_typewriter()
            }
            Err(err) => {
                // The previous translation (and its active marker and
                // persisted preference) stay in place.
                error!(error = %err, code = err.code(), "language load failed");
                Cmd::none()
            }
        }
    }

    fn jump_to_section(&mut self, index: usize) {
        if index < self.page.sections.len() {
            let top = self.page.section_top(index);
            self.scroller.scroll_to(top, self.max_offset());
            self.nav.close();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.kind != KeyEventKind::Press {
            return Cmd::none();
        }
        match key.code {
            KeyCode::Char('q') if !key.modifiers.contains(Modifiers::CTRL) => Cmd::quit(),
            KeyCode::Char('c') | KeyCode::Char('C')
                if key.modifiers.contains(Modifiers::CTRL) =>
            {
                Cmd::quit()
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                Cmd::none()
            }
            KeyCode::Char('m') => {
                self.nav.toggle();
                Cmd::none()
            }
            KeyCode::Char('l') => {
                self.lang_menu.toggle();
                Cmd::none()
            }
            KeyCode::Esc => {
                self.nav.close();
                self.lang_menu.close();
                Cmd::none()
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroller.scroll_by(1, self.max_offset());
                Cmd::none()
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroller.scroll_by(-1, self.max_offset());
                Cmd::none()
            }
            KeyCode::PageDown => {
                self.scroller
                    .scroll_by(i32::from(self.content_height()), self.max_offset());
                Cmd::none()
            }
            KeyCode::PageUp => {
                self.scroller
                    .scroll_by(-i32::from(self.content_height()), self.max_offset());
                Cmd::none()
            }
            KeyCode::Home => {
                self.scroller.scroll_to(0, self.max_offset());
                Cmd::none()
            }
            KeyCode::End => {
                let max = self.max_offset();
                self.scroller.scroll_by(i32::from(max), max);
                Cmd::none()
            }
            KeyCode::Char(d @ '1'..='9') => {
                let index = d as usize - '1' as usize;
                if self.lang_menu.is_open() {
                    if let Some(option) = self.lang_menu.options().get(index) {
                        let code = option.code.clone();
                        return self.select_language(code);
                    }
                } else {
                    self.jump_to_section(index);
                }
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Cmd<Msg> {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroller.scroll_by(2, self.max_offset());
                return Cmd::none();
            }
            MouseEventKind::ScrollUp => {
                self.scroller.scroll_by(-2, self.max_offset());
                return Cmd::none();
            }
            _ => {}
        }
        if !mouse.is_left_down() {
            return Cmd::none();
        }

        let controls = header::layout(self.width);
        let screen = self.screen_rect();
        let (x, y) = (mouse.x, mouse.y);

        if controls.theme_btn.contains(x, y) {
            self.toggle_theme();
            return Cmd::none();
        }
        if controls.lang_btn.contains(x, y) {
            self.lang_menu.toggle();
            return Cmd::none();
        }
        if controls.menu_btn.contains(x, y) {
            self.nav.toggle();
            return Cmd::none();
        }
        if let Some(index) = self.lang_menu.hit_option(controls.lang_btn, x, y) {
            let code = self.lang_menu.options()[index].code.clone();
            return self.select_language(code);
        }
        if let Some(index) = self.nav.hit_link(screen, x, y) {
            self.jump_to_section(index);
            return Cmd::none();
        }

        // A click anywhere else closes whatever is open.
        if self.nav.is_open() && !self.nav.contains(screen, x, y) {
            self.nav.close();
        }
        if self.lang_menu.is_open() && !self.lang_menu.contains(controls.lang_btn, x, y) {
            self.lang_menu.close();
        }
        Cmd::none()
    }

    fn ui_tick(&mut self) -> Cmd<Msg> {
        self.particles.advance();
        self.scroller.tick();
        let offset = self.scroller.offset_rows();
        let viewport = self.content_height();
        reveal_visible(&mut self.page, offset, viewport);
        self.nav
            .set_active(active_section(&self.page, offset, viewport));
        Cmd::none()
    }
}

impl Model for PortfolioApp {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        // First tick of the typewriter chain; inert when there are no roles.
        match self.typewriter.first_delay() {
            Some(delay) => Cmd::tick(delay, Msg::TypeTick),
            None => Cmd::none(),
        }
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Mouse(mouse) => self.handle_mouse(mouse),
            Msg::Resize { width, height } => {
                self.width = width;
                self.height = height;
                Cmd::none()
            }
            Msg::TypeTick => match self.typewriter.tick() {
                Some(delay) => Cmd::tick(delay, Msg::TypeTick),
                None => Cmd::none(),
            },
            Msg::UiTick => self.ui_tick(),
            Msg::LanguageLoaded { seq, code, result } => self.language_loaded(seq, code, result),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        frame
            .buffer
            .fill(area, Cell::blank(self.theme.text_style()));
        self.particles.render(area, frame, &self.theme);

        let content_area = Rect::new(
            0,
            HEADER_HEIGHT,
            area.width,
            area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT),
        );
        content::render(
            frame,
            content_area,
            &self.page,
            &self.typewriter.text(),
            self.scroller.offset_rows(),
            &self.theme,
        );

        header::render(
            frame,
            &self.theme,
            &self.page.language,
            &self.nav,
            &self.lang_menu,
        );
        footer::render(frame, &self.theme);

        // Overlays paint over content.
        self.nav.render(area, frame, &self.theme);
        self.lang_menu
            .render(header::layout(area.width).lang_btn, frame, &self.theme);
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        vec![Box::new(Every::new(UI_TICK, || Msg::UiTick))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tfolio_core::Event;

    fn fixture(languages: &[(&str, &str)]) -> (tempfile::TempDir, AppConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("languages")).unwrap();
        for (code, body) in languages {
            fs::write(
                dir.path().join("languages").join(format!("{code}.json")),
                body,
            )
            .unwrap();
        }
        let config = AppConfig {
            content_root: dir.path().to_path_buf(),
            prefs_path: dir.path().join("prefs.json"),
        };
        (dir, config)
    }

    fn sized(mut app: PortfolioApp) -> PortfolioApp {
        app.update(Msg::from(Event::Resize {
            width: 80,
            height: 24,
        }));
        app
    }

    const PT: &str = r#"{
        "hero-greeting": "Olá, eu sou",
        "role-list": "Engenheiro, Escritor",
        "profile-title": "Perfil"
    }"#;
    const EN: &str = r#"{
        "hero-greeting": "Hi, I am",
        "role-list": "Engineer, Writer",
        "profile-title": "Profile"
    }"#;

    #[test]
    fn startup_defaults_to_pt_and_persists_it() {
        let (_dir, config) = fixture(&[("pt", PT), ("en", EN)]);
        let store = PrefStore::new(&config.prefs_path);
        assert!(!config.prefs_path.exists());

        let app = PortfolioApp::new(config.clone());
        assert_eq!(app.page.language, "pt");
        assert_eq!(app.lang_menu.active_code(), Some("pt"));
        // Scenario: absent preference is persisted after the first load.
        assert_eq!(store.load().language, "pt");
    }

    #[test]
    fn startup_with_missing_dictionary_keeps_fallback_content() {
        let (_dir, config) = fixture(&[]);
        let app = PortfolioApp::new(config);
        // Fallback text, no active marker, nothing persisted as confirmed.
        assert!(app.page.role_source().contains("Engenheiro"));
        assert_eq!(app.lang_menu.active_code(), None);
    }

    #[test]
    fn init_schedules_the_first_typing_tick() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = PortfolioApp::new(config);
        assert!(matches!(app.init(), Cmd::Tick(_, Msg::TypeTick)));
    }

    #[test]
    fn typing_ticks_chain_until_roles_exist() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        // 21 ticks: "Engenheiro" types (10), holds, deletes (10), and the
        // second role starts typing.
        for _ in 0..21 {
            assert!(matches!(
                app.update(Msg::TypeTick),
                Cmd::Tick(_, Msg::TypeTick)
            ));
        }
        assert_eq!(app.typewriter.role_index(), 1);
        assert_eq!(app.typewriter.text(), "E");
    }

    #[test]
    fn selecting_a_language_issues_a_sequenced_task() {
        let (_dir, config) = fixture(&[("pt", PT), ("en", EN)]);
        let mut app = sized(PortfolioApp::new(config));

        let cmd = app.select_language("en".to_string());
        let Cmd::Task(job) = cmd else {
            panic!("expected a background task");
        };
        let Msg::LanguageLoaded { seq, code, result } = job() else {
            panic!("expected a load completion");
        };
        assert_eq!(seq, 1);
        assert_eq!(code, "en");

        app.update(Msg::LanguageLoaded { seq, code, result });
        assert_eq!(app.page.language, "en");
        assert_eq!(app.lang_menu.active_code(), Some("en"));
        assert_eq!(app.page.role_source(), "Engineer, Writer");
        assert_eq!(app.store.load().language, "en");
    }

    #[test]
    fn successful_load_restarts_the_typewriter_chain() {
        let (_dir, config) = fixture(&[("pt", PT), ("en", EN)]);
        let mut app = sized(PortfolioApp::new(config));
        app.update(Msg::TypeTick);
        app.update(Msg::TypeTick);
        assert_eq!(app.typewriter.text(), "En");

        let dict: Dictionary = serde_json::from_str(EN).unwrap();
        app.load_seq = 3;
        let cmd = app.language_loaded(3, "en".to_string(), Ok(dict));
        // Fresh chain from scratch; the returned tick replaces the pending one.
        assert!(matches!(cmd, Cmd::Tick(_, Msg::TypeTick)));
        assert_eq!(app.typewriter.text(), "");
        assert_eq!(app.typewriter.role_index(), 0);
    }

    #[test]
    fn stale_load_completions_are_discarded() {
        let (_dir, config) = fixture(&[("pt", PT), ("en", EN)]);
        let mut app = sized(PortfolioApp::new(config));

        // Two rapid selections: only the second may apply.
        let first = app.select_language("en".to_string());
        let second = app.select_language("pt".to_string());

        let Cmd::Task(second_job) = second else {
            panic!("expected task")
        };
        let Cmd::Task(first_job) = first else {
            panic!("expected task")
        };

        // Later response resolves first; then the stale one arrives.
        app.update(second_job());
        assert_eq!(app.page.language, "pt");
        app.update(first_job());
        assert_eq!(app.page.language, "pt", "stale completion must not win");
        assert_eq!(app.lang_menu.active_code(), Some("pt"));
    }

    #[test]
    fn failed_load_leaves_selection_and_prefs_untouched() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        assert_eq!(app.store.load().language, "pt");

        let cmd = app.select_language("xx".to_string());
        let Cmd::Task(job) = cmd else { panic!("expected task") };
        app.update(job());

        // Previous translation, marker, and preference all stay.
        assert_eq!(app.page.language, "pt");
        assert_eq!(app.lang_menu.active_code(), Some("pt"));
        assert_eq!(app.store.load().language, "pt");
        assert!(app.page.role_source().contains("Engenheiro"));
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        assert_eq!(app.theme.mode, ThemeMode::Dark);

        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('t'))));
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert_eq!(app.store.load().theme, "light");

        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('t'))));
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert_eq!(app.store.load().theme, "dark");
    }

    #[test]
    fn persisted_theme_is_restored_on_startup() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let store = PrefStore::new(&config.prefs_path);
        store
            .save(&Preferences {
                theme: "light".into(),
                language: "pt".into(),
            })
            .unwrap();
        let app = PortfolioApp::new(config);
        assert_eq!(app.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn esc_closes_open_menus() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('m'))));
        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('l'))));
        assert!(app.nav.is_open());
        assert!(app.lang_menu.is_open());

        app.update(Msg::Key(KeyEvent::press(KeyCode::Esc)));
        assert!(!app.nav.is_open());
        assert!(!app.lang_menu.is_open());
    }

    #[test]
    fn outside_click_closes_menus() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('m'))));
        assert!(app.nav.is_open());

        app.update(Msg::Mouse(MouseEvent {
            kind: MouseEventKind::Down(tfolio_core::MouseButton::Left),
            x: 2,
            y: 20,
            modifiers: Modifiers::empty(),
        }));
        assert!(!app.nav.is_open());
    }

    #[test]
    fn anchor_jump_eases_toward_section_and_activates_it() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = PortfolioApp::new(config);
        // Small viewport so the last section actually requires scrolling.
        app.update(Msg::from(Event::Resize {
            width: 80,
            height: 8,
        }));

        app.update(Msg::Key(KeyEvent::press(KeyCode::Char('3'))));
        for _ in 0..100 {
            app.update(Msg::UiTick);
        }
        let expected = app
            .page
            .section_top(2)
            .saturating_sub(crate::scroll::ANCHOR_MARGIN)
            .min(app.max_offset());
        assert_eq!(app.scroller.offset_rows(), expected);
        assert_eq!(app.nav.active(), 2);
    }

    #[test]
    fn ui_tick_reveals_visible_sections() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let mut app = sized(PortfolioApp::new(config));
        assert!(!app.page.sections[0].revealed);
        app.update(Msg::UiTick);
        assert!(app.page.sections[0].revealed);
    }

    #[test]
    fn view_renders_without_panicking_at_any_size() {
        let (_dir, config) = fixture(&[("pt", PT)]);
        let app = sized(PortfolioApp::new(config));
        for (w, h) in [(80, 24), (20, 5), (1, 1), (0, 0), (200, 60)] {
            let mut frame = Frame::new(w, h);
            app.view(&mut frame);
        }
    }
}
