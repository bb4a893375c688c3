//! The page model: content elements bound to translation keys.
//!
//! This is the document side of the i18n contract. Elements constructed
//! with [`BoundText::bound`] carry a translation key; applying a dictionary
//! replaces their text when (and only when) the dictionary has that key.
//! Unbound elements and bound elements with no matching entry keep their
//! fallback content.

use tfolio_i18n::Dictionary;

/// Key of the element whose comma-separated text feeds the typewriter.
pub const ROLE_LIST_KEY: &str = "role-list";

/// Rows the hero block occupies at the top of the scrollable content.
pub const HERO_HEIGHT: u16 = 6;

/// A piece of page text, optionally bound to a translation key.
#[derive(Debug, Clone)]
pub struct BoundText {
    key: Option<String>,
    text: String,
}

impl BoundText {
    /// Text bound to a translation key, with fallback content shown until
    /// a dictionary provides the key.
    #[must_use]
    pub fn bound(key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            text: fallback.into(),
        }
    }

    /// Untranslated text; never touched by dictionary application.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn apply(&mut self, dict: &Dictionary) {
        if let Some(key) = &self.key {
            if let Some(value) = dict.get(key) {
                self.text = value.to_string();
            }
        }
    }
}

/// One anchored section of the page.
#[derive(Debug, Clone)]
pub struct Section {
    /// Anchor id, stable across languages.
    pub id: &'static str,
    pub title: BoundText,
    pub body: Vec<BoundText>,
    /// Set once the section has entered the viewport; drives fade-in.
    pub revealed: bool,
}

impl Section {
    fn new(id: &'static str, title: BoundText, body: Vec<BoundText>) -> Self {
        Self {
            id,
            title,
            body,
            revealed: false,
        }
    }

    /// Rows this section occupies: title, body lines, one trailing blank.
    #[must_use]
    pub fn height(&self) -> u16 {
        1 + self.body.len() as u16 + 1
    }
}

/// The whole page: hero block plus sections.
#[derive(Debug, Clone)]
pub struct Page {
    /// Current language code, the document-root `lang` analog.
    pub language: String,
    pub name: BoundText,
    pub greeting: BoundText,
    pub role_list: BoundText,
    pub sections: Vec<Section>,
}

impl Page {
    /// The page with its fallback (Portuguese) content.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: "pt".to_string(),
            name: BoundText::plain("Rafael Monteiro"),
            greeting: BoundText::bound("hero-greeting", "Olá, eu sou"),
            role_list: BoundText::bound(
                ROLE_LIST_KEY,
                "Engenheiro de Software, Escritor, Fotógrafo",
            ),
            sections: vec![
                Section::new(
                    "profile",
                    BoundText::bound("profile-title", "Perfil"),
                    vec![
                        BoundText::bound(
                            "profile-body-1",
                            "Desenvolvedor apaixonado por sistemas e interfaces.",
                        ),
                        BoundText::bound(
                            "profile-body-2",
                            "Dez anos construindo software para a web e o terminal.",
                        ),
                    ],
                ),
                Section::new(
                    "projects",
                    BoundText::bound("projects-title", "Projetos"),
                    vec![
                        BoundText::bound("projects-item-1", "• tfolio — este portfólio"),
                        BoundText::bound("projects-item-2", "• lume — gerador de sites estáticos"),
                        BoundText::bound("projects-item-3", "• vaga — rastreador de leitura"),
                    ],
                ),
                Section::new(
                    "contact",
                    BoundText::bound("contact-title", "Contato"),
                    vec![
                        BoundText::bound("contact-body-1", "rafael@example.com"),
                        BoundText::bound("contact-body-2", "github.com/rafaelmonteiro"),
                    ],
                ),
            ],
        }
    }

    /// Apply a dictionary to every bound element. Elements whose key is
    /// absent keep their current content; nothing errors.
    pub fn apply(&mut self, dict: &Dictionary) {
        self.name.apply(dict);
        self.greeting.apply(dict);
        self.role_list.apply(dict);
        for section in &mut self.sections {
            section.title.apply(dict);
            for line in &mut section.body {
                line.apply(dict);
            }
        }
    }

    /// The comma-delimited typewriter source, in the current language.
    #[must_use]
    pub fn role_source(&self) -> &str {
        self.role_list.text()
    }

    /// Section titles, for the nav links.
    #[must_use]
    pub fn nav_labels(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|s| s.title.text().to_string())
            .collect()
    }

    /// Top row of section `index` in content coordinates (row 0 is the top
    /// of the hero).
    #[must_use]
    pub fn section_top(&self, index: usize) -> u16 {
        let mut top = HERO_HEIGHT;
        for section in self.sections.iter().take(index) {
            top += section.height();
        }
        top
    }

    /// Total content height in rows.
    #[must_use]
    pub fn total_height(&self) -> u16 {
        self.section_top(self.sections.len())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn apply_replaces_only_present_keys() {
        let mut page = Page::new();
        let original_greeting = page.greeting.text().to_string();
        page.apply(&dict(&[("profile-title", "Profile")]));

        assert_eq!(page.sections[0].title.text(), "Profile");
        // Bound but absent from the dictionary: untouched.
        assert_eq!(page.greeting.text(), original_greeting);
    }

    #[test]
    fn plain_elements_are_never_translated() {
        let mut page = Page::new();
        page.name = BoundText::plain("Rafael Monteiro");
        page.apply(&dict(&[("name", "Someone Else")]));
        assert_eq!(page.name.text(), "Rafael Monteiro");
    }

    #[test]
    fn role_source_tracks_dictionary() {
        let mut page = Page::new();
        assert!(page.role_source().contains("Engenheiro"));
        page.apply(&dict(&[(ROLE_LIST_KEY, "Engineer, Writer")]));
        assert_eq!(page.role_source(), "Engineer, Writer");
    }

    #[test]
    fn section_tops_are_cumulative() {
        let page = Page::new();
        assert_eq!(page.section_top(0), HERO_HEIGHT);
        assert_eq!(
            page.section_top(1),
            HERO_HEIGHT + page.sections[0].height()
        );
        assert_eq!(
            page.total_height(),
            HERO_HEIGHT + page.sections.iter().map(Section::height).sum::<u16>()
        );
    }

    #[test]
    fn nav_labels_follow_titles() {
        let mut page = Page::new();
        page.apply(&dict(&[("projects-title", "Projects")]));
        assert_eq!(page.nav_labels()[1], "Projects");
    }
}
