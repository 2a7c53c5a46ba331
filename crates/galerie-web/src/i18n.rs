//! Language context provided by the navigation shell

use galerie_core::i18n::{translate, Lang};
use leptos::prelude::*;

use crate::storage;

#[derive(Clone, Copy)]
pub struct I18nContext {
    lang: RwSignal<Lang>,
}

impl I18nContext {
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    pub fn lang_signal(&self) -> RwSignal<Lang> {
        self.lang
    }

    /// Translation of `key` in the current language (reactive)
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.lang.get(), key)
    }

    /// Advance to the next language and remember the choice
    pub fn cycle(&self) {
        let next = self.lang.get_untracked().next();
        self.lang.set(next);
        storage::update_preferences(|prefs| prefs.lang = Some(next));
    }
}

/// Pick the language once: stored choice, else browser languages, else French
pub fn initial_lang() -> Lang {
    if let Some(lang) = storage::load_preferences().lang {
        return lang;
    }
    let languages = storage::browser_languages();
    Lang::detect(languages.iter().map(String::as_str))
}

pub fn provide_i18n() -> I18nContext {
    let context = I18nContext {
        lang: RwSignal::new(initial_lang()),
    };
    provide_context(context);
    context
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
