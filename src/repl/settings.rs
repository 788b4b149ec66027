use rustc_hash::FxHashMap;

/// Toggles for the REPL. Every setting is disabled unless switched on.
#[derive(Debug)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn is_enabled(&self, setting: &Setting) -> bool {
        match self.inner.get(setting) {
            Some(v) => *v,
            _ => false,
        }
    }

    pub fn as_vec(&self) -> Vec<(Setting, bool)> {
        let mut settings = Setting::all()
            .iter()
            .map(|s| (s.clone(), self.is_enabled(s)))
            .collect::<Vec<_>>();

        settings.sort_by_key(|(s, _)| s.to_string());
        settings
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        for setting in Setting::all() {
            settings.disable(setting.clone());
        }

        settings
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Setting {
    /// echo the tokens of each input
    Tokens,
    /// echo the source-AST of each input
    Ast,
    /// echo the target-AST of each input
    Target,
}

impl Setting {
    pub fn all() -> &'static [Setting] {
        &[Setting::Tokens, Setting::Ast, Setting::Target]
    }

    pub fn parse(input: &str) -> Option<Setting> {
        match input.to_lowercase().as_str() {
            "tokens" => Some(Setting::Tokens),
            "ast" => Some(Setting::Ast),
            "target" => Some(Setting::Target),
            _ => None,
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Setting::Tokens => "tokens",
            Setting::Ast => "ast",
            Setting::Target => "target",
        };

        fmt.write_str(name)
    }
}
