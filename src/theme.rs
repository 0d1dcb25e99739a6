use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-card: #f7f7f8;
    --color-text-primary: #111111;
    --color-text-muted: #5c5c5c;
    --color-border: #d9d9de;
    --color-primary: #111111;
    --color-primary-text: #ffffff;
    --color-chat-user-bg: #111111;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #efeff2;
    --color-chat-assistant-text: #111111;
    --color-dropzone-border: #c2c2c8;
    --color-dropzone-active: #111111;
    --color-input-bg: #ffffff;
    --color-input-border: #c2c2c8;
    --color-spinner: #5c5c5c;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.navbar { background: var(--color-bg-primary); border-color: var(--color-border); }
.btn-ghost:hover { background: var(--color-bg-card); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0b0d;
    --color-bg-card: #151519;
    --color-text-primary: #f2f2f2;
    --color-text-muted: #9b9ba3;
    --color-border: #2a2a31;
    --color-primary: #f2f2f2;
    --color-primary-text: #0b0b0d;
    --color-chat-user-bg: #f2f2f2;
    --color-chat-user-text: #0b0b0d;
    --color-chat-assistant-bg: #1b1b20;
    --color-chat-assistant-text: #f2f2f2;
    --color-dropzone-border: #3a3a42;
    --color-dropzone-active: #f2f2f2;
    --color-input-bg: #0b0b0d;
    --color-input-border: #2a2a31;
    --color-spinner: #9b9ba3;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.navbar { background: var(--color-bg-primary); border-color: var(--color-border); }
.btn-ghost:hover { background: var(--color-bg-card); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-primary); }
"#;
