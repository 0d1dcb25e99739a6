#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// One transcript entry. The transcript is append-only and lives only for
/// the page's lifetime; insertion order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}
