/// Status token `screen -ls` prints for sessions with no attached terminal.
pub const DETACHED_MARKER: &str = "Detached";

/// One selectable line of `screen -ls` output. The raw text is kept as-is
/// for rendering; field access is derived on demand by trimming the
/// surrounding tabs and splitting on tab.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionEntry {
    raw: String,
}

impl SessionEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn fields(&self) -> Vec<&str> {
        self.raw.trim_matches('\t').split('\t').collect()
    }

    /// First tab-delimited field, the `PID.name` identifier screen accepts
    /// as a `-S`/`-x` target.
    pub fn identifier(&self) -> &str {
        self.raw
            .trim_matches('\t')
            .split('\t')
            .next()
            .unwrap_or_default()
    }

    pub fn is_detached(&self) -> bool {
        self.raw.contains(DETACHED_MARKER)
    }
}
