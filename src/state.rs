/// Which result set a fetch fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Featured,
    Searched,
}

impl FetchKind {
    /// Fixed user-facing message shown when this kind of fetch fails
    pub fn error_message(self) -> &'static str {
        match self {
            FetchKind::Featured => "Tarifler yüklenirken bir hata oluştu!",
            FetchKind::Searched => "Arama sırasında bir hata oluştu!",
        }
    }
}

/// Loading flag and error text shared by both fetch kinds. Empty error means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub loading: bool,
    pub error: String,
}

impl Status {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: FetchKind,
    generation: u64,
}

/// Monotonic counter handing out fetch tickets.
///
/// A ticket may store its recipes only while it is the newest of its kind, and
/// may touch the shared [`Status`] only while it is the newest overall.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
    featured: u64,
    searched: u64,
}

impl Generation {
    pub fn issue(&mut self, kind: FetchKind) -> FetchTicket {
        self.current += 1;
        match kind {
            FetchKind::Featured => self.featured = self.current,
            FetchKind::Searched => self.searched = self.current,
        }
        FetchTicket {
            kind,
            generation: self.current,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.current
    }

    pub fn is_latest_of_kind(&self, ticket: &FetchTicket) -> bool {
        let latest = match ticket.kind {
            FetchKind::Featured => self.featured,
            FetchKind::Searched => self.searched,
        };
        ticket.generation == latest
    }
}
